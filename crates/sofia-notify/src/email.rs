use std::sync::LazyLock;

use regex::Regex;

/// One `@`, a non-empty local part, and a dot inside the domain part.
const EMAIL_PATTERN: &str = r"^[^@\s]+@[^@\s]+\.[^@\s]+$";

static EMAIL: LazyLock<Result<Regex, regex::Error>> = LazyLock::new(|| Regex::new(EMAIL_PATTERN));

/// Permissive shape check for a contact address.
///
/// This is a gate against typos, not a deliverability check. Surrounding
/// whitespace is ignored.
#[must_use]
pub fn validate_email(address: &str) -> bool {
    match &*EMAIL {
        Ok(re) => re.is_match(address.trim()),
        Err(e) => {
            tracing::error!(error = %e, "email pattern failed to compile");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("a@b.co", true)]
    #[case("maria.silva@exemplo.com.br", true)]
    #[case("  a@b.co ", true)]
    #[case("not-an-email", false)]
    #[case("a@@b.co", false)]
    #[case("a@b@c.co", false)]
    #[case("a@b", false)]
    #[case("@b.co", false)]
    #[case("a@.", false)]
    #[case("a b@c.co", false)]
    #[case("", false)]
    fn email_shape(#[case] address: &str, #[case] valid: bool) {
        assert_eq!(validate_email(address), valid, "{address:?}");
    }

    #[test]
    fn pattern_compiles() {
        assert!(EMAIL.is_ok());
    }
}
