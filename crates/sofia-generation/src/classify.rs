//! Satisfaction classification of generated answers.

use sofia_core::Verdict;

/// Decides whether an answer resolved the question.
///
/// Closures `Fn(&str) -> Verdict` implement this too, so a different
/// strategy can be swapped in without a new type.
pub trait SatisfactionClassifier: Send + Sync {
    fn classify(&self, answer: &str) -> Verdict;
}

impl<F> SatisfactionClassifier for F
where
    F: Fn(&str) -> Verdict + Send + Sync,
{
    fn classify(&self, answer: &str) -> Verdict {
        self(answer)
    }
}

/// Flags answers containing an insufficiency phrase, case-insensitively.
#[derive(Debug, Clone)]
pub struct MarkerClassifier {
    markers: Vec<String>,
}

impl MarkerClassifier {
    /// Blank markers are discarded; they would match every answer.
    pub fn new<I, S>(markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            markers: markers
                .into_iter()
                .map(|m| m.as_ref().trim().to_lowercase())
                .filter(|m| !m.is_empty())
                .collect(),
        }
    }

    #[must_use]
    pub fn markers(&self) -> &[String] {
        &self.markers
    }

    /// The first marker found in `answer`, if any.
    #[must_use]
    pub fn matched_marker(&self, answer: &str) -> Option<&str> {
        let lower = answer.to_lowercase();
        self.markers
            .iter()
            .find(|m| lower.contains(m.as_str()))
            .map(String::as_str)
    }
}

impl SatisfactionClassifier for MarkerClassifier {
    fn classify(&self, answer: &str) -> Verdict {
        if self.matched_marker(answer).is_some() {
            Verdict::Unsatisfactory
        } else {
            Verdict::Satisfactory
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use sofia_config::EscalationConfig;

    fn classifier() -> MarkerClassifier {
        MarkerClassifier::new(&EscalationConfig::default().markers)
    }

    #[rstest]
    #[case("Desculpe, NÃO TENHO INFORMAÇÕES sobre isso.", Verdict::Unsatisfactory)]
    #[case("Infelizmente não possuo informações suficientes.", Verdict::Unsatisfactory)]
    #[case("Não encontrei nada a respeito.", Verdict::Unsatisfactory)]
    #[case("Esse material não está disponível.", Verdict::Unsatisfactory)]
    #[case("A escola foi fundada em 1924.", Verdict::Satisfactory)]
    #[case("", Verdict::Satisfactory)]
    fn classifies_by_marker(#[case] answer: &str, #[case] expected: Verdict) {
        assert_eq!(classifier().classify(answer), expected);
    }

    #[test]
    fn reports_matched_marker() {
        assert_eq!(
            classifier().matched_marker("Eu não encontrei isso"),
            Some("não encontrei")
        );
    }

    #[test]
    fn blank_markers_are_ignored() {
        let c = MarkerClassifier::new(["", "  ", "sem dados"]);
        assert_eq!(c.markers(), ["sem dados"]);
        assert_eq!(c.classify("tudo certo"), Verdict::Satisfactory);
    }

    #[test]
    fn closures_are_classifiers() {
        let always = |_: &str| Verdict::Unsatisfactory;
        assert_eq!(always.classify("anything"), Verdict::Unsatisfactory);
    }
}
