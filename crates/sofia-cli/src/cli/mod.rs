use std::path::PathBuf;

use clap::Parser;

pub mod root_commands;

pub use root_commands::Commands;

/// Top-level CLI parser for the `sofia` binary.
#[derive(Debug, Parser)]
#[command(
    name = "sofia",
    version,
    about = "Sofia - assistente virtual com respostas baseadas no FAQ"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Extra config file layered over the user and project files
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Quiet mode (errors only, no spinners)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Verbose mode (debug logging)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    #[must_use]
    pub fn global_flags(&self) -> GlobalFlags {
        GlobalFlags {
            config: self.config.clone(),
            quiet: self.quiet,
        }
    }
}

/// Global flags available before or after subcommands.
#[derive(Clone, Debug)]
pub struct GlobalFlags {
    pub config: Option<PathBuf>,
    pub quiet: bool,
}

#[cfg(test)]
mod tests {
    use clap::{CommandFactory, Parser};
    use pretty_assertions::assert_eq;

    use super::{Cli, Commands};

    #[test]
    fn clap_command_tree_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn ask_joins_words() {
        let cli = Cli::try_parse_from(["sofia", "ask", "O", "que", "é", "a", "escola?"])
            .expect("cli should parse");
        let Commands::Ask(args) = cli.command else {
            panic!("expected ask");
        };
        assert_eq!(args.question(), "O que é a escola?");
        assert!(!args.json);
    }

    #[test]
    fn ask_requires_a_question() {
        assert!(Cli::try_parse_from(["sofia", "ask"]).is_err());
    }

    #[test]
    fn global_flags_parse_after_subcommand() {
        let cli = Cli::try_parse_from(["sofia", "chat", "--quiet", "--config", "sofia.toml"])
            .expect("cli should parse");
        assert!(cli.quiet);
        assert!(matches!(cli.command, Commands::Chat));
        let flags = cli.global_flags();
        assert_eq!(flags.config.as_deref(), Some(std::path::Path::new("sofia.toml")));
    }

    #[test]
    fn contact_needs_email_and_question() {
        let cli = Cli::try_parse_from([
            "sofia",
            "contact",
            "--email",
            "a@b.co",
            "--question",
            "Onde fica o templo?",
        ])
        .expect("cli should parse");
        let Commands::Contact(args) = cli.command else {
            panic!("expected contact");
        };
        assert_eq!(args.email, "a@b.co");
        assert_eq!(args.question, "Onde fica o templo?");

        assert!(Cli::try_parse_from(["sofia", "contact", "--email", "a@b.co"]).is_err());
    }

    #[test]
    fn resources_and_config_take_json() {
        let cli = Cli::try_parse_from(["sofia", "resources", "--json"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Resources(ref a) if a.json));
        let cli = Cli::try_parse_from(["sofia", "config"]).expect("cli should parse");
        assert!(matches!(cli.command, Commands::Config(ref a) if !a.json));
    }
}
