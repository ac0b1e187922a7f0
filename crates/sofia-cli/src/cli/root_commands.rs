use clap::{Args, Subcommand};

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Ask one question and print the answer
    Ask(AskArgs),

    /// Interactive session (/contact <email>, /reset, /history, /quit)
    Chat,

    /// Ask an administrator to follow up by e-mail
    Contact(ContactArgs),

    /// List the supplementary resources
    Resources(JsonArgs),

    /// Print the effective configuration with secrets redacted
    Config(JsonArgs),
}

#[derive(Debug, Args)]
pub struct AskArgs {
    /// The question; several words are joined with spaces
    #[arg(required = true, num_args = 1..)]
    pub words: Vec<String>,

    /// Print the full reply as JSON
    #[arg(long)]
    pub json: bool,
}

impl AskArgs {
    #[must_use]
    pub fn question(&self) -> String {
        self.words.join(" ")
    }
}

#[derive(Debug, Args)]
pub struct ContactArgs {
    /// Address the administrator should reply to
    #[arg(long)]
    pub email: String,

    /// The question that went unanswered
    #[arg(long)]
    pub question: String,
}

#[derive(Debug, Args)]
pub struct JsonArgs {
    /// Print JSON instead of text
    #[arg(long)]
    pub json: bool,
}
