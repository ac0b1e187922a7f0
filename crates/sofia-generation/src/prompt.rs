//! Grounded prompt construction.
//!
//! The prompt restricts the model to the retrieved FAQ entries: a persona
//! line, numbered constraints (one of them telling the model to say it lacks
//! information when the context is insufficient), the context block, and the
//! user question.

use std::fmt::Write as _;

use sofia_config::AssistantConfig;
use sofia_core::RetrievalMatch;

const INSTRUCTIONS_HEADER: &str = "INSTRUÇÕES IMPORTANTES:";
const QUESTION_LABEL: &str = "Pergunta do usuário:";

/// Renders prompts for one assistant persona.
#[derive(Debug, Clone)]
pub struct PromptTemplate {
    name: String,
    organization: String,
    persona: String,
    instructions: Vec<String>,
}

impl Default for PromptTemplate {
    fn default() -> Self {
        Self::from_config(&AssistantConfig::default())
    }
}

impl PromptTemplate {
    /// Build a template, substituting `{name}` and `{organization}` once.
    #[must_use]
    pub fn from_config(config: &AssistantConfig) -> Self {
        let fill = |text: &str| {
            text.replace("{name}", &config.name)
                .replace("{organization}", &config.organization)
        };
        Self {
            name: config.name.clone(),
            organization: config.organization.clone(),
            persona: fill(&config.persona),
            instructions: config.instructions.iter().map(|line| fill(line)).collect(),
        }
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Render the full prompt for `question` grounded on `matches`.
    ///
    /// The context block is omitted entirely when there are no matches; the
    /// constraint lines still tell the model to admit it lacks information.
    #[must_use]
    pub fn render(&self, question: &str, matches: &[RetrievalMatch]) -> String {
        let mut prompt = String::new();
        prompt.push_str(&self.persona);
        prompt.push_str("\n\n");
        prompt.push_str(INSTRUCTIONS_HEADER);
        prompt.push('\n');
        for (i, line) in self.instructions.iter().enumerate() {
            let _ = writeln!(prompt, "{}. {line}", i + 1);
        }
        prompt.push('\n');

        if !matches.is_empty() {
            prompt.push_str(&self.context_block(matches));
        }

        let _ = write!(
            prompt,
            "{QUESTION_LABEL} {question}\n\nResposta da {}:",
            self.name
        );
        prompt
    }

    /// The context block listing each match in rank order, numbered from 1.
    #[must_use]
    pub fn context_block(&self, matches: &[RetrievalMatch]) -> String {
        let mut block = format!(
            "Baseando-se EXCLUSIVAMENTE nas seguintes informações do FAQ da {}:\n\n",
            self.organization
        );
        for (i, m) in matches.iter().enumerate() {
            let _ = write!(
                block,
                "FAQ {}:\nPergunta: {}\nResposta: {}\n\n",
                i + 1,
                m.entry.question,
                m.entry.answer
            );
        }
        block
    }
}
