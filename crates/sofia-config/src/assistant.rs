//! Persona and prompt wording.

use serde::{Deserialize, Serialize};

fn default_name() -> String {
    String::from("Sofia")
}

fn default_organization() -> String {
    String::from("Escola Internacional da Rosacruz Áurea")
}

fn default_persona() -> String {
    String::from(
        "Você é {name}, a assistente virtual da {organization}, simbolizada por um sol ☀️.",
    )
}

fn default_instructions() -> Vec<String> {
    [
        "Responda APENAS com base nas informações fornecidas do FAQ da {organization}",
        "Use um tom formal, respeitoso e acolhedor",
        "Se não houver informações suficientes no FAQ para responder adequadamente, diga claramente que não possui informações suficientes",
        "Mantenha o foco nos ensinamentos e princípios da {organization}",
        "Seja precisa e não invente informações",
        "Não faça referência aos FAQ",
    ]
    .into_iter()
    .map(String::from)
    .collect()
}

fn default_generation_error_prefix() -> String {
    String::from("Erro ao gerar resposta")
}

/// Wording of the grounded prompt.
///
/// `{name}` and `{organization}` placeholders are substituted in `persona`
/// and every instruction when the prompt is rendered.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AssistantConfig {
    #[serde(default = "default_name")]
    pub name: String,

    #[serde(default = "default_organization")]
    pub organization: String,

    /// Persona and style directive, first line of every prompt.
    #[serde(default = "default_persona")]
    pub persona: String,

    /// Numbered constraint lines restricting the answer to the supplied context.
    #[serde(default = "default_instructions")]
    pub instructions: Vec<String>,

    /// Prefix of the message shown in place of an answer when generation fails.
    #[serde(default = "default_generation_error_prefix")]
    pub generation_error_prefix: String,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            organization: default_organization(),
            persona: default_persona(),
            instructions: default_instructions(),
            generation_error_prefix: default_generation_error_prefix(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_carry_insufficiency_instruction() {
        let config = AssistantConfig::default();
        assert_eq!(config.name, "Sofia");
        assert_eq!(config.instructions.len(), 6);
        assert!(
            config
                .instructions
                .iter()
                .any(|line| line.contains("não possui informações suficientes"))
        );
    }
}
