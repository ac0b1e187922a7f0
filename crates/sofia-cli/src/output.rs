//! Text rendering of replies and follow-up outcomes.

use serde::Serialize;
use sofia_assistant::{FollowupOutcome, Reply};
use sofia_core::{ConversationTurn, ResourceLink, Role};

pub const CONTACT_OFFER: &str = "📧 Não encontrei uma resposta completa para sua pergunta.\n\
Se desejar, deixe seu e-mail que nosso administrador entrará em contato.";

/// Print a serializable value as pretty JSON.
pub fn print_json<T: Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[must_use]
pub fn render_reply(name: &str, reply: &Reply, contact_hint: &str) -> String {
    let mut out = format!("☀️ {name} responde:\n{}\n", reply.answer);

    if reply.contact_offered {
        out.push('\n');
        out.push_str(CONTACT_OFFER);
        out.push('\n');
        out.push_str(contact_hint);
        out.push('\n');
    }

    if !reply.suggestions.is_empty() {
        out.push('\n');
        out.push_str("🔗 Material complementar relacionado ao seu tema:\n");
        out.push_str(&render_links(&reply.suggestions));
    }
    out
}

#[must_use]
pub fn render_links(links: &[ResourceLink]) -> String {
    links
        .iter()
        .map(|l| format!("• {}: {}\n", l.name, l.url))
        .collect()
}

#[must_use]
pub fn render_history(name: &str, turns: &[ConversationTurn]) -> String {
    turns
        .iter()
        .map(|t| match t.role {
            Role::User => format!("Você perguntou: {}\n", t.text),
            Role::Assistant => format!("☀️ {name} respondeu: {}\n", t.text),
        })
        .collect()
}

#[must_use]
pub const fn followup_message(outcome: &FollowupOutcome) -> &'static str {
    match outcome {
        FollowupOutcome::Sent => {
            "✅ Sua solicitação foi enviada! Nosso administrador entrará em contato em breve."
        }
        FollowupOutcome::NotAccepted | FollowupOutcome::Failed(_) => {
            "⚠️ Não foi possível enviar sua solicitação no momento. Tente novamente mais tarde."
        }
        FollowupOutcome::Rejected(_) => "❌ Por favor, insira um e-mail válido.",
        FollowupOutcome::NotOffered => {
            "Não há pergunta pendente de contato. Faça uma pergunta primeiro."
        }
    }
}
