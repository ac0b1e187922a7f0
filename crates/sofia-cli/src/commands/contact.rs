use anyhow::Context;
use sofia_config::SofiaConfig;
use sofia_core::ContactRequest;
use sofia_notify::{EscalationError, EscalationManager, PushoverNotifier};

use crate::cli::root_commands::ContactArgs;

/// Send a follow-up request without a conversation. The address is still
/// validated.
pub async fn handle(args: &ContactArgs, config: &SofiaConfig) -> anyhow::Result<()> {
    let notifier =
        PushoverNotifier::new(&config.notify).context("failed to build the notification client")?;
    let manager = EscalationManager::new(notifier, config.assistant.name.as_str());
    let request = ContactRequest::new(args.email.as_str(), args.question.as_str());

    match manager.request_followup(&request).await {
        Ok(true) => {
            println!("✅ Sua solicitação foi enviada! Nosso administrador entrará em contato em breve.");
            Ok(())
        }
        Ok(false) => anyhow::bail!("the notification channel did not accept the request"),
        Err(error @ EscalationError::InvalidContactAddress { .. }) => {
            Err(error).context("❌ Por favor, insira um e-mail válido.")
        }
        Err(error) => Err(error).context("⚠️ Não foi possível enviar sua solicitação no momento."),
    }
}
