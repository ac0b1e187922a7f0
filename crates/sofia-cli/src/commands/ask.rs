use crate::cli::root_commands::AskArgs;
use crate::context::AppContext;
use crate::output;
use crate::progress::Progress;
use sofia_core::Conversation;

const CONTACT_HINT: &str = "Para solicitar contato: sofia contact --email <seu@email.com> --question \"<sua pergunta>\"";

pub async fn handle(args: &AskArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let question = args.question();
    let mut conversation = Conversation::new();

    let spinner = Progress::spinner(&format!("{} está pensando...", ctx.config.assistant.name));
    let reply = ctx.assistant.ask(&mut conversation, &question).await;
    spinner.finish_clear();
    let reply = reply?;

    if args.json {
        return output::print_json(&reply);
    }
    print!(
        "{}",
        output::render_reply(&ctx.config.assistant.name, &reply, CONTACT_HINT)
    );
    Ok(())
}
