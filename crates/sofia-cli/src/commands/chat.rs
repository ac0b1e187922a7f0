//! Line-oriented interactive session.

use sofia_assistant::AskError;
use sofia_core::Conversation;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::context::AppContext;
use crate::output;
use crate::progress::Progress;

const CONTACT_HINT: &str = "Digite /contact <seu@email.com> para solicitar contato.";

/// One parsed input line.
#[derive(Debug, PartialEq, Eq)]
enum Input<'a> {
    Question(&'a str),
    Contact(&'a str),
    Reset,
    History,
    Quit,
    Help,
    Blank,
}

fn parse_input(line: &str) -> Input<'_> {
    let line = line.trim();
    if line.is_empty() {
        return Input::Blank;
    }
    let Some(command) = line.strip_prefix('/') else {
        return Input::Question(line);
    };
    let (name, rest) = command.split_once(char::is_whitespace).unwrap_or((command, ""));
    match name {
        "contact" | "contato" => Input::Contact(rest.trim()),
        "reset" | "limpar" => Input::Reset,
        "history" | "historico" => Input::History,
        "quit" | "exit" | "sair" => Input::Quit,
        _ => Input::Help,
    }
}

pub async fn handle(ctx: &AppContext) -> anyhow::Result<()> {
    let name = &ctx.config.assistant.name;
    println!(
        "Olá! Eu sou {name}, sua assistente virtual. Estou aqui para responder suas perguntas sobre a {}.",
        ctx.config.assistant.organization
    );
    println!("Comandos: /contact <email>, /reset, /history, /quit\n");

    let mut conversation = Conversation::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        match parse_input(&line) {
            Input::Blank => {}
            Input::Question(question) => {
                let spinner = Progress::spinner(&format!("{name} está pensando..."));
                let reply = ctx.assistant.ask(&mut conversation, question).await;
                spinner.finish_clear();
                match reply {
                    Ok(reply) => println!("{}", output::render_reply(name, &reply, CONTACT_HINT)),
                    Err(AskError::EmptyQuestion) => {}
                }
            }
            Input::Contact(email) => {
                if email.is_empty() {
                    println!("Uso: /contact <seu@email.com>");
                    continue;
                }
                let outcome = ctx.assistant.request_followup(&mut conversation, email).await;
                println!("{}", output::followup_message(&outcome));
            }
            Input::Reset => {
                conversation.reset();
                println!("Conversa reiniciada.");
            }
            Input::History => {
                if conversation.is_empty() {
                    println!("Nenhuma pergunta ainda.");
                } else {
                    print!("{}", output::render_history(name, conversation.turns()));
                }
            }
            Input::Help => println!("Comandos: /contact <email>, /reset, /history, /quit"),
            Input::Quit => break,
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_commands_and_questions() {
        assert_eq!(parse_input("  O que é a escola?  "), Input::Question("O que é a escola?"));
        assert_eq!(parse_input("/contact  a@b.co "), Input::Contact("a@b.co"));
        assert_eq!(parse_input("/contact"), Input::Contact(""));
        assert_eq!(parse_input("/reset"), Input::Reset);
        assert_eq!(parse_input("/history"), Input::History);
        assert_eq!(parse_input("/sair"), Input::Quit);
        assert_eq!(parse_input("/what"), Input::Help);
        assert_eq!(parse_input("   "), Input::Blank);
    }
}
