use std::io::{self, BufRead, Write};

use colored::Colorize;
use spinners::{Spinner, Spinners};

use crate::{
    client::AssistantClient,
    transcript::{Role, Transcript},
};

mod client;
mod transcript;

mod env {
    pub const DEEPSEEK_API_KEY: &str = "DEEPSEEK_API_KEY";
    pub const BASE_URL: &str = "AIDESK_BASE_URL";
}

const DEFAULT_BASE_URL: &str = "http://localhost:3000";

// Canned quick actions, same wording as the web client's buttons.
const QUICK_WEBSITE: &str = "Create a professional portfolio website with dark theme";
const QUICK_EMAIL: &str = "Compose an email to my team about the project update";
const QUICK_DEPLOY: &str = "Deploy my website to production";

struct Session {
    api_key: String,
    client: AssistantClient,
    transcript: Transcript,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let base_url =
        std::env::var(env::BASE_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
    let mut session = Session {
        api_key: std::env::var(env::DEEPSEEK_API_KEY).unwrap_or_default(),
        client: AssistantClient::new(base_url),
        transcript: Transcript::new(),
    };

    println!("{}", "Personal AI Assistant".bold());
    print_status(&session);
    println!("Type a command, or /help for the quick actions.\n");
    render_message(Role::Assistant, &session.transcript.messages()[0].content);

    let stdin = io::stdin();
    loop {
        print!("{} ", ">".green().bold());
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        let message = match input {
            "/quit" | "/exit" => break,
            "/help" => {
                print_help();
                continue;
            }
            "/status" => {
                print_status(&session);
                continue;
            }
            "/website" => QUICK_WEBSITE.to_string(),
            "/email" => QUICK_EMAIL.to_string(),
            "/deploy" => QUICK_DEPLOY.to_string(),
            _ if input.starts_with("/key") => {
                session.api_key = input.trim_start_matches("/key").trim().to_string();
                print_status(&session);
                continue;
            }
            _ if input.starts_with("/url") => {
                let url = input.trim_start_matches("/url").trim();
                if url.is_empty() {
                    println!("Usage: /url <base url>");
                } else {
                    session.client.set_base_url(url);
                    print_status(&session);
                }
                continue;
            }
            _ if input.starts_with('/') => {
                println!("Unknown command: {input}. Try /help.");
                continue;
            }
            _ => input.to_string(),
        };

        submit(&mut session, message).await;
    }

    Ok(())
}

/// One chat turn: append the user message first, block on the single
/// outbound call behind a spinner, then append whatever text came back.
async fn submit(session: &mut Session, message: String) {
    session.transcript.push_user(message.clone());
    render_message(Role::User, &message);

    let mut spinner = Spinner::new(Spinners::Dots9, "Thinking...".into());
    let outcome = session.client.send_command(&message).await;
    spinner.stop_with_newline();

    if outcome.deployed {
        println!("{}", "✅ Deployment initiated!".green().bold());
    }
    render_message(Role::Assistant, &outcome.text);
    session.transcript.push_assistant(outcome.text);
}

fn render_message(role: Role, content: &str) {
    let label = match role {
        Role::User => "You:".green().bold(),
        Role::Assistant => "Assistant:".cyan().bold(),
    };
    println!("{label} {content}\n");
}

fn print_status(session: &Session) {
    let ai_status = if session.api_key.is_empty() {
        "offline (no API key)".yellow()
    } else {
        "online".green()
    };
    println!(
        "AI status: {} | endpoint: {}",
        ai_status,
        session.client.base_url()
    );
}

fn print_help() {
    println!("Quick actions:");
    println!("  /website   {QUICK_WEBSITE}");
    println!("  /email     {QUICK_EMAIL}");
    println!("  /deploy    {QUICK_DEPLOY}");
    println!("Session settings:");
    println!("  /key <value>   set the DeepSeek API key for this session");
    println!("  /url <value>   set the assistant backend base url");
    println!("  /status        show AI and endpoint status");
    println!("  /quit          leave the chat");
}
