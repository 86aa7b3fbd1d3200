//! Line-oriented chat front-end.

use askcourse_client::ChatController;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::render;

#[derive(Debug, PartialEq, Eq)]
pub enum ReplCommand {
    Ask(String),
    Regenerate,
    New,
    Quit,
    Empty,
}

impl ReplCommand {
    pub fn parse(line: &str) -> Self {
        let line = line.trim();
        match line {
            "" => Self::Empty,
            "/regenerate" | "/r" => Self::Regenerate,
            "/new" | "/n" => Self::New,
            "/quit" | "/q" | "/exit" => Self::Quit,
            question => Self::Ask(question.to_string()),
        }
    }
}

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{line}");
    }
}

/// Read questions from stdin until EOF or `/quit`.
///
/// Each request is awaited before the next line is read, so nothing is
/// dispatched while the controller is busy.
pub async fn run(chat: &ChatController) -> askcourse_common::Result<()> {
    println!("Commands: /regenerate, /new, /quit");
    print_lines(render::transcript_lines(&chat.state()));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match ReplCommand::parse(&line) {
            ReplCommand::Empty => continue,
            ReplCommand::Quit => break,
            ReplCommand::New => {
                chat.reset();
                println!("--- new chat ---");
                print_lines(render::transcript_lines(&chat.state()));
            }
            ReplCommand::Regenerate => {
                if chat.regenerate().await {
                    print_lines(render::outcome_lines(&chat.state()));
                } else {
                    println!("Nothing to regenerate yet.");
                }
            }
            ReplCommand::Ask(question) => {
                chat.send(question, None).await;
                print_lines(render::outcome_lines(&chat.state()));
            }
        }
    }
    Ok(())
}
