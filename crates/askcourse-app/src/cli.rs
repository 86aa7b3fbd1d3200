use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Ask questions about a course and watch its lectures.
#[derive(Parser, Debug)]
#[command(name = "askcourse", version, about)]
pub struct Args {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL override.
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    /// Log level override (e.g. debug, askcourse=trace).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Interactive chat (default).
    Chat,
    /// Watch the lecture list.
    Lectures,
}

impl Args {
    pub fn command(&self) -> Command {
        self.command.unwrap_or(Command::Chat)
    }
}

pub fn parse() -> Args {
    Args::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_chat() {
        let args = Args::try_parse_from(["askcourse"]).unwrap();
        assert_eq!(args.command(), Command::Chat);
        assert!(args.config.is_none());
    }

    #[test]
    fn global_flags_after_subcommand() {
        let args = Args::try_parse_from([
            "askcourse",
            "lectures",
            "--base-url",
            "http://course.local",
            "--log-level",
            "debug",
        ])
        .unwrap();
        assert_eq!(args.command(), Command::Lectures);
        assert_eq!(args.base_url.as_deref(), Some("http://course.local"));
        assert_eq!(args.log_level.as_deref(), Some("debug"));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Args::try_parse_from(["askcourse", "grade"]).is_err());
    }
}
