mod cli;
mod lecture_watch;
mod render;
mod repl;

use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use askcourse_client::{ChatController, HttpCourseApi, LecturePoller};
use askcourse_common::AskCourseError;
use askcourse_config::AskCourseConfig;
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVE: &str = "askcourse=info";

fn init_logging(directive: &str) {
    let directive: Directive = directive.parse().unwrap_or_else(|_| {
        eprintln!("invalid log directive '{directive}', using {DEFAULT_LOG_DIRECTIVE}");
        DEFAULT_LOG_DIRECTIVE
            .parse()
            .expect("default log directive is valid")
    });
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(directive))
        .init();
}

fn build_api(config: &AskCourseConfig) -> askcourse_common::Result<Arc<HttpCourseApi>> {
    let api = HttpCourseApi::with_timeouts(
        config.api.base_url.clone(),
        Duration::from_secs(config.api.connect_timeout_secs.into()),
        Duration::from_secs(config.api.request_timeout_secs.into()),
    )
    .map_err(|e| AskCourseError::Api(e.to_string()))?;
    Ok(Arc::new(api))
}

async fn run(args: cli::Args, config: AskCourseConfig) -> askcourse_common::Result<()> {
    let api = build_api(&config)?;
    tracing::info!("using backend at {}", api.base_url());

    match args.command() {
        cli::Command::Chat => {
            let chat = ChatController::new(api)
                .with_greeting(config.chat.greeting.clone())
                .with_stale_replies(config.chat.stale_replies);
            repl::run(&chat).await
        }
        cli::Command::Lectures => {
            let poller = LecturePoller::new(api)
                .with_interval(Duration::from_millis(config.lectures.poll_interval_ms));
            lecture_watch::run(&poller).await
        }
    }
}

/// Load config and apply CLI overrides.
fn resolve_config(args: &cli::Args) -> askcourse_common::Result<AskCourseConfig> {
    let mut config = askcourse_config::load_config(args.config.as_deref())?;
    apply_cli_overrides(&mut config, args)?;
    Ok(config)
}

/// `--base-url` wins over the file and the environment, and is validated
/// like any other config value.
fn apply_cli_overrides(config: &mut AskCourseConfig, args: &cli::Args) -> askcourse_common::Result<()> {
    if let Some(ref url) = args.base_url {
        config.api.base_url = url.clone();
        askcourse_config::validation::validate(config)?;
    }
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = cli::parse();

    // Config is read before logging so its level can be used, then any
    // load error is reported once the subscriber is up.
    let config = resolve_config(&args);
    let log_directive = args
        .log_level
        .clone()
        .or_else(|| config.as_ref().ok().map(|c| c.logging.level.clone()))
        .unwrap_or_else(|| DEFAULT_LOG_DIRECTIVE.to_string());
    init_logging(&log_directive);

    tracing::info!("askcourse v{} starting", env!("CARGO_PKG_VERSION"));

    let config = match config {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("config error: {e}");
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match run(args, config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use askcourse_common::ConfigError;
    use clap::Parser;

    fn args(extra: &[&str]) -> cli::Args {
        cli::Args::try_parse_from(std::iter::once("askcourse").chain(extra.iter().copied())).unwrap()
    }

    #[test]
    fn base_url_flag_overrides_config() {
        let mut config = AskCourseConfig::default();
        apply_cli_overrides(&mut config, &args(&["--base-url", "https://course.example"])).unwrap();
        assert_eq!(config.api.base_url, "https://course.example");
    }

    #[test]
    fn invalid_base_url_flag_is_rejected() {
        let mut config = AskCourseConfig::default();
        let result = apply_cli_overrides(&mut config, &args(&["--base-url", "ftp://course.example"]));
        assert!(matches!(
            result,
            Err(AskCourseError::Config(ConfigError::ValidationError(_)))
        ));
    }

    #[test]
    fn no_flag_leaves_config_untouched() {
        let mut config = AskCourseConfig::default();
        apply_cli_overrides(&mut config, &args(&[])).unwrap();
        assert_eq!(config.api.base_url, AskCourseConfig::default().api.base_url);
    }

    #[test]
    fn resolve_config_reads_file_then_flag() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "[lectures]\npoll_interval_ms = 500\n").unwrap();
        let path = path.to_str().unwrap();

        let config =
            resolve_config(&args(&["--config", path, "--base-url", "http://course.local"])).unwrap();
        assert_eq!(config.lectures.poll_interval_ms, 500);
        assert_eq!(config.api.base_url, "http://course.local");

        assert!(resolve_config(&args(&["--config", path, "--base-url", "not a url"])).is_err());
    }
}
