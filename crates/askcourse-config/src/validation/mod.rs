//! Full configuration validation.
//!
//! Each section has its own check; this orchestrator calls them all and
//! collects errors into a single `ConfigError`.

mod helpers;


use askcourse_common::ConfigError;
use reqwest::Url;

use crate::schema::AskCourseConfig;
use helpers::{validate_range, validate_range_u64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &AskCourseConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_api(&mut errors, config);
    validate_chat(&mut errors, config);
    validate_lectures(&mut errors, config);
    validate_logging(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}

fn validate_api(errors: &mut Vec<String>, config: &AskCourseConfig) {
    let api = &config.api;
    match Url::parse(&api.base_url) {
        Ok(url) if matches!(url.scheme(), "http" | "https") => {}
        Ok(url) => errors.push(format!(
            "api.base_url scheme '{}' is not http or https",
            url.scheme()
        )),
        Err(e) => errors.push(format!("api.base_url '{}' is not a valid URL: {e}", api.base_url)),
    }
    validate_range(errors, "api.connect_timeout_secs", api.connect_timeout_secs, 1, 60);
    validate_range(errors, "api.request_timeout_secs", api.request_timeout_secs, 1, 600);
}

fn validate_chat(errors: &mut Vec<String>, config: &AskCourseConfig) {
    if config.chat.greeting.trim().is_empty() {
        errors.push("chat.greeting must not be empty".into());
    }
}

fn validate_lectures(errors: &mut Vec<String>, config: &AskCourseConfig) {
    validate_range_u64(
        errors,
        "lectures.poll_interval_ms",
        config.lectures.poll_interval_ms,
        100,
        600_000,
    );
}

fn validate_logging(errors: &mut Vec<String>, config: &AskCourseConfig) {
    if config.logging.level.trim().is_empty() {
        errors.push("logging.level must not be empty".into());
    }
}
