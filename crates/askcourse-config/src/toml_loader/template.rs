//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# askcourse configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[api]
# base_url = "http://localhost:8080"
# connect_timeout_secs = 10    # 1-60
# request_timeout_secs = 120   # 1-600

[chat]
# greeting = "Hi! What can I help you with?"
# What to do with an answer that arrives after "new chat":
#   "append"  - add it to the new transcript
#   "discard" - drop it
# stale_replies = "append"

[lectures]
# poll_interval_ms = 2000      # 100-600000

[logging]
# level = "askcourse=info"
"##
}
