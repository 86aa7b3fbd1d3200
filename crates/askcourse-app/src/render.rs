//! Plain-text rendering of chat messages and lecture tables.

use askcourse_client::{ChatState, Lecture, Message, Sender};

pub const START_HINT: &str = "Type a message to start the conversation";
const IMPLAUSIBLE_NOTE: &str = "(this answer may not be backed by the course material)";

/// Lines for one transcript message.
pub fn message_lines(message: &Message) -> Vec<String> {
    let prefix = match message.sender {
        Sender::User => "you",
        Sender::Bot => "bot",
    };
    let mut lines = vec![format!("{prefix}> {}", message.text)];

    if let Some(sources) = &message.sources {
        for (i, source) in sources.iter().enumerate() {
            lines.push(format!("    [{}] {}", i + 1, source_label(source)));
        }
    }
    if message.is_plausible == Some(false) {
        lines.push(format!("    {IMPLAUSIBLE_NOTE}"));
    }
    lines
}

/// Sources are opaque JSON; print strings bare and anything else compactly.
fn source_label(source: &serde_json::Value) -> String {
    match source {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Lines for a freshly started (or reset) chat.
pub fn transcript_lines(state: &ChatState) -> Vec<String> {
    let mut lines: Vec<String> = state.transcript.iter().flat_map(message_lines).collect();
    if state.transcript.len() < 2 {
        lines.push(START_HINT.to_string());
    }
    lines
}

/// Lines describing how the last request ended.
pub fn outcome_lines(state: &ChatState) -> Vec<String> {
    if let Some(error) = &state.error {
        return vec![format!("Error: {error}")];
    }
    match state.transcript.last() {
        Some(last) if last.sender == Sender::Bot => message_lines(last),
        _ => Vec::new(),
    }
}

/// Two-column status/name table, one row per lecture.
pub fn lecture_table(lectures: &[Lecture]) -> String {
    let width = lectures
        .iter()
        .map(|l| l.status.chars().count())
        .chain(std::iter::once("STATUS".len()))
        .max()
        .unwrap_or(0);

    let mut out = format!("{:<width$}  NAME\n", "STATUS");
    for lecture in lectures {
        out.push_str(&format!(
            "{:<width$}  {} <{}>\n",
            lecture.status, lecture.title, lecture.source
        ));
    }
    if lectures.is_empty() {
        out.push_str("(no lectures yet)\n");
    }
    out
}

/// Table to print for the `latest` snapshot, or `None` when there is no
/// snapshot yet or it matches the one already on screen.
pub fn table_update(shown: Option<&[Lecture]>, latest: Option<&[Lecture]>) -> Option<String> {
    let latest = latest?;
    (shown != Some(latest)).then(|| lecture_table(latest))
}
