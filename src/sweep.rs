//! Field sweep over chat-message records.
//!
//! Chat hosts store a message's text in a primary `mes` field and mirror it
//! into auxiliary display fields under `extra`. The sweep applies the
//! cleaner to each text field independently and reports the summed removed
//! count; fields are written back only when the text actually changed.
//! Everything else on a record round-trips untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::clean::clean;
use crate::config::CleanOptions;

/// One message record from a chat transcript.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Primary message text.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mes: Option<String>,
    /// Auxiliary display fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub extra: Option<MessageExtra>,
    /// Fields this crate does not interpret.
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

/// Auxiliary display texts attached to a [`ChatMessage`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageExtra {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original: Option<String>,
    #[serde(flatten)]
    pub rest: Map<String, Value>,
}

fn clean_field(field: &mut Option<String>, opts: &CleanOptions) -> usize {
    let Some(text) = field.as_deref() else {
        return 0;
    };
    let outcome = clean(text, opts);
    let removed = outcome.removed;
    if outcome.text != text {
        *field = Some(outcome.text);
    }
    removed
}

/// Clean every text field of a message in place.
///
/// Returns the summed removed count across fields.
///
/// # Examples
///
/// ```
/// use unellipsis::{ChatMessage, CleanOptions, sweep_message};
///
/// let mut msg = ChatMessage {
///     mes: Some("So... it begins".to_string()),
///     ..ChatMessage::default()
/// };
/// let removed = sweep_message(&mut msg, &CleanOptions::default());
/// assert_eq!(msg.mes.as_deref(), Some("So it begins"));
/// assert_eq!(removed, 3);
/// ```
pub fn sweep_message(msg: &mut ChatMessage, opts: &CleanOptions) -> usize {
    let mut removed = clean_field(&mut msg.mes, opts);
    if let Some(extra) = msg.extra.as_mut() {
        removed += clean_field(&mut extra.display_text, opts);
        removed += clean_field(&mut extra.original, opts);
    }
    removed
}

/// Sweep a JSON-lines chat transcript.
///
/// Each non-blank line is parsed as a message record, swept, and written
/// back out. Lines that do not parse pass through unchanged, as do records
/// the sweep left untouched, so an unrelated log line never aborts a
/// transcript.
#[must_use]
pub fn sweep_lines(lines: &[String], opts: &CleanOptions) -> (Vec<String>, usize) {
    let mut total = 0usize;
    let out = lines
        .iter()
        .map(|line| {
            if line.trim().is_empty() {
                return line.clone();
            }
            let Ok(mut msg) = serde_json::from_str::<ChatMessage>(line) else {
                return line.clone();
            };
            let before = msg.clone();
            total += sweep_message(&mut msg, opts);
            if msg == before {
                line.clone()
            } else {
                serde_json::to_string(&msg).unwrap_or_else(|_| line.clone())
            }
        })
        .collect();
    (out, total)
}
