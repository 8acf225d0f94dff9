//! Marker-based extraction of fields from free-text model output.
//!
//! Nothing here understands the text. Each function searches for a literal
//! marker and slices around it, so a model that ignores the expected layout
//! produces a [`ParseError`] or an empty result rather than a panic.

use crate::error::ParseError;

pub const TOPIC_MARKER: &str = "Topic:";
pub const QUESTION_MARKER: &str = "Question:";
pub const CORRECTION_MARKER: &str = "Corrected text: ";

/// A generated essay topic and the question to answer about it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicQuestion {
    pub topic: String,
    pub question: String,
}

/// Read `Topic:` and `Question:` lines from a model response.
///
/// Each marker is located independently at its first occurrence; the value is
/// the rest of that line, trimmed.
pub fn parse_topic_and_question(raw: &str) -> Result<TopicQuestion, ParseError> {
    let topic = field_after(raw, TOPIC_MARKER)?;
    let question = field_after(raw, QUESTION_MARKER)?;
    Ok(TopicQuestion { topic, question })
}

fn field_after(raw: &str, marker: &'static str) -> Result<String, ParseError> {
    let start = raw.find(marker).ok_or(ParseError::MissingMarker(marker))? + marker.len();
    let rest = &raw[start..];
    let line = rest.split('\n').next().unwrap_or_default().trim();
    if line.is_empty() {
        return Err(ParseError::EmptyField(marker));
    }
    Ok(line.to_string())
}

/// Lines mentioning an error, trimmed, in their original order.
pub fn extract_error_lines(raw: &str) -> Vec<String> {
    raw.split('\n')
        .filter(|line| line.contains("Error") || line.to_lowercase().contains("error"))
        .map(|line| line.trim().to_string())
        .collect()
}

/// Text after the last `Corrected text: ` marker, or `None` when there is no marker.
pub fn find_corrected_text(raw: &str) -> Option<String> {
    raw.rfind(CORRECTION_MARKER)
        .map(|idx| raw[idx + CORRECTION_MARKER.len()..].trim().to_string())
}

/// Like [`find_corrected_text`], but falls back to the whole (trimmed) response.
pub fn extract_corrected_text(raw: &str) -> String {
    find_corrected_text(raw).unwrap_or_else(|| raw.trim().to_string())
}
