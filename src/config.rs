use crate::core::SamplingParams;
use crate::error::AIError;
use std::env;
use tracing::debug;

/// Find an API key by loading `.env` (silently ignored when absent) and then
/// reading the process environment. Blank values count as missing.
pub fn find_key(key_name: &str) -> Option<String> {
    let _ = dotenvy::dotenv();
    env::var(key_name).ok().filter(|key| !key.trim().is_empty())
}

/// Like [`find_key`], but a missing key is an error. The binary treats it as fatal.
pub fn require_key(key_name: &str) -> Result<String, AIError> {
    find_key(key_name).ok_or_else(|| {
        debug!(key_name, "API key not found");
        AIError::MissingKey(key_name.to_string())
    })
}

/// Sampling presets for each kind of request the session makes.
#[derive(Debug, Clone, PartialEq)]
pub struct QuizConfig {
    pub question_sampling: SamplingParams,
    pub check_sampling: SamplingParams,
    pub reference_sampling: SamplingParams,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            question_sampling: SamplingParams::question(),
            check_sampling: SamplingParams::question(),
            reference_sampling: SamplingParams::reference(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_key_is_reported_by_name() {
        let name = "ESSAY_QUIZ_TEST_KEY_THAT_IS_NEVER_SET";
        match require_key(name) {
            Err(AIError::MissingKey(n)) => assert_eq!(n, name),
            other => panic!("expected MissingKey, got {:?}", other),
        }
    }

    #[test]
    fn blank_key_counts_as_missing() {
        let name = "ESSAY_QUIZ_TEST_BLANK_KEY";
        env::set_var(name, "   ");
        assert!(find_key(name).is_none());
        env::set_var(name, "gsk_test");
        assert_eq!(find_key(name).as_deref(), Some("gsk_test"));
        env::remove_var(name);
    }

    #[test]
    fn reference_answers_are_short_and_cooler() {
        let config = QuizConfig::default();
        assert_eq!(config.reference_sampling.max_tokens, 150);
        assert!(config.reference_sampling.temperature < config.question_sampling.temperature);
    }
}
