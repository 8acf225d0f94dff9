//! Grammar and spelling checks delegated to the model.

use crate::core::{CompletionClient, CompletionRequest, RequestKind, SamplingParams};
use crate::parser::extract_error_lines;
use tracing::{debug, error, instrument};

/// Outcome of one language check.
///
/// `response` is `None` when the call failed; `errors` holds the response
/// lines that mention an error.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CheckReport {
    pub response: Option<String>,
    pub errors: Vec<String>,
}

impl CheckReport {
    fn from_response(text: String) -> Self {
        let response = text.trim().to_string();
        let errors = extract_error_lines(&response);
        Self {
            response: Some(response),
            errors,
        }
    }
}

#[derive(Debug, Clone)]
pub struct LanguageChecker<C: CompletionClient> {
    client: C,
    sampling: SamplingParams,
}

impl<C: CompletionClient> LanguageChecker<C> {
    pub fn new(client: C, sampling: SamplingParams) -> Self {
        Self { client, sampling }
    }

    /// A failed grammar check reports no error lines, unlike [`Self::check_spelling`].
    #[instrument(target = "essay_quiz::language", skip(self, text), fields(text_len = text.len()))]
    pub async fn check_grammar(&self, text: &str) -> CheckReport {
        let prompt = format!("Check for grammar in: {}", text);
        let request = CompletionRequest::new(RequestKind::GrammarCheck, prompt, self.sampling);
        match self.client.complete(request).await {
            Ok(response) => {
                let report = CheckReport::from_response(response);
                debug!(errors = report.errors.len(), "Grammar check completed");
                report
            }
            Err(e) => {
                error!(error = %e, "Error checking grammar");
                CheckReport {
                    response: None,
                    errors: Vec::new(),
                }
            }
        }
    }

    /// A failed spelling check reports the failure itself as its only error line.
    #[instrument(target = "essay_quiz::language", skip(self, text), fields(text_len = text.len()))]
    pub async fn check_spelling(&self, text: &str) -> CheckReport {
        let prompt = format!("Check for spelling in: {}, provide suggestions", text);
        let request = CompletionRequest::new(RequestKind::SpellingCheck, prompt, self.sampling);
        match self.client.complete(request).await {
            Ok(response) => {
                let report = CheckReport::from_response(response);
                debug!(errors = report.errors.len(), "Spelling check completed");
                report
            }
            Err(e) => {
                error!(error = %e, "Error checking spelling");
                CheckReport {
                    response: None,
                    errors: vec![e.to_string()],
                }
            }
        }
    }

    /// Run both checks concurrently; returns `(grammar, spelling)` once both finish.
    pub async fn check_both(&self, text: &str) -> (CheckReport, CheckReport) {
        tokio::join!(self.check_grammar(text), self.check_spelling(text))
    }
}
