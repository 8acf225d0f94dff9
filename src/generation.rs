//! Topic, question and reference-answer generation.

use crate::core::{CompletionClient, CompletionRequest, RequestKind, SamplingParams};
use crate::difficulty;
use crate::error::GenerationError;
use crate::parser::{parse_topic_and_question, TopicQuestion};
use tracing::{debug, error, info, instrument, warn};

#[derive(Debug, Clone)]
pub struct ContentGenerator<C: CompletionClient> {
    client: C,
    question_sampling: SamplingParams,
    reference_sampling: SamplingParams,
}

impl<C: CompletionClient> ContentGenerator<C> {
    pub fn new(
        client: C,
        question_sampling: SamplingParams,
        reference_sampling: SamplingParams,
    ) -> Self {
        Self {
            client,
            question_sampling,
            reference_sampling,
        }
    }

    /// Ask for a topic and essay question about `seed` at the given difficulty level.
    #[instrument(target = "essay_quiz::generation", skip(self, seed), fields(seed_len = seed.len()))]
    pub async fn generate_topic_and_question(
        &self,
        seed: &str,
        level: u32,
    ) -> Result<TopicQuestion, GenerationError> {
        let prompt = format!(
            "Generate a {} topic and a question for short essay about: {}",
            difficulty::label(level),
            seed
        );

        let response = self
            .client
            .complete(CompletionRequest::new(
                RequestKind::TopicQuestion,
                prompt,
                self.question_sampling,
            ))
            .await
            .map_err(|e| {
                error!(error = %e, "Topic generation request failed");
                GenerationError::Transport(e)
            })?;

        let parsed = parse_topic_and_question(response.trim()).map_err(|e| {
            warn!(error = %e, response_len = response.len(), "Topic response did not parse");
            GenerationError::Malformed(e)
        })?;

        info!(topic = %parsed.topic, level, "Generated topic and question");
        Ok(parsed)
    }

    /// A short reference essay about `topic`, or `None` when nothing usable came back.
    #[instrument(target = "essay_quiz::generation", skip(self, topic), fields(topic_len = topic.len()))]
    pub async fn generate_reference_answer(&self, topic: &str) -> Option<String> {
        let prompt = format!("Provide a short essay about: {}", topic);

        let response = match self
            .client
            .complete(CompletionRequest::new(
                RequestKind::ReferenceAnswer,
                prompt,
                self.reference_sampling,
            ))
            .await
        {
            Ok(response) => response,
            Err(e) => {
                error!(error = %e, "Reference answer request failed");
                return None;
            }
        };

        let answer = response.trim();
        if answer.is_empty() {
            warn!("Reference answer was empty");
            return None;
        }

        debug!(answer_len = answer.len(), "Generated reference answer");
        Some(answer.to_string())
    }
}
