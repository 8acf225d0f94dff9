//! The interactive quiz loop.
//!
//! A session reads a seed, generates a topic, question and reference answer,
//! then repeatedly reads answers, runs the language checks, offers
//! corrections, and scores the answer against the reference. Passing raises
//! the difficulty level by one and moves on to a fresh question; failing
//! keeps the current question and prints a hint.

use crate::config::QuizConfig;
use crate::console::{Console, Tone};
use crate::core::CompletionClient;
use crate::difficulty::{self, Hint};
use crate::error::QuizError;
use crate::generation::ContentGenerator;
use crate::language::{CheckReport, LanguageChecker};
use crate::parser::find_corrected_text;
use crate::similarity;
use tracing::{debug, info, instrument, warn};

pub const SEED_PROMPT: &str = "Enter a topic or prompt (or type 'exit' to quit): ";
pub const ANSWER_PROMPT: &str = "Enter your answer (or type 'exit' to quit): ";
pub const CORRECTION_PROMPT: &str = "Do you want to correct these errors? (yes/no): ";
pub const FAREWELL: &str = "Thank you for playing! Goodbye!";

/// Everything the session knows about the current question and the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizState {
    pub topic: String,
    pub question: String,
    pub correct_answer: String,
    pub level: u32,
    pub score: u32,
}

impl Default for QuizState {
    fn default() -> Self {
        Self {
            topic: String::new(),
            question: String::new(),
            correct_answer: String::new(),
            level: 1,
            score: 0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    AwaitingPrompt,
    AwaitingAnswer,
    Terminated,
}

/// Why a session stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The player typed `exit`.
    Quit,
    /// Input ran out.
    InputClosed,
    /// No usable topic, question or reference answer could be generated.
    InitializationFailed,
}

/// Result of one submitted answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnOutcome {
    /// A language check failed; the same question is asked again.
    CheckFailed,
    /// The answer passed. `regenerated` is false when the next question could not be produced.
    Passed { regenerated: bool },
    Failed { hint: Hint },
    /// The player left while answering the correction prompt.
    Ended(SessionOutcome),
}

enum Input {
    Line(String),
    Exit,
    Closed,
}

pub struct QuizSession<C: CompletionClient, K: Console> {
    generator: ContentGenerator<C>,
    checker: LanguageChecker<C>,
    console: K,
    state: QuizState,
    phase: SessionPhase,
}

impl<C: CompletionClient + Clone, K: Console> QuizSession<C, K> {
    /// Both services share `client`.
    pub fn new(client: C, console: K, config: &QuizConfig) -> Self {
        Self {
            generator: ContentGenerator::new(
                client.clone(),
                config.question_sampling,
                config.reference_sampling,
            ),
            checker: LanguageChecker::new(client, config.check_sampling),
            console,
            state: QuizState::default(),
            phase: SessionPhase::AwaitingPrompt,
        }
    }

    pub fn state(&self) -> &QuizState {
        &self.state
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn console(&self) -> &K {
        &self.console
    }

    /// Drive the whole session until the player leaves, input ends, or setup fails.
    pub async fn run(&mut self) -> Result<SessionOutcome, QuizError> {
        let seed = match self.read_input(SEED_PROMPT)? {
            Input::Line(seed) => seed,
            Input::Exit => return self.finish(SessionOutcome::Quit),
            Input::Closed => return self.finish(SessionOutcome::InputClosed),
        };

        if !self.start(&seed).await? {
            return Ok(SessionOutcome::InitializationFailed);
        }

        loop {
            let answer = match self.read_input(ANSWER_PROMPT)? {
                Input::Line(answer) => answer,
                Input::Exit => return self.finish(SessionOutcome::Quit),
                Input::Closed => return self.finish(SessionOutcome::InputClosed),
            };

            if let TurnOutcome::Ended(outcome) = self.answer(&answer).await? {
                return Ok(outcome);
            }
        }
    }

    /// Generate the first question and its reference answer at level 1.
    /// Returns false, and terminates the session, if either cannot be produced.
    #[instrument(target = "essay_quiz::session", skip(self, seed), fields(seed_len = seed.len()))]
    pub async fn start(&mut self, seed: &str) -> Result<bool, QuizError> {
        let result = self
            .generator
            .generate_topic_and_question(seed, self.state.level)
            .await;
        let generated = match result {
            Ok(generated) => generated,
            Err(e) => {
                self.console.say_with(Tone::Failure, &e.to_string())?;
                self.console.say_with(Tone::Failure, "Failed to generate topic and question.")?;
                self.phase = SessionPhase::Terminated;
                return Ok(false);
            }
        };

        self.console.say_with(Tone::Heading, &format!("Topic: {}", generated.topic))?;
        self.console.say_with(Tone::Heading, &format!("Question: {}", generated.question))?;

        let reference = self
            .generator
            .generate_reference_answer(&generated.topic)
            .await;
        let Some(reference) = reference else {
            self.console.say_with(Tone::Failure, "No answer generated. Please try again.")?;
            self.phase = SessionPhase::Terminated;
            return Ok(false);
        };

        self.state.topic = generated.topic;
        self.state.question = generated.question;
        self.state.correct_answer = reference;
        self.phase = SessionPhase::AwaitingAnswer;
        info!(topic = %self.state.topic, "Session initialized");
        Ok(true)
    }

    /// Check, optionally correct, and score one answer.
    #[instrument(target = "essay_quiz::session", skip(self, answer), fields(level = self.state.level, answer_len = answer.len()))]
    pub async fn answer(&mut self, answer: &str) -> Result<TurnOutcome, QuizError> {
        if self.phase != SessionPhase::AwaitingAnswer {
            return Err(QuizError::NotAwaitingAnswer(self.phase));
        }

        let (grammar, spelling) = self.checker.check_both(answer).await;

        let (Some(grammar_response), Some(spelling_response)) =
            (grammar.response.as_deref(), spelling.response.as_deref())
        else {
            self.console
                .say_with(Tone::Warning, "Error checking grammar or spelling. Please try again.")?;
            return Ok(TurnOutcome::CheckFailed);
        };

        let mut working = answer.to_string();
        if !grammar.errors.is_empty() || !spelling.errors.is_empty() {
            self.show_errors(&grammar, &spelling)?;

            match self.read_input(CORRECTION_PROMPT)? {
                Input::Exit => return self.finish(SessionOutcome::Quit).map(TurnOutcome::Ended),
                Input::Closed => {
                    return self.finish(SessionOutcome::InputClosed).map(TurnOutcome::Ended)
                }
                Input::Line(reply) if reply.trim().eq_ignore_ascii_case("yes") => {
                    working = self.apply_corrections(working, grammar_response, spelling_response)?;
                }
                Input::Line(_) => {}
            }
        } else {
            self.console.say_with(Tone::Success, "No errors detected.")?;
        }

        let similarity = similarity::score(&self.state.correct_answer, &working);
        self.console.say(&format!(
            "Your knowledge percentage on the topic is: {:.2}%",
            similarity * 100.0
        ))?;
        debug!(
            similarity,
            threshold = difficulty::pass_threshold(self.state.level),
            "Scored answer"
        );

        if difficulty::passes(similarity, self.state.level) {
            self.state.score += 1;
            self.console.say_with(
                Tone::Success,
                &format!("Correct! You earned {} points.", self.state.score),
            )?;
            self.state.level += 1;
            info!(level = self.state.level, score = self.state.score, "Advanced to next level");

            let regenerated = self.next_question().await?;
            Ok(TurnOutcome::Passed { regenerated })
        } else {
            let hint = Hint::for_similarity(similarity);
            self.console.say_with(Tone::Failure, "Incorrect. Try again!")?;
            self.console.say_with(Tone::Warning, hint.message())?;
            Ok(TurnOutcome::Failed { hint })
        }
    }

    fn show_errors(
        &mut self,
        grammar: &CheckReport,
        spelling: &CheckReport,
    ) -> Result<(), QuizError> {
        self.console.say_with(Tone::Warning, "Errors detected:")?;
        if !grammar.errors.is_empty() {
            self.console.say_with(Tone::Heading, "Grammar errors:")?;
            for error in &grammar.errors {
                self.console.say(&format!("- {}", error))?;
            }
        }
        if !spelling.errors.is_empty() {
            self.console.say_with(Tone::Heading, "Spelling errors:")?;
            for error in &spelling.errors {
                self.console.say(error)?;
            }
        }
        Ok(())
    }

    /// Grammar correction first, then spelling on top, so spelling wins when both exist.
    fn apply_corrections(
        &mut self,
        mut working: String,
        grammar_response: &str,
        spelling_response: &str,
    ) -> Result<String, QuizError> {
        self.console.say_with(Tone::Heading, "API Response (Grammar Check):")?;
        self.console.say(grammar_response)?;
        self.console.say_with(Tone::Heading, "API Response (Spelling Check):")?;
        self.console.say(spelling_response)?;

        if let Some(corrected) = find_corrected_text(grammar_response) {
            self.console.say(&format!("Corrected answer (grammar): {}", corrected))?;
            working = corrected;
        }
        if let Some(corrected) = find_corrected_text(spelling_response) {
            self.console.say(&format!("Corrected answer (spelling): {}", corrected))?;
            working = corrected;
        }
        Ok(working)
    }

    /// Replace topic, question and reference answer at the current level, seeding
    /// from the current topic. On failure the previous ones stay in place.
    async fn next_question(&mut self) -> Result<bool, QuizError> {
        let result = self
            .generator
            .generate_topic_and_question(&self.state.topic, self.state.level)
            .await;
        let next = match result {
            Ok(next) => next,
            Err(e) => {
                warn!(error = %e, "Could not generate the next question");
                self.console.say_with(Tone::Failure, "Couldn't generate a new question.")?;
                return Ok(false);
            }
        };

        let Some(reference) = self.generator.generate_reference_answer(&next.topic).await else {
            warn!("Could not generate the next reference answer");
            self.console.say_with(Tone::Failure, "Couldn't generate a new question.")?;
            return Ok(false);
        };

        self.console.say_with(
            Tone::Heading,
            &format!("Level {}: {}", self.state.level, next.question),
        )?;
        self.state.topic = next.topic;
        self.state.question = next.question;
        self.state.correct_answer = reference;
        Ok(true)
    }

    fn read_input(&mut self, prompt: &str) -> Result<Input, QuizError> {
        Ok(match self.console.read_line(prompt)? {
            None => Input::Closed,
            Some(line) if line.trim().eq_ignore_ascii_case("exit") => Input::Exit,
            Some(line) => Input::Line(line),
        })
    }

    fn finish(&mut self, outcome: SessionOutcome) -> Result<SessionOutcome, QuizError> {
        self.console.say(FAREWELL)?;
        self.phase = SessionPhase::Terminated;
        info!(?outcome, score = self.state.score, level = self.state.level, "Session ended");
        Ok(outcome)
    }
}
