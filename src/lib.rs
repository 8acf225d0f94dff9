pub mod clients;
pub mod config;
pub mod console;
pub mod core;
pub mod difficulty;
pub mod error;
pub mod generation;
pub mod interceptors;
pub mod language;
pub mod parser;
pub mod session;
pub mod similarity;

// Convenient re-exports
pub use config::QuizConfig;
pub use parser::{
    extract_corrected_text, extract_error_lines, parse_topic_and_question, TopicQuestion,
};
pub use session::{QuizSession, QuizState, SessionOutcome, SessionPhase, TurnOutcome};
