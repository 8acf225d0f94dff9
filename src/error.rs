use thiserror::Error;

/// Top-level error for the quiz session and the binary.
#[derive(Error, Debug)]
pub enum QuizError {
    #[error("AI error: {0}")]
    Ai(#[from] AIError),
    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("No question is awaiting an answer (session is {0:?})")]
    NotAwaitingAnswer(crate::session::SessionPhase),
}

#[derive(Error, Debug)]
pub enum AIError {
    #[error("Groq API error: {0}")]
    Groq(CompletionError),
    #[error("OpenAI API error: {0}")]
    OpenAI(CompletionError),
    #[error("DeepSeek API error: {0}")]
    DeepSeek(CompletionError),
    #[error("Missing API key: {0} is not set in the environment or .env")]
    MissingKey(String),
    #[error("Mock error: {0}")]
    Mock(String),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CompletionError {
    #[error("HTTP error: {0}")]
    Http(String),
    #[error("API error: {0}")]
    Api(String),
    #[error("Rate limit exceeded")]
    RateLimit,
    #[error("Authentication failed")]
    Authentication,
    #[error("Request timed out")]
    Timeout,
}

/// Why a model response could not be read as a topic/question pair.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("response has no {0:?} marker")]
    MissingMarker(&'static str),
    #[error("nothing follows the {0:?} marker")]
    EmptyField(&'static str),
}

#[derive(Error, Debug)]
pub enum GenerationError {
    #[error("Error calling the generation service: {0}")]
    Transport(#[from] AIError),
    #[error("Couldn't parse topic and question: {0}")]
    Malformed(#[from] ParseError),
}
