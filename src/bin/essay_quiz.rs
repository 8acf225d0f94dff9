use anyhow::Context;
use clap::Parser;
use essay_quiz::clients::{ChatConfig, ChatModel, FlexibleClient, Provider, RecordingClient};
use essay_quiz::console::TerminalConsole;
use essay_quiz::core::CompletionClient;
use essay_quiz::interceptors::FileInterceptor;
use essay_quiz::{QuizConfig, QuizSession, SessionOutcome};
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Essay quiz with generated questions, language checks and similarity scoring", long_about = None)]
#[command(after_help = "ENVIRONMENT VARIABLES:
    GROQ_API_KEY       API key for Groq (default provider)
    OPENAI_API_KEY     API key for OpenAI
    DEEPSEEK_API_KEY   API key for DeepSeek
    RUST_LOG           Log filter, e.g. essay_quiz=debug

Keys may also be placed in a .env file in the working directory.

EXAMPLES:
    essay-quiz                              # Auto-detect provider from available keys
    essay-quiz --provider groq --model llama3-8b-8192
    essay-quiz --transcript-dir transcripts # Save every prompt/response as markdown")]
struct Args {
    /// Provider: groq, openai, deepseek [default: first one with an API key]
    #[arg(short, long, value_enum)]
    provider: Option<Provider>,

    /// Model id to request instead of the provider's default
    #[arg(short, long)]
    model: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 60)]
    timeout_secs: u64,

    /// Save each prompt/response exchange into this directory
    #[arg(long)]
    transcript_dir: Option<PathBuf>,

    /// Enable debug logging for this crate
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("essay_quiz=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn build_client(args: &Args) -> anyhow::Result<Box<dyn CompletionClient>> {
    let provider = args.provider.unwrap_or_else(Provider::detect);
    tracing::info!(%provider, "Selected provider");

    let mut config = ChatConfig::from_env(provider)
        .with_context(|| format!("cannot start the {} client", provider))?
        .with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(model) = &args.model {
        config = config.with_model(ChatModel::from_id(model));
    }
    let client = FlexibleClient::chat(config)?;

    let client: Box<dyn CompletionClient> = match &args.transcript_dir {
        Some(dir) => Box::new(RecordingClient::new(
            client,
            Arc::new(FileInterceptor::new(dir.clone())),
        )),
        None => Box::new(client),
    };
    Ok(client)
}

async fn run(args: Args) -> anyhow::Result<SessionOutcome> {
    let client = build_client(&args)?;
    let mut session = QuizSession::new(client, TerminalConsole::new(), &QuizConfig::default());
    let outcome = session.run().await.context("quiz session failed")?;
    Ok(outcome)
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env first so RUST_LOG in .env is seen
    let _ = dotenvy::dotenv();
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(args).await {
        Ok(SessionOutcome::InitializationFailed) => ExitCode::FAILURE,
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
