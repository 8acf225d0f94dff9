use super::Interceptor;
use crate::core::CompletionRequest;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Writes each exchange to `<dir>/<kind>_<timestamp>.md`, headed by the request
/// kind and its sampling parameters.
#[derive(Debug)]
pub struct FileInterceptor {
    dir: PathBuf,
}

impl FileInterceptor {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }
}

fn render(request: &CompletionRequest, response: &str, at: DateTime<Utc>) -> String {
    let sampling = request.sampling;
    format!(
        "# {kind}\n\n\
         - recorded: {at}\n\
         - temperature: {temperature}\n\
         - max_tokens: {max_tokens}\n\
         - top_p: {top_p}\n\n\
         ## Prompt\n\n{prompt}\n\n\
         ## Response\n\n{response}\n",
        kind = request.kind,
        at = at.to_rfc3339(),
        temperature = sampling.temperature,
        max_tokens = sampling.max_tokens,
        top_p = sampling.top_p,
        prompt = request.prompt,
        response = response.trim(),
    )
}

#[async_trait]
impl Interceptor for FileInterceptor {
    async fn save(&self, request: &CompletionRequest, response: &str) -> std::io::Result<()> {
        let at = Utc::now();
        let path = self
            .dir
            .join(format!("{}_{}.md", request.kind, at.format("%Y%m%d_%H%M%S_%6f")));

        fs::create_dir_all(&self.dir).await?;
        let mut file = fs::File::create(&path).await?;
        file.write_all(render(request, response, at).as_bytes()).await?;
        file.flush().await
    }
}
