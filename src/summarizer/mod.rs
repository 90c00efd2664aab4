use crate::{
    Result,
    config::Config,
    llm::{LlmClient, OpenAiClient},
    prompts::{self, PromptRepository},
};
use tracing::{debug, info};

/// Summarization service: a prompt template plus a structured-output LLM
/// client. Immutable after construction, so it is shared freely between
/// concurrent requests.
pub struct Summarizer {
    client: Box<dyn LlmClient>,
    template: String,
}

impl std::fmt::Debug for Summarizer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Summarizer")
            .field("template", &self.template)
            .finish_non_exhaustive()
    }
}

impl Summarizer {
    /// Builds the remote client and eagerly loads the prompt template.
    /// Fails fast on a missing prompt or unreadable template file.
    pub async fn new(config: &Config, api_key: String) -> Result<Self> {
        let client = OpenAiClient::new(&config.llm, api_key);

        let repository = PromptRepository::new(&config.prompts.file);
        let template = repository.load(&config.prompts.name).await?;

        info!("Loaded prompt template '{}'", config.prompts.name);

        Ok(Self {
            client: Box::new(client),
            template,
        })
    }

    /// Constructs a summarizer around an arbitrary client implementation.
    pub fn with_client(client: Box<dyn LlmClient>, template: String) -> Self {
        Self { client, template }
    }

    /// Renders the template with `text` and returns the model's summary.
    /// Remote failures propagate unmodified; no retries.
    pub async fn summarize(&self, text: &str) -> Result<String> {
        let prompt = prompts::render(&self.template, text);

        debug!("Sending summarization prompt ({} chars)", prompt.len());

        let output = self.client.create_summary(&prompt).await?;
        Ok(output.summary)
    }
}
