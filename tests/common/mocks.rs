use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use summarizer_rust::{
    Error, Result,
    llm::{LlmClient, SummaryOutput},
};

/// Mock LLM client for testing
pub struct MockLlmClient {
    pub responses: Arc<Mutex<Vec<SummaryOutput>>>,
    pub prompts: Arc<Mutex<Vec<String>>>,
    pub error: Option<String>,
}

impl MockLlmClient {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            prompts: Arc::new(Mutex::new(Vec::new())),
            error: None,
        }
    }

    pub fn with_summary(self, summary: &str) -> Self {
        self.responses.lock().unwrap().push(SummaryOutput {
            summary: summary.to_string(),
        });
        self
    }

    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn get_prompts(&self) -> Vec<String> {
        self.prompts.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmClient for MockLlmClient {
    async fn create_summary(&self, prompt: &str) -> Result<SummaryOutput> {
        self.prompts.lock().unwrap().push(prompt.to_string());

        if let Some(ref error) = self.error {
            return Err(Error::llm(error.clone()));
        }

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(Error::llm("No more mock responses available"));
        }

        Ok(responses.remove(0))
    }
}

impl Default for MockLlmClient {
    fn default() -> Self {
        Self::new()
    }
}
