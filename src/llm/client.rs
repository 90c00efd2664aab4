use super::types::{SummaryOutput, summary_schema};
use crate::{Error, Result, config::LlmConfig};
use async_openai::{
    Client,
    config::OpenAIConfig,
    types::{
        ChatCompletionRequestMessage, ChatCompletionRequestUserMessageArgs,
        CreateChatCompletionRequestArgs, ResponseFormat, ResponseFormatJsonSchema,
    },
};
use async_trait::async_trait;
use tracing::debug;

#[async_trait]
pub trait LlmClient: Send + Sync {
    /// Sends a single prompt and returns the model's structured summary.
    async fn create_summary(&self, prompt: &str) -> Result<SummaryOutput>;
}

pub struct OpenAiClient {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiClient {
    pub fn new(config: &LlmConfig, api_key: String) -> Self {
        let mut openai_config = OpenAIConfig::new().with_api_key(api_key);

        if !config.base_url.is_empty() {
            openai_config = openai_config.with_api_base(&config.base_url);
        }

        let client = Client::with_config(openai_config);

        Self {
            client,
            model: config.model.clone(),
        }
    }
}

#[async_trait]
impl LlmClient for OpenAiClient {
    async fn create_summary(&self, prompt: &str) -> Result<SummaryOutput> {
        debug!("Creating chat completion with model {}", self.model);

        let messages: Vec<ChatCompletionRequestMessage> =
            vec![ChatCompletionRequestUserMessageArgs::default()
                .content(prompt)
                .build()?
                .into()];

        // Temperature 0 for reproducibility; the provider enforces the
        // {summary: string} shape through the response format.
        let request = CreateChatCompletionRequestArgs::default()
            .model(&self.model)
            .messages(messages)
            .temperature(0.0)
            .response_format(ResponseFormat::JsonSchema {
                json_schema: ResponseFormatJsonSchema {
                    name: "summarize_response".to_string(),
                    description: Some("A summary of the provided text".to_string()),
                    schema: Some(summary_schema()),
                    strict: Some(true),
                },
            })
            .build()?;

        let response = self.client.chat().create(request).await?;

        debug!(
            "Received chat completion response with {} choices",
            response.choices.len()
        );

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or_else(|| Error::llm("Model returned no choices"))?;

        let content = choice
            .message
            .content
            .ok_or_else(|| Error::llm("Model returned empty message content"))?;

        let output: SummaryOutput = serde_json::from_str(&content)
            .map_err(|e| Error::llm(format!("Malformed structured output: {}", e)))?;

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn create_test_config() -> LlmConfig {
        LlmConfig {
            provider: "openai".to_string(),
            base_url: String::new(),
            model: "gpt-4o".to_string(),
        }
    }

    #[test]
    fn test_openai_client_creation() {
        let config = create_test_config();
        let client = OpenAiClient::new(&config, "test-api-key".to_string());

        assert_eq!(client.model, "gpt-4o");
    }

    #[test]
    fn test_openai_client_with_custom_base_url() {
        let mut config = create_test_config();
        config.base_url = "https://custom.api.com/v1".to_string();

        let client = OpenAiClient::new(&config, "test-api-key".to_string());
        assert_eq!(client.model, "gpt-4o");
    }
}
