use crate::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;
use tracing::debug;

#[derive(Debug, Deserialize)]
struct PromptsFile {
    prompts: HashMap<String, PromptEntry>,
}

#[derive(Debug, Deserialize)]
struct PromptEntry {
    path: String,
}

/// Loads named prompt templates from a YAML configuration file.
///
/// Both the configuration file and the template file are re-read on every
/// call; nothing is cached across loads.
pub struct PromptRepository {
    config_path: PathBuf,
}

impl PromptRepository {
    pub fn new(config_path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: config_path.into(),
        }
    }

    pub async fn load(&self, prompt_name: &str) -> Result<String> {
        debug!(
            "Loading prompt '{}' from {}",
            prompt_name,
            self.config_path.display()
        );

        let raw = tokio::fs::read_to_string(&self.config_path).await?;
        let file: PromptsFile = serde_yaml::from_str(&raw)?;

        let entry = file.prompts.get(prompt_name).ok_or_else(|| {
            Error::config(format!(
                "Prompt '{}' not found in configuration",
                prompt_name
            ))
        })?;

        let template = tokio::fs::read_to_string(&entry.path).await?;
        Ok(template)
    }
}

/// Substitutes the user-supplied text into a prompt template.
pub fn render(template: &str, text: &str) -> String {
    template.replace("{text}", text)
}
