use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Structured output the model is constrained to produce.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SummaryOutput {
    pub summary: String,
}

/// JSON schema handed to the provider's structured-output mechanism.
pub fn summary_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "summary": {
                "type": "string",
                "description": "A concise summary of the provided text"
            }
        },
        "required": ["summary"],
        "additionalProperties": false
    })
}
