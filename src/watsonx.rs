//! IBM watsonx.ai HTTP adapter for text generation.

use serde::Deserialize;

use crate::error::ProviderError;
use crate::traits::TextGenerator;

#[derive(Debug, Clone)]
pub struct WatsonxConfig {
    pub base_url: String,
    /// Bearer token for the watsonx.ai API.
    pub api_key: String,
    pub project_id: String,
    pub model_id: String,
    pub timeout_secs: u64,
}

impl Default for WatsonxConfig {
    fn default() -> Self {
        Self {
            base_url: "https://us-south.ml.cloud.ibm.com".to_string(),
            api_key: String::new(),
            project_id: "smart-travel-planner".to_string(),
            model_id: "ibm/granite-13b-instruct-v2".to_string(),
            timeout_secs: 30,
        }
    }
}

#[derive(Debug, Clone)]
pub struct WatsonxClient {
    config: WatsonxConfig,
    client: reqwest::blocking::Client,
}

impl WatsonxClient {
    pub fn new(config: WatsonxConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }
}

impl TextGenerator for WatsonxClient {
    fn generate(&self, prompt: &str, system_instructions: &str) -> Result<String, ProviderError> {
        let url = format!(
            "{}/ml/v1/text/chat?version=2023-05-29",
            self.config.base_url
        );

        let body = serde_json::json!({
            "messages": [
                { "role": "system", "content": system_instructions },
                { "role": "user", "content": [{ "type": "text", "text": prompt }] },
            ],
            "project_id": self.config.project_id,
            "model_id": self.config.model_id,
            "max_tokens": 2000,
            "temperature": 0,
        });

        let response: ChatResponse = self
            .client
            .post(url)
            .bearer_auth(&self.config.api_key)
            .json(&body)
            .send()?
            .error_for_status()?
            .json()?;

        response
            .choices
            .into_iter()
            .next()
            .map(|choice| choice.message.content)
            .ok_or_else(|| {
                ProviderError::MalformedResponse("no choices in chat response".to_string())
            })
    }

    fn model_id(&self) -> &str {
        &self.config.model_id
    }
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

#[derive(Debug, Deserialize)]
struct ChatMessage {
    content: String,
}
