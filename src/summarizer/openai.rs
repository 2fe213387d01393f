use serde::{Deserialize, Serialize};

use super::Summarizer;
use crate::constants::ai::{API_KEY_ENV, CONNECT_TIMEOUT, READ_TIMEOUT};
use crate::error::MonomapError;
use crate::utils::string::single_line;

const SYSTEM_PROMPT: &str =
    "You write concise, factual architecture overviews for software repositories.";

/// Summarizer backed by an OpenAI-compatible chat completions endpoint
#[derive(Debug)]
pub struct OpenAiSummarizer {
    endpoint: String,
    model: String,
    api_key: String,
    agent: ureq::Agent,
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    temperature: f32,
}

#[derive(Debug, Serialize, Deserialize)]
struct ChatMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Debug, Deserialize)]
struct ChatChoice {
    message: ChatMessage,
}

impl OpenAiSummarizer {
    pub fn new(
        endpoint: impl Into<String>,
        model: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout_connect(CONNECT_TIMEOUT)
            .timeout_read(READ_TIMEOUT)
            .timeout_write(READ_TIMEOUT)
            .build();

        Self {
            endpoint: endpoint.into(),
            model: model.into(),
            api_key: api_key.into(),
            agent,
        }
    }

    /// Create a summarizer whose API key comes from `OPENAI_API_KEY`
    pub fn from_env(
        endpoint: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, MonomapError> {
        let api_key = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| MonomapError::SummarizeError {
                message: format!("{API_KEY_ENV} is not set"),
            })?;

        Ok(Self::new(endpoint, model, api_key))
    }

    pub fn model(&self) -> &str {
        &self.model
    }
}

impl Summarizer for OpenAiSummarizer {
    fn summarize(&self, text: &str) -> Result<String, MonomapError> {
        let request = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system".to_string(),
                    content: SYSTEM_PROMPT.to_string(),
                },
                ChatMessage {
                    role: "user".to_string(),
                    content: text.to_string(),
                },
            ],
            temperature: 0.2,
        };

        let resp = match self
            .agent
            .post(&self.endpoint)
            .set("Authorization", &format!("Bearer {}", self.api_key))
            .set("Accept", "application/json")
            .send_json(&request)
        {
            Ok(resp) => resp,
            Err(ureq::Error::Status(code, resp)) => {
                let body = resp.into_string().unwrap_or_default();
                return Err(MonomapError::SummarizeError {
                    message: format!("{}: HTTP {code}: {}", self.endpoint, single_line(&body)),
                });
            }
            Err(e) => {
                return Err(MonomapError::SummarizeError {
                    message: format!("{}: {e}", self.endpoint),
                });
            }
        };

        let response: ChatResponse =
            resp.into_json()
                .map_err(|e| MonomapError::SummarizeError {
                    message: format!("failed to parse reply from {}: {e}", self.endpoint),
                })?;

        first_reply(response)
    }
}

fn first_reply(response: ChatResponse) -> Result<String, MonomapError> {
    response
        .choices
        .into_iter()
        .next()
        .map(|choice| single_line(&choice.message.content))
        .filter(|content| !content.is_empty())
        .ok_or_else(|| MonomapError::SummarizeError {
            message: "the model returned no overview".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_reply_collapses_whitespace() {
        let response: ChatResponse = serde_json::from_str(
            r#"{"choices": [{"message": {"role": "assistant", "content": "Apps use\n  shared packages."}}]}"#,
        )
        .unwrap();
        assert_eq!(first_reply(response).unwrap(), "Apps use shared packages.");
    }

    #[test]
    fn test_first_reply_without_choices() {
        let response: ChatResponse = serde_json::from_str(r#"{"choices": []}"#).unwrap();
        assert!(matches!(
            first_reply(response),
            Err(MonomapError::SummarizeError { .. })
        ));
    }

    #[test]
    fn test_unreachable_endpoint_is_an_error() {
        let summarizer =
            OpenAiSummarizer::new("http://127.0.0.1:9/v1/chat/completions", "test-model", "key");
        assert_eq!(summarizer.model(), "test-model");
        assert!(matches!(
            summarizer.summarize("hello"),
            Err(MonomapError::SummarizeError { .. })
        ));
    }
}
