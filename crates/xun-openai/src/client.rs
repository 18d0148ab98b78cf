//! HTTP client for the OpenAI REST API.
//!
//! Every call is a single attempt; timeouts come from the configured
//! `reqwest::Client`.

use std::time::Duration;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::OpenAiError;
use crate::types::{
    ApiErrorEnvelope, ChatMessage, ChatRequest, ChatResponse, ImageRequest, ImageResponse,
    JsonSchemaFormat, ResponseFormat,
};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const IMAGE_SIZE: &str = "1024x1024";

/// Client for chat, structured chat and image generation.
///
/// Use [`OpenAiClient::new`] for production or [`OpenAiClient::with_base_url`]
/// to point at a mock server in tests.
pub struct OpenAiClient {
    client: Client,
    api_key: String,
    base_url: String,
    text_model: String,
    image_model: String,
}

impl OpenAiClient {
    /// Creates a client pointed at the production API.
    ///
    /// # Errors
    ///
    /// Returns [`OpenAiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn new(api_key: &str, timeout_secs: u64) -> Result<Self, OpenAiError> {
        Self::with_base_url(api_key, timeout_secs, DEFAULT_BASE_URL)
    }

    /// Creates a client with a custom base URL (an OpenAI-compatible gateway,
    /// or wiremock in tests).
    ///
    /// # Errors
    ///
    /// Returns [`OpenAiError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed.
    pub fn with_base_url(
        api_key: &str,
        timeout_secs: u64,
        base_url: &str,
    ) -> Result<Self, OpenAiError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("xun/0.1 (social-agent)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            text_model: "gpt-4o-mini".to_owned(),
            image_model: "dall-e-3".to_owned(),
        })
    }

    /// Overrides the text and image model names.
    #[must_use]
    pub fn with_models(mut self, text_model: &str, image_model: &str) -> Self {
        text_model.clone_into(&mut self.text_model);
        image_model.clone_into(&mut self.image_model);
        self
    }

    /// Runs one chat completion and returns the first choice's content.
    ///
    /// `Ok(None)` means the API answered but produced no content.
    ///
    /// # Errors
    ///
    /// - [`OpenAiError::Http`] on network failure.
    /// - [`OpenAiError::Api`] on a non-2xx status.
    /// - [`OpenAiError::Deserialize`] if the body is not a chat completion.
    pub async fn chat(&self, prompt: &str) -> Result<Option<String>, OpenAiError> {
        let request = ChatRequest {
            model: &self.text_model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: None,
        };
        let response: ChatResponse = self.post_json("chat/completions", &request).await?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }

    /// Runs one chat completion constrained by `schema` and returns the
    /// decoded JSON object.
    ///
    /// # Errors
    ///
    /// - [`OpenAiError::Refusal`] if the model refused.
    /// - [`OpenAiError::EmptyResponse`] if there was no content.
    /// - [`OpenAiError::Deserialize`] if the content is not JSON.
    /// - [`OpenAiError::Http`] / [`OpenAiError::Api`] on transport or API failure.
    pub async fn chat_json(
        &self,
        prompt: &str,
        schema_name: &str,
        schema: &Value,
    ) -> Result<Value, OpenAiError> {
        let request = ChatRequest {
            model: &self.text_model,
            messages: vec![ChatMessage {
                role: "user",
                content: prompt,
            }],
            response_format: Some(ResponseFormat::JsonSchema {
                json_schema: JsonSchemaFormat {
                    name: schema_name,
                    schema,
                    strict: false,
                },
            }),
        };
        let response: ChatResponse = self.post_json("chat/completions", &request).await?;

        let choice = response
            .choices
            .into_iter()
            .next()
            .ok_or(OpenAiError::EmptyResponse("structured"))?;
        if let Some(refusal) = choice.message.refusal {
            return Err(OpenAiError::Refusal(refusal));
        }
        if choice.finish_reason.as_deref() == Some("length") {
            tracing::warn!(schema = schema_name, "structured output truncated by token limit");
        }
        let content = choice
            .message
            .content
            .filter(|c| !c.trim().is_empty())
            .ok_or(OpenAiError::EmptyResponse("structured"))?;

        serde_json::from_str(&content).map_err(|e| OpenAiError::Deserialize {
            context: format!("structured output `{schema_name}`"),
            source: e,
        })
    }

    /// Generates one image and returns it base64-encoded.
    ///
    /// # Errors
    ///
    /// - [`OpenAiError::EmptyResponse`] if no `b64_json` payload came back.
    /// - [`OpenAiError::Http`] / [`OpenAiError::Api`] on transport or API failure.
    pub async fn generate_image(&self, prompt: &str) -> Result<String, OpenAiError> {
        let request = ImageRequest {
            model: &self.image_model,
            prompt,
            n: 1,
            size: IMAGE_SIZE,
            response_format: "b64_json",
        };
        let response: ImageResponse = self.post_json("images/generations", &request).await?;

        response
            .data
            .into_iter()
            .next()
            .and_then(|d| d.b64_json)
            .filter(|b| !b.is_empty())
            .ok_or(OpenAiError::EmptyResponse("image"))
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{path}", self.base_url)
    }

    /// POSTs `body`, maps non-2xx statuses to [`OpenAiError::Api`] and
    /// decodes the success body.
    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, OpenAiError>
    where
        B: serde::Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(path);
        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;
        if !status.is_success() {
            return Err(OpenAiError::Api {
                status: status.as_u16(),
                message: api_error_message(&text),
            });
        }

        serde_json::from_str(&text).map_err(|e| OpenAiError::Deserialize {
            context: path.to_owned(),
            source: e,
        })
    }
}

/// Pulls `error.message` out of an API error body, falling back to the raw text.
fn api_error_message(body: &str) -> String {
    serde_json::from_str::<ApiErrorEnvelope>(body)
        .map(|e| e.error.message)
        .unwrap_or_else(|_| body.chars().take(200).collect())
}
