use thiserror::Error;

/// Errors returned by the OpenAI API client.
#[derive(Debug, Error)]
pub enum OpenAiError {
    /// Network or TLS failure from the underlying HTTP client.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-2xx status.
    #[error("OpenAI API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be deserialized into the expected type.
    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: String,
        #[source]
        source: serde_json::Error,
    },

    /// The model declined to produce schema output.
    #[error("model refused: {0}")]
    Refusal(String),

    /// A response that should carry content carried none.
    #[error("empty {0} response")]
    EmptyResponse(&'static str),
}
