use thiserror::Error;

#[derive(Debug, Error)]
pub enum DeployError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Metadata upload or create call returned a non-2xx status.
    #[error("{stage} failed ({status}): {message}")]
    Api {
        stage: &'static str,
        status: u16,
        message: String,
    },

    /// The create call answered 2xx but reported errors or no mint.
    #[error("token creation rejected: {0}")]
    Rejected(String),

    #[error("JSON deserialization error for {context}: {source}")]
    Deserialize {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
}
