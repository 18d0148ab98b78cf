use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("LLM error: {0}")]
    Llm(#[from] xun_openai::OpenAiError),

    #[error("social platform error: {0}")]
    Social(#[from] xun_social::SocialError),

    #[error("database error: {0}")]
    Db(#[from] xun_db::DbError),

    #[error("deployment error: {0}")]
    Deploy(#[from] xun_pumpfun::DeployError),

    /// Text generation answered without any analysis content.
    #[error("no analysis produced")]
    NoAnalysis,

    #[error("structured output `{schema}` did not decode: {source}")]
    SchemaDecode {
        schema: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("structured output `{schema}` out of bounds: {source}")]
    SchemaBounds {
        schema: &'static str,
        #[source]
        source: xun_core::SchemaError,
    },

    #[error("image payload is not valid base64: {0}")]
    ImageDecode(#[from] base64::DecodeError),

    #[error("failed to write image {path}: {source}")]
    ImageStore {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
