//! Shared configuration, domain types, output schemas and prompts for the
//! `xun` social agent.

pub mod app_config;
pub mod config;
pub mod prompts;
pub mod schema;
pub mod types;

use thiserror::Error;

pub use app_config::{AppConfig, Environment};
pub use config::{load_app_config, load_app_config_from_env};
pub use schema::{OutputSchema, SchemaBound, SchemaError};
pub use types::{
    ClassificationBatch, MentionClassification, MentionInput, SocialPost, TokenConcept,
    TokenImage, TrendItem,
};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingEnvVar(String),

    #[error("invalid value for {var}: {reason}")]
    InvalidEnvVar { var: String, reason: String },
}
