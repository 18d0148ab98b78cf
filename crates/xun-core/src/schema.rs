//! Output schemas for structured generation and the bounds they promise.
//!
//! The JSON schema is sent to the model; [`SchemaBound::check`] runs on the
//! decoded value so a response that ignores the schema's limits fails the
//! generation call itself.

use serde_json::{json, Value};
use thiserror::Error;

use crate::types::{ClassificationBatch, TokenConcept};

pub const TOKEN_NAME_MAX: usize = 20;
pub const TICKER_MIN: usize = 3;
pub const TICKER_MAX: usize = 4;
pub const TOKEN_DESCRIPTION_MAX: usize = 100;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchemaError {
    #[error("field `{field}` is {actual} chars, max {max}")]
    TooLong {
        field: &'static str,
        max: usize,
        actual: usize,
    },

    #[error("field `{field}` is {actual} chars, min {min}")]
    TooShort {
        field: &'static str,
        min: usize,
        actual: usize,
    },
}

/// A named JSON schema for a structured generation call.
#[derive(Debug, Clone)]
pub struct OutputSchema {
    pub name: &'static str,
    pub schema: Value,
}

/// Bounds a decoded structured output must satisfy.
pub trait SchemaBound {
    /// # Errors
    ///
    /// Returns [`SchemaError`] naming the first field out of bounds.
    fn check(&self) -> Result<(), SchemaError> {
        Ok(())
    }
}

impl SchemaBound for ClassificationBatch {}

impl SchemaBound for TokenConcept {
    fn check(&self) -> Result<(), SchemaError> {
        max_chars("name", &self.name, TOKEN_NAME_MAX)?;
        min_chars("ticker", &self.ticker, TICKER_MIN)?;
        max_chars("ticker", &self.ticker, TICKER_MAX)?;
        max_chars("description", &self.description, TOKEN_DESCRIPTION_MAX)
    }
}

fn max_chars(field: &'static str, value: &str, max: usize) -> Result<(), SchemaError> {
    let actual = value.chars().count();
    if actual > max {
        return Err(SchemaError::TooLong { field, max, actual });
    }
    Ok(())
}

fn min_chars(field: &'static str, value: &str, min: usize) -> Result<(), SchemaError> {
    let actual = value.chars().count();
    if actual < min {
        return Err(SchemaError::TooShort { field, min, actual });
    }
    Ok(())
}

/// Schema for one batched classification over every fetched mention.
#[must_use]
pub fn mention_batch_schema() -> OutputSchema {
    OutputSchema {
        name: "mention_classifications",
        schema: json!({
            "type": "object",
            "properties": {
                "results": {
                    "type": "array",
                    "items": {
                        "type": "object",
                        "properties": {
                            "tweetId": { "type": "string", "description": "ID of the tweet" },
                            "deserves_reply": { "type": "boolean", "description": "Whether this tweet needs a response" },
                            "pitching_token": { "type": "boolean", "description": "Whether this is a token pitch" },
                            "need_info": { "type": "boolean", "description": "Whether we need more information about the token" },
                            "good_idea_to_deploy": { "type": "boolean", "description": "Whether this token idea seems viable" },
                            "reasoning": { "type": "string", "description": "Explanation for the analysis" }
                        },
                        "required": ["tweetId", "deserves_reply", "pitching_token", "need_info", "good_idea_to_deploy", "reasoning"],
                        "additionalProperties": false
                    }
                }
            },
            "required": ["results"],
            "additionalProperties": false
        }),
    }
}

/// Schema for a generated token concept.
#[must_use]
pub fn token_concept_schema() -> OutputSchema {
    OutputSchema {
        name: "token_concept",
        schema: json!({
            "type": "object",
            "properties": {
                "name": { "type": "string", "maxLength": TOKEN_NAME_MAX, "description": "A catchy name" },
                "ticker": { "type": "string", "minLength": TICKER_MIN, "maxLength": TICKER_MAX, "description": "A ticker symbol" },
                "description": { "type": "string", "maxLength": TOKEN_DESCRIPTION_MAX, "description": "A very brief description (max 100 chars)" }
            },
            "required": ["name", "ticker", "description"],
            "additionalProperties": false
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn concept(name: &str, ticker: &str, description: &str) -> TokenConcept {
        TokenConcept {
            name: name.to_string(),
            ticker: ticker.to_string(),
            description: description.to_string(),
        }
    }

    #[test]
    fn concept_within_bounds_passes() {
        assert_eq!(concept("Foo Coin", "FOO", "A coin for foo fans").check(), Ok(()));
        assert_eq!(concept("Foo Coin", "FOOO", "").check(), Ok(()));
    }

    #[test]
    fn long_name_fails() {
        let err = concept("An Extremely Long Token Name", "FOO", "x")
            .check()
            .unwrap_err();
        assert_eq!(
            err,
            SchemaError::TooLong {
                field: "name",
                max: 20,
                actual: 28
            }
        );
    }

    #[test]
    fn ticker_length_is_bounded_both_ways() {
        assert!(matches!(
            concept("Foo", "FO", "x").check(),
            Err(SchemaError::TooShort { field: "ticker", .. })
        ));
        assert!(matches!(
            concept("Foo", "FOOOO", "x").check(),
            Err(SchemaError::TooLong { field: "ticker", .. })
        ));
    }

    #[test]
    fn description_counts_chars_not_bytes() {
        let emoji_desc = "🚀".repeat(100);
        assert_eq!(concept("Foo", "FOO", &emoji_desc).check(), Ok(()));
        let too_long = "a".repeat(101);
        assert!(concept("Foo", "FOO", &too_long).check().is_err());
    }

    #[test]
    fn batch_schema_requires_every_classification_field() {
        let schema = mention_batch_schema();
        let required = &schema.schema["properties"]["results"]["items"]["required"];
        assert_eq!(required.as_array().map(Vec::len), Some(6));
    }
}
