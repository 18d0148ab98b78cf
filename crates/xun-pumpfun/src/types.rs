use serde::{Deserialize, Serialize};

/// Metadata uploaded alongside the logo.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TokenMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub twitter: String,
    pub website: String,
}

/// Trade parameters for the create call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeployParams {
    /// Initial developer buy, in SOL.
    pub dev_buy_sol: f64,
    pub slippage_pct: f64,
    pub priority_fee_sol: f64,
}

impl Default for DeployParams {
    fn default() -> Self {
        Self {
            dev_buy_sol: 0.0,
            slippage_pct: 10.0,
            priority_fee_sol: 0.0005,
        }
    }
}

/// A launched token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deployment {
    pub mint: String,
    pub signature: String,
    pub metadata_uri: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct IpfsResponse {
    pub metadata_uri: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct CreateRequest<'a> {
    pub action: &'static str,
    pub token_metadata: CreateMetadata<'a>,
    pub denominated_in_sol: &'static str,
    pub amount: f64,
    pub slippage: f64,
    pub priority_fee: f64,
    pub pool: &'static str,
}

#[derive(Debug, Serialize)]
pub(crate) struct CreateMetadata<'a> {
    pub name: &'a str,
    pub symbol: &'a str,
    pub uri: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct CreateResponse {
    #[serde(default)]
    pub signature: Option<String>,
    #[serde(default)]
    pub mint: Option<String>,
    #[serde(default)]
    pub errors: Vec<String>,
}
