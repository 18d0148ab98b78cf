//! HTTP client for the PumpPortal lightning API.
//!
//! Launching is two calls and neither is retried: a retried create could
//! launch a second token.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::error::DeployError;
use crate::types::{
    CreateMetadata, CreateRequest, CreateResponse, DeployParams, Deployment, IpfsResponse,
    TokenMetadata,
};

const DEFAULT_BASE_URL: &str = "https://pumpportal.fun/api";
const DEFAULT_IPFS_URL: &str = "https://pump.fun/api/ipfs";

pub struct PumpPortalClient {
    client: Client,
    api_key: String,
    base_url: String,
    ipfs_url: String,
    params: DeployParams,
}

impl PumpPortalClient {
    /// Creates a client pointed at the production endpoints.
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(api_key: &str, timeout_secs: u64, params: DeployParams) -> Result<Self, DeployError> {
        Self::with_urls(api_key, timeout_secs, params, DEFAULT_BASE_URL, DEFAULT_IPFS_URL)
    }

    /// Creates a client with custom endpoints (for testing with wiremock).
    ///
    /// # Errors
    ///
    /// Returns [`DeployError::Http`] if the `reqwest::Client` cannot be built.
    pub fn with_urls(
        api_key: &str,
        timeout_secs: u64,
        params: DeployParams,
        base_url: &str,
        ipfs_url: &str,
    ) -> Result<Self, DeployError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent("xun/0.1 (social-agent)")
            .build()?;

        Ok(Self {
            client,
            api_key: api_key.to_owned(),
            base_url: base_url.trim_end_matches('/').to_owned(),
            ipfs_url: ipfs_url.to_owned(),
            params,
        })
    }

    /// Upload metadata and logo, then launch the token.
    ///
    /// `image_png` is the raw logo bytes.
    ///
    /// # Errors
    ///
    /// - [`DeployError::Api`] if either call returns a non-2xx status.
    /// - [`DeployError::Rejected`] if the create call reports errors or no mint.
    /// - [`DeployError::Http`] / [`DeployError::Deserialize`] on transport or decode failure.
    pub async fn create_token(
        &self,
        metadata: &TokenMetadata,
        image_png: Vec<u8>,
    ) -> Result<Deployment, DeployError> {
        let metadata_uri = self.upload_metadata(metadata, image_png).await?;
        tracing::debug!(symbol = %metadata.symbol, uri = %metadata_uri, "token metadata uploaded");

        let request = CreateRequest {
            action: "create",
            token_metadata: CreateMetadata {
                name: &metadata.name,
                symbol: &metadata.symbol,
                uri: &metadata_uri,
            },
            denominated_in_sol: "true",
            amount: self.params.dev_buy_sol,
            slippage: self.params.slippage_pct,
            priority_fee: self.params.priority_fee_sol,
            pool: "pump",
        };

        let response = self
            .client
            .post(format!("{}/trade", self.base_url))
            .query(&[("api-key", self.api_key.as_str())])
            .json(&request)
            .send()
            .await?;
        let created: CreateResponse = decode(response, "create").await?;

        if !created.errors.is_empty() {
            return Err(DeployError::Rejected(created.errors.join("; ")));
        }
        let mint = created
            .mint
            .filter(|m| !m.is_empty())
            .ok_or_else(|| DeployError::Rejected("response carried no mint".to_string()))?;

        Ok(Deployment {
            mint,
            signature: created.signature.unwrap_or_default(),
            metadata_uri,
        })
    }

    async fn upload_metadata(
        &self,
        metadata: &TokenMetadata,
        image_png: Vec<u8>,
    ) -> Result<String, DeployError> {
        let file = Part::bytes(image_png)
            .file_name(format!("{}.png", metadata.symbol))
            .mime_str("image/png")?;
        let form = Form::new()
            .part("file", file)
            .text("name", metadata.name.clone())
            .text("symbol", metadata.symbol.clone())
            .text("description", metadata.description.clone())
            .text("twitter", metadata.twitter.clone())
            .text("website", metadata.website.clone())
            .text("showName", "true");

        let response = self.client.post(&self.ipfs_url).multipart(form).send().await?;
        let uploaded: IpfsResponse = decode(response, "metadata upload").await?;
        Ok(uploaded.metadata_uri)
    }
}

async fn decode<T: DeserializeOwned>(
    response: reqwest::Response,
    stage: &'static str,
) -> Result<T, DeployError> {
    let status = response.status();
    let body = response.text().await?;
    if !status.is_success() {
        return Err(DeployError::Api {
            stage,
            status: status.as_u16(),
            message: body.chars().take(200).collect(),
        });
    }
    serde_json::from_str(&body).map_err(|e| DeployError::Deserialize {
        context: stage,
        source: e,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_uses_portal_field_names() {
        let request = CreateRequest {
            action: "create",
            token_metadata: CreateMetadata {
                name: "Foo",
                symbol: "FOO",
                uri: "ipfs://x",
            },
            denominated_in_sol: "true",
            amount: 0.0,
            slippage: 10.0,
            priority_fee: 0.0005,
            pool: "pump",
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["tokenMetadata"]["symbol"], "FOO");
        assert_eq!(value["denominatedInSol"], "true");
        assert_eq!(value["priorityFee"], 0.0005);
    }

    #[test]
    fn default_params_do_not_buy() {
        let params = DeployParams::default();
        assert!(params.dev_buy_sol.abs() < f64::EPSILON);
    }
}
