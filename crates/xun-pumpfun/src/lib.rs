//! Token deployment through PumpPortal: metadata and logo go to the pump.fun
//! IPFS endpoint, then a `create` trade launches the token and yields its
//! mint address.

pub mod client;
pub mod error;
pub mod types;

pub use client::PumpPortalClient;
pub use error::DeployError;
pub use types::{DeployParams, Deployment, TokenMetadata};
