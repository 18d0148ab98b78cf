//! The `xun` agent workflows: trend analysis, mention triage and token
//! creation, written against the collaborator traits in [`collaborators`].

pub mod adapters;
pub mod collaborators;
pub mod error;
pub mod fixtures;
pub mod images;
pub mod pipeline;
pub mod trend;
pub mod triage;
pub mod wiring;

pub use adapters::{PgStore, TwitterAccount};
pub use collaborators::{
    generate_typed, FeedReader, ImageGenerator, PitchStore, SocialPoster, StructuredGenerator,
    TextGenerator, TokenDeployer, TrendSource,
};
pub use error::AgentError;
pub use images::ImageStore;
pub use pipeline::{
    tweet_link, DeployedToken, MentionIndex, PipelineOutcome, PipelineSettings, TokenPipeline,
};
pub use trend::{TrendAnalysis, TrendAnalysisWorkflow};
pub use triage::{MentionOutcome, MentionResult, MentionTriageWorkflow, TriageOptions, TriageReport};
pub use wiring::Workflows;
