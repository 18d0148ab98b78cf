//! Social platform plumbing: the X (Twitter) API v2 client used to read
//! posts and mentions and to publish, and the news RSS reader that supplies
//! trending headlines.

pub mod error;
pub mod news;
pub mod twitter;

pub use error::SocialError;
pub use news::NewsFeed;
pub use twitter::{PostedTweet, TwitterClient};
