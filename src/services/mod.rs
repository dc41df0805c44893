// Service exports
pub mod github;
pub mod streak_client;

pub use github::{GithubClient, GithubError};
pub use streak_client::{ClientError, StreakClient, FALLBACK_ERROR};
