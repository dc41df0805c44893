//! Streak Tracker - GitHub streak estimation service
//!
//! Proxies public GitHub profiles and derives a cosmetic "streak" value from
//! account age, repository count and follower count.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{estimate_streak, streak_from_metrics, FlameStyle, StreakView};
pub use models::{ProfileSnapshot, StreakResult};
pub use services::{GithubClient, StreakClient};
