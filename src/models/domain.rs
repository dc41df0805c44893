use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Public profile attributes read from the GitHub `users/{username}` endpoint
///
/// Only the fields the estimator and the response need are kept. Fields that
/// are missing or `null` upstream take their default; an unreadable
/// `created_at` is treated as absent.
#[derive(Debug, Clone, Deserialize)]
pub struct ProfileSnapshot {
    #[serde(rename = "login", default, deserialize_with = "null_as_default")]
    pub username: String,
    #[serde(default, deserialize_with = "lenient_timestamp")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "public_repos", default, deserialize_with = "null_as_default")]
    pub public_repo_count: u64,
    #[serde(rename = "followers", default, deserialize_with = "null_as_default")]
    pub follower_count: u64,
    #[serde(rename = "name", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;

    Ok(value
        .as_ref()
        .and_then(|v| v.as_str())
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc)))
}

/// Streak derived from a single profile snapshot
///
/// Serializes to the public response shape of `GET /api/github/{username}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StreakResult {
    pub username: String,
    #[serde(rename = "avatarUrl")]
    pub avatar_url: Option<String>,
    pub streak: u32,
    #[serde(rename = "name")]
    pub display_name: Option<String>,
    pub bio: Option<String>,
}
