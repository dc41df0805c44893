use crate::models::{ProfileSnapshot, StreakResult};
use chrono::{DateTime, Utc};

/// Lowest streak ever reported
pub const MIN_STREAK: u32 = 1;

/// Highest streak ever reported
pub const MAX_STREAK: u32 = 120;

const MS_PER_DAY: i64 = 86_400_000;
const DAYS_PER_YEAR: f64 = 365.0;
const REPO_WEIGHT: f64 = 0.5;
const FOLLOWER_WEIGHT: f64 = 0.3;

/// Whole days elapsed between account creation and `now`
///
/// A creation date in the future counts as zero days.
pub fn days_on_platform(created_at: DateTime<Utc>, now: DateTime<Utc>) -> u64 {
    let elapsed_ms = (now - created_at).num_milliseconds();
    if elapsed_ms <= 0 {
        return 0;
    }
    (elapsed_ms / MS_PER_DAY) as u64
}

/// Weighted mix of repository and follower counts
#[inline]
pub fn activity_factor(public_repos: u64, followers: u64) -> f64 {
    public_repos as f64 * REPO_WEIGHT + followers as f64 * FOLLOWER_WEIGHT
}

/// Estimate a streak from raw profile metrics
///
/// Formula:
/// streak = clamp(
///     floor(activity_factor * (days_on_platform / 365)),
///     1, 120
/// )
///
/// The value is a cosmetic heuristic. It does not reflect contribution history.
pub fn streak_from_metrics(public_repos: u64, followers: u64, days_on_platform: u64) -> u32 {
    let raw = (activity_factor(public_repos, followers) * (days_on_platform as f64 / DAYS_PER_YEAR)).floor();

    raw.clamp(MIN_STREAK as f64, MAX_STREAK as f64) as u32
}

/// Derive the streak result for a profile, evaluated at `now`
pub fn estimate_streak(profile: &ProfileSnapshot, now: DateTime<Utc>) -> StreakResult {
    let days = profile
        .created_at
        .map(|created_at| days_on_platform(created_at, now))
        .unwrap_or(0);

    let streak = streak_from_metrics(profile.public_repo_count, profile.follower_count, days);

    StreakResult {
        username: profile.username.clone(),
        avatar_url: profile.avatar_url.clone(),
        streak,
        display_name: profile.display_name.clone(),
        bio: profile.bio.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn create_test_profile(repos: u64, followers: u64, created_at: Option<DateTime<Utc>>) -> ProfileSnapshot {
        ProfileSnapshot {
            username: "octocat".to_string(),
            created_at,
            public_repo_count: repos,
            follower_count: followers,
            display_name: Some("The Octocat".to_string()),
            bio: Some("GitHub mascot".to_string()),
            avatar_url: Some("https://avatars.example/octocat".to_string()),
        }
    }

    #[test]
    fn test_days_on_platform_truncates_partial_days() {
        let created = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let now = created + Duration::days(3) + Duration::hours(23);
        assert_eq!(days_on_platform(created, now), 3);
    }

    #[test]
    fn test_days_on_platform_future_creation() {
        let now = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(days_on_platform(now + Duration::days(2), now), 0);
    }

    #[test]
    fn test_activity_factor() {
        assert_eq!(activity_factor(20, 100), 40.0);
        assert_eq!(activity_factor(0, 0), 0.0);
    }

    #[test]
    fn test_reference_example() {
        assert_eq!(streak_from_metrics(20, 100, 730), 80);
    }

    #[test]
    fn test_floor_and_ceiling() {
        assert_eq!(streak_from_metrics(500, 500, 0), MIN_STREAK);
        assert_eq!(streak_from_metrics(0, 0, 5000), MIN_STREAK);
        assert_eq!(streak_from_metrics(10_000, 10_000, 3650), MAX_STREAK);
    }

    #[test]
    fn test_estimate_copies_profile_fields() {
        let now = Utc.with_ymd_and_hms(2024, 6, 1, 12, 0, 0).unwrap();
        let profile = create_test_profile(20, 100, Some(now - Duration::days(730)));

        let result = estimate_streak(&profile, now);
        assert_eq!(result.streak, 80);
        assert_eq!(result.username, "octocat");
        assert_eq!(result.display_name.as_deref(), Some("The Octocat"));
        assert_eq!(result.bio.as_deref(), Some("GitHub mascot"));
        assert_eq!(result.avatar_url.as_deref(), Some("https://avatars.example/octocat"));
    }

    #[test]
    fn test_estimate_without_creation_date() {
        let profile = create_test_profile(1000, 1000, None);
        assert_eq!(estimate_streak(&profile, Utc::now()).streak, MIN_STREAK);
    }
}
