// Core algorithm exports
pub mod flame;
pub mod streak;

pub use flame::{flame_intensity, FlameStyle, StreakView, LOOKUP_FAILED_MESSAGE};
pub use streak::{activity_factor, days_on_platform, estimate_streak, streak_from_metrics, MAX_STREAK, MIN_STREAK};
