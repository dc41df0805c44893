use serde::Serialize;

/// Message shown for every failed lookup, whatever the cause
pub const LOOKUP_FAILED_MESSAGE: &str =
    "Could not fetch GitHub data. Please check the username and try again.";

/// Visual intensity (0-1) of the streak flame
#[inline]
pub fn flame_intensity(streak: u32) -> f64 {
    (streak as f64 / 100.0).min(1.0)
}

/// Glow parameters for rendering the streak flame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FlameStyle {
    pub intensity: f64,
    pub glow_blur_px: f64,
    pub glow_spread_px: f64,
    pub glow_opacity: f64,
    pub shadow_blur_px: f64,
    pub shadow_opacity: f64,
}

impl FlameStyle {
    pub fn for_streak(streak: u32) -> Self {
        let intensity = flame_intensity(streak);
        let streak = streak as f64;

        Self {
            intensity,
            glow_blur_px: 20.0 + streak * 2.0,
            glow_spread_px: 10.0 + streak,
            glow_opacity: 0.3 + intensity * 0.5,
            shadow_blur_px: 8.0 + streak / 5.0,
            shadow_opacity: 0.6 + intensity * 0.4,
        }
    }
}

/// What the page shows after a lookup completes
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "view", rename_all = "snake_case")]
pub enum StreakView {
    /// Stay on the input form with an error line
    Input { error: String },
    /// Switch to the results card
    Results {
        username: String,
        streak: u32,
        flame: FlameStyle,
    },
}

impl StreakView {
    /// Turn a lookup outcome into a view
    ///
    /// Failures never leak their cause; they all render the same text.
    pub fn from_result<E: std::fmt::Display>(username: &str, result: Result<u32, E>) -> Self {
        match result {
            Ok(streak) => StreakView::Results {
                username: username.to_string(),
                streak,
                flame: FlameStyle::for_streak(streak),
            },
            Err(e) => {
                tracing::debug!("Streak lookup for {} failed: {}", username, e);
                StreakView::Input {
                    error: LOOKUP_FAILED_MESSAGE.to_string(),
                }
            }
        }
    }
}
