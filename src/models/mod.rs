// Model exports
pub mod domain;
pub mod responses;

pub use domain::{ProfileSnapshot, StreakResult};
pub use responses::{ErrorResponse, HealthResponse};
