use actix_web::{http::StatusCode, web, HttpResponse, Responder};
use crate::core::estimate_streak;
use crate::models::{ErrorResponse, HealthResponse};
use crate::services::{GithubClient, GithubError};
use std::sync::Arc;

const USER_NOT_FOUND: &str = "GitHub user not found";
const FETCH_FAILED: &str = "Failed to fetch GitHub data";

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub github: Arc<GithubClient>,
}

/// Configure all GitHub-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/github/{username}", web::get().to(get_streak));
}

/// Health check endpoint
pub async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Streak endpoint
///
/// GET /api/github/{username}
///
/// Response body:
/// ```json
/// {
///   "username": "string",
///   "avatarUrl": "string",
///   "streak": 42,
///   "name": "string",
///   "bio": "string"
/// }
/// ```
async fn get_streak(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let username = path.into_inner();

    tracing::info!("Fetching streak for user: {}", username);

    let profile = match state.github.fetch_profile(&username).await {
        Ok(profile) => profile,
        Err(GithubError::Upstream { status }) => {
            let status = StatusCode::from_u16(status.as_u16()).unwrap_or(StatusCode::BAD_GATEWAY);
            return HttpResponse::build(status).json(ErrorResponse::new(USER_NOT_FOUND));
        }
        Err(e) => {
            tracing::error!("Error fetching GitHub data for {}: {}", username, e);
            return HttpResponse::InternalServerError().json(ErrorResponse::new(FETCH_FAILED));
        }
    };

    let result = estimate_streak(&profile, chrono::Utc::now());

    tracing::debug!("Computed streak {} for {}", result.streak, username);

    HttpResponse::Ok().json(result)
}
