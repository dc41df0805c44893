// Route exports
pub mod github;

use actix_web::web;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(github::health_check))
        .service(web::scope("/api").configure(github::configure));
}
