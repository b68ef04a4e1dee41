use actix_web::web;

pub mod auth;
pub mod games;
pub mod health;

/// Configure application routes.
///
/// Used by both `main.rs` and the test app builder so integration tests
/// exercise exactly the production paths.
pub fn configure(cfg: &mut web::ServiceConfig) {
    // Liveness probe at the root, plus the structured health check
    cfg.service(web::resource("/").route(web::get().to(health::root)));
    cfg.service(web::resource("/health").route(web::get().to(health::health)));

    // User routes: /api/users/**
    cfg.service(web::scope("/api/users").configure(auth::configure_routes));

    // Games routes: /api/games/**
    cfg.service(web::scope("/api/games").configure(games::configure_routes));
}
