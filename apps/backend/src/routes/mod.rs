use actix_web::web;

pub mod auth;
pub mod health;
pub mod home;
pub mod me;

/// Register every route. The callback path is deployment-specific, so it
/// is passed in rather than fixed.
pub fn configure(cfg: &mut web::ServiceConfig, callback_path: &str) {
    // Landing page: /
    cfg.configure(home::configure_routes);

    // Health check: /health
    cfg.service(web::scope("/health").configure(health::configure_routes));

    // Login handshake: /auth/google and the callback
    auth::configure_routes(cfg, callback_path);

    // Session inspection: /api/me
    cfg.service(web::scope("/api").configure(me::configure_routes));
}
