use std::sync::Arc;

use actix_web::{web, App, HttpServer};
use login_backend::config::AppConfig;
use login_backend::middleware::{RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan};
use login_backend::oauth::google::GoogleOAuthClient;
use login_backend::routes;
use login_backend::state::app_state::AppState;

mod telemetry;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment:
    // - Docker: docker-compose env_file or docker run --env-file
    // - Local dev: source an env file (e.g., set -a; . ./.env; set +a)
    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {e}");
            std::process::exit(1);
        }
    };

    let google = match GoogleOAuthClient::new(config.google_oauth()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Failed to build Google OAuth client: {e}");
            std::process::exit(1);
        }
    };

    let app_state = AppState::from_config(&config, Arc::new(google));
    let callback_path = config.callback_path.clone();

    println!(
        "🚀 Starting login backend on http://{}:{} (callback {})",
        config.host,
        config.port,
        config.redirect_uri()
    );

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        let callback_path = callback_path.clone();
        App::new()
            .wrap(SecurityHeaders::new(&callback_path))
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(|cfg| routes::configure(cfg, &callback_path))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await
}
