use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use bmi_meals::config::{LogFormat, Settings};
use bmi_meals::core::Recommender;
use bmi_meals::routes::{self, AppState};
use bmi_meals::services::Dataset;
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Load configuration
    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("Failed to load configuration: {}", e);
            return Err(std::io::Error::new(std::io::ErrorKind::InvalidInput, e.to_string()));
        }
    };

    // Initialize logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&settings.logging.level));

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_level(true);

    match settings.logging.log_format() {
        LogFormat::Pretty => subscriber.pretty().init(),
        LogFormat::Compact => subscriber.compact().init(),
        LogFormat::Json => subscriber.json().init(),
    }

    info!("Starting BMI meals service...");

    // Load the nutrition dataset once; it is read-only from here on
    let dataset = match Dataset::load(&settings.dataset.path).await {
        Ok(dataset) => Arc::new(dataset),
        Err(e) => {
            error!("Failed to load dataset from {}: {}", settings.dataset.path, e);
            return Err(std::io::Error::new(std::io::ErrorKind::Other, e.to_string()));
        }
    };

    if dataset.is_empty() {
        error!("Dataset {} contains no usable rows", settings.dataset.path);
    }

    let app_state = AppState {
        recommender: Recommender::new(dataset),
        display_limit: settings.recommendations.display_limit,
    };

    // Configure HTTP server
    let host = settings.server.host.clone();
    let port = settings.server.port;
    let workers = settings.server.workers.unwrap_or(4);

    info!("Starting HTTP server on {}:{}", host, port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(app_state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .wrap(middleware::Compress::default())
            .configure(routes::configure_routes)
    })
    .workers(workers)
    .bind((host, port))?
    .run()
    .await
}
