mod api;
mod config;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use config::Config;
use database::{MongoDB, StoreSlot};
use dotenv::dotenv;
use std::sync::Arc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let config = Config::from_env();

    log::info!("🚀 Starting Meal Planner service...");
    log::info!("📊 Database: {}", config.database_name);

    // The server accepts connections right away; data routes answer 500
    // until the store is installed in the slot.
    let slot = StoreSlot::empty();
    let slot_data = web::Data::new(slot.clone());

    let uri = config.mongodb_uri.clone();
    let database_name = config.database_name.clone();
    actix_rt::spawn(async move {
        match MongoDB::new(&uri, &database_name).await {
            Ok(db) => {
                slot.install(Arc::new(db));
                log::info!("✅ MongoDB connected successfully");
            }
            Err(e) => log::error!("❌ Failed to connect to the database: {}", e),
        }
    });

    let (host, port) = config.bind_address();
    log::info!("🌐 Meal Planner server is running on http://{}:{}", host, port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(slot_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi),
            )
            .configure(api::configure)
    })
    .bind((host, port))?
    .run()
    .await
}
