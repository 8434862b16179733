use crate::api::store::Store;
use crate::database::StoreSlot;
use actix_web::{web, HttpResponse, Responder};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub version: String,
    pub database: String,
    pub timestamp: i64,
}

#[utoipa::path(
    get,
    path = "/",
    tag = "Health",
    responses(
        (status = 200, description = "Database is connected"),
        (status = 500, description = "Database not initialized")
    )
)]
pub async fn root(_store: Store) -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body("Database is connected and initialized")
}

#[utoipa::path(
    get,
    path = "/health",
    tag = "Health",
    responses(
        (status = 200, description = "Service status", body = HealthResponse)
    )
)]
pub async fn health_check(slot: web::Data<StoreSlot>) -> impl Responder {
    let database = match slot.get() {
        Some(store) => match store.ping().await {
            Ok(()) => "connected",
            Err(e) => {
                log::warn!("⚠️  Health ping failed: {}", e);
                "unreachable"
            }
        },
        None => "initializing",
    };

    let status = if database == "connected" { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        service: "meal-planner-service".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        database: database.to_string(),
        timestamp: chrono::Utc::now().timestamp(),
    })
}
