use crate::api::store::Store;
use crate::models::{user_document_from_form, user_document_from_json, CreatedUserResponse, Credentials};
use crate::services::auth_service;
use crate::utils::{bson_to_json, document_to_json, AppError};
use actix_web::{web, Either, HttpResponse};
use serde_json::{Map, Value};
use std::collections::HashMap;

#[utoipa::path(
    post,
    path = "/verifyUser",
    tag = "Auth",
    request_body = Credentials,
    responses(
        (status = 200, description = "One-element array holding the user document"),
        (status = 401, description = "Invalid credentials"),
        (status = 500, description = "Error verifying user")
    )
)]
pub async fn verify_user(
    store: Store,
    request: Either<web::Json<Credentials>, web::Form<Credentials>>,
) -> HttpResponse {
    let credentials = request.into_inner();
    let email = credentials.email.as_deref().unwrap_or("N/A");
    log::info!("🔐 POST /verifyUser - email: {}", email);

    match auth_service::verify_user(&*store, &credentials).await {
        Ok(user) => {
            log::info!("✅ Login successful: {}", email);
            HttpResponse::Ok().json([document_to_json(user)])
        }
        Err(AppError::InvalidCredentials) => {
            log::warn!("❌ Login failed: {}", email);
            HttpResponse::Unauthorized().json(serde_json::json!({
                "message": "Invalid credentials"
            }))
        }
        Err(e) => {
            log::error!("❌ Error verifying user {}: {}", email, e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Error verifying user")
        }
    }
}

#[utoipa::path(
    post,
    path = "/registerUser",
    tag = "Auth",
    request_body(content = Credentials, description = "Any additional fields are stored as submitted"),
    responses(
        (status = 201, description = "User created", body = CreatedUserResponse),
        (status = 400, description = "User already exists"),
        (status = 500, description = "Error registering user")
    )
)]
pub async fn register_user(
    store: Store,
    request: Either<web::Json<Map<String, Value>>, web::Form<HashMap<String, String>>>,
) -> HttpResponse {
    let user = match request {
        Either::Left(json) => user_document_from_json(&json),
        Either::Right(form) => Ok(user_document_from_form(form.into_inner())),
    };
    let email = user
        .as_ref()
        .ok()
        .and_then(|u| u.get_str("email").ok())
        .unwrap_or("N/A")
        .to_string();
    log::info!("📝 POST /registerUser - email: {}", email);

    let result = match user {
        Ok(user) => auth_service::register_user(&*store, user).await,
        Err(e) => Err(e),
    };

    match result {
        Ok(user_id) => {
            log::info!("✅ Registration successful: {}", email);
            let user_id = match bson_to_json(user_id) {
                Value::String(id) => id,
                other => other.to_string(),
            };
            HttpResponse::Created().json(CreatedUserResponse {
                success: true,
                user_id,
            })
        }
        Err(AppError::AlreadyExists(_)) => {
            log::warn!("❌ Registration rejected, user exists: {}", email);
            HttpResponse::BadRequest().json(serde_json::json!({
                "message": "User already exists"
            }))
        }
        Err(e) => {
            log::error!("❌ Error registering user {}: {}", email, e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Error registering user")
        }
    }
}
