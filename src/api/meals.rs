use crate::api::store::Store;
use crate::models::{AddMealRequest, CreatedMealResponse, MealsByUserRequest};
use crate::services::meal_service;
use crate::utils::{bson_to_json, document_to_json, AppError};
use actix_web::{web, Either, HttpResponse};
use mongodb::bson::Document;
use serde_json::{json, Value};

fn meal_list(meals: Vec<Document>) -> Vec<Value> {
    meals.into_iter().map(document_to_json).collect()
}

fn display_field(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
        None => "N/A".to_string(),
    }
}

#[utoipa::path(
    post,
    path = "/getMealsByUser",
    tag = "Meals",
    request_body = MealsByUserRequest,
    responses(
        (status = 200, description = "Meal documents owned by the user"),
        (status = 404, description = "No meals found for this user"),
        (status = 500, description = "Malformed user id or database failure")
    )
)]
pub async fn get_meals_by_user(
    store: Store,
    request: Either<web::Json<MealsByUserRequest>, web::Form<MealsByUserRequest>>,
) -> HttpResponse {
    let request = request.into_inner();
    let user_id = request.user_id.as_ref();
    log::info!("🍽️  POST /getMealsByUser - user: {}", display_field(user_id));

    match meal_service::get_meals_by_user(&*store, user_id).await {
        Ok(meals) => HttpResponse::Ok().json(meal_list(meals)),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().json(json!({
            "message": "No meals found for this user"
        })),
        Err(e) => {
            log::error!("❌ Error fetching meals: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Error fetching meals"
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/getMeals",
    tag = "Meals",
    responses(
        (status = 200, description = "Every stored meal document"),
        (status = 500, description = "Error fetching meals")
    )
)]
pub async fn get_meals(store: Store) -> HttpResponse {
    log::info!("🍽️  GET /getMeals");

    match meal_service::get_all_meals(&*store).await {
        Ok(meals) => HttpResponse::Ok().json(meal_list(meals)),
        Err(e) => {
            log::error!("❌ Error fetching meals: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Error fetching meals"
            }))
        }
    }
}

#[utoipa::path(
    get,
    path = "/getMealDetails/{id}",
    tag = "Meals",
    params(
        ("id" = String, Path, description = "Meal ObjectId (24 hex characters)")
    ),
    responses(
        (status = 200, description = "The stored meal document"),
        (status = 404, description = "Meal not found"),
        (status = 500, description = "Malformed id or database failure")
    )
)]
pub async fn get_meal_details(store: Store, path: web::Path<String>) -> HttpResponse {
    let meal_id = path.into_inner();
    log::info!("🍽️  GET /getMealDetails/{}", meal_id);

    match meal_service::get_meal_details(&*store, &meal_id).await {
        Ok(meal) => HttpResponse::Ok().json(document_to_json(meal)),
        Err(AppError::NotFound(_)) => HttpResponse::NotFound().json(json!({
            "error": "Meal not found"
        })),
        Err(e) => {
            log::error!("❌ Error fetching meal details: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Error fetching meal details"
            }))
        }
    }
}

#[utoipa::path(
    post,
    path = "/addMeal",
    tag = "Meals",
    request_body = AddMealRequest,
    responses(
        (status = 201, description = "Meal created", body = CreatedMealResponse),
        (status = 500, description = "Error adding meal")
    )
)]
pub async fn add_meal(
    store: Store,
    request: Either<web::Json<AddMealRequest>, web::Form<AddMealRequest>>,
) -> HttpResponse {
    let request = request.into_inner();
    log::info!(
        "➕ POST /addMeal - name: {}, user: {}",
        display_field(request.meal_name.as_ref()),
        display_field(request.user_id.as_ref())
    );

    match meal_service::add_meal(&*store, request).await {
        Ok(meal_id) => {
            let meal_id = match bson_to_json(meal_id) {
                Value::String(id) => id,
                other => other.to_string(),
            };
            log::info!("✅ Meal created: {}", meal_id);
            HttpResponse::Created().json(CreatedMealResponse {
                success: true,
                meal_id,
            })
        }
        Err(e) => {
            log::error!("❌ Error adding meal: {}", e);
            HttpResponse::InternalServerError()
                .content_type("text/plain; charset=utf-8")
                .body("Error adding meal")
        }
    }
}
