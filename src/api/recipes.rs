use crate::api::store::Store;
use crate::services::recipe_service;
use crate::utils::document_to_json;
use actix_web::HttpResponse;
use serde_json::{json, Value};

#[utoipa::path(
    get,
    path = "/getRecipes",
    tag = "Recipes",
    responses(
        (status = 200, description = "Every stored recipe document"),
        (status = 500, description = "Error fetching recipes")
    )
)]
pub async fn get_recipes(store: Store) -> HttpResponse {
    log::info!("📖 GET /getRecipes");

    match recipe_service::get_recipes(&*store).await {
        Ok(recipes) => {
            let recipes: Vec<Value> = recipes.into_iter().map(document_to_json).collect();
            HttpResponse::Ok().json(recipes)
        }
        Err(e) => {
            log::error!("❌ Error fetching recipes: {}", e);
            HttpResponse::InternalServerError().json(json!({
                "error": "Error fetching recipes"
            }))
        }
    }
}
