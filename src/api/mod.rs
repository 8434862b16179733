pub mod auth;
pub mod health;
pub mod meals;
pub mod recipes;
pub mod store;
pub mod swagger;

use actix_web::web;

/// Route table. Paths are the ones existing clients already call.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(health::root))
        .route("/health", web::get().to(health::health_check))
        // Auth
        .route("/verifyUser", web::post().to(auth::verify_user))
        .route("/registerUser", web::post().to(auth::register_user))
        // Meals
        .route("/getMealsByUser", web::post().to(meals::get_meals_by_user))
        .route("/getMeals", web::get().to(meals::get_meals))
        .route("/getMealDetails/{id}", web::get().to(meals::get_meal_details))
        .route("/addMeal", web::post().to(meals::add_meal))
        // Recipes
        .route("/getRecipes", web::get().to(recipes::get_recipes));
}
