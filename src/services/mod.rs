pub mod auth_service;
pub mod meal_service;
pub mod recipe_service;
