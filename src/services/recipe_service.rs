use crate::database::MealPlannerStore;
use crate::utils::AppError;
use mongodb::bson::Document;

/// Every recipe document, unfiltered.
pub async fn get_recipes(store: &dyn MealPlannerStore) -> Result<Vec<Document>, AppError> {
    store.find_all_recipes().await
}
