pub mod mongo;

#[cfg(test)]
pub mod memory;

use crate::models::Meal;
use crate::utils::AppError;
use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use std::sync::{Arc, OnceLock};

pub use mongo::MongoDB;

pub const USERS_COLLECTION: &str = "User";
pub const MEALS_COLLECTION: &str = "Meals";
pub const RECIPES_COLLECTION: &str = "Recipes";

/// Every read and write the HTTP surface performs. Each call maps to one
/// database operation.
#[async_trait]
pub trait MealPlannerStore: Send + Sync {
    /// Equality match on both fields; `Bson::Null` matches a null or absent field.
    async fn find_user_by_credentials(
        &self,
        email: Bson,
        password: Bson,
    ) -> Result<Option<Document>, AppError>;

    async fn find_user_by_email(&self, email: Bson) -> Result<Option<Document>, AppError>;

    /// Returns the generated `_id` (or the one the payload carried).
    async fn insert_user(&self, user: Document) -> Result<Bson, AppError>;

    /// Meal reads return stored documents unchanged, whatever their shape.
    async fn find_meals_by_user(&self, user_id: ObjectId) -> Result<Vec<Document>, AppError>;

    async fn find_all_meals(&self) -> Result<Vec<Document>, AppError>;

    async fn find_meal(&self, meal_id: ObjectId) -> Result<Option<Document>, AppError>;

    async fn insert_meal(&self, meal: &Meal) -> Result<Bson, AppError>;

    async fn find_all_recipes(&self) -> Result<Vec<Document>, AppError>;

    async fn ping(&self) -> Result<(), AppError>;
}

/// Holds the store client once the startup connection succeeds. Requests
/// that arrive before then see an empty slot.
#[derive(Clone, Default)]
pub struct StoreSlot {
    inner: Arc<OnceLock<Arc<dyn MealPlannerStore>>>,
}

impl StoreSlot {
    pub fn empty() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn ready(store: Arc<dyn MealPlannerStore>) -> Self {
        let slot = Self::empty();
        slot.install(store);
        slot
    }

    /// Installs the store. Returns false if one was already installed.
    pub fn install(&self, store: Arc<dyn MealPlannerStore>) -> bool {
        self.inner.set(store).is_ok()
    }

    pub fn get(&self) -> Option<Arc<dyn MealPlannerStore>> {
        self.inner.get().cloned()
    }

    pub fn is_ready(&self) -> bool {
        self.inner.get().is_some()
    }
}
