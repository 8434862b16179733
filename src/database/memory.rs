//! Process-local store with the same matching rules as the MongoDB queries
//! the service issues. Inserted meals go through BSON serialization so stored
//! shapes match what the driver would persist.

use super::MealPlannerStore;
use crate::models::Meal;
use crate::utils::AppError;
use async_trait::async_trait;
use mongodb::bson::{self, oid::ObjectId, Bson, Document};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

#[derive(Default)]
pub struct InMemoryStore {
    users: RwLock<Vec<Document>>,
    meals: RwLock<Vec<Document>>,
    recipes: RwLock<Vec<Document>>,
    unavailable: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_recipes(recipes: Vec<Document>) -> Self {
        let store = Self::new();
        *store.recipes.write().unwrap() = recipes;
        store
    }

    /// Stores a meal document as-is, bypassing the insert path. Returns its `_id`.
    pub fn seed_meal(&self, meal: Document) -> Bson {
        let (meal, id) = with_id(meal);
        self.meals.write().unwrap().push(meal);
        id
    }

    /// Makes every subsequent call fail as if the server were unreachable.
    pub fn set_unavailable(&self, unavailable: bool) {
        self.unavailable.store(unavailable, Ordering::SeqCst);
    }

    pub fn user_count(&self) -> usize {
        self.users.read().unwrap().len()
    }

    fn check_available(&self) -> Result<(), AppError> {
        if self.unavailable.load(Ordering::SeqCst) {
            return Err(AppError::DatabaseError("store unavailable".to_string()));
        }
        Ok(())
    }
}

/// `{field: value}` equality, with null matching a missing field.
fn field_matches(doc: &Document, field: &str, expected: &Bson) -> bool {
    match (doc.get(field), expected) {
        (None, Bson::Null) => true,
        (Some(actual), expected) => actual == expected,
        (None, _) => false,
    }
}

fn with_id(mut doc: Document) -> (Document, Bson) {
    let id = match doc.get("_id") {
        Some(existing) => existing.clone(),
        None => {
            let id = Bson::ObjectId(ObjectId::new());
            doc.insert("_id", id.clone());
            id
        }
    };
    (doc, id)
}

#[async_trait]
impl MealPlannerStore for InMemoryStore {
    async fn find_user_by_credentials(
        &self,
        email: Bson,
        password: Bson,
    ) -> Result<Option<Document>, AppError> {
        self.check_available()?;
        let users = self.users.read().unwrap();
        Ok(users
            .iter()
            .find(|u| field_matches(u, "email", &email) && field_matches(u, "password", &password))
            .cloned())
    }

    async fn find_user_by_email(&self, email: Bson) -> Result<Option<Document>, AppError> {
        self.check_available()?;
        let users = self.users.read().unwrap();
        Ok(users
            .iter()
            .find(|u| field_matches(u, "email", &email))
            .cloned())
    }

    async fn insert_user(&self, user: Document) -> Result<Bson, AppError> {
        self.check_available()?;
        let (user, id) = with_id(user);
        self.users.write().unwrap().push(user);
        Ok(id)
    }

    async fn find_meals_by_user(&self, user_id: ObjectId) -> Result<Vec<Document>, AppError> {
        self.check_available()?;
        let owner = Bson::ObjectId(user_id);
        let meals = self.meals.read().unwrap();
        Ok(meals
            .iter()
            .filter(|m| field_matches(m, "userId", &owner))
            .cloned()
            .collect())
    }

    async fn find_all_meals(&self) -> Result<Vec<Document>, AppError> {
        self.check_available()?;
        Ok(self.meals.read().unwrap().clone())
    }

    async fn find_meal(&self, meal_id: ObjectId) -> Result<Option<Document>, AppError> {
        self.check_available()?;
        let id = Bson::ObjectId(meal_id);
        let meals = self.meals.read().unwrap();
        Ok(meals.iter().find(|m| field_matches(m, "_id", &id)).cloned())
    }

    async fn insert_meal(&self, meal: &Meal) -> Result<Bson, AppError> {
        self.check_available()?;
        let (doc, id) = with_id(bson::to_document(meal)?);
        self.meals.write().unwrap().push(doc);
        Ok(id)
    }

    async fn find_all_recipes(&self) -> Result<Vec<Document>, AppError> {
        self.check_available()?;
        Ok(self.recipes.read().unwrap().clone())
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.check_available()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::doc;

    #[tokio::test]
    async fn test_null_filter_matches_missing_field() {
        let store = InMemoryStore::new();
        store.insert_user(doc! { "name": "no email" }).await.unwrap();

        let found = store.find_user_by_email(Bson::Null).await.unwrap();
        assert!(found.is_some());
        let missing = store
            .find_user_by_email(Bson::String("a@b.c".into()))
            .await
            .unwrap();
        assert!(missing.is_none());
    }

    #[tokio::test]
    async fn test_insert_keeps_supplied_id() {
        let store = InMemoryStore::new();
        let id = store
            .insert_user(doc! { "_id": "custom", "email": "x@y.z" })
            .await
            .unwrap();
        assert_eq!(id, Bson::String("custom".into()));
    }

    #[tokio::test]
    async fn test_unavailable_store_fails_every_call() {
        let store = InMemoryStore::new();
        store.set_unavailable(true);
        assert!(matches!(store.ping().await, Err(AppError::DatabaseError(_))));
        assert!(store.find_all_recipes().await.is_err());
    }
}
