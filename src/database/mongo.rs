use super::{MealPlannerStore, MEALS_COLLECTION, RECIPES_COLLECTION, USERS_COLLECTION};
use crate::models::Meal;
use crate::utils::AppError;
use async_trait::async_trait;
use futures::stream::TryStreamExt;
use mongodb::bson::{doc, oid::ObjectId, Bson, Document};
use mongodb::{Client, Collection, Database, IndexModel};
use std::time::Duration;

#[derive(Clone)]
pub struct MongoDB {
    db: Database,
}

impl MongoDB {
    pub async fn new(uri: &str, database_name: &str) -> Result<Self, AppError> {
        let mut client_options = mongodb::options::ClientOptions::parse(uri).await?;

        // Connection pool
        client_options.max_pool_size = Some(20);
        client_options.min_pool_size = Some(5);
        client_options.max_idle_time = Some(Duration::from_secs(300));

        client_options.connect_timeout = Some(Duration::from_secs(5));
        client_options.server_selection_timeout = Some(Duration::from_secs(5));
        client_options.app_name = Some("MealPlanner".to_string());

        let client = Client::with_options(client_options)?;
        let db = client.database(database_name);

        // Test connection
        db.list_collection_names().await?;

        let mongodb = Self { db };
        mongodb.ensure_indexes().await;

        Ok(mongodb)
    }

    /// Lookup indexes for login/registration and per-user meal listing.
    /// Not unique: duplicate emails are rejected by the registration check only.
    async fn ensure_indexes(&self) {
        log::info!("🔧 Creating database indexes...");

        let users = self.collection::<Document>(USERS_COLLECTION);
        let email_index = IndexModel::builder().keys(doc! { "email": 1 }).build();
        match users.create_index(email_index).await {
            Ok(_) => log::info!("   ✅ Index created: User(email)"),
            Err(e) => log::debug!("   ℹ️  Index not created: {}", e),
        }

        let meals = self.collection::<Document>(MEALS_COLLECTION);
        let owner_index = IndexModel::builder().keys(doc! { "userId": 1 }).build();
        match meals.create_index(owner_index).await {
            Ok(_) => log::info!("   ✅ Index created: Meals(userId)"),
            Err(e) => log::debug!("   ℹ️  Index not created: {}", e),
        }

        log::info!("✅ Database indexes ready");
    }

    pub fn collection<T: Send + Sync>(&self, name: &str) -> Collection<T> {
        self.db.collection(name)
    }
}

#[async_trait]
impl MealPlannerStore for MongoDB {
    async fn find_user_by_credentials(
        &self,
        email: Bson,
        password: Bson,
    ) -> Result<Option<Document>, AppError> {
        let users = self.collection::<Document>(USERS_COLLECTION);
        Ok(users
            .find_one(doc! { "email": email, "password": password })
            .await?)
    }

    async fn find_user_by_email(&self, email: Bson) -> Result<Option<Document>, AppError> {
        let users = self.collection::<Document>(USERS_COLLECTION);
        Ok(users.find_one(doc! { "email": email }).await?)
    }

    async fn insert_user(&self, user: Document) -> Result<Bson, AppError> {
        let users = self.collection::<Document>(USERS_COLLECTION);
        let result = users.insert_one(user).await?;
        Ok(result.inserted_id)
    }

    async fn find_meals_by_user(&self, user_id: ObjectId) -> Result<Vec<Document>, AppError> {
        let meals = self.collection::<Document>(MEALS_COLLECTION);
        let cursor = meals.find(doc! { "userId": user_id }).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_all_meals(&self) -> Result<Vec<Document>, AppError> {
        let meals = self.collection::<Document>(MEALS_COLLECTION);
        let cursor = meals.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn find_meal(&self, meal_id: ObjectId) -> Result<Option<Document>, AppError> {
        let meals = self.collection::<Document>(MEALS_COLLECTION);
        Ok(meals.find_one(doc! { "_id": meal_id }).await?)
    }

    async fn insert_meal(&self, meal: &Meal) -> Result<Bson, AppError> {
        let meals = self.collection::<Meal>(MEALS_COLLECTION);
        let result = meals.insert_one(meal).await?;
        Ok(result.inserted_id)
    }

    async fn find_all_recipes(&self) -> Result<Vec<Document>, AppError> {
        let recipes = self.collection::<Document>(RECIPES_COLLECTION);
        let cursor = recipes.find(doc! {}).await?;
        Ok(cursor.try_collect().await?)
    }

    async fn ping(&self) -> Result<(), AppError> {
        self.db.run_command(doc! { "ping": 1 }).await?;
        Ok(())
    }
}
