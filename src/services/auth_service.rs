use crate::database::MealPlannerStore;
use crate::models::{optional_string, Credentials};
use crate::utils::AppError;
use mongodb::bson::{Bson, Document};

// Credentials are stored and compared as submitted; there is no hashing and
// no session. Callers resubmit credentials or keep the returned `_id`.

/// User login: one equality lookup on email + password.
pub async fn verify_user(
    store: &dyn MealPlannerStore,
    credentials: &Credentials,
) -> Result<Document, AppError> {
    let email = optional_string(credentials.email.as_deref());
    let password = optional_string(credentials.password.as_deref());

    store
        .find_user_by_credentials(email, password)
        .await?
        .ok_or(AppError::InvalidCredentials)
}

/// User registration. The payload is inserted verbatim unless a user with
/// the same email already exists.
pub async fn register_user(
    store: &dyn MealPlannerStore,
    user: Document,
) -> Result<Bson, AppError> {
    let email = user.get("email").cloned().unwrap_or(Bson::Null);

    if store.find_user_by_email(email.clone()).await?.is_some() {
        return Err(AppError::AlreadyExists(email.to_string()));
    }

    store.insert_user(user).await
}
