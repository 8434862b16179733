use crate::database::MealPlannerStore;
use crate::models::{submitted_field, AddMealRequest, MacroValue, Meal};
use crate::utils::AppError;
use mongodb::bson::{oid::ObjectId, Bson, Document};
use serde_json::Value;

/// Owner ids are parsed strictly; an absent (or null) id yields a freshly
/// generated one, which matches no stored meals.
pub fn parse_owner_id(raw: Option<&Value>) -> Result<ObjectId, AppError> {
    match raw {
        Some(Value::String(hex)) => Ok(ObjectId::parse_str(hex)?),
        None | Some(Value::Null) => Ok(ObjectId::new()),
        Some(other) => Err(AppError::InvalidId(other.to_string())),
    }
}

/// Meals owned by `user_id`. An empty result is reported as `NotFound`.
pub async fn get_meals_by_user(
    store: &dyn MealPlannerStore,
    user_id: Option<&Value>,
) -> Result<Vec<Document>, AppError> {
    let owner = parse_owner_id(user_id)?;
    let meals = store.find_meals_by_user(owner).await?;

    if meals.is_empty() {
        return Err(AppError::NotFound(format!("meals for user {}", owner.to_hex())));
    }

    Ok(meals)
}

pub async fn get_all_meals(store: &dyn MealPlannerStore) -> Result<Vec<Document>, AppError> {
    store.find_all_meals().await
}

pub async fn get_meal_details(
    store: &dyn MealPlannerStore,
    meal_id: &str,
) -> Result<Document, AppError> {
    let id = ObjectId::parse_str(meal_id)?;
    store
        .find_meal(id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("meal {}", meal_id)))
}

/// Builds the stored meal from a submission: macros are coerced, `userId`
/// becomes an ObjectId, everything else is kept as submitted.
pub fn build_meal(request: AddMealRequest) -> Result<Meal, AppError> {
    let user_id = parse_owner_id(request.user_id.as_ref())?;

    Ok(Meal {
        meal_name: submitted_field(request.meal_name.as_ref())?,
        meal_date: submitted_field(request.meal_date.as_ref())?,
        meal_description: submitted_field(request.meal_description.as_ref())?,
        meal_calories: MacroValue::coerce(request.meal_calories.as_ref()),
        proteins: MacroValue::coerce(request.proteins.as_ref()),
        fats: MacroValue::coerce(request.fats.as_ref()),
        carbs: MacroValue::coerce(request.carbs.as_ref()),
        ingredients: submitted_field(request.ingredients.as_ref())?,
        user_id,
    })
}

pub async fn add_meal(
    store: &dyn MealPlannerStore,
    request: AddMealRequest,
) -> Result<Bson, AppError> {
    let meal = build_meal(request)?;
    store.insert_meal(&meal).await
}
