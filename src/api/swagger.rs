use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Meal Planner API",
        version = "1.0.0",
        description = "Users, meals and recipes for the meal planner app.\n\n**Authentication:** none. `/verifyUser` checks stored credentials and returns the user document; clients keep its `_id` for later requests."
    ),
    paths(
        // Health
        crate::api::health::root,
        crate::api::health::health_check,

        // Auth
        crate::api::auth::verify_user,
        crate::api::auth::register_user,

        // Meals
        crate::api::meals::get_meals_by_user,
        crate::api::meals::get_meals,
        crate::api::meals::get_meal_details,
        crate::api::meals::add_meal,

        // Recipes
        crate::api::recipes::get_recipes,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::Credentials,
            crate::models::CreatedUserResponse,
            crate::models::MealsByUserRequest,
            crate::models::AddMealRequest,
            crate::models::CreatedMealResponse,
        )
    ),
    tags(
        (name = "Health", description = "Connection status of the service and its database."),
        (name = "Auth", description = "Registration and credential checks against the User collection."),
        (name = "Meals", description = "Meal records: insert, list per user, list all, fetch by id."),
        (name = "Recipes", description = "Read-only recipe catalog."),
    )
)]
pub struct ApiDoc;
