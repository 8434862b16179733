use crate::database::{MealPlannerStore, StoreSlot};
use actix_web::{dev::Payload, error::InternalError, web, FromRequest, HttpRequest, HttpResponse};
use std::future::{ready, Ready};
use std::ops::Deref;
use std::sync::Arc;

pub const NOT_INITIALIZED: &str = "Database not initialized";

/// The store client, injected into handlers from the app's `StoreSlot`.
/// Extraction fails with 500 until the startup connection has completed.
pub struct Store(Arc<dyn MealPlannerStore>);

impl Deref for Store {
    type Target = dyn MealPlannerStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl FromRequest for Store {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let store = req
            .app_data::<web::Data<StoreSlot>>()
            .and_then(|slot| slot.get());

        ready(match store {
            Some(store) => Ok(Store(store)),
            None => {
                log::warn!("⏳ {} {} rejected: {}", req.method(), req.path(), NOT_INITIALIZED);
                let response = HttpResponse::InternalServerError()
                    .content_type("text/plain; charset=utf-8")
                    .body(NOT_INITIALIZED);
                Err(InternalError::from_response(NOT_INITIALIZED, response).into())
            }
        })
    }
}
