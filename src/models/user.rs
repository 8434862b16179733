use crate::utils::AppError;
use mongodb::bson::{self, Bson, Document};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Login payload. Absent fields are matched as null.
#[derive(Debug, Deserialize, utoipa::ToSchema)]
pub struct Credentials {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, utoipa::ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUserResponse {
    pub success: bool,
    pub user_id: String,
}

/// Registration payloads are stored verbatim, whatever fields they carry.
pub fn user_document_from_json(fields: &Map<String, Value>) -> Result<Document, AppError> {
    Ok(bson::to_document(fields)?)
}

pub fn user_document_from_form(fields: HashMap<String, String>) -> Document {
    fields
        .into_iter()
        .map(|(key, value)| (key, Bson::String(value)))
        .collect()
}

pub fn optional_string(value: Option<&str>) -> Bson {
    value.map(|s| Bson::String(s.to_string())).unwrap_or(Bson::Null)
}
