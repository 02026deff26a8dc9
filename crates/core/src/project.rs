//! Portfolio project validation.
//!
//! A project has seven business fields, all required. There is no partial
//! update: create and update both go through [`validate_project`].

use serde::Deserialize;
use serde_json::Value;
use validator::Validate;

use crate::error::CoreError;

/// Message returned for any missing or blank project field.
pub const ALL_FIELDS_REQUIRED: &str = "All fields are required";

/// Raw request body for create and update.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectPayload {
    pub title: Option<Value>,
    pub image: Option<Value>,
    pub platform: Option<Value>,
    pub category: Option<Value>,
    pub live_view: Option<Value>,
    pub timelines: Option<Value>,
    pub services: Option<Value>,
}

/// Trimmed, non-empty project fields ready to be written.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ProjectFields {
    #[validate(length(min = 1))]
    pub title: String,
    #[validate(length(min = 1))]
    pub image: String,
    #[validate(length(min = 1))]
    pub platform: String,
    #[validate(length(min = 1))]
    pub category: String,
    #[validate(length(min = 1))]
    pub live_view: String,
    #[validate(length(min = 1))]
    pub timelines: String,
    #[validate(length(min = 1))]
    pub services: String,
}

/// Trim every field and require all seven to be non-empty strings.
///
/// A field of any other JSON type counts as missing.
pub fn validate_project(payload: &ProjectPayload) -> Result<ProjectFields, CoreError> {
    let trimmed = |value: &Option<Value>| {
        value
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or("")
            .trim()
            .to_string()
    };

    let fields = ProjectFields {
        title: trimmed(&payload.title),
        image: trimmed(&payload.image),
        platform: trimmed(&payload.platform),
        category: trimmed(&payload.category),
        live_view: trimmed(&payload.live_view),
        timelines: trimmed(&payload.timelines),
        services: trimmed(&payload.services),
    };

    fields
        .validate()
        .map_err(|_| CoreError::Validation(ALL_FIELDS_REQUIRED.into()))?;

    Ok(fields)
}
