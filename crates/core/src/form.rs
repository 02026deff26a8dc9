//! Form documents: a titled list of sections, each holding questions.
//!
//! Incoming payloads keep every field as raw JSON so that type and shape
//! errors are reported as validation failures (with a path such as
//! `sections[1].questions[0]...` for nested ones) instead of an opaque
//! deserialization rejection.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::CoreError;

/// A single question inside a section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub question_text: String,
    #[serde(default)]
    pub answer_text: String,
}

/// An ordered group of questions under an optional subheading.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(default)]
    pub subheading: String,
    #[serde(default)]
    pub questions: Vec<Question>,
}

/// Raw request body for both create and update.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FormPayload {
    pub title: Option<Value>,
    pub image: Option<Value>,
    pub sections: Option<Value>,
}

/// A fully validated form ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewForm {
    pub title: String,
    pub image: Option<String>,
    pub sections: Vec<Section>,
}

/// A validated partial update. `None` fields keep their stored value.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormPatch {
    pub title: Option<String>,
    pub image: Option<String>,
    pub sections: Option<Vec<Section>>,
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

/// Validate a create payload. Missing `sections` means an empty list.
pub fn validate_form(payload: &FormPayload) -> Result<NewForm, CoreError> {
    let title = match &payload.title {
        Some(title) => validate_title(title)?,
        None => return Err(CoreError::Validation("title required".into())),
    };

    let sections = match &payload.sections {
        Some(value) => parse_sections(value)?,
        None => Vec::new(),
    };

    Ok(NewForm {
        title,
        image: parse_image(payload.image.as_ref())?,
        sections,
    })
}

/// Validate an update payload field by field.
///
/// Every supplied field must satisfy the same rule as on create, so merging
/// the patch into a stored form always yields a valid form.
pub fn validate_form_patch(payload: &FormPayload) -> Result<FormPatch, CoreError> {
    let title = payload.title.as_ref().map(validate_title).transpose()?;
    let sections = payload.sections.as_ref().map(parse_sections).transpose()?;

    Ok(FormPatch {
        title,
        image: parse_image(payload.image.as_ref())?,
        sections,
    })
}

/// A title must be a string with at least one non-whitespace character.
fn validate_title(title: &Value) -> Result<String, CoreError> {
    match title {
        Value::String(text) if !text.trim().is_empty() => Ok(text.clone()),
        _ => Err(CoreError::Validation("title required".into())),
    }
}

fn parse_image(image: Option<&Value>) -> Result<Option<String>, CoreError> {
    match image {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(url)) => Ok(Some(url.clone())),
        Some(_) => Err(CoreError::Validation("image must be a string".into())),
    }
}

/// Parse and validate the nested `sections` tree.
pub fn parse_sections(value: &Value) -> Result<Vec<Section>, CoreError> {
    let items = value
        .as_array()
        .ok_or_else(|| CoreError::Validation("sections must be an array".into()))?;

    items
        .iter()
        .enumerate()
        .map(|(i, item)| parse_section(i, item))
        .collect()
}

fn parse_section(index: usize, value: &Value) -> Result<Section, CoreError> {
    let path = format!("sections[{index}]");
    let obj = value
        .as_object()
        .ok_or_else(|| CoreError::Validation(format!("{path} must be an object")))?;

    let subheading = optional_string(obj.get("subheading"), &path, "subheading")?;

    let questions = match obj.get("questions") {
        None | Some(Value::Null) => Vec::new(),
        Some(Value::Array(items)) => items
            .iter()
            .enumerate()
            .map(|(j, item)| parse_question(&format!("{path}.questions[{j}]"), item))
            .collect::<Result<Vec<_>, _>>()?,
        Some(_) => {
            return Err(CoreError::Validation(format!(
                "{path}.questions must be an array"
            )))
        }
    };

    Ok(Section {
        subheading,
        questions,
    })
}

fn parse_question(path: &str, value: &Value) -> Result<Question, CoreError> {
    let obj = value
        .as_object()
        .ok_or_else(|| CoreError::Validation(format!("{path} must be an object")))?;

    let question_text = match obj.get("questionText") {
        Some(Value::String(text)) if !text.trim().is_empty() => text.clone(),
        _ => {
            return Err(CoreError::Validation(format!(
                "{path}.questionText required"
            )))
        }
    };
    let answer_text = optional_string(obj.get("answerText"), path, "answerText")?;

    Ok(Question {
        question_text,
        answer_text,
    })
}

/// Absent or null yields an empty string; anything other than a string is rejected.
fn optional_string(value: Option<&Value>, path: &str, field: &str) -> Result<String, CoreError> {
    match value {
        None | Some(Value::Null) => Ok(String::new()),
        Some(Value::String(s)) => Ok(s.clone()),
        Some(_) => Err(CoreError::Validation(format!(
            "{path}.{field} must be a string"
        ))),
    }
}
