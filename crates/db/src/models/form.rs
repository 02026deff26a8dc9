//! Form entity model.

use folio_core::form::Section;
use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;

/// A row from the `forms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Form {
    pub id: DbId,
    pub title: String,
    pub image: Option<String>,
    pub sections: Json<Vec<Section>>,
    pub created_at: Timestamp,
}
