//! Project entity model.

use folio_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub image: String,
    pub platform: String,
    pub category: String,
    pub live_view: String,
    pub timelines: String,
    pub services: String,
    pub created_at: Timestamp,
}
