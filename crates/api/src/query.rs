//! Shared query parameter types for API handlers.

use folio_core::types::ListOrder;
use serde::Deserialize;

/// Ordering parameter for list endpoints (`?order=inserted|newest|oldest`).
///
/// Each resource chooses its own default when the parameter is omitted.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub order: Option<ListOrder>,
}
