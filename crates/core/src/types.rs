/// All database primary keys are PostgreSQL BIGSERIAL.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Ordering applied when listing a collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListOrder {
    /// Insertion order (ascending id).
    Inserted,
    /// Most recently created first.
    Newest,
    /// Oldest created first.
    Oldest,
}

impl ListOrder {
    /// SQL `ORDER BY` clause for this ordering. `id` breaks timestamp ties.
    pub fn order_by_clause(self) -> &'static str {
        match self {
            ListOrder::Inserted => "id ASC",
            ListOrder::Newest => "created_at DESC, id DESC",
            ListOrder::Oldest => "created_at ASC, id ASC",
        }
    }
}
