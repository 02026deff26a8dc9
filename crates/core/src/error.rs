use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    UploadRejected(String),

    #[error("Internal error: {0}")]
    Internal(String),
}
