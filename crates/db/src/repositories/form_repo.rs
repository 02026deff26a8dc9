//! Repository for the `forms` table.

use folio_core::form::{FormPatch, NewForm};
use folio_core::types::{DbId, ListOrder};
use sqlx::types::Json;
use sqlx::PgPool;

use crate::models::form::Form;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, image, sections, created_at";

/// Provides CRUD operations for forms.
pub struct FormRepo;

impl FormRepo {
    /// Insert a new form, returning the created row.
    pub async fn create(pool: &PgPool, input: &NewForm) -> Result<Form, sqlx::Error> {
        let query = format!(
            "INSERT INTO forms (title, image, sections)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(&input.title)
            .bind(&input.image)
            .bind(Json(&input.sections))
            .fetch_one(pool)
            .await
    }

    /// Find a form by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Form>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM forms WHERE id = $1");
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all forms in the requested order.
    pub async fn list(pool: &PgPool, order: ListOrder) -> Result<Vec<Form>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM forms ORDER BY {}",
            order.order_by_clause()
        );
        sqlx::query_as::<_, Form>(&query).fetch_all(pool).await
    }

    /// Update a form. Only non-`None` fields in `input` are applied; a
    /// supplied `sections` list replaces the stored one entirely.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &FormPatch,
    ) -> Result<Option<Form>, sqlx::Error> {
        let query = format!(
            "UPDATE forms SET
                title = COALESCE($2, title),
                image = COALESCE($3, image),
                sections = COALESCE($4, sections)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Form>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image)
            .bind(input.sections.as_ref().map(Json))
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a form by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM forms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
