//! Repository for the `projects` table.

use folio_core::project::ProjectFields;
use folio_core::types::{DbId, ListOrder};
use sqlx::PgPool;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, title, image, platform, category, live_view, timelines, services, created_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project, returning the created row.
    pub async fn create(pool: &PgPool, input: &ProjectFields) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (title, image, platform, category, live_view, timelines, services)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(&input.title)
            .bind(&input.image)
            .bind(&input.platform)
            .bind(&input.category)
            .bind(&input.live_view)
            .bind(&input.timelines)
            .bind(&input.services)
            .fetch_one(pool)
            .await
    }

    /// Find a project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all projects in the requested order.
    pub async fn list(pool: &PgPool, order: ListOrder) -> Result<Vec<Project>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM projects ORDER BY {}",
            order.order_by_clause()
        );
        sqlx::query_as::<_, Project>(&query).fetch_all(pool).await
    }

    /// Overwrite every business field of a project. `created_at` is untouched.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &ProjectFields,
    ) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects SET
                title = $2,
                image = $3,
                platform = $4,
                category = $5,
                live_view = $6,
                timelines = $7,
                services = $8
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.image)
            .bind(&input.platform)
            .bind(&input.category)
            .bind(&input.live_view)
            .bind(&input.timelines)
            .bind(&input.services)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a project by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM projects WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
