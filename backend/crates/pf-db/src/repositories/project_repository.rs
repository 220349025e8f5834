//! Project repository for CRUD operations on projects.
//!
//! Ids come from `INTEGER PRIMARY KEY AUTOINCREMENT`, so an id is never
//! handed out twice, even after the row holding it is deleted.
//!
//! Timestamps are stored as integer microseconds since the Unix epoch.

use crate::{DbError, Result as DbErrorResult};

use pf_core::{NewProject, Project, current_timestamp};

use std::panic::Location;

use chrono::{DateTime, Utc};
use error_location::ErrorLocation;
use sqlx::{FromRow, SqlitePool};

#[derive(Debug, FromRow)]
struct ProjectRow {
    id: i64,
    title: String,
    description: String,
    created_at: i64,
    updated_at: i64,
}

impl TryFrom<ProjectRow> for Project {
    type Error = DbError;

    #[track_caller]
    fn try_from(r: ProjectRow) -> DbErrorResult<Self> {
        Ok(Project {
            id: r.id,
            title: r.title,
            description: r.description,
            created_at: from_micros(r.created_at, "created_at")?,
            updated_at: from_micros(r.updated_at, "updated_at")?,
        })
    }
}

#[track_caller]
fn from_micros(value: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_micros(value).ok_or_else(|| DbError::InvalidRow {
        message: format!("Invalid timestamp in project.{}: {}", column, value),
        location: ErrorLocation::from(Location::caller()),
    })
}

#[derive(Clone)]
pub struct ProjectRepository {
    pool: SqlitePool,
}

impl ProjectRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a project and return it with its generated id and timestamps.
    pub async fn create(&self, project: &NewProject) -> DbErrorResult<Project> {
        let now = current_timestamp();
        let now_micros = now.timestamp_micros();

        let result = sqlx::query(
            r#"
                INSERT INTO pf_projects (title, description, created_at, updated_at)
                VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(now_micros)
        .bind(now_micros)
        .execute(&self.pool)
        .await?;

        Ok(Project {
            id: result.last_insert_rowid(),
            title: project.title.clone(),
            description: project.description.clone(),
            created_at: now,
            updated_at: now,
        })
    }

    pub async fn find_by_id(&self, id: i64) -> DbErrorResult<Option<Project>> {
        let row = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, title, description, created_at, updated_at
                FROM pf_projects
                WHERE id = ?
            "#,
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(Project::try_from).transpose()
    }

    /// Every project, oldest first.
    pub async fn find_all(&self) -> DbErrorResult<Vec<Project>> {
        let rows = sqlx::query_as::<_, ProjectRow>(
            r#"
                SELECT id, title, description, created_at, updated_at
                FROM pf_projects
                ORDER BY id
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter()
            .map(Project::try_from)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Persist the writable fields and `updated_at`.
    /// Returns false when no row with `project.id` exists.
    pub async fn update(&self, project: &Project) -> DbErrorResult<bool> {
        let result = sqlx::query(
            r#"
                UPDATE pf_projects
                SET title = ?, description = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&project.title)
        .bind(&project.description)
        .bind(project.updated_at.timestamp_micros())
        .bind(project.id)
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Returns false when no row with `id` exists.
    pub async fn delete(&self, id: i64) -> DbErrorResult<bool> {
        let result = sqlx::query("DELETE FROM pf_projects WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
