use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::repositories::TeamRepository;
use crate::domain::team::Team;

/// PostgreSQL implementation of TeamRepository
///
/// Uses runtime-checked SQLx queries so the crate builds without a live
/// database. The parent reference is enforced by a foreign key constraint.
pub struct PostgresTeamRepository {
    pool: PgPool,
}

impl PostgresTeamRepository {
    /// Creates a new PostgresTeamRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct TeamRow {
    id: Uuid,
    name: String,
    parent_team_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl TeamRow {
    fn into_team(self) -> Team {
        Team::from_persistence(self.id, self.name, self.parent_team_id, self.created_at)
    }
}

#[async_trait]
impl TeamRepository for PostgresTeamRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO teams (id, name, parent_team_id, created_at)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                parent_team_id = EXCLUDED.parent_team_id
            "#,
        )
        .bind(team.id())
        .bind(team.name())
        .bind(team.parent_team_id())
        .bind(team.created_at())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save team: {}", e))?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Team>, String> {
        let rows = sqlx::query_as::<_, TeamRow>(
            "SELECT id, name, parent_team_id, created_at FROM teams ORDER BY created_at DESC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| format!("Failed to list teams: {}", e))?;

        Ok(rows.into_iter().map(TeamRow::into_team).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        let row = sqlx::query_as::<_, TeamRow>(
            "SELECT id, name, parent_team_id, created_at FROM teams WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| format!("Failed to find team by id: {}", e))?;

        Ok(row.map(TeamRow::into_team))
    }
}
