use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::employee::{Employee, EmploymentPeriod};
use crate::domain::repositories::EmployeeRepository;

/// PostgreSQL implementation of EmployeeRepository
///
/// Uses runtime-checked SQLx queries so the crate builds without a live
/// database. The team reference is enforced by a foreign key constraint.
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// Creates a new PostgresEmployeeRepository
    ///
    /// # Arguments
    /// * `pool` - SQLx connection pool for PostgreSQL
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct EmployeeRow {
    id: Uuid,
    name: String,
    surname: String,
    position: String,
    team_id: Uuid,
    created_at: DateTime<Utc>,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
}

impl EmployeeRow {
    fn into_employee(self) -> Employee {
        Employee::from_persistence(
            self.id,
            self.name,
            self.surname,
            self.position,
            self.team_id,
            self.created_at,
            EmploymentPeriod::from_persistence(self.start_date, self.end_date),
        )
    }
}

const SELECT_EMPLOYEE: &str = r#"
    SELECT id, name, surname, "position", team_id, created_at, start_date, end_date
    FROM employees
"#;

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn save(&self, employee: &Employee) -> Result<(), String> {
        sqlx::query(
            r#"
            INSERT INTO employees (
                id, name, surname, "position", team_id,
                created_at, start_date, end_date
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (id) DO UPDATE SET
                name = EXCLUDED.name,
                surname = EXCLUDED.surname,
                "position" = EXCLUDED."position",
                team_id = EXCLUDED.team_id,
                start_date = EXCLUDED.start_date,
                end_date = EXCLUDED.end_date
            "#,
        )
        .bind(employee.id())
        .bind(employee.name())
        .bind(employee.surname())
        .bind(employee.position())
        .bind(employee.team_id())
        .bind(employee.created_at())
        .bind(employee.start_date())
        .bind(employee.end_date())
        .execute(&self.pool)
        .await
        .map_err(|e| format!("Failed to save employee: {}", e))?;

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, String> {
        let query = format!("{} ORDER BY created_at DESC", SELECT_EMPLOYEE);
        let rows = sqlx::query_as::<_, EmployeeRow>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| format!("Failed to list employees: {}", e))?;

        Ok(rows.into_iter().map(EmployeeRow::into_employee).collect())
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, String> {
        let query = format!("{} WHERE id = $1", SELECT_EMPLOYEE);
        let row = sqlx::query_as::<_, EmployeeRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| format!("Failed to find employee by id: {}", e))?;

        Ok(row.map(EmployeeRow::into_employee))
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete employee: {}", e))?;

        if result.rows_affected() == 0 {
            return Err(format!("Employee not found: {}", id));
        }

        Ok(())
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, String> {
        let result = sqlx::query("DELETE FROM employees WHERE id = ANY($1)")
            .bind(ids)
            .execute(&self.pool)
            .await
            .map_err(|e| format!("Failed to delete employees: {}", e))?;

        Ok(result.rows_affected())
    }
}
