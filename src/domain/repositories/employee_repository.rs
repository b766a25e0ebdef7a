use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::employee::Employee;

/// Repository trait for the Employee aggregate
///
/// Defines the contract for persisting and retrieving employees.
/// Implementations should handle database-specific details; the router
/// only ever sees this trait.
#[async_trait]
pub trait EmployeeRepository: Send + Sync {
    /// Save an employee (insert or update)
    ///
    /// Fails when the employee's team reference does not exist.
    async fn save(&self, employee: &Employee) -> Result<(), String>;

    /// Find all employees, newest first
    async fn find_all(&self) -> Result<Vec<Employee>, String>;

    /// Find an employee by ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, String>;

    /// Delete an employee by ID; fails when the id does not exist
    async fn delete(&self, id: Uuid) -> Result<(), String>;

    /// Delete every listed employee, skipping ids without a record
    ///
    /// Returns the number of employees actually removed.
    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, String>;
}
