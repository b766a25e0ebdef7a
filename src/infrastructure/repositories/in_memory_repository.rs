use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::employee::Employee;
use crate::domain::repositories::{EmployeeRepository, TeamRepository};
use crate::domain::team::Team;

/// In-memory implementation of both repository traits
///
/// A single store implements the employee and team capabilities so the
/// referential checks between them (employee -> team, team -> parent)
/// mirror the foreign keys of the PostgreSQL schema. Backs the
/// integration tests, which therefore need no database.
#[derive(Default)]
#[allow(dead_code)]
pub struct InMemoryRepository {
    teams: RwLock<HashMap<Uuid, Team>>,
    employees: RwLock<HashMap<Uuid, Employee>>,
}

#[allow(dead_code)]
impl InMemoryRepository {
    /// Creates an empty store
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl EmployeeRepository for InMemoryRepository {
    async fn save(&self, employee: &Employee) -> Result<(), String> {
        let team_exists = self
            .teams
            .read()
            .map_err(|_| "team store lock poisoned".to_string())?
            .contains_key(&employee.team_id());

        if !team_exists {
            return Err(format!(
                "team_id {} does not reference an existing team",
                employee.team_id()
            ));
        }

        self.employees
            .write()
            .map_err(|_| "employee store lock poisoned".to_string())?
            .insert(employee.id(), employee.clone());

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Employee>, String> {
        let mut employees: Vec<Employee> = self
            .employees
            .read()
            .map_err(|_| "employee store lock poisoned".to_string())?
            .values()
            .cloned()
            .collect();

        employees.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(employees)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Employee>, String> {
        Ok(self
            .employees
            .read()
            .map_err(|_| "employee store lock poisoned".to_string())?
            .get(&id)
            .cloned())
    }

    async fn delete(&self, id: Uuid) -> Result<(), String> {
        self.employees
            .write()
            .map_err(|_| "employee store lock poisoned".to_string())?
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| format!("Employee not found: {}", id))
    }

    async fn delete_many(&self, ids: &[Uuid]) -> Result<u64, String> {
        let mut employees = self
            .employees
            .write()
            .map_err(|_| "employee store lock poisoned".to_string())?;

        let mut removed = 0;
        for id in ids {
            if employees.remove(id).is_some() {
                removed += 1;
            }
        }

        Ok(removed)
    }
}

#[async_trait]
impl TeamRepository for InMemoryRepository {
    async fn save(&self, team: &Team) -> Result<(), String> {
        let mut teams = self
            .teams
            .write()
            .map_err(|_| "team store lock poisoned".to_string())?;

        if let Some(parent_id) = team.parent_team_id() {
            if !teams.contains_key(&parent_id) {
                return Err(format!(
                    "parent_team_id {} does not reference an existing team",
                    parent_id
                ));
            }
        }

        teams.insert(team.id(), team.clone());

        Ok(())
    }

    async fn find_all(&self) -> Result<Vec<Team>, String> {
        let mut teams: Vec<Team> = self
            .teams
            .read()
            .map_err(|_| "team store lock poisoned".to_string())?
            .values()
            .cloned()
            .collect();

        teams.sort_by(|a, b| b.created_at().cmp(&a.created_at()));

        Ok(teams)
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String> {
        Ok(self
            .teams
            .read()
            .map_err(|_| "team store lock poisoned".to_string())?
            .get(&id)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::employee::EmploymentPeriod;

    async fn store_with_team() -> (InMemoryRepository, Uuid) {
        let store = InMemoryRepository::new();
        let (team, _) = Team::new("Platform".to_string(), None).unwrap();
        let team_id = team.id();
        TeamRepository::save(&store, &team).await.unwrap();
        (store, team_id)
    }

    fn sample_employee(team_id: Uuid) -> Employee {
        Employee::new(
            "Jana".to_string(),
            "Novotna".to_string(),
            "Engineer".to_string(),
            team_id,
            EmploymentPeriod::default(),
        )
        .unwrap()
        .0
    }

    #[tokio::test]
    async fn save_and_find_employee() {
        let (store, team_id) = store_with_team().await;
        let employee = sample_employee(team_id);

        EmployeeRepository::save(&store, &employee).await.unwrap();

        let found = EmployeeRepository::find_by_id(&store, employee.id())
            .await
            .unwrap();
        assert!(found.is_some());
        assert_eq!(found.unwrap().name(), "Jana");
    }

    #[tokio::test]
    async fn save_employee_with_unknown_team_fails() {
        let store = InMemoryRepository::new();
        let employee = sample_employee(Uuid::new_v4());

        let result = EmployeeRepository::save(&store, &employee).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("team"));
    }

    #[tokio::test]
    async fn save_is_upsert() {
        let (store, team_id) = store_with_team().await;
        let employee = sample_employee(team_id);
        EmployeeRepository::save(&store, &employee).await.unwrap();

        let updated = Employee::from_persistence(
            employee.id(),
            employee.name().to_string(),
            employee.surname().to_string(),
            "Senior Engineer".to_string(),
            employee.team_id(),
            employee.created_at(),
            EmploymentPeriod::default(),
        );
        EmployeeRepository::save(&store, &updated).await.unwrap();

        let all = EmployeeRepository::find_all(&store).await.unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].position(), "Senior Engineer");
    }

    #[tokio::test]
    async fn find_missing_employee_returns_none() {
        let (store, _) = store_with_team().await;

        let found = EmployeeRepository::find_by_id(&store, Uuid::new_v4())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn delete_missing_employee_fails() {
        let (store, _) = store_with_team().await;

        let result = EmployeeRepository::delete(&store, Uuid::new_v4()).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("not found"));
    }

    #[tokio::test]
    async fn delete_removes_employee() {
        let (store, team_id) = store_with_team().await;
        let employee = sample_employee(team_id);
        EmployeeRepository::save(&store, &employee).await.unwrap();

        EmployeeRepository::delete(&store, employee.id())
            .await
            .unwrap();

        let found = EmployeeRepository::find_by_id(&store, employee.id())
            .await
            .unwrap();
        assert!(found.is_none());
    }

    #[tokio::test]
    async fn delete_many_skips_missing_ids() {
        let (store, team_id) = store_with_team().await;
        let first = sample_employee(team_id);
        let second = sample_employee(team_id);
        EmployeeRepository::save(&store, &first).await.unwrap();
        EmployeeRepository::save(&store, &second).await.unwrap();

        let removed = store
            .delete_many(&[first.id(), second.id(), Uuid::new_v4()])
            .await
            .unwrap();

        assert_eq!(removed, 2);
        assert!(EmployeeRepository::find_all(&store).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn delete_many_with_empty_list_removes_nothing() {
        let (store, team_id) = store_with_team().await;
        let employee = sample_employee(team_id);
        EmployeeRepository::save(&store, &employee).await.unwrap();

        let removed = store.delete_many(&[]).await.unwrap();

        assert_eq!(removed, 0);
        assert_eq!(EmployeeRepository::find_all(&store).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn save_team_with_unknown_parent_fails() {
        let store = InMemoryRepository::new();
        let (team, _) = Team::new("Backend".to_string(), Some(Uuid::new_v4())).unwrap();

        let result = TeamRepository::save(&store, &team).await;
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("parent"));
    }

    #[tokio::test]
    async fn save_nested_team() {
        let (store, parent_id) = store_with_team().await;
        let (child, _) = Team::new("Backend".to_string(), Some(parent_id)).unwrap();

        TeamRepository::save(&store, &child).await.unwrap();

        let teams = TeamRepository::find_all(&store).await.unwrap();
        assert_eq!(teams.len(), 2);
    }
}
