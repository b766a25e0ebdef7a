use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::events::EmployeeEvent;
use super::value_objects::EmploymentPeriod;

/// Employee aggregate root
///
/// Represents a person on the roster, always assigned to a team.
///
/// # Invariants
/// - Name, surname and position cannot be empty
/// - Employment dates are consistent (see [`EmploymentPeriod`])
/// - The team reference is checked by the persistence layer, not here
///
/// # Example
/// ```
/// use teamroster_api::domain::employee::{Employee, EmploymentPeriod};
/// use uuid::Uuid;
///
/// let (employee, events) = Employee::new(
///     "Jana".to_string(),
///     "Novotna".to_string(),
///     "Engineer".to_string(),
///     Uuid::new_v4(),
///     EmploymentPeriod::default(),
/// ).expect("valid employee");
///
/// assert_eq!(employee.name(), "Jana");
/// assert!(!events.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Employee {
    id: Uuid,
    name: String,
    surname: String,
    position: String,
    team_id: Uuid,
    created_at: DateTime<Utc>,
    period: EmploymentPeriod,
}

impl Employee {
    /// Creates a new Employee aggregate
    ///
    /// # Arguments
    /// * `name` - First name (cannot be empty)
    /// * `surname` - Last name (cannot be empty)
    /// * `position` - Job position (cannot be empty)
    /// * `team_id` - The team this employee belongs to
    /// * `period` - Employment start/end dates
    ///
    /// # Returns
    /// * `Ok((Employee, Vec<EmployeeEvent>))` - New employee and events generated
    /// * `Err(String)` - If any invariant is violated
    pub fn new(
        name: String,
        surname: String,
        position: String,
        team_id: Uuid,
        period: EmploymentPeriod,
    ) -> Result<(Self, Vec<EmployeeEvent>), String> {
        // Validate business rules
        if name.trim().is_empty() {
            return Err("Name cannot be empty".to_string());
        }

        if surname.trim().is_empty() {
            return Err("Surname cannot be empty".to_string());
        }

        if position.trim().is_empty() {
            return Err("Position cannot be empty".to_string());
        }

        let employee = Self {
            id: Uuid::new_v4(),
            name,
            surname,
            position,
            team_id,
            created_at: Utc::now(),
            period,
        };

        let events = vec![EmployeeEvent::Created {
            employee_id: employee.id,
            team_id: employee.team_id,
        }];

        Ok((employee, events))
    }

    // ===== Getters =====

    /// Returns the employee's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the employee's first name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's last name
    pub fn surname(&self) -> &str {
        &self.surname
    }

    /// Returns the employee's position
    pub fn position(&self) -> &str {
        &self.position
    }

    /// Returns the team this employee belongs to
    pub fn team_id(&self) -> Uuid {
        self.team_id
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Returns the employment start date if recorded
    pub fn start_date(&self) -> Option<DateTime<Utc>> {
        self.period.start_date()
    }

    /// Returns the employment end date if recorded
    pub fn end_date(&self) -> Option<DateTime<Utc>> {
        self.period.end_date()
    }

    /// Whether the employment is active at the given instant
    #[allow(dead_code)]
    pub fn is_active_at(&self, now: DateTime<Utc>) -> bool {
        self.period.is_active_at(now)
    }

    /// Reconstructs an Employee from persistence layer data
    ///
    /// This method bypasses business rules validation since the data
    /// is already validated and stored in the database.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        surname: String,
        position: String,
        team_id: Uuid,
        created_at: DateTime<Utc>,
        period: EmploymentPeriod,
    ) -> Self {
        Self {
            id,
            name,
            surname,
            position,
            team_id,
            created_at,
            period,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn valid_employee() -> (Employee, Vec<EmployeeEvent>) {
        Employee::new(
            "Jana".to_string(),
            "Novotna".to_string(),
            "Engineer".to_string(),
            Uuid::new_v4(),
            EmploymentPeriod::default(),
        )
        .expect("valid employee")
    }

    #[test]
    fn create_employee_with_valid_fields() {
        let team_id = Uuid::new_v4();
        let result = Employee::new(
            "Jana".to_string(),
            "Novotna".to_string(),
            "Engineer".to_string(),
            team_id,
            EmploymentPeriod::default(),
        );

        assert!(result.is_ok());
        let (employee, events) = result.unwrap();

        assert_eq!(employee.name(), "Jana");
        assert_eq!(employee.surname(), "Novotna");
        assert_eq!(employee.position(), "Engineer");
        assert_eq!(employee.team_id(), team_id);
        assert_eq!(events.len(), 1);
    }

    #[test]
    fn create_employee_with_empty_name_fails() {
        let result = Employee::new(
            "".to_string(),
            "Novotna".to_string(),
            "Engineer".to_string(),
            Uuid::new_v4(),
            EmploymentPeriod::default(),
        );

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Name cannot be empty"));
    }

    #[test]
    fn create_employee_with_blank_surname_fails() {
        let result = Employee::new(
            "Jana".to_string(),
            "   ".to_string(),
            "Engineer".to_string(),
            Uuid::new_v4(),
            EmploymentPeriod::default(),
        );

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Surname cannot be empty"));
    }

    #[test]
    fn create_employee_with_empty_position_fails() {
        let result = Employee::new(
            "Jana".to_string(),
            "Novotna".to_string(),
            "".to_string(),
            Uuid::new_v4(),
            EmploymentPeriod::default(),
        );

        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Position cannot be empty"));
    }

    #[test]
    fn employee_generates_created_event() {
        let (employee, events) = valid_employee();

        assert_eq!(events.len(), 1);
        match &events[0] {
            EmployeeEvent::Created {
                employee_id,
                team_id,
            } => {
                assert_eq!(*employee_id, employee.id());
                assert_eq!(*team_id, employee.team_id());
            }
        }
    }

    #[test]
    fn employee_gets_distinct_ids() {
        let (first, _) = valid_employee();
        let (second, _) = valid_employee();

        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn employee_with_past_end_date_is_inactive() {
        let now = Utc::now();
        let period =
            EmploymentPeriod::new(Some(now - Duration::days(100)), Some(now - Duration::days(1)))
                .unwrap();

        let (employee, _) = Employee::new(
            "Petr".to_string(),
            "Svoboda".to_string(),
            "Analyst".to_string(),
            Uuid::new_v4(),
            period,
        )
        .unwrap();

        assert!(!employee.is_active_at(now));
    }

    #[test]
    fn from_persistence_round_trip() {
        let (original, _) = valid_employee();

        let restored = Employee::from_persistence(
            original.id(),
            original.name().to_string(),
            original.surname().to_string(),
            original.position().to_string(),
            original.team_id(),
            original.created_at(),
            EmploymentPeriod::from_persistence(original.start_date(), original.end_date()),
        );

        assert_eq!(restored.id(), original.id());
        assert_eq!(restored.name(), original.name());
        assert_eq!(restored.team_id(), original.team_id());
        assert_eq!(restored.created_at(), original.created_at());
    }
}
