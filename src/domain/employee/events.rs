use uuid::Uuid;

/// Domain events that occur within the Employee aggregate
///
/// # Example
/// ```
/// use teamroster_api::domain::employee::events::EmployeeEvent;
/// use uuid::Uuid;
///
/// let event = EmployeeEvent::Created {
///     employee_id: Uuid::new_v4(),
///     team_id: Uuid::new_v4(),
/// };
/// ```
#[derive(Debug, Clone)]
pub enum EmployeeEvent {
    /// Fired when an employee is added to the roster
    Created {
        /// ID of the newly created employee
        employee_id: Uuid,
        /// Team the employee was assigned to
        team_id: Uuid,
    },
}

impl EmployeeEvent {
    /// Returns the employee_id for this event
    #[allow(dead_code)]
    pub fn employee_id(&self) -> Uuid {
        match self {
            EmployeeEvent::Created { employee_id, .. } => *employee_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn employee_created_event() {
        let employee_id = Uuid::new_v4();
        let event = EmployeeEvent::Created {
            employee_id,
            team_id: Uuid::new_v4(),
        };

        assert_eq!(event.employee_id(), employee_id);
    }

    #[test]
    fn event_clone() {
        let employee_id = Uuid::new_v4();
        let event = EmployeeEvent::Created {
            employee_id,
            team_id: Uuid::new_v4(),
        };
        let cloned = event.clone();

        assert_eq!(event.employee_id(), cloned.employee_id());
    }
}
