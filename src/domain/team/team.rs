use chrono::{DateTime, Utc};
use uuid::Uuid;

use super::events::TeamEvent;

/// Team aggregate root
///
/// Teams group employees and may nest under a parent team; the hierarchy
/// is a flat list linked by `parent_team_id`, assembled into a tree by
/// clients.
///
/// # Invariants
/// - Name cannot be empty
/// - The parent reference is checked by the persistence layer, not here
///
/// # Example
/// ```
/// use teamroster_api::domain::team::Team;
///
/// let (team, events) = Team::new("Platform".to_string(), None).expect("valid team");
///
/// assert_eq!(team.name(), "Platform");
/// assert!(team.parent_team_id().is_none());
/// assert!(!events.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct Team {
    id: Uuid,
    name: String,
    parent_team_id: Option<Uuid>,
    created_at: DateTime<Utc>,
}

impl Team {
    /// Creates a new Team aggregate
    ///
    /// # Arguments
    /// * `name` - The team's name (cannot be empty)
    /// * `parent_team_id` - Optional parent team for nesting
    ///
    /// # Returns
    /// * `Ok((Team, Vec<TeamEvent>))` - New team and events generated
    /// * `Err(String)` - If any invariant is violated
    pub fn new(name: String, parent_team_id: Option<Uuid>) -> Result<(Self, Vec<TeamEvent>), String> {
        // Validate business rules
        if name.trim().is_empty() {
            return Err("Team name cannot be empty".to_string());
        }

        let team = Self {
            id: Uuid::new_v4(),
            name,
            parent_team_id,
            created_at: Utc::now(),
        };

        let events = vec![TeamEvent::Created {
            team_id: team.id,
            parent_team_id: team.parent_team_id,
        }];

        Ok((team, events))
    }

    // ===== Getters =====

    /// Returns the team's ID
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// Returns the team's name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the parent team ID if this team is nested
    pub fn parent_team_id(&self) -> Option<Uuid> {
        self.parent_team_id
    }

    /// Returns the creation timestamp
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// Reconstructs a Team from persistence layer data
    ///
    /// This method bypasses business rules validation since the data
    /// is already validated and stored in the database.
    ///
    /// # Note
    /// Only to be used by repository implementations for data reconstruction.
    pub fn from_persistence(
        id: Uuid,
        name: String,
        parent_team_id: Option<Uuid>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            parent_team_id,
            created_at,
        }
    }
}
