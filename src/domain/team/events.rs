use uuid::Uuid;

/// Domain events that occur within the Team aggregate
#[derive(Debug, Clone)]
pub enum TeamEvent {
    /// Fired when a team is created
    Created {
        /// ID of the newly created team
        team_id: Uuid,
        /// Parent team when the new team is nested
        parent_team_id: Option<Uuid>,
    },
}

impl TeamEvent {
    /// Returns the team_id for this event
    #[allow(dead_code)]
    pub fn team_id(&self) -> Uuid {
        match self {
            TeamEvent::Created { team_id, .. } => *team_id,
        }
    }
}
