use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::team::Team;

/// Repository trait for the Team aggregate
///
/// Defines the contract for persisting and retrieving teams.
/// Implementations should handle database-specific details.
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// Save a team (insert or update)
    ///
    /// Fails when the parent team reference does not exist.
    async fn save(&self, team: &Team) -> Result<(), String>;

    /// Find all teams, newest first
    async fn find_all(&self) -> Result<Vec<Team>, String>;

    /// Find a team by its ID
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Team>, String>;
}
