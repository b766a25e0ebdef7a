// Repository implementations (data access layer)
// Adapters that implement domain repository interfaces

pub mod in_memory_repository;
pub mod postgres_employee_repository;
pub mod postgres_team_repository;

pub use in_memory_repository::InMemoryRepository;
pub use postgres_employee_repository::PostgresEmployeeRepository;
pub use postgres_team_repository::PostgresTeamRepository;
