// Authentication module
// Verifies the static API token presented as a bearer credential

pub mod token;
