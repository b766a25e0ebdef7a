// Employee domain module
// Contains the employee aggregate, value objects, and domain events

#![allow(clippy::module_inception)]

pub mod employee;
pub mod events;
pub mod value_objects;

// Re-export main types for convenience
pub use employee::Employee;
pub use value_objects::EmploymentPeriod;
