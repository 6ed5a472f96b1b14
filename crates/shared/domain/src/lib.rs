//! Domain layer - Academic records entities and presentation helpers.
//!
//! This crate contains pure domain logic with no infrastructure dependencies.
//! Relations are held by key; formatting helpers that need a related record
//! take it as an argument.

pub mod career;
pub mod constants;
pub mod course;
pub mod enrollment;
pub mod error;
pub mod student;
pub mod validation;

pub use career::{Career, UpdateCareer};
pub use constants::*;
pub use course::{Course, UpdateCourse};
pub use enrollment::Enrollment;
pub use error::{DomainError, DomainResult};
pub use student::{Sex, Student, UpdateStudent};
pub use validation::validate_input;
