//! Repository layer for data access.
//!
//! One repository per entity type stands in for the "all records of a
//! type" collection; cascade deletes are carried out here explicitly.

mod career_repository;
mod course_repository;
pub mod entities;
mod enrollment_repository;
mod student_repository;

pub use career_repository::{CareerRepository, CareerStore};
pub use course_repository::{CourseRepository, CourseStore};
pub use enrollment_repository::{EnrollmentRepository, EnrollmentStore};
pub use student_repository::{StudentRepository, StudentStore};

// Export mocks for tests (both unit and integration)
#[cfg(any(test, feature = "test-utils"))]
pub use career_repository::MockCareerRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use course_repository::MockCourseRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use enrollment_repository::MockEnrollmentRepository;
#[cfg(any(test, feature = "test-utils"))]
pub use student_repository::MockStudentRepository;
