//! Service layer - academic records use cases.
//!
//! SOLID (SRP): one service per entity type.
//! SOLID (DIP): services depend on repository traits, not stores.

mod career_service;
mod container;
mod course_service;
mod enrollment_service;
mod student_service;

pub use career_service::{CareerManager, CareerService};
pub use container::{ServiceContainer, Services};
pub use course_service::{CourseManager, CourseService};
pub use enrollment_service::{EnrollmentManager, EnrollmentService};
pub use student_service::{StudentManager, StudentService};
