//! SeaORM entity definitions
//!
//! These are database-specific entities separate from domain models.

pub mod career;
pub mod course;
pub mod enrollment;
pub mod student;

// Re-exports for public API convenience
#[allow(unused_imports)]
pub use career::{ActiveModel as CareerActiveModel, Entity as CareerEntity, Model as CareerModel};
#[allow(unused_imports)]
pub use course::{ActiveModel as CourseActiveModel, Entity as CourseEntity, Model as CourseModel};
#[allow(unused_imports)]
pub use enrollment::{
    ActiveModel as EnrollmentActiveModel, Entity as EnrollmentEntity, Model as EnrollmentModel,
};
#[allow(unused_imports)]
pub use student::{ActiveModel as StudentActiveModel, Entity as StudentEntity, Model as StudentModel};
