//! Service Container - Centralized service access.
//!
//! Wires every store to its manager over one database connection.

use std::sync::Arc;

use sea_orm::DatabaseConnection;

use super::{
    CareerManager, CareerService, CourseManager, CourseService, EnrollmentManager,
    EnrollmentService, StudentManager, StudentService,
};
use crate::repository::{CareerStore, CourseStore, EnrollmentStore, StudentStore};

/// Service container trait for dependency injection.
pub trait ServiceContainer: Send + Sync {
    /// Get career service
    fn careers(&self) -> Arc<dyn CareerService>;

    /// Get student service
    fn students(&self) -> Arc<dyn StudentService>;

    /// Get course service
    fn courses(&self) -> Arc<dyn CourseService>;

    /// Get enrollment service
    fn enrollments(&self) -> Arc<dyn EnrollmentService>;
}

/// Concrete implementation of ServiceContainer
pub struct Services {
    career_service: Arc<dyn CareerService>,
    student_service: Arc<dyn StudentService>,
    course_service: Arc<dyn CourseService>,
    enrollment_service: Arc<dyn EnrollmentService>,
}

impl Services {
    /// Create service container from a database connection
    pub fn from_connection(db: DatabaseConnection) -> Self {
        let career_repo = Arc::new(CareerStore::new(db.clone()));
        let student_repo = Arc::new(StudentStore::new(db.clone()));
        let course_repo = Arc::new(CourseStore::new(db.clone()));
        let enrollment_repo = Arc::new(EnrollmentStore::new(db));

        Self {
            career_service: Arc::new(CareerManager::new(career_repo.clone())),
            student_service: Arc::new(StudentManager::new(
                student_repo.clone(),
                career_repo,
            )),
            course_service: Arc::new(CourseManager::new(course_repo.clone())),
            enrollment_service: Arc::new(EnrollmentManager::new(
                enrollment_repo,
                student_repo,
                course_repo,
            )),
        }
    }
}

impl ServiceContainer for Services {
    fn careers(&self) -> Arc<dyn CareerService> {
        self.career_service.clone()
    }

    fn students(&self) -> Arc<dyn StudentService> {
        self.student_service.clone()
    }

    fn courses(&self) -> Arc<dyn CourseService> {
        self.course_service.clone()
    }

    fn enrollments(&self) -> Arc<dyn EnrollmentService> {
        self.enrollment_service.clone()
    }
}
