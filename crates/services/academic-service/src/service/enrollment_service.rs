//! Enrollment service - Handles enrollment-related use cases.
//!
//! An enrollment needs an existing student and an existing course; its
//! summary line reads both.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::Enrollment;

use crate::repository::{CourseRepository, EnrollmentRepository, StudentRepository};

/// Enrollment service trait for dependency injection.
#[async_trait]
pub trait EnrollmentService: Send + Sync {
    /// Get enrollment by ID
    async fn get_enrollment(&self, id: i32) -> AppResult<Enrollment>;

    /// List all enrollments
    async fn list_enrollments(&self) -> AppResult<Vec<Enrollment>>;

    /// List enrollments of a student
    async fn list_student_enrollments(&self, student_dni: &str) -> AppResult<Vec<Enrollment>>;

    /// List enrollments in a course
    async fn list_course_enrollments(&self, course_code: &str) -> AppResult<Vec<Enrollment>>;

    /// Enroll an existing student in an existing course
    async fn enroll(&self, student_dni: &str, course_code: &str) -> AppResult<Enrollment>;

    /// Delete enrollment
    async fn delete_enrollment(&self, id: i32) -> AppResult<()>;

    /// Summary line naming student, course and enrollment date
    async fn describe_enrollment(&self, id: i32) -> AppResult<String>;
}

/// Concrete implementation of EnrollmentService using repositories.
pub struct EnrollmentManager {
    repo: Arc<dyn EnrollmentRepository>,
    students: Arc<dyn StudentRepository>,
    courses: Arc<dyn CourseRepository>,
}

impl EnrollmentManager {
    /// Create new enrollment service instance with repositories
    pub fn new(
        repo: Arc<dyn EnrollmentRepository>,
        students: Arc<dyn StudentRepository>,
        courses: Arc<dyn CourseRepository>,
    ) -> Self {
        Self {
            repo,
            students,
            courses,
        }
    }
}

#[async_trait]
impl EnrollmentService for EnrollmentManager {
    async fn get_enrollment(&self, id: i32) -> AppResult<Enrollment> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_not_found()
    }

    async fn list_enrollments(&self) -> AppResult<Vec<Enrollment>> {
        self.repo.list().await
    }

    async fn list_student_enrollments(&self, student_dni: &str) -> AppResult<Vec<Enrollment>> {
        self.repo.list_by_student(student_dni).await
    }

    async fn list_course_enrollments(&self, course_code: &str) -> AppResult<Vec<Enrollment>> {
        self.repo.list_by_course(course_code).await
    }

    async fn enroll(&self, student_dni: &str, course_code: &str) -> AppResult<Enrollment> {
        if self.students.find_by_dni(student_dni).await?.is_none() {
            return Err(AppError::validation(format!(
                "Student {} does not exist",
                student_dni
            )));
        }
        if self.courses.find_by_code(course_code).await?.is_none() {
            return Err(AppError::validation(format!(
                "Course {} does not exist",
                course_code
            )));
        }

        self.repo
            .create(student_dni.to_string(), course_code.to_string())
            .await
    }

    async fn delete_enrollment(&self, id: i32) -> AppResult<()> {
        self.repo.delete(id).await
    }

    async fn describe_enrollment(&self, id: i32) -> AppResult<String> {
        let enrollment = self.get_enrollment(id).await?;

        let student = self
            .students
            .find_by_dni(&enrollment.student_dni)
            .await?
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Enrollment {} references missing student {}",
                    id, enrollment.student_dni
                ))
            })?;
        let course = self
            .courses
            .find_by_code(&enrollment.course_code)
            .await?
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Enrollment {} references missing course {}",
                    id, enrollment.course_code
                ))
            })?;

        Ok(enrollment.describe(&student, &course))
    }
}
