//! Course service - Handles course-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{validate_input, Course, UpdateCourse};

use crate::repository::CourseRepository;

/// Course service trait for dependency injection.
#[async_trait]
pub trait CourseService: Send + Sync {
    /// Get course by code
    async fn get_course(&self, code: &str) -> AppResult<Course>;

    /// List all courses
    async fn list_courses(&self) -> AppResult<Vec<Course>>;

    /// Create a new course (code must be unused)
    async fn create_course(&self, course: Course) -> AppResult<Course>;

    /// Update name, credits and/or instructor
    async fn update_course(&self, code: &str, update: UpdateCourse) -> AppResult<Course>;

    /// Delete course, cascading to its enrollments
    async fn delete_course(&self, code: &str) -> AppResult<()>;

    /// Summary line for a course
    async fn describe_course(&self, code: &str) -> AppResult<String>;
}

/// Concrete implementation of CourseService using repository.
pub struct CourseManager {
    repo: Arc<dyn CourseRepository>,
}

impl CourseManager {
    /// Create new course service instance with repository
    pub fn new(repo: Arc<dyn CourseRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CourseService for CourseManager {
    async fn get_course(&self, code: &str) -> AppResult<Course> {
        self.repo
            .find_by_code(code)
            .await?
            .ok_or_not_found()
    }

    async fn list_courses(&self) -> AppResult<Vec<Course>> {
        self.repo.list().await
    }

    async fn create_course(&self, course: Course) -> AppResult<Course> {
        validate_input(&course)?;

        if self.repo.find_by_code(&course.code).await?.is_some() {
            return Err(AppError::conflict("Course"));
        }

        self.repo.create(course).await
    }

    async fn update_course(&self, code: &str, update: UpdateCourse) -> AppResult<Course> {
        validate_input(&update)?;

        let mut course = self.get_course(code).await?;
        course.apply(update);

        self.repo.update(course).await
    }

    async fn delete_course(&self, code: &str) -> AppResult<()> {
        self.repo.delete(code).await
    }

    async fn describe_course(&self, code: &str) -> AppResult<String> {
        Ok(self.get_course(code).await?.describe())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MockCourseRepository;

    fn calculus() -> Course {
        Course::new("MAT101", "Cálculo I", 4, "Ana Ruiz")
    }

    #[tokio::test]
    async fn test_describe_course() {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_by_code().returning(|_| Ok(Some(calculus())));

        let service = CourseManager::new(Arc::new(repo));

        assert_eq!(
            service.describe_course("MAT101").await.unwrap(),
            "Cálculo I (MAT101) / Docente: Ana Ruiz"
        );
    }

    #[tokio::test]
    async fn test_create_course_conflict() {
        let mut repo = MockCourseRepository::new();
        repo.expect_find_by_code().returning(|_| Ok(Some(calculus())));
        repo.expect_create().never();

        let service = CourseManager::new(Arc::new(repo));
        let result = service.create_course(calculus()).await;

        assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
    }

    #[tokio::test]
    async fn test_update_course_rejects_long_instructor() {
        let mut repo = MockCourseRepository::new();
        repo.expect_update().never();

        let service = CourseManager::new(Arc::new(repo));
        let result = service
            .update_course(
                "MAT101",
                UpdateCourse {
                    instructor: Some("x".repeat(101)),
                    ..Default::default()
                },
            )
            .await;

        assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    }

    #[tokio::test]
    async fn test_delete_missing_course() {
        let mut repo = MockCourseRepository::new();
        repo.expect_delete().returning(|_| Err(AppError::NotFound));

        let service = CourseManager::new(Arc::new(repo));

        assert!(matches!(
            service.delete_course("NOPE").await.unwrap_err(),
            AppError::NotFound
        ));
    }
}
