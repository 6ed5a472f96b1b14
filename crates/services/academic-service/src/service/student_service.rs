//! Student service - Handles student-related use cases.
//!
//! Every student must reference an existing career; the check runs here
//! before the store sees the record.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{validate_input, Student, UpdateStudent};

use crate::repository::{CareerRepository, StudentRepository};

/// Student service trait for dependency injection.
#[async_trait]
pub trait StudentService: Send + Sync {
    /// Get student by national ID
    async fn get_student(&self, dni: &str) -> AppResult<Student>;

    /// List all students
    async fn list_students(&self) -> AppResult<Vec<Student>>;

    /// List students of a career (the career must exist)
    async fn list_students_by_career(&self, career_code: &str) -> AppResult<Vec<Student>>;

    /// Create a new student in an existing career
    async fn create_student(&self, student: Student) -> AppResult<Student>;

    /// Update student details
    async fn update_student(&self, dni: &str, update: UpdateStudent) -> AppResult<Student>;

    /// Mark student as active (VIGENTE) or withdrawn (DE BAJA)
    async fn set_student_active(&self, dni: &str, active: bool) -> AppResult<Student>;

    /// Delete student, cascading to their enrollments
    async fn delete_student(&self, dni: &str) -> AppResult<()>;

    /// `"<paternal> <maternal>, <given>"` for a student
    async fn full_name(&self, dni: &str) -> AppResult<String>;

    /// Summary line for a student including career and status
    async fn describe_student(&self, dni: &str) -> AppResult<String>;
}

/// Concrete implementation of StudentService using repositories.
pub struct StudentManager {
    repo: Arc<dyn StudentRepository>,
    careers: Arc<dyn CareerRepository>,
}

impl StudentManager {
    /// Create new student service instance with repositories
    pub fn new(repo: Arc<dyn StudentRepository>, careers: Arc<dyn CareerRepository>) -> Self {
        Self { repo, careers }
    }

    async fn ensure_career_exists(&self, career_code: &str) -> AppResult<()> {
        if self.careers.find_by_code(career_code).await?.is_none() {
            return Err(AppError::validation(format!(
                "Career {} does not exist",
                career_code
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl StudentService for StudentManager {
    async fn get_student(&self, dni: &str) -> AppResult<Student> {
        self.repo
            .find_by_dni(dni)
            .await?
            .ok_or_not_found()
    }

    async fn list_students(&self) -> AppResult<Vec<Student>> {
        self.repo.list().await
    }

    async fn list_students_by_career(&self, career_code: &str) -> AppResult<Vec<Student>> {
        if self.careers.find_by_code(career_code).await?.is_none() {
            return Err(AppError::NotFound);
        }
        self.repo.list_by_career(career_code).await
    }

    async fn create_student(&self, student: Student) -> AppResult<Student> {
        validate_input(&student)?;
        self.ensure_career_exists(&student.career_code).await?;

        if self.repo.find_by_dni(&student.dni).await?.is_some() {
            return Err(AppError::conflict("Student"));
        }

        self.repo.create(student).await
    }

    async fn update_student(&self, dni: &str, update: UpdateStudent) -> AppResult<Student> {
        validate_input(&update)?;

        let mut student = self.get_student(dni).await?;
        if let Some(career_code) = &update.career_code {
            self.ensure_career_exists(career_code).await?;
        }
        student.apply(update);

        self.repo.update(student).await
    }

    async fn set_student_active(&self, dni: &str, active: bool) -> AppResult<Student> {
        let mut student = self.get_student(dni).await?;
        if student.active == active {
            return Ok(student);
        }

        student.active = active;
        tracing::info!(dni, status = student.status_label(), "Student status changed");
        self.repo.update(student).await
    }

    async fn delete_student(&self, dni: &str) -> AppResult<()> {
        self.repo.delete(dni).await
    }

    async fn full_name(&self, dni: &str) -> AppResult<String> {
        Ok(self.get_student(dni).await?.full_name())
    }

    async fn describe_student(&self, dni: &str) -> AppResult<String> {
        let student = self.get_student(dni).await?;
        let career = self
            .careers
            .find_by_code(&student.career_code)
            .await?
            .ok_or_else(|| {
                AppError::internal(format!(
                    "Student {} references missing career {}",
                    student.dni, student.career_code
                ))
            })?;

        Ok(student.describe(&career))
    }
}
