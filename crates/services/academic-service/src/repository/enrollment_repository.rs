//! Enrollment repository implementation.
//!
//! Enrollments are created and deleted, never updated: the timestamp is
//! assigned by the entity on insert.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ActiveValue::NotSet, ColumnTrait, DatabaseConnection, EntityTrait,
    QueryFilter, QueryOrder, Set,
};

use super::entities::enrollment::{self, ActiveModel, Entity as EnrollmentEntity};
use common::{AppError, AppResult};
use domain::Enrollment;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Enrollment repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait EnrollmentRepository: Send + Sync {
    /// Find enrollment by ID
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Enrollment>>;

    /// List all enrollments in creation order
    async fn list(&self) -> AppResult<Vec<Enrollment>>;

    /// List enrollments of one student
    async fn list_by_student(&self, student_dni: &str) -> AppResult<Vec<Enrollment>>;

    /// List enrollments in one course
    async fn list_by_course(&self, course_code: &str) -> AppResult<Vec<Enrollment>>;

    /// Enroll a student in a course, stamping the current time
    async fn create(&self, student_dni: String, course_code: String) -> AppResult<Enrollment>;

    /// Delete enrollment by ID
    async fn delete(&self, id: i32) -> AppResult<()>;
}

/// Concrete implementation of EnrollmentRepository
pub struct EnrollmentStore {
    db: DatabaseConnection,
}

impl EnrollmentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl EnrollmentRepository for EnrollmentStore {
    async fn find_by_id(&self, id: i32) -> AppResult<Option<Enrollment>> {
        let result = EnrollmentEntity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(result.map(Enrollment::from))
    }

    async fn list(&self) -> AppResult<Vec<Enrollment>> {
        let models = EnrollmentEntity::find()
            .order_by_asc(enrollment::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Enrollment::from).collect())
    }

    async fn list_by_student(&self, student_dni: &str) -> AppResult<Vec<Enrollment>> {
        let models = EnrollmentEntity::find()
            .filter(enrollment::Column::StudentDni.eq(student_dni))
            .order_by_asc(enrollment::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Enrollment::from).collect())
    }

    async fn list_by_course(&self, course_code: &str) -> AppResult<Vec<Enrollment>> {
        let models = EnrollmentEntity::find()
            .filter(enrollment::Column::CourseCode.eq(course_code))
            .order_by_asc(enrollment::Column::Id)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        Ok(models.into_iter().map(Enrollment::from).collect())
    }

    async fn create(&self, student_dni: String, course_code: String) -> AppResult<Enrollment> {
        let active_model = ActiveModel {
            id: NotSet,
            student_dni: Set(student_dni),
            course_code: Set(course_code),
            enrolled_at: NotSet,
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_db(e, "Enrollment"))?;
        tracing::info!(
            id = model.id,
            student = %model.student_dni,
            course = %model.course_code,
            "Enrollment created"
        );
        Ok(Enrollment::from(model))
    }

    async fn delete(&self, id: i32) -> AppResult<()> {
        let result = EnrollmentEntity::delete_by_id(id)
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }
}
