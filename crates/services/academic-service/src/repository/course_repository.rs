//! Course repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::entities::{course, enrollment};
use super::entities::{CourseEntity, EnrollmentEntity};
use common::{AppError, AppResult};
use domain::Course;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Course repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CourseRepository: Send + Sync {
    /// Find course by code
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Course>>;

    /// List all courses ordered by code
    async fn list(&self) -> AppResult<Vec<Course>>;

    /// Insert a new course
    async fn create(&self, course: Course) -> AppResult<Course>;

    /// Overwrite name, credits and instructor of an existing course
    async fn update(&self, course: Course) -> AppResult<Course>;

    /// Delete course together with its enrollments
    async fn delete(&self, code: &str) -> AppResult<()>;
}

/// Concrete implementation of CourseRepository
pub struct CourseStore {
    db: DatabaseConnection,
}

impl CourseStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn storable_credits(credits: u64) -> AppResult<i64> {
    i64::try_from(credits).map_err(|_| AppError::validation("Course credits exceed the storable range"))
}

#[async_trait]
impl CourseRepository for CourseStore {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Course>> {
        let result = CourseEntity::find_by_id(code.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result
            .map(|m| Course::try_from(m).map_err(AppError::from))
            .transpose()
    }

    async fn list(&self) -> AppResult<Vec<Course>> {
        let models = CourseEntity::find()
            .order_by_asc(course::Column::Code)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models
            .into_iter()
            .map(|m| Course::try_from(m).map_err(AppError::from))
            .collect()
    }

    async fn create(&self, course: Course) -> AppResult<Course> {
        let active_model = course::ActiveModel {
            code: Set(course.code),
            name: Set(course.name),
            credits: Set(storable_credits(course.credits)?),
            instructor: Set(course.instructor),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_db(e, "Course"))?;
        tracing::info!(code = %model.code, "Course created");
        Ok(Course::try_from(model)?)
    }

    async fn update(&self, course: Course) -> AppResult<Course> {
        let existing = CourseEntity::find_by_id(course.code.clone())
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: course::ActiveModel = existing.into();
        active.name = Set(course.name);
        active.credits = Set(storable_credits(course.credits)?);
        active.instructor = Set(course.instructor);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Course::try_from(model)?)
    }

    async fn delete(&self, code: &str) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let enrollments = EnrollmentEntity::delete_many()
            .filter(enrollment::Column::CourseCode.eq(code))
            .exec(&txn)
            .await?;

        let result = CourseEntity::delete_by_id(code.to_string())
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        }

        txn.commit().await?;

        tracing::info!(code, enrollments = enrollments.rows_affected, "Course deleted");
        Ok(())
    }
}
