//! Career repository implementation.
//!
//! Deleting a career cascades to its students and their enrollments.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect, Set, TransactionTrait,
};

use super::entities::{career, enrollment, student};
use super::entities::{CareerEntity, EnrollmentEntity, StudentEntity};
use common::{AppError, AppResult};
use domain::{Career, MAX_CAREER_DURATION};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Career repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait CareerRepository: Send + Sync {
    /// Find career by code
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Career>>;

    /// List all careers ordered by code
    async fn list(&self) -> AppResult<Vec<Career>>;

    /// Insert a new career
    async fn create(&self, career: Career) -> AppResult<Career>;

    /// Overwrite name and duration of an existing career
    async fn update(&self, career: Career) -> AppResult<Career>;

    /// Delete career with its students and their enrollments
    async fn delete(&self, code: &str) -> AppResult<()>;
}

/// Concrete implementation of CareerRepository
pub struct CareerStore {
    db: DatabaseConnection,
}

impl CareerStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn storable_duration(duration: u16) -> AppResult<i16> {
    i16::try_from(duration).map_err(|_| {
        AppError::validation(format!(
            "Career duration must be at most {} years",
            MAX_CAREER_DURATION
        ))
    })
}

#[async_trait]
impl CareerRepository for CareerStore {
    async fn find_by_code(&self, code: &str) -> AppResult<Option<Career>> {
        let result = CareerEntity::find_by_id(code.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result
            .map(|m| Career::try_from(m).map_err(AppError::from))
            .transpose()
    }

    async fn list(&self) -> AppResult<Vec<Career>> {
        let models = CareerEntity::find()
            .order_by_asc(career::Column::Code)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models
            .into_iter()
            .map(|m| Career::try_from(m).map_err(AppError::from))
            .collect()
    }

    async fn create(&self, career: Career) -> AppResult<Career> {
        let active_model = career::ActiveModel {
            code: Set(career.code),
            name: Set(career.name),
            duration: Set(storable_duration(career.duration)?),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_db(e, "Career"))?;
        tracing::info!(code = %model.code, "Career created");
        Ok(Career::try_from(model)?)
    }

    async fn update(&self, career: Career) -> AppResult<Career> {
        let existing = CareerEntity::find_by_id(career.code.clone())
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: career::ActiveModel = existing.into();
        active.name = Set(career.name);
        active.duration = Set(storable_duration(career.duration)?);

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        Ok(Career::try_from(model)?)
    }

    async fn delete(&self, code: &str) -> AppResult<()> {
        let txn = self.db.begin().await?;

        if CareerEntity::find_by_id(code.to_string())
            .one(&txn)
            .await?
            .is_none()
        {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        }

        let dnis: Vec<String> = StudentEntity::find()
            .select_only()
            .column(student::Column::Dni)
            .filter(student::Column::CareerCode.eq(code))
            .into_tuple()
            .all(&txn)
            .await?;

        let enrollments = EnrollmentEntity::delete_many()
            .filter(enrollment::Column::StudentDni.is_in(dnis))
            .exec(&txn)
            .await?;

        let students = StudentEntity::delete_many()
            .filter(student::Column::CareerCode.eq(code))
            .exec(&txn)
            .await?;

        CareerEntity::delete_by_id(code.to_string())
            .exec(&txn)
            .await?;

        txn.commit().await?;

        tracing::info!(
            code,
            students = students.rows_affected,
            enrollments = enrollments.rows_affected,
            "Career deleted"
        );
        Ok(())
    }
}
