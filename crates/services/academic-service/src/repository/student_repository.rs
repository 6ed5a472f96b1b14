//! Student repository implementation.

use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder, Set,
    TransactionTrait,
};

use super::entities::{enrollment, student};
use super::entities::{EnrollmentEntity, StudentEntity};
use common::{AppError, AppResult};
use domain::Student;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Student repository trait for dependency injection.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait StudentRepository: Send + Sync {
    /// Find student by national ID
    async fn find_by_dni(&self, dni: &str) -> AppResult<Option<Student>>;

    /// List all students ordered by surnames and given names
    async fn list(&self) -> AppResult<Vec<Student>>;

    /// List students belonging to a career
    async fn list_by_career(&self, career_code: &str) -> AppResult<Vec<Student>>;

    /// Insert a new student
    async fn create(&self, student: Student) -> AppResult<Student>;

    /// Overwrite every non-key field of an existing student
    async fn update(&self, student: Student) -> AppResult<Student>;

    /// Delete student together with their enrollments
    async fn delete(&self, dni: &str) -> AppResult<()>;
}

/// Concrete implementation of StudentRepository
pub struct StudentStore {
    db: DatabaseConnection,
}

impl StudentStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

fn to_domain(models: Vec<student::Model>) -> AppResult<Vec<Student>> {
    models
        .into_iter()
        .map(|m| Student::try_from(m).map_err(AppError::from))
        .collect()
}

#[async_trait]
impl StudentRepository for StudentStore {
    async fn find_by_dni(&self, dni: &str) -> AppResult<Option<Student>> {
        let result = StudentEntity::find_by_id(dni.to_string())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result
            .map(|m| Student::try_from(m).map_err(AppError::from))
            .transpose()
    }

    async fn list(&self) -> AppResult<Vec<Student>> {
        let models = StudentEntity::find()
            .order_by_asc(student::Column::PaternalSurname)
            .order_by_asc(student::Column::MaternalSurname)
            .order_by_asc(student::Column::GivenNames)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        to_domain(models)
    }

    async fn list_by_career(&self, career_code: &str) -> AppResult<Vec<Student>> {
        let models = StudentEntity::find()
            .filter(student::Column::CareerCode.eq(career_code))
            .order_by_asc(student::Column::PaternalSurname)
            .order_by_asc(student::Column::MaternalSurname)
            .order_by_asc(student::Column::GivenNames)
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        to_domain(models)
    }

    async fn create(&self, student: Student) -> AppResult<Student> {
        let active_model = student::ActiveModel {
            dni: Set(student.dni),
            paternal_surname: Set(student.paternal_surname),
            maternal_surname: Set(student.maternal_surname),
            given_names: Set(student.given_names),
            birth_date: Set(student.birth_date),
            sex: Set(student.sex.into()),
            career_code: Set(student.career_code),
            active: Set(student.active),
        };

        let model = active_model
            .insert(&self.db)
            .await
            .map_err(|e| AppError::from_db(e, "Student"))?;
        tracing::info!(dni = %model.dni, career = %model.career_code, "Student created");
        Ok(Student::try_from(model)?)
    }

    async fn update(&self, student: Student) -> AppResult<Student> {
        let existing = StudentEntity::find_by_id(student.dni.clone())
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: student::ActiveModel = existing.into();
        active.paternal_surname = Set(student.paternal_surname);
        active.maternal_surname = Set(student.maternal_surname);
        active.given_names = Set(student.given_names);
        active.birth_date = Set(student.birth_date);
        active.sex = Set(student.sex.into());
        active.career_code = Set(student.career_code);
        active.active = Set(student.active);

        let model = active
            .update(&self.db)
            .await
            .map_err(|e| AppError::from_db(e, "Student"))?;
        Ok(Student::try_from(model)?)
    }

    async fn delete(&self, dni: &str) -> AppResult<()> {
        let txn = self.db.begin().await?;

        let enrollments = EnrollmentEntity::delete_many()
            .filter(enrollment::Column::StudentDni.eq(dni))
            .exec(&txn)
            .await?;

        let result = StudentEntity::delete_by_id(dni.to_string())
            .exec(&txn)
            .await?;

        if result.rows_affected == 0 {
            txn.rollback().await?;
            return Err(AppError::NotFound);
        }

        txn.commit().await?;

        tracing::info!(dni, enrollments = enrollments.rows_affected, "Student deleted");
        Ok(())
    }
}
