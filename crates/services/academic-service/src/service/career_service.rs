//! Career service - Handles career-related use cases.

use async_trait::async_trait;
use std::sync::Arc;

use common::{AppError, AppResult, OptionExt};
use domain::{validate_input, Career, UpdateCareer};

use crate::repository::CareerRepository;

/// Career service trait for dependency injection.
#[async_trait]
pub trait CareerService: Send + Sync {
    /// Get career by code
    async fn get_career(&self, code: &str) -> AppResult<Career>;

    /// List all careers
    async fn list_careers(&self) -> AppResult<Vec<Career>>;

    /// Create a new career (code must be unused)
    async fn create_career(&self, career: Career) -> AppResult<Career>;

    /// Update name and/or duration
    async fn update_career(&self, code: &str, update: UpdateCareer) -> AppResult<Career>;

    /// Delete career, cascading to its students and their enrollments
    async fn delete_career(&self, code: &str) -> AppResult<()>;

    /// Summary line for a career
    async fn describe_career(&self, code: &str) -> AppResult<String>;
}

/// Concrete implementation of CareerService using repository.
pub struct CareerManager {
    repo: Arc<dyn CareerRepository>,
}

impl CareerManager {
    /// Create new career service instance with repository
    pub fn new(repo: Arc<dyn CareerRepository>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl CareerService for CareerManager {
    async fn get_career(&self, code: &str) -> AppResult<Career> {
        self.repo
            .find_by_code(code)
            .await?
            .ok_or_not_found()
    }

    async fn list_careers(&self) -> AppResult<Vec<Career>> {
        self.repo.list().await
    }

    async fn create_career(&self, career: Career) -> AppResult<Career> {
        validate_input(&career)?;

        if self.repo.find_by_code(&career.code).await?.is_some() {
            return Err(AppError::conflict("Career"));
        }

        self.repo.create(career).await
    }

    async fn update_career(&self, code: &str, update: UpdateCareer) -> AppResult<Career> {
        validate_input(&update)?;

        let mut career = self.get_career(code).await?;
        career.apply(update);

        self.repo.update(career).await
    }

    async fn delete_career(&self, code: &str) -> AppResult<()> {
        self.repo.delete(code).await
    }

    async fn describe_career(&self, code: &str) -> AppResult<String> {
        Ok(self.get_career(code).await?.describe())
    }
}
