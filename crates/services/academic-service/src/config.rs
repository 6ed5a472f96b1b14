//! Academic service configuration.

use std::env;

use common::{DatabaseConfig, ServiceConfig};

/// Academic service configuration.
#[derive(Debug, Clone)]
pub struct AcademicServiceConfig {
    /// Service name and default log level
    pub service: ServiceConfig,
    /// Database connection settings
    pub database: DatabaseConfig,
}

impl AcademicServiceConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Self {
        let defaults = Self::default();

        Self {
            service: ServiceConfig {
                log_level: env::var("ACADEMIC_LOG_LEVEL").unwrap_or(defaults.service.log_level),
                ..defaults.service
            },
            database: DatabaseConfig {
                url: env::var("ACADEMIC_DATABASE_URL")
                    .or_else(|_| env::var("DATABASE_URL"))
                    .unwrap_or(defaults.database.url),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.max_connections),
                min_connections: env::var("DATABASE_MIN_CONNECTIONS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(defaults.database.min_connections),
            },
        }
    }
}

impl Default for AcademicServiceConfig {
    fn default() -> Self {
        Self {
            service: ServiceConfig {
                service_name: "academic-service".to_string(),
                ..ServiceConfig::default()
            },
            database: DatabaseConfig::default(),
        }
    }
}
