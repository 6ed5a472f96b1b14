//! Academic Service Library
//!
//! This crate maps the academic records schema (careers, students, courses,
//! enrollments) onto a relational store and exposes the use cases over it.
//! It is driven by the `academic-service` binary.

pub mod config;
pub mod infra;
pub mod repository;
pub mod service;

use std::collections::HashMap;

use tracing::info;

use common::{AppError, AppResult};
use domain::{Career, Course, Student};

use crate::config::AcademicServiceConfig;
use crate::infra::Database;
use crate::service::{ServiceContainer, Services};

/// Run migrations (for CLI commands).
pub async fn run_migrations(action: MigrateAction) -> Result<(), Box<dyn std::error::Error>> {
    let config = AcademicServiceConfig::from_env();
    let db = Database::connect_without_migrations(&config.database).await?;

    match action {
        MigrateAction::Up => {
            db.run_migrations().await?;
            info!("Migrations applied successfully");
        }
        MigrateAction::Down => {
            db.rollback_migration().await?;
            info!("Rolled back last migration");
        }
        MigrateAction::Status => {
            let status = db.migration_status().await?;
            for (name, applied) in status {
                let marker = if applied { "[x]" } else { "[ ]" };
                println!("{} {}", marker, name);
            }
        }
        MigrateAction::Fresh => {
            tracing::warn!("Resetting database and running all migrations");
            db.fresh_migrations().await?;
            info!("Database reset and migrations applied");
        }
    }

    Ok(())
}

/// Print every record of one kind (for CLI commands).
pub async fn run_report(kind: ReportKind, json: bool) -> AppResult<()> {
    let config = AcademicServiceConfig::from_env();
    let db = Database::connect(&config.database).await?;
    let services = Services::from_connection(db.get_connection());

    if json {
        println!("{}", report_json(&services, kind).await?);
    } else {
        for line in report_lines(&services, kind).await? {
            println!("{}", line);
        }
    }

    Ok(())
}

/// Migration action type.
#[derive(Debug, Clone, Copy)]
pub enum MigrateAction {
    Up,
    Down,
    Status,
    Fresh,
}

/// Record type listed by a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportKind {
    Careers,
    Students,
    Courses,
    Enrollments,
}

/// One summary line per record of the given kind.
pub async fn report_lines(
    services: &dyn ServiceContainer,
    kind: ReportKind,
) -> AppResult<Vec<String>> {
    let lines: Vec<String> = match kind {
        ReportKind::Careers => services
            .careers()
            .list_careers()
            .await?
            .iter()
            .map(Career::describe)
            .collect(),
        ReportKind::Courses => services
            .courses()
            .list_courses()
            .await?
            .iter()
            .map(Course::describe)
            .collect(),
        ReportKind::Students => {
            let careers = careers_by_code(services).await?;
            services
                .students()
                .list_students()
                .await?
                .iter()
                .map(|student| -> AppResult<String> {
                    let career = lookup(&careers, &student.career_code, "career")?;
                    Ok(student.describe(career))
                })
                .collect::<AppResult<Vec<_>>>()?
        }
        ReportKind::Enrollments => {
            let students: HashMap<String, Student> = services
                .students()
                .list_students()
                .await?
                .into_iter()
                .map(|s| (s.dni.clone(), s))
                .collect();
            let courses: HashMap<String, Course> = services
                .courses()
                .list_courses()
                .await?
                .into_iter()
                .map(|c| (c.code.clone(), c))
                .collect();

            services
                .enrollments()
                .list_enrollments()
                .await?
                .iter()
                .map(|enrollment| -> AppResult<String> {
                    let student = lookup(&students, &enrollment.student_dni, "student")?;
                    let course = lookup(&courses, &enrollment.course_code, "course")?;
                    Ok(enrollment.describe(student, course))
                })
                .collect::<AppResult<Vec<_>>>()?
        }
    };

    Ok(lines)
}

/// All records of the given kind as a JSON array.
pub async fn report_json(services: &dyn ServiceContainer, kind: ReportKind) -> AppResult<String> {
    let rendered = match kind {
        ReportKind::Careers => serde_json::to_string_pretty(&services.careers().list_careers().await?),
        ReportKind::Students => {
            serde_json::to_string_pretty(&services.students().list_students().await?)
        }
        ReportKind::Courses => serde_json::to_string_pretty(&services.courses().list_courses().await?),
        ReportKind::Enrollments => {
            serde_json::to_string_pretty(&services.enrollments().list_enrollments().await?)
        }
    };

    rendered.map_err(|e| AppError::internal(format!("Failed to render report: {}", e)))
}

async fn careers_by_code(services: &dyn ServiceContainer) -> AppResult<HashMap<String, Career>> {
    Ok(services
        .careers()
        .list_careers()
        .await?
        .into_iter()
        .map(|c| (c.code.clone(), c))
        .collect())
}

fn lookup<'a, T>(records: &'a HashMap<String, T>, key: &str, kind: &str) -> AppResult<&'a T> {
    records
        .get(key)
        .ok_or_else(|| AppError::internal(format!("Dangling reference to {} {}", kind, key)))
}
