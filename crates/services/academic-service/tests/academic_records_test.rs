//! Integration tests for the academic records store.
//!
//! Each test runs against its own in-memory SQLite database with the full
//! migration set applied.

use chrono::{Duration, NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, EntityTrait, Set};

use academic_service_lib::infra::Database;
use academic_service_lib::repository::entities::{
    EnrollmentActiveModel, EnrollmentEntity, StudentActiveModel,
};
use academic_service_lib::repository::{
    CareerRepository, CareerStore, StudentRepository, StudentStore,
};
use academic_service_lib::service::{ServiceContainer, Services};
use academic_service_lib::{report_lines, ReportKind};
use common::{AppError, DatabaseConfig};
use domain::{Career, Course, Sex, Student, UpdateCareer};

async fn setup() -> (Database, Services) {
    let db = Database::connect(&DatabaseConfig::in_memory())
        .await
        .expect("in-memory database");
    let services = Services::from_connection(db.get_connection());
    (db, services)
}

fn student(dni: &str, given_names: &str, career_code: &str) -> Student {
    Student::new(
        dni,
        "Lopez",
        "Diaz",
        given_names,
        NaiveDate::from_ymd_opt(2001, 3, 14).unwrap(),
        career_code,
    )
}

/// Two careers, one student in each, one course both are enrolled in.
async fn seed(services: &Services) -> (i32, i32) {
    services
        .careers()
        .create_career(Career::new("ADM", "Administración"))
        .await
        .unwrap();
    services
        .careers()
        .create_career(Career::new("SIS", "Sistemas").with_duration(6))
        .await
        .unwrap();
    services
        .students()
        .create_student(student("11111111", "Maria", "ADM"))
        .await
        .unwrap();
    services
        .students()
        .create_student(student("22222222", "Jose", "SIS").with_sex(Sex::Male))
        .await
        .unwrap();
    services
        .courses()
        .create_course(Course::new("MAT101", "Cálculo I", 4, "Ana Ruiz"))
        .await
        .unwrap();

    let first = services
        .enrollments()
        .enroll("11111111", "MAT101")
        .await
        .unwrap();
    let second = services
        .enrollments()
        .enroll("22222222", "MAT101")
        .await
        .unwrap();
    (first.id, second.id)
}

// =============================================================================
// Round trips
// =============================================================================

#[tokio::test]
async fn test_records_round_trip_by_primary_key() {
    let (_db, services) = setup().await;
    let (enrollment_id, _) = seed(&services).await;

    let career = services.careers().get_career("SIS").await.unwrap();
    assert_eq!(career, Career::new("SIS", "Sistemas").with_duration(6));

    let maria = services.students().get_student("11111111").await.unwrap();
    assert_eq!(maria, student("11111111", "Maria", "ADM"));
    assert_eq!(maria.sex, Sex::Female);
    assert!(maria.active);

    let course = services.courses().get_course("MAT101").await.unwrap();
    assert_eq!(course.credits, 4);
    assert_eq!(course.instructor, "Ana Ruiz");

    let enrollment = services
        .enrollments()
        .get_enrollment(enrollment_id)
        .await
        .unwrap();
    assert_eq!(enrollment.student_dni, "11111111");
    assert_eq!(enrollment.course_code, "MAT101");
    assert!(Utc::now() - enrollment.enrolled_at < Duration::minutes(1));
}

#[tokio::test]
async fn test_default_career_duration_is_five_years() {
    let (_db, services) = setup().await;

    services
        .careers()
        .create_career(Career::new("ADM", "Administración"))
        .await
        .unwrap();

    assert_eq!(
        services.careers().describe_career("ADM").await.unwrap(),
        "Administración (Duracion: 5 año(s))"
    );
}

#[tokio::test]
async fn test_update_career_keeps_code() {
    let (_db, services) = setup().await;
    seed(&services).await;

    let updated = services
        .careers()
        .update_career(
            "ADM",
            UpdateCareer {
                name: Some("Administración de Empresas".to_string()),
                duration: Some(4),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.code, "ADM");
    assert_eq!(
        services.careers().get_career("ADM").await.unwrap().duration,
        4
    );
}

#[tokio::test]
async fn test_withdrawn_status_is_persisted() {
    let (_db, services) = setup().await;
    seed(&services).await;

    services
        .students()
        .set_student_active("22222222", false)
        .await
        .unwrap();

    assert_eq!(
        services.students().describe_student("22222222").await.unwrap(),
        "Lopez Diaz, Jose / Carrera: Sistemas (Duracion: 6 año(s)) / DE BAJA"
    );
}

// =============================================================================
// Cascading deletes
// =============================================================================

#[tokio::test]
async fn test_delete_career_cascades_to_students_and_enrollments() {
    let (_db, services) = setup().await;
    let (maria_enrollment, jose_enrollment) = seed(&services).await;

    services.careers().delete_career("ADM").await.unwrap();

    assert!(matches!(
        services.careers().get_career("ADM").await.unwrap_err(),
        AppError::NotFound
    ));
    assert!(matches!(
        services.students().get_student("11111111").await.unwrap_err(),
        AppError::NotFound
    ));
    assert!(matches!(
        services
            .enrollments()
            .get_enrollment(maria_enrollment)
            .await
            .unwrap_err(),
        AppError::NotFound
    ));

    // Records outside the deleted career are untouched
    assert!(services.students().get_student("22222222").await.is_ok());
    assert!(services
        .enrollments()
        .get_enrollment(jose_enrollment)
        .await
        .is_ok());
    assert!(services.courses().get_course("MAT101").await.is_ok());
}

#[tokio::test]
async fn test_delete_student_cascades_to_enrollments() {
    let (_db, services) = setup().await;
    let (maria_enrollment, jose_enrollment) = seed(&services).await;

    services.students().delete_student("11111111").await.unwrap();

    let remaining = services.enrollments().list_enrollments().await.unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, jose_enrollment);
    assert_ne!(remaining[0].id, maria_enrollment);
    assert!(services.careers().get_career("ADM").await.is_ok());
}

#[tokio::test]
async fn test_delete_course_cascades_to_enrollments() {
    let (_db, services) = setup().await;
    seed(&services).await;

    services.courses().delete_course("MAT101").await.unwrap();

    assert!(services
        .enrollments()
        .list_course_enrollments("MAT101")
        .await
        .unwrap()
        .is_empty());
    assert_eq!(services.students().list_students().await.unwrap().len(), 2);
}

#[tokio::test]
async fn test_delete_missing_career() {
    let (_db, services) = setup().await;

    assert!(matches!(
        services.careers().delete_career("XYZ").await.unwrap_err(),
        AppError::NotFound
    ));
}

// =============================================================================
// Constraint violations
// =============================================================================

#[tokio::test]
async fn test_duplicate_key_is_rejected() {
    let (db, services) = setup().await;
    seed(&services).await;

    let result = services
        .students()
        .create_student(student("11111111", "Otra", "SIS"))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));

    // The store maps the primary key violation itself
    let store = CareerStore::new(db.get_connection());
    let result = store.create(Career::new("ADM", "Otra")).await;
    assert!(matches!(result.unwrap_err(), AppError::Conflict(_)));
}

#[tokio::test]
async fn test_dangling_references_are_rejected() {
    let (_db, services) = setup().await;
    seed(&services).await;

    let result = services
        .students()
        .create_student(student("33333333", "Ana", "XYZ"))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    let result = services.enrollments().enroll("99999999", "MAT101").await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    let result = services.enrollments().enroll("11111111", "FIS100").await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
}

#[tokio::test]
async fn test_store_rejects_student_of_missing_career() {
    let (db, services) = setup().await;
    seed(&services).await;

    // Bypasses the service check so the foreign key fires
    let store = StudentStore::new(db.get_connection());
    let result = store.create(student("33333333", "Ana", "XYZ")).await;

    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));
    assert!(store.find_by_dni("33333333").await.unwrap().is_none());
}

#[tokio::test]
async fn test_store_rejects_unknown_sex_code() {
    let (db, services) = setup().await;
    seed(&services).await;

    let active = StudentActiveModel {
        dni: Set("44444444".to_string()),
        paternal_surname: Set("Lopez".to_string()),
        maternal_surname: Set("Diaz".to_string()),
        given_names: Set("Ana".to_string()),
        birth_date: Set(NaiveDate::from_ymd_opt(2002, 1, 9).unwrap()),
        sex: Set("X".to_string()),
        career_code: Set("ADM".to_string()),
        active: Set(true),
    };

    assert!(active.insert(db.connection()).await.is_err());
    assert!(matches!(
        services.students().get_student("44444444").await.unwrap_err(),
        AppError::NotFound
    ));
}

#[tokio::test]
async fn test_over_long_fields_are_rejected() {
    let (_db, services) = setup().await;

    let result = services
        .careers()
        .create_career(Career::new("ADMX", "Administración"))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    let result = services
        .courses()
        .create_course(Course::new("MAT101", "x".repeat(31), 4, "Ana Ruiz"))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    let result = services
        .courses()
        .create_course(Course::new("MAT102", "Cálculo II", u64::MAX, "Ana Ruiz"))
        .await;
    assert!(matches!(result.unwrap_err(), AppError::Validation(_)));

    // Lengths count characters, not bytes
    services
        .careers()
        .create_career(Career::new("ÑÑÑ", "á".repeat(50)))
        .await
        .unwrap();
}

// =============================================================================
// Enrollment timestamp
// =============================================================================

#[tokio::test]
async fn test_enrollment_timestamp_cannot_be_modified() {
    let (db, services) = setup().await;
    let (enrollment_id, _) = seed(&services).await;
    let before = services
        .enrollments()
        .get_enrollment(enrollment_id)
        .await
        .unwrap();

    let model = EnrollmentEntity::find_by_id(enrollment_id)
        .one(db.connection())
        .await
        .unwrap()
        .unwrap();
    let mut active: EnrollmentActiveModel = model.into();
    active.enrolled_at = Set(Utc::now() + Duration::days(1));

    assert!(active.update(db.connection()).await.is_err());

    let after = services
        .enrollments()
        .get_enrollment(enrollment_id)
        .await
        .unwrap();
    assert_eq!(before.enrolled_at, after.enrolled_at);
}

// =============================================================================
// Reports and migrations
// =============================================================================

#[tokio::test]
async fn test_report_lines() {
    let (_db, services) = setup().await;
    seed(&services).await;

    assert_eq!(
        report_lines(&services, ReportKind::Careers).await.unwrap(),
        vec![
            "Administración (Duracion: 5 año(s))".to_string(),
            "Sistemas (Duracion: 6 año(s))".to_string(),
        ]
    );
    assert_eq!(
        report_lines(&services, ReportKind::Students).await.unwrap(),
        vec![
            "Lopez Diaz, Jose / Carrera: Sistemas (Duracion: 6 año(s)) / VIGENTE".to_string(),
            "Lopez Diaz, Maria / Carrera: Administración (Duracion: 5 año(s)) / VIGENTE"
                .to_string(),
        ]
    );

    let enrollments = report_lines(&services, ReportKind::Enrollments)
        .await
        .unwrap();
    assert_eq!(enrollments.len(), 2);
    assert!(enrollments[0]
        .starts_with("Lopez Diaz, Maria matriculada en el curso Cálculo I (MAT101) / Docente: Ana Ruiz / Fecha: "));
    assert!(enrollments[1].starts_with("Lopez Diaz, Jose matriculado en el curso "));
}

#[tokio::test]
async fn test_migration_status_lists_applied_migrations() {
    let (db, _services) = setup().await;

    let status = db.migration_status().await.unwrap();

    assert_eq!(status.len(), 4);
    assert!(status.iter().all(|(_, applied)| *applied));
    assert_eq!(status[0].0, "m20240101_000001_create_careers_table");
    db.ping().await.unwrap();
}
