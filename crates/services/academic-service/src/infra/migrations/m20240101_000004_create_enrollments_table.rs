//! Migration: Create enrollments table.
//!
//! Enrollments reference both a student and a course and disappear with
//! either of them.

use domain::{COURSE_CODE_MAX_LEN, STUDENT_DNI_MAX_LEN};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Enrollments::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Enrollments::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::StudentDni)
                            .string_len(STUDENT_DNI_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::CourseCode)
                            .string_len(COURSE_CODE_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Enrollments::EnrolledAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollments_student_dni")
                            .from(Enrollments::Table, Enrollments::StudentDni)
                            .to(Students::Table, Students::Dni)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_enrollments_course_code")
                            .from(Enrollments::Table, Enrollments::CourseCode)
                            .to(Courses::Table, Courses::Code)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_student_dni")
                    .table(Enrollments::Table)
                    .col(Enrollments::StudentDni)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_enrollments_course_code")
                    .table(Enrollments::Table)
                    .col(Enrollments::CourseCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Enrollments::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Enrollments {
    Table,
    Id,
    StudentDni,
    CourseCode,
    EnrolledAt,
}

#[derive(Iden)]
enum Students {
    Table,
    Dni,
}

#[derive(Iden)]
enum Courses {
    Table,
    Code,
}
