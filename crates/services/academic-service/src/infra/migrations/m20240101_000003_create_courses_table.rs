//! Migration: Create courses table.

use domain::{COURSE_CODE_MAX_LEN, COURSE_INSTRUCTOR_MAX_LEN, COURSE_NAME_MAX_LEN};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Courses::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Courses::Code)
                            .string_len(COURSE_CODE_MAX_LEN)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Courses::Name)
                            .string_len(COURSE_NAME_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Courses::Credits)
                            .big_integer()
                            .not_null()
                            .check(Expr::col(Courses::Credits).gte(0)),
                    )
                    .col(
                        ColumnDef::new(Courses::Instructor)
                            .string_len(COURSE_INSTRUCTOR_MAX_LEN)
                            .not_null(),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Courses::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Courses {
    Table,
    Code,
    Name,
    Credits,
    Instructor,
}
