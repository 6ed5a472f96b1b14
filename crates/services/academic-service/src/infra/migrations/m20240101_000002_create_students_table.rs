//! Migration: Create students table.
//!
//! Students reference careers; removing a career removes its students.

use domain::{
    CAREER_CODE_MAX_LEN, SEX_FEMALE, STUDENT_DNI_MAX_LEN, STUDENT_NAME_MAX_LEN, VALID_SEX_CODES,
};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Students::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Students::Dni)
                            .string_len(STUDENT_DNI_MAX_LEN)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Students::PaternalSurname)
                            .string_len(STUDENT_NAME_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::MaternalSurname)
                            .string_len(STUDENT_NAME_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::GivenNames)
                            .string_len(STUDENT_NAME_MAX_LEN)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Students::BirthDate).date().not_null())
                    .col(
                        ColumnDef::new(Students::Sex)
                            .string_len(1)
                            .not_null()
                            .default(SEX_FEMALE)
                            .check(Expr::col(Students::Sex).is_in(VALID_SEX_CODES.iter().copied())),
                    )
                    .col(
                        ColumnDef::new(Students::CareerCode)
                            .string_len(CAREER_CODE_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Students::Active)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_students_career_code")
                            .from(Students::Table, Students::CareerCode)
                            .to(Careers::Table, Careers::Code)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index for listing students of a career
        manager
            .create_index(
                Index::create()
                    .name("idx_students_career_code")
                    .table(Students::Table)
                    .col(Students::CareerCode)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Students::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Students {
    Table,
    Dni,
    PaternalSurname,
    MaternalSurname,
    GivenNames,
    BirthDate,
    Sex,
    CareerCode,
    Active,
}

#[derive(Iden)]
enum Careers {
    Table,
    Code,
}
