//! Migration: Create careers table.

use domain::{CAREER_CODE_MAX_LEN, CAREER_NAME_MAX_LEN, DEFAULT_CAREER_DURATION};
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Careers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Careers::Code)
                            .string_len(CAREER_CODE_MAX_LEN)
                            .not_null()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Careers::Name)
                            .string_len(CAREER_NAME_MAX_LEN)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(Careers::Duration)
                            .small_integer()
                            .not_null()
                            .default(i32::from(DEFAULT_CAREER_DURATION))
                            .check(Expr::col(Careers::Duration).gte(0)),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Careers::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Careers {
    Table,
    Code,
    Name,
    Duration,
}
