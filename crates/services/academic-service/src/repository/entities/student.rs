//! Student database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{DomainError, Student};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "students")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub dni: String,
    pub paternal_surname: String,
    pub maternal_surname: String,
    pub given_names: String,
    pub birth_date: Date,
    /// `F` or `M`
    pub sex: String,
    pub career_code: String,
    pub active: bool,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::career::Entity",
        from = "Column::CareerCode",
        to = "super::career::Column::Code",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Career,
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::career::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Career.def()
    }
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Student {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        Ok(Student {
            sex: model.sex.parse()?,
            dni: model.dni,
            paternal_surname: model.paternal_surname,
            maternal_surname: model.maternal_surname,
            given_names: model.given_names,
            birth_date: model.birth_date,
            career_code: model.career_code,
            active: model.active,
        })
    }
}
