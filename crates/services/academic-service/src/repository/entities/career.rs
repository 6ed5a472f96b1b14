//! Career database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Career, DomainError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "careers")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    /// Non-negative, enforced by a CHECK constraint
    pub duration: i16,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::student::Entity")]
    Student,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Career {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let duration = u16::try_from(model.duration).map_err(|_| {
            DomainError::validation(format!(
                "Career {} has a negative stored duration {}",
                model.code, model.duration
            ))
        })?;

        Ok(Career {
            code: model.code,
            name: model.name,
            duration,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stored_duration_converts() {
        let model = Model {
            code: "ADM".to_string(),
            name: "Administración".to_string(),
            duration: 5,
        };
        assert_eq!(Career::try_from(model).unwrap().duration, 5);
    }

    #[test]
    fn negative_stored_duration_is_rejected() {
        let model = Model {
            code: "ADM".to_string(),
            name: "Administración".to_string(),
            duration: -1,
        };
        assert!(matches!(
            Career::try_from(model),
            Err(DomainError::Validation(_))
        ));
    }
}
