//! Course database entity for SeaORM.

use sea_orm::entity::prelude::*;

use domain::{Course, DomainError};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "courses")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub code: String,
    pub name: String,
    /// Non-negative, enforced by a CHECK constraint
    pub credits: i64,
    pub instructor: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enrollment::Entity")]
    Enrollment,
}

impl Related<super::enrollment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enrollment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

/// Convert database model to domain entity
impl TryFrom<Model> for Course {
    type Error = DomainError;

    fn try_from(model: Model) -> Result<Self, Self::Error> {
        let credits = u64::try_from(model.credits).map_err(|_| {
            DomainError::validation(format!(
                "Course {} has negative stored credits {}",
                model.code, model.credits
            ))
        })?;

        Ok(Course {
            code: model.code,
            name: model.name,
            credits,
            instructor: model.instructor,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(credits: i64) -> Model {
        Model {
            code: "MAT101".to_string(),
            name: "Cálculo I".to_string(),
            credits,
            instructor: "Ana Ruiz".to_string(),
        }
    }

    #[test]
    fn stored_credits_convert() {
        assert_eq!(Course::try_from(model(i64::MAX)).unwrap().credits, i64::MAX as u64);
    }

    #[test]
    fn negative_stored_credits_are_rejected() {
        assert!(matches!(
            Course::try_from(model(-4)),
            Err(DomainError::Validation(_))
        ));
    }
}
