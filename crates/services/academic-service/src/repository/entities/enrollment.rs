//! Enrollment database entity for SeaORM.
//!
//! The enrollment timestamp is owned by this entity: it is stamped on insert
//! and any later attempt to change it is rejected before reaching the store.

use chrono::{SubsecRound, Utc};
use sea_orm::entity::prelude::*;
use sea_orm::Set;

use domain::Enrollment;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "enrollments")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub student_dni: String,
    pub course_code: String,
    pub enrolled_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::student::Entity",
        from = "Column::StudentDni",
        to = "super::student::Column::Dni",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Student,
    #[sea_orm(
        belongs_to = "super::course::Entity",
        from = "Column::CourseCode",
        to = "super::course::Column::Code",
        on_update = "Cascade",
        on_delete = "Cascade"
    )]
    Course,
}

impl Related<super::student::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Student.def()
    }
}

impl Related<super::course::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Course.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if insert {
            // Microsecond precision survives every supported backend unchanged
            self.enrolled_at = Set(Utc::now().trunc_subsecs(6));
        } else if self.enrolled_at.is_set() {
            return Err(DbErr::Custom(
                "enrollment timestamp cannot be modified".to_string(),
            ));
        }
        Ok(self)
    }
}

/// Convert database model to domain entity
impl From<Model> for Enrollment {
    fn from(model: Model) -> Self {
        Enrollment {
            id: model.id,
            student_dni: model.student_dni,
            course_code: model.course_code,
            enrolled_at: model.enrolled_at,
        }
    }
}
