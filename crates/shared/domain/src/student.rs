//! Student domain entity and related types.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::career::Career;
use crate::constants::{SEX_FEMALE, SEX_MALE, STATUS_ACTIVE, STATUS_WITHDRAWN};
use crate::error::{DomainError, DomainResult};

/// Sex flag recorded for a student
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sex {
    #[default]
    #[serde(rename = "F")]
    Female,
    #[serde(rename = "M")]
    Male,
}

impl Sex {
    /// Single-letter storage code
    pub fn code(&self) -> &'static str {
        match self {
            Sex::Female => SEX_FEMALE,
            Sex::Male => SEX_MALE,
        }
    }

    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Sex::Female => "Femenino",
            Sex::Male => "Masculino",
        }
    }

    /// Grammatical gender ending used in "matriculad<a|o>"
    pub fn participle_suffix(&self) -> &'static str {
        match self {
            Sex::Female => "a",
            Sex::Male => "o",
        }
    }
}

impl FromStr for Sex {
    type Err = DomainError;

    fn from_str(s: &str) -> DomainResult<Self> {
        match s {
            SEX_FEMALE => Ok(Sex::Female),
            SEX_MALE => Ok(Sex::Male),
            other => Err(DomainError::validation(format!(
                "Invalid sex code '{}', expected F or M",
                other
            ))),
        }
    }
}

impl TryFrom<&str> for Sex {
    type Error = DomainError;

    fn try_from(s: &str) -> DomainResult<Self> {
        s.parse()
    }
}

impl From<Sex> for String {
    fn from(sex: Sex) -> Self {
        sex.code().to_string()
    }
}

impl fmt::Display for Sex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Student domain entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Student {
    /// National ID (primary key)
    #[validate(length(min = 1, max = 8, message = "Student DNI must be 1 to 8 characters"))]
    pub dni: String,
    #[validate(length(min = 1, max = 35, message = "Paternal surname must be 1 to 35 characters"))]
    pub paternal_surname: String,
    #[validate(length(min = 1, max = 35, message = "Maternal surname must be 1 to 35 characters"))]
    pub maternal_surname: String,
    #[validate(length(min = 1, max = 35, message = "Given names must be 1 to 35 characters"))]
    pub given_names: String,
    pub birth_date: NaiveDate,
    pub sex: Sex,
    /// Code of the career this student belongs to
    #[validate(length(min = 1, max = 3, message = "Career code must be 1 to 3 characters"))]
    pub career_code: String,
    /// `true` while enrolled, `false` once withdrawn
    pub active: bool,
}

impl Student {
    /// Create an active, female-flagged student (the schema defaults)
    pub fn new(
        dni: impl Into<String>,
        paternal_surname: impl Into<String>,
        maternal_surname: impl Into<String>,
        given_names: impl Into<String>,
        birth_date: NaiveDate,
        career_code: impl Into<String>,
    ) -> Self {
        Self {
            dni: dni.into(),
            paternal_surname: paternal_surname.into(),
            maternal_surname: maternal_surname.into(),
            given_names: given_names.into(),
            birth_date,
            sex: Sex::default(),
            career_code: career_code.into(),
            active: true,
        }
    }

    /// Override the sex flag
    pub fn with_sex(mut self, sex: Sex) -> Self {
        self.sex = sex;
        self
    }

    /// Override the active flag
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }

    /// `"<paternal> <maternal>, <given>"`
    pub fn full_name(&self) -> String {
        format!(
            "{} {}, {}",
            self.paternal_surname, self.maternal_surname, self.given_names
        )
    }

    /// VIGENTE or DE BAJA depending on the active flag
    pub fn status_label(&self) -> &'static str {
        if self.active {
            STATUS_ACTIVE
        } else {
            STATUS_WITHDRAWN
        }
    }

    /// Summary line including the student's career.
    ///
    /// `career` must be the record referenced by `career_code`.
    pub fn describe(&self, career: &Career) -> String {
        format!(
            "{} / Carrera: {} / {}",
            self.full_name(),
            career,
            self.status_label()
        )
    }

    /// Apply a partial update
    pub fn apply(&mut self, update: UpdateStudent) {
        if let Some(paternal_surname) = update.paternal_surname {
            self.paternal_surname = paternal_surname;
        }
        if let Some(maternal_surname) = update.maternal_surname {
            self.maternal_surname = maternal_surname;
        }
        if let Some(given_names) = update.given_names {
            self.given_names = given_names;
        }
        if let Some(birth_date) = update.birth_date {
            self.birth_date = birth_date;
        }
        if let Some(sex) = update.sex {
            self.sex = sex;
        }
        if let Some(career_code) = update.career_code {
            self.career_code = career_code;
        }
        if let Some(active) = update.active {
            self.active = active;
        }
    }
}

/// Student update data transfer object
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateStudent {
    #[validate(length(min = 1, max = 35, message = "Paternal surname must be 1 to 35 characters"))]
    pub paternal_surname: Option<String>,
    #[validate(length(min = 1, max = 35, message = "Maternal surname must be 1 to 35 characters"))]
    pub maternal_surname: Option<String>,
    #[validate(length(min = 1, max = 35, message = "Given names must be 1 to 35 characters"))]
    pub given_names: Option<String>,
    pub birth_date: Option<NaiveDate>,
    pub sex: Option<Sex>,
    /// Move the student to another career
    #[validate(length(min = 1, max = 3, message = "Career code must be 1 to 3 characters"))]
    pub career_code: Option<String>,
    pub active: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;

    fn maria() -> Student {
        Student::new(
            "12345678",
            "Lopez",
            "Diaz",
            "Maria",
            NaiveDate::from_ymd_opt(2001, 3, 14).unwrap(),
            "ADM",
        )
    }

    fn administration() -> Career {
        Career::new("ADM", "Administración")
    }

    #[test]
    fn full_name_keeps_separators() {
        assert_eq!(maria().full_name(), "Lopez Diaz, Maria");
    }

    #[test]
    fn describe_active_student() {
        assert_eq!(
            maria().describe(&administration()),
            "Lopez Diaz, Maria / Carrera: Administración (Duracion: 5 año(s)) / VIGENTE"
        );
    }

    #[test]
    fn describe_withdrawn_student() {
        let student = maria().with_active(false);
        assert!(student.describe(&administration()).ends_with("DE BAJA"));
    }

    #[test]
    fn defaults_follow_schema() {
        let student = maria();
        assert_eq!(student.sex, Sex::Female);
        assert!(student.active);
    }

    #[test]
    fn sex_parses_storage_codes() {
        assert_eq!("F".parse::<Sex>(), Ok(Sex::Female));
        assert_eq!(Sex::try_from("M"), Ok(Sex::Male));
        assert!("X".parse::<Sex>().is_err());
        assert_eq!(String::from(Sex::Male), "M");
    }

    #[test]
    fn rejects_long_surname() {
        let mut student = maria();
        student.paternal_surname = "x".repeat(36);
        assert!(validate_input(&student).is_err());
    }

    #[test]
    fn rejects_long_dni() {
        let mut student = maria();
        student.dni = "123456789".to_string();
        assert!(validate_input(&student).is_err());
    }

    #[test]
    fn apply_moves_career_and_withdraws() {
        let mut student = maria();
        student.apply(UpdateStudent {
            career_code: Some("SIS".to_string()),
            active: Some(false),
            ..Default::default()
        });
        assert_eq!(student.career_code, "SIS");
        assert!(!student.active);
        assert_eq!(student.given_names, "Maria");
    }
}
