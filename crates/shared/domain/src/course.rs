//! Course domain entity and related types.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::constants::MAX_COURSE_CREDITS;

/// Course offered to students
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Course {
    /// Unique course code (primary key)
    #[validate(length(min = 1, max = 6, message = "Course code must be 1 to 6 characters"))]
    pub code: String,
    #[validate(length(min = 1, max = 30, message = "Course name must be 1 to 30 characters"))]
    pub name: String,
    #[validate(custom(function = "validate_credits"))]
    pub credits: u64,
    #[validate(length(min = 1, max = 100, message = "Instructor name must be 1 to 100 characters"))]
    pub instructor: String,
}

impl Course {
    pub fn new(
        code: impl Into<String>,
        name: impl Into<String>,
        credits: u64,
        instructor: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            credits,
            instructor: instructor.into(),
        }
    }

    /// Human-readable summary, e.g. `Cálculo I (MAT101) / Docente: Ana Ruiz`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Apply a partial update
    pub fn apply(&mut self, update: UpdateCourse) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(credits) = update.credits {
            self.credits = credits;
        }
        if let Some(instructor) = update.instructor {
            self.instructor = instructor;
        }
    }
}

impl fmt::Display for Course {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}) / Docente: {}", self.name, self.code, self.instructor)
    }
}

/// Credits must fit a signed 64-bit column
fn validate_credits(credits: u64) -> Result<(), ValidationError> {
    if credits > MAX_COURSE_CREDITS {
        return Err(ValidationError::new("credits")
            .with_message("Course credits exceed the storable range".into()));
    }
    Ok(())
}

/// Course update data transfer object
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateCourse {
    #[validate(length(min = 1, max = 30, message = "Course name must be 1 to 30 characters"))]
    pub name: Option<String>,
    #[validate(custom(function = "validate_credits"))]
    pub credits: Option<u64>,
    #[validate(length(min = 1, max = 100, message = "Instructor name must be 1 to 100 characters"))]
    pub instructor: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;

    #[test]
    fn describe_matches_summary_format() {
        let course = Course::new("MAT101", "Cálculo I", 4, "Ana Ruiz");
        assert_eq!(course.describe(), "Cálculo I (MAT101) / Docente: Ana Ruiz");
    }

    #[test]
    fn rejects_seven_character_code() {
        let course = Course::new("MAT1010", "Cálculo I", 4, "Ana Ruiz");
        assert!(validate_input(&course).is_err());
    }

    #[test]
    fn credits_limited_to_big_integer() {
        let max = Course::new("MAT101", "Cálculo I", MAX_COURSE_CREDITS, "Ana Ruiz");
        assert!(validate_input(&max).is_ok());

        let over = Course::new("MAT101", "Cálculo I", MAX_COURSE_CREDITS + 1, "Ana Ruiz");
        assert!(validate_input(&over).is_err());
    }

    #[test]
    fn update_credits_limited_to_big_integer() {
        let update = UpdateCourse {
            credits: Some(u64::MAX),
            ..Default::default()
        };
        assert_eq!(
            validate_input(&update).unwrap_err().to_string(),
            "Validation error: Course credits exceed the storable range"
        );

        let update = UpdateCourse {
            credits: Some(MAX_COURSE_CREDITS),
            ..Default::default()
        };
        assert!(validate_input(&update).is_ok());
    }

    #[test]
    fn rejects_empty_instructor() {
        let course = Course::new("MAT101", "Cálculo I", 4, "");
        assert!(validate_input(&course).is_err());
    }
}
