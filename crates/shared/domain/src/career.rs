//! Career domain entity and related types.

use std::fmt;

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::DEFAULT_CAREER_DURATION;

/// Academic program a student belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct Career {
    /// Short unique code (primary key)
    #[validate(length(min = 1, max = 3, message = "Career code must be 1 to 3 characters"))]
    pub code: String,
    #[validate(length(min = 1, max = 50, message = "Career name must be 1 to 50 characters"))]
    pub name: String,
    /// Duration in years
    #[validate(range(max = 32767, message = "Career duration must be at most 32767 years"))]
    pub duration: u16,
}

impl Career {
    /// Create a career with the default duration
    pub fn new(code: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            duration: DEFAULT_CAREER_DURATION,
        }
    }

    /// Override the duration in years
    pub fn with_duration(mut self, duration: u16) -> Self {
        self.duration = duration;
        self
    }

    /// Human-readable summary, e.g. `Administración (Duracion: 5 año(s))`
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// Apply a partial update
    pub fn apply(&mut self, update: UpdateCareer) {
        if let Some(name) = update.name {
            self.name = name;
        }
        if let Some(duration) = update.duration {
            self.duration = duration;
        }
    }
}

impl fmt::Display for Career {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (Duracion: {} año(s))", self.name, self.duration)
    }
}

/// Career update data transfer object
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Validate)]
pub struct UpdateCareer {
    #[validate(length(min = 1, max = 50, message = "Career name must be 1 to 50 characters"))]
    pub name: Option<String>,
    #[validate(range(max = 32767, message = "Career duration must be at most 32767 years"))]
    pub duration: Option<u16>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::validation::validate_input;

    #[test]
    fn describe_matches_summary_format() {
        let career = Career::new("ADM", "Administración").with_duration(5);
        assert_eq!(career.describe(), "Administración (Duracion: 5 año(s))");
    }

    #[test]
    fn new_career_defaults_to_five_years() {
        assert_eq!(Career::new("SIS", "Sistemas").duration, 5);
    }

    #[test]
    fn rejects_long_code() {
        let career = Career::new("ADMN", "Administración");
        assert!(validate_input(&career).is_err());
    }

    #[test]
    fn rejects_duration_outside_small_integer() {
        let career = Career::new("ADM", "Administración").with_duration(40000);
        assert!(validate_input(&career).is_err());
    }

    #[test]
    fn name_limit_counts_characters() {
        let name = "ó".repeat(50);
        assert!(validate_input(&Career::new("ADM", name)).is_ok());
    }

    #[test]
    fn apply_only_touches_given_fields() {
        let mut career = Career::new("ADM", "Administración");
        career.apply(UpdateCareer {
            name: None,
            duration: Some(4),
        });
        assert_eq!(career.name, "Administración");
        assert_eq!(career.duration, 4);
    }
}
