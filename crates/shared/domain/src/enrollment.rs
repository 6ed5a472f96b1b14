//! Enrollment domain entity.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::ENROLLMENT_DATE_FORMAT;
use crate::course::Course;
use crate::student::Student;

/// Timestamped association between one student and one course.
///
/// Records are created by the persistence layer, which assigns `id` and
/// `enrolled_at`; neither changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enrollment {
    pub id: i32,
    pub student_dni: String,
    pub course_code: String,
    pub enrolled_at: DateTime<Utc>,
}

impl Enrollment {
    /// Enrollment timestamp as `<Weekday> DD/MM/YYYY HH:MM:SS`
    pub fn formatted_date(&self) -> String {
        self.enrolled_at.format(ENROLLMENT_DATE_FORMAT).to_string()
    }

    /// Summary line naming the student and the course.
    ///
    /// `student` and `course` must be the records this enrollment references.
    pub fn describe(&self, student: &Student, course: &Course) -> String {
        format!(
            "{} matriculad{} en el curso {} / Fecha: {}",
            student.full_name(),
            student.sex.participle_suffix(),
            course,
            self.formatted_date()
        )
    }
}
