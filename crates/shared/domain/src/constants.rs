//! Domain-level constants.
//!
//! Field limits mirror the column definitions of the relational schema.

// =============================================================================
// Career
// =============================================================================

/// Maximum length of a career code
pub const CAREER_CODE_MAX_LEN: u32 = 3;

/// Maximum length of a career name
pub const CAREER_NAME_MAX_LEN: u32 = 50;

/// Duration assigned to careers created without one (years)
pub const DEFAULT_CAREER_DURATION: u16 = 5;

/// Largest duration a small integer column can hold
pub const MAX_CAREER_DURATION: u16 = 32767;

// =============================================================================
// Student
// =============================================================================

/// Maximum length of a national ID
pub const STUDENT_DNI_MAX_LEN: u32 = 8;

/// Maximum length of each surname and of the given names
pub const STUDENT_NAME_MAX_LEN: u32 = 35;

/// Storage code for female students
pub const SEX_FEMALE: &str = "F";

/// Storage code for male students
pub const SEX_MALE: &str = "M";

/// All valid sex codes
pub const VALID_SEX_CODES: &[&str] = &[SEX_FEMALE, SEX_MALE];

/// Status label for active students
pub const STATUS_ACTIVE: &str = "VIGENTE";

/// Status label for withdrawn students
pub const STATUS_WITHDRAWN: &str = "DE BAJA";

// =============================================================================
// Course
// =============================================================================

/// Maximum length of a course code
pub const COURSE_CODE_MAX_LEN: u32 = 6;

/// Maximum length of a course name
pub const COURSE_NAME_MAX_LEN: u32 = 30;

/// Maximum length of an instructor name
pub const COURSE_INSTRUCTOR_MAX_LEN: u32 = 100;

/// Largest credit count a big integer column can hold
pub const MAX_COURSE_CREDITS: u64 = i64::MAX as u64;

// =============================================================================
// Enrollment
// =============================================================================

/// strftime pattern used when printing enrollment timestamps
pub const ENROLLMENT_DATE_FORMAT: &str = "%A %d/%m/%Y %H:%M:%S";
