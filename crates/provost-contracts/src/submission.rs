//! The submit payload and its validation rules.

use serde::{Deserialize, Serialize};

use crate::{
    error::{ProvostError, ProvostResult},
    grade::Grade,
};

/// The payload a course adviser submits for a student result.
///
/// `grade` is optional: when absent, the grade derived from `score` is used;
/// when present, it must agree with the derived band or the submission is
/// rejected. The derivation table is the single authority on grading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResultSubmission {
    pub student_id: String,
    pub student_name: String,
    pub course_code: String,
    pub course_name: String,
    /// 0–100 integer.
    pub score: u8,
    pub grade: Option<Grade>,
    pub semester: String,
    pub academic_year: String,
    pub comments: Option<String>,
}

impl ResultSubmission {
    /// Validate the payload and return the effective grade.
    ///
    /// Checks, in order: no required field blank, score within 0–100, and —
    /// when a grade was supplied — consistency with the band derived from
    /// the score.
    pub fn validate(&self) -> ProvostResult<Grade> {
        let required = [
            ("student_id", &self.student_id),
            ("student_name", &self.student_name),
            ("course_code", &self.course_code),
            ("course_name", &self.course_name),
            ("semester", &self.semester),
            ("academic_year", &self.academic_year),
        ];
        for (field, value) in required {
            if value.trim().is_empty() {
                return Err(ProvostError::Validation {
                    reason: format!("required field '{}' is blank", field),
                });
            }
        }

        if self.score > 100 {
            return Err(ProvostError::Validation {
                reason: format!("score {} is out of range 0-100", self.score),
            });
        }

        let derived = Grade::from_score(self.score);
        match self.grade {
            Some(supplied) if supplied != derived => Err(ProvostError::Validation {
                reason: format!(
                    "supplied grade '{}' is inconsistent with score {} (derives '{}')",
                    supplied, self.score, derived
                ),
            }),
            _ => Ok(derived),
        }
    }
}
