//! Letter grades and the deterministic score→grade table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A letter grade derived from a 0–100 score.
///
/// Serialized as the display string ("A+", "B", …), which is also the value
/// stored in results and audit details.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    #[serde(rename = "B+")]
    BPlus,
    B,
    #[serde(rename = "C+")]
    CPlus,
    C,
    #[serde(rename = "D+")]
    DPlus,
    D,
    E,
    F,
}

impl Grade {
    /// Derive the grade for a score.
    ///
    /// Total over 0–100: ≥90 A+, ≥80 A, ≥75 B+, ≥70 B, ≥65 C+, ≥60 C,
    /// ≥55 D+, ≥50 D, ≥45 E, else F. Callers validate the 0–100 range
    /// before deriving; scores above 100 never reach this function.
    pub fn from_score(score: u8) -> Grade {
        match score {
            90..=u8::MAX => Grade::APlus,
            80..=89 => Grade::A,
            75..=79 => Grade::BPlus,
            70..=74 => Grade::B,
            65..=69 => Grade::CPlus,
            60..=64 => Grade::C,
            55..=59 => Grade::DPlus,
            50..=54 => Grade::D,
            45..=49 => Grade::E,
            _ => Grade::F,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::BPlus => "B+",
            Grade::B => "B",
            Grade::CPlus => "C+",
            Grade::C => "C",
            Grade::DPlus => "D+",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
