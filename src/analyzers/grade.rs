use serde::{Deserialize, Serialize};
use std::fmt;

/// Letter grade awarded from a student's average mark.
///
/// Ordering follows the letters, so `Grade::A < Grade::F`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    pub const ALL: [Grade; 5] = [Grade::A, Grade::B, Grade::C, Grade::D, Grade::F];

    pub fn as_str(self) -> &'static str {
        match self {
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Converts an average mark into a letter grade.
///
/// | Average     | Grade |
/// |-------------|-------|
/// | >= 60       | A     |
/// | >= 50       | B     |
/// | >= 40       | C     |
/// | >= 30       | D     |
/// | < 30        | F     |
pub fn grade(average: f64) -> Grade {
    match average {
        a if a >= 60.0 => Grade::A,
        a if a >= 50.0 => Grade::B,
        a if a >= 40.0 => Grade::C,
        a if a >= 30.0 => Grade::D,
        _ => Grade::F,
    }
}
