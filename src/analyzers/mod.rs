//! Grading and class-wide aggregation.
//!
//! [`grade`] maps an average to a letter, [`aggregate::Classroom`] computes
//! statistics over the loaded students, and [`types`] holds the report rows.

pub mod aggregate;
pub mod grade;
pub mod types;
pub mod utility;
