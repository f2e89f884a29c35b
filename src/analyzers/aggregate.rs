use crate::analyzers::grade::Grade;
use crate::analyzers::types::{ClassStats, StudentSummary};
use crate::analyzers::utility::{mean, stddev};
use crate::stats::Student;
use chrono::Utc;
use std::collections::BTreeMap;

/// Class-wide statistics over a borrowed, ordered list of students.
///
/// Operations with no meaning for an empty class return `None`.
#[derive(Debug, Clone, Copy)]
pub struct Classroom<'a> {
    students: &'a [Student],
}

impl<'a> Classroom<'a> {
    pub fn new(students: &'a [Student]) -> Self {
        Self { students }
    }

    pub fn students(&self) -> &'a [Student] {
        self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    fn averages(&self) -> Vec<f64> {
        self.students.iter().map(Student::average).collect()
    }

    /// Mean of the per-student averages (not a mean over all marks).
    pub fn class_average(&self) -> Option<f64> {
        mean(&self.averages())
    }

    /// Population standard deviation of the per-student averages.
    pub fn average_stddev(&self) -> Option<f64> {
        let averages = self.averages();
        mean(&averages).map(|m| stddev(&averages, m))
    }

    /// Student with the highest total; the earliest one wins a tie.
    pub fn top_performer(&self) -> Option<&'a Student> {
        self.students.iter().fold(None, |best, s| match best {
            Some(b) if b.total() >= s.total() => Some(b),
            _ => Some(s),
        })
    }

    /// Student with the lowest total; the earliest one wins a tie.
    pub fn lowest_performer(&self) -> Option<&'a Student> {
        self.students.iter().fold(None, |worst, s| match worst {
            Some(w) if w.total() <= s.total() => Some(w),
            _ => Some(s),
        })
    }

    pub fn count_passed(&self) -> usize {
        self.students.iter().filter(|s| s.passed()).count()
    }

    /// Number of students per grade. Every grade is present, possibly with zero.
    pub fn grade_distribution(&self) -> BTreeMap<Grade, usize> {
        let mut counts: BTreeMap<Grade, usize> = Grade::ALL.iter().map(|&g| (g, 0)).collect();
        for student in self.students {
            *counts.entry(student.grade()).or_default() += 1;
        }
        counts
    }

    /// Summary rows in input order.
    pub fn generate_summaries(&self) -> Vec<StudentSummary> {
        self.students.iter().map(Student::summary).collect()
    }

    /// Collects every class-wide figure into one report.
    pub fn stats(&self) -> Option<ClassStats> {
        let top = self.top_performer()?;
        let lowest = self.lowest_performer()?;
        let passed = self.count_passed();

        Some(ClassStats {
            generated_at: Utc::now(),
            student_count: self.len(),
            class_average: self.class_average()?,
            average_stddev: self.average_stddev()?,
            top_performer: top.name().to_string(),
            lowest_performer: lowest.name().to_string(),
            passed,
            failed: self.len() - passed,
            grade_distribution: self.grade_distribution(),
        })
    }
}
