//! Core data model types for rollbook.
//!
//! A [`StudentRecord`] keeps its [`Grade`] in step with its marks: the
//! grade is computed on construction and on every marks change, and the
//! fields are private so nothing outside this crate can desynchronise them.

use serde::Serialize;
use std::fmt;

/// Letter grade derived from a marks value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Grade {
    A,
    B,
    C,
    D,
    F,
}

impl Grade {
    /// Map marks onto a grade band. Each band includes its lower bound.
    ///
    /// | marks      | grade |
    /// |------------|-------|
    /// | >= 85      | A     |
    /// | >= 70      | B     |
    /// | >= 55      | C     |
    /// | >= 40      | D     |
    /// | otherwise  | F     |
    pub fn from_marks(marks: f64) -> Self {
        if marks >= 85.0 {
            Grade::A
        } else if marks >= 70.0 {
            Grade::B
        } else if marks >= 55.0 {
            Grade::C
        } else if marks >= 40.0 {
            Grade::D
        } else {
            Grade::F
        }
    }

    /// The letter as a static string.
    pub fn as_str(&self) -> &'static str {
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

/// Format marks to two decimals, rounding exact ties away from zero
/// (`78.125` prints as `78.13`).
pub fn format_marks(marks: f64) -> String {
    format!("{:.2}", (marks * 100.0).round() / 100.0)
}

/// A single student entry in the record store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentRecord {
    roll_no: i32,
    name: String,
    email: String,
    course: String,
    marks: f64,
    grade: Grade,
}

impl StudentRecord {
    pub fn new(
        roll_no: i32,
        name: impl Into<String>,
        email: impl Into<String>,
        course: impl Into<String>,
        marks: f64,
    ) -> Self {
        Self {
            roll_no,
            name: name.into(),
            email: email.into(),
            course: course.into(),
            marks,
            grade: Grade::from_marks(marks),
        }
    }

    pub fn roll_no(&self) -> i32 {
        self.roll_no
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn course(&self) -> &str {
        &self.course
    }

    pub fn marks(&self) -> f64 {
        self.marks
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }

    pub(crate) fn set_course(&mut self, course: impl Into<String>) {
        self.course = course.into();
    }

    /// Replace the marks and recompute the grade.
    pub(crate) fn set_marks(&mut self, marks: f64) {
        self.marks = marks;
        self.grade = Grade::from_marks(marks);
    }

    /// Multi-line "Student Info" view, including marks and grade.
    pub fn details(&self) -> Details<'_> {
        Details {
            record: self,
            note: None,
        }
    }

    /// "Student Info" view with a trailing note in place of marks and grade.
    ///
    /// An empty note is omitted.
    pub fn details_with_note<'a>(&'a self, note: &'a str) -> Details<'a> {
        Details {
            record: self,
            note: Some(note),
        }
    }
}

impl fmt::Display for StudentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Roll: {} | Name: {} | Email: {} | Course: {} | Marks: {} | Grade: {}",
            self.roll_no,
            self.name,
            self.email,
            self.course,
            format_marks(self.marks),
            self.grade
        )
    }
}

/// Borrowed detail view of a [`StudentRecord`]. Ends with a blank line.
#[derive(Debug, Clone, Copy)]
pub struct Details<'a> {
    record: &'a StudentRecord,
    note: Option<&'a str>,
}

impl fmt::Display for Details<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let r = self.record;
        writeln!(f, "Student Info:")?;
        writeln!(f, "Roll No: {}", r.roll_no)?;
        writeln!(f, "Name: {}", r.name)?;
        writeln!(f, "Email: {}", r.email)?;
        writeln!(f, "Course: {}", r.course)?;
        match self.note {
            None => {
                writeln!(f, "Marks: {}", format_marks(r.marks))?;
                writeln!(f, "Grade: {}", r.grade)?;
            }
            Some(note) if !note.is_empty() => writeln!(f, "{note}")?,
            Some(_) => {}
        }
        writeln!(f)
    }
}
