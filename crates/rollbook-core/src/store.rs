//! In-memory record store keyed by roll number.

use std::collections::BTreeMap;

use crate::error::StoreError;
use crate::model::StudentRecord;

/// The two records loaded at startup unless disabled.
pub const SAMPLE_RECORDS: [(i32, &str, &str, &str, f64); 2] = [
    (101, "Ankit", "ankit@mail.com", "B.Tech", 78.5),
    (102, "Riya", "riya@mail.com", "M.Tech", 91.0),
];

/// Owns every [`StudentRecord`], one per roll number.
///
/// Backed by a `BTreeMap`, so iteration is always in ascending roll order.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: BTreeMap<i32, StudentRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a record. Rejected without mutation if the roll number is taken.
    pub fn add(&mut self, record: StudentRecord) -> Result<(), StoreError> {
        let roll = record.roll_no();
        if self.records.contains_key(&roll) {
            tracing::info!(roll, "add rejected: duplicate roll number");
            return Err(StoreError::DuplicateRollNo(roll));
        }
        self.records.insert(roll, record);
        tracing::debug!(roll, total = self.records.len(), "record added");
        Ok(())
    }

    /// Remove and return the record for `roll_no`.
    pub fn delete(&mut self, roll_no: i32) -> Result<StudentRecord, StoreError> {
        match self.records.remove(&roll_no) {
            Some(record) => {
                tracing::debug!(roll = roll_no, total = self.records.len(), "record deleted");
                Ok(record)
            }
            None => {
                tracing::info!(roll = roll_no, "delete rejected: not found");
                Err(StoreError::NotFound(roll_no))
            }
        }
    }

    /// Change course and/or marks of an existing record.
    ///
    /// An empty or absent `course` leaves the course unchanged; absent
    /// `marks` leaves marks and grade unchanged. With neither, this is a
    /// successful no-op.
    pub fn update(
        &mut self,
        roll_no: i32,
        course: Option<&str>,
        marks: Option<f64>,
    ) -> Result<(), StoreError> {
        let Some(record) = self.records.get_mut(&roll_no) else {
            tracing::info!(roll = roll_no, "update rejected: not found");
            return Err(StoreError::NotFound(roll_no));
        };

        if let Some(course) = course.filter(|c| !c.is_empty()) {
            record.set_course(course);
        }
        if let Some(marks) = marks {
            record.set_marks(marks);
        }
        tracing::debug!(
            roll = roll_no,
            course = record.course(),
            marks = record.marks(),
            grade = %record.grade(),
            "record updated"
        );
        Ok(())
    }

    pub fn search(&self, roll_no: i32) -> Option<&StudentRecord> {
        self.records.get(&roll_no)
    }

    /// All records, ascending by roll number.
    pub fn list_all(&self) -> Vec<&StudentRecord> {
        self.records.values().collect()
    }

    /// All records, descending by marks. Equal marks fall back to ascending
    /// roll number.
    pub fn list_by_marks_desc(&self) -> Vec<&StudentRecord> {
        let mut list = self.list_all();
        // list_all is already roll-ascending and sort_by is stable.
        list.sort_by(|a, b| b.marks().total_cmp(&a.marks()));
        list
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Insert [`SAMPLE_RECORDS`]. Samples whose roll number is already taken
    /// are skipped.
    pub fn load_sample_data(&mut self) {
        for (roll, name, email, course, marks) in SAMPLE_RECORDS {
            if self
                .add(StudentRecord::new(roll, name, email, course, marks))
                .is_ok()
            {
                tracing::info!(roll, "loaded sample record");
            }
        }
    }
}
