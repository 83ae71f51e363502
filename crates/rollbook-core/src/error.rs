//! Record store error types.
//!
//! These errors represent rejected store operations. The shell prefixes
//! them with the failed action (e.g. "Add failed: ...") before printing.

use thiserror::Error;

/// Errors returned by [`RecordStore`](crate::store::RecordStore) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// A record with this roll number is already stored.
    #[error("Duplicate roll number {0}")]
    DuplicateRollNo(i32),

    /// No record with this roll number exists.
    #[error("roll number {0} not found.")]
    NotFound(i32),
}

impl StoreError {
    /// The roll number the failed operation referred to.
    pub fn roll_no(&self) -> i32 {
        match self {
            StoreError::DuplicateRollNo(roll) | StoreError::NotFound(roll) => *roll,
        }
    }
}
