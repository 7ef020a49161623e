//! Data models for Gradebook
//!
//! Defines the core data structures: Student and StudentDraft.

use serde::{Deserialize, Serialize};

/// A student record
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Student {
    /// Unique identifier, assigned by the roster and immutable afterwards
    pub id: u32,
    /// Display name
    pub name: String,
    /// Email address
    pub email: String,
    /// Grade point average, 0.0 to 10.0
    pub gpa: f64,
}

impl Student {
    /// Create a student with a specific ID (for loading from storage)
    pub fn new(id: u32, name: impl Into<String>, email: impl Into<String>, gpa: f64) -> Self {
        Self {
            id,
            name: name.into(),
            email: email.into(),
            gpa,
        }
    }
}

/// Validated form fields without an id
///
/// Produced by [`crate::validate::validate`]; the roster assigns the id on
/// add, or leaves it unchanged on update.
#[derive(Debug, Clone, PartialEq)]
pub struct StudentDraft {
    /// Display name (trimmed, non-empty)
    pub name: String,
    /// Email address (trimmed, contains one '@' not at either end)
    pub email: String,
    /// Grade point average in [0, 10]
    pub gpa: f64,
}
