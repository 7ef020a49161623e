//! The record store
//!
//! The `Roster` holds the in-memory list of students in insertion order,
//! together with the id-assignment counter. It is an explicitly constructed
//! value owned by the application shell; any display sorting is a
//! presentation-layer concern computed on read and never mutates the order
//! kept here.

use thiserror::Error;
use tracing::debug;

use crate::models::Student;

/// Errors from roster operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    /// No student with the given id exists
    #[error("Selected student not found.")]
    NotFound { id: u32 },
}

/// In-memory student roster with monotonic id assignment
///
/// Ids are never reused: the counter only moves forward, even after deletes.
#[derive(Debug, Default)]
pub struct Roster {
    students: Vec<Student>,
    next_id: u32,
}

impl Roster {
    /// Create an empty roster; the first assigned id will be 1
    pub fn new() -> Self {
        Self {
            students: Vec::new(),
            next_id: 1,
        }
    }

    /// Hydrate a roster from previously persisted records
    ///
    /// The next id is derived from the loaded records:
    /// `max(1, max loaded id + 1)`.
    pub fn from_students(students: Vec<Student>) -> Self {
        let max_id = students.iter().map(|s| s.id).max().unwrap_or(0);
        Self {
            students,
            // The file can carry any u32 id; never wrap the counter
            next_id: max_id.saturating_add(1),
        }
    }

    /// Add a student, returning the freshly assigned id
    ///
    /// Inputs are pre-validated; this never fails.
    pub fn add(&mut self, name: impl Into<String>, email: impl Into<String>, gpa: f64) -> u32 {
        let id = self.next_id;
        self.next_id = self.next_id.saturating_add(1);
        self.students.push(Student::new(id, name, email, gpa));
        debug!(id, "added student");
        id
    }

    /// Replace the mutable fields of an existing student in place
    ///
    /// The id itself is never changed. Returns `NotFound` if no student with
    /// the given id exists; the roster is left unchanged in that case.
    pub fn update(
        &mut self,
        id: u32,
        name: impl Into<String>,
        email: impl Into<String>,
        gpa: f64,
    ) -> Result<(), RosterError> {
        let student = self
            .students
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(RosterError::NotFound { id })?;
        student.name = name.into();
        student.email = email.into();
        student.gpa = gpa;
        debug!(id, "updated student");
        Ok(())
    }

    /// Remove a student by id, returning the removed record
    pub fn remove(&mut self, id: u32) -> Result<Student, RosterError> {
        let pos = self
            .students
            .iter()
            .position(|s| s.id == id)
            .ok_or(RosterError::NotFound { id })?;
        let student = self.students.remove(pos);
        debug!(id, "removed student");
        Ok(student)
    }

    /// Look up a student by id
    pub fn get(&self, id: u32) -> Option<&Student> {
        self.students.iter().find(|s| s.id == id)
    }

    /// All students in insertion order
    pub fn students(&self) -> &[Student] {
        &self.students
    }

    /// Number of students
    pub fn len(&self) -> usize {
        self.students.len()
    }

    /// Whether the roster is empty
    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    /// The id the next `add` will assign
    pub fn next_id(&self) -> u32 {
        self.next_id
    }
}
