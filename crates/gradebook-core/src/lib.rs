//! Gradebook Core Library
//!
//! This crate provides the core functionality for Gradebook, a single-user
//! student roster manager persisted to a flat semicolon-delimited text file.
//!
//! # Architecture
//!
//! - **Roster**: insertion-ordered in-memory record store with monotonic id
//!   assignment
//! - **Validator**: pure function turning raw form text into validated
//!   record fields or a rejection reason
//! - **Storage**: line-oriented codec plus load/save against the data file
//!
//! The roster is hydrated from the data file at startup and flushed back at
//! shutdown; there is no autosave on mutation.
//!
//! # Quick Start
//!
//! ```text
//! let outcome = storage::load(&config.data_file)?;
//! let mut roster = outcome.roster;
//!
//! let draft = validate("Ada", "ada@example.com", "9.5")?;
//! let id = roster.add(draft.name, draft.email, draft.gpa);
//!
//! storage::save(&config.data_file, &roster)?;
//! ```
//!
//! # Modules
//!
//! - `roster`: the record store (main entry point)
//! - `models`: data structures for students
//! - `validate`: form validation
//! - `storage`: flat-file codec and persistence
//! - `config`: application configuration

pub mod config;
pub mod models;
pub mod roster;
pub mod storage;
pub mod validate;

pub use config::Config;
pub use models::{Student, StudentDraft};
pub use roster::{Roster, RosterError};
pub use storage::{LoadOutcome, StorageError};
pub use validate::{validate, ValidationError};
