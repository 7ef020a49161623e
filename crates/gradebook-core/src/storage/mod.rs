//! Flat-file storage
//!
//! - `codec`: line-level parse/format for the semicolon-delimited format
//! - `persistence`: load/save between the roster and the data file
//! - `error`: typed storage errors

mod codec;
mod error;
mod persistence;

pub use codec::{decode, encode, Decoded, FILE_HEADER};
pub use error::{StorageError, StorageResult};
pub use persistence::{load, save, LoadOutcome};
