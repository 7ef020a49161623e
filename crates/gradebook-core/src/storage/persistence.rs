//! Load/save between the roster and the data file
//!
//! File access is a single scoped read on load and a single scoped write on
//! save. There is no temp-file-then-rename step; a crash mid-save can
//! truncate the file, which is accepted for this format.

use std::io;
use std::path::Path;

use tracing::{debug, info};

use crate::roster::Roster;
use crate::storage::codec;
use crate::storage::error::{StorageError, StorageResult};

/// Result of loading the data file
#[derive(Debug)]
pub struct LoadOutcome {
    /// Roster hydrated from the file, with the next-id counter derived from
    /// the highest loaded id
    pub roster: Roster,
    /// Count of malformed data lines that were skipped
    pub skipped: usize,
}

/// Load the roster from the data file
///
/// A missing file is not an error: the roster starts empty.
pub fn load(path: &Path) -> StorageResult<LoadOutcome> {
    let text = match std::fs::read_to_string(path) {
        Ok(text) => text,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            debug!(path = %path.display(), "no data file, starting empty");
            return Ok(LoadOutcome {
                roster: Roster::new(),
                skipped: 0,
            });
        }
        Err(e) => return Err(StorageError::read(e, path.to_path_buf())),
    };

    let decoded = codec::decode(&text);
    info!(
        path = %path.display(),
        loaded = decoded.students.len(),
        skipped = decoded.skipped,
        "loaded roster"
    );
    Ok(LoadOutcome {
        roster: Roster::from_students(decoded.students),
        skipped: decoded.skipped,
    })
}

/// Save the roster to the data file, in store order
pub fn save(path: &Path, roster: &Roster) -> StorageResult<()> {
    let text = codec::encode(roster.students());
    std::fs::write(path, text).map_err(|e| StorageError::write(e, path.to_path_buf()))?;
    info!(path = %path.display(), records = roster.len(), "saved roster");
    Ok(())
}
