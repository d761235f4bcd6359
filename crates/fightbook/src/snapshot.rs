//! Roster snapshot persistence for fightbook.
//!
//! This module serializes the whole roster to a single JSON file and
//! loads it back. The on-disk format is a versioned envelope so that
//! a corrupt or incompatible file is rejected deterministically
//! instead of producing a partially populated roster.
//!
//! Writes are synchronous whole-file I/O with no atomic rename; a
//! crash mid-write can leave a corrupt file, which a later load will
//! reject.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::error::{Error, Result};
use crate::fighter::Fighter;
use crate::roster::Roster;

/// The current snapshot schema version.
pub const SNAPSHOT_VERSION: u32 = 1;

/// The on-disk envelope around the roster.
#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    /// Schema version of this snapshot.
    version: u32,
    /// When the snapshot was written.
    saved_at: DateTime<Utc>,
    /// All fighters, in their pre-save order.
    fighters: Vec<Fighter>,
}

/// Just the version field, for checking compatibility before
/// committing to a full parse.
#[derive(Debug, Deserialize)]
struct SnapshotHeader {
    version: u32,
}

/// Write the roster to the given path, replacing any existing file.
///
/// Creates parent directories as needed.
///
/// # Errors
///
/// Returns an error if the directories cannot be created, the roster
/// cannot be serialized, or the file cannot be written. The roster
/// itself is never modified.
pub fn save(roster: &Roster, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                path: parent.to_path_buf(),
                source,
            })?;
        }
    }

    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        saved_at: Utc::now(),
        fighters: roster.fighters().to_vec(),
    };

    let json = serde_json::to_string_pretty(&snapshot)?;
    std::fs::write(path, json).map_err(|source| Error::SnapshotWrite {
        path: path.to_path_buf(),
        source,
    })?;

    info!(
        "Saved {} fighters to snapshot at {}",
        snapshot.fighters.len(),
        path.display()
    );
    Ok(())
}

/// Load a roster from the snapshot at the given path.
///
/// Loading is all-or-nothing: on any failure no roster is produced,
/// so the caller's live roster stays untouched.
///
/// # Errors
///
/// Returns [`Error::SnapshotRead`] if the file is missing or
/// unreadable, [`Error::SnapshotParse`] if it is not a valid roster
/// snapshot, and [`Error::SnapshotVersion`] if it carries a schema
/// version this build does not support.
pub fn load(path: impl AsRef<Path>) -> Result<Roster> {
    let path = path.as_ref();

    debug!("Loading snapshot from {}", path.display());
    let json = std::fs::read_to_string(path).map_err(|source| Error::SnapshotRead {
        path: path.to_path_buf(),
        source,
    })?;

    // Check the version before parsing fighters, so an incompatible
    // file fails with a version error rather than a field mismatch.
    let header: SnapshotHeader = parse(&json, path)?;
    if header.version != SNAPSHOT_VERSION {
        return Err(Error::SnapshotVersion {
            path: path.to_path_buf(),
            found: header.version,
            expected: SNAPSHOT_VERSION,
        });
    }

    let snapshot: Snapshot = parse(&json, path)?;
    info!(
        "Loaded {} fighters from snapshot at {}",
        snapshot.fighters.len(),
        path.display()
    );
    Ok(Roster::from_fighters(snapshot.fighters))
}

fn parse<'a, T: Deserialize<'a>>(json: &'a str, path: &Path) -> Result<T> {
    serde_json::from_str(json).map_err(|source| Error::SnapshotParse {
        path: path.to_path_buf(),
        source,
    })
}

/// Load a roster from the given path, or return an empty roster when
/// the file does not exist yet.
///
/// This is the working-roster convention for hosts that persist the
/// roster between invocations: a missing snapshot means "nothing
/// tracked yet", while an unreadable or invalid one is still an error.
///
/// # Errors
///
/// Same as [`load`], except that a missing file is not an error.
pub fn load_or_default(path: impl AsRef<Path>) -> Result<Roster> {
    let path = path.as_ref();
    if path.exists() {
        load(path)
    } else {
        debug!("No snapshot at {}, starting empty", path.display());
        Ok(Roster::new())
    }
}

/// The default snapshot file name under the data directory.
pub const DEFAULT_SNAPSHOT_FILE: &str = "roster.json";

/// Resolve the default snapshot path under the platform data
/// directory.
#[must_use]
pub fn default_snapshot_path() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from(".local/share"))
        .join("fightbook")
        .join(DEFAULT_SNAPSHOT_FILE)
}
