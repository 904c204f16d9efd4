//! Session persistence.
//!
//! The session store writes a JSON snapshot of the whole session to a
//! [`SnapshotSlot`] after every successful command and reads it back when
//! opened. Persistence failures never surface to callers of the store: the
//! in-memory session stays authoritative and the next successful write
//! brings the slot up to date.

pub mod slot;
pub mod snapshot;

use thiserror::Error;

pub use slot::{FileSlot, MemorySlot, SnapshotSlot};
pub use snapshot::{
    decode_session, encode_session, load_session, save_session, DEFAULT_STORAGE_KEY,
};

/// Failure reading or writing a snapshot.
#[derive(Debug, Error)]
pub enum PersistError {
    #[error("snapshot I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("snapshot encoding failed: {0}")]
    Json(#[from] serde_json::Error),
}
