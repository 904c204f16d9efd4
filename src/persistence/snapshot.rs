//! JSON snapshots of a game session.
//!
//! Loading never fails: a missing, unreadable or malformed payload yields
//! the default session, as does one carrying an invalid config. A snapshot
//! whose derived fields disagree with its round history is re-derived
//! before use.

use tracing::{debug, warn};

use super::{PersistError, SnapshotSlot};
use crate::core::GameSession;

/// Key the session is stored under unless the caller picks another.
pub const DEFAULT_STORAGE_KEY: &str = "rummy_scorer_state_v1";

/// Parse a snapshot payload.
pub fn decode_session(payload: &str) -> Result<GameSession, PersistError> {
    Ok(serde_json::from_str(payload)?)
}

/// Serialize a session to its snapshot payload.
pub fn encode_session(session: &GameSession) -> Result<String, PersistError> {
    Ok(serde_json::to_string(session)?)
}

/// Load the session stored under `key`, falling back to the default.
pub fn load_session<S: SnapshotSlot + ?Sized>(slot: &S, key: &str) -> GameSession {
    let payload = match slot.read(key) {
        Ok(Some(payload)) => payload,
        Ok(None) => {
            debug!(key, "no saved session, starting fresh");
            return GameSession::default();
        }
        Err(error) => {
            warn!(key, %error, "failed to read saved session");
            return GameSession::default();
        }
    };

    let session = match decode_session(&payload) {
        Ok(session) => session,
        Err(error) => {
            warn!(key, %error, "discarding malformed saved session");
            return GameSession::default();
        }
    };

    if let Err(error) = session.config().validate() {
        warn!(key, %error, "discarding saved session with invalid config");
        return GameSession::default();
    }

    if session.is_consistent() {
        debug!(key, rounds = session.round_count(), "loaded saved session");
        session
    } else {
        warn!(key, "saved session derived fields out of date, re-deriving");
        session.rederived()
    }
}

/// Write `session` under `key`.
pub fn save_session<S: SnapshotSlot + ?Sized>(
    slot: &mut S,
    key: &str,
    session: &GameSession,
) -> Result<(), PersistError> {
    let payload = encode_session(session)?;
    slot.write(key, &payload)
}
