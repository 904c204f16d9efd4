//! Game session store.
//!
//! Owns the authoritative session and exposes the game commands:
//! - `start_game`, `new_game`, `reset_game`
//! - `add_round`, `update_round_scores`, `delete_round`
//!
//! The store is an ordinary value owned by whoever composes the
//! application; there is no global session.

pub mod error;
pub mod session_store;

pub use error::StoreError;
pub use session_store::SessionStore;
