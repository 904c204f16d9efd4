//! Scoring engine.
//!
//! Stateless, deterministic aggregation of round histories into player
//! standings:
//! - Per-round score columns (missing entries count as 0)
//! - Totals
//! - Knockout status against the configured limit
//!
//! The session store calls into this module after every mutation. It is
//! total over well-typed input; text coercion happens upstream in
//! [`crate::entry`].

pub mod engine;

pub use engine::{
    active_players, highest_score, is_knocked_out, leaders, recompute_totals, standing_for,
};
