//! Score aggregation.
//!
//! Pure functions over a roster and a round history. Nothing here mutates
//! its input; recomputation always builds new players.

use im::Vector;

use crate::core::{Player, PlayerId, RoundRecord, Score, ScoreColumn, Standing};

/// Whether a total knocks a player out.
///
/// Strict: a total equal to the limit is still in the game.
///
/// ```
/// use rummy_scorer::scoring::is_knocked_out;
///
/// assert!(!is_knocked_out(201, 201));
/// assert!(is_knocked_out(202, 201));
/// ```
#[must_use]
pub fn is_knocked_out(total_score: Score, limit: Score) -> bool {
    total_score > limit
}

/// Derive one player's standing from the history.
///
/// `scores[i]` is round `i`'s entry for the player, or 0 if absent.
#[must_use]
pub fn standing_for(
    player: &PlayerId,
    round_history: &Vector<RoundRecord>,
    limit: Score,
) -> Standing {
    let scores: ScoreColumn = round_history
        .iter()
        .map(|round| round.score_for(player))
        .collect();
    let total_score = scores.iter().fold(0, |sum: Score, &s| sum.saturating_add(s));

    Standing::new(scores, total_score, is_knocked_out(total_score, limit))
}

/// Re-derive every player's standing from the history.
///
/// Player order and identity are preserved. Each player's result depends
/// only on their own column, so the output does not depend on roster order;
/// round order does matter because it fixes the `scores` alignment.
#[must_use]
pub fn recompute_totals(
    players: &Vector<Player>,
    round_history: &Vector<RoundRecord>,
    limit: Score,
) -> Vector<Player> {
    players
        .iter()
        .map(|player| player.with_standing(standing_for(player.id(), round_history, limit)))
        .collect()
}

/// Highest total on the table, never below 0.
#[must_use]
pub fn highest_score<'a>(players: impl IntoIterator<Item = &'a Player>) -> Score {
    players
        .into_iter()
        .map(Player::total_score)
        .fold(0, Score::max)
}

/// Players holding the highest total. Empty while nobody has scored.
pub fn leaders(players: &Vector<Player>) -> Vec<&Player> {
    let highest = highest_score(players);
    if highest <= 0 {
        return Vec::new();
    }
    players
        .iter()
        .filter(|p| p.total_score() == highest)
        .collect()
}

/// Players not yet knocked out, in roster order.
pub fn active_players(players: &Vector<Player>) -> impl Iterator<Item = &Player> {
    players.iter().filter(|p| !p.is_knocked_out())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(ids: &[&str]) -> Vector<Player> {
        ids.iter()
            .map(|id| Player::new(PlayerId::new(*id), id.to_uppercase()))
            .collect()
    }

    fn round(entries: &[(&str, Score)]) -> RoundRecord {
        entries.iter().copied().collect()
    }

    #[test]
    fn test_knockout_is_strict() {
        assert!(!is_knocked_out(0, 201));
        assert!(!is_knocked_out(201, 201));
        assert!(is_knocked_out(202, 201));
        assert!(is_knocked_out(-1, -2));
    }

    #[test]
    fn test_standing_with_no_rounds() {
        let standing = standing_for(&PlayerId::new("a"), &Vector::new(), 201);

        assert!(standing.scores().is_empty());
        assert_eq!(standing.total_score(), 0);
        assert!(!standing.is_knocked_out());
    }

    #[test]
    fn test_missing_entries_count_as_zero() {
        let history = im::vector![round(&[("a", 10)]), round(&[("b", 4)]), round(&[("a", 7)])];

        let standing = standing_for(&PlayerId::new("a"), &history, 201);
        assert_eq!(standing.scores(), &[10, 0, 7]);
        assert_eq!(standing.total_score(), 17);
    }

    #[test]
    fn test_recompute_preserves_order_and_identity() {
        let players = roster(&["a", "b", "c"]);
        let history = im::vector![round(&[("a", 60), ("b", 20), ("c", 51)])];

        let updated = recompute_totals(&players, &history, 50);

        let ids: Vec<_> = updated.iter().map(|p| p.id().as_str()).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
        assert_eq!(updated[0].name(), "A");
        assert!(updated[0].is_knocked_out());
        assert!(!updated[1].is_knocked_out());
        assert!(updated[2].is_knocked_out());

        // Input untouched
        assert_eq!(players[0].total_score(), 0);
    }

    #[test]
    fn test_recompute_is_idempotent() {
        let players = roster(&["a", "b"]);
        let history = im::vector![round(&[("a", 3), ("b", 9)]), round(&[("a", 12)])];

        let once = recompute_totals(&players, &history, 10);
        let twice = recompute_totals(&once, &history, 10);
        assert_eq!(once, twice);
    }

    #[test]
    fn test_total_saturates() {
        let history = im::vector![round(&[("a", Score::MAX)]), round(&[("a", 1)])];
        let standing = standing_for(&PlayerId::new("a"), &history, 201);
        assert_eq!(standing.total_score(), Score::MAX);
    }

    #[test]
    fn test_highest_and_leaders() {
        let players = roster(&["a", "b", "c"]);
        assert_eq!(highest_score(&players), 0);
        assert!(leaders(&players).is_empty());

        let history = im::vector![round(&[("a", 30), ("b", 45), ("c", 45)])];
        let scored = recompute_totals(&players, &history, 201);

        assert_eq!(highest_score(&scored), 45);
        let leader_ids: Vec<_> = leaders(&scored).into_iter().map(|p| p.id().as_str()).collect();
        assert_eq!(leader_ids, vec!["b", "c"]);
    }

    #[test]
    fn test_active_players_skip_knocked_out() {
        let players = roster(&["a", "b"]);
        let history = im::vector![round(&[("a", 100)])];
        let scored = recompute_totals(&players, &history, 50);

        let active: Vec<_> = active_players(&scored).map(|p| p.id().as_str()).collect();
        assert_eq!(active, vec!["b"]);
    }
}
