//! Property tests for the scoring engine and round-history editing.

use im::Vector;
use proptest::prelude::*;

use rummy_scorer::core::{GameConfig, Player, PlayerId, RoundRecord, SeededIdGenerator};
use rummy_scorer::persistence::MemorySlot;
use rummy_scorer::scoring::{is_knocked_out, recompute_totals};
use rummy_scorer::store::SessionStore;

const PLAYERS: [&str; 4] = ["p0", "p1", "p2", "p3"];

fn roster() -> Vector<Player> {
    PLAYERS
        .iter()
        .map(|id| Player::new(PlayerId::new(*id), id.to_uppercase()))
        .collect()
}

/// A round with each player present or absent, scores 0..=120.
fn round_strategy() -> impl Strategy<Value = RoundRecord> {
    proptest::collection::vec(proptest::option::of(0i64..=120), PLAYERS.len()).prop_map(|cells| {
        PLAYERS
            .iter()
            .zip(cells)
            .filter_map(|(id, cell)| cell.map(|score| (*id, score)))
            .collect::<RoundRecord>()
    })
}

fn history_strategy() -> impl Strategy<Value = Vector<RoundRecord>> {
    proptest::collection::vec(round_strategy(), 0..12).prop_map(Vector::from)
}

proptest! {
    #[test]
    fn prop_knockout_is_strict_comparison(total in -1000i64..1000, limit in -1000i64..1000) {
        prop_assert_eq!(is_knocked_out(total, limit), total > limit);
        prop_assert!(!is_knocked_out(limit, limit));
    }

    #[test]
    fn prop_total_is_column_sum(history in history_strategy(), limit in 1i64..400) {
        let players = recompute_totals(&roster(), &history, limit);

        for player in players.iter() {
            let expected: i64 = history.iter().map(|r| r.score_for(player.id())).sum();
            prop_assert_eq!(player.total_score(), expected);
            prop_assert_eq!(player.scores().len(), history.len());
            for (i, round) in history.iter().enumerate() {
                prop_assert_eq!(player.scores()[i], round.score_for(player.id()));
            }
            prop_assert_eq!(player.is_knocked_out(), expected > limit);
        }
    }

    #[test]
    fn prop_recompute_is_idempotent(history in history_strategy(), limit in 1i64..400) {
        let once = recompute_totals(&roster(), &history, limit);
        let twice = recompute_totals(&once, &history, limit);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn prop_recompute_independent_of_roster_order(
        history in history_strategy(),
        limit in 1i64..400,
    ) {
        let forward = recompute_totals(&roster(), &history, limit);
        let reversed_roster: Vector<Player> = roster().iter().rev().cloned().collect();
        let reversed = recompute_totals(&reversed_roster, &history, limit);

        for player in forward.iter() {
            let other = reversed.iter().find(|p| p.id() == player.id()).unwrap();
            prop_assert_eq!(player, other);
        }
    }

    #[test]
    fn prop_delete_shifts_columns(
        rounds in proptest::collection::vec(round_strategy(), 1..10),
        pick in any::<prop::sample::Index>(),
    ) {
        let mut store = SessionStore::open(MemorySlot::new(), SeededIdGenerator::new(11));
        store.start_game(PLAYERS, GameConfig::new(10_000)).unwrap();
        let ids: Vec<PlayerId> = store.session().players().iter().map(|p| p.id().clone()).collect();

        // Re-key generated rounds onto the store's ids
        for round in &rounds {
            let keyed: RoundRecord = PLAYERS
                .iter()
                .zip(&ids)
                .filter(|(name, _)| round.contains(&PlayerId::new(**name)))
                .map(|(name, id)| (id.clone(), round.score_for(&PlayerId::new(*name))))
                .collect();
            store.add_round(keyed).unwrap();
        }

        let before = store.snapshot();
        let index = pick.index(rounds.len());
        store.delete_round(index).unwrap();
        let after = store.session();

        prop_assert_eq!(after.round_count(), before.round_count() - 1);
        for (old, new) in before.players().iter().zip(after.players().iter()) {
            let mut expected = old.scores().to_vec();
            expected.remove(index);
            prop_assert_eq!(new.scores(), expected.as_slice());
        }
    }

    #[test]
    fn prop_edit_preserves_other_entries(
        first in 0i64..200,
        second in 0i64..200,
        patched in 0i64..200,
    ) {
        let mut store = SessionStore::open(MemorySlot::new(), SeededIdGenerator::new(5));
        store.start_game(["A", "B"], GameConfig::default()).unwrap();
        let ids: Vec<PlayerId> = store.session().players().iter().map(|p| p.id().clone()).collect();
        store
            .add_round(
                RoundRecord::new()
                    .with_score(ids[0].clone(), first)
                    .with_score(ids[1].clone(), second),
            )
            .unwrap();

        store
            .update_round_scores(0, RoundRecord::new().with_score(ids[0].clone(), patched))
            .unwrap();

        let round = store.session().round(0).unwrap();
        prop_assert_eq!(round.score_for(&ids[0]), patched);
        prop_assert_eq!(round.score_for(&ids[1]), second);
    }
}
