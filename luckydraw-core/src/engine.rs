use crate::{participants, DrawError, Participant, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// Winners of one draw, in the order they were picked.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawResult {
    winners: Vec<Participant>,
    pool_size: usize,
}

impl DrawResult {
    pub fn winners(&self) -> &[Participant] {
        &self.winners
    }

    pub fn len(&self) -> usize {
        self.winners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.winners.is_empty()
    }

    /// Number of non-blank entries the winners were drawn from.
    pub fn pool_size(&self) -> usize {
        self.pool_size
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Participant> {
        self.winners.iter()
    }

    pub fn into_winners(self) -> Vec<Participant> {
        self.winners
    }
}

impl<'a> IntoIterator for &'a DrawResult {
    type Item = &'a Participant;
    type IntoIter = std::slice::Iter<'a, Participant>;

    fn into_iter(self) -> Self::IntoIter {
        self.winners.iter()
    }
}

/// Fisher-Yates, walking backward: swap each slot `i` with a uniform `j` in `[0, i]`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    for i in (1..items.len()).rev() {
        let j = rng.gen_range(0..=i);
        items.swap(i, j);
    }
}

/// Draw winners using the thread-local generator.
pub fn draw<S: AsRef<str>>(entries: &[S], winner_count: NonZeroUsize) -> Result<DrawResult> {
    draw_with_rng(entries, winner_count, &mut rand::thread_rng())
}

/// Draw winners using the given random source.
///
/// Both error cases are checked before `rng` is touched, so a rejected draw
/// consumes no randomness.
pub fn draw_with_rng<S, R>(
    entries: &[S],
    winner_count: NonZeroUsize,
    rng: &mut R,
) -> Result<DrawResult>
where
    S: AsRef<str>,
    R: Rng + ?Sized,
{
    let mut pool = participants(entries);
    let requested = winner_count.get();

    if pool.is_empty() {
        tracing::debug!("Draw rejected: {} entries, none filled in", entries.len());
        return Err(DrawError::NoParticipants);
    }

    if requested > pool.len() {
        tracing::debug!(
            "Draw rejected: {} winners requested from {} participants",
            requested,
            pool.len()
        );
        return Err(DrawError::insufficient(requested, pool.len()));
    }

    let pool_size = pool.len();
    shuffle(&mut pool, rng);
    pool.truncate(requested);

    tracing::debug!("Drew {} of {} participants", requested, pool_size);

    Ok(DrawResult {
        winners: pool,
        pool_size,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{RngCore, SeedableRng};
    use std::collections::{HashMap, HashSet};

    /// Fails the test if anything asks it for a number.
    struct UntouchedRng;

    impl RngCore for UntouchedRng {
        fn next_u32(&mut self) -> u32 {
            panic!("random source used")
        }

        fn next_u64(&mut self) -> u64 {
            panic!("random source used")
        }

        fn fill_bytes(&mut self, _dest: &mut [u8]) {
            panic!("random source used")
        }

        fn try_fill_bytes(&mut self, _dest: &mut [u8]) -> std::result::Result<(), rand::Error> {
            panic!("random source used")
        }
    }

    fn count(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).unwrap()
    }

    fn seeded() -> StdRng {
        StdRng::seed_from_u64(0x5eed)
    }

    fn ten_names() -> Vec<String> {
        (1..=10).map(|i| format!("P{}", i)).collect()
    }

    #[test]
    fn test_two_of_three() {
        let entries = ["Ann", "Bob", "Cara"];
        let result = draw_with_rng(&entries, count(2), &mut seeded()).unwrap();

        assert_eq!(result.len(), 2);
        assert_eq!(result.pool_size(), 3);
        assert_ne!(result.winners()[0].position, result.winners()[1].position);
        for winner in &result {
            assert_eq!(winner.name, entries[winner.position - 1]);
        }
    }

    #[test]
    fn test_blank_entries_are_skipped() {
        let entries = ["Ann", "", "  ", "Bob"];
        for _ in 0..50 {
            let result = draw(&entries, count(1)).unwrap();
            let winner = &result.winners()[0];
            assert!(
                *winner == Participant::new("Ann", 1) || *winner == Participant::new("Bob", 4),
                "unexpected winner {:?}",
                winner
            );
            assert_eq!(result.pool_size(), 2);
        }
    }

    #[test]
    fn test_no_participants() {
        let empty: [&str; 0] = [];
        assert_eq!(
            draw_with_rng(&empty, count(1), &mut UntouchedRng),
            Err(DrawError::NoParticipants)
        );
        assert_eq!(
            draw_with_rng(&["", "  "], count(3), &mut UntouchedRng),
            Err(DrawError::NoParticipants)
        );
    }

    #[test]
    fn test_insufficient_participants_uses_no_randomness() {
        assert_eq!(
            draw_with_rng(&["Ann"], count(2), &mut UntouchedRng),
            Err(DrawError::InsufficientParticipants {
                requested: 2,
                available: 1
            })
        );
        assert_eq!(
            draw_with_rng(&["Ann", " ", "Bob"], count(3), &mut UntouchedRng),
            Err(DrawError::insufficient(3, 2))
        );
    }

    #[test]
    fn test_single_participant_needs_no_randomness() {
        let result = draw_with_rng(&["", " Zoe "], count(1), &mut UntouchedRng).unwrap();
        assert_eq!(result.into_winners(), vec![Participant::new("Zoe", 2)]);
    }

    #[test]
    fn test_full_draw_is_a_permutation() {
        let entries = ["Ann", "Bob", "Cara"];
        let result = draw_with_rng(&entries, count(3), &mut seeded()).unwrap();

        let mut positions: Vec<usize> = result.iter().map(|p| p.position).collect();
        positions.sort_unstable();
        assert_eq!(positions, vec![1, 2, 3]);
    }

    #[test]
    fn test_winners_are_distinct_and_match_entries() {
        let mut entries = ten_names();
        entries[3] = "   ".to_string();
        entries[7] = String::new();
        let mut rng = seeded();

        for k in 1..=8 {
            let result = draw_with_rng(&entries, count(k), &mut rng).unwrap();
            assert_eq!(result.len(), k);

            let positions: HashSet<usize> = result.iter().map(|p| p.position).collect();
            assert_eq!(positions.len(), k);
            for winner in &result {
                assert_eq!(winner.name, entries[winner.position - 1].trim());
                assert!(!winner.name.is_empty());
            }
        }
    }

    #[test]
    fn test_same_seed_same_result() {
        let entries = ten_names();
        let first = draw_with_rng(&entries, count(4), &mut StdRng::seed_from_u64(99)).unwrap();
        let second = draw_with_rng(&entries, count(4), &mut StdRng::seed_from_u64(99)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_repeated_draws_vary() {
        let entries = ten_names();
        let mut rng = seeded();
        let first = draw_with_rng(&entries, count(3), &mut rng).unwrap();

        let varied = (0..50)
            .map(|_| draw_with_rng(&entries, count(3), &mut rng).unwrap())
            .any(|result| result != first);
        assert!(varied);
    }

    #[test]
    fn test_selection_frequency_is_uniform() {
        const TRIALS: usize = 30_000;
        let entries = ten_names();
        let mut rng = seeded();
        let mut hits: HashMap<usize, usize> = HashMap::new();

        for _ in 0..TRIALS {
            let result = draw_with_rng(&entries, count(3), &mut rng).unwrap();
            for winner in &result {
                *hits.entry(winner.position).or_default() += 1;
            }
        }

        // each participant should win 3/10 of the time
        let expected = TRIALS * 3 / 10;
        let tolerance = expected / 20;
        for position in 1..=10 {
            let observed = hits.get(&position).copied().unwrap_or(0);
            assert!(
                observed.abs_diff(expected) < tolerance,
                "participant {} won {} times, expected about {}",
                position,
                observed,
                expected
            );
        }
    }

    #[test]
    fn test_every_ordering_is_equally_likely() {
        const TRIALS: usize = 60_000;
        let mut rng = seeded();
        let mut seen: HashMap<[u8; 3], usize> = HashMap::new();

        for _ in 0..TRIALS {
            let mut items = [1u8, 2, 3];
            shuffle(&mut items, &mut rng);
            *seen.entry(items).or_default() += 1;
        }

        assert_eq!(seen.len(), 6);

        // chi-square with 5 degrees of freedom; 20.5 is the 0.001 critical value
        let expected = TRIALS as f64 / 6.0;
        let chi_square: f64 = seen
            .values()
            .map(|&observed| {
                let diff = observed as f64 - expected;
                diff * diff / expected
            })
            .sum();
        assert!(chi_square < 20.5, "chi-square too high: {}", chi_square);
    }

    #[test]
    fn test_shuffle_small_slices() {
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut UntouchedRng);

        let mut one = [7];
        shuffle(&mut one, &mut UntouchedRng);
        assert_eq!(one, [7]);
    }

    #[test]
    fn test_result_serializes() {
        let result = draw_with_rng(&["Ann"], count(1), &mut UntouchedRng).unwrap();
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["pool_size"], 1);
        assert_eq!(json["winners"][0]["name"], "Ann");
        assert_eq!(json["winners"][0]["position"], 1);
    }
}
