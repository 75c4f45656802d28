use crate::{draw_with_rng, eligible_count, participants, DrawResult, Participant, Result};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::num::NonZeroUsize;

/// The entry slots and winner count for a single draw.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawRequest {
    pub entries: Vec<String>,
    pub winner_count: NonZeroUsize,
}

impl DrawRequest {
    pub fn new<I, S>(entries: I, winner_count: NonZeroUsize) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: entries.into_iter().map(Into::into).collect(),
            winner_count,
        }
    }

    /// Non-blank entries with their slot positions, in entry order.
    pub fn participants(&self) -> Vec<Participant> {
        participants(&self.entries)
    }

    pub fn eligible_count(&self) -> usize {
        eligible_count(&self.entries)
    }

    pub fn draw(&self) -> Result<DrawResult> {
        self.draw_with_rng(&mut rand::thread_rng())
    }

    pub fn draw_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<DrawResult> {
        draw_with_rng(&self.entries, self.winner_count, rng)
    }
}
