//! Staged display of a finished draw.
//!
//! The draw itself is complete before any of this runs; the schedule only
//! decides when each already-chosen winner is shown.

use crate::i18n::Messages;
use luckydraw_core::{DrawResult, Participant};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealSchedule {
    drawing_delay: Duration,
    interval: Duration,
}

impl RevealSchedule {
    pub fn new(drawing_delay: Duration, interval: Duration) -> Self {
        Self {
            drawing_delay,
            interval,
        }
    }

    pub fn immediate() -> Self {
        Self::new(Duration::ZERO, Duration::ZERO)
    }

    /// Pause for the "drawing" suspense.
    pub async fn wait_drawing(&self) {
        if !self.drawing_delay.is_zero() {
            tokio::time::sleep(self.drawing_delay).await;
        }
    }

    /// Hand winners to `on_reveal` one at a time, in draw order, one interval apart.
    pub async fn reveal<F>(&self, result: &DrawResult, mut on_reveal: F)
    where
        F: FnMut(usize, &Participant),
    {
        for (index, winner) in result.iter().enumerate() {
            if !self.interval.is_zero() {
                tokio::time::sleep(self.interval).await;
            }
            on_reveal(index, winner);
        }
    }
}

/// Print the drawing status, then the winners as the schedule reveals them.
pub async fn show_draw(
    result: &DrawResult,
    schedule: &RevealSchedule,
    messages: &Messages<'_>,
) {
    println!("{}", messages.drawing_status(result.len(), result.pool_size()));
    schedule.wait_drawing().await;

    println!();
    println!("{}", messages.text("winners_title"));
    println!("{}", messages.winners_subtitle(result.len()));
    println!();

    schedule
        .reveal(result, |index, winner| {
            println!(
                "  {:>2}. {}  ({})",
                index + 1,
                winner.name,
                messages.participant_number(winner.position)
            );
        })
        .await;
}
