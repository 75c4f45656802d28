//! Lucky draw core
//!
//! Picks an unbiased random subset of winners from a list of named entries.
//! Blank entries are skipped, and every winner keeps the 1-based slot
//! position it was entered at so the UI can show where it came from.

pub mod engine;
pub mod error;
pub mod participant;
pub mod request;

pub use engine::{draw, draw_with_rng, shuffle, DrawResult};
pub use error::{DrawError, Result};
pub use participant::{eligible_count, participants, Participant};
pub use request::DrawRequest;

pub use std::num::NonZeroUsize;
