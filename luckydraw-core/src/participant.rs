use serde::{Deserialize, Serialize};
use std::fmt;

/// A non-blank entry and the slot it was entered in.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Participant {
    pub name: String,
    /// 1-based, counted over all slots including blank ones.
    pub position: usize,
}

impl Participant {
    pub fn new(name: impl Into<String>, position: usize) -> Self {
        Self {
            name: name.into(),
            position,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> usize {
        self.position
    }
}

impl fmt::Display for Participant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (#{})", self.name, self.position)
    }
}

/// Trim every entry, drop the blank ones, and number the rest by their
/// original slot. Output keeps entry order.
pub fn participants<S: AsRef<str>>(entries: &[S]) -> Vec<Participant> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let name = entry.as_ref().trim();
            (!name.is_empty()).then(|| Participant::new(name, index + 1))
        })
        .collect()
}

/// How many entries are not blank, i.e. the size of the draw pool.
pub fn eligible_count<S: AsRef<str>>(entries: &[S]) -> usize {
    entries
        .iter()
        .filter(|entry| !entry.as_ref().trim().is_empty())
        .count()
}
