use thiserror::Error;

pub type Result<T> = std::result::Result<T, DrawError>;

/// Input problems found before any randomness is used.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawError {
    #[error("No participants: every entry is blank")]
    NoParticipants,

    #[error("Cannot draw {requested} winners from {available} participants")]
    InsufficientParticipants { requested: usize, available: usize },
}

impl DrawError {
    pub fn insufficient(requested: usize, available: usize) -> Self {
        Self::InsufficientParticipants {
            requested,
            available,
        }
    }
}
