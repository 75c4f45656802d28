use chrono::{DateTime, Utc};
use luckydraw_core::{DrawRequest, DrawResult, Participant};
use serde::Serialize;
use sha2::{Digest, Sha256};

/// Machine-readable summary of one draw.
#[derive(Debug, Clone, Serialize)]
pub struct DrawReport {
    pub drawn_at: DateTime<Utc>,
    pub requested: usize,
    pub pool_size: usize,
    pub winners: Vec<Participant>,
    pub entries_digest: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl DrawReport {
    pub fn new(request: &DrawRequest, result: &DrawResult, seed: Option<u64>) -> Self {
        Self {
            drawn_at: Utc::now(),
            requested: request.winner_count.get(),
            pool_size: result.pool_size(),
            winners: result.winners().to_vec(),
            entries_digest: entries_digest(&request.participants()),
            seed,
        }
    }
}

/// Hex SHA-256 over the participant list, one `position<TAB>name` line each.
pub fn entries_digest(participants: &[Participant]) -> String {
    let mut hasher = Sha256::new();
    for participant in participants {
        hasher.update(participant.position.to_string().as_bytes());
        hasher.update(b"\t");
        hasher.update(participant.name.as_bytes());
        hasher.update(b"\n");
    }
    hex::encode(hasher.finalize())
}
