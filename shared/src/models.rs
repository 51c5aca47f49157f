use serde::{Serialize, Deserialize};
use time::OffsetDateTime;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Poll {
    pub id: Uuid,
    pub title: String,
    pub options: Vec<PollOption>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PollOption {
    pub id: Uuid,
    pub name: String,
    pub votes: u64,
}

/// Create-poll input after shape checks: option values already coerced to
/// trimmed text.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePollRequest {
    pub title: String,
    pub options: Vec<String>,
}

/// A vote selects one option, either by its id or by zero-based position.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VoteRequest {
    pub option_id: Option<String>,
    pub option_index: Option<usize>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
    pub timestamp: String,
}

impl Poll {
    pub fn total_votes(&self) -> u64 {
        self.options.iter().map(|opt| opt.votes).sum()
    }

    pub fn option_by_id(&self, option_id: &str) -> Option<&PollOption> {
        self.options.iter().find(|opt| opt.id.to_string() == option_id)
    }
}
