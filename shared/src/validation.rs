use serde_json::Value;
use crate::models::{CreatePollRequest, VoteRequest};

pub const MIN_OPTIONS: usize = 2;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ValidationError {
    #[error("Title is required")]
    TitleRequired,
    #[error("Options must be an array")]
    OptionsNotASequence,
    #[error("At least {MIN_OPTIONS} options are required")]
    TooFewOptions,
}

/// Shape-checks a raw create-poll body. Option values are coerced to text
/// the way the wire format allows (strings pass through, anything else is
/// rendered as JSON) and trimmed; semantic checks live in
/// [`crate::poll_logic::create_poll`].
pub fn parse_create_poll(body: &Value) -> Result<CreatePollRequest, ValidationError> {
    let title = body
        .get("title")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    let options = body
        .get("options")
        .ok_or(ValidationError::OptionsNotASequence)?
        .as_array()
        .ok_or(ValidationError::OptionsNotASequence)?
        .iter()
        .map(coerce_option_text)
        .collect();

    Ok(CreatePollRequest { title, options })
}

fn coerce_option_text(value: &Value) -> String {
    match value {
        Value::String(text) => text.trim().to_string(),
        other => other.to_string().trim().to_string(),
    }
}

/// Extracts the option selector from a raw vote body. An `optionId` wins
/// over an `optionIndex` when both are present; values of the wrong type
/// count as absent, which the vote logic rejects as a missing selector.
pub fn parse_vote_request(body: &Value) -> VoteRequest {
    VoteRequest {
        option_id: body
            .get("optionId")
            .and_then(Value::as_str)
            .filter(|id| !id.is_empty())
            .map(str::to_string),
        option_index: body
            .get("optionIndex")
            .and_then(Value::as_u64)
            .map(|index| index as usize),
    }
}
