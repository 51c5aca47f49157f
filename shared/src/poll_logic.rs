use time::OffsetDateTime;
use uuid::Uuid;

use crate::models::{CreatePollRequest, Poll, PollOption, VoteRequest};
use crate::validation::{ValidationError, MIN_OPTIONS};

#[derive(Debug, Clone, thiserror::Error)]
pub enum VoteError {
    #[error("Poll not found")]
    PollNotFound,
    #[error("Unknown option id: {0}")]
    UnknownOption(String),
    #[error("Option index {0} is out of range")]
    IndexOutOfBounds(usize),
    #[error("A vote requires an optionId or an optionIndex")]
    MissingSelector,
}

/// Builds a validated poll record: trimmed title, fresh ids, zeroed
/// counters, creation timestamp.
pub fn create_poll(request: &CreatePollRequest) -> Result<Poll, ValidationError> {
    let title = request.title.trim();
    if title.is_empty() {
        return Err(ValidationError::TitleRequired);
    }
    if request.options.len() < MIN_OPTIONS {
        return Err(ValidationError::TooFewOptions);
    }

    Ok(Poll {
        id: Uuid::new_v4(),
        title: title.to_string(),
        options: request
            .options
            .iter()
            .map(|name| PollOption {
                id: Uuid::new_v4(),
                name: name.trim().to_string(),
                votes: 0,
            })
            .collect(),
        created_at: OffsetDateTime::now_utc(),
    })
}

/// Applies one vote to the collection and returns the updated poll.
///
/// Resolution order: an option id, when supplied, takes precedence over a
/// positional index. Nothing is mutated on any error path.
pub fn cast_vote<'a>(
    polls: &'a mut [Poll],
    poll_id: &str,
    request: &VoteRequest,
) -> Result<&'a Poll, VoteError> {
    let poll = polls
        .iter_mut()
        .find(|poll| poll.id.to_string() == poll_id)
        .ok_or(VoteError::PollNotFound)?;

    let option = match (&request.option_id, request.option_index) {
        (Some(id), _) => poll
            .options
            .iter_mut()
            .find(|opt| opt.id.to_string() == *id)
            .ok_or_else(|| VoteError::UnknownOption(id.clone()))?,
        (None, Some(index)) => poll
            .options
            .get_mut(index)
            .ok_or(VoteError::IndexOutOfBounds(index))?,
        (None, None) => return Err(VoteError::MissingSelector),
    };

    option.votes += 1;
    Ok(poll)
}
