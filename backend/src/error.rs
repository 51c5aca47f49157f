use rocket::http::Status;
use rocket::response::Responder;
use rocket::serde::json::Json;
use shared::poll_logic::VoteError;
use shared::validation::ValidationError;
use shared::ErrorResponse;
use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Vote(#[from] VoteError),
    #[error("Failed to persist polls: {0}")]
    Storage(#[from] StoreError),
}

impl ApiError {
    fn status(&self) -> Status {
        match self {
            ApiError::Validation(_) => Status::BadRequest,
            ApiError::Vote(VoteError::PollNotFound) => Status::NotFound,
            ApiError::Vote(_) => Status::BadRequest,
            ApiError::Storage(_) => Status::InternalServerError,
        }
    }
}

impl<'r, 'o: 'r> Responder<'r, 'o> for ApiError {
    fn respond_to(self, req: &'r rocket::Request<'_>) -> rocket::response::Result<'o> {
        let status = self.status();
        let body = Json(ErrorResponse::new(self.to_string()));

        rocket::Response::build_from(body.respond_to(req)?)
            .status(status)
            .ok()
    }
}
