use rocket::{get, post, http::Status, serde::json::Json, State};
use serde_json::Value;
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use tracing::{debug, instrument};

use shared::models::{HealthResponse, Poll};
use shared::poll_logic;
use shared::validation::{parse_create_poll, parse_vote_request};

use crate::error::ApiError;
use crate::store::PollStore;

pub struct AppState {
    pub store: PollStore,
}

impl AppState {
    pub fn new(store: PollStore) -> Self {
        Self { store }
    }
}

#[get("/health")]
pub async fn health() -> Json<HealthResponse> {
    let timestamp = OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default();

    Json(HealthResponse {
        status: "ok".into(),
        service: "quickpoll".into(),
        timestamp,
    })
}

#[get("/polls")]
pub async fn list_polls(state: &State<AppState>) -> Json<Vec<Poll>> {
    Json(state.store.load_all())
}

#[instrument(skip(state, body))]
#[post("/polls", format = "json", data = "<body>")]
pub async fn create_poll(
    state: &State<AppState>,
    body: Json<Value>,
) -> Result<(Status, Json<Poll>), ApiError> {
    let request = parse_create_poll(&body.into_inner())?;
    let poll = poll_logic::create_poll(&request)?;

    // One writer at a time across the whole load -> insert -> save sequence.
    let _guard = state.store.lock();
    let mut polls = state.store.load_all();
    polls.insert(0, poll.clone());
    state.store.save_all(&polls)?;

    debug!(poll_id = %poll.id, "created poll with {} options", poll.options.len());
    Ok((Status::Created, Json(poll)))
}

#[instrument(skip(state, body), fields(poll_id = %id))]
#[post("/polls/<id>/vote", format = "json", data = "<body>")]
pub async fn cast_vote(
    state: &State<AppState>,
    id: &str,
    body: Json<Value>,
) -> Result<Json<Poll>, ApiError> {
    let request = parse_vote_request(&body.into_inner());

    let _guard = state.store.lock();
    let mut polls = state.store.load_all();
    let updated = poll_logic::cast_vote(&mut polls, id, &request)?.clone();
    state.store.save_all(&polls)?;

    debug!("vote recorded, {} total", updated.total_votes());
    Ok(Json(updated))
}
