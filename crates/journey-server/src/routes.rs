//! HTTP routes and handlers.

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Response,
    routing::{get, patch, post},
    Json, Router,
};
use journey_core::{
    error::parse_id, ConfirmationOutcome, CreateTrip, InviteParticipant, JourneyError,
    Participant, Trip,
};
use log::{debug, error, info};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    response::{confirmation_response, ApiError},
    state::AppState,
};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(
            "/participants/:participant_id/confirm",
            patch(confirm_participant),
        )
        .route("/trips", post(create_trip))
        .route("/trips/:trip_id", get(get_trip))
        .route("/trips/:trip_id/participants", get(list_participants))
        .route("/trips/:trip_id/invites", post(invite_participant))
        .with_state(state)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateTripResponse {
    pub trip_id: Uuid,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TripResponse {
    pub trip: Trip,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantsResponse {
    pub participants: Vec<Participant>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InviteResponse {
    pub participant_id: Uuid,
}

/// PATCH /participants/{participantId}/confirm
async fn confirm_participant(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Response {
    let Path(participant_id) = match path {
        Ok(path) => path,
        Err(e) => {
            debug!("rejected participant id: {e}");
            return confirmation_response(ConfirmationOutcome::InvalidIdentifier, &state.messages);
        }
    };

    let outcome = state
        .confirmations
        .confirm_participant(&participant_id)
        .await;
    debug!("confirm participant participant_id={participant_id} outcome={outcome}");
    confirmation_response(outcome, &state.messages)
}

/// POST /trips
async fn create_trip(
    State(state): State<AppState>,
    body: Result<Json<CreateTrip>, JsonRejection>,
) -> Result<(StatusCode, Json<CreateTripResponse>), ApiError> {
    let Json(params) = body.map_err(|e| {
        debug!("rejected trip body: {e}");
        ApiError::bad_request(&state.messages.invalid_body)
    })?;

    let (trip, invitees) = state
        .store
        .create_trip(&params)
        .await
        .map_err(|e| ApiError::from_journey("create trip", &e, &state.messages))?;
    info!(
        "created trip trip_id={} invitees={}",
        trip.id,
        invitees.len()
    );

    let mailer = state.mailer.clone();
    let trip_id = trip.id;
    tokio::spawn(async move {
        if let Err(e) = mailer.send_confirm_trip_email_to_owner(trip_id).await {
            error!("failed to send trip confirmation email trip_id={trip_id}: {e}");
        }
    });

    Ok((
        StatusCode::CREATED,
        Json(CreateTripResponse { trip_id: trip.id }),
    ))
}

/// GET /trips/{tripId}
async fn get_trip(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<TripResponse>, ApiError> {
    let id = path_trip_id(path, &state)?;
    let trip = state
        .store
        .find_trip(id)
        .await
        .and_then(|found| found.ok_or(JourneyError::TripNotFound { id }))
        .map_err(|e| {
            ApiError::from_journey(&format!("get trip trip_id={id}"), &e, &state.messages)
        })?;
    Ok(Json(TripResponse { trip }))
}

/// GET /trips/{tripId}/participants
async fn list_participants(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<ParticipantsResponse>, ApiError> {
    let id = path_trip_id(path, &state)?;
    let participants = state.store.list_participants(id).await.map_err(|e| {
        ApiError::from_journey(
            &format!("list participants trip_id={id}"),
            &e,
            &state.messages,
        )
    })?;
    Ok(Json(ParticipantsResponse { participants }))
}

/// POST /trips/{tripId}/invites
async fn invite_participant(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
    body: Result<Json<InviteParticipant>, JsonRejection>,
) -> Result<(StatusCode, Json<InviteResponse>), ApiError> {
    let id = path_trip_id(path, &state)?;
    let Json(params) = body.map_err(|e| {
        debug!("rejected invite body: {e}");
        ApiError::bad_request(&state.messages.invalid_body)
    })?;

    let participant = state
        .store
        .invite_participant(id, &params)
        .await
        .map_err(|e| {
            ApiError::from_journey(
                &format!("invite participant trip_id={id}"),
                &e,
                &state.messages,
            )
        })?;
    info!(
        "invited participant participant_id={} trip_id={id}",
        participant.id
    );

    Ok((
        StatusCode::CREATED,
        Json(InviteResponse {
            participant_id: participant.id,
        }),
    ))
}

/// Trip id from the path. Segments axum cannot decode are reported like any
/// other malformed identifier.
fn path_trip_id(
    path: Result<Path<String>, PathRejection>,
    state: &AppState,
) -> Result<Uuid, ApiError> {
    let Path(raw) = path.map_err(|e| {
        debug!("rejected trip id: {e}");
        ApiError::bad_request(&state.messages.invalid_identifier)
    })?;
    parse_id(&raw).map_err(|e| ApiError::from_journey("parse trip id", &e, &state.messages))
}
