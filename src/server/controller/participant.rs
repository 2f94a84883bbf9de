use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        participant::{
            CreateParticipantDto, ParticipantDto, ParticipantQueryDto, UpdateParticipantDto,
        },
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::validate_body},
        model::{
            participant::{CreateParticipantParams, UpdateParticipantParams},
            role::Right,
        },
        service::participant::ParticipantService,
        state::AppState,
    },
};

/// Tag for grouping participant endpoints in OpenAPI documentation
pub static PARTICIPANT_TAG: &str = "participant";

/// Create a participant.
///
/// When an invitation code is given the participant is also appended to that event.
///
/// # Access Control
/// - `manageEvents` - Admins and cooks
///
/// # Returns
/// - `201 Created` - The new participant
/// - `400 Bad Request` - Invalid body
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `manageEvents`
/// - `404 Not Found` - No event has the given invitation code
#[utoipa::path(
    post,
    path = "/v1/participant",
    tag = PARTICIPANT_TAG,
    request_body = CreateParticipantDto,
    responses(
        (status = 201, description = "Successfully created participant", body = ParticipantDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn create_participant(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateParticipantDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageEvents])
        .await?;
    let payload = validate_body(payload)?;

    let service = ParticipantService::new(&state.db);
    let participant = service
        .create(CreateParticipantParams::from(payload))
        .await?;

    Ok((StatusCode::CREATED, Json(participant.into_dto())))
}

/// List participants, optionally only those that joined with an invitation code.
///
/// # Access Control
/// - `manageEvents` - Admins and cooks
#[utoipa::path(
    get,
    path = "/v1/participant",
    tag = PARTICIPANT_TAG,
    params(ParticipantQueryDto),
    responses(
        (status = 200, description = "Array of participants", body = Vec<ParticipantDto>),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn get_participants(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<ParticipantQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageEvents])
        .await?;

    let service = ParticipantService::new(&state.db);
    let participants = service
        .get_all(query.invitation_code.as_deref().map(str::trim))
        .await?;
    let participants: Vec<ParticipantDto> =
        participants.into_iter().map(|p| p.into_dto()).collect();

    Ok((StatusCode::OK, Json(participants)))
}

/// Get a participant by ID.
///
/// # Access Control
/// - `manageEvents` - Admins and cooks
#[utoipa::path(
    get,
    path = "/v1/participant/{participantId}",
    tag = PARTICIPANT_TAG,
    params(
        ("participantId" = i32, Path, description = "Participant ID")
    ),
    responses(
        (status = 200, description = "The participant", body = ParticipantDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Participant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn get_participant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(participant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageEvents])
        .await?;

    let service = ParticipantService::new(&state.db);
    let participant = service.get_by_id(participant_id).await?;

    Ok((StatusCode::OK, Json(participant.into_dto())))
}

/// Update a participant's username or avatar.
///
/// # Access Control
/// - `manageEvents` - Admins and cooks
#[utoipa::path(
    patch,
    path = "/v1/participant/{participantId}",
    tag = PARTICIPANT_TAG,
    params(
        ("participantId" = i32, Path, description = "Participant ID")
    ),
    request_body = UpdateParticipantDto,
    responses(
        (status = 200, description = "The updated participant", body = ParticipantDto),
        (status = 400, description = "Empty or invalid body", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Participant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn update_participant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(participant_id): Path<i32>,
    payload: Result<Json<UpdateParticipantDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageEvents])
        .await?;
    let payload = validate_body(payload)?;

    let service = ParticipantService::new(&state.db);
    let participant = service
        .update(participant_id, UpdateParticipantParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(participant.into_dto())))
}

/// Delete a participant and remove it from every event.
///
/// # Access Control
/// - `manageEvents` - Admins and cooks
#[utoipa::path(
    delete,
    path = "/v1/participant/{participantId}",
    tag = PARTICIPANT_TAG,
    params(
        ("participantId" = i32, Path, description = "Participant ID")
    ),
    responses(
        (status = 204, description = "Participant deleted"),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Participant not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn delete_participant(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(participant_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageEvents])
        .await?;

    let service = ParticipantService::new(&state.db);
    service.delete(participant_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
