use axum::{
    extract::{rejection::JsonRejection, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
    Json,
};

use crate::{
    model::{
        api::ErrorDto,
        event::{CreateEventDto, EventDto, EventQueryDto, JoinEventDto, UpdateEventDto},
        participant::ParticipantDto,
    },
    server::{
        error::AppError,
        middleware::{auth::AuthGuard, validate::validate_body},
        model::{
            event::{CreateEventParams, JoinEventParams, UpdateEventParams},
            role::Right,
        },
        service::event::EventService,
        state::AppState,
    },
};

/// Tag for grouping event endpoints in OpenAPI documentation
pub static EVENT_TAG: &str = "event";

/// Create an event.
///
/// A random invitation code is generated for guests to join with.
///
/// # Access Control
/// - `manageEvents` - Admins and cooks
///
/// # Returns
/// - `201 Created` - Successfully created event
/// - `400 Bad Request` - Invalid body, end before start, or title already taken
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `manageEvents`
/// - `404 Not Found` - Referenced dish not found
#[utoipa::path(
    post,
    path = "/v1/event",
    tag = EVENT_TAG,
    request_body = CreateEventDto,
    responses(
        (status = 201, description = "Successfully created event", body = EventDto),
        (status = 400, description = "Invalid body or title already taken", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Dish not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn create_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    payload: Result<Json<CreateEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageEvents])
        .await?;
    let payload = validate_body(payload)?;

    let service = EventService::new(&state.db);
    let event = service
        .create(CreateEventParams::from_dto(payload, user.id))
        .await?;

    Ok((StatusCode::CREATED, Json(event.into_dto())))
}

/// List events, optionally filtered by exact title. Public.
#[utoipa::path(
    get,
    path = "/v1/event",
    tag = EVENT_TAG,
    params(EventQueryDto),
    responses(
        (status = 200, description = "Array of events", body = Vec<EventDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_events(
    State(state): State<AppState>,
    Query(query): Query<EventQueryDto>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let events = service.get_all(query.title.as_deref().map(str::trim)).await?;
    let events: Vec<EventDto> = events.into_iter().map(|e| e.into_dto()).collect();

    Ok((StatusCode::OK, Json(events)))
}

/// Get an event by ID. Public.
#[utoipa::path(
    get,
    path = "/v1/event/{eventId}",
    tag = EVENT_TAG,
    params(
        ("eventId" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 200, description = "The event", body = EventDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_event(
    State(state): State<AppState>,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let service = EventService::new(&state.db);

    let event = service.get_by_id(event_id).await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Update an event.
///
/// # Access Control
/// - `manageEvents` - Admins and cooks
///
/// # Returns
/// - `200 OK` - The updated event
/// - `400 Bad Request` - Empty or invalid body, or title used by another event
/// - `401 Unauthorized` - Missing or invalid bearer token
/// - `403 Forbidden` - Caller lacks `manageEvents`
/// - `404 Not Found` - Event or referenced dish not found
#[utoipa::path(
    patch,
    path = "/v1/event/{eventId}",
    tag = EVENT_TAG,
    params(
        ("eventId" = i32, Path, description = "Event ID")
    ),
    request_body = UpdateEventDto,
    responses(
        (status = 200, description = "The updated event", body = EventDto),
        (status = 400, description = "Invalid body or title already taken", body = ErrorDto),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn update_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
    payload: Result<Json<UpdateEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageEvents])
        .await?;
    let payload = validate_body(payload)?;

    let service = EventService::new(&state.db);
    let event = service
        .update(event_id, UpdateEventParams::from(payload))
        .await?;

    Ok((StatusCode::OK, Json(event.into_dto())))
}

/// Delete an event. Its participants are kept.
///
/// # Access Control
/// - `manageEvents` - Admins and cooks
#[utoipa::path(
    delete,
    path = "/v1/event/{eventId}",
    tag = EVENT_TAG,
    params(
        ("eventId" = i32, Path, description = "Event ID")
    ),
    responses(
        (status = 204, description = "Event deleted"),
        (status = 401, description = "Please authenticate", body = ErrorDto),
        (status = 403, description = "Forbidden", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
    security(("bearerAuth" = [])),
)]
pub async fn delete_event(
    State(state): State<AppState>,
    headers: HeaderMap,
    Path(event_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &headers)
        .require(&[Right::ManageEvents])
        .await?;

    let service = EventService::new(&state.db);
    service.delete(event_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Join an event with its invitation code.
///
/// Public. Creates a participant for the guest and appends it to the event.
///
/// # Returns
/// - `201 Created` - The new participant
/// - `400 Bad Request` - Invalid body
/// - `404 Not Found` - No event has this invitation code
#[utoipa::path(
    post,
    path = "/v1/event/join",
    tag = EVENT_TAG,
    request_body = JoinEventDto,
    responses(
        (status = 201, description = "Joined the event", body = ParticipantDto),
        (status = 400, description = "Invalid body", body = ErrorDto),
        (status = 404, description = "Event not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn join_event(
    State(state): State<AppState>,
    payload: Result<Json<JoinEventDto>, JsonRejection>,
) -> Result<impl IntoResponse, AppError> {
    let payload = validate_body(payload)?;

    let service = EventService::new(&state.db);
    let participant = service.join(JoinEventParams::from(payload)).await?;

    Ok((StatusCode::CREATED, Json(participant.into_dto())))
}
