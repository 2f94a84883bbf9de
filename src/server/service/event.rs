//! Event service for business logic.
//!
//! Generates invitation codes, enforces title uniqueness and lets guests join an
//! event by its code.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{dish::DishRepository, event::EventRepository, participant::ParticipantRepository},
    error::AppError,
    model::{
        event::{CreateEventParams, Event, JoinEventParams, UpdateEventParams},
        participant::{CreateParticipantParams, Participant},
    },
    service::dish::DISH_NOT_FOUND,
    util::random,
};

pub const EVENT_NOT_FOUND: &str = "Event not found";
pub const EVENT_TITLE_TAKEN: &str = "Event title already taken";
pub const EVENT_DATE_ORDER: &str = "endDate must not be before startDate";

/// Attempts at drawing an unused invitation code before giving up.
const INVITATION_CODE_ATTEMPTS: usize = 10;

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an event with a fresh invitation code.
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(AppError::BadRequest)` - Title already used by another event
    /// - `Err(AppError::NotFound)` - `dish_id` given but the dish does not exist
    /// - `Err(AppError::InternalError)` - No unused invitation code could be drawn
    pub async fn create(&self, params: CreateEventParams) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        if repo.title_taken(&params.title, None).await? {
            return Err(AppError::BadRequest(EVENT_TITLE_TAKEN.to_string()));
        }

        if let Some(dish_id) = params.dish_id {
            self.ensure_dish_exists(dish_id).await?;
        }

        let invitation_code = self.unused_invitation_code().await?;
        let event = repo.create(params, invitation_code).await?;

        Ok(event)
    }

    pub async fn get_all(&self, title: Option<&str>) -> Result<Vec<Event>, AppError> {
        let repo = EventRepository::new(self.db);

        Ok(repo.get_all(title).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND.to_string()))
    }

    /// Updates an event. Keeping its own title passes the uniqueness check.
    pub async fn update(&self, id: i32, params: UpdateEventParams) -> Result<Event, AppError> {
        let repo = EventRepository::new(self.db);

        let Some(existing) = repo.get_by_id(id).await? else {
            return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
        };

        let start_date = params.start_date.or(existing.start_date);
        let end_date = params.end_date.or(existing.end_date);
        if let (Some(start), Some(end)) = (start_date, end_date) {
            if end < start {
                return Err(AppError::BadRequest(EVENT_DATE_ORDER.to_string()));
            }
        }

        if let Some(title) = &params.title {
            if repo.title_taken(title, Some(id)).await? {
                return Err(AppError::BadRequest(EVENT_TITLE_TAKEN.to_string()));
            }
        }

        if let Some(dish_id) = params.dish_id {
            self.ensure_dish_exists(dish_id).await?;
        }

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = EventRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(EVENT_NOT_FOUND.to_string()));
        }

        Ok(())
    }

    /// Creates a participant from a guest and appends it to the event with the code.
    ///
    /// # Returns
    /// - `Ok(Participant)` - The new participant
    /// - `Err(AppError::NotFound)` - No event has this invitation code
    pub async fn join(&self, params: JoinEventParams) -> Result<Participant, AppError> {
        let repo = EventRepository::new(self.db);

        let event = repo
            .get_by_invitation_code(&params.invitation_code)
            .await?
            .ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND.to_string()))?;

        let participant = ParticipantRepository::new(self.db)
            .create(CreateParticipantParams::from(params))
            .await?;
        repo.append_participant(event.id, participant.id).await?;

        tracing::debug!("Participant {} joined event {}", participant.id, event.id);

        Ok(participant)
    }

    async fn ensure_dish_exists(&self, dish_id: i32) -> Result<(), AppError> {
        match DishRepository::new(self.db).get_by_id(dish_id).await? {
            Some(_) => Ok(()),
            None => Err(AppError::NotFound(DISH_NOT_FOUND.to_string())),
        }
    }

    async fn unused_invitation_code(&self) -> Result<String, AppError> {
        let repo = EventRepository::new(self.db);

        for _ in 0..INVITATION_CODE_ATTEMPTS {
            let code = random::invitation_code();
            if !repo.invitation_code_taken(&code).await? {
                return Ok(code);
            }
        }

        Err(AppError::InternalError(format!(
            "No unused invitation code after {} attempts",
            INVITATION_CODE_ATTEMPTS
        )))
    }
}
