//! Participant service for business logic.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{event::EventRepository, participant::ParticipantRepository},
    error::AppError,
    model::participant::{CreateParticipantParams, Participant, UpdateParticipantParams},
    service::event::EVENT_NOT_FOUND,
};

pub const PARTICIPANT_NOT_FOUND: &str = "Participant not found";

pub struct ParticipantService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipantService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a participant, appending it to the event matching its invitation code.
    ///
    /// # Returns
    /// - `Ok(Participant)` - The new participant
    /// - `Err(AppError::NotFound)` - An invitation code was given but matches no event
    pub async fn create(&self, params: CreateParticipantParams) -> Result<Participant, AppError> {
        let repo = ParticipantRepository::new(self.db);
        let event_repo = EventRepository::new(self.db);

        let event = match &params.invitation_code {
            Some(code) => Some(
                event_repo
                    .get_by_invitation_code(code)
                    .await?
                    .ok_or_else(|| AppError::NotFound(EVENT_NOT_FOUND.to_string()))?,
            ),
            None => None,
        };

        let participant = repo.create(params).await?;
        if let Some(event) = event {
            event_repo.append_participant(event.id, participant.id).await?;
        }

        Ok(participant)
    }

    pub async fn get_all(&self, invitation_code: Option<&str>) -> Result<Vec<Participant>, AppError> {
        let repo = ParticipantRepository::new(self.db);

        Ok(repo.get_all(invitation_code).await?)
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Participant, AppError> {
        let repo = ParticipantRepository::new(self.db);

        repo.get_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(PARTICIPANT_NOT_FOUND.to_string()))
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateParticipantParams,
    ) -> Result<Participant, AppError> {
        let repo = ParticipantRepository::new(self.db);

        repo.update(id, params)
            .await?
            .ok_or_else(|| AppError::NotFound(PARTICIPANT_NOT_FOUND.to_string()))
    }

    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let repo = ParticipantRepository::new(self.db);

        if !repo.delete(id).await? {
            return Err(AppError::NotFound(PARTICIPANT_NOT_FOUND.to_string()));
        }

        Ok(())
    }
}
