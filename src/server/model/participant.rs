//! Participant domain models and parameters.

use chrono::{DateTime, Utc};

use crate::{
    model::participant::{CreateParticipantDto, ParticipantDto, UpdateParticipantDto},
    server::model::{event::JoinEventParams, trimmed, trimmed_opt},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Participant {
    pub id: i32,
    pub username: String,
    pub avatar_path: Option<String>,
    /// Invitation code the participant joined with, if any.
    pub invitation_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Participant {
    pub fn from_entity(entity: entity::participant::Model) -> Self {
        Self {
            id: entity.id,
            username: entity.username,
            avatar_path: entity.avatar_path,
            invitation_code: entity.invitation_code,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> ParticipantDto {
        ParticipantDto {
            id: self.id,
            username: self.username,
            avatar_path: self.avatar_path,
            invitation_code: self.invitation_code,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CreateParticipantParams {
    pub username: String,
    pub avatar_path: Option<String>,
    pub invitation_code: Option<String>,
}

impl From<CreateParticipantDto> for CreateParticipantParams {
    fn from(dto: CreateParticipantDto) -> Self {
        Self {
            username: trimmed(dto.username),
            avatar_path: trimmed_opt(dto.avatar_path),
            invitation_code: trimmed_opt(dto.invitation_code),
        }
    }
}

impl From<JoinEventParams> for CreateParticipantParams {
    fn from(params: JoinEventParams) -> Self {
        Self {
            username: params.username,
            avatar_path: params.avatar_path,
            invitation_code: Some(params.invitation_code),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateParticipantParams {
    pub username: Option<String>,
    pub avatar_path: Option<String>,
}

impl From<UpdateParticipantDto> for UpdateParticipantParams {
    fn from(dto: UpdateParticipantDto) -> Self {
        Self {
            username: trimmed_opt(dto.username),
            avatar_path: trimmed_opt(dto.avatar_path),
        }
    }
}
