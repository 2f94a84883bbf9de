//! Event domain models and parameters.
//!
//! Events are created with a random invitation code. Guests join by presenting
//! that code, which creates a participant and appends it to the event's list.

use chrono::{DateTime, Utc};

use crate::{
    model::event::{CreateEventDto, EventDto, JoinEventDto, UpdateEventDto},
    server::model::{trimmed, trimmed_opt},
};

#[derive(Debug, Clone, PartialEq)]
pub struct Event {
    pub id: i32,
    pub invitation_code: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_by_user_id: Option<i32>,
    pub dish_id: Option<i32>,
    /// Participant ids in join order.
    pub participants: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    pub fn from_entity(entity: entity::event::Model, participants: Vec<i32>) -> Self {
        Self {
            id: entity.id,
            invitation_code: entity.invitation_code,
            title: entity.title,
            subtitle: entity.subtitle,
            description: entity.description,
            start_date: entity.start_date,
            end_date: entity.end_date,
            created_by_user_id: entity.created_by_user_id,
            dish_id: entity.dish_id,
            participants,
            created_at: entity.created_at,
            updated_at: entity.updated_at,
        }
    }

    pub fn into_dto(self) -> EventDto {
        EventDto {
            id: self.id,
            invitation_code: self.invitation_code,
            title: self.title,
            subtitle: self.subtitle,
            description: self.description,
            start_date: self.start_date,
            end_date: self.end_date,
            created_by_user_id: self.created_by_user_id,
            dish_id: self.dish_id,
            participants: self.participants,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Parameters for creating an event. The invitation code is generated by the service.
#[derive(Debug, Clone)]
pub struct CreateEventParams {
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub dish_id: Option<i32>,
    pub created_by_user_id: Option<i32>,
}

impl CreateEventParams {
    pub fn from_dto(dto: CreateEventDto, user_id: i32) -> Self {
        Self {
            title: trimmed(dto.title),
            subtitle: trimmed_opt(dto.subtitle),
            description: trimmed_opt(dto.description),
            start_date: dto.start_date,
            end_date: dto.end_date,
            dish_id: dto.dish_id,
            created_by_user_id: Some(user_id),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct UpdateEventParams {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub dish_id: Option<i32>,
}

impl From<UpdateEventDto> for UpdateEventParams {
    fn from(dto: UpdateEventDto) -> Self {
        Self {
            title: trimmed_opt(dto.title),
            subtitle: trimmed_opt(dto.subtitle),
            description: trimmed_opt(dto.description),
            start_date: dto.start_date,
            end_date: dto.end_date,
            dish_id: dto.dish_id,
        }
    }
}

/// A guest joining an event by its invitation code.
#[derive(Debug, Clone)]
pub struct JoinEventParams {
    pub invitation_code: String,
    pub username: String,
    pub avatar_path: Option<String>,
}

impl From<JoinEventDto> for JoinEventParams {
    fn from(dto: JoinEventDto) -> Self {
        Self {
            invitation_code: trimmed(dto.invitation_code),
            username: trimmed(dto.username),
            avatar_path: trimmed_opt(dto.avatar_path),
        }
    }
}
