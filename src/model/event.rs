use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::model::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct EventDto {
    pub id: i32,
    pub invitation_code: String,
    pub title: String,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub created_by_user_id: Option<i32>,
    pub dish_id: Option<i32>,
    /// Participant ids in join order
    pub participants: Vec<i32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_create_event"))]
pub struct CreateEventDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "title must not be empty"))]
    pub title: String,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "subtitle must not be empty"))]
    pub subtitle: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "description must not be empty"))]
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub dish_id: Option<i32>,
}

fn validate_create_event(dto: &CreateEventDto) -> Result<(), ValidationError> {
    validation::date_order(dto.start_date.as_ref(), dto.end_date.as_ref())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_event"))]
pub struct UpdateEventDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "title must not be empty"))]
    pub title: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "subtitle must not be empty"))]
    pub subtitle: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "description must not be empty"))]
    pub description: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub dish_id: Option<i32>,
}

fn validate_update_event(dto: &UpdateEventDto) -> Result<(), ValidationError> {
    validation::at_least_one(&[
        dto.title.is_some(),
        dto.subtitle.is_some(),
        dto.description.is_some(),
        dto.start_date.is_some(),
        dto.end_date.is_some(),
        dto.dish_id.is_some(),
    ])?;
    validation::date_order(dto.start_date.as_ref(), dto.end_date.as_ref())
}

/// Body of `POST /v1/event/join`.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct JoinEventDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "invitationCode must not be empty"))]
    pub invitation_code: String,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "username must not be empty"))]
    pub username: String,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "avatarPath must not be empty"))]
    pub avatar_path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EventQueryDto {
    /// Exact title filter
    pub title: Option<String>,
}
