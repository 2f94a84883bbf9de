use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use validator::{Validate, ValidationError};

use crate::model::validation;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantDto {
    pub id: i32,
    pub username: String,
    pub avatar_path: Option<String>,
    pub invitation_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateParticipantDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "username must not be empty"))]
    pub username: String,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "avatarPath must not be empty"))]
    pub avatar_path: Option<String>,
    /// When set, the participant is also added to the event with this code
    #[validate(custom(function = "crate::model::validation::not_blank", message = "invitationCode must not be empty"))]
    pub invitation_code: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, ToSchema, Validate)]
#[serde(rename_all = "camelCase")]
#[validate(schema(function = "validate_update_participant"))]
pub struct UpdateParticipantDto {
    #[validate(custom(function = "crate::model::validation::not_blank", message = "username must not be empty"))]
    pub username: Option<String>,
    #[validate(custom(function = "crate::model::validation::not_blank", message = "avatarPath must not be empty"))]
    pub avatar_path: Option<String>,
}

fn validate_update_participant(dto: &UpdateParticipantDto) -> Result<(), ValidationError> {
    validation::at_least_one(&[dto.username.is_some(), dto.avatar_path.is_some()])
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
#[into_params(parameter_in = Query)]
pub struct ParticipantQueryDto {
    /// Only participants that joined with this invitation code
    pub invitation_code: Option<String>,
}
