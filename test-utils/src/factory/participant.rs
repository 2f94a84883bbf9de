//! Participant factory for creating test participant records.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct ParticipantFactory<'a> {
    db: &'a DatabaseConnection,
    username: String,
    avatar_path: Option<String>,
    invitation_code: Option<String>,
}

impl<'a> ParticipantFactory<'a> {
    /// Creates a new ParticipantFactory with username `"guest{id}"` and no invitation code.
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            username: format!("guest{}", id),
            avatar_path: None,
            invitation_code: None,
        }
    }

    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = username.into();
        self
    }

    pub fn avatar_path(mut self, avatar_path: impl Into<String>) -> Self {
        self.avatar_path = Some(avatar_path.into());
        self
    }

    pub fn invitation_code(mut self, code: impl Into<String>) -> Self {
        self.invitation_code = Some(code.into());
        self
    }

    /// Builds and inserts the participant record.
    pub async fn build(self) -> Result<entity::participant::Model, DbErr> {
        let now = Utc::now();
        entity::participant::ActiveModel {
            username: ActiveValue::Set(self.username),
            avatar_path: ActiveValue::Set(self.avatar_path),
            invitation_code: ActiveValue::Set(self.invitation_code),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a participant with default values.
pub async fn create_participant(
    db: &DatabaseConnection,
) -> Result<entity::participant::Model, DbErr> {
    ParticipantFactory::new(db).build().await
}
