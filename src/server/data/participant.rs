//! Participant data repository for database operations.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::server::model::participant::{
    CreateParticipantParams, Participant, UpdateParticipantParams,
};

pub struct ParticipantRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ParticipantRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, params: CreateParticipantParams) -> Result<Participant, DbErr> {
        let now = Utc::now();
        let entity = entity::participant::ActiveModel {
            username: ActiveValue::Set(params.username),
            avatar_path: ActiveValue::Set(params.avatar_path),
            invitation_code: ActiveValue::Set(params.invitation_code),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Participant::from_entity(entity))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Participant>, DbErr> {
        let entity = entity::prelude::Participant::find_by_id(id)
            .one(self.db)
            .await?;

        Ok(entity.map(Participant::from_entity))
    }

    /// Gets all participants, optionally only those that joined with `invitation_code`.
    pub async fn get_all(&self, invitation_code: Option<&str>) -> Result<Vec<Participant>, DbErr> {
        let mut query = entity::prelude::Participant::find();
        if let Some(code) = invitation_code {
            query = query.filter(entity::participant::Column::InvitationCode.eq(code));
        }

        let entities = query
            .order_by_asc(entity::participant::Column::Id)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(Participant::from_entity).collect())
    }

    pub async fn update(
        &self,
        id: i32,
        params: UpdateParticipantParams,
    ) -> Result<Option<Participant>, DbErr> {
        let Some(entity) = entity::prelude::Participant::find_by_id(id)
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::participant::ActiveModel = entity.into();
        if let Some(username) = params.username {
            active.username = ActiveValue::Set(username);
        }
        if let Some(avatar_path) = params.avatar_path {
            active.avatar_path = ActiveValue::Set(Some(avatar_path));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        Ok(Some(Participant::from_entity(entity)))
    }

    /// Deletes a participant and removes it from every event participant list.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Participant::delete_by_id(id)
            .exec(self.db)
            .await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        entity::prelude::EventParticipant::delete_many()
            .filter(entity::event_participant::Column::ParticipantId.eq(id))
            .exec(self.db)
            .await?;

        Ok(true)
    }
}
