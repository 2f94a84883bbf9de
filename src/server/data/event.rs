//! Event data repository for database operations.
//!
//! This module provides the `EventRepository` for managing events and their participant
//! lists. The list lives in `event_participant` rows ordered by row ID.

use std::collections::HashMap;

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::event::{CreateEventParams, Event, UpdateEventParams};

pub struct EventRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new event with an empty participant list.
    ///
    /// # Arguments
    /// - `params` - Trimmed event fields and creator
    /// - `invitation_code` - Generated code guests use to join
    ///
    /// # Returns
    /// - `Ok(Event)` - The created event
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(
        &self,
        params: CreateEventParams,
        invitation_code: String,
    ) -> Result<Event, DbErr> {
        let now = Utc::now();
        let entity = entity::event::ActiveModel {
            invitation_code: ActiveValue::Set(invitation_code),
            title: ActiveValue::Set(params.title),
            subtitle: ActiveValue::Set(params.subtitle),
            description: ActiveValue::Set(params.description),
            start_date: ActiveValue::Set(params.start_date),
            end_date: ActiveValue::Set(params.end_date),
            created_by_user_id: ActiveValue::Set(params.created_by_user_id),
            dish_id: ActiveValue::Set(params.dish_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(Event::from_entity(entity, Vec::new()))
    }

    pub async fn get_by_id(&self, id: i32) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find_by_id(id).one(self.db).await?;

        self.with_participants(entity).await
    }

    /// Finds the event a guest can join with `invitation_code`.
    pub async fn get_by_invitation_code(
        &self,
        invitation_code: &str,
    ) -> Result<Option<Event>, DbErr> {
        let entity = entity::prelude::Event::find()
            .filter(entity::event::Column::InvitationCode.eq(invitation_code))
            .one(self.db)
            .await?;

        self.with_participants(entity).await
    }

    /// Gets all events, optionally filtered by exact title, ordered by ID.
    pub async fn get_all(&self, title: Option<&str>) -> Result<Vec<Event>, DbErr> {
        let mut query = entity::prelude::Event::find();
        if let Some(title) = title {
            query = query.filter(entity::event::Column::Title.eq(title));
        }

        let entities = query
            .order_by_asc(entity::event::Column::Id)
            .all(self.db)
            .await?;

        let ids: Vec<i32> = entities.iter().map(|e| e.id).collect();
        let mut lists = self.participant_lists(&ids).await?;

        Ok(entities
            .into_iter()
            .map(|entity| {
                let participants = lists.remove(&entity.id).unwrap_or_default();
                Event::from_entity(entity, participants)
            })
            .collect())
    }

    /// Checks whether a title is used by an event other than `exclude_id`.
    pub async fn title_taken(&self, title: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query =
            entity::prelude::Event::find().filter(entity::event::Column::Title.eq(title));
        if let Some(id) = exclude_id {
            query = query.filter(entity::event::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks whether an invitation code is already assigned to an event.
    pub async fn invitation_code_taken(&self, invitation_code: &str) -> Result<bool, DbErr> {
        let count = entity::prelude::Event::find()
            .filter(entity::event::Column::InvitationCode.eq(invitation_code))
            .count(self.db)
            .await?;

        Ok(count > 0)
    }

    /// Applies the set fields of `params` to an event.
    ///
    /// # Returns
    /// - `Ok(Some(Event))` - The updated event with its participant list
    /// - `Ok(None)` - No event with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateEventParams,
    ) -> Result<Option<Event>, DbErr> {
        let Some(entity) = entity::prelude::Event::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::event::ActiveModel = entity.into();
        if let Some(title) = params.title {
            active.title = ActiveValue::Set(title);
        }
        if let Some(subtitle) = params.subtitle {
            active.subtitle = ActiveValue::Set(Some(subtitle));
        }
        if let Some(description) = params.description {
            active.description = ActiveValue::Set(Some(description));
        }
        if let Some(start_date) = params.start_date {
            active.start_date = ActiveValue::Set(Some(start_date));
        }
        if let Some(end_date) = params.end_date {
            active.end_date = ActiveValue::Set(Some(end_date));
        }
        if let Some(dish_id) = params.dish_id {
            active.dish_id = ActiveValue::Set(Some(dish_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        self.with_participants(Some(entity)).await
    }

    /// Deletes an event and its participant list rows. Participants are kept.
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::Event::delete_by_id(id).exec(self.db).await?;
        if result.rows_affected == 0 {
            return Ok(false);
        }

        entity::prelude::EventParticipant::delete_many()
            .filter(entity::event_participant::Column::EventId.eq(id))
            .exec(self.db)
            .await?;

        Ok(true)
    }

    /// Appends a participant to the end of an event's participant list.
    pub async fn append_participant(&self, event_id: i32, participant_id: i32) -> Result<(), DbErr> {
        entity::event_participant::ActiveModel {
            event_id: ActiveValue::Set(event_id),
            participant_id: ActiveValue::Set(participant_id),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        Ok(())
    }

    async fn with_participants(
        &self,
        entity: Option<entity::event::Model>,
    ) -> Result<Option<Event>, DbErr> {
        let Some(entity) = entity else {
            return Ok(None);
        };

        let mut lists = self.participant_lists(&[entity.id]).await?;
        let participants = lists.remove(&entity.id).unwrap_or_default();

        Ok(Some(Event::from_entity(entity, participants)))
    }

    async fn participant_lists(
        &self,
        event_ids: &[i32],
    ) -> Result<HashMap<i32, Vec<i32>>, DbErr> {
        if event_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows = entity::prelude::EventParticipant::find()
            .filter(entity::event_participant::Column::EventId.is_in(event_ids.to_vec()))
            .order_by_asc(entity::event_participant::Column::Id)
            .all(self.db)
            .await?;

        let mut lists: HashMap<i32, Vec<i32>> = HashMap::new();
        for row in rows {
            lists
                .entry(row.event_id)
                .or_default()
                .push(row.participant_id);
        }

        Ok(lists)
    }
}
