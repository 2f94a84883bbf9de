//! Event factory for creating test event records.

use crate::factory::helpers::next_id;
use chrono::{DateTime, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

pub struct EventFactory<'a> {
    db: &'a DatabaseConnection,
    invitation_code: String,
    title: String,
    start_date: Option<DateTime<Utc>>,
    end_date: Option<DateTime<Utc>>,
    dish_id: Option<i32>,
    created_by_user_id: Option<i32>,
}

impl<'a> EventFactory<'a> {
    /// Creates a new EventFactory.
    ///
    /// Defaults:
    /// - title: `"Event {id}"`
    /// - invitation_code: `"INV{id}"`, unique per factory call
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            invitation_code: format!("INV{}", id),
            title: format!("Event {}", id),
            start_date: None,
            end_date: None,
            dish_id: None,
            created_by_user_id: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn invitation_code(mut self, code: impl Into<String>) -> Self {
        self.invitation_code = code.into();
        self
    }

    pub fn dates(mut self, start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        self.start_date = Some(start);
        self.end_date = Some(end);
        self
    }

    pub fn dish_id(mut self, dish_id: i32) -> Self {
        self.dish_id = Some(dish_id);
        self
    }

    pub fn created_by(mut self, user_id: i32) -> Self {
        self.created_by_user_id = Some(user_id);
        self
    }

    /// Builds and inserts the event record.
    pub async fn build(self) -> Result<entity::event::Model, DbErr> {
        let now = Utc::now();
        entity::event::ActiveModel {
            invitation_code: ActiveValue::Set(self.invitation_code),
            title: ActiveValue::Set(self.title),
            subtitle: ActiveValue::Set(None),
            description: ActiveValue::Set(None),
            start_date: ActiveValue::Set(self.start_date),
            end_date: ActiveValue::Set(self.end_date),
            created_by_user_id: ActiveValue::Set(self.created_by_user_id),
            dish_id: ActiveValue::Set(self.dish_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates an event with default values.
pub async fn create_event(db: &DatabaseConnection) -> Result<entity::event::Model, DbErr> {
    EventFactory::new(db).build().await
}
