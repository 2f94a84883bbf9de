use chrono::{Duration, TimeZone, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::event::EventRepository,
    model::event::{CreateEventParams, UpdateEventParams},
};

mod create;
mod delete;
mod get;
mod update;
