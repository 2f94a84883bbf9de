use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::{event::EventRepository, participant::ParticipantRepository},
    model::participant::{CreateParticipantParams, UpdateParticipantParams},
};

mod create;
mod delete;
mod update;
