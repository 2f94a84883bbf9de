use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{data::token::TokenRepository, model::token::TokenKind};

mod create;
mod find;
