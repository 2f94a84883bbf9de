use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::dish::DishRepository,
    model::dish::{CreateDishParams, UpdateDishParams},
};

mod create;
mod delete;
mod get;
mod update;
