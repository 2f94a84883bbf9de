use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

use crate::server::{
    data::ingredient::IngredientRepository,
    model::ingredient::{CreateIngredientParams, UpdateIngredientParams},
};

mod create;
mod update;
