use crate::server::{
    data::user::UserRepository,
    model::{
        role::Role,
        user::{CreateUserParams, UpdateUserParams, UserQueryParams, UserSort, UserSortField},
    },
};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod admin_exists;
mod create;
mod email_taken;
mod query;
mod update;
