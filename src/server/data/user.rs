//! User data repository for database operations.
//!
//! This module provides the `UserRepository` for managing user records in the database.
//! It handles user creation, updates, lookups by email, filtered pagination and admin
//! detection with conversion between entity models and domain models at the boundary.

use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, Order,
    PaginatorTrait, QueryFilter, QueryOrder,
};

use crate::server::model::{
    role::Role,
    user::{CreateUserParams, UpdateUserParams, User, UserQueryParams, UserSortField},
};

/// Repository providing database operations for user management.
///
/// This struct holds a reference to the database connection and provides methods
/// for creating, reading, updating, deleting and querying user records.
pub struct UserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> UserRepository<'a> {
    /// Creates a new UserRepository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserRepository` - New repository instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new user.
    ///
    /// The plain-text password in `params` is ignored; callers hash it first and pass
    /// the PHC string as `password_hash`.
    ///
    /// # Arguments
    /// - `params` - Name, email and role of the new user
    /// - `password_hash` - Argon2 PHC string to store
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(DbErr)` - Database error during insert, including unique email violations
    pub async fn create(
        &self,
        params: &CreateUserParams,
        password_hash: String,
    ) -> Result<User, DbErr> {
        let now = Utc::now();
        let entity = entity::user::ActiveModel {
            name: ActiveValue::Set(params.name.clone()),
            email: ActiveValue::Set(params.email.clone()),
            password: ActiveValue::Set(password_hash),
            role: ActiveValue::Set(params.role.to_string()),
            is_email_verified: ActiveValue::Set(false),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        User::from_entity(entity)
    }

    /// Finds a user by ID.
    ///
    /// # Returns
    /// - `Ok(Some(User))` - User found
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_by_id(&self, id: i32) -> Result<Option<User>, DbErr> {
        entity::prelude::User::find_by_id(id)
            .one(self.db)
            .await?
            .map(User::from_entity)
            .transpose()
    }

    /// Finds a user by email together with the stored password hash.
    ///
    /// Used only by login, the hash never leaves the auth service.
    ///
    /// # Arguments
    /// - `email` - Lower-cased email address
    ///
    /// # Returns
    /// - `Ok(Some((User, String)))` - User and its password hash
    /// - `Ok(None)` - No user with that email
    /// - `Err(DbErr)` - Database error during query
    pub async fn find_with_password_by_email(
        &self,
        email: &str,
    ) -> Result<Option<(User, String)>, DbErr> {
        let Some(entity) = entity::prelude::User::find()
            .filter(entity::user::Column::Email.eq(email))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let password = entity.password.clone();
        Ok(Some((User::from_entity(entity)?, password)))
    }

    /// Checks whether an email is used by a user other than `exclude_id`.
    ///
    /// # Arguments
    /// - `email` - Lower-cased email address
    /// - `exclude_id` - User being updated, ignored by the check
    ///
    /// # Returns
    /// - `Ok(true)` - Another user already has this email
    /// - `Ok(false)` - Email is free
    /// - `Err(DbErr)` - Database error during count query
    pub async fn email_taken(&self, email: &str, exclude_id: Option<i32>) -> Result<bool, DbErr> {
        let mut query = entity::prelude::User::find().filter(entity::user::Column::Email.eq(email));
        if let Some(id) = exclude_id {
            query = query.filter(entity::user::Column::Id.ne(id));
        }

        Ok(query.count(self.db).await? > 0)
    }

    /// Checks if any admin users exist in the database.
    ///
    /// # Returns
    /// - `Ok(true)` - At least one admin user exists in the database
    /// - `Ok(false)` - No admin users exist
    /// - `Err(DbErr)` - Database error during count query
    pub async fn admin_exists(&self) -> Result<bool, DbErr> {
        let admin_count = entity::prelude::User::find()
            .filter(entity::user::Column::Role.eq(Role::Admin.as_str()))
            .count(self.db)
            .await?;

        Ok(admin_count > 0)
    }

    /// Gets one page of users matching the filters.
    ///
    /// Users are ordered by the requested sort, then by ID so pages are stable. Without a
    /// sort, users are returned in creation order.
    ///
    /// # Arguments
    /// - `params` - Filters, ordering, one-indexed page and page size
    ///
    /// # Returns
    /// - `Ok((Vec<User>, u64))` - Users on the page and the total number of matching users
    /// - `Err(DbErr)` - Database error during pagination query
    pub async fn query(&self, params: &UserQueryParams) -> Result<(Vec<User>, u64), DbErr> {
        let mut query = entity::prelude::User::find();

        if let Some(name) = &params.name {
            query = query.filter(entity::user::Column::Name.eq(name.as_str()));
        }
        if let Some(role) = params.role {
            query = query.filter(entity::user::Column::Role.eq(role.as_str()));
        }
        if let Some(sort) = params.sort {
            let column = match sort.field {
                UserSortField::Name => entity::user::Column::Name,
                UserSortField::Email => entity::user::Column::Email,
                UserSortField::Role => entity::user::Column::Role,
                UserSortField::CreatedAt => entity::user::Column::CreatedAt,
            };
            let order = if sort.descending { Order::Desc } else { Order::Asc };
            query = query.order_by(column, order);
        }
        query = query.order_by_asc(entity::user::Column::Id);

        let paginator = query.paginate(self.db, params.limit);
        let total = paginator.num_items().await?;
        let users = paginator
            .fetch_page(params.page.saturating_sub(1))
            .await?
            .into_iter()
            .map(User::from_entity)
            .collect::<Result<Vec<_>, _>>()?;

        Ok((users, total))
    }

    /// Applies the set fields of `params` to a user.
    ///
    /// # Arguments
    /// - `id` - User to update
    /// - `params` - Fields to change, `password` is ignored in favour of `password_hash`
    /// - `password_hash` - New PHC string when the password changes
    ///
    /// # Returns
    /// - `Ok(Some(User))` - The updated user
    /// - `Ok(None)` - No user with that ID
    /// - `Err(DbErr)` - Database error during update
    pub async fn update(
        &self,
        id: i32,
        params: UpdateUserParams,
        password_hash: Option<String>,
    ) -> Result<Option<User>, DbErr> {
        let Some(entity) = entity::prelude::User::find_by_id(id).one(self.db).await? else {
            return Ok(None);
        };

        let mut active: entity::user::ActiveModel = entity.into();
        if let Some(name) = params.name {
            active.name = ActiveValue::Set(name);
        }
        if let Some(email) = params.email {
            active.email = ActiveValue::Set(email);
        }
        if let Some(password_hash) = password_hash {
            active.password = ActiveValue::Set(password_hash);
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let entity = active.update(self.db).await?;

        User::from_entity(entity).map(Some)
    }

    /// Deletes a user by ID.
    ///
    /// # Returns
    /// - `Ok(true)` - User deleted
    /// - `Ok(false)` - No user with that ID
    /// - `Err(DbErr)` - Database error during delete
    pub async fn delete(&self, id: i32) -> Result<bool, DbErr> {
        let result = entity::prelude::User::delete_by_id(id).exec(self.db).await?;

        Ok(result.rows_affected > 0)
    }
}
