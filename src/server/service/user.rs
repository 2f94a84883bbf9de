//! User service for business logic.
//!
//! This module provides the `UserService` for account management. It enforces email
//! uniqueness, hashes passwords before they reach the repository and removes a user's
//! tokens when the user is deleted.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{token::TokenRepository, user::UserRepository},
    error::AppError,
    model::user::{CreateUserParams, PaginatedUsers, UpdateUserParams, User, UserQueryParams},
    util::password,
};

pub const USER_NOT_FOUND: &str = "User not found";
pub const EMAIL_TAKEN: &str = "Email already taken";

/// Service providing business logic for user management.
pub struct UserService<'a> {
    pub db: &'a DatabaseConnection,
}

impl<'a> UserService<'a> {
    /// Creates a new UserService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    ///
    /// # Returns
    /// - `UserService` - New service instance
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a user after checking that the email is free.
    ///
    /// # Arguments
    /// - `params` - Trimmed user fields, plain-text password and role
    ///
    /// # Returns
    /// - `Ok(User)` - The created user
    /// - `Err(AppError::BadRequest)` - Email already taken
    /// - `Err(AppError::DbErr)` - Database error
    pub async fn create(&self, params: CreateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.email_taken(&params.email, None).await? {
            return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
        }

        let password_hash = password::hash(&params.password)?;
        let user = user_repo.create(&params, password_hash).await?;

        Ok(user)
    }

    /// Retrieves one page of users.
    ///
    /// # Arguments
    /// - `params` - Filters, ordering, one-indexed page and page size
    ///
    /// # Returns
    /// - `Ok(PaginatedUsers)` - Users for the requested page with pagination metadata
    /// - `Err(AppError::DbErr)` - Database error during pagination query
    pub async fn query(&self, params: UserQueryParams) -> Result<PaginatedUsers, AppError> {
        let user_repo = UserRepository::new(self.db);

        let (results, total_results) = user_repo.query(&params).await?;
        let total_pages = total_results.div_ceil(params.limit);

        Ok(PaginatedUsers {
            results,
            page: params.page,
            limit: params.limit,
            total_pages,
            total_results,
        })
    }

    /// Retrieves a user by ID.
    ///
    /// # Returns
    /// - `Ok(User)` - The user
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn get_by_id(&self, id: i32) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Updates a user.
    ///
    /// # Arguments
    /// - `id` - User to update
    /// - `params` - Fields to change
    ///
    /// # Returns
    /// - `Ok(User)` - The updated user
    /// - `Err(AppError::NotFound)` - No user with that ID
    /// - `Err(AppError::BadRequest)` - Email already used by another user
    pub async fn update(&self, id: i32, params: UpdateUserParams) -> Result<User, AppError> {
        let user_repo = UserRepository::new(self.db);

        if user_repo.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        if let Some(email) = &params.email {
            if user_repo.email_taken(email, Some(id)).await? {
                return Err(AppError::BadRequest(EMAIL_TAKEN.to_string()));
            }
        }

        let password_hash = match &params.password {
            Some(password) => Some(password::hash(password)?),
            None => None,
        };

        user_repo
            .update(id, params, password_hash)
            .await?
            .ok_or_else(|| AppError::NotFound(USER_NOT_FOUND.to_string()))
    }

    /// Deletes a user and every token it owns.
    ///
    /// # Returns
    /// - `Ok(())` - User deleted
    /// - `Err(AppError::NotFound)` - No user with that ID
    pub async fn delete(&self, id: i32) -> Result<(), AppError> {
        let user_repo = UserRepository::new(self.db);

        if !user_repo.delete(id).await? {
            return Err(AppError::NotFound(USER_NOT_FOUND.to_string()));
        }

        TokenRepository::new(self.db).delete_by_user(id).await?;

        Ok(())
    }

    /// Checks if at least one admin account exists.
    pub async fn admin_exists(&self) -> Result<bool, AppError> {
        let user_repo = UserRepository::new(self.db);

        Ok(user_repo.admin_exists().await?)
    }
}
