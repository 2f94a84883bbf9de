use sea_orm::DatabaseConnection;

use crate::server::{
    config::Config,
    error::AppError,
    model::{role::Role, user::CreateUserParams},
    service::user::UserService,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool to the Sqlite database using the connection string from
/// configuration, then automatically runs all pending SeaORM migrations to ensure the database
/// schema is up-to-date. This function must complete successfully before the application can
/// access the database.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(Error)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the configured admin account when the database has no admin yet.
///
/// Uses `ADMIN_EMAIL` and `ADMIN_PASSWORD` from configuration. Without them a warning
/// is logged when no admin exists, since user management is then unreachable until
/// an admin is created by other means.
///
/// # Arguments
/// - `db` - Database connection
/// - `config` - Application configuration carrying the optional admin credentials
///
/// # Returns
/// - `Ok(())` - An admin already exists, was created, or no credentials were configured
/// - `Err(AppError)` - Database error or the configured email belongs to another user
pub async fn check_for_admin(db: &DatabaseConnection, config: &Config) -> Result<(), AppError> {
    let user_service = UserService::new(db);

    if user_service.admin_exists().await? {
        return Ok(());
    }

    let Some(seed) = config.admin_seed.as_ref() else {
        tracing::warn!("No admin user exists, set ADMIN_EMAIL and ADMIN_PASSWORD to create one");
        return Ok(());
    };

    let admin = user_service
        .create(CreateUserParams {
            name: "Admin".to_string(),
            email: seed.email.trim().to_lowercase(),
            password: seed.password.clone(),
            role: Role::Admin,
        })
        .await?;

    tracing::info!("Created admin user {} ({})", admin.id, admin.email);

    Ok(())
}
