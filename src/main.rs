mod model;
mod server;

use tracing_subscriber::EnvFilter;

use crate::server::{
    config::Config, error::AppError, router, startup, state::AppState,
};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::check_for_admin(&db, &config).await?;

    let app = router::router(config.app_env).with_state(AppState::new(db, config.tokens));

    let listener = tokio::net::TcpListener::bind(config.address()).await?;
    tracing::info!("Listening on {} ({:?})", config.address(), config.app_env);

    axum::serve(listener, app).await?;

    Ok(())
}
