use std::str::FromStr;

use chrono::Duration;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ACCESS_TOKEN_EXPIRATION_MINUTES: i64 = 30;
const DEFAULT_REFRESH_TOKEN_EXPIRATION_DAYS: i64 = 30;

/// Deployment environment selected by `APP_ENV`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppEnv {
    Development,
    #[default]
    Production,
    Test,
}

impl AppEnv {
    /// Swagger UI and the database reset route are only mounted in development.
    pub fn is_development(&self) -> bool {
        matches!(self, AppEnv::Development)
    }
}

impl FromStr for AppEnv {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "development" => Ok(AppEnv::Development),
            "production" => Ok(AppEnv::Production),
            "test" => Ok(AppEnv::Test),
            _ => Err("expected development, production or test".to_string()),
        }
    }
}

/// Lifetimes of issued bearer tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenSettings {
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl Default for TokenSettings {
    fn default() -> Self {
        Self {
            access_ttl: Duration::minutes(DEFAULT_ACCESS_TOKEN_EXPIRATION_MINUTES),
            refresh_ttl: Duration::days(DEFAULT_REFRESH_TOKEN_EXPIRATION_DAYS),
        }
    }
}

/// Credentials of the admin account created at startup when no admin exists.
#[derive(Debug, Clone)]
pub struct AdminSeed {
    pub email: String,
    pub password: String,
}

pub struct Config {
    pub database_url: String,
    pub app_env: AppEnv,

    pub host: String,
    pub port: u16,

    pub tokens: TokenSettings,
    pub admin_seed: Option<AdminSeed>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let admin_seed = match (optional_var("ADMIN_EMAIL"), optional_var("ADMIN_PASSWORD")) {
            (Some(email), Some(password)) => Some(AdminSeed { email, password }),
            _ => None,
        };

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")
                .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?,
            app_env: parse_var("APP_ENV", AppEnv::default())?,
            host: optional_var("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_var("PORT", DEFAULT_PORT)?,
            tokens: TokenSettings {
                access_ttl: Duration::minutes(parse_var(
                    "ACCESS_TOKEN_EXPIRATION_MINUTES",
                    DEFAULT_ACCESS_TOKEN_EXPIRATION_MINUTES,
                )?),
                refresh_ttl: Duration::days(parse_var(
                    "REFRESH_TOKEN_EXPIRATION_DAYS",
                    DEFAULT_REFRESH_TOKEN_EXPIRATION_DAYS,
                )?),
            },
            admin_seed,
        })
    }

    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn optional_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.trim().is_empty())
}

/// Reads and parses an optional variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match optional_var(name) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: name.to_string(),
                value,
                reason: e.to_string(),
            }),
        None => Ok(default),
    }
}
