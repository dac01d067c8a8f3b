use crate::core::{AppError, Result};
use std::env;
use std::str::FromStr;

pub mod database;
pub mod server;

pub use database::DatabaseConfig;
pub use server::ServerConfig;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub database: DatabaseConfig,
    pub server: ServerConfig,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: String,
    pub log_level: String,
    pub creation_mode: CreationMode,
}

/// Which employee creation strategy the service is wired with.
///
/// Exactly one strategy is active per process; the stored-procedure variants
/// differ only in how the generated identifier is read back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreationMode {
    /// Plain INSERT, identifier from the driver's last-insert-id
    Direct,
    /// CALL sp_insert_employee and map the single returned row
    ProcedureRow,
    /// CALL sp_insert_employee_out and read the identifier output parameter
    ProcedureOut,
}

impl FromStr for CreationMode {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "direct" => Ok(CreationMode::Direct),
            "procedure-row" => Ok(CreationMode::ProcedureRow),
            "procedure-out" => Ok(CreationMode::ProcedureOut),
            other => Err(AppError::Configuration(format!(
                "Invalid EMPLOYEE_CREATION_STRATEGY '{}' (expected direct, procedure-row, or procedure-out)",
                other
            ))),
        }
    }
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let config = Config {
            app: AppConfig {
                env: env::var("APP_ENV").unwrap_or_else(|_| "development".to_string()),
                log_level: env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
                creation_mode: env::var("EMPLOYEE_CREATION_STRATEGY")
                    .unwrap_or_else(|_| "direct".to_string())
                    .parse()?,
            },
            database: DatabaseConfig::from_env()?,
            server: ServerConfig::from_env()?,
        };

        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.database.max_connections == 0 {
            return Err(AppError::Configuration(
                "DATABASE_MAX_CONNECTIONS must be greater than 0".to_string(),
            ));
        }

        if self.server.port == 0 {
            return Err(AppError::Configuration(
                "SERVER_PORT must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}
