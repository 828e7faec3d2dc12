// src/config.rs

use crate::errors::{AppError, Result};
use dotenvy::dotenv;
use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
  pub server_host: String,
  pub server_port: u16,
  pub database_url: String,

  // Apply seed.sql on startup (sample catalog data for development).
  pub seed_db: bool,
}

impl AppConfig {
  pub fn from_env() -> Result<Self> {
    dotenv().ok(); // Load .env file if present

    let get_env = |var_name: &str| {
      env::var(var_name).map_err(|e| AppError::Config(format!("Missing environment variable '{}': {}", var_name, e)))
    };

    let server_host = get_env("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
    let server_port = get_env("SERVER_PORT")
      .unwrap_or_else(|_| "8080".to_string())
      .parse::<u16>()
      .map_err(|e| AppError::Config(format!("Invalid SERVER_PORT: {}", e)))?;
    let database_url = get_env("DATABASE_URL")?;

    let seed_db = get_env("SEED_DB")
      .unwrap_or_else(|_| "false".to_string())
      .parse::<bool>()
      .map_err(|e| AppError::Config(format!("Invalid SEED_DB value: {}", e)))?;

    tracing::info!("Application configuration loaded successfully.");

    Ok(Self {
      server_host,
      server_port,
      database_url,
      seed_db,
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use serial_test::serial;

  fn clear_env() {
    for var in ["SERVER_HOST", "SERVER_PORT", "DATABASE_URL", "SEED_DB"] {
      env::remove_var(var);
    }
  }

  #[test]
  #[serial]
  fn database_url_is_required() {
    clear_env();
    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
  }

  #[test]
  #[serial]
  fn defaults_apply_when_optional_vars_are_missing() {
    clear_env();
    env::set_var("DATABASE_URL", "postgres://localhost/mealcart");
    let cfg = AppConfig::from_env().unwrap();
    assert_eq!(cfg.server_host, "127.0.0.1");
    assert_eq!(cfg.server_port, 8080);
    assert!(!cfg.seed_db);
    clear_env();
  }

  #[test]
  #[serial]
  fn invalid_port_is_a_config_error() {
    clear_env();
    env::set_var("DATABASE_URL", "postgres://localhost/mealcart");
    env::set_var("SERVER_PORT", "not-a-port");
    let err = AppConfig::from_env().unwrap_err();
    assert!(matches!(err, AppError::Config(_)));
    clear_env();
  }
}
