use std::{env, fmt::Display, path::PathBuf, str::FromStr};

use tracing::{info, warn};

use crate::error::AppError;

pub const BIND_HOST: &str = "0.0.0.0";

pub struct Config {
    pub port: u16,
    pub upload_dir: PathBuf,
    pub static_dir: PathBuf,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn load() -> Result<Self, AppError> {
        Ok(Self {
            port: try_load("RUST_PORT", "5000")?,
            upload_dir: try_load("UPLOAD_DIR", "static/uploads")?,
            static_dir: try_load("STATIC_DIR", "static")?,
            max_upload_bytes: try_load("MAX_UPLOAD_BYTES", "33554432")?,
        })
    }

    pub fn address(&self) -> String {
        format!("{BIND_HOST}:{}", self.port)
    }
}

fn try_load<T: FromStr>(key: &str, default: &str) -> Result<T, AppError>
where
    T::Err: Display,
{
    env::var(key)
        .unwrap_or_else(|_| {
            info!("{key} not set, using default: {default}");
            default.to_string()
        })
        .parse()
        .map_err(|e| {
            warn!("Invalid {key} value: {e}");
            AppError::Config(format!("{key}: {e}"))
        })
}
