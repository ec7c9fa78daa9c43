use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

// Upload response

/// Fields of the upload response callers care about.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UploadResult {
    #[serde(default)]
    pub public_id: String,
    pub secure_url: Url,
    #[serde(default)]
    pub version: u64,
    #[serde(default)]
    pub format: String,
    /// "image" or "raw"
    #[serde(default)]
    pub resource_type: String,
    #[serde(default, rename = "bytes")]
    pub size: u64,
}

// Error response: {"error":{"message":"Missing required parameter - public_id"}}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorResponse {
    pub error: ErrorBody,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    pub message: String,
}

// Configuration

pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

#[derive(Debug, Clone)]
pub struct Config {
    pub connection_url: String,
    pub timeout: Duration,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Build a config from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let connection_url = lookup("CLOUDINARY_URL")
            .ok_or_else(|| Error::Configuration("CLOUDINARY_URL not set".to_string()))?;

        let timeout = match lookup("CLOUDINARY_TIMEOUT_SECS") {
            Some(raw) => {
                let secs: u64 = raw.trim().parse().map_err(|_| {
                    Error::Configuration(format!(
                        "CLOUDINARY_TIMEOUT_SECS must be a positive integer, got '{}'",
                        raw
                    ))
                })?;
                if secs == 0 {
                    return Err(Error::Configuration(
                        "CLOUDINARY_TIMEOUT_SECS must be greater than zero".to_string(),
                    ));
                }
                Duration::from_secs(secs)
            }
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self {
            connection_url,
            timeout,
        })
    }
}
