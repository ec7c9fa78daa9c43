//! Error handling and custom error types
//!
//! Every failure is handed back to the caller; nothing here retries.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Encoding error: {0}")]
    Encoding(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Request error: {status}{}", cld_suffix(.message))]
    RemoteApi {
        status: String,
        message: Option<String>,
    },

    #[error("Decoding error: {0}")]
    Decoding(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;

fn cld_suffix(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(" Cld Err: {}", m),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remote_api_display_with_message() {
        let err = Error::RemoteApi {
            status: "400 Bad Request".to_string(),
            message: Some("Invalid Signature".to_string()),
        };
        assert_eq!(
            err.to_string(),
            "Request error: 400 Bad Request Cld Err: Invalid Signature"
        );
    }

    #[test]
    fn test_remote_api_display_without_message() {
        let err = Error::RemoteApi {
            status: "502 Bad Gateway".to_string(),
            message: None,
        };
        assert_eq!(err.to_string(), "Request error: 502 Bad Gateway");
    }
}
