//! Client for the Cloudinary image hosting API
//!
//! Parses `cloudinary://` connection strings, uploads images by content or by
//! source URL with signed multipart requests, and rewrites delivery URLs to
//! request resized variants.

pub mod connection;
pub mod error;
pub mod models;
pub mod request;
pub mod resize;
pub mod service;
pub mod signing;
pub mod transport;

pub use connection::Credentials;
pub use error::{Error, Result};
pub use models::{Config, UploadResult};
pub use service::{AssetService, MockAssetService, Service};
