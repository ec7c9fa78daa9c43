//! Asset hosting service integration
//!
//! Uploads images by content or by source URL and derives resized
//! delivery URLs.

pub mod client;
pub mod mock;

pub use client::Service;
pub use mock::MockAssetService;

use crate::Result;
use async_trait::async_trait;
use url::Url;

#[async_trait]
pub trait AssetService: Send + Sync {
    async fn upload_image(&self, data: &[u8], file_name: Option<&str>) -> Result<Url>;
    async fn upload_image_url(&self, source: &Url) -> Result<Url>;
    fn resized_image_url(&self, image_url: &Url, width: u32, height: u32) -> Result<Url>;
    async fn delete(&self, public_url: &Url) -> Result<()>;
}
