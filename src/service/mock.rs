use super::AssetService;
use crate::{resize, Error, Result};
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use url::Url;

/// In-memory stand-in for [`super::Service`].
#[derive(Clone)]
pub struct MockAssetService {
    uploads: Arc<Mutex<HashMap<String, Vec<u8>>>>,
    remote_sources: Arc<Mutex<Vec<Url>>>,
    base_url: String,
    upload_count: Arc<Mutex<usize>>,
}

impl MockAssetService {
    pub fn new() -> Self {
        Self {
            uploads: Arc::new(Mutex::new(HashMap::new())),
            remote_sources: Arc::new(Mutex::new(Vec::new())),
            base_url: "https://res.cloudinary.com/mock/image/upload".to_string(),
            upload_count: Arc::new(Mutex::new(0)),
        }
    }

    pub fn with_base_url(mut self, base_url: String) -> Self {
        self.base_url = base_url;
        self
    }

    pub fn get_upload_count(&self) -> usize {
        *self.upload_count.lock().unwrap()
    }

    pub fn get_uploads(&self) -> HashMap<String, Vec<u8>> {
        self.uploads.lock().unwrap().clone()
    }

    pub fn get_remote_sources(&self) -> Vec<Url> {
        self.remote_sources.lock().unwrap().clone()
    }

    fn next_url(&self, public_id: &str) -> Result<Url> {
        let mut count = self.upload_count.lock().unwrap();
        *count += 1;

        let raw = format!("{}/v{}/{}", self.base_url, *count, public_id);
        Url::parse(&raw).map_err(|e| Error::Decoding(format!("Invalid mock URL {}: {}", raw, e)))
    }
}

impl Default for MockAssetService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AssetService for MockAssetService {
    async fn upload_image(&self, data: &[u8], file_name: Option<&str>) -> Result<Url> {
        let name = file_name.unwrap_or("file").to_string();
        let url = self.next_url(&name)?;
        self.uploads.lock().unwrap().insert(name, data.to_vec());
        Ok(url)
    }

    async fn upload_image_url(&self, source: &Url) -> Result<Url> {
        let name = source
            .path_segments()
            .and_then(|mut segments| segments.next_back())
            .filter(|s| !s.is_empty())
            .unwrap_or("remote")
            .to_string();
        let url = self.next_url(&name)?;
        self.remote_sources.lock().unwrap().push(source.clone());
        Ok(url)
    }

    fn resized_image_url(&self, image_url: &Url, width: u32, height: u32) -> Result<Url> {
        resize::resized_image_url(image_url, width, height)
    }

    async fn delete(&self, _public_url: &Url) -> Result<()> {
        Err(Error::NotImplemented("delete"))
    }
}
