//! Signed multipart upload requests
//!
//! A [`SignedRequest`] is built fresh for every call and consumed when sent.

use crate::connection::Credentials;
use crate::signing;
use crate::{Error, Result};
use reqwest::multipart::{Form, Part};
use tokio::io::{AsyncRead, AsyncReadExt};
use url::Url;

/// Field name shared by both payload kinds.
pub const FILE_FIELD: &str = "file";

const DEFAULT_FILE_NAME: &str = "file";

#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    File { file_name: String, data: Vec<u8> },
    RemoteUrl(Url),
}

#[derive(Debug)]
pub struct SignedRequest {
    endpoint: Url,
    fields: Vec<(&'static str, String)>,
    payload: Option<Payload>,
}

impl SignedRequest {
    /// Start a request signed for `timestamp` (Unix seconds).
    pub fn new(endpoint: Url, credentials: &Credentials, timestamp: i64) -> Self {
        let timestamp = timestamp.to_string();
        let signature = signing::sign_upload(&timestamp, credentials.api_secret());

        Self {
            endpoint,
            fields: vec![
                ("api_key", credentials.api_key().to_string()),
                ("timestamp", timestamp),
                ("signature", signature),
            ],
            payload: None,
        }
    }

    /// Buffer the whole reader as the file payload.
    pub async fn with_file<R>(mut self, mut data: R, file_name: Option<&str>) -> Result<Self>
    where
        R: AsyncRead + Unpin,
    {
        let mut buf = Vec::new();
        data.read_to_end(&mut buf).await?;

        self.payload = Some(Payload::File {
            file_name: file_name
                .filter(|name| !name.is_empty())
                .unwrap_or(DEFAULT_FILE_NAME)
                .to_string(),
            data: buf,
        });
        Ok(self)
    }

    /// Reference an image the service should fetch itself.
    pub fn with_remote_url(mut self, source: &Url) -> Self {
        self.payload = Some(Payload::RemoteUrl(source.clone()));
        self
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Text fields in the order they are written.
    pub fn fields(&self) -> &[(&'static str, String)] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn payload(&self) -> Option<&Payload> {
        self.payload.as_ref()
    }

    /// Encode into a multipart form. Boundary and content type are applied
    /// by reqwest when the form is attached to a request.
    pub fn into_parts(self) -> Result<(Url, Form)> {
        let mut form = Form::new();
        for (name, value) in self.fields {
            form = form.text(name, value);
        }

        form = match self.payload {
            Some(Payload::File { file_name, data }) => {
                let part = Part::bytes(data)
                    .file_name(file_name)
                    .mime_str("application/octet-stream")
                    .map_err(|e| Error::Encoding(format!("Failed to build file part: {}", e)))?;
                form.part(FILE_FIELD, part)
            }
            Some(Payload::RemoteUrl(source)) => form.text(FILE_FIELD, source.to_string()),
            None => {
                return Err(Error::Encoding(
                    "Upload request has no file payload".to_string(),
                ))
            }
        };

        Ok((self.endpoint, form))
    }
}
