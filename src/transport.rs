//! HTTP transport for signed uploads.

use crate::models::{ErrorResponse, UploadResult};
use crate::request::SignedRequest;
use crate::{Error, Result};
use reqwest::{Client, Response, StatusCode};

pub const CLD_ERROR_HEADER: &str = "X-Cld-Error";

/// POST a signed request and decode the upload response.
pub async fn send_upload(client: &Client, request: SignedRequest) -> Result<UploadResult> {
    let (endpoint, form) = request.into_parts()?;
    tracing::debug!("Uploading to {}", endpoint);

    let response = client
        .post(endpoint.clone())
        .multipart(form)
        .send()
        .await
        .map_err(|e| {
            tracing::error!("Failed to send upload request to {}: {}", endpoint, e);
            e
        })?;

    if response.status() != StatusCode::OK {
        return Err(remote_error(response).await);
    }

    let body = response.text().await?;
    serde_json::from_str(&body).map_err(|e| {
        tracing::error!("Failed to parse upload response: {}\nBody: {}", e, body);
        Error::Decoding(format!("Failed to parse upload response: {}", e))
    })
}

async fn remote_error(response: Response) -> Error {
    let status = status_line(response.status());
    let header_message = response
        .headers()
        .get(CLD_ERROR_HEADER)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);

    let body = response.text().await.unwrap_or_default();
    let body_message = serde_json::from_str::<ErrorResponse>(&body)
        .ok()
        .map(|e| e.error.message);

    let message = body_message.or(header_message);
    tracing::error!(
        "Upload API error (status {}): {}",
        status,
        message.as_deref().unwrap_or(&body)
    );

    Error::RemoteApi { status, message }
}

fn status_line(status: StatusCode) -> String {
    match status.canonical_reason() {
        Some(reason) => format!("{} {}", status.as_u16(), reason),
        None => status.as_u16().to_string(),
    }
}
