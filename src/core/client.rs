// src/core/client.rs

use crate::config::Config;
use crate::core::models::ScanResult;
use crate::errors::ScanError;
use reqwest::multipart::{Form, Part};
use serde_json::Value;
use std::path::Path;
use tracing::{debug, info, warn};
use url::Url;

/// Pulls a failure message out of a response body, if it carries one.
type MessageExtractor = fn(&Value) -> Option<String>;

/// Tried in order; the first extractor returning a message wins.
const MESSAGE_EXTRACTORS: [MessageExtractor; 3] = [error_field, message_field, detail_field];

fn error_field(body: &Value) -> Option<String> {
    text_field(body, "error")
}

fn message_field(body: &Value) -> Option<String> {
    text_field(body, "message")
}

fn detail_field(body: &Value) -> Option<String> {
    text_field(body, "detail")
}

/// A field counts as a message when it is present, not null and not
/// blank. Non-string values are rendered as JSON.
fn text_field(body: &Value, key: &str) -> Option<String> {
    match body.get(key)? {
        Value::Null => None,
        Value::String(s) if s.trim().is_empty() => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

pub fn reported_failure(body: &Value) -> Option<String> {
    MESSAGE_EXTRACTORS.iter().find_map(|extract| extract(body))
}

pub fn status_fallback(status: u16) -> String {
    format!("Request failed (HTTP {status})")
}

/// Turns a raw response into a result or an application-level failure.
///
/// A body that does not parse as JSON is a `Decode` error. Any status
/// outside 200-299 or any message-like field makes the response a
/// `Rejected` failure.
pub fn classify_response(status: u16, body: &[u8]) -> Result<ScanResult, ScanError> {
    let value: Value = serde_json::from_slice(body)?;
    let success = (200..300).contains(&status);
    let reported = reported_failure(&value);

    if !success || reported.is_some() {
        let message = reported.unwrap_or_else(|| status_fallback(status));
        return Err(ScanError::Rejected { status, message });
    }

    Ok(serde_json::from_value(value)?)
}

/// Uploads files to the scanning backend, one request per submit.
#[derive(Debug, Clone)]
pub struct ScanClient {
    http: reqwest::Client,
    endpoint: Url,
    field_name: String,
    max_upload_bytes: u64,
    max_upload_mb: u64,
}

impl ScanClient {
    pub fn new(config: &Config) -> Result<Self, ScanError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("ScanView/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint: config.endpoint.clone(),
            field_name: config.field_name.clone(),
            max_upload_bytes: config.max_upload_bytes(),
            max_upload_mb: config.max_upload_mb,
        })
    }

    /// Sends `path` to the backend and classifies the answer.
    ///
    /// # Arguments
    /// * `path` - The selected file. Its name is sent as the part's file name.
    ///
    /// # Returns
    /// The parsed `ScanResult`, or the `ScanError` to show the user.
    pub async fn submit(&self, path: &Path) -> Result<ScanResult, ScanError> {
        let io_error = |source: std::io::Error| ScanError::Io { path: path.to_path_buf(), source };

        let size = tokio::fs::metadata(path).await.map_err(io_error)?.len();
        if size > self.max_upload_bytes {
            warn!(path = %path.display(), size, limit_mb = self.max_upload_mb, "File exceeds upload limit.");
            return Err(ScanError::TooLarge { size, limit_mb: self.max_upload_mb });
        }
        let bytes = tokio::fs::read(path).await.map_err(io_error)?;

        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());
        let mime = mime_guess::from_path(path).first_or_octet_stream();
        debug!(file_name = %file_name, mime = %mime, size, "Building multipart payload.");

        let part = Part::bytes(bytes).file_name(file_name).mime_str(mime.essence_str())?;
        let form = Form::new().part(self.field_name.clone(), part);

        info!(endpoint = %self.endpoint, "Sending scan request.");
        let response = self.http.post(self.endpoint.clone()).multipart(form).send().await?;
        let status = response.status().as_u16();
        let body = response.bytes().await?;
        info!(status, bytes = body.len(), "Received scan response.");

        classify_response(status, &body)
    }
}
