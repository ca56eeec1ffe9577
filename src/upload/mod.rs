//! BOM upload to a Dependency-Track compatible inventory server.
//!
//! One invocation performs one blocking HTTPS PUT: read the BOM file,
//! base64-encode it into a JSON body, send it with the API key header,
//! and classify the response. No retries.

pub mod payload;

use crate::shared::error::BomshipError;
use crate::shared::Result;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use std::path::PathBuf;
use std::time::Duration;

/// A single BOM upload invocation.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    /// Location of the BOM document to send.
    pub bom_file: PathBuf,
    /// Destination endpoint, e.g. `https://dtrack.example/api/v1/bom`.
    pub uri: String,
    /// Credential sent as the `X-Api-Key` header.
    pub api_key: String,
    /// Opaque project identifier included in the payload.
    pub project_id: String,
    /// Accept any server certificate. Insecure; only for internal
    /// self-signed endpoints, never the default.
    pub trust_all: bool,
    /// Downgrade a non-200 response from fatal to a warning. Does not
    /// apply to local I/O or transport failures.
    pub ignore_failures: bool,
}

/// Outcome of a completed upload call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UploadOutcome {
    /// The server answered HTTP 200.
    Success,
    /// The server rejected the BOM but `ignore_failures` was set.
    Warning(String),
}

/// Blocking HTTP client for the BOM upload.
///
/// Talks HTTP/1.1 only and bounds every call with a fixed timeout so a
/// hung server cannot stall the build indefinitely.
pub struct BomUploader {
    client: Client,
}

impl BomUploader {
    const TIMEOUT_SECONDS: u64 = 30;
    /// Response bodies are truncated to this many characters in error
    /// messages.
    const MAX_ERROR_BODY_CHARS: usize = 80;

    /// Creates an uploader. `trust_all` disables certificate
    /// validation for the explicitly insecure opt-in mode.
    pub fn new(trust_all: bool) -> Result<Self> {
        let version = env!("CARGO_PKG_VERSION");
        let user_agent = format!("bomship/{}", version);
        let mut builder = Client::builder()
            .http1_only()
            .timeout(Duration::from_secs(Self::TIMEOUT_SECONDS))
            .user_agent(user_agent);
        if trust_all {
            builder = builder.danger_accept_invalid_certs(true);
        }
        let client = builder.build()?;

        Ok(Self { client })
    }

    /// Uploads the BOM and classifies the response.
    ///
    /// # Errors
    /// - [`BomshipError::BomRead`] if the BOM file cannot be read;
    ///   checked before any network traffic.
    /// - [`BomshipError::Transport`] on connection, DNS, TLS or
    ///   timeout failures, regardless of `ignore_failures`.
    /// - [`BomshipError::RemoteRejected`] on a non-200 response unless
    ///   `ignore_failures` downgrades it to a warning.
    pub fn upload(&self, request: &UploadRequest) -> Result<UploadOutcome> {
        let body = payload::build_payload(&request.bom_file, &request.project_id)?;

        let response = self
            .client
            .put(&request.uri)
            .header("X-Api-Key", &request.api_key)
            .header("Content-Type", "application/json")
            .body(body)
            .send()
            .map_err(|e| BomshipError::Transport {
                details: e.to_string(),
            })?;

        let status = response.status();
        if status == StatusCode::OK {
            eprintln!("✅ BOM upload to {} successful", request.uri);
            return Ok(UploadOutcome::Success);
        }

        if request.ignore_failures {
            let reason = format!("server returned status {}", status.as_u16());
            eprintln!("⚠️  Warning: BOM upload failed ({}). Failure ignored.", reason);
            return Ok(UploadOutcome::Warning(reason));
        }

        let body = response.text().unwrap_or_default();
        Err(BomshipError::RemoteRejected {
            status: status.as_u16(),
            body: truncate_chars(&body, Self::MAX_ERROR_BODY_CHARS),
        }
        .into())
    }
}

/// Truncates on character boundaries so multi-byte content cannot
/// panic a slice.
fn truncate_chars(text: &str, max_chars: usize) -> String {
    text.chars().take(max_chars).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_short_body_is_unchanged() {
        assert_eq!(truncate_chars("bad request", 80), "bad request");
    }

    #[test]
    fn test_truncate_long_body_to_80_chars() {
        let body = "x".repeat(500);
        let truncated = truncate_chars(&body, 80);
        assert_eq!(truncated.chars().count(), 80);
    }

    #[test]
    fn test_truncate_multibyte_body() {
        let body = "ボム".repeat(100);
        let truncated = truncate_chars(&body, 80);
        assert_eq!(truncated.chars().count(), 80);
    }

    #[test]
    fn test_uploader_builds_in_both_tls_modes() {
        assert!(BomUploader::new(false).is_ok());
        assert!(BomUploader::new(true).is_ok());
    }
}
