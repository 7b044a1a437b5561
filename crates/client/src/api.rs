//! REST client for the drive information API.
//!
//! Wraps the two endpoints the wizard talks to (drive info retrieval and
//! offboarding submission) using [`reqwest`].

use resdrive_core::project::ProjectWithDriveMember;
use resdrive_core::submission::DriveOffboardSubmission;

/// Path of the drive information endpoint.
pub const DRIVE_INFO_PATH: &str = "/api/v1/resdriveinfo";

/// Path of the offboarding submission endpoint.
pub const SUBMISSION_PATH: &str = "/api/v1/submission";

/// HTTP client for one drive information API instance.
pub struct DriveInfoApi {
    client: reqwest::Client,
    base_url: String,
}

/// Errors from the drive information API layer.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The HTTP request itself failed (network, DNS, TLS), or a success
    /// response carried no decodable payload.
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The API returned a non-2xx status code.
    #[error("Drive API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },
}

impl DriveInfoApi {
    /// Create a new API client.
    ///
    /// * `base_url` - Base HTTP URL, e.g. `http://localhost:8000`.
    pub fn new(base_url: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url,
        }
    }

    /// Create an API client reusing an existing [`reqwest::Client`].
    pub fn with_client(client: reqwest::Client, base_url: String) -> Self {
        Self { client, base_url }
    }

    /// Base HTTP URL this client targets.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch the project, drives, and members associated with a drive.
    ///
    /// Sends `GET {base}/api/v1/resdriveinfo?drive_id=...`.
    pub async fn get_drive_info(
        &self,
        drive_id: &str,
    ) -> Result<ProjectWithDriveMember, ApiError> {
        let response = self
            .client
            .get(format!("{}{DRIVE_INFO_PATH}", self.base_url))
            .query(&[("drive_id", drive_id)])
            .send()
            .await?;

        Self::parse_response(response).await
    }

    /// Submit a completed offboarding request.
    ///
    /// Sends `POST {base}/api/v1/submission` with the payload as JSON.
    pub async fn submit_offboarding(
        &self,
        submission: &DriveOffboardSubmission,
    ) -> Result<(), ApiError> {
        let response = self
            .client
            .post(format!("{}{SUBMISSION_PATH}", self.base_url))
            .json(submission)
            .send()
            .await?;

        Self::check_status(response).await
    }

    // ---- private helpers ----

    /// Ensure the response has a success status code. Returns the
    /// response unchanged on success, or an [`ApiError::Api`] containing
    /// the status and body text on failure.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, ApiError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ApiError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }

    /// Parse a successful JSON response body into the expected type.
    async fn parse_response<T: serde::de::DeserializeOwned>(
        response: reqwest::Response,
    ) -> Result<T, ApiError> {
        let response = Self::ensure_success(response).await?;
        Ok(response.json::<T>().await?)
    }

    /// Assert the response has a success status code, discarding the body.
    async fn check_status(response: reqwest::Response) -> Result<(), ApiError> {
        Self::ensure_success(response).await?;
        Ok(())
    }
}
