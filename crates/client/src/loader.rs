//! Loading the archive request information shown for confirmation.
//!
//! [`load_request_info`] fetches the project and its primary drive and
//! mirrors the outcome into a [`RequestInfoState`]. Failures are captured
//! in the state rather than propagated: the caller gets a plain `bool`
//! and decides whether to re-invoke. Nothing here retries.

use async_trait::async_trait;

use resdrive_core::drive::ResearchDriveService;
use resdrive_core::project::ProjectWithDriveMember;

use crate::api::{ApiError, DriveInfoApi};
use crate::query::RequestQuery;

/// Capability seam over the drive information fetch, so the loader can
/// be exercised against stubs.
#[async_trait]
pub trait FetchDriveInfo {
    async fn fetch_drive_info(&self, drive_id: &str)
        -> Result<ProjectWithDriveMember, ApiError>;
}

#[async_trait]
impl FetchDriveInfo for DriveInfoApi {
    async fn fetch_drive_info(
        &self,
        drive_id: &str,
    ) -> Result<ProjectWithDriveMember, ApiError> {
        self.get_drive_info(drive_id).await
    }
}

/// Failure taxonomy for a request-info load.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The invite link carried no `drive` query parameter.
    #[error("No drive name found in request parameters")]
    MissingParameter,

    /// The drive information API reported a failure or returned no
    /// usable payload.
    #[error("Failed to fetch drive information: {0}")]
    Fetch(#[from] ApiError),

    /// The loaded project has no research drive attached.
    #[error("Project has no research drive attached")]
    NoDrive,
}

/// Load status and results for the read-only archive request view.
///
/// One per wizard session. A successful load fills `project` and `drive`;
/// a failed load leaves any already-assigned field in place and records
/// the failure in `error`. Single logical caller assumed: nothing guards
/// against overlapping loads.
#[derive(Debug, Default)]
pub struct RequestInfoState {
    pub is_loading: bool,
    pub error: Option<LoadError>,
    pub project: Option<ProjectWithDriveMember>,
    pub drive: Option<ResearchDriveService>,
}

impl RequestInfoState {
    /// Empty state for a new session.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Resolve the drive identifier from the invite link and fetch the
/// project information for it.
async fn fetch_project<F>(
    api: &F,
    query: &RequestQuery,
) -> Result<ProjectWithDriveMember, LoadError>
where
    F: FetchDriveInfo + Sync,
{
    let drive_id = query.drive_id().ok_or(LoadError::MissingParameter)?;
    Ok(api.fetch_drive_info(drive_id).await?)
}

/// Fetch the primary drive for the request.
///
/// Re-fetches the project and takes the first attached drive, matching
/// the upstream API's contract that the relevant drive is listed first.
async fn fetch_drive<F>(api: &F, query: &RequestQuery) -> Result<ResearchDriveService, LoadError>
where
    F: FetchDriveInfo + Sync,
{
    let project = fetch_project(api, query).await?;
    project
        .research_drives
        .into_iter()
        .next()
        .ok_or(LoadError::NoDrive)
}

/// Retrieve archive request information and mirror it into `state`.
///
/// Returns `true` when both the project and its primary drive were
/// loaded. On failure the error lands in `state.error`, a diagnostic is
/// emitted, and `false` is returned; fields assigned before the failure
/// are not rolled back. `is_loading` is true for the whole duration and
/// receives its final value exactly once, at the end of either path.
pub async fn load_request_info<F>(
    api: &F,
    query: &RequestQuery,
    state: &mut RequestInfoState,
) -> bool
where
    F: FetchDriveInfo + Sync,
{
    state.is_loading = true;

    let outcome: Result<(), LoadError> = async {
        let project = fetch_project(api, query).await?;
        state.project = Some(project);
        let drive = fetch_drive(api, query).await?;
        state.drive = Some(drive);
        Ok(())
    }
    .await;

    match outcome {
        Ok(()) => {
            // A successful load supersedes any earlier failed attempt.
            state.error = None;
            state.is_loading = false;
            true
        }
        Err(err) => {
            state.is_loading = false;
            tracing::error!(error = %err, "Could not retrieve request information. Bad invite link?");
            state.error = Some(err);
            false
        }
    }
}
