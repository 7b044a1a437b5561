//! `resdrive-cli` -- fetch and print archive request information.
//!
//! Given an invite URL (the link a drive owner receives), resolves the
//! drive identifier, loads the project and drive snapshot from the drive
//! information API, and prints the confirmation summary the wizard would
//! show.
//!
//! # Environment variables
//!
//! | Variable       | Required | Default                 | Description                  |
//! |----------------|----------|-------------------------|------------------------------|
//! | `API_BASE_URL` | no       | `http://localhost:8000` | Drive information API base   |
//!
//! # Usage
//!
//! ```text
//! resdrive-cli "https://archive.example.org/?drive=reslig-202200001"
//! ```

use resdrive_client::api::DriveInfoApi;
use resdrive_client::loader::{load_request_info, RequestInfoState};
use resdrive_client::query::RequestQuery;
use resdrive_core::members::{members_to_string, project_members, project_owners};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Default API base when `API_BASE_URL` is unset.
const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "resdrive_cli=info,resdrive_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let invite_url = std::env::args().nth(1).unwrap_or_else(|| {
        tracing::error!("Usage: resdrive-cli <invite-url>");
        std::process::exit(2);
    });

    let query = RequestQuery::from_url(&invite_url).unwrap_or_else(|e| {
        tracing::error!(error = %e, "Invite URL could not be parsed");
        std::process::exit(2);
    });

    let base_url =
        std::env::var("API_BASE_URL").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());
    let api = DriveInfoApi::new(base_url);

    let mut state = RequestInfoState::new();
    if !load_request_info(&api, &query, &mut state).await {
        // The loader has already logged the failure detail.
        std::process::exit(1);
    }

    // Both are present after a successful load.
    let Some(project) = state.project else {
        std::process::exit(1);
    };
    let Some(drive) = state.drive else {
        std::process::exit(1);
    };

    println!("Project:        {}", project.title);
    println!("Division:       {}", project.division);
    println!(
        "Period:         {} to {}",
        project.start_date.date_naive(),
        project.end_date.date_naive()
    );
    println!(
        "Owners:         {}",
        members_to_string(project_owners(&project.members))
    );
    println!(
        "Members:        {}",
        members_to_string(project_members(&project.members))
    );
    println!("Drive:          {}", drive.name);
    println!(
        "Usage:          {:.1} GB of {:.1} GB ({:.1}% used, {:.1} GB free)",
        drive.used_gb, drive.allocated_gb, drive.percentage_used, drive.free_gb
    );
}
