//! Domain layer for the research drive offboarding wizard.
//!
//! Pure types and logic only: the wire models exchanged with the drive
//! information API, the member classification helpers, the per-session
//! form state with its submission derivation, and the wizard step
//! machine. Network access lives in `resdrive-client`.

pub mod classification;
pub mod drive;
pub mod error;
pub mod form;
pub mod members;
pub mod project;
pub mod roles;
pub mod submission;
pub mod types;
pub mod wizard;
