//! HTTP client and request-info loading for the offboarding wizard.
//!
//! Wraps the drive information API with [`reqwest`], parses the `drive`
//! identifier out of invite-link query strings, and mirrors the
//! load/result/error status of an archive request into a
//! [`loader::RequestInfoState`].

pub mod api;
pub mod loader;
pub mod query;
