//! REST plumbing for the dispenser backend.
//!
//! `ApiClient` performs the actual HTTP calls; the `Transport` trait is the
//! seam the stores talk through, and `ApiError` is the failure taxonomy
//! shared by every call.

pub mod client;
pub mod error;

pub use client::{ApiClient, Transport};
pub use error::ApiError;
