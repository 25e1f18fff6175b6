//! # shopcheck-core
//!
//! Core types for shopcheck, a headless-browser verification tool for the
//! storefront UI.
//!
//! The verification run is a fixed linear sequence (navigate, switch the UI
//! language to English, assert the product grid or its empty state, click
//! "Add to Cart" if present), so the only shared vocabulary needed here is
//! the unified error type and the run configuration.

mod config;
mod error;

pub use config::RunConfig;
pub use error::{CheckError, Result};
