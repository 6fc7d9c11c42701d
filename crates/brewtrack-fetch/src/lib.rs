//! Remote catalog access for brewtrack
//!
//! Fetches the formula listing from the Homebrew API and maps it into the
//! core snapshot model. The rest of the tool depends on the
//! [`CatalogSource`] seam, never on the HTTP client directly.

pub mod client;
pub mod error;
pub mod raw;
pub mod source;

pub use client::CatalogClient;
pub use error::{FetchError, Result};
pub use source::CatalogSource;
