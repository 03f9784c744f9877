//! Apple App Site Association (AASA) server for OpenMesh Universal Links.
//!
//! Serves the environment-configured AASA document required by Apple to route
//! `https://<domain>/...` links into the OpenMesh app. The document must be
//! reachable over HTTPS with no redirects at:
//!
//! ```text
//! https://<domain>/.well-known/apple-app-site-association
//! https://<domain>/apple-app-site-association
//! ```
//!
//! Apple requires `appID = TEAM_ID + "." + BUNDLE_ID` and `applinks.apps` to
//! be the empty array.
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`aasa`]: Path normalization and document construction
//! - [`api`]: HTTP routes and handlers
//! - [`utils`]: Utility functions

pub mod aasa;
pub mod api;
pub mod config;
pub mod error;
pub mod utils;

pub use config::{AasaConfig, Config};
pub use error::{Result, ServerError};
