//! AASA document construction.
//!
//! - [`paths`]: Universal Link path normalization
//! - [`builder`]: assembles the served document from configuration

pub mod builder;
pub mod paths;

pub use builder::{build_document, AasaDocument};
pub use paths::normalize_paths;
