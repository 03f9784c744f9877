//! Builds the Apple App Site Association document from configuration.
//!
//! Apple requires `appID = TEAM_ID + "." + BUNDLE_ID` and `applinks.apps` to be
//! the empty array. The document must be served over HTTPS with no redirects at
//! `/.well-known/apple-app-site-association` (and optionally at the bare path).

use serde::Serialize;

use crate::aasa::paths::normalize_paths;
use crate::config::AasaConfig;

/// The served AASA document.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AasaDocument {
    /// Universal Links configuration.
    pub applinks: Applinks,
    /// Shared Web Credentials / AutoFill association. Optional for Universal
    /// Links, but harmless to keep.
    pub webcredentials: WebCredentials,
}

/// The `applinks` section.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Applinks {
    /// Must always be empty per Apple's format.
    pub apps: Vec<String>,
    /// One entry per associated app.
    pub details: Vec<AppDetail>,
}

/// A single `applinks.details` entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct AppDetail {
    /// `TEAM_ID.BUNDLE_ID`.
    #[serde(rename = "appID")]
    pub app_id: String,
    /// Path patterns routed into the app.
    pub paths: Vec<String>,
}

/// The `webcredentials` section.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct WebCredentials {
    /// App IDs allowed to use Shared Web Credentials.
    pub apps: Vec<String>,
}

/// Build the AASA document for the given configuration.
///
/// Total over its input: missing or empty values fall back to documented
/// defaults upstream in [`AasaConfig`], and nothing here can fail.
pub fn build_document(config: &AasaConfig) -> AasaDocument {
    let team_id = config.ios_team_id.trim();
    let bundle_id = config.ios_bundle_id.trim();
    let app_id = format!("{team_id}.{bundle_id}");

    let base_paths = normalize_paths(
        config
            .ul_paths
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty()),
    );

    // For each base path, allow the exact path plus wildcards under it.
    let mut paths = Vec::with_capacity(base_paths.len() * 3);
    for bp in &base_paths {
        paths.push(bp.clone());
        if bp.as_str() == "/" {
            // A bare "/*" instead of the malformed "//*".
            paths.push("/*".to_string());
        } else {
            paths.push(format!("{bp}*"));
            if bp.ends_with('/') {
                paths.push(format!("{bp}*"));
            } else {
                paths.push(format!("{bp}/*"));
            }
        }
    }

    AasaDocument {
        applinks: Applinks {
            apps: Vec::new(),
            details: vec![AppDetail {
                app_id: app_id.clone(),
                paths,
            }],
        },
        webcredentials: WebCredentials {
            apps: vec![app_id],
        },
    }
}
