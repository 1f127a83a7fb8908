//! Configuration constants and profile loading for bioline
//!
//! Profiles live in an INI file, one section per profile:
//!
//! ```ini
//! [default]
//! server = http://127.0.0.1:5000
//! ```

use crate::cmd_args::CommandLineArgs;
use anyhow::{Context, Result};
use ini::Ini;
use std::path::Path;

/// Default profile file path for bioline
pub const DEFAULT_PROFILE_PATH: &str = "~/.bioline/profile";

/// Environment variable name for overriding the profile path
pub const PROFILE_PATH_ENV_VAR: &str = "BIOLINE_PROFILE_PATH";

/// Server used when neither the command line nor a profile names one
pub const DEFAULT_SERVER: &str = "http://127.0.0.1:5000";

/// Profile key holding the server base URL
const SERVER_KEY: &str = "server";

/// Get the profile file path, checking environment variable first, then falling back to default
pub fn get_profile_path() -> String {
    std::env::var_os(PROFILE_PATH_ENV_VAR)
        .and_then(|val| val.into_string().ok())
        .unwrap_or_else(|| DEFAULT_PROFILE_PATH.to_string())
}

/// A named connection profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    pub name: String,
    pub server: String,
}

/// Load a profile by name from an INI file.
///
/// A missing file, a missing section or a section without a `server` key all
/// yield `Ok(None)`. A file that exists but cannot be parsed is an error.
pub fn load_profile(profile_path: &str, profile_name: &str) -> Result<Option<Profile>> {
    let expanded = shellexpand::tilde(profile_path);
    let path = Path::new(expanded.as_ref());

    if !path.exists() {
        tracing::debug!("Profile file '{}' does not exist", path.display());
        return Ok(None);
    }

    let ini = Ini::load_from_file(path)
        .with_context(|| format!("Failed to read profile file '{}'", path.display()))?;

    let server = ini
        .section(Some(profile_name))
        .and_then(|section| section.get(SERVER_KEY))
        .map(|server| server.trim().to_string())
        .filter(|server| !server.is_empty());

    Ok(server.map(|server| Profile {
        name: profile_name.to_string(),
        server,
    }))
}

/// Resolve the server base URL: `--server` wins, then the profile, then [`DEFAULT_SERVER`]
pub fn resolve_server(args: &CommandLineArgs, profile_path: &str) -> Result<String> {
    if let Some(server) = args.server() {
        tracing::debug!("Using server from command line: {}", server);
        return Ok(server.to_string());
    }

    match load_profile(profile_path, args.profile())? {
        Some(profile) => {
            tracing::debug!("Profile '{}' loaded, server: {}", profile.name, profile.server);
            Ok(profile.server)
        }
        None => {
            tracing::debug!(
                "Profile '{}' not found, using {}",
                args.profile(),
                DEFAULT_SERVER
            );
            Ok(DEFAULT_SERVER.to_string())
        }
    }
}
