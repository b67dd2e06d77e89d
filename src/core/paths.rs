use crate::error::{Error, Result};
use std::env;
use std::path::PathBuf;

/// Base droidkit config directory (~/.config/droidkit/ on Unix-like systems)
pub fn droidkit() -> Result<PathBuf> {
    #[cfg(windows)]
    {
        let appdata = env::var("APPDATA").map_err(|_| {
            Error::internal_unexpected(
                "APPDATA environment variable not set on Windows".to_string(),
            )
        })?;
        Ok(PathBuf::from(appdata).join("droidkit"))
    }

    #[cfg(not(windows))]
    {
        let home = env::var("HOME").map_err(|_| {
            Error::internal_unexpected(
                "HOME environment variable not set on Unix-like system".to_string(),
            )
        })?;
        Ok(PathBuf::from(home).join(".config").join("droidkit"))
    }
}

/// Global droidkit.json config file path
pub fn droidkit_json() -> Result<PathBuf> {
    Ok(droidkit()?.join("droidkit.json"))
}
