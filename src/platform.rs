//! Host platform detection and file-explorer integration

use std::io;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

#[derive(Error, Debug)]
#[error("Unsupported host operating system: {0}")]
pub struct UnsupportedPlatform(pub String);

/// The operating systems the launcher knows how to open folders on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostPlatform {
    Windows,
    MacOs,
    Linux,
}

impl HostPlatform {
    /// Resolve the host platform once at startup. Anything outside the fixed
    /// table is a fatal configuration error for the caller.
    pub fn detect() -> Result<Self, UnsupportedPlatform> {
        match std::env::consts::OS {
            "windows" => Ok(Self::Windows),
            "macos" => Ok(Self::MacOs),
            "linux" => Ok(Self::Linux),
            other => Err(UnsupportedPlatform(other.to_string())),
        }
    }

    pub fn explorer_command(self) -> &'static str {
        match self {
            Self::Windows => "explorer",
            Self::MacOs => "open",
            Self::Linux => "xdg-open",
        }
    }
}

/// Open `path` in the host file explorer. Returns `Ok(false)` without
/// spawning anything when the directory does not exist.
pub fn open_directory(platform: HostPlatform, path: &Path) -> io::Result<bool> {
    if !path.is_dir() {
        return Ok(false);
    }
    Command::new(platform.explorer_command()).arg(path).spawn()?;
    log::info!("Opened {} in file explorer", path.display());
    Ok(true)
}
