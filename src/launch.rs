//! Launch orchestration
//!
//! Drives a single launch attempt as an explicit state machine: resolve the
//! Dolphin directory, resolve the ISO, synchronize texture packs, then hand a
//! ready-to-spawn [`Command`] back to the UI. Every stop along the way is a
//! user-visible message, never a crash, and nothing is retried automatically.

use std::path::{Path, PathBuf};
use std::process::Command;

use crate::assets::AssetSync;
use crate::config::Config;

/// Emulator executable expected directly under the Dolphin root
pub const DOLPHIN_EXE: &str = "Dolphin.exe";

/// Where a launch attempt currently stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LaunchState {
    NeedDolphinDir,
    NeedIsoPath,
    ReadyToLaunch,
    Launching,
    Done,
    Failed,
}

/// Dialog seam between the flow and the UI, so the flow can run headless in
/// tests. The UI backs this with `rfd` dialogs.
pub trait LaunchPrompts {
    /// Folder picker for the Dolphin root. `None` means the user cancelled.
    fn pick_dolphin_dir(&mut self) -> Option<PathBuf>;
    /// File picker for the game ISO, filtered to `.iso`.
    fn pick_iso_file(&mut self) -> Option<PathBuf>;
    /// Non-fatal warning shown to the user.
    fn warn(&mut self, title: &str, message: &str);
    /// Error shown to the user; the attempt is over either way.
    fn error(&mut self, title: &str, message: &str);
}

/// Result of one launch attempt
pub enum LaunchOutcome {
    /// Everything checked out: caller spawns the command and closes the window
    Launch(Command),
    /// Attempt stopped before launch; controls come back and the user may retry
    Stalled,
}

/// A single launch attempt. Created fresh state at every run; the state is
/// retained afterwards so the UI can report where the attempt stopped.
pub struct LaunchFlow {
    state: LaunchState,
}

impl Default for LaunchFlow {
    fn default() -> Self {
        Self::new()
    }
}

impl LaunchFlow {
    pub fn new() -> Self {
        Self {
            state: LaunchState::NeedDolphinDir,
        }
    }

    pub fn state(&self) -> LaunchState {
        self.state
    }

    /// Mark the attempt finished after the caller has spawned the emulator.
    pub fn finish(&mut self) {
        self.state = LaunchState::Done;
    }

    /// Run one launch attempt to completion or to the first stall.
    ///
    /// Picked paths are written back into `config`; persisting the config is
    /// the caller's job.
    pub fn run(
        &mut self,
        config: &mut Config,
        assets_root: &Path,
        prompts: &mut dyn LaunchPrompts,
    ) -> LaunchOutcome {
        self.state = LaunchState::NeedDolphinDir;
        if config.dolphin_dir.is_none() {
            match prompts.pick_dolphin_dir() {
                Some(dir) => {
                    log::info!("Dolphin directory set to {}", dir.display());
                    config.dolphin_dir = Some(dir);
                }
                None => {
                    log::info!("Dolphin directory prompt cancelled");
                    return LaunchOutcome::Stalled;
                }
            }
        }
        let Some(dolphin_dir) = config.dolphin_dir.clone() else {
            return LaunchOutcome::Stalled;
        };

        self.state = LaunchState::NeedIsoPath;
        if config.iso_path.is_none() {
            match prompts.pick_iso_file() {
                Some(path) => {
                    log::info!("ISO path set to {}", path.display());
                    config.iso_path = Some(path);
                }
                None => {
                    log::info!("ISO prompt cancelled");
                    return LaunchOutcome::Stalled;
                }
            }
        }
        let Some(iso_path) = config.iso_path.clone() else {
            return LaunchOutcome::Stalled;
        };

        if !iso_path.is_file() {
            self.state = LaunchState::Failed;
            prompts.warn(
                "ISO not found",
                &format!("Could not find the game ISO at {}", iso_path.display()),
            );
            return LaunchOutcome::Stalled;
        }

        self.state = LaunchState::ReadyToLaunch;
        let sync = AssetSync::for_dolphin_root(assets_root.to_path_buf(), &dolphin_dir);
        if let Err(e) = sync.sync_all(config) {
            log::error!("Texture sync failed: {}", e);
            self.state = LaunchState::Failed;
            prompts.error(
                "Texture sync failed",
                &format!("Could not update texture overrides: {e}"),
            );
            return LaunchOutcome::Stalled;
        }

        let exe = dolphin_dir.join(DOLPHIN_EXE);
        if !exe.is_file() {
            self.state = LaunchState::Failed;
            prompts.error(
                "Dolphin not found",
                &format!("Could not find {} in {}", DOLPHIN_EXE, dolphin_dir.display()),
            );
            return LaunchOutcome::Stalled;
        }

        self.state = LaunchState::Launching;
        let mut command = Command::new(exe);
        command.arg("-e").arg(&iso_path);
        log::info!("Launching {} with {}", DOLPHIN_EXE, iso_path.display());
        LaunchOutcome::Launch(command)
    }
}
