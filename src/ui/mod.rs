//! hdlauncher UI - egui-based launcher window
//!
//! A single small window: texture-pack selectors, the configured paths, a
//! Play button, and a shortcut to the save directory.

mod app;

pub use app::LauncherApp;
