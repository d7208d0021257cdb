//! Main launcher window
//!
//! Wires the egui controls to the launch flow: the Play button runs one
//! attempt (disabled while it is in flight), the selectors persist straight
//! into the config, and every failure surfaces as a modal message dialog.

use crate::assets::{self, AssetCategory, BUTTON_STYLES, GLOSS_ADJUSTMENTS};
use crate::config::Config;
use crate::launch::{LaunchFlow, LaunchOutcome, LaunchPrompts};
use crate::platform::{self, HostPlatform};
use std::path::PathBuf;

/// `rfd`-backed dialogs for the launch flow
struct RfdPrompts {
    dolphin_start_dir: Option<PathBuf>,
    iso_start_dir: Option<PathBuf>,
}

impl LaunchPrompts for RfdPrompts {
    fn pick_dolphin_dir(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new().set_title("Select the Dolphin folder");
        if let Some(ref dir) = self.dolphin_start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_folder()
    }

    fn pick_iso_file(&mut self) -> Option<PathBuf> {
        let mut dialog = rfd::FileDialog::new()
            .set_title("Select the game ISO")
            .add_filter("GameCube ISO", &["iso"]);
        if let Some(ref dir) = self.iso_start_dir {
            dialog = dialog.set_directory(dir);
        }
        dialog.pick_file()
    }

    fn warn(&mut self, title: &str, message: &str) {
        show_message(rfd::MessageLevel::Warning, title, message);
    }

    fn error(&mut self, title: &str, message: &str) {
        show_message(rfd::MessageLevel::Error, title, message);
    }
}

fn show_message(level: rfd::MessageLevel, title: &str, text: &str) {
    let _ = rfd::MessageDialog::new()
        .set_level(level)
        .set_title(title)
        .set_description(text)
        .set_buttons(rfd::MessageButtons::Ok)
        .show();
}

/// Main application state
pub struct LauncherApp {
    config: Config,
    assets_root: PathBuf,
    platform: HostPlatform,
    flow: LaunchFlow,
    launching: bool,
}

impl LauncherApp {
    pub fn new(platform: HostPlatform, iso_override: Option<PathBuf>) -> Self {
        let mut config = Config::load();
        if let Some(iso) = iso_override {
            log::info!("Using ISO from command line: {}", iso.display());
            config.iso_path = Some(iso);
        }

        Self {
            config,
            assets_root: assets::bundled_assets_root(),
            platform,
            flow: LaunchFlow::new(),
            launching: false,
        }
    }

    fn prompts(&self) -> RfdPrompts {
        RfdPrompts {
            dolphin_start_dir: self.config.dolphin_dir.clone(),
            iso_start_dir: self
                .config
                .iso_path
                .as_ref()
                .and_then(|p| p.parent().map(|d| d.to_path_buf())),
        }
    }

    fn save_config(&self) {
        if let Err(e) = self.config.save() {
            log::error!("Failed to save config: {}", e);
        }
    }

    /// Run one launch attempt. On success the emulator is spawned and the
    /// launcher window closes; on any stall the controls come back.
    fn on_play(&mut self, ctx: &egui::Context) {
        self.launching = true;
        let mut prompts = self.prompts();
        let outcome = self.flow.run(&mut self.config, &self.assets_root, &mut prompts);
        self.save_config();

        match outcome {
            LaunchOutcome::Launch(mut command) => match command.spawn() {
                Ok(_) => {
                    self.flow.finish();
                    ctx.send_viewport_cmd(egui::ViewportCommand::Close);
                }
                Err(e) => {
                    log::error!("Failed to start Dolphin: {}", e);
                    show_message(
                        rfd::MessageLevel::Error,
                        "Launch failed",
                        &format!("Could not start Dolphin: {e}"),
                    );
                    self.launching = false;
                }
            },
            LaunchOutcome::Stalled => {
                log::debug!("Launch attempt stalled in state {:?}", self.flow.state());
                self.launching = false;
            }
        }
    }

    fn change_dolphin_dir(&mut self) {
        if let Some(dir) = self.prompts().pick_dolphin_dir() {
            self.config.dolphin_dir = Some(dir);
            self.save_config();
        }
    }

    fn change_iso(&mut self) {
        if let Some(path) = self.prompts().pick_iso_file() {
            self.config.iso_path = Some(path);
            self.save_config();
        }
    }

    fn open_save_dir(&self) {
        let Some(ref dolphin_dir) = self.config.dolphin_dir else {
            show_message(
                rfd::MessageLevel::Info,
                "Dolphin folder not set",
                "Select the Dolphin folder before opening the save directory.",
            );
            return;
        };

        let save_dir = dolphin_dir.join("User").join("GC");
        match platform::open_directory(self.platform, &save_dir) {
            Ok(true) => {}
            Ok(false) => {
                show_message(
                    rfd::MessageLevel::Info,
                    "No save directory yet",
                    "Please launch the game once to generate the save directory.",
                );
            }
            Err(e) => {
                log::error!("Failed to open {}: {}", save_dir.display(), e);
                show_message(
                    rfd::MessageLevel::Error,
                    "Could not open folder",
                    &format!("Could not open {}: {e}", save_dir.display()),
                );
            }
        }
    }

    fn selector(
        ui: &mut egui::Ui,
        category: &AssetCategory,
        selection: &mut usize,
    ) -> bool {
        let mut changed = false;
        let selected_label = category
            .options
            .get(*selection)
            .map(|o| o.label)
            .unwrap_or("?");
        egui::ComboBox::from_label(category.name)
            .selected_text(selected_label)
            .show_ui(ui, |ui| {
                for (i, option) in category.options.iter().enumerate() {
                    changed |= ui.selectable_value(selection, i, option.label).changed();
                }
            });
        changed
    }
}

impl eframe::App for LauncherApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let mut play_clicked = false;
        let mut save_dir_clicked = false;
        let mut change_dolphin = false;
        let mut change_iso = false;

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.add_space(4.0);
            ui.heading("HD Launcher");
            ui.add_space(8.0);

            let mut changed = Self::selector(ui, &BUTTON_STYLES, &mut self.config.button_style);
            changed |= Self::selector(ui, &GLOSS_ADJUSTMENTS, &mut self.config.gloss);
            if changed {
                self.save_config();
            }

            ui.add_space(8.0);
            ui.separator();
            ui.add_space(4.0);

            ui.horizontal(|ui| {
                ui.label("Dolphin:");
                ui.monospace(path_label(&self.config.dolphin_dir));
                if ui.small_button("Change…").clicked() {
                    change_dolphin = true;
                }
            });
            ui.horizontal(|ui| {
                ui.label("ISO:");
                ui.monospace(path_label(&self.config.iso_path));
                if ui.small_button("Change…").clicked() {
                    change_iso = true;
                }
            });

            ui.add_space(4.0);
            ui.separator();
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                if ui
                    .add_enabled(!self.launching, egui::Button::new("▶ Play"))
                    .clicked()
                {
                    play_clicked = true;
                }
                if ui.button("Open save folder").clicked() {
                    save_dir_clicked = true;
                }
            });
        });

        if change_dolphin {
            self.change_dolphin_dir();
        }
        if change_iso {
            self.change_iso();
        }
        if save_dir_clicked {
            self.open_save_dir();
        }
        if play_clicked {
            self.on_play(ctx);
        }
    }
}

fn path_label(path: &Option<PathBuf>) -> String {
    path.as_ref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "Not set".to_string())
}
