//! Texture pack synchronization
//!
//! Mirrors the selected texture packs into Dolphin's live per-game texture
//! directory before each launch. Each category (button style, gloss) owns a
//! destination subfolder that is wiped and repopulated from the bundled asset
//! tree, so stale overrides never survive a selection change.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::Config;

/// Game ID Dolphin scans for custom textures
pub const GAME_ID: &str = "GALE01";

#[derive(Error, Debug)]
pub enum AssetError {
    #[error("Invalid {category} selection: index {index}, only {len} options")]
    InvalidSelection {
        category: &'static str,
        index: usize,
        len: usize,
    },
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// One selectable entry in a category: display name plus the bundled folder
/// holding its textures. An empty folder name means "no override".
pub struct AssetOption {
    pub label: &'static str,
    pub folder: &'static str,
}

/// A texture-pack category: where its options live in the bundled asset tree
/// and which subfolder of the live texture directory it owns.
pub struct AssetCategory {
    pub name: &'static str,
    pub source_dir: &'static str,
    pub dest_subdir: &'static str,
    pub options: &'static [AssetOption],
}

pub const BUTTON_STYLES: AssetCategory = AssetCategory {
    name: "button style",
    source_dir: "buttons",
    dest_subdir: "Buttons",
    options: &[
        AssetOption { label: "Default", folder: "" },
        AssetOption { label: "GameCube", folder: "gamecube" },
        AssetOption { label: "Wii Classic", folder: "wii_classic" },
        AssetOption { label: "Switch Pro", folder: "switch_pro" },
        AssetOption { label: "Xbox", folder: "xbox" },
    ],
};

pub const GLOSS_ADJUSTMENTS: AssetCategory = AssetCategory {
    name: "gloss adjustment",
    source_dir: "gloss",
    dest_subdir: "Gloss",
    options: &[
        AssetOption { label: "Default", folder: "" },
        AssetOption { label: "Reduced", folder: "reduced" },
        AssetOption { label: "Matte", folder: "matte" },
    ],
};

/// Locate the bundled asset tree: next to the executable, falling back to the
/// working directory for `cargo run`.
pub fn bundled_assets_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join("assets")))
        .filter(|dir| dir.is_dir())
        .unwrap_or_else(|| PathBuf::from("assets"))
}

/// Copies texture packs from the bundled asset tree into the live texture
/// directory. The bundled tree is read-only; only the destination changes.
pub struct AssetSync {
    assets_root: PathBuf,
    textures_dir: PathBuf,
}

impl AssetSync {
    pub fn new(assets_root: PathBuf, textures_dir: PathBuf) -> Self {
        Self {
            assets_root,
            textures_dir,
        }
    }

    /// Build a synchronizer targeting Dolphin's texture directory for [`GAME_ID`]
    pub fn for_dolphin_root(assets_root: PathBuf, dolphin_dir: &Path) -> Self {
        let textures_dir = dolphin_dir
            .join("User")
            .join("Load")
            .join("Textures")
            .join(GAME_ID);
        Self::new(assets_root, textures_dir)
    }

    /// Apply both category selections, stopping at the first failure so a
    /// half-updated texture set never goes unnoticed.
    pub fn sync_all(&self, config: &Config) -> Result<(), AssetError> {
        self.sync(&BUTTON_STYLES, config.button_style)?;
        self.sync(&GLOSS_ADJUSTMENTS, config.gloss)?;
        Ok(())
    }

    /// Make the category's destination subfolder reflect the selected option.
    ///
    /// Any previous destination content is removed first. A "no override"
    /// selection leaves the destination absent; otherwise every file one level
    /// deep in the source option folder is copied over, names preserved.
    pub fn sync(&self, category: &AssetCategory, index: usize) -> Result<(), AssetError> {
        let dest = self.textures_dir.join(category.dest_subdir);
        if dest.exists() {
            fs::remove_dir_all(&dest)?;
        }

        let option =
            category
                .options
                .get(index)
                .ok_or(AssetError::InvalidSelection {
                    category: category.name,
                    index,
                    len: category.options.len(),
                })?;

        if option.folder.is_empty() {
            log::debug!("No {} override selected", category.name);
            return Ok(());
        }

        let source = self.assets_root.join(category.source_dir).join(option.folder);
        fs::create_dir_all(&dest)?;
        for entry in fs::read_dir(&source)? {
            let entry = entry?;
            let path = entry.path();
            if path.is_file() {
                fs::copy(&path, dest.join(entry.file_name()))?;
            }
        }

        log::info!(
            "Applied {} \"{}\" to {}",
            category.name,
            option.label,
            dest.display()
        );
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use tempfile::TempDir;

    /// Build a bundled asset tree covering every non-empty option of both
    /// categories, each holding a couple of marker files.
    fn fixture() -> (TempDir, AssetSync) {
        let tmp = TempDir::new().unwrap();
        let assets = tmp.path().join("assets");
        for category in [&BUTTON_STYLES, &GLOSS_ADJUSTMENTS] {
            for option in category.options {
                if option.folder.is_empty() {
                    continue;
                }
                let dir = assets.join(category.source_dir).join(option.folder);
                fs::create_dir_all(&dir).unwrap();
                fs::write(dir.join(format!("{}_a.png", option.folder)), b"a").unwrap();
                fs::write(dir.join(format!("{}_b.png", option.folder)), b"b").unwrap();
            }
        }
        let textures = tmp.path().join("textures");
        let sync = AssetSync::new(assets, textures);
        (tmp, sync)
    }

    fn file_names(dir: &Path) -> BTreeSet<String> {
        fs::read_dir(dir)
            .unwrap()
            .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn copies_selected_option_files() {
        let (tmp, sync) = fixture();
        sync.sync(&BUTTON_STYLES, 1).unwrap();

        let dest = tmp.path().join("textures").join("Buttons");
        assert!(dest.is_dir());
        let expected: BTreeSet<String> =
            ["gamecube_a.png".to_string(), "gamecube_b.png".to_string()].into();
        assert_eq!(file_names(&dest), expected);
    }

    #[test]
    fn no_override_leaves_destination_absent() {
        let (tmp, sync) = fixture();
        sync.sync(&BUTTON_STYLES, 0).unwrap();
        assert!(!tmp.path().join("textures").join("Buttons").exists());
    }

    #[test]
    fn no_override_removes_previous_content() {
        let (tmp, sync) = fixture();
        sync.sync(&BUTTON_STYLES, 1).unwrap();
        sync.sync(&BUTTON_STYLES, 0).unwrap();
        assert!(!tmp.path().join("textures").join("Buttons").exists());
    }

    #[test]
    fn switching_options_replaces_stale_files() {
        let (tmp, sync) = fixture();
        sync.sync(&BUTTON_STYLES, 1).unwrap();
        sync.sync(&BUTTON_STYLES, 4).unwrap();

        let dest = tmp.path().join("textures").join("Buttons");
        let expected: BTreeSet<String> =
            ["xbox_a.png".to_string(), "xbox_b.png".to_string()].into();
        assert_eq!(file_names(&dest), expected);
    }

    #[test]
    fn sync_is_idempotent() {
        let (tmp, sync) = fixture();
        sync.sync(&GLOSS_ADJUSTMENTS, 2).unwrap();
        let dest = tmp.path().join("textures").join("Gloss");
        let first = file_names(&dest);
        sync.sync(&GLOSS_ADJUSTMENTS, 2).unwrap();
        assert_eq!(file_names(&dest), first);
    }

    #[test]
    fn categories_are_independent() {
        let (tmp, sync) = fixture();
        sync.sync(&BUTTON_STYLES, 1).unwrap();
        sync.sync(&GLOSS_ADJUSTMENTS, 1).unwrap();
        let gloss_before = file_names(&tmp.path().join("textures").join("Gloss"));

        sync.sync(&BUTTON_STYLES, 2).unwrap();
        let gloss_after = file_names(&tmp.path().join("textures").join("Gloss"));
        assert_eq!(gloss_before, gloss_after);

        sync.sync(&GLOSS_ADJUSTMENTS, 2).unwrap();
        let buttons = file_names(&tmp.path().join("textures").join("Buttons"));
        let expected: BTreeSet<String> = [
            "wii_classic_a.png".to_string(),
            "wii_classic_b.png".to_string(),
        ]
        .into();
        assert_eq!(buttons, expected);
    }

    #[test]
    fn source_tree_is_never_mutated() {
        let (tmp, sync) = fixture();
        let source = tmp
            .path()
            .join("assets")
            .join("buttons")
            .join("gamecube");
        let before = file_names(&source);
        sync.sync(&BUTTON_STYLES, 1).unwrap();
        sync.sync(&BUTTON_STYLES, 0).unwrap();
        assert_eq!(file_names(&source), before);
    }

    #[test]
    fn out_of_range_index_fails() {
        let (_tmp, sync) = fixture();
        let err = sync.sync(&BUTTON_STYLES, 99).unwrap_err();
        match err {
            AssetError::InvalidSelection { index, len, .. } => {
                assert_eq!(index, 99);
                assert_eq!(len, BUTTON_STYLES.options.len());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn sync_all_applies_both_categories() {
        let (tmp, sync) = fixture();
        let config = Config {
            button_style: 1,
            gloss: 1,
            ..Config::default()
        };
        sync.sync_all(&config).unwrap();
        assert!(tmp.path().join("textures").join("Buttons").is_dir());
        assert!(tmp.path().join("textures").join("Gloss").is_dir());
    }
}
