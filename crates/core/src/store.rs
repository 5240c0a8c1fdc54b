//! Persisted user overrides, keyed by the base palette they were made for.

use std::collections::BTreeMap;
use std::fs::{self, File, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;

use crate::model::{CustomColors, PaletteColor, TemplateMode};
use crate::template::{default_template, resolve_template, ColorschemeTemplate, SavedTemplate};

/// Overrides recorded for one base palette in one mode.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaletteOverrides {
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub custom_colors: CustomColors,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub saved_template: Option<SavedTemplate>,
}

impl PaletteOverrides {
    pub fn is_empty(&self) -> bool {
        self.custom_colors.is_empty()
            && self
                .saved_template
                .as_ref()
                .map_or(true, SavedTemplate::is_empty)
    }
}

/// On-disk state: per-palette overrides plus user edits to the global templates.
///
/// Entries for palettes other than the active one are kept untouched so they
/// come back when that palette does.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OverrideStore {
    #[serde(default)]
    palettes: BTreeMap<String, BTreeMap<TemplateMode, PaletteOverrides>>,
    #[serde(default)]
    global_templates: BTreeMap<TemplateMode, SavedTemplate>,
}

impl OverrideStore {
    /// Read the store from `path`; a missing file is an empty store.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "override store not found, starting empty");
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)
            .with_context(|| format!("Failed to read override store at {}", path.display()))?;
        let store: Self = serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse override store at {}", path.display()))?;
        tracing::debug!(
            path = %path.display(),
            palettes = store.palettes.len(),
            "override store loaded"
        );
        Ok(store)
    }

    /// Write the store atomically: a sibling temp file is renamed over `path`,
    /// so readers never observe a partial document.
    pub fn save(&self, path: &Path) -> Result<()> {
        let parent = ensure_parent_dir(path)?;
        let raw = serde_json::to_vec_pretty(self).context("Failed to serialize override store")?;
        let mut staged = NamedTempFile::new_in(parent).with_context(|| {
            format!("Failed to stage override store in {}", parent.display())
        })?;
        staged
            .write_all(&raw)
            .and_then(|()| staged.as_file().sync_data())
            .with_context(|| format!("Failed to write override store for {}", path.display()))?;
        staged
            .persist(path)
            .with_context(|| format!("Failed to replace override store at {}", path.display()))?;
        tracing::debug!(path = %path.display(), "override store saved");
        Ok(())
    }

    /// Load, modify and save the store while holding an exclusive lock on a
    /// sibling `.lock` file. Returns the store as committed.
    pub fn update<F>(path: &Path, edit: F) -> Result<Self>
    where
        F: FnOnce(&mut Self),
    {
        let lock = StoreLock::acquire(path)?;
        let mut store = Self::load(path)?;
        edit(&mut store);
        store.save(path)?;
        drop(lock);
        Ok(store)
    }

    pub fn overrides(&self, key: &str, mode: TemplateMode) -> Option<&PaletteOverrides> {
        self.palettes.get(key).and_then(|modes| modes.get(&mode))
    }

    pub fn custom_colors(&self, key: &str, mode: TemplateMode) -> CustomColors {
        self.overrides(key, mode)
            .map(|entry| entry.custom_colors.clone())
            .unwrap_or_default()
    }

    pub fn saved_template(&self, key: &str, mode: TemplateMode) -> Option<&SavedTemplate> {
        self.overrides(key, mode)
            .and_then(|entry| entry.saved_template.as_ref())
    }

    pub fn set_custom_color(
        &mut self,
        key: &str,
        mode: TemplateMode,
        color: PaletteColor,
        value: String,
    ) {
        self.entry(key, mode).custom_colors.insert(color, value);
    }

    /// Swap in a whole new set of custom colors.
    pub fn replace_custom_colors(&mut self, key: &str, mode: TemplateMode, colors: CustomColors) {
        self.entry(key, mode).custom_colors = colors;
        self.prune(key, mode);
    }

    /// Drop one custom color. Returns whether anything was removed.
    pub fn reset_custom_color(
        &mut self,
        key: &str,
        mode: TemplateMode,
        color: PaletteColor,
    ) -> bool {
        let removed = self
            .palettes
            .get_mut(key)
            .and_then(|modes| modes.get_mut(&mode))
            .map_or(false, |entry| entry.custom_colors.remove(&color).is_some());
        self.prune(key, mode);
        removed
    }

    pub fn reset_custom_colors(&mut self, key: &str, mode: TemplateMode) {
        if let Some(entry) = self.palettes.get_mut(key).and_then(|modes| modes.get_mut(&mode)) {
            entry.custom_colors.clear();
        }
        self.prune(key, mode);
    }

    /// Merge `patch` into the palette's saved template.
    pub fn save_template(&mut self, key: &str, mode: TemplateMode, patch: SavedTemplate) {
        let entry = self.entry(key, mode);
        entry
            .saved_template
            .get_or_insert_with(SavedTemplate::default)
            .absorb(patch);
        self.prune(key, mode);
    }

    pub fn reset_template(&mut self, key: &str, mode: TemplateMode) {
        if let Some(entry) = self.palettes.get_mut(key).and_then(|modes| modes.get_mut(&mode)) {
            entry.saved_template = None;
        }
        self.prune(key, mode);
    }

    /// The packaged template for `mode` with the user's global edits applied.
    pub fn global_template(&self, mode: TemplateMode) -> ColorschemeTemplate {
        resolve_template(default_template(mode), self.global_templates.get(&mode))
    }

    pub fn save_global_template(&mut self, mode: TemplateMode, patch: SavedTemplate) {
        let saved = self.global_templates.entry(mode).or_default();
        saved.absorb(patch);
        if saved.is_empty() {
            self.global_templates.remove(&mode);
        }
    }

    pub fn reset_global_template(&mut self, mode: TemplateMode) {
        self.global_templates.remove(&mode);
    }

    pub fn palette_count(&self) -> usize {
        self.palettes.len()
    }

    fn entry(&mut self, key: &str, mode: TemplateMode) -> &mut PaletteOverrides {
        self.palettes
            .entry(key.to_string())
            .or_default()
            .entry(mode)
            .or_default()
    }

    fn prune(&mut self, key: &str, mode: TemplateMode) {
        let Some(modes) = self.palettes.get_mut(key) else {
            return;
        };
        if let Some(entry) = modes.get_mut(&mode) {
            if entry.saved_template.as_ref().map_or(false, SavedTemplate::is_empty) {
                entry.saved_template = None;
            }
            if entry.is_empty() {
                modes.remove(&mode);
            }
        }
        if modes.is_empty() {
            self.palettes.remove(key);
        }
    }
}

/// Exclusive advisory lock, released when dropped.
struct StoreLock {
    file: File,
    path: PathBuf,
}

impl StoreLock {
    fn acquire(store_path: &Path) -> Result<Self> {
        ensure_parent_dir(store_path)?;
        let mut name = store_path.as_os_str().to_os_string();
        name.push(".lock");
        let path = PathBuf::from(name);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .with_context(|| format!("Failed to open lock file at {}", path.display()))?;
        file.lock_exclusive()
            .with_context(|| format!("Failed to lock {}", path.display()))?;
        Ok(Self { file, path })
    }
}

impl Drop for StoreLock {
    fn drop(&mut self) {
        if let Err(err) = FileExt::unlock(&self.file) {
            tracing::warn!(path = %self.path.display(), error = %err, "failed to release store lock");
        }
    }
}

fn ensure_parent_dir(path: &Path) -> Result<&Path> {
    let parent = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    fs::create_dir_all(parent)
        .with_context(|| format!("Failed to create data directory at {}", parent.display()))?;
    Ok(parent)
}
