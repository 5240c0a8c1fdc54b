use anyhow::{bail, Result};
use chrono::NaiveTime;

use crate::colors::validate_hex;
use crate::config::AppConfig;
use crate::hash::base_palette_hash;
use crate::model::{BasePalette, PaletteColor, TemplateMode, ThemeMode};
use crate::store::OverrideStore;
use crate::template::{ColorschemeTemplate, SavedTemplate};
use crate::theme::{generate_theme, GeneratedTheme};

#[derive(Debug, Clone)]
pub struct ThemeService {
    config: AppConfig,
}

impl ThemeService {
    pub fn new(config: AppConfig) -> Result<Self> {
        OverrideStore::load(config.overrides_path())?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Pick the template mode for `mode` at wall-clock time `now`.
    pub fn resolve_mode(&self, mode: ThemeMode, now: NaiveTime) -> TemplateMode {
        mode.resolve(self.config.day_interval().is_day(now))
    }

    pub fn generate(&self, base_colors: &[String], mode: TemplateMode) -> Result<GeneratedTheme> {
        let store = self.open_store()?;
        self.generate_with(&store, base_colors, mode)
    }

    pub fn global_template(&self, mode: TemplateMode) -> Result<ColorschemeTemplate> {
        Ok(self.open_store()?.global_template(mode))
    }

    pub fn set_custom_color(
        &self,
        base_colors: &[String],
        mode: TemplateMode,
        color: PaletteColor,
        value: &str,
    ) -> Result<GeneratedTheme> {
        let hex = validate_hex(value);
        if hex.len() != 6 {
            bail!("`{value}` is not a valid hex color");
        }
        let key = override_key(base_colors)?;
        let value = format!("#{}", hex.to_ascii_lowercase());
        let store = self.update_store(|store| store.set_custom_color(&key, mode, color, value))?;
        tracing::info!(key = key.as_str(), %mode, %color, "custom color stored");
        self.generate_with(&store, base_colors, mode)
    }

    /// Reset one custom color, or all of them when `color` is `None`.
    pub fn reset_custom_colors(
        &self,
        base_colors: &[String],
        mode: TemplateMode,
        color: Option<PaletteColor>,
    ) -> Result<GeneratedTheme> {
        let key = override_key(base_colors)?;
        let store = self.update_store(|store| match color {
            Some(color) => {
                if !store.reset_custom_color(&key, mode, color) {
                    tracing::debug!(key = key.as_str(), %mode, %color, "no custom color to reset");
                }
            }
            None => store.reset_custom_colors(&key, mode),
        })?;
        self.generate_with(&store, base_colors, mode)
    }

    pub fn save_template(
        &self,
        base_colors: &[String],
        mode: TemplateMode,
        patch: SavedTemplate,
    ) -> Result<GeneratedTheme> {
        let key = override_key(base_colors)?;
        let store = self.update_store(|store| store.save_template(&key, mode, patch))?;
        tracing::info!(key = key.as_str(), %mode, "saved template updated");
        self.generate_with(&store, base_colors, mode)
    }

    pub fn reset_template(
        &self,
        base_colors: &[String],
        mode: TemplateMode,
    ) -> Result<GeneratedTheme> {
        let key = override_key(base_colors)?;
        let store = self.update_store(|store| store.reset_template(&key, mode))?;
        self.generate_with(&store, base_colors, mode)
    }

    pub fn save_global_template(&self, mode: TemplateMode, patch: SavedTemplate) -> Result<()> {
        self.update_store(|store| store.save_global_template(mode, patch))?;
        tracing::info!(%mode, "global template updated");
        Ok(())
    }

    pub fn reset_global_template(&self, mode: TemplateMode) -> Result<()> {
        self.update_store(|store| store.reset_global_template(mode))?;
        Ok(())
    }

    fn generate_with(
        &self,
        store: &OverrideStore,
        base_colors: &[String],
        mode: TemplateMode,
    ) -> Result<GeneratedTheme> {
        let key = override_key(base_colors)?;
        let theme = generate_theme(
            mode,
            base_colors,
            &store.custom_colors(&key, mode),
            &store.global_template(mode),
            store.saved_template(&key, mode),
        )?;
        tracing::debug!(hash = theme.hash.as_str(), %mode, "theme generated");
        Ok(theme)
    }

    fn open_store(&self) -> Result<OverrideStore> {
        OverrideStore::load(self.config.overrides_path())
    }

    fn update_store<F>(&self, edit: F) -> Result<OverrideStore>
    where
        F: FnOnce(&mut OverrideStore),
    {
        OverrideStore::update(self.config.overrides_path(), edit)
    }
}

fn override_key(base_colors: &[String]) -> Result<String> {
    let base = BasePalette::new(base_colors.to_vec())?;
    Ok(base_palette_hash(&base))
}
