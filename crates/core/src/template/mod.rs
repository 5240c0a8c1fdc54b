//! Indirection tables from output targets to palette slots or palette roles.

mod defaults;
mod saved;
mod targets;

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::PaletteColor;

pub use defaults::{default_template, DEFAULT_THEME_DARK, DEFAULT_THEME_LIGHT};
pub use saved::{resolve_template, Override, SavedTemplate, SavedThirdPartyItem};
pub use targets::{BrowserProperty, ThirdPartyKey};

/// Palette role to extended palette index.
pub type PaletteTemplate = BTreeMap<PaletteColor, usize>;

/// Browser property to palette role.
pub type BrowserTemplate = BTreeMap<BrowserProperty, PaletteColor>;

/// Third-party setting to palette role, optionally shifted in luminance.
pub type ThirdPartyTemplate = BTreeMap<ThirdPartyKey, ThirdPartyItem>;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThirdPartyItem {
    pub color_key: PaletteColor,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub modifier: Option<f64>,
}

impl ThirdPartyItem {
    pub fn plain(color_key: PaletteColor) -> Self {
        Self {
            color_key,
            modifier: None,
        }
    }

    pub fn shifted(color_key: PaletteColor, modifier: f64) -> Self {
        Self {
            color_key,
            modifier: Some(modifier),
        }
    }
}

/// Complete per-mode template.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorschemeTemplate {
    pub palette: PaletteTemplate,
    pub browser: BrowserTemplate,
    #[serde(alias = "duckduckgo")]
    pub third_party: ThirdPartyTemplate,
}
