use serde::Serialize;

use crate::model::{Palette, TemplateMode};

/// Colors handed to Dark Reader. Field names depend on the active mode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CompanionScheme {
    #[serde(rename_all = "camelCase")]
    Dark {
        dark_scheme_background_color: String,
        dark_scheme_text_color: String,
    },
    #[serde(rename_all = "camelCase")]
    Light {
        light_scheme_background_color: String,
        light_scheme_text_color: String,
    },
}

impl CompanionScheme {
    pub fn mode(&self) -> TemplateMode {
        match self {
            CompanionScheme::Dark { .. } => TemplateMode::Dark,
            CompanionScheme::Light { .. } => TemplateMode::Light,
        }
    }

    /// Numeric mode flag used by Dark Reader's messaging API.
    pub fn mode_flag(&self) -> u8 {
        match self.mode() {
            TemplateMode::Dark => 1,
            TemplateMode::Light => 0,
        }
    }
}

pub fn project_companion_scheme(palette: &Palette, mode: TemplateMode) -> CompanionScheme {
    let background = palette.background.clone();
    let text = palette.text.clone();
    match mode {
        TemplateMode::Dark => CompanionScheme::Dark {
            dark_scheme_background_color: background,
            dark_scheme_text_color: text,
        },
        TemplateMode::Light => CompanionScheme::Light {
            light_scheme_background_color: background,
            light_scheme_text_color: text,
        },
    }
}
