use thiserror::Error;

use crate::model::PaletteColor;

/// Defects in packaged or user-edited template data. These are never caused
/// by the colors coming from pywal itself.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("extension rule for target index {target_index} has neither a literal color nor a source index with modifier")]
    IncompleteExtensionRule { target_index: usize },
    #[error("extension rule for target index {target_index} is out of range for a palette of {len} colors")]
    ExtensionTargetOutOfRange { target_index: usize, len: usize },
    #[error("extension rule for target index {target_index} reads source index {source_index}, but the palette only has {len} colors")]
    ExtensionSourceOutOfRange {
        target_index: usize,
        source_index: usize,
        len: usize,
    },
    #[error("extension rule for target index {target_index} has min {min} above max {max}")]
    InvertedLuminanceBounds { target_index: usize, min: u8, max: u8 },
    #[error("palette template is missing an entry for '{0}'")]
    MissingPaletteEntry(PaletteColor),
    #[error("palette template maps '{key}' to index {index}, but the extended palette only has {len} colors")]
    PaletteIndexOutOfRange {
        key: PaletteColor,
        index: usize,
        len: usize,
    },
    #[error("browser template is missing an entry for '{0}'")]
    MissingBrowserEntry(&'static str),
    #[error("third-party template is missing an entry for '{0}'")]
    MissingThirdPartyEntry(&'static str),
    #[error("unknown palette color '{0}'")]
    UnknownPaletteColor(String),
}

/// The base palette delivered by pywal is unusable.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PaletteError {
    #[error("expected {expected} base colors, received {actual}")]
    WrongLength { expected: usize, actual: usize },
    #[error("base color {index} is empty")]
    EmptyColor { index: usize },
    #[error("base color {index} ('{value}') is not a hex color")]
    MalformedColor { index: usize, value: String },
}

/// Everything that can stop a theme from being generated.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ThemeError {
    #[error(transparent)]
    Palette(#[from] PaletteError),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("refusing to emit '{value}' for '{key}': not a plain hex or rgb() color")]
    UnsafeColor { key: PaletteColor, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TimeError {
    #[error("invalid time '{0}': expected HH:MM")]
    Malformed(String),
    #[error("invalid time '{0}': hour must be 0-23 and minute 0-59")]
    OutOfRange(String),
}
