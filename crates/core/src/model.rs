use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::colors::validate_hex;
use crate::error::{ConfigError, PaletteError};

/// Number of colors pywal hands us before any derived slots are added.
pub const BASE_PALETTE_LEN: usize = 16;

/// The semantic roles a palette assigns colors to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PaletteColor {
    Background,
    BackgroundLight,
    BackgroundExtra,
    Text,
    TextFocus,
    AccentPrimary,
    AccentSecondary,
}

impl PaletteColor {
    /// Every role, in the order the extension CSS declares them.
    pub const ALL: [PaletteColor; 7] = [
        PaletteColor::Background,
        PaletteColor::BackgroundLight,
        PaletteColor::BackgroundExtra,
        PaletteColor::Text,
        PaletteColor::TextFocus,
        PaletteColor::AccentPrimary,
        PaletteColor::AccentSecondary,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaletteColor::Background => "background",
            PaletteColor::BackgroundLight => "backgroundLight",
            PaletteColor::BackgroundExtra => "backgroundExtra",
            PaletteColor::Text => "text",
            PaletteColor::TextFocus => "textFocus",
            PaletteColor::AccentPrimary => "accentPrimary",
            PaletteColor::AccentSecondary => "accentSecondary",
        }
    }

    pub fn css_variable(&self) -> &'static str {
        match self {
            PaletteColor::Background => "--background",
            PaletteColor::BackgroundLight => "--background-light",
            PaletteColor::BackgroundExtra => "--background-extra",
            PaletteColor::Text => "--text",
            PaletteColor::TextFocus => "--text-focus",
            PaletteColor::AccentPrimary => "--accent-primary",
            PaletteColor::AccentSecondary => "--accent-secondary",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            PaletteColor::Background => "Background",
            PaletteColor::BackgroundLight => "Background light",
            PaletteColor::BackgroundExtra => "Background extra",
            PaletteColor::Text => "Text",
            PaletteColor::TextFocus => "Text focus",
            PaletteColor::AccentPrimary => "Accent primary",
            PaletteColor::AccentSecondary => "Accent secondary",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            PaletteColor::Background => "Main background color",
            PaletteColor::BackgroundLight => "Secondary background color",
            PaletteColor::BackgroundExtra => "Additional contrasting background color",
            PaletteColor::Text => "Main text color",
            PaletteColor::TextFocus => "Text used in the current tab, etc.",
            PaletteColor::AccentPrimary => "Main accent color, used for icons",
            PaletteColor::AccentSecondary => "Mainly used for hovers and highlights",
        }
    }
}

impl fmt::Display for PaletteColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for PaletteColor {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "background" => Ok(PaletteColor::Background),
            "backgroundlight" => Ok(PaletteColor::BackgroundLight),
            "backgroundextra" => Ok(PaletteColor::BackgroundExtra),
            "text" => Ok(PaletteColor::Text),
            "textfocus" => Ok(PaletteColor::TextFocus),
            "accentprimary" => Ok(PaletteColor::AccentPrimary),
            "accentsecondary" => Ok(PaletteColor::AccentSecondary),
            _ => Err(ConfigError::UnknownPaletteColor(s.to_string())),
        }
    }
}

/// The mode chosen by the user. `Auto` must be resolved before any template lookup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
    Auto,
}

impl ThemeMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeMode::Dark => "dark",
            ThemeMode::Light => "light",
            ThemeMode::Auto => "auto",
        }
    }

    /// Pick the template mode, consulting `is_day` only for [`ThemeMode::Auto`].
    pub fn resolve(&self, is_day: bool) -> TemplateMode {
        match self {
            ThemeMode::Dark => TemplateMode::Dark,
            ThemeMode::Light => TemplateMode::Light,
            ThemeMode::Auto if is_day => TemplateMode::Light,
            ThemeMode::Auto => TemplateMode::Dark,
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl ValueEnum for ThemeMode {
    fn value_variants<'a>() -> &'a [Self] {
        const VARIANTS: [ThemeMode; 3] = [ThemeMode::Dark, ThemeMode::Light, ThemeMode::Auto];
        &VARIANTS
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        Some(clap::builder::PossibleValue::new(self.as_str()))
    }
}

/// A resolved mode; templates exist only for these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateMode {
    Dark,
    Light,
}

impl TemplateMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateMode::Dark => "dark",
            TemplateMode::Light => "light",
        }
    }
}

impl fmt::Display for TemplateMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<TemplateMode> for ThemeMode {
    fn from(mode: TemplateMode) -> Self {
        match mode {
            TemplateMode::Dark => ThemeMode::Dark,
            TemplateMode::Light => ThemeMode::Light,
        }
    }
}

/// The sixteen colors produced by pywal, validated for length.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct BasePalette(Vec<String>);

impl BasePalette {
    pub fn new(colors: Vec<String>) -> Result<Self, PaletteError> {
        if colors.len() != BASE_PALETTE_LEN {
            return Err(PaletteError::WrongLength {
                expected: BASE_PALETTE_LEN,
                actual: colors.len(),
            });
        }
        if let Some(index) = colors.iter().position(|c| c.trim().is_empty()) {
            return Err(PaletteError::EmptyColor { index });
        }
        if let Some(index) = colors.iter().position(|c| validate_hex(c).len() != 6) {
            return Err(PaletteError::MalformedColor {
                index,
                value: colors[index].clone(),
            });
        }
        Ok(Self(colors))
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }
}

impl TryFrom<Vec<String>> for BasePalette {
    type Error = PaletteError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

/// Base palette followed by the derived slots, addressed by position.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ExtendedPalette(Vec<String>);

impl ExtendedPalette {
    pub(crate) fn from_vec(colors: Vec<String>) -> Self {
        Self(colors)
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }
}

/// User picked colors that win over template lookups.
pub type CustomColors = BTreeMap<PaletteColor, String>;

/// A fully populated semantic palette.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Palette {
    pub background: String,
    pub background_light: String,
    pub background_extra: String,
    pub text: String,
    pub text_focus: String,
    pub accent_primary: String,
    pub accent_secondary: String,
}

impl Palette {
    /// Build a palette from key/value pairs in any order. Every role must be present.
    pub fn from_entries<I>(entries: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (PaletteColor, String)>,
    {
        let mut map: BTreeMap<PaletteColor, String> = entries.into_iter().collect();
        let mut take = |key: PaletteColor| {
            map.remove(&key)
                .ok_or(ConfigError::MissingPaletteEntry(key))
        };
        Ok(Self {
            background: take(PaletteColor::Background)?,
            background_light: take(PaletteColor::BackgroundLight)?,
            background_extra: take(PaletteColor::BackgroundExtra)?,
            text: take(PaletteColor::Text)?,
            text_focus: take(PaletteColor::TextFocus)?,
            accent_primary: take(PaletteColor::AccentPrimary)?,
            accent_secondary: take(PaletteColor::AccentSecondary)?,
        })
    }

    pub fn get(&self, key: PaletteColor) -> &str {
        match key {
            PaletteColor::Background => &self.background,
            PaletteColor::BackgroundLight => &self.background_light,
            PaletteColor::BackgroundExtra => &self.background_extra,
            PaletteColor::Text => &self.text,
            PaletteColor::TextFocus => &self.text_focus,
            PaletteColor::AccentPrimary => &self.accent_primary,
            PaletteColor::AccentSecondary => &self.accent_secondary,
        }
    }

    pub fn get_mut(&mut self, key: PaletteColor) -> &mut String {
        match key {
            PaletteColor::Background => &mut self.background,
            PaletteColor::BackgroundLight => &mut self.background_light,
            PaletteColor::BackgroundExtra => &mut self.background_extra,
            PaletteColor::Text => &mut self.text,
            PaletteColor::TextFocus => &mut self.text_focus,
            PaletteColor::AccentPrimary => &mut self.accent_primary,
            PaletteColor::AccentSecondary => &mut self.accent_secondary,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (PaletteColor, &str)> + '_ {
        PaletteColor::ALL.into_iter().map(move |key| (key, self.get(key)))
    }
}
