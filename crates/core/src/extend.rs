//! Derives the auxiliary palette slots that templates can point at.
//!
//! Rules are spliced into a growing array, so each rule sees the indices
//! created by the rules before it. [`ExtensionSpec::new`] checks that
//! arithmetic once so that [`ExtensionSpec::extend`] cannot fail later.

use once_cell::sync::Lazy;
use serde::Deserialize;

use crate::colors::{change_luminance_within, ChannelBounds};
use crate::error::ConfigError;
use crate::model::{BasePalette, ExtendedPalette, BASE_PALETTE_LEN};

#[derive(Debug, Clone, PartialEq)]
pub enum ExtensionColor {
    /// Luminance-adjusted copy of another slot.
    Computed {
        source_index: usize,
        modifier: f64,
        bounds: ChannelBounds,
    },
    /// A constant color.
    Fixed(String),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionRule {
    pub target_index: usize,
    pub color: ExtensionColor,
}

impl ExtensionRule {
    pub fn computed(target_index: usize, source_index: usize, modifier: f64) -> Self {
        Self {
            target_index,
            color: ExtensionColor::Computed {
                source_index,
                modifier,
                bounds: ChannelBounds::default(),
            },
        }
    }

    pub fn bounded(
        target_index: usize,
        source_index: usize,
        modifier: f64,
        min: u8,
        max: u8,
    ) -> Self {
        Self {
            target_index,
            color: ExtensionColor::Computed {
                source_index,
                modifier,
                bounds: ChannelBounds { min, max },
            },
        }
    }

    pub fn fixed(target_index: usize, color: impl Into<String>) -> Self {
        Self {
            target_index,
            color: ExtensionColor::Fixed(color.into()),
        }
    }
}

/// Loosely typed rule as written in configuration files.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawExtensionRule {
    pub target_index: usize,
    #[serde(default)]
    pub literal_color: Option<String>,
    #[serde(default)]
    pub source_index: Option<usize>,
    #[serde(default)]
    pub modifier: Option<f64>,
    #[serde(default)]
    pub min: Option<u8>,
    #[serde(default)]
    pub max: Option<u8>,
}

impl TryFrom<RawExtensionRule> for ExtensionRule {
    type Error = ConfigError;

    fn try_from(raw: RawExtensionRule) -> Result<Self, Self::Error> {
        match (raw.source_index, raw.modifier, raw.literal_color) {
            (Some(source_index), Some(modifier), _) => {
                let defaults = ChannelBounds::default();
                let bounds = ChannelBounds {
                    min: raw.min.unwrap_or(defaults.min),
                    max: raw.max.unwrap_or(defaults.max),
                };
                if bounds.min > bounds.max {
                    return Err(ConfigError::InvertedLuminanceBounds {
                        target_index: raw.target_index,
                        min: bounds.min,
                        max: bounds.max,
                    });
                }
                Ok(Self {
                    target_index: raw.target_index,
                    color: ExtensionColor::Computed {
                        source_index,
                        modifier,
                        bounds,
                    },
                })
            }
            (_, _, Some(color)) => Ok(Self::fixed(raw.target_index, color)),
            _ => Err(ConfigError::IncompleteExtensionRule {
                target_index: raw.target_index,
            }),
        }
    }
}

/// An ordered, validated list of extension rules.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionSpec {
    rules: Vec<ExtensionRule>,
}

impl ExtensionSpec {
    pub fn new(rules: Vec<ExtensionRule>) -> Result<Self, ConfigError> {
        for (position, rule) in rules.iter().enumerate() {
            let len = BASE_PALETTE_LEN + position;
            if rule.target_index > len {
                return Err(ConfigError::ExtensionTargetOutOfRange {
                    target_index: rule.target_index,
                    len,
                });
            }
            if let ExtensionColor::Computed {
                source_index,
                bounds,
                ..
            } = &rule.color
            {
                if *source_index >= len {
                    return Err(ConfigError::ExtensionSourceOutOfRange {
                        target_index: rule.target_index,
                        source_index: *source_index,
                        len,
                    });
                }
                if bounds.min > bounds.max {
                    return Err(ConfigError::InvertedLuminanceBounds {
                        target_index: rule.target_index,
                        min: bounds.min,
                        max: bounds.max,
                    });
                }
            }
        }
        Ok(Self { rules })
    }

    pub fn from_raw(raw: Vec<RawExtensionRule>) -> Result<Self, ConfigError> {
        let rules = raw
            .into_iter()
            .map(ExtensionRule::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(rules)
    }

    pub fn rules(&self) -> &[ExtensionRule] {
        &self.rules
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Copy `base` and splice every rule into it, in order.
    pub fn extend(&self, base: &BasePalette) -> ExtendedPalette {
        let mut colors = base.colors().to_vec();
        colors.reserve(self.rules.len());
        for rule in &self.rules {
            let derived = match &rule.color {
                ExtensionColor::Fixed(color) => color.clone(),
                ExtensionColor::Computed {
                    source_index,
                    modifier,
                    bounds,
                } => change_luminance_within(&colors[*source_index], *modifier, *bounds),
            };
            colors.insert(rule.target_index, derived);
        }
        ExtendedPalette::from_vec(colors)
    }
}

/// Slots 16-19: darker/lighter backgrounds, pure white and a soft light background.
pub static DEFAULT_EXTENSION_SPEC: Lazy<ExtensionSpec> = Lazy::new(|| ExtensionSpec {
    rules: vec![
        ExtensionRule::computed(16, 0, 1.25),
        ExtensionRule::fixed(17, "#ffffff"),
        ExtensionRule::computed(18, 0, 1.85),
        ExtensionRule::bounded(19, 7, 0.1, 205, 220),
    ],
});

/// Extend `base` with the packaged default rules.
pub fn extend_palette(base: &BasePalette) -> ExtendedPalette {
    DEFAULT_EXTENSION_SPEC.extend(base)
}
