use std::collections::BTreeMap;

use serde::Serialize;

use crate::colors::{change_luminance, strip_hash};
use crate::error::ConfigError;
use crate::model::Palette;
use crate::template::{ThirdPartyKey, ThirdPartyTemplate};

/// Value of the theme-id setting that marks a theme as ours.
pub const THIRD_PARTY_THEME_ID: &str = "pywalfox";

/// DuckDuckGo cookie settings: colors without `#`, plus the theme id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThirdPartyTheme {
    #[serde(rename = "kae")]
    pub theme_id: String,
    #[serde(flatten)]
    pub colors: BTreeMap<ThirdPartyKey, String>,
}

pub fn project_third_party_theme(
    palette: &Palette,
    template: &ThirdPartyTemplate,
) -> Result<ThirdPartyTheme, ConfigError> {
    let mut colors = BTreeMap::new();
    for key in ThirdPartyKey::ALL {
        let item = template
            .get(&key)
            .ok_or(ConfigError::MissingThirdPartyEntry(key.as_str()))?;
        let base = palette.get(item.color_key);
        let color = match item.modifier {
            Some(modifier) => change_luminance(base, modifier),
            None => base.to_string(),
        };
        colors.insert(key, strip_hash(&color).to_string());
    }

    Ok(ThirdPartyTheme {
        theme_id: THIRD_PARTY_THEME_ID.to_string(),
        colors,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaletteColor;
    use crate::template::{DEFAULT_THEME_DARK, DEFAULT_THEME_LIGHT};
    use pretty_assertions::assert_eq;

    fn palette() -> Palette {
        Palette::from_entries([
            (PaletteColor::Background, "#101010".to_string()),
            (PaletteColor::BackgroundLight, "#202020".to_string()),
            (PaletteColor::BackgroundExtra, "#303030".to_string()),
            (PaletteColor::Text, "#c0c0c0".to_string()),
            (PaletteColor::TextFocus, "#ffffff".to_string()),
            (PaletteColor::AccentPrimary, "#804020".to_string()),
            (PaletteColor::AccentSecondary, "#204080".to_string()),
        ])
        .unwrap()
    }

    #[test]
    fn colors_are_six_digits_without_hash() {
        let theme = project_third_party_theme(&palette(), &DEFAULT_THEME_DARK.third_party).unwrap();
        assert_eq!(theme.colors.len(), ThirdPartyKey::ALL.len());
        for color in theme.colors.values() {
            assert_eq!(color.len(), 6);
            assert!(!color.starts_with('#'));
        }
    }

    #[test]
    fn link_colors_are_shifted() {
        let dark = project_third_party_theme(&palette(), &DEFAULT_THEME_DARK.third_party).unwrap();
        assert_eq!(dark.colors[&ThirdPartyKey::ResultLink], "264d9a");
        assert_eq!(dark.colors[&ThirdPartyKey::ResultLinkVisited], "9a4d26");
        assert_eq!(dark.colors[&ThirdPartyKey::Background], "101010");

        let light = project_third_party_theme(&palette(), &DEFAULT_THEME_LIGHT.third_party).unwrap();
        assert_eq!(light.colors[&ThirdPartyKey::ResultLink], "162d5a");
        assert_eq!(light.colors[&ThirdPartyKey::Background], "202020");
    }

    #[test]
    fn carries_the_theme_id_sentinel() {
        let theme = project_third_party_theme(&palette(), &DEFAULT_THEME_DARK.third_party).unwrap();
        let json = serde_json::to_value(&theme).unwrap();
        assert_eq!(json["kae"], THIRD_PARTY_THEME_ID);
        assert_eq!(json["k7"], "101010");
        assert_eq!(json["k21"], "202020");
    }

    #[test]
    fn missing_item_is_a_configuration_error() {
        let mut template = DEFAULT_THEME_DARK.third_party.clone();
        template.remove(&ThirdPartyKey::Hover);
        assert_eq!(
            project_third_party_theme(&palette(), &template),
            Err(ConfigError::MissingThirdPartyEntry("k21"))
        );
    }
}
