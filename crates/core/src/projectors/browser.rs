use std::collections::BTreeMap;

use crate::error::ConfigError;
use crate::model::Palette;
use crate::template::{BrowserProperty, BrowserTemplate};

/// Property to color, ready for the browser's `theme.update({ colors })`.
pub type BrowserTheme = BTreeMap<BrowserProperty, String>;

pub fn project_browser_theme(
    palette: &Palette,
    template: &BrowserTemplate,
) -> Result<BrowserTheme, ConfigError> {
    BrowserProperty::ALL
        .iter()
        .map(|property| {
            let key = template
                .get(property)
                .ok_or(ConfigError::MissingBrowserEntry(property.as_str()))?;
            Ok((*property, palette.get(*key).to_string()))
        })
        .collect()
}
