use crate::error::ConfigError;
use crate::model::{CustomColors, ExtendedPalette, Palette, PaletteColor};
use crate::template::PaletteTemplate;

/// Resolve every palette role through `template`, then let `custom_colors` win.
pub fn generate_palette(
    extended: &ExtendedPalette,
    template: &PaletteTemplate,
    custom_colors: &CustomColors,
) -> Result<Palette, ConfigError> {
    let mut entries = Vec::with_capacity(PaletteColor::ALL.len());
    for key in PaletteColor::ALL {
        let index = *template
            .get(&key)
            .ok_or(ConfigError::MissingPaletteEntry(key))?;
        let color = extended
            .get(index)
            .ok_or(ConfigError::PaletteIndexOutOfRange {
                key,
                index,
                len: extended.len(),
            })?;
        entries.push((key, color.to_string()));
    }

    let mut palette = Palette::from_entries(entries)?;
    for (key, color) in custom_colors {
        *palette.get_mut(*key) = color.clone();
    }
    Ok(palette)
}
