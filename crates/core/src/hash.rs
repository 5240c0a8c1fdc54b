//! Change-detection fingerprints. Not collision resistant, and not meant to be.

use crate::colors::strip_hash;
use crate::model::{BasePalette, Palette};

/// Concatenate the palette's colors, without `#`, ordered by role name.
pub fn palette_hash(palette: &Palette) -> String {
    let mut entries: Vec<(&str, &str)> = palette
        .iter()
        .map(|(key, color)| (key.as_str(), color))
        .collect();
    entries.sort_by(|a, b| a.0.cmp(b.0));

    entries
        .into_iter()
        .map(|(_, color)| strip_hash(color))
        .collect()
}

/// Fingerprint of the raw pywal colors, used to scope per-palette overrides.
pub fn base_palette_hash(base: &BasePalette) -> String {
    base.colors()
        .iter()
        .map(|color| strip_hash(color).to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::PaletteColor;
    use pretty_assertions::assert_eq;

    fn palette(pairs: &[(PaletteColor, &str)]) -> Palette {
        Palette::from_entries(pairs.iter().map(|(k, v)| (*k, v.to_string()))).unwrap()
    }

    fn palette_a() -> Palette {
        palette(&[
            (PaletteColor::Background, "#FFFFFF"),
            (PaletteColor::BackgroundLight, "#FFFFFF"),
            (PaletteColor::BackgroundExtra, "#FFFFFF"),
            (PaletteColor::Text, "#FFFFFF"),
            (PaletteColor::TextFocus, "#000000"),
            (PaletteColor::AccentPrimary, "#FFFFFF"),
            (PaletteColor::AccentSecondary, "#FFFFFF"),
        ])
    }

    #[test]
    fn hash_is_deterministic() {
        assert_eq!(palette_hash(&palette_a()), palette_hash(&palette_a()));
    }

    #[test]
    fn hash_orders_by_role_name() {
        let p = palette(&[
            (PaletteColor::Background, "#000001"),
            (PaletteColor::BackgroundLight, "#000002"),
            (PaletteColor::BackgroundExtra, "#000003"),
            (PaletteColor::Text, "#000004"),
            (PaletteColor::TextFocus, "#000005"),
            (PaletteColor::AccentPrimary, "#000006"),
            (PaletteColor::AccentSecondary, "#000007"),
        ]);
        // accentPrimary, accentSecondary, background, backgroundExtra,
        // backgroundLight, text, textFocus
        assert_eq!(
            palette_hash(&p),
            "000006000007000001000003000002000004000005"
        );
    }

    #[test]
    fn insertion_order_does_not_matter() {
        let mut reversed: Vec<(PaletteColor, String)> = palette_a()
            .iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();
        reversed.reverse();
        let rebuilt = Palette::from_entries(reversed).unwrap();

        assert_eq!(palette_hash(&rebuilt), palette_hash(&palette_a()));
    }

    #[test]
    fn any_changed_value_changes_the_hash() {
        let base = palette_a();
        for key in PaletteColor::ALL {
            let mut changed = base.clone();
            *changed.get_mut(key) = "#123456".into();
            assert_ne!(palette_hash(&changed), palette_hash(&base), "role {key}");
        }
    }

    #[test]
    fn base_hash_ignores_case_and_hash_symbol() {
        let upper: Vec<String> = (0..16).map(|i| format!("#{:06X}", i * 0xABCD)).collect();
        let lower: Vec<String> = (0..16).map(|i| format!("{:06x}", i * 0xABCD)).collect();
        assert_eq!(
            base_palette_hash(&BasePalette::new(upper).unwrap()),
            base_palette_hash(&BasePalette::new(lower).unwrap())
        );
    }
}
