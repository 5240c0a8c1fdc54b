use serde::Serialize;

use crate::error::ThemeError;
use crate::extend::extend_palette;
use crate::hash::{base_palette_hash, palette_hash};
use crate::model::{BasePalette, CustomColors, Palette, TemplateMode, ThemeMode};
use crate::palette::generate_palette;
use crate::projectors::{
    project_browser_theme, project_companion_scheme, project_extension_css,
    project_third_party_theme, BrowserTheme, CompanionScheme, ThirdPartyTheme,
};
use crate::template::{resolve_template, ColorschemeTemplate, SavedTemplate};

/// Everything derived from one base palette in one mode.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedTheme {
    /// Fingerprint of `palette`, for change detection.
    pub hash: String,
    /// Fingerprint of the base palette, under which user overrides are stored.
    pub override_key: String,
    pub mode: TemplateMode,
    pub template: ColorschemeTemplate,
    pub palette: Palette,
    pub browser: BrowserTheme,
    pub extension_css: String,
    pub third_party: ThirdPartyTheme,
    pub companion_scheme: CompanionScheme,
}

/// Run the whole pipeline. `base_colors` is validated before anything is derived.
pub fn generate_theme(
    mode: TemplateMode,
    base_colors: &[String],
    custom_colors: &CustomColors,
    global_template: &ColorschemeTemplate,
    saved_template: Option<&SavedTemplate>,
) -> Result<GeneratedTheme, ThemeError> {
    let base = BasePalette::new(base_colors.to_vec())?;
    let template = resolve_template(global_template, saved_template);
    let extended = extend_palette(&base);
    let palette = generate_palette(&extended, &template.palette, custom_colors)?;

    Ok(GeneratedTheme {
        hash: palette_hash(&palette),
        override_key: base_palette_hash(&base),
        mode,
        browser: project_browser_theme(&palette, &template.browser)?,
        extension_css: project_extension_css(&palette)?,
        third_party: project_third_party_theme(&palette, &template.third_party)?,
        companion_scheme: project_companion_scheme(&palette, mode),
        template,
        palette,
    })
}

/// Like [`generate_theme`], but takes the user's mode and whether it is
/// currently day, so [`ThemeMode::Auto`] resolves here.
pub fn generate_theme_for(
    mode: ThemeMode,
    is_day: bool,
    base_colors: &[String],
    custom_colors: &CustomColors,
    global_template: &ColorschemeTemplate,
    saved_template: Option<&SavedTemplate>,
) -> Result<GeneratedTheme, ThemeError> {
    generate_theme(
        mode.resolve(is_day),
        base_colors,
        custom_colors,
        global_template,
        saved_template,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{ConfigError, PaletteError};
    use crate::model::PaletteColor;
    use crate::template::{default_template, BrowserProperty};
    use pretty_assertions::assert_eq;

    fn base_colors() -> Vec<String> {
        [
            "#000000", "#111111", "#222222", "#333333", "#444444", "#555555", "#666666",
            "#777777", "#888888", "#999999", "#aaaaaa", "#bbbbbb", "#cccccc", "#dddddd",
            "#eeeeee", "#ffffff",
        ]
        .iter()
        .map(|c| c.to_string())
        .collect()
    }

    fn dark(custom: &CustomColors, saved: Option<&SavedTemplate>) -> Result<GeneratedTheme, ThemeError> {
        generate_theme(
            TemplateMode::Dark,
            &base_colors(),
            custom,
            default_template(TemplateMode::Dark),
            saved,
        )
    }

    #[test]
    fn end_to_end_dark_theme() {
        let theme = dark(&CustomColors::new(), None).unwrap();

        assert_eq!(theme.palette.background, "#000000");
        assert_eq!(theme.palette.text, "#ffffff");
        assert!(theme.extension_css.contains("--background:#000000;"));
        assert_eq!(theme.browser[&BrowserProperty::Frame], "#000000");
        assert_eq!(theme.hash, palette_hash(&theme.palette));
        assert_eq!(theme.template, *default_template(TemplateMode::Dark));
    }

    #[test]
    fn light_mode_uses_light_template_and_companion_names() {
        let theme = generate_theme(
            TemplateMode::Light,
            &base_colors(),
            &CustomColors::new(),
            default_template(TemplateMode::Light),
            None,
        )
        .unwrap();

        assert_eq!(theme.palette.background, "#cdcdcd");
        assert_eq!(theme.palette.text_focus, "#000000");
        assert_eq!(theme.companion_scheme.mode(), TemplateMode::Light);
    }

    #[test]
    fn custom_colors_change_the_hash_but_not_the_override_key() {
        let plain = dark(&CustomColors::new(), None).unwrap();
        let custom = CustomColors::from([(PaletteColor::AccentPrimary, "#ff0000".to_string())]);
        let tinted = dark(&custom, None).unwrap();

        assert_eq!(tinted.palette.accent_primary, "#ff0000");
        assert_ne!(tinted.hash, plain.hash);
        assert_eq!(tinted.override_key, plain.override_key);
    }

    #[test]
    fn saved_template_is_applied() {
        let saved: SavedTemplate =
            serde_json::from_str(r#"{"palette": {"background": 4, "text": null}}"#).unwrap();
        let theme = dark(&CustomColors::new(), Some(&saved)).unwrap();

        assert_eq!(theme.palette.background, "#444444");
        assert_eq!(theme.palette.text, "#ffffff");
    }

    #[test]
    fn short_base_palette_is_rejected_before_derivation() {
        let mut colors = base_colors();
        colors.truncate(12);
        let result = generate_theme(
            TemplateMode::Dark,
            &colors,
            &CustomColors::new(),
            default_template(TemplateMode::Dark),
            None,
        );
        assert_eq!(
            result,
            Err(ThemeError::Palette(PaletteError::WrongLength {
                expected: 16,
                actual: 12
            }))
        );
    }

    #[test]
    fn broken_template_surfaces_as_configuration_error() {
        let mut template = default_template(TemplateMode::Dark).clone();
        template.browser.remove(&BrowserProperty::Sidebar);
        let result = generate_theme(
            TemplateMode::Dark,
            &base_colors(),
            &CustomColors::new(),
            &template,
            None,
        );
        assert_eq!(
            result,
            Err(ThemeError::Config(ConfigError::MissingBrowserEntry("sidebar")))
        );
    }

    #[test]
    fn untrusted_custom_color_cannot_reach_the_css() {
        let custom = CustomColors::from([(PaletteColor::Text, "#XXXXXX".to_string())]);
        assert!(matches!(
            dark(&custom, None),
            Err(ThemeError::UnsafeColor {
                key: PaletteColor::Text,
                ..
            })
        ));
    }

    #[test]
    fn malformed_base_color_is_a_palette_error() {
        let mut colors = base_colors();
        colors[0] = "#zzzzzz".into();
        assert_eq!(
            dark_from(&colors),
            Err(ThemeError::Palette(PaletteError::MalformedColor {
                index: 0,
                value: "#zzzzzz".into()
            }))
        );
    }

    #[test]
    fn auto_mode_follows_the_day_flag() {
        let generate = |is_day| {
            generate_theme_for(
                ThemeMode::Auto,
                is_day,
                &base_colors(),
                &CustomColors::new(),
                default_template(ThemeMode::Auto.resolve(is_day)),
                None,
            )
            .unwrap()
        };
        assert_eq!(generate(true).mode, TemplateMode::Light);
        assert_eq!(generate(false).mode, TemplateMode::Dark);
        assert_eq!(generate(true).palette.background, "#cdcdcd");
    }

    fn dark_from(colors: &[String]) -> Result<GeneratedTheme, ThemeError> {
        generate_theme(
            TemplateMode::Dark,
            colors,
            &CustomColors::new(),
            default_template(TemplateMode::Dark),
            None,
        )
    }
}
