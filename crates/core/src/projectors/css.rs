use crate::colors::is_safe_color_token;
use crate::error::ThemeError;
use crate::model::{Palette, PaletteColor};

pub const EXTENSION_THEME_SELECTOR: &str = "body, body.light, body.dark";

/// Build the stylesheet injected into extension pages: one custom property per palette role.
pub fn project_extension_css(palette: &Palette) -> Result<String, ThemeError> {
    let mut css =
        String::with_capacity(EXTENSION_THEME_SELECTOR.len() + 32 * PaletteColor::ALL.len());
    css.push_str(EXTENSION_THEME_SELECTOR);
    css.push('{');
    for (key, color) in palette.iter() {
        if !is_safe_color_token(color) {
            return Err(ThemeError::UnsafeColor {
                key,
                value: color.to_string(),
            });
        }
        css.push_str(key.css_variable());
        css.push(':');
        css.push_str(color);
        css.push(';');
    }
    css.push('}');
    Ok(css)
}
