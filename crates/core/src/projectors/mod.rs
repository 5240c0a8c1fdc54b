//! Mappings from a semantic palette to the shapes each consumer expects.

mod browser;
mod companion;
mod css;
mod third_party;

pub use browser::{project_browser_theme, BrowserTheme};
pub use companion::{project_companion_scheme, CompanionScheme};
pub use css::{project_extension_css, EXTENSION_THEME_SELECTOR};
pub use third_party::{project_third_party_theme, ThirdPartyTheme, THIRD_PARTY_THEME_ID};
