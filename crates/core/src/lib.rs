pub mod auto_mode;
pub mod colors;
pub mod config;
pub mod error;
pub mod extend;
pub mod hash;
pub mod model;
pub mod palette;
pub mod projectors;
pub mod services;
pub mod source;
pub mod store;
pub mod template;
pub mod theme;

pub use auto_mode::{is_day_time, next_transition, DayInterval, TimeEndpoint};
pub use colors::{
    change_luminance, change_luminance_within, rgb_to_hex, validate_hex, ChannelBounds,
};
pub use config::AppConfig;
pub use error::{ConfigError, PaletteError, ThemeError, TimeError};
pub use extend::{extend_palette, ExtensionRule, ExtensionSpec, DEFAULT_EXTENSION_SPEC};
pub use hash::{base_palette_hash, palette_hash};
pub use model::*;
pub use palette::generate_palette;
pub use services::ThemeService;
pub use source::{parse_base_colors, read_base_colors};
pub use store::{OverrideStore, PaletteOverrides};
pub use template::{default_template, resolve_template, ColorschemeTemplate, SavedTemplate};
pub use theme::{generate_theme, generate_theme_for, GeneratedTheme};
