use std::path::PathBuf;

use clap::{value_parser, Args, Parser, Subcommand, ValueEnum};

use crate::core::auto_mode::TimeEndpoint;
use crate::model::{PaletteColor, ThemeMode};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "pywalfox",
    version,
    about = "Generate browser themes from a pywal palette.",
    after_help = "Examples:\n  pywalfox generate\n  pywalfox --mode light generate --format css\n  pywalfox custom set accentPrimary '#ff00aa'\n  pywalfox luminance '#336699' -- -0.2"
)]
pub struct Cli {
    /// Override the data directory (defaults to platform-specific app dir)
    #[arg(long, value_name = "PATH", global = true)]
    pub data_dir: Option<PathBuf>,

    /// Tracing filter written to stderr (e.g. "info", "pywalfox_core=debug")
    #[arg(long = "log", value_name = "DIRECTIVE", global = true)]
    pub log_filter: Option<String>,

    /// Theme mode; `auto` switches between light and dark by time of day
    #[arg(long, value_enum, default_value_t = ThemeMode::Dark, global = true)]
    pub mode: ThemeMode,

    /// Start of the daytime window used by auto mode
    #[arg(long, value_name = "HH:MM", default_value = "10:00", global = true)]
    pub day_start: TimeEndpoint,

    /// End of the daytime window used by auto mode
    #[arg(long, value_name = "HH:MM", default_value = "19:00", global = true)]
    pub day_end: TimeEndpoint,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CliCommand {
    /// Generate the full theme for a palette
    Generate(GenerateArgs),
    /// Print the palette with the derived slots appended
    Extend(PaletteArgs),
    /// Print the theme hash and the key overrides are stored under
    Hash(PaletteArgs),
    /// Scale a color's channels by 1 + MODIFIER
    Luminance(LuminanceArgs),
    /// Normalize a loosely written hex color
    ValidateHex(ValueArgs),
    /// Convert an rgb()/rgba() expression to hex
    RgbToHex(ValueArgs),
    /// Manage custom colors for the current palette
    #[command(subcommand)]
    Custom(CustomCommand),
    /// Inspect and edit colorscheme templates
    #[command(subcommand)]
    Template(TemplateCommand),
    /// Report whether auto mode currently picks the light theme
    Daytime(DaytimeArgs),
}

#[derive(Args, Debug, Clone, Default)]
pub struct PaletteArgs {
    /// Palette file: JSON array, pywal colors.json, or one color per line
    /// (defaults to ~/.cache/wal/colors.json)
    #[arg(long, value_name = "PATH")]
    pub palette: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    #[command(flatten)]
    pub palette: PaletteArgs,

    /// Which part of the theme to print
    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// The whole generated theme
    Json,
    /// Browser theme colors
    Browser,
    /// Stylesheet for extension pages
    Css,
    /// DuckDuckGo settings
    ThirdParty,
    /// Dark Reader scheme
    Companion,
}

#[derive(Args, Debug, Clone)]
pub struct LuminanceArgs {
    /// Hex color, with or without `#`
    pub color: String,

    /// Scale factor offset; negative values darken
    #[arg(allow_negative_numbers = true)]
    pub modifier: f64,

    /// Lower channel bound
    #[arg(long, default_value_t = 0, value_parser = value_parser!(u8))]
    pub min: u8,

    /// Upper channel bound
    #[arg(long, default_value_t = 255, value_parser = value_parser!(u8))]
    pub max: u8,
}

#[derive(Args, Debug, Clone)]
pub struct ValueArgs {
    pub value: String,
}

#[derive(Subcommand, Debug, Clone)]
pub enum CustomCommand {
    /// Override one palette role with a fixed color
    Set(CustomSetArgs),
    /// Drop one custom color, or all of them when no role is given
    Reset(CustomResetArgs),
}

#[derive(Args, Debug, Clone)]
pub struct CustomSetArgs {
    #[command(flatten)]
    pub palette: PaletteArgs,

    /// Palette role (e.g. background, accentPrimary, text-focus)
    pub role: PaletteColor,

    /// Hex color
    pub color: String,
}

#[derive(Args, Debug, Clone)]
pub struct CustomResetArgs {
    #[command(flatten)]
    pub palette: PaletteArgs,

    pub role: Option<PaletteColor>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum TemplateCommand {
    /// List palette roles and browser properties with their descriptions
    List,
    /// Print the effective template
    Show(TemplateScopeArgs),
    /// Merge a JSON template patch; `null` entries reset to the default
    Set(TemplateSetArgs),
    /// Drop saved template edits
    Reset(TemplateScopeArgs),
}

#[derive(Args, Debug, Clone)]
pub struct TemplateScopeArgs {
    /// Apply to the global template instead of the current palette
    #[arg(long)]
    pub global: bool,

    #[command(flatten)]
    pub palette: PaletteArgs,
}

#[derive(Args, Debug, Clone)]
pub struct TemplateSetArgs {
    #[command(flatten)]
    pub scope: TemplateScopeArgs,

    /// Template patch, e.g. '{"palette": {"background": 4}, "browser": {"frame": null}}'
    #[arg(value_name = "JSON")]
    pub patch: String,
}

#[derive(Args, Debug, Clone)]
pub struct DaytimeArgs {
    /// Evaluate at this time instead of now
    #[arg(long, value_name = "HH:MM")]
    pub at: Option<TimeEndpoint>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_global_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "pywalfox",
            "generate",
            "--mode",
            "auto",
            "--day-start",
            "07:30",
            "--format",
            "css",
        ])
        .unwrap();
        assert_eq!(cli.mode, ThemeMode::Auto);
        assert_eq!(cli.day_start.to_string(), "07:30");
        assert_eq!(cli.day_end.to_string(), "19:00");
        match cli.command {
            CliCommand::Generate(args) => assert_eq!(args.format, OutputFormat::Css),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn accepts_negative_luminance_modifier() {
        let cli = Cli::try_parse_from(["pywalfox", "luminance", "#336699", "-0.2"]).unwrap();
        match cli.command {
            CliCommand::Luminance(args) => assert_eq!(args.modifier, -0.2),
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn parses_palette_role_loosely() {
        let cli =
            Cli::try_parse_from(["pywalfox", "custom", "set", "accent-primary", "#ff00aa"]).unwrap();
        match cli.command {
            CliCommand::Custom(CustomCommand::Set(args)) => {
                assert_eq!(args.role, PaletteColor::AccentPrimary)
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn rejects_malformed_day_bounds() {
        assert!(Cli::try_parse_from(["pywalfox", "--day-end", "25:00", "daytime"]).is_err());
    }
}
