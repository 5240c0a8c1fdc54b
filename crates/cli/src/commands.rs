use std::io::Write;
use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{Local, NaiveTime};

use crate::cli::{
    CliCommand, CustomCommand, DaytimeArgs, GenerateArgs, LuminanceArgs, OutputFormat,
    PaletteArgs, TemplateCommand, TemplateScopeArgs, TemplateSetArgs,
};
use crate::config::{pywal_palette_path, AppConfig};
use crate::core::template::BrowserProperty;
use crate::core::{
    change_luminance_within, extend_palette, read_base_colors, rgb_to_hex, validate_hex,
    BasePalette, ChannelBounds, SavedTemplate, ThemeService,
};
use crate::model::{PaletteColor, TemplateMode, ThemeMode};

pub fn execute<W: Write>(
    config: &AppConfig,
    mode: ThemeMode,
    command: CliCommand,
    mut writer: W,
) -> Result<()> {
    match command {
        CliCommand::Generate(args) => handle_generate(config, mode, &args, &mut writer),
        CliCommand::Extend(args) => handle_extend(&args, &mut writer),
        CliCommand::Hash(args) => handle_hash(config, mode, &args, &mut writer),
        CliCommand::Luminance(args) => handle_luminance(&args, &mut writer),
        CliCommand::ValidateHex(args) => {
            let hex = validate_hex(&args.value);
            if hex.is_empty() {
                bail!("`{}` contains no hex digits", args.value);
            }
            writeln!(writer, "#{}", hex)?;
            Ok(())
        }
        CliCommand::RgbToHex(args) => {
            let hex = rgb_to_hex(&args.value);
            if hex.is_empty() {
                bail!("`{}` is not an rgb() color", args.value);
            }
            writeln!(writer, "{}", hex)?;
            Ok(())
        }
        CliCommand::Custom(command) => handle_custom(config, mode, command, &mut writer),
        CliCommand::Template(command) => handle_template(config, mode, command, &mut writer),
        CliCommand::Daytime(args) => handle_daytime(config, &args, &mut writer),
    }
}

fn handle_generate<W: Write>(
    config: &AppConfig,
    mode: ThemeMode,
    args: &GenerateArgs,
    mut writer: W,
) -> Result<()> {
    let service = ThemeService::new(config.clone())?;
    let colors = load_palette(&args.palette)?;
    let theme = service.generate(&colors, resolve_mode(&service, mode))?;
    match args.format {
        OutputFormat::Json => write_json(&mut writer, &theme),
        OutputFormat::Browser => write_json(&mut writer, &theme.browser),
        OutputFormat::Css => {
            writeln!(writer, "{}", theme.extension_css)?;
            Ok(())
        }
        OutputFormat::ThirdParty => write_json(&mut writer, &theme.third_party),
        OutputFormat::Companion => write_json(&mut writer, &theme.companion_scheme),
    }
}

fn handle_extend<W: Write>(args: &PaletteArgs, mut writer: W) -> Result<()> {
    let base = BasePalette::new(load_palette(args)?)?;
    write_json(&mut writer, extend_palette(&base).colors())
}

fn handle_hash<W: Write>(
    config: &AppConfig,
    mode: ThemeMode,
    args: &PaletteArgs,
    mut writer: W,
) -> Result<()> {
    let service = ThemeService::new(config.clone())?;
    let theme = service.generate(&load_palette(args)?, resolve_mode(&service, mode))?;
    writeln!(writer, "hash: {}", theme.hash)?;
    writeln!(writer, "override key: {}", theme.override_key)?;
    Ok(())
}

fn handle_luminance<W: Write>(args: &LuminanceArgs, mut writer: W) -> Result<()> {
    if args.min > args.max {
        bail!("--min ({}) must not exceed --max ({})", args.min, args.max);
    }
    let bounds = ChannelBounds {
        min: args.min,
        max: args.max,
    };
    let adjusted = change_luminance_within(&args.color, args.modifier, bounds);
    if adjusted.is_empty() {
        bail!("`{}` needs six hex digits", args.color);
    }
    writeln!(writer, "{}", adjusted)?;
    Ok(())
}

fn handle_custom<W: Write>(
    config: &AppConfig,
    mode: ThemeMode,
    command: CustomCommand,
    mut writer: W,
) -> Result<()> {
    let service = ThemeService::new(config.clone())?;
    let mode = resolve_mode(&service, mode);
    match command {
        CustomCommand::Set(args) => {
            let colors = load_palette(&args.palette)?;
            let theme = service.set_custom_color(&colors, mode, args.role, &args.color)?;
            writeln!(
                writer,
                "Set {} to {} ({} mode)",
                args.role,
                theme.palette.get(args.role),
                mode
            )?;
        }
        CustomCommand::Reset(args) => {
            let colors = load_palette(&args.palette)?;
            service.reset_custom_colors(&colors, mode, args.role)?;
            match args.role {
                Some(role) => writeln!(writer, "Reset {} ({} mode)", role, mode)?,
                None => writeln!(writer, "Reset all custom colors ({} mode)", mode)?,
            }
        }
    }
    Ok(())
}

fn handle_template<W: Write>(
    config: &AppConfig,
    mode: ThemeMode,
    command: TemplateCommand,
    mut writer: W,
) -> Result<()> {
    if let TemplateCommand::List = command {
        return write_template_listing(&mut writer);
    }

    let service = ThemeService::new(config.clone())?;
    let mode = resolve_mode(&service, mode);
    match command {
        TemplateCommand::List => Ok(()),
        TemplateCommand::Show(scope) => {
            if scope.global {
                write_json(&mut writer, &service.global_template(mode)?)
            } else {
                let theme = service.generate(&load_palette(&scope.palette)?, mode)?;
                write_json(&mut writer, &theme.template)
            }
        }
        TemplateCommand::Set(args) => handle_template_set(&service, mode, args, &mut writer),
        TemplateCommand::Reset(scope) => handle_template_reset(&service, mode, scope, &mut writer),
    }
}

fn handle_template_set<W: Write>(
    service: &ThemeService,
    mode: TemplateMode,
    args: TemplateSetArgs,
    mut writer: W,
) -> Result<()> {
    let patch: SavedTemplate =
        serde_json::from_str(&args.patch).context("Invalid template patch")?;
    if args.scope.global {
        service.save_global_template(mode, patch)?;
        writeln!(writer, "Updated global {} template", mode)?;
    } else {
        let colors = load_palette(&args.scope.palette)?;
        let theme = service.save_template(&colors, mode, patch)?;
        writeln!(
            writer,
            "Updated {} template for palette {}",
            mode, theme.override_key
        )?;
    }
    Ok(())
}

fn handle_template_reset<W: Write>(
    service: &ThemeService,
    mode: TemplateMode,
    scope: TemplateScopeArgs,
    mut writer: W,
) -> Result<()> {
    if scope.global {
        service.reset_global_template(mode)?;
        writeln!(writer, "Reset global {} template", mode)?;
    } else {
        let colors = load_palette(&scope.palette)?;
        let theme = service.reset_template(&colors, mode)?;
        writeln!(
            writer,
            "Reset {} template for palette {}",
            mode, theme.override_key
        )?;
    }
    Ok(())
}

fn write_template_listing<W: Write>(mut writer: W) -> Result<()> {
    writeln!(writer, "Palette")?;
    for color in PaletteColor::ALL {
        writeln!(
            writer,
            "  {:<18} {} - {}",
            color.as_str(),
            color.title(),
            color.description()
        )?;
    }
    writeln!(writer, "Browser")?;
    for property in BrowserProperty::ALL {
        writeln!(
            writer,
            "  {:<32} {} - {}",
            property.as_str(),
            property.title(),
            property.description()
        )?;
    }
    Ok(())
}

fn handle_daytime<W: Write>(config: &AppConfig, args: &DaytimeArgs, mut writer: W) -> Result<()> {
    let interval = config.day_interval();
    let now = Local::now().naive_local();
    let now = match args.at {
        Some(at) => now.date().and_time(at.as_time()),
        None => now,
    };
    let is_day = interval.is_day(now.time());
    writeln!(
        writer,
        "{} ({}-{}): auto mode uses the {} template",
        if is_day { "Day" } else { "Night" },
        interval.start,
        interval.end,
        ThemeMode::Auto.resolve(is_day)
    )?;
    match interval.next_transition(now) {
        Some(next) => writeln!(writer, "Next switch at {}", next.format("%H:%M"))?,
        None => writeln!(writer, "Daytime window is empty; auto mode stays dark")?,
    }
    Ok(())
}

fn resolve_mode(service: &ThemeService, mode: ThemeMode) -> TemplateMode {
    let resolved = service.resolve_mode(mode, current_time());
    tracing::debug!(requested = %mode, resolved = %resolved, "theme mode resolved");
    resolved
}

fn current_time() -> NaiveTime {
    Local::now().time()
}

fn load_palette(args: &PaletteArgs) -> Result<Vec<String>> {
    let path: PathBuf = args
        .palette
        .clone()
        .or_else(pywal_palette_path)
        .ok_or_else(|| anyhow!("No palette given and no home directory to find pywal's"))?;
    let colors = read_base_colors(&path)?;
    tracing::debug!(path = %path.display(), count = colors.len(), "palette loaded");
    Ok(colors)
}

fn write_json<W: Write, T: serde::Serialize + ?Sized>(mut writer: W, value: &T) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, value)?;
    writeln!(writer)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{CustomResetArgs, CustomSetArgs, ValueArgs};
    use pretty_assertions::assert_eq;
    use rstest::rstest;
    use tempfile::TempDir;

    struct Fixture {
        config: AppConfig,
        palette: PaletteArgs,
        _dir: TempDir,
    }

    fn fixture() -> Fixture {
        let dir = TempDir::new().expect("temp dir");
        let config = AppConfig::from_data_dir(dir.path().join("data")).expect("config");
        let colors: Vec<String> = (0..16u8)
            .map(|i| {
                let v = i * 17;
                format!("#{v:02x}{v:02x}{v:02x}")
            })
            .collect();
        let palette_path = dir.path().join("colors.json");
        std::fs::write(&palette_path, serde_json::to_string(&colors).unwrap()).unwrap();
        Fixture {
            config,
            palette: PaletteArgs {
                palette: Some(palette_path),
            },
            _dir: dir,
        }
    }

    fn run(fixture: &Fixture, mode: ThemeMode, command: CliCommand) -> String {
        let mut output = Vec::new();
        execute(&fixture.config, mode, command, &mut output).expect("execute");
        String::from_utf8(output).expect("utf8")
    }

    fn generate_for(fixture: &Fixture, format: OutputFormat) -> CliCommand {
        CliCommand::Generate(GenerateArgs {
            palette: fixture.palette.clone(),
            format,
        })
    }

    #[test]
    fn generate_prints_full_theme_json() {
        let fixture = fixture();
        let output = run(&fixture, ThemeMode::Dark, generate_for(&fixture, OutputFormat::Json));
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["mode"], "dark");
        assert_eq!(value["palette"]["background"], "#000000");
        assert_eq!(value["thirdParty"]["kae"], "pywalfox");
        assert_eq!(value["companionScheme"]["darkSchemeTextColor"], "#ffffff");
    }

    #[test]
    fn generate_css_for_light_mode() {
        let fixture = fixture();
        let output = run(&fixture, ThemeMode::Light, generate_for(&fixture, OutputFormat::Css));
        assert!(output.starts_with("body, body.light, body.dark{--background:#cdcdcd;"));
        assert!(output.contains("--text-focus:#000000;"));
    }

    #[test]
    fn extend_appends_derived_slots() {
        let fixture = fixture();
        let output = run(&fixture, ThemeMode::Dark, CliCommand::Extend(fixture.palette.clone()));
        let colors: Vec<String> = serde_json::from_str(&output).unwrap();
        assert_eq!(colors.len(), 20);
        assert_eq!(colors[17], "#ffffff");
        assert_eq!(colors[19], "#cdcdcd");
    }

    #[test]
    fn hash_reports_both_keys() {
        let fixture = fixture();
        let output = run(&fixture, ThemeMode::Dark, CliCommand::Hash(fixture.palette.clone()));
        assert!(output.starts_with("hash: "));
        assert!(output.contains("override key: 000000111111"));
    }

    #[rstest]
    #[case("#336699", 0.2, "#3d7ab8")]
    #[case("336699", -0.5, "#1a334d")]
    #[case("#000000", 0.5, "#141414")]
    fn luminance_prints_adjusted_color(
        #[case] color: &str,
        #[case] modifier: f64,
        #[case] expected: &str,
    ) {
        let fixture = fixture();
        let command = CliCommand::Luminance(LuminanceArgs {
            color: color.into(),
            modifier,
            min: 0,
            max: 255,
        });
        assert_eq!(run(&fixture, ThemeMode::Dark, command).trim(), expected);
    }

    #[test]
    fn luminance_rejects_inverted_bounds() {
        let fixture = fixture();
        let command = CliCommand::Luminance(LuminanceArgs {
            color: "#336699".into(),
            modifier: 0.1,
            min: 200,
            max: 100,
        });
        let mut output = Vec::new();
        assert!(execute(&fixture.config, ThemeMode::Dark, command, &mut output).is_err());
    }

    #[test]
    fn validate_and_convert_colors() {
        let fixture = fixture();
        let validated = run(
            &fixture,
            ThemeMode::Dark,
            CliCommand::ValidateHex(ValueArgs { value: "#F0a".into() }),
        );
        assert_eq!(validated.trim(), "#FF00aa");

        let converted = run(
            &fixture,
            ThemeMode::Dark,
            CliCommand::RgbToHex(ValueArgs {
                value: "rgb(255, 0, 170)".into(),
            }),
        );
        assert_eq!(converted.trim(), "#ff00aa");
    }

    #[test]
    fn custom_colors_flow_into_generated_theme() {
        let fixture = fixture();
        let set = CliCommand::Custom(CustomCommand::Set(CustomSetArgs {
            palette: fixture.palette.clone(),
            role: PaletteColor::Background,
            color: "#123456".into(),
        }));
        assert_eq!(
            run(&fixture, ThemeMode::Dark, set).trim(),
            "Set background to #123456 (dark mode)"
        );

        let css = run(&fixture, ThemeMode::Dark, generate_for(&fixture, OutputFormat::Css));
        assert!(css.contains("--background:#123456;"));

        let reset = CliCommand::Custom(CustomCommand::Reset(CustomResetArgs {
            palette: fixture.palette.clone(),
            role: None,
        }));
        run(&fixture, ThemeMode::Dark, reset);
        let css = run(&fixture, ThemeMode::Dark, generate_for(&fixture, OutputFormat::Css));
        assert!(css.contains("--background:#000000;"));
    }

    #[test]
    fn template_patch_with_null_resets_entry() {
        let fixture = fixture();
        let scope = TemplateScopeArgs {
            global: false,
            palette: fixture.palette.clone(),
        };
        let set = |patch: &str| {
            CliCommand::Template(TemplateCommand::Set(TemplateSetArgs {
                scope: scope.clone(),
                patch: patch.into(),
            }))
        };

        run(&fixture, ThemeMode::Dark, set(r#"{"palette": {"background": 4}}"#));
        let css = run(&fixture, ThemeMode::Dark, generate_for(&fixture, OutputFormat::Css));
        assert!(css.contains("--background:#444444;"));

        run(&fixture, ThemeMode::Dark, set(r#"{"palette": {"background": null}}"#));
        let css = run(&fixture, ThemeMode::Dark, generate_for(&fixture, OutputFormat::Css));
        assert!(css.contains("--background:#000000;"));
    }

    #[test]
    fn invalid_template_patch_is_reported() {
        let fixture = fixture();
        let command = CliCommand::Template(TemplateCommand::Set(TemplateSetArgs {
            scope: TemplateScopeArgs {
                global: true,
                palette: PaletteArgs::default(),
            },
            patch: r#"{"palette": {"nonsense": 1}}"#.into(),
        }));
        let mut output = Vec::new();
        let err = execute(&fixture.config, ThemeMode::Dark, command, &mut output).unwrap_err();
        assert!(err.to_string().contains("Invalid template patch"));
    }

    #[test]
    fn global_template_show_reflects_edits() {
        let fixture = fixture();
        let global = TemplateScopeArgs {
            global: true,
            palette: PaletteArgs::default(),
        };
        run(
            &fixture,
            ThemeMode::Light,
            CliCommand::Template(TemplateCommand::Set(TemplateSetArgs {
                scope: global.clone(),
                patch: r#"{"browser": {"frame": "accentPrimary"}}"#.into(),
            })),
        );
        let shown = run(
            &fixture,
            ThemeMode::Light,
            CliCommand::Template(TemplateCommand::Show(global.clone())),
        );
        let value: serde_json::Value = serde_json::from_str(&shown).unwrap();
        assert_eq!(value["browser"]["frame"], "accentPrimary");

        run(
            &fixture,
            ThemeMode::Light,
            CliCommand::Template(TemplateCommand::Reset(global.clone())),
        );
        let shown = run(
            &fixture,
            ThemeMode::Light,
            CliCommand::Template(TemplateCommand::Show(global)),
        );
        let value: serde_json::Value = serde_json::from_str(&shown).unwrap();
        assert_eq!(value["browser"]["frame"], "background");
    }

    #[test]
    fn template_list_names_every_target() {
        let fixture = fixture();
        let output = run(&fixture, ThemeMode::Dark, CliCommand::Template(TemplateCommand::List));
        assert!(output.contains("accentSecondary"));
        assert!(output.contains("toolbar_field_text"));
        let expected = 2 + PaletteColor::ALL.len() + BrowserProperty::ALL.len();
        assert_eq!(output.lines().count(), expected);
    }

    #[rstest]
    #[case("12:00", "Day (10:00-19:00): auto mode uses the light template", "Next switch at 19:00")]
    #[case("21:30", "Night (10:00-19:00): auto mode uses the dark template", "Next switch at 10:00")]
    fn daytime_reports_state(#[case] at: &str, #[case] first: &str, #[case] second: &str) {
        let fixture = fixture();
        let command = CliCommand::Daytime(DaytimeArgs {
            at: Some(at.parse().unwrap()),
        });
        let output = run(&fixture, ThemeMode::Auto, command);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines, vec![first, second]);
    }
}
