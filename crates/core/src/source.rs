//! Reading base palettes from the formats pywal leaves on disk.

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;

use crate::model::BASE_PALETTE_LEN;

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonPalette {
    List(Vec<String>),
    Pywal { colors: serde_json::Map<String, serde_json::Value> },
}

/// Parse a base palette from text.
///
/// Accepts a JSON array of colors, a pywal `colors.json` object, or one color
/// per line. Length is checked later, when the palette is validated.
pub fn parse_base_colors(raw: &str) -> Result<Vec<String>> {
    let trimmed = raw.trim_start();
    if trimmed.starts_with('[') || trimmed.starts_with('{') {
        let parsed: JsonPalette =
            serde_json::from_str(trimmed).context("Failed to parse palette JSON")?;
        return match parsed {
            JsonPalette::List(colors) => Ok(colors),
            JsonPalette::Pywal { colors } => pywal_colors(&colors),
        };
    }

    Ok(raw
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect())
}

pub fn read_base_colors(path: &Path) -> Result<Vec<String>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read palette from {}", path.display()))?;
    parse_base_colors(&raw).with_context(|| format!("Invalid palette in {}", path.display()))
}

fn pywal_colors(colors: &serde_json::Map<String, serde_json::Value>) -> Result<Vec<String>> {
    (0..BASE_PALETTE_LEN)
        .map(|index| {
            let key = format!("color{index}");
            colors
                .get(&key)
                .ok_or_else(|| anyhow!("pywal palette is missing `{key}`"))?
                .as_str()
                .map(str::to_string)
                .ok_or_else(|| anyhow!("pywal palette entry `{key}` is not a string"))
        })
        .collect()
}
