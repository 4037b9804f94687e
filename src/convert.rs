//! Pure conversion functions: TOML config structs -> crate API config types.

use anyhow::{Context, Result, bail};

use chronal_numeral::Glyphs;
use chronal_solar::LocatorConfig;

use crate::config::LocatorToml;

/// Parses a glyph set name into the corresponding enum variant.
pub fn parse_glyphs(s: &str) -> Result<Glyphs> {
    match s.to_lowercase().as_str() {
        "ascii" => Ok(Glyphs::Ascii),
        "unicode" => Ok(Glyphs::Unicode),
        other => bail!("unknown glyph set: {other:?}"),
    }
}

/// Builds and validates a `LocatorConfig` from TOML settings.
pub fn build_locator_config(locator: &LocatorToml) -> Result<LocatorConfig> {
    let config = LocatorConfig::new()
        .with_bracket_days(locator.bracket_days)
        .with_tolerance_days(locator.tolerance_days)
        .with_max_iters(locator.max_iters)
        .with_residual_tolerance_deg(locator.residual_tolerance_deg);
    config.validate().context("invalid [locator] config")?;
    Ok(config)
}
