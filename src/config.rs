use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;
use tracing::debug;

/// Config file read when `--config` is not given.
pub const DEFAULT_CONFIG: &str = "chronal.toml";

/// Top-level chronal configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ChronalConfig {
    /// Ephemeris pass settings.
    #[serde(default)]
    pub ephemeris: EphemerisToml,

    /// Solar event locator settings.
    #[serde(default)]
    pub locator: LocatorToml,

    /// File paths.
    #[serde(default)]
    pub io: IoConfig,

    /// Output formatting.
    #[serde(default)]
    pub output: OutputToml,
}

impl ChronalConfig {
    /// Loads `path`, or `chronal.toml` when present, or the built-in defaults.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let path = match path {
            Some(p) => p,
            None if Path::new(DEFAULT_CONFIG).exists() => Path::new(DEFAULT_CONFIG),
            None => {
                debug!("no config file, using defaults");
                return Ok(Self::default());
            }
        };
        let toml_str = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file: {}", path.display()))?;
        let config: ChronalConfig = toml::from_str(&toml_str)
            .with_context(|| format!("failed to parse TOML config: {}", path.display()))?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct EphemerisToml {
    /// Approximate epoch of the first December solstice.
    #[serde(default = "default_start_jd")]
    pub start_jd: f64,
    /// Whole years to step back from `start_jd` before the first year.
    #[serde(default)]
    pub rewind_years: u32,
    /// Chronal year number of the year opening at `start_jd`.
    #[serde(default = "default_start_year")]
    pub start_year: i64,
    #[serde(default = "default_n_years")]
    pub n_years: u32,
}

impl Default for EphemerisToml {
    fn default() -> Self {
        Self {
            start_jd: default_start_jd(),
            rewind_years: 0,
            start_year: default_start_year(),
            n_years: default_n_years(),
        }
    }
}

fn default_start_jd() -> f64 {
    2_435_825.0
}
fn default_start_year() -> i64 {
    11_520
}
fn default_n_years() -> u32 {
    100
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocatorToml {
    #[serde(default = "default_bracket_days")]
    pub bracket_days: f64,
    #[serde(default = "default_tolerance_days")]
    pub tolerance_days: f64,
    #[serde(default = "default_max_iters")]
    pub max_iters: u64,
    #[serde(default = "default_residual_tolerance_deg")]
    pub residual_tolerance_deg: f64,
}

impl Default for LocatorToml {
    fn default() -> Self {
        Self {
            bracket_days: default_bracket_days(),
            tolerance_days: default_tolerance_days(),
            max_iters: default_max_iters(),
            residual_tolerance_deg: default_residual_tolerance_deg(),
        }
    }
}

fn default_bracket_days() -> f64 {
    8.0
}
fn default_tolerance_days() -> f64 {
    1e-5
}
fn default_max_iters() -> u64 {
    100
}
fn default_residual_tolerance_deg() -> f64 {
    1e-3
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct IoConfig {
    #[serde(default = "default_patterns")]
    pub patterns: PathBuf,
    #[serde(default = "default_labels")]
    pub labels: PathBuf,
    #[serde(default = "default_latex")]
    pub latex: PathBuf,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            patterns: default_patterns(),
            labels: default_labels(),
            latex: default_latex(),
        }
    }
}

fn default_patterns() -> PathBuf {
    PathBuf::from("patterns.txt")
}
fn default_labels() -> PathBuf {
    PathBuf::from("labels.txt")
}
fn default_latex() -> PathBuf {
    PathBuf::from("table.tex")
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputToml {
    /// Glyph set for label files: "ascii" or "unicode".
    #[serde(default = "default_glyphs")]
    pub glyphs: String,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            glyphs: default_glyphs(),
        }
    }
}

fn default_glyphs() -> String {
    "ascii".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let config: ChronalConfig = toml::from_str("").unwrap();
        assert_eq!(config.ephemeris.start_jd, 2_435_825.0);
        assert_eq!(config.ephemeris.start_year, 11_520);
        assert_eq!(config.ephemeris.rewind_years, 0);
        assert_eq!(config.locator.bracket_days, 8.0);
        assert_eq!(config.locator.max_iters, 100);
        assert_eq!(config.io.patterns, PathBuf::from("patterns.txt"));
        assert_eq!(config.output.glyphs, "ascii");
    }

    #[test]
    fn partial_sections() {
        let config: ChronalConfig = toml::from_str(
            r#"
            [ephemeris]
            start_jd = 2451900.0
            n_years = 3

            [locator]
            tolerance_days = 1e-6

            [io]
            labels = "out/labels.txt"
            "#,
        )
        .unwrap();
        assert_eq!(config.ephemeris.start_jd, 2_451_900.0);
        assert_eq!(config.ephemeris.n_years, 3);
        assert_eq!(config.ephemeris.start_year, 11_520);
        assert_eq!(config.locator.tolerance_days, 1e-6);
        assert_eq!(config.locator.bracket_days, 8.0);
        assert_eq!(config.io.labels, PathBuf::from("out/labels.txt"));
        assert_eq!(config.io.latex, PathBuf::from("table.tex"));
    }

    #[test]
    fn unknown_fields_rejected() {
        assert!(toml::from_str::<ChronalConfig>("seed = 3").is_err());
        assert!(toml::from_str::<ChronalConfig>("[locator]\nbracket = 4.0").is_err());
    }

    #[test]
    fn load_reads_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chronal.toml");
        std::fs::write(&path, "[output]\nglyphs = \"unicode\"\n").unwrap();
        let config = ChronalConfig::load(Some(&path)).unwrap();
        assert_eq!(config.output.glyphs, "unicode");

        let missing = dir.path().join("missing.toml");
        let err = ChronalConfig::load(Some(&missing)).unwrap_err();
        assert!(format!("{err:#}").contains("failed to read config file"));
    }
}
