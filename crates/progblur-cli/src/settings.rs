use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use progblur::{BlurConfig, Color, Direction, Side};
use serde::Deserialize;

use crate::args::{Args, Preset};

/// Blur settings read from a TOML file. Every key is optional.
///
/// ```toml
/// strength = 48
/// steps = 6
/// falloff_percentage = 90
/// tint = "rgba(69, 69, 69, 0.2)"
/// direction = "bottom"
/// ```
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FileSettings {
    pub strength: Option<f32>,
    pub steps: Option<i32>,
    pub falloff_percentage: Option<f32>,
    pub tint: Option<String>,
    pub direction: Option<String>,
    /// File the settings were read from, for error messages.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

impl FileSettings {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        let mut settings = Self::from_toml(&text)
            .with_context(|| format!("invalid config {}", path.display()))?;
        settings.source = Some(path.to_owned());
        Ok(settings)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Error label for `key` when its value came from this file.
    fn label(&self, key: &str) -> String {
        match &self.source {
            Some(path) => format!("{key} (from {})", path.display()),
            None => format!("{key} (from config file)"),
        }
    }
}

pub fn parse_direction(s: &str) -> Result<Direction> {
    if s.trim().eq_ignore_ascii_case("radial") {
        return Ok(Direction::Radial);
    }
    match Side::parse(s) {
        Some(side) => Ok(Direction::Linear(side)),
        None => bail!("unknown direction '{s}' (expected top, bottom, left, right or radial)"),
    }
}

fn parse_tint(s: &str) -> Result<Color> {
    Ok(s.parse::<Color>()?)
}

/// Layers preset, then file, then command line flags.
pub fn resolve(args: &Args, file: Option<FileSettings>) -> Result<BlurConfig> {
    let mut config = match args.preset {
        Some(Preset::Linear) => BlurConfig::linear_demo(),
        Some(Preset::Radial) => BlurConfig::radial_demo(),
        None => BlurConfig::default(),
    };

    let file = file.unwrap_or_default();
    let strength = args.strength.or(file.strength);
    let steps = args.steps.or(file.steps);
    let falloff = args.falloff.or(file.falloff_percentage);
    // Keep where string values came from so errors point at the right input.
    let tint = match (&args.tint, &file.tint) {
        (Some(s), _) => Some((s.as_str(), "--tint".to_owned())),
        (None, Some(s)) => Some((s.as_str(), file.label("tint"))),
        (None, None) => None,
    };
    let direction = match (&args.direction, &file.direction) {
        (Some(s), _) => Some((s.as_str(), "--direction".to_owned())),
        (None, Some(s)) => Some((s.as_str(), file.label("direction"))),
        (None, None) => None,
    };

    if let Some(v) = strength {
        config = config.strength(v);
    }
    if let Some(n) = steps {
        config = config.steps(n);
    }
    if let Some(v) = falloff {
        config = config.falloff_percentage(v);
    }
    if let Some((s, label)) = tint {
        config = config.tint(parse_tint(s).context(label)?);
    }
    if let Some((s, label)) = direction {
        config = config.direction(parse_direction(s).context(label)?);
    }

    log::debug!("resolved config: {config:?}");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn args(extra: &[&str]) -> Args {
        let mut argv = vec!["progblur"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    // ── file parsing ──────────────────────────────────────────────────────

    #[test]
    fn parses_full_file() {
        let file = FileSettings::from_toml(
            r##"
            strength = 48
            steps = 6
            falloff_percentage = 90.5
            tint = "#45454580"
            direction = "bottom"
            "##,
        )
        .unwrap();
        assert_eq!(file.strength, Some(48.0));
        assert_eq!(file.steps, Some(6));
        assert_eq!(file.falloff_percentage, Some(90.5));
        assert_eq!(file.tint.as_deref(), Some("#45454580"));
        assert_eq!(file.direction.as_deref(), Some("bottom"));
        assert!(file.source.is_none());
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(FileSettings::from_toml("blur = 3").is_err());
    }

    #[test]
    fn empty_file_is_all_defaults() {
        let file = FileSettings::from_toml("").unwrap();
        let config = resolve(&args(&[]), Some(file)).unwrap();
        assert_eq!(config, BlurConfig::default());
    }

    #[test]
    fn missing_file_reports_path() {
        let err = FileSettings::load(Path::new("/nonexistent/progblur.toml")).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/progblur.toml"));
    }

    // ── precedence ────────────────────────────────────────────────────────

    #[test]
    fn flags_override_file_override_preset() {
        let file = FileSettings::from_toml("strength = 10\nsteps = 3").unwrap();
        let config = resolve(&args(&["--preset", "radial", "--steps", "5"]), Some(file)).unwrap();
        assert_eq!(config.strength, 10.0); // file over preset
        assert_eq!(config.steps, 5); // flag over file
        assert_eq!(config.falloff_percentage, 85.0); // preset
        assert_eq!(config.direction, Direction::Radial);
    }

    #[test]
    fn tint_and_direction_flags() {
        let config =
            resolve(&args(&["--tint", "rgba(1, 2, 3, 0.5)", "--direction", "left"]), None).unwrap();
        assert_eq!(config.tint.to_rgba8(), [1, 2, 3, 128]);
        assert_eq!(config.direction, Direction::Linear(Side::Left));
    }

    #[test]
    fn bad_tint_is_an_error() {
        let err = resolve(&args(&["--tint", "chartreuse"]), None).unwrap_err();
        assert!(format!("{err:#}").contains("invalid color 'chartreuse'"));
    }

    #[test]
    fn bad_file_values_name_the_file() {
        let file = FileSettings {
            tint: Some("chartreuse".to_owned()),
            source: Some(PathBuf::from("blur.toml")),
            ..FileSettings::default()
        };
        let msg = format!("{:#}", resolve(&args(&[]), Some(file)).unwrap_err());
        assert!(msg.starts_with("tint (from blur.toml): invalid color 'chartreuse'"), "{msg}");
        assert!(!msg.contains("--tint"));

        let file = FileSettings { direction: Some("up".to_owned()), ..FileSettings::default() };
        let msg = format!("{:#}", resolve(&args(&[]), Some(file)).unwrap_err());
        assert!(msg.starts_with("direction (from config file): unknown direction 'up'"), "{msg}");
    }

    #[test]
    fn flag_errors_name_the_flag() {
        let file = FileSettings { tint: Some("#fff".to_owned()), ..FileSettings::default() };
        let msg = format!("{:#}", resolve(&args(&["--tint", "nope"]), Some(file)).unwrap_err());
        assert!(msg.starts_with("--tint: invalid color 'nope'"), "{msg}");
    }

    #[test]
    fn load_records_source_path() {
        let path = std::env::temp_dir().join(format!("progblur-{}.toml", std::process::id()));
        std::fs::write(&path, "tint = \"bogus\"").unwrap();
        let file = FileSettings::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();
        assert_eq!(file.source.as_deref(), Some(path.as_path()));
        let msg = format!("{:#}", resolve(&args(&[]), Some(file)).unwrap_err());
        assert!(msg.contains(&format!("tint (from {})", path.display())), "{msg}");
    }

    #[test]
    fn direction_parsing() {
        assert_eq!(parse_direction("RADIAL").unwrap(), Direction::Radial);
        assert_eq!(parse_direction("top").unwrap(), Direction::Linear(Side::Top));
        assert!(parse_direction("diagonal").is_err());
    }
}
