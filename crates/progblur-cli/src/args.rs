use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Prints the layer stack of a progressive blur.
#[derive(Debug, Parser)]
#[command(name = "progblur", version, about)]
pub struct Args {
    /// TOML file with `strength`, `steps`, `falloff_percentage`, `tint`, `direction`.
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Start from one of the demo configurations instead of the defaults.
    #[arg(long, value_enum)]
    pub preset: Option<Preset>,

    /// Blur radius of the strongest layer, in pixels.
    #[arg(long)]
    pub strength: Option<f32>,

    /// Number of blur layers (values below 1 render one layer).
    #[arg(long, allow_negative_numbers = true)]
    pub steps: Option<i32>,

    /// Percentage of the element over which the blur fades out.
    #[arg(long, value_name = "PERCENT", allow_negative_numbers = true)]
    pub falloff: Option<f32>,

    /// Tint color: `transparent`, `#rrggbb[aa]`, `rgba(r, g, b, a)`, ...
    #[arg(long)]
    pub tint: Option<String>,

    /// `top`, `bottom`, `left`, `right` (linear, strongest at that side) or `radial`.
    #[arg(long)]
    pub direction: Option<String>,

    #[arg(long, value_enum, default_value_t = Format::Css)]
    pub format: Format,

    /// Class name prefix for CSS and HTML output.
    #[arg(long, default_value = "progblur")]
    pub class: String,

    /// Log filter in `env_logger` syntax, e.g. `progblur=trace`.
    #[arg(long, value_name = "FILTER")]
    pub log: Option<String>,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum Preset {
    Linear,
    Radial,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, ValueEnum)]
pub enum Format {
    /// Class-scoped stylesheet.
    Css,
    /// Nested divs with inline styles.
    Html,
    /// The layer stack as JSON.
    Json,
    /// One blur radius per line, most blurred first.
    Radii,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn command_is_well_formed() {
        Args::command().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["progblur"]).unwrap();
        assert_eq!(args.format, Format::Css);
        assert_eq!(args.class, "progblur");
        assert!(args.strength.is_none());
        assert!(args.preset.is_none());
    }

    #[test]
    fn accepts_negative_steps() {
        let args = Args::try_parse_from(["progblur", "--steps", "-3", "--falloff", "-10"]).unwrap();
        assert_eq!(args.steps, Some(-3));
        assert_eq!(args.falloff, Some(-10.0));
    }

    #[test]
    fn parses_enums() {
        let args =
            Args::try_parse_from(["progblur", "--preset", "radial", "--format", "json"]).unwrap();
        assert_eq!(args.preset, Some(Preset::Radial));
        assert_eq!(args.format, Format::Json);
        assert!(Args::try_parse_from(["progblur", "--format", "svg"]).is_err());
    }
}
