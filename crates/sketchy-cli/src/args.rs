//! Command-line argument definitions for the Sketchy CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. Arguments control input/output paths, configuration file
//! selection, viewport resizes to replay, and logging verbosity.

use clap::Parser;

use sketchy::geometry::Size;

/// Command-line arguments for the Sketchy decoration tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input page description (TOML)
    #[arg(help = "Path to the input page")]
    pub input: String,

    /// Path to the output SVG file
    #[arg(short, long, default_value = "out.svg")]
    pub output: String,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Viewport size to resize to after loading, as WIDTHxHEIGHT; repeatable
    #[arg(long, value_parser = parse_viewport)]
    pub resize: Vec<Size>,

    /// Seed for the hand-drawn jitter, overriding the configuration
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "info")]
    pub log_level: String,
}

/// Parses a `WIDTHxHEIGHT` viewport size.
pub fn parse_viewport(value: &str) -> Result<Size, String> {
    let (width, height) = value
        .split_once(['x', 'X'])
        .ok_or_else(|| format!("invalid viewport `{value}`, expected WIDTHxHEIGHT"))?;

    let parse = |dimension: &str| {
        dimension
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|number| number.is_finite() && *number >= 0.0)
            .ok_or_else(|| format!("invalid viewport dimension `{dimension}` in `{value}`"))
    };

    Ok(Size::new(parse(width)?, parse(height)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_viewport() {
        assert_eq!(parse_viewport("1024x768"), Ok(Size::new(1024.0, 768.0)));
        assert_eq!(parse_viewport("320X480.5"), Ok(Size::new(320.0, 480.5)));
    }

    #[test]
    fn test_parse_viewport_rejects_invalid() {
        for value in ["", "1024", "x768", "axb", "-5x10", "10xinf"] {
            assert!(parse_viewport(value).is_err(), "`{value}` should be rejected");
        }
    }

    #[test]
    fn test_repeated_resize_flags() {
        let args = Args::parse_from([
            "sketchy",
            "page.toml",
            "--resize",
            "800x600",
            "--resize",
            "400x300",
            "--seed",
            "7",
        ]);

        assert_eq!(args.resize, vec![Size::new(800.0, 600.0), Size::new(400.0, 300.0)]);
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.output, "out.svg");
        assert_eq!(args.log_level, "info");
    }
}
