//! CLI argument parsing with clap.

use clap::{Args as ClapArgs, Parser, Subcommand};
use std::path::PathBuf;

use super::enums::BorderStyle;
use crate::braille::Border;
use crate::config::Config;
use crate::stipple::StippleParams;

/// Parse and validate a sample fraction (0.0-1.0)
fn parse_percentage(s: &str) -> Result<f32, String> {
    let p: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !(0.0..=1.0).contains(&p) {
        return Err(format!("Percentage must be between 0.0 and 1.0, got {}", p));
    }
    Ok(p)
}

/// Parse and validate a kernel sigma (> 0)
fn parse_sigma(s: &str) -> Result<f32, String> {
    let sigma: f32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if !sigma.is_finite() || sigma <= 0.0 {
        return Err(format!("Sigma must be a positive number, got {}", sigma));
    }
    Ok(sigma)
}

/// Parse and validate the resampled image size (positive, even)
fn parse_size(s: &str) -> Result<u32, String> {
    let size: u32 = s.parse().map_err(|_| format!("'{}' is not a valid size", s))?;
    if size == 0 || size % 2 != 0 {
        return Err(format!("Size must be a positive even number, got {}", size));
    }
    Ok(size)
}

/// Render images and masks as braille text, optionally stippled first
#[derive(Parser, Debug)]
#[command(name = "stipple-braille")]
#[command(version, about = "Blue-noise stippling and braille text rendering", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Config file path
    #[arg(long, short, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Render the built-in demo mask, framed and bare
    Mask,
    /// Stipple an image file and render it as braille
    Image(ImageArgs),
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(ClapArgs, Debug, Clone)]
pub struct ImageArgs {
    /// Image file (PNG or JPEG)
    pub path: PathBuf,

    /// Fraction of pixels turned into dots
    #[arg(long, value_parser = parse_percentage)]
    pub percentage: Option<f32>,

    /// Spread of the suppression kernel in pixels
    #[arg(long, value_parser = parse_sigma)]
    pub sigma: Option<f32>,

    /// Weight of image brightness when choosing dots
    #[arg(long)]
    pub content_bias: Option<f32>,

    /// Place dots on bright areas instead of dark ones
    #[arg(long, overrides_with = "no_negate")]
    pub negate: bool,

    /// Place dots on dark areas, even if the config sets negate
    #[arg(long, overrides_with = "negate")]
    pub no_negate: bool,

    /// Resample the image to SIZE x SIZE before stippling
    #[arg(long, value_parser = parse_size)]
    pub size: Option<u32>,

    /// Gaussian blur sigma applied after resampling
    #[arg(long)]
    pub blur: Option<f32>,

    /// Border around the output
    #[arg(long)]
    pub border: Option<BorderStyle>,
}

/// Effective settings for the `image` subcommand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ImageSettings {
    pub params: StippleParams,
    pub size: u32,
    pub blur: f32,
    pub border: Border,
}

impl ImageArgs {
    /// Polarity requested on the command line; the last of
    /// `--negate`/`--no-negate` wins.
    pub fn negate_flag(&self) -> Option<bool> {
        match (self.negate, self.no_negate) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    /// Merge flags over config values; flags win.
    pub fn resolve(&self, config: &Config) -> ImageSettings {
        let base = config.stipple;
        ImageSettings {
            params: StippleParams {
                percentage: self.percentage.unwrap_or(base.percentage),
                sigma: self.sigma.unwrap_or(base.sigma),
                content_bias: self.content_bias.unwrap_or(base.content_bias),
                negate: self.negate_flag().unwrap_or(base.negate),
            },
            size: self.size.unwrap_or(config.image.size),
            blur: self.blur.unwrap_or(config.image.blur),
            border: self.border.map(Border::from).unwrap_or(config.render.border),
        }
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mask_subcommand() {
        let args = Args::parse_from(["stipple-braille", "mask"]);
        assert!(matches!(args.command, Command::Mask));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_image_defaults() {
        let args = Args::parse_from(["stipple-braille", "image", "photo.png"]);
        match args.command {
            Command::Image(image) => {
                assert_eq!(image.path, PathBuf::from("photo.png"));
                assert!(image.percentage.is_none());
                assert!(image.sigma.is_none());
                assert!(image.content_bias.is_none());
                assert!(image.negate_flag().is_none());
                assert!(image.size.is_none());
                assert!(image.blur.is_none());
                assert!(image.border.is_none());
            }
            _ => panic!("Expected Image subcommand"),
        }
    }

    #[test]
    fn test_image_combined_options() {
        let args = Args::parse_from([
            "stipple-braille",
            "image",
            "photo.png",
            "--percentage",
            "0.5",
            "--sigma",
            "1.2",
            "--content-bias",
            "0.25",
            "--negate",
            "--size",
            "128",
            "--blur",
            "0",
            "--border",
            "square",
            "--config",
            "/tmp/test.toml",
        ]);
        assert_eq!(args.config, Some(PathBuf::from("/tmp/test.toml")));
        let Command::Image(image) = args.command else {
            panic!("Expected Image subcommand");
        };
        assert_eq!(image.percentage, Some(0.5));
        assert_eq!(image.sigma, Some(1.2));
        assert_eq!(image.content_bias, Some(0.25));
        assert!(image.negate);
        assert_eq!(image.size, Some(128));
        assert_eq!(image.blur, Some(0.0));
        assert_eq!(image.border, Some(BorderStyle::Square));
    }

    #[test]
    fn test_rejects_invalid_values() {
        assert!(Args::try_parse_from(["stipple-braille", "image", "a.png", "--percentage", "1.5"]).is_err());
        assert!(Args::try_parse_from(["stipple-braille", "image", "a.png", "--sigma", "0"]).is_err());
        assert!(Args::try_parse_from(["stipple-braille", "image", "a.png", "--size", "255"]).is_err());
        assert!(Args::try_parse_from(["stipple-braille", "image", "a.png", "--border", "double"]).is_err());
    }

    #[test]
    fn test_config_subcommands() {
        let args = Args::parse_from(["stipple-braille", "config", "show"]);
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Show
            }
        ));
        let args = Args::parse_from(["stipple-braille", "config", "init"]);
        assert!(matches!(
            args.command,
            Command::Config {
                action: ConfigAction::Init
            }
        ));
    }

    #[test]
    fn test_resolve_uses_config_then_flags() {
        let config: Config = toml::from_str(
            "[stipple]\npercentage = 0.1\nnegate = true\n[image]\nsize = 64\n[render]\nborder = \"none\"\n",
        )
        .unwrap();

        let args = Args::parse_from(["stipple-braille", "image", "a.png", "--sigma", "2"]);
        let Command::Image(image) = args.command else {
            panic!("Expected Image subcommand");
        };
        let settings = image.resolve(&config);
        assert_eq!(settings.params.percentage, 0.1);
        assert_eq!(settings.params.sigma, 2.0);
        assert_eq!(settings.params.content_bias, 0.5);
        assert!(settings.params.negate);
        assert_eq!(settings.size, 64);
        assert_eq!(settings.blur, 0.5);
        assert_eq!(settings.border, Border::None);

        let args = Args::parse_from(["stipple-braille", "image", "a.png", "--border", "line"]);
        let Command::Image(image) = args.command else {
            panic!("Expected Image subcommand");
        };
        assert_eq!(image.resolve(&config).border, Border::Line);
    }

    #[test]
    fn test_no_negate_overrides_config() {
        let config: Config = toml::from_str("[stipple]\nnegate = true\n").unwrap();
        let resolve = |flags: &[&str]| {
            let argv = ["stipple-braille", "image", "a.png"].iter().chain(flags);
            let Command::Image(image) = Args::parse_from(argv).command else {
                panic!("Expected Image subcommand");
            };
            image.resolve(&config).params.negate
        };
        assert!(resolve(&[]));
        assert!(!resolve(&["--no-negate"]));
        assert!(resolve(&["--no-negate", "--negate"]));
        assert!(!resolve(&["--negate", "--no-negate"]));
    }
}
