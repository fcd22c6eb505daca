//! Subcommand handlers for mask, image and config actions.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};

use super::args::{ConfigAction, ImageArgs};
use crate::braille::{mask_braille, Border};
use crate::config::{default_path as get_config_path, Config, DEFAULT_CONFIG_TOML};
use crate::grid::Mask;
use crate::source::load_grayscale;
use crate::stipple::StippledImage;

/// An 8x6 hourglass with a solid bottom row.
pub fn demo_mask() -> Mask {
    const T: bool = true;
    const F: bool = false;
    Mask::from_rows(&[
        [T, T, F, F, T, T],
        [F, T, T, T, T, F],
        [F, F, T, T, F, F],
        [F, F, T, T, F, F],
        [F, F, T, T, F, F],
        [F, T, T, T, T, F],
        [T, T, F, F, T, T],
        [T, T, T, T, T, T],
    ])
}

/// Render the demo mask framed, then bare.
pub fn render_demo_mask() -> String {
    let mask = demo_mask();
    format!(
        "{}\n{}",
        mask_braille(&mask, Border::Line),
        mask_braille(&mask, Border::None)
    )
}

/// Load, stipple and render an image.
pub fn render_image(args: &ImageArgs, config: &Config) -> Result<String> {
    let settings = args.resolve(config);
    log::info!(
        "rendering {} at {}x{} (percentage {})",
        args.path.display(),
        settings.size,
        settings.size,
        settings.params.percentage
    );

    let image = load_grayscale(&args.path, settings.size, settings.blur)?;
    let stippled = StippledImage::new(&image, settings.params)
        .with_context(|| format!("failed to stipple {}", args.path.display()))?;

    Ok(mask_braille(stippled.stippled(), settings.border))
}

/// Handle config subcommand actions.
///
/// `path` is the `--config` override; `None` means the default location.
pub fn handle_config_action(
    action: ConfigAction,
    config: &Config,
    path: Option<&Path>,
) -> Result<String> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);
    match action {
        ConfigAction::Show => {
            let state = if config_path.exists() {
                "exists"
            } else {
                "not found"
            };
            Ok(format!(
                "Current configuration:\n  \
                 Percentage: {}\n  \
                 Sigma: {}\n  \
                 Content bias: {}\n  \
                 Negate: {}\n  \
                 Image size: {}\n  \
                 Blur: {}\n  \
                 Border: {}\n\n\
                 Config file: {} ({})",
                config.stipple.percentage,
                config.stipple.sigma,
                config.stipple.content_bias,
                if config.stipple.negate { "yes" } else { "no" },
                config.image.size,
                config.image.blur,
                config.render.border.name(),
                config_path.display(),
                state
            ))
        }
        ConfigAction::Init => {
            if config_path.exists() {
                bail!(
                    "Config file already exists: {}\nUse 'stipple-braille config show' to view current settings.",
                    config_path.display()
                );
            }

            // Create parent directories if needed
            if let Some(parent) = config_path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).with_context(|| {
                    format!("Error creating config directory: {}", parent.display())
                })?;
            }

            std::fs::write(&config_path, DEFAULT_CONFIG_TOML)
                .with_context(|| format!("Error writing config file: {}", config_path.display()))?;

            Ok(format!("Created config file: {}", config_path.display()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_mask_shape() {
        let mask = demo_mask();
        assert_eq!(mask.rows(), 8);
        assert_eq!(mask.cols(), 6);
    }

    #[test]
    fn test_render_demo_mask_has_both_variants() {
        let text = render_demo_mask();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "╭───╮");
        assert_eq!(lines[3], "╰───╯");
        assert_eq!(&lines[1][3..lines[1].len() - 3], lines[4]);
        assert_eq!(&lines[2][3..lines[2].len() - 3], lines[5]);
    }

    #[test]
    fn test_config_show_lists_values() {
        let text = handle_config_action(ConfigAction::Show, &Config::default(), None).unwrap();
        assert!(text.contains("Percentage: 0.33"));
        assert!(text.contains("Border: line"));
        assert!(text.contains("Config file:"));
    }

    #[test]
    fn test_config_show_reports_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("custom.toml");
        let text =
            handle_config_action(ConfigAction::Show, &Config::default(), Some(&path)).unwrap();
        assert!(text.contains(&format!("Config file: {} (not found)", path.display())));
    }

    #[test]
    fn test_config_init_writes_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("custom.toml");

        let text =
            handle_config_action(ConfigAction::Init, &Config::default(), Some(&path)).unwrap();
        assert_eq!(text, format!("Created config file: {}", path.display()));
        assert_eq!(std::fs::read_to_string(&path).unwrap(), DEFAULT_CONFIG_TOML);

        let loaded = Config::load(Some(&path)).unwrap();
        let text = handle_config_action(ConfigAction::Show, &loaded, Some(&path)).unwrap();
        assert!(text.contains("(exists)"));

        let err = handle_config_action(ConfigAction::Init, &loaded, Some(&path)).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
