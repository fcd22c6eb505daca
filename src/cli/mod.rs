//! Command-line interface definitions and helpers.
//!
//! This module contains all CLI argument parsing, enums, and subcommand handlers.

mod args;
mod commands;
mod enums;

pub use args::{Args, Command, ConfigAction, ImageArgs, ImageSettings};
pub use commands::{demo_mask, handle_config_action, render_demo_mask, render_image};
pub use enums::BorderStyle;
