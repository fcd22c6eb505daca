use clap::Parser;

use stipple_braille::cli::{handle_config_action, render_demo_mask, render_image, Args, Command};
use stipple_braille::config::Config;

fn run(args: Args) -> anyhow::Result<String> {
    let config = Config::load(args.config.as_deref())?;

    match args.command {
        Command::Mask => Ok(render_demo_mask()),
        Command::Image(image) => render_image(&image, &config),
        Command::Config { action } => {
            handle_config_action(action, &config, args.config.as_deref())
        }
    }
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    match run(args) {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}
