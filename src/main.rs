use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use showcase::ShowcaseConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// RON config file; the built-in scene is used when omitted
    #[arg(long)]
    config: Option<PathBuf>,

    /// Entity to start on, overriding the config
    #[arg(long)]
    start: Option<String>,

    /// Print the effective config as RON and exit
    #[arg(long)]
    dump_config: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ShowcaseConfig::load(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => {
            log::info!("No config given, using the built-in scene");
            ShowcaseConfig::default()
        }
    };
    if let Some(start) = args.start {
        config.start = Some(start.into());
    }

    if args.dump_config {
        println!("{}", config.to_ron().context("failed to serialize config")?);
        return Ok(());
    }

    log::info!("Starting showcase");
    showcase::run(config)
}
