use anyhow::{Context, Result};
use clap::Parser;
use sliceable_config::Config;
use sliceable_engine::{Encoding, SliceExpr};
use std::{io, process};

mod args;
mod slicer;

use args::Args;
use slicer::{Settings, Slicer};

fn main() -> Result<()> {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();

    // Usage errors exit with status 2.
    let args = Args::parse();

    let config_path = Config::config_path();
    let config = Config::load_or_default()
        .with_context(|| format!("Failed to load config file {}", config_path.display()))?;
    log::debug!("using config {config:?}");

    // Parse before touching any input so a bad expression fails fast.
    let expr: SliceExpr = match args.expr.parse() {
        Ok(expr) => expr,
        Err(e) => {
            eprintln!("Error: invalid slice expression {:?}: {e}", args.expr);
            process::exit(2);
        }
    };

    let config = Config {
        output: args.output().unwrap_or(config.output),
        encoding: args.encoding.clone().unwrap_or(config.encoding),
        per_line: config.per_line && !args.whole,
    };
    if args.save_config {
        config
            .save()
            .with_context(|| format!("Failed to save config file {}", config_path.display()))?;
        log::info!("saved config to {}", config_path.display());
    }

    let settings = Settings {
        expr,
        output: config.output,
        encoding: Encoding::new(config.encoding),
        per_line: config.per_line,
    };
    log::info!("slicing with {settings:?}");

    let slicer = Slicer::new(&settings, io::stdout().lock(), io::stderr().lock());
    let failures = match args.text.as_deref() {
        Some(text) => slicer.run_text(text)?,
        None => slicer.run_input(io::stdin().lock())?,
    };

    if failures > 0 {
        log::info!("{failures} input(s) could not be sliced");
        process::exit(1);
    }

    Ok(())
}
