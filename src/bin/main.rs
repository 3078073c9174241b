extern crate raytrace_kernel as root;

use root::math::LinearColor;
use root::parsing::{get_settings, parse_tonemapper};

use std::process::ExitCode;

use structopt::StructOpt;
use tracing::{error, info};
use tracing_subscriber::filter::LevelFilter;

#[derive(Debug, StructOpt)]
#[structopt(rename_all = "kebab-case")]
struct Opt {
    #[structopt(long, default_value = "data/config.toml")]
    pub config_file: String,
    #[structopt(short = "n", long)]
    pub dry_run: bool,
    #[structopt(long, default_value = "info")]
    pub log_level: String,
}

fn parse_log_level(level: &str, default: LevelFilter) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "warn" => LevelFilter::WARN,
        "info" => LevelFilter::INFO,
        "trace" => LevelFilter::TRACE,
        "error" => LevelFilter::ERROR,
        "debug" => LevelFilter::DEBUG,
        "off" => LevelFilter::OFF,
        _ => default,
    }
}

fn run(opts: &Opt) -> anyhow::Result<()> {
    let config = get_settings(&opts.config_file)?;
    let mut tonemapper = parse_tonemapper(config.tonemap_settings)?;
    info!(
        "loaded {} swatches, converter {:?}",
        config.swatches.len(),
        config.converter
    );

    if opts.dry_run {
        return Ok(());
    }

    let colors: Vec<LinearColor> = config.swatches.iter().map(|s| s.color).collect();
    tonemapper.initialize(&colors);

    for swatch in &config.swatches {
        let display = config.converter.encode(tonemapper.as_ref(), swatch.color);
        println!(
            "{}: {} ({}, {}, {})",
            swatch.name,
            display.to_hex(),
            display.r,
            display.g,
            display.b
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let opts = Opt::from_args();
    tracing_subscriber::fmt()
        .with_max_level(parse_log_level(&opts.log_level, LevelFilter::INFO))
        .with_writer(std::io::stderr)
        .init();

    match run(&opts) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{:#}", e);
            ExitCode::FAILURE
        }
    }
}
