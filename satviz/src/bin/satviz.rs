use clap::Parser;
use satviz_lib::{
    app::{run, Settings},
    config::Config,
};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Generate a CesiumJS page animating the satellites in a TLE catalog
#[derive(Parser, Debug)]
#[command(version)]
struct Opts {
    /// Configuration toml file.
    ///
    /// Command line options take precedence over its values.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output HTML file path to write [default: satellites_visualization.html]
    #[arg(short = 'o', long)]
    output: Option<PathBuf>,

    /// Tera page template to use instead of the bundled one
    #[arg(long)]
    template: Option<PathBuf>,

    /// TLE catalog file to read; the first line is skipped [default: tle.txt]
    input: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .init();
    let opts = Opts::parse();

    let mut settings = Settings::default();
    if let Some(cfg_path) = opts.config.as_ref() {
        settings = settings.with_config(&Config::load(cfg_path)?);
    }
    if let Some(p) = opts.input {
        settings.input = p;
    }
    if let Some(p) = opts.output {
        settings.output = p;
    }
    if let Some(p) = opts.template {
        settings.template = Some(p);
    }

    let outcome = run(&settings)?;
    if outcome.is_generated() {
        println!("{outcome}");
    } else {
        eprintln!("{outcome}");
    }

    Ok(())
}
