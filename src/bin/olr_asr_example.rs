use std::path::Path;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use log::{debug, info};

use radiative_imbalance::config::ExampleConfig;
use radiative_imbalance::example::{build_example_figure, example_style};

#[derive(Parser)]
#[command(name = "olr_asr_example")]
#[command(
    about = "Render the OLR vs ASR example figure",
    long_about = "Plots a synthetic OLR/ASR trajectory colored by time, with a 1:1 reference line, and writes it as SVG."
)]
struct Cli {
    /// Output SVG path
    #[arg(short, long, default_value = "olr_asr.svg")]
    output: String,
    /// JSON file with font size, colormap, marker style and figure size
    #[arg(short, long)]
    config: Option<String>,
    /// Log verbosity level
    #[arg(long, default_value = "info")]
    log_level: LogLevel,
    /// Write log output to a file instead of stderr
    #[arg(long)]
    log_file: Option<String>,
    /// Overwrite the output file if it exists
    #[arg(long)]
    force: bool,
}

#[derive(Clone, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

// Create the parent directory and refuse to clobber unless forced
fn check_output_path(output: &str, force: bool) -> Result<()> {
    let path = Path::new(output);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty() && !parent.exists() {
            info!("Creating output directory: {:?}", parent);
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Could not create {}", parent.display()))?;
        }

    if !force && path.exists() {
        bail!("Output file {} already exists. Use --force to overwrite.", output);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut log_builder = env_logger::Builder::from_default_env();
    log_builder
        .filter_level(cli.log_level.to_level_filter())
        .format_module_path(false);
    if let Some(ref path) = cli.log_file {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Could not open log file '{}'", path))?;
        log_builder.target(env_logger::Target::Pipe(Box::new(file)));
    }
    log_builder.init();

    run(&cli)
}

fn run(cli: &Cli) -> Result<()> {
    let config = match cli.config {
        Some(ref path) => {
            info!("Loading config from {}", path);
            ExampleConfig::load(path)?
        }
        None => ExampleConfig::default(),
    };
    debug!("{:?}", config);
    let options = config.options(example_style())?;

    check_output_path(&cli.output, cli.force)?;

    let figure = build_example_figure(&options, config.size_px())?;
    figure
        .save(&cli.output)
        .with_context(|| format!("Could not write {}", cli.output))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn cli(output: &Path, config: Option<&Path>) -> Cli {
        Cli {
            output: output.to_string_lossy().into_owned(),
            config: config.map(|p| p.to_string_lossy().into_owned()),
            log_level: LogLevel::Info,
            log_file: None,
            force: false,
        }
    }

    #[test]
    fn test_bad_config_creates_no_directories() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = tempfile::NamedTempFile::new().unwrap();
        write!(config, r#"{{"font_size": -1}}"#).unwrap();
        let output = dir.path().join("nested").join("olr_asr.svg");

        assert!(run(&cli(&output, Some(config.path()))).is_err());
        assert!(!dir.path().join("nested").exists());
    }

    #[test]
    fn test_writes_figure_into_new_directory() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("nested").join("olr_asr.svg");

        run(&cli(&output, None)).unwrap();
        let svg = std::fs::read_to_string(&output).unwrap();
        assert!(svg.contains("<svg"));
        assert!(run(&cli(&output, None)).is_err());
    }
}
