use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{bail, Context};
use clap::{Parser, ValueEnum};

use katgen::config::TranscodeConfig;
use katgen::pipeline::{InputFormat, Pipeline, RunOutcome, RunReport};

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Auto,
    VarPt,
    VarKey,
    Suite,
}

impl From<FormatArg> for InputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Auto => InputFormat::Auto,
            FormatArg::VarPt => InputFormat::VarPlaintext,
            FormatArg::VarKey => InputFormat::VarKey,
            FormatArg::Suite => InputFormat::Suite,
        }
    }
}

#[derive(Parser)]
#[command(
    name = "katgen",
    version,
    about = "Transcode known-answer test vectors into a static C header"
)]
struct Cli {
    /// Destination header
    #[arg(short, long)]
    output: PathBuf,

    /// Input dialect; `auto` inspects the first significant line of each source
    #[arg(short, long, value_enum, default_value_t = FormatArg::Auto)]
    format: FormatArg,

    /// Output schema preset, overriding the config file
    #[arg(short, long)]
    schema: Option<String>,

    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input files, processed in order
    #[arg(required = true)]
    sources: Vec<PathBuf>,
}

fn load_config(cli: &Cli) -> anyhow::Result<TranscodeConfig> {
    let mut config = match &cli.config {
        Some(path) => TranscodeConfig::load(path)
            .with_context(|| format!("failed to load config from {}", path.display()))?,
        None => TranscodeConfig::default(),
    };
    if let Some(schema) = &cli.schema {
        config = config.with_schema_preset(schema.as_str());
    }
    Ok(config)
}

fn summarize(report: &RunReport) {
    for input in &report.inputs {
        eprintln!(
            "{}: {} records ({})",
            input.path.display(),
            input.count,
            input.format
        );
        for skipped in &input.skipped {
            eprintln!("  skipped {skipped}");
        }
    }
    eprintln!("total: {} records", report.total());
}

fn run(cli: &Cli, config: TranscodeConfig) -> anyhow::Result<()> {
    let pipeline = Pipeline::new(config)?;
    let report = pipeline.run(&cli.sources, cli.format.into())?;
    summarize(&report);

    if report.outcome() == RunOutcome::Empty {
        bail!("no test vectors found");
    }
    pipeline.write(&report, &cli.output)?;
    eprintln!("wrote {}", cli.output.display());
    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("error: {e:#}");
            return ExitCode::FAILURE;
        }
    };
    katgen::logging::init_from_env(&config.log_level);

    match run(&cli, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
