use std::path::PathBuf;

use clap::Parser;
use tracing::debug;

use gridmerge::{config, merge::engine::MergePolicy, persist, pipeline};

#[derive(Parser)]
#[command(
    name = "gridmerge",
    about = "Enrich a WSJT-X ADIF log with grid squares from a second log",
    version
)]
struct Cli {
    /// ADIF log carrying grid squares (enrichment source)
    grids: PathBuf,

    /// ADIF log to update
    target: PathBuf,

    /// Destination for the updated log
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// JSON defaults file used to resolve the output path
    #[arg(long)]
    config: Option<PathBuf>,

    /// Run summary format
    #[arg(long, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let cli = Cli::parse();

    let defaults = cli
        .config
        .as_deref()
        .map(config::load_defaults)
        .unwrap_or_default();
    let output = cli
        .output
        .clone()
        .unwrap_or_else(|| config::resolve_output(&cli.target, &defaults));
    debug!(output = %output.display(), "resolved output path");

    let grids_text = persist::read_log(&cli.grids)?;
    let target_text = persist::read_log(&cli.target)?;

    let (updated, report) = pipeline::enrich(&grids_text, &target_text, &MergePolicy::default())?;
    persist::write_log(&output, &updated)?;
    debug!(
        matched = report.qsos_matched,
        processed = report.qsos_processed,
        "merge complete"
    );

    match cli.format {
        OutputFormat::Text => {
            println!(
                "Done. Total number of QSOs processed: {}",
                report.qsos_processed
            );
        }
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    Ok(())
}
