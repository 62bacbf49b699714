mod charts;
mod error;
mod input;
mod logging;
mod model;
mod pipeline;
mod report;

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use thiserror::Error;

use crate::charts::register_chart_font;
use crate::input::samples::SAMPLE_PITCHES;
use crate::input::{InputError, PitchSource, load_pitch};
use crate::model::outcome::reset;
use crate::model::thresholds::ScoringProfile;
use crate::pipeline::{AnalyzeOptions, ArtifactLayout, analyze};

#[derive(Debug, Parser)]
#[command(
    name = "pitchqc",
    version,
    about = "Heuristic startup-pitch scoring with chart and PDF output"
)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
    /// Only log warnings and errors.
    #[arg(short, long, global = true)]
    quiet: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score a pitch and write bar_chart.png, radar_chart.png and Pitch_Report.pdf.
    Analyze(AnalyzeArgs),
    /// Print the cleared display state.
    Reset {
        #[arg(long)]
        json: bool,
    },
    /// List the built-in example pitches.
    Examples,
}

#[derive(Debug, Args)]
struct AnalyzeArgs {
    /// Pitch text file (plain or .gz); `-` reads stdin.
    #[arg(long, value_name = "PATH")]
    input: Option<PathBuf>,
    /// Pitch text passed inline.
    #[arg(long)]
    text: Option<String>,
    /// Use built-in example pitch N (see `examples`).
    #[arg(long, value_name = "N")]
    example: Option<usize>,
    /// Directory receiving the chart and PDF artifacts.
    #[arg(long, value_name = "DIR", default_value = ".")]
    out: PathBuf,
    /// Write artifacts into a fresh run-* subdirectory instead of overwriting.
    #[arg(long)]
    unique_artifacts: bool,
    /// TrueType font used for chart titles and labels.
    #[arg(long, value_name = "TTF")]
    font: Option<PathBuf>,
    /// Also write summary.json and report.txt next to the artifacts.
    #[arg(long)]
    summary: bool,
    /// Print the display view as JSON instead of the report text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Input(#[from] InputError),
    #[error("failed to encode output: {0}")]
    Json(#[from] serde_json::Error),
}

fn main() {
    let cli = Cli::parse();
    logging::init_logging(cli.verbose, cli.quiet);
    if let Err(err) = run(cli.command) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run(command: Command) -> Result<(), CliError> {
    match command {
        Command::Analyze(args) => run_analyze(args),
        Command::Reset { json } => {
            let view = reset();
            if json {
                println!("{}", serde_json::to_string_pretty(&view)?);
            } else {
                println!("{}", view.report_text);
            }
            Ok(())
        }
        Command::Examples => {
            for (i, pitch) in SAMPLE_PITCHES.iter().enumerate() {
                println!("{}. {}", i + 1, pitch);
            }
            Ok(())
        }
    }
}

fn run_analyze(args: AnalyzeArgs) -> Result<(), CliError> {
    let source = PitchSource::from_parts(args.input.clone(), args.text.clone(), args.example)?;
    let text = load_pitch(&source)?;

    if let Some(font) = &args.font {
        if let Err(err) = register_chart_font(font) {
            tracing::warn!(error = %err, "chart font not loaded");
        }
    }

    let options = build_options(&args);
    let outcome = analyze(&text, &options);
    let view = outcome.view();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&view)?);
    } else {
        println!("{}", view.report_text);
        if let (Some(bar), Some(radar), Some(pdf)) = (&view.bar_chart, &view.radar_chart, &view.pdf)
        {
            println!("Bar chart: {}", bar.display());
            println!("Radar chart: {}", radar.display());
            println!("PDF report: {}", pdf.display());
        }
    }
    Ok(())
}

fn build_options(args: &AnalyzeArgs) -> AnalyzeOptions {
    AnalyzeOptions {
        out_dir: args.out.clone(),
        layout: if args.unique_artifacts {
            ArtifactLayout::PerRun
        } else {
            ArtifactLayout::Shared
        },
        write_summary: args.summary,
        profile: ScoringProfile::default_v1(),
    }
}

#[cfg(test)]
#[path = "../tests/src_inline/main_inline.rs"]
mod tests;
