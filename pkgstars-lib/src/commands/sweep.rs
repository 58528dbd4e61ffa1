use super::common::{Common, CommonArgs};
use super::{Host, ProgressReporter};
use crate::Result;
use crate::facts::sweep::{delay_from_secs, sweep};
use crate::facts::{NoProgress, Progress, RegistrySnapshot, RepositoryFetcher, ResultTable, SweepOptions, SweepOutcome, collect_candidates};
use crate::reports::{RunSummary, generate_csv, generate_failures, generate_json, generate_summary};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::IntoAppError;
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "     sweep";

#[derive(Parser, Debug)]
pub struct SweepArgs {
    /// Path to a registry checkout containing `Registry.toml`
    #[arg(long, value_name = "PATH")]
    pub registry: Utf8PathBuf,

    /// Only fetch the first N repositories found in the registry
    #[arg(long, value_name = "N")]
    pub max_candidates: Option<usize>,

    /// Seconds to wait between two lookups (overrides the configuration file; 0 disables)
    #[arg(long, value_name = "SECONDS", allow_negative_numbers = true)]
    pub delay_secs: Option<f64>,

    /// CSV file to write the results to (overrides the configuration file)
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub output: Option<Utf8PathBuf>,

    /// Also write the results to a JSON file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub json: Option<Utf8PathBuf>,

    /// Show a progress bar while fetching
    #[arg(long)]
    pub progress: bool,

    #[command(flatten)]
    pub common: CommonArgs,
}

/// Sweep a registry and write the results, printing a summary.
pub async fn process_registry<H: Host>(host: &mut H, args: &SweepArgs) -> Result<()> {
    let common = Common::new(&args.common)?;
    let snapshot = RegistrySnapshot::load(&args.registry)?;

    let options = SweepOptions {
        delay: args.delay_secs.map_or(common.config.request_delay, delay_from_secs),
    };
    let output = args.output.as_ref().unwrap_or(&common.config.output_file);

    let outcome = if args.progress {
        let reporter = ProgressReporter::new(common.use_colors_for_progress());
        run_sweep(&common.client, &snapshot, args.max_candidates, &options, output, &reporter).await?
    } else {
        run_sweep(&common.client, &snapshot, args.max_candidates, &options, output, &NoProgress).await?
    };

    if let Some(json_path) = &args.json {
        let mut json_output = String::new();
        generate_json(&outcome.table, &mut json_output)?;
        fs::write(json_path, json_output).into_app_err_with(|| format!("writing JSON report '{json_path}'"))?;
    }

    let mut summary_output = String::new();
    generate_summary(&RunSummary::from_outcome(&outcome), common.use_colors_for_output(), &mut summary_output)?;
    let _ = write!(host.output(), "{summary_output}");
    let _ = writeln!(host.output(), "Results written to {output}");

    let mut failure_output = String::new();
    generate_failures(&outcome.failures, &mut failure_output)?;
    let _ = write!(host.error(), "{failure_output}");

    Ok(())
}

/// Derive candidates from `snapshot`, fetch them in turn, and write the table to `output`.
///
/// Individual lookup failures end up in [`SweepOutcome::failures`]; only failing to write
/// the output file is an error.
pub async fn run_sweep<F: RepositoryFetcher>(
    fetcher: &F,
    snapshot: &RegistrySnapshot,
    max_candidates: Option<usize>,
    options: &SweepOptions,
    output: &Utf8Path,
    progress: &dyn Progress,
) -> Result<SweepOutcome> {
    let candidates = collect_candidates(snapshot, max_candidates);
    log::info!(
        target: LOG_TARGET,
        "{} of {} registry entries point to GitHub repositories to fetch",
        candidates.len(),
        snapshot.len()
    );

    let outcome = sweep(fetcher, candidates, options, progress).await;
    write_csv_file(&outcome.table, output)?;

    Ok(outcome)
}

/// Write the table as CSV, replacing any existing file.
pub fn write_csv_file(table: &ResultTable, path: &Utf8Path) -> Result<()> {
    let mut csv_output = String::new();
    generate_csv(table, &mut csv_output)?;
    fs::write(path, csv_output).into_app_err_with(|| format!("writing results to '{path}'"))?;

    log::info!(target: LOG_TARGET, "Wrote {} rows to '{path}'", table.len());
    Ok(())
}
