//! Sequential sweep over the packages of a registry
//!
//! Every registry entry whose declared URL names a GitHub repository becomes a [`Candidate`].
//! Candidates are fetched one after the other with a fixed pause in between, so the sweep
//! stays under the API rate limit. A failed lookup is recorded and the sweep moves on; it
//! never aborts the run.

use super::hosting::{FetchError, RepositoryFetcher, RepositoryRecord};
use super::{Candidate, Progress, RegistrySnapshot, RepoSpec, ResultRow, ResultTable};
use core::time::Duration;

const LOG_TARGET: &str = "     sweep";

/// Pause between consecutive lookups unless configured otherwise.
pub const DEFAULT_REQUEST_DELAY: Duration = Duration::from_millis(500);

/// Settings for a sweep.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SweepOptions {
    /// Pause between two lookups. Zero means no pause.
    pub delay: Duration,
}

impl Default for SweepOptions {
    fn default() -> Self {
        Self {
            delay: DEFAULT_REQUEST_DELAY,
        }
    }
}

/// Convert a delay in (possibly fractional) seconds; zero, negative, or NaN values mean no pause.
#[must_use]
pub fn delay_from_secs(secs: f64) -> Duration {
    if secs > 0.0 {
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::MAX)
    } else {
        Duration::ZERO
    }
}

/// A candidate whose lookup failed.
#[derive(Debug)]
pub struct SweepFailure {
    pub candidate: Candidate,
    pub error: FetchError,
}

/// Rows of the successful lookups plus the failures, both in candidate order.
#[derive(Debug, Default)]
pub struct SweepOutcome {
    pub table: ResultTable,
    pub failures: Vec<SweepFailure>,
}

/// Derive candidates from a registry snapshot.
///
/// Entries whose URL is not a canonical GitHub repository URL are dropped. When
/// `max_candidates` is given, only that many candidates are kept, in encounter order.
#[must_use]
pub fn collect_candidates(snapshot: &RegistrySnapshot, max_candidates: Option<usize>) -> Vec<Candidate> {
    snapshot
        .entries()
        .iter()
        .filter_map(|entry| {
            let spec = RepoSpec::parse(entry.repo_url());
            if spec.is_none() {
                log::trace!(target: LOG_TARGET, "Ignoring '{}': unsupported repository URL '{}'", entry.package_name(), entry.repo_url());
            }
            spec.map(|spec| Candidate::new(entry.package_name(), spec))
        })
        .take(max_candidates.unwrap_or(usize::MAX))
        .collect()
}

/// Fetch every candidate in turn.
pub async fn sweep<F: RepositoryFetcher>(
    fetcher: &F,
    candidates: Vec<Candidate>,
    options: &SweepOptions,
    progress: &dyn Progress,
) -> SweepOutcome {
    let total = candidates.len();
    let mut results = Vec::with_capacity(total);

    progress.set_phase("Fetching");

    for (index, candidate) in candidates.into_iter().enumerate() {
        progress.update(index as u64, total as u64, &candidate.to_string());

        let result = fetcher.fetch(candidate.owner(), candidate.repo()).await;
        results.push((candidate, result));

        if index + 1 < total && !options.delay.is_zero() {
            tokio::time::sleep(options.delay).await;
        }
    }

    progress.update(total as u64, total as u64, "");
    progress.done();

    let outcome = partition(results);
    log::info!(
        target: LOG_TARGET,
        "Fetched {} of {total} repositories ({} failed)",
        outcome.table.len(),
        outcome.failures.len()
    );

    outcome
}

fn partition(results: Vec<(Candidate, Result<RepositoryRecord, FetchError>)>) -> SweepOutcome {
    let mut outcome = SweepOutcome::default();

    for (candidate, result) in results {
        match result {
            Ok(record) => {
                log::debug!(target: LOG_TARGET, "Fetched {candidate}: {} stars", record.star_count());
                outcome.table.push(ResultRow::from_record(candidate.package_name(), &record));
            }
            Err(error) => {
                log::warn!(target: LOG_TARGET, "Could not fetch {candidate}: {error}");
                outcome.failures.push(SweepFailure { candidate, error });
            }
        }
    }

    outcome
}
