use super::RunSummary;
use super::common::{format_mean, format_timestamp};
use crate::Result;
use crate::facts::{RepositoryRecord, SweepFailure};
use core::fmt::Write;
use owo_colors::OwoColorize;

/// Render a single repository lookup.
pub fn generate_record<W: Write>(record: &RepositoryRecord, use_colors: bool, writer: &mut W) -> Result<()> {
    let title = format!("{}/{}", record.owner(), record.name());
    if use_colors {
        writeln!(writer, "{}", title.bold())?;
    } else {
        writeln!(writer, "{title}")?;
    }

    writeln!(writer, "  Stars:       {}", record.star_count())?;
    writeln!(writer, "  Updated:     {}", format_timestamp(record.updated_at()))?;
    match record.description() {
        Some(description) => writeln!(writer, "  Description: {description}")?,
        None => writeln!(writer, "  Description: (none)")?,
    }

    Ok(())
}

/// Render the totals of a sweep.
pub fn generate_summary<W: Write>(summary: &RunSummary, use_colors: bool, writer: &mut W) -> Result<()> {
    let fetched = format!("{} repositories fetched", summary.successes);
    if use_colors {
        write!(writer, "{}", fetched.green().bold())?;
    } else {
        write!(writer, "{fetched}")?;
    }

    if summary.failures > 0 {
        let failed = format!("{} failed", summary.failures);
        if use_colors {
            write!(writer, ", {}", failed.red().bold())?;
        } else {
            write!(writer, ", {failed}")?;
        }
    }
    writeln!(writer)?;

    writeln!(writer, "  Mean stars (starred repositories): {}", format_mean(summary.mean_stars))?;
    match summary.max_stars {
        Some(max) => writeln!(writer, "  Max stars:                         {max}")?,
        None => writeln!(writer, "  Max stars:                         n/a")?,
    }

    Ok(())
}

/// Render the candidates that could not be fetched.
pub fn generate_failures<W: Write>(failures: &[SweepFailure], writer: &mut W) -> Result<()> {
    if failures.is_empty() {
        return Ok(());
    }

    writeln!(writer, "\nUnable to fetch {} repositories", failures.len())?;
    for failure in failures {
        writeln!(writer, "  {}: {}", failure.candidate, failure.error)?;
    }

    Ok(())
}
