use crate::facts::{ResultTable, SweepOutcome};

/// Totals of a sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct RunSummary {
    /// Number of repositories fetched successfully.
    pub successes: usize,

    /// Number of candidates whose lookup failed.
    pub failures: usize,

    /// Mean star count over repositories with at least one star.
    pub mean_stars: Option<f64>,

    /// Highest star count over repositories with at least one star.
    pub max_stars: Option<u64>,
}

impl RunSummary {
    /// Summarize a table. Repositories without stars count as successes but are left out
    /// of the mean and maximum.
    #[must_use]
    pub fn from_table(table: &ResultTable, failures: usize) -> Self {
        let starred: Vec<u64> = table.rows().iter().map(|row| row.star_count).filter(|&stars| stars > 0).collect();

        #[expect(clippy::cast_precision_loss, reason = "star totals stay far below 2^52")]
        let mean_stars = (!starred.is_empty()).then(|| starred.iter().sum::<u64>() as f64 / starred.len() as f64);

        Self {
            successes: table.len(),
            failures,
            mean_stars,
            max_stars: starred.iter().copied().max(),
        }
    }

    #[must_use]
    pub fn from_outcome(outcome: &SweepOutcome) -> Self {
        Self::from_table(&outcome.table, outcome.failures.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::ResultRow;
    use chrono::NaiveDateTime;

    fn table(stars: &[u64]) -> ResultTable {
        stars
            .iter()
            .enumerate()
            .map(|(i, &star_count)| ResultRow {
                package_name: format!("P{i}"),
                repository_name: format!("P{i}.jl"),
                owner: "o".into(),
                star_count,
                updated_at: NaiveDateTime::default(),
                description: None,
            })
            .collect()
    }

    #[test]
    fn test_zero_star_rows_excluded_from_mean_and_max() {
        let summary = RunSummary::from_table(&table(&[0, 10, 20]), 0);

        assert_eq!(summary.successes, 3);
        assert_eq!(summary.mean_stars, Some(15.0));
        assert_eq!(summary.max_stars, Some(20));
    }

    #[test]
    fn test_only_zero_stars() {
        let summary = RunSummary::from_table(&table(&[0, 0]), 1);

        assert_eq!(summary.successes, 2);
        assert_eq!(summary.failures, 1);
        assert_eq!(summary.mean_stars, None);
        assert_eq!(summary.max_stars, None);
    }

    #[test]
    fn test_empty_table() {
        let summary = RunSummary::from_table(&ResultTable::new(), 0);
        assert_eq!(summary, RunSummary::default());
    }
}
