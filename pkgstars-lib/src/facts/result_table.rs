use super::RepositoryRecord;
use chrono::NaiveDateTime;

/// Column names, in output order.
pub const COLUMNS: [&str; 6] = ["package", "repository", "owner", "stars", "updated_at", "description"];

/// One successfully fetched repository, tagged with the package that declared it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRow {
    pub package_name: String,
    pub repository_name: String,
    pub owner: String,
    pub star_count: u64,
    pub updated_at: NaiveDateTime,

    /// `None` when the repository has no description, which is not the same as `Some("")`.
    pub description: Option<String>,
}

impl ResultRow {
    #[must_use]
    pub fn from_record(package_name: impl Into<String>, record: &RepositoryRecord) -> Self {
        Self {
            package_name: package_name.into(),
            repository_name: record.name().to_string(),
            owner: record.owner().to_string(),
            star_count: record.star_count(),
            updated_at: record.updated_at(),
            description: record.description().map(ToString::to_string),
        }
    }
}

/// Ordered rows produced by a sweep.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    rows: Vec<ResultRow>,
}

impl ResultTable {
    #[must_use]
    pub const fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn push(&mut self, row: ResultRow) {
        self.rows.push(row);
    }

    #[must_use]
    pub fn rows(&self) -> &[ResultRow] {
        &self.rows
    }

    #[must_use]
    pub const fn columns(&self) -> &'static [&'static str] {
        &COLUMNS
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<ResultRow> for ResultTable {
    fn from_iter<I: IntoIterator<Item = ResultRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(description: Option<&str>) -> RepositoryRecord {
        RepositoryRecord::new(
            "Example.jl".into(),
            "JuliaLang".into(),
            7,
            NaiveDate::from_ymd_opt(2024, 5, 6).unwrap().and_hms_opt(7, 8, 9).unwrap(),
            description.map(ToString::to_string),
        )
    }

    #[test]
    fn test_row_from_record() {
        let row = ResultRow::from_record("Example", &record(Some("An example")));

        assert_eq!(row.package_name, "Example");
        assert_eq!(row.repository_name, "Example.jl");
        assert_eq!(row.owner, "JuliaLang");
        assert_eq!(row.star_count, 7);
        assert_eq!(row.description.as_deref(), Some("An example"));
    }

    #[test]
    fn test_row_keeps_absent_and_empty_descriptions_apart() {
        let absent = ResultRow::from_record("A", &record(None));
        let empty = ResultRow::from_record("A", &record(Some("")));

        assert_eq!(absent.description, None);
        assert_eq!(empty.description.as_deref(), Some(""));
        assert_ne!(absent, empty);
    }

    #[test]
    fn test_empty_table_has_all_columns() {
        let table = ResultTable::new();

        assert!(table.is_empty());
        assert_eq!(table.columns(), COLUMNS);
    }

    #[test]
    fn test_push_preserves_order() {
        let mut table = ResultTable::new();
        table.push(ResultRow::from_record("first", &record(None)));
        table.push(ResultRow::from_record("second", &record(None)));

        let names: Vec<_> = table.rows().iter().map(|r| r.package_name.as_str()).collect();
        assert_eq!(names, ["first", "second"]);
    }
}
