use super::common::format_timestamp;
use crate::Result;
use crate::facts::ResultTable;
use core::fmt::Write;
use std::borrow::Cow;

pub fn generate<W: Write>(table: &ResultTable, writer: &mut W) -> Result<()> {
    writeln!(writer, "{}", table.columns().join(","))?;

    for row in table.rows() {
        write!(writer, "{}", escape_csv(&row.package_name))?;
        write!(writer, ",{}", escape_csv(&row.repository_name))?;
        write!(writer, ",{}", escape_csv(&row.owner))?;
        write!(writer, ",{}", row.star_count)?;
        write!(writer, ",{}", format_timestamp(row.updated_at))?;

        // An absent description is an empty field, a present but empty one is `""`.
        match row.description.as_deref() {
            None => writeln!(writer, ",")?,
            Some("") => writeln!(writer, ",\"\"")?,
            Some(description) => writeln!(writer, ",{}", escape_csv(description))?,
        }
    }

    Ok(())
}

/// Escape a value for RFC compliant CSV output.
///
/// Wraps the value in double quotes if it contains commas, newlines, or double quotes.
/// Internal double quotes are doubled per the RFC.
fn escape_csv(s: &str) -> Cow<'_, str> {
    if s.contains('"') {
        Cow::Owned(format!("\"{}\"", s.replace('"', "\"\"")))
    } else if s.contains(',') || s.contains('\n') || s.contains('\r') {
        Cow::Owned(format!("\"{s}\""))
    } else {
        Cow::Borrowed(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::ResultRow;
    use chrono::NaiveDate;

    fn row(package: &str, stars: u64, description: Option<&str>) -> ResultRow {
        ResultRow {
            package_name: package.to_string(),
            repository_name: format!("{package}.jl"),
            owner: "JuliaLang".to_string(),
            star_count: stars,
            updated_at: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(12, 0, 0).unwrap(),
            description: description.map(ToString::to_string),
        }
    }

    #[test]
    fn test_escape_csv_no_special_chars() {
        let result = escape_csv("hello world");
        assert_eq!(result, "hello world");
        assert!(matches!(result, Cow::Borrowed(_)));
    }

    #[test]
    fn test_escape_csv_with_quotes() {
        let result = escape_csv("hello \"world\"");
        assert_eq!(result, "\"hello \"\"world\"\"\"");
    }

    #[test]
    fn test_escape_csv_with_comma_and_newline() {
        assert_eq!(escape_csv("hello,world"), "\"hello,world\"");
        assert_eq!(escape_csv("hello\nworld"), "\"hello\nworld\"");
    }

    #[test]
    fn test_generate_empty_table_writes_header() {
        let mut output = String::new();
        generate(&ResultTable::new(), &mut output).unwrap();

        assert_eq!(output, "package,repository,owner,stars,updated_at,description\n");
    }

    #[test]
    fn test_generate_rows_in_order() {
        let table: ResultTable = [row("Example", 12, Some("An example")), row("Other", 0, Some("a, b"))].into_iter().collect();
        let mut output = String::new();
        generate(&table, &mut output).unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[1], "Example,Example.jl,JuliaLang,12,2023-01-01T12:00:00,An example");
        assert_eq!(lines[2], "Other,Other.jl,JuliaLang,0,2023-01-01T12:00:00,\"a, b\"");
    }

    #[test]
    fn test_generate_distinguishes_absent_and_empty_description() {
        let table: ResultTable = [row("Absent", 1, None), row("Empty", 2, Some(""))].into_iter().collect();
        let mut output = String::new();
        generate(&table, &mut output).unwrap();

        let lines: Vec<_> = output.lines().collect();
        assert!(lines[1].ends_with(",2023-01-01T12:00:00,"));
        assert!(lines[2].ends_with(",2023-01-01T12:00:00,\"\""));
    }
}
