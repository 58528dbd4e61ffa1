use super::common::format_timestamp;
use crate::Result;
use crate::facts::ResultTable;
use core::fmt::Write;
use serde_json::json;

pub fn generate<W: Write>(table: &ResultTable, writer: &mut W) -> Result<()> {
    let rows: Vec<_> = table
        .rows()
        .iter()
        .map(|row| {
            json!({
                "package": row.package_name,
                "repository": row.repository_name,
                "owner": row.owner,
                "stars": row.star_count,
                "updated_at": format_timestamp(row.updated_at),
                "description": row.description,
            })
        })
        .collect();

    let output = json!({
        "columns": table.columns(),
        "rows": rows,
    });

    write!(writer, "{}", serde_json::to_string_pretty(&output)?)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facts::ResultRow;
    use chrono::NaiveDate;

    #[test]
    fn test_generate_empty_table() {
        let mut output = String::new();
        generate(&ResultTable::new(), &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(parsed["columns"].as_array().unwrap().len(), 6);
        assert!(parsed["rows"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_generate_absent_description_is_null() {
        let table: ResultTable = [ResultRow {
            package_name: "Example".into(),
            repository_name: "Example.jl".into(),
            owner: "JuliaLang".into(),
            star_count: 3,
            updated_at: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap(),
            description: None,
        }]
        .into_iter()
        .collect();

        let mut output = String::new();
        generate(&table, &mut output).unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();
        let row = &parsed["rows"][0];
        assert_eq!(row["package"], "Example");
        assert_eq!(row["stars"], 3);
        assert_eq!(row["updated_at"], "2023-01-01T00:00:00");
        assert!(row["description"].is_null());
    }
}
