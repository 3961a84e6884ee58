use crate::error::Result;
use serde::Serialize;
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

pub fn write_csv<T: Serialize>(path: impl AsRef<Path>, rows: &[T]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let s = serde_json::to_string_pretty(value)?;
    std::fs::write(path, s)?;
    Ok(())
}

/// Render the first `max_rows` rows as a markdown table.
pub fn render_table<T>(rows: &[T], max_rows: usize) -> Option<String>
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().take(max_rows).cloned().collect();
    if slice.is_empty() {
        return None;
    }
    Some(Table::new(slice).with(Style::markdown()).to_string())
}

pub fn preview_table<T>(report_no: usize, title: &str, note: Option<&str>, rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    println!("\nReport {}: {}", report_no, title);
    if let Some(n) = note {
        println!("({})", n);
    }
    println!();
    match render_table(rows, max_rows) {
        Some(table_str) => println!("{}\n", table_str),
        None => println!("(no rows)\n"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, Serialize, Tabled)]
    struct Row {
        #[serde(rename = "Agency")]
        #[tabled(rename = "Agency")]
        agency: String,
        #[serde(rename = "Nights")]
        #[tabled(rename = "Nights")]
        nights: i64,
    }

    fn rows() -> Vec<Row> {
        vec![
            Row { agency: "ALPHA".into(), nights: 10 },
            Row { agency: "BETA".into(), nights: 3 },
        ]
    }

    #[test]
    fn csv_uses_renamed_headers() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rows.csv");
        write_csv(&path, &rows()).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(lines.next(), Some("Agency,Nights"));
        assert_eq!(lines.next(), Some("ALPHA,10"));
    }

    #[test]
    fn unwritable_path_returns_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("rows.csv");
        assert!(write_csv(&path, &rows()).is_err());
        assert!(!path.exists());
    }

    #[test]
    fn markdown_preview_is_truncated() {
        let table = render_table(&rows(), 1).unwrap();
        assert!(table.contains("ALPHA"));
        assert!(!table.contains("BETA"));
        assert!(render_table::<Row>(&[], 5).is_none());
    }
}
