//! Naive CSV reader used to preview raw chart data.
//!
//! Lines are split on `\n` and cells on `,`. There is no quoting or escaping:
//! a comma inside a value shifts every following cell of that row.

use std::collections::BTreeMap;

pub type CsvRow = BTreeMap<String, Option<String>>;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CsvTable {
    pub headers: Vec<String>,
    pub rows: Vec<CsvRow>,
}

impl CsvTable {
    /// Cell for `header` in row `row`, blank when the row was short.
    pub fn cell(&self, row: usize, header: &str) -> &str {
        self.rows
            .get(row)
            .and_then(|r| r.get(header))
            .and_then(|v| v.as_deref())
            .unwrap_or("")
    }
}

fn split_cells(line: &str) -> impl Iterator<Item = &str> {
    line.split(',').map(str::trim)
}

pub fn parse_csv(text: &str) -> CsvTable {
    let text = text.trim();
    if text.is_empty() {
        return CsvTable::default();
    }
    let mut lines = text.split('\n');
    let headers: Vec<String> = lines
        .next()
        .map(|l| split_cells(l).map(str::to_string).collect())
        .unwrap_or_default();

    let rows = lines
        .map(|line| {
            let values: Vec<&str> = split_cells(line).collect();
            headers
                .iter()
                .enumerate()
                .map(|(i, h)| (h.clone(), values.get(i).map(|v| v.to_string())))
                .collect::<CsvRow>()
        })
        .collect();

    CsvTable { headers, rows }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(pairs: &[(&str, Option<&str>)]) -> CsvRow {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.map(str::to_string)))
            .collect()
    }

    #[test]
    fn two_by_two() {
        let t = parse_csv("a,b\n1,2\n3,4");
        assert_eq!(t.headers, vec!["a", "b"]);
        assert_eq!(
            t.rows,
            vec![
                row(&[("a", Some("1")), ("b", Some("2"))]),
                row(&[("a", Some("3")), ("b", Some("4"))]),
            ]
        );
    }

    #[test]
    fn cells_and_headers_are_trimmed() {
        let t = parse_csv("  date , users \n 1号 ,  10 \r\n2号,20  \n");
        assert_eq!(t.headers, vec!["date", "users"]);
        assert_eq!(t.cell(0, "date"), "1号");
        assert_eq!(t.cell(0, "users"), "10");
        assert_eq!(t.cell(1, "date"), "2号");
        assert_eq!(t.cell(1, "users"), "20");
    }

    #[test]
    fn short_rows_leave_trailing_headers_unset() {
        let t = parse_csv("a,b,c\n1");
        assert_eq!(t.rows[0], row(&[("a", Some("1")), ("b", None), ("c", None)]));
        assert_eq!(t.cell(0, "c"), "");
    }

    #[test]
    fn extra_cells_are_dropped() {
        let t = parse_csv("a\n1,2,3");
        assert_eq!(t.rows[0], row(&[("a", Some("1"))]));
    }

    #[test]
    fn embedded_commas_shift_cells() {
        let t = parse_csv("city,count\nParis, France,3");
        assert_eq!(t.cell(0, "city"), "Paris");
        assert_eq!(t.cell(0, "count"), "France");
    }

    #[test]
    fn header_only_and_blank_input() {
        let t = parse_csv("x,y");
        assert_eq!(t.headers, vec!["x", "y"]);
        assert!(t.rows.is_empty());

        assert_eq!(parse_csv("   \n "), CsvTable::default());
    }

    #[test]
    fn blank_line_in_the_middle_yields_an_empty_first_cell() {
        let t = parse_csv("a,b\n\n1,2");
        assert_eq!(t.rows.len(), 2);
        assert_eq!(t.rows[0], row(&[("a", Some("")), ("b", None)]));
    }
}
