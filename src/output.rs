//! Plain-text table rendering for tdl views.
//!
//! Tables are the classic fixed-width kind: a header row, a dashed underline
//! per column, then the data rows, columns separated by two spaces and padded
//! to the widest cell.

use crate::error::Error;

/// Column headings for the `list` and `query` tables
pub const LIST_HEADERS: [&str; 5] = ["ID", "Age", "Due Date", "Priority", "Task"];

/// Column headings for the `report` table
pub const REPORT_HEADERS: [&str; 7] = [
    "ID",
    "Age",
    "Due Date",
    "Priority",
    "Task",
    "Created",
    "Completed",
];

const COLUMN_GAP: &str = "  ";

/// Render rows under the given headers as a fixed-width table.
///
/// With no rows the output is just the header and underline lines.
pub fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.len()).collect();
    for row in rows {
        for (idx, cell) in row.iter().enumerate() {
            if idx < widths.len() && cell.len() > widths[idx] {
                widths[idx] = cell.len();
            }
        }
    }

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(format_row(
        &headers.iter().map(|h| h.to_string()).collect::<Vec<_>>(),
        &widths,
    ));
    lines.push(
        widths
            .iter()
            .map(|width| "-".repeat(*width))
            .collect::<Vec<_>>()
            .join(COLUMN_GAP),
    );
    for row in rows {
        lines.push(format_row(row, &widths));
    }

    lines.join("\n")
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, &width)| format!("{cell:<width$}"))
        .collect();
    padded.join(COLUMN_GAP).trim_end().to_string()
}

/// Print an error to stderr in the CLI's standard shape.
pub fn emit_error(err: &Error) {
    eprintln!("error: {err}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_align_to_widest_cell() {
        let rows = vec![
            vec!["1".to_string(), "0d".to_string(), "-".to_string()],
            vec!["12".to_string(), "365d".to_string(), "01/01/2025".to_string()],
        ];
        let table = render_table(&["ID", "Age", "Due Date"], &rows);
        let lines: Vec<&str> = table.lines().collect();

        assert_eq!(lines[0], "ID  Age   Due Date");
        assert_eq!(lines[1], "--  ----  ----------");
        assert_eq!(lines[2], "1   0d    -");
        assert_eq!(lines[3], "12  365d  01/01/2025");
    }

    #[test]
    fn empty_rows_render_headers_only() {
        let table = render_table(&LIST_HEADERS, &[]);
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("ID  Age  Due Date"));
    }

    #[test]
    fn trailing_padding_is_trimmed() {
        let rows = vec![vec!["1".to_string(), "short".to_string()]];
        let table = render_table(&["ID", "Task name column"], &rows);
        for line in table.lines() {
            assert_eq!(line, line.trim_end());
        }
    }
}
