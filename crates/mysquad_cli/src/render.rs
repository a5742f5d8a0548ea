//! Plain text tables for terminal output.

use mysquad_core::table::{Align, TableRecord};

pub trait TableRenderer {
    fn render(&self, headers: &[&str], align: &[Align], rows: &[Vec<String>]) -> String;
}

/// ` | ` separated columns with a dashed rule under the headers.
#[derive(Debug, Clone, Copy, Default)]
pub struct TextTable;

impl TextTable {
    fn line(cells: &[String], widths: &[usize], align: &[Align]) -> String {
        let padded: Vec<String> = cells
            .iter()
            .zip(widths)
            .enumerate()
            .map(|(i, (cell, width))| match align.get(i).copied().unwrap_or(Align::Left) {
                Align::Left => format!("{cell:<width$}"),
                Align::Right => format!("{cell:>width$}"),
            })
            .collect();

        format!(" {}", padded.join(" | ")).trim_end().to_string()
    }
}

impl TableRenderer for TextTable {
    fn render(&self, headers: &[&str], align: &[Align], rows: &[Vec<String>]) -> String {
        let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
        for row in rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }

        let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
        let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();

        let mut out = String::new();
        out.push_str(&Self::line(&header_cells, &widths, align));
        out.push('\n');
        out.push_str(&Self::line(&rule, &widths, &vec![Align::Left; widths.len()]));
        out.push('\n');
        for row in rows {
            out.push_str(&Self::line(row, &widths, align));
            out.push('\n');
        }
        out
    }
}

pub fn render_records<T: TableRecord>(renderer: &impl TableRenderer, records: &[T]) -> String {
    let rows: Vec<Vec<String>> = records.iter().map(TableRecord::cells).collect();
    renderer.render(T::HEADERS, T::ALIGN, &rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row(&'static str, u32);

    impl TableRecord for Row {
        const HEADERS: &'static [&'static str] = &["NAME", "PTS"];
        const ALIGN: &'static [Align] = &[Align::Left, Align::Right];

        fn cells(&self) -> Vec<String> {
            vec![self.0.to_string(), self.1.to_string()]
        }
    }

    #[test]
    fn test_text_table_layout() {
        let out = render_records(&TextTable, &[Row("Arsenal", 3), Row("Everton", 10)]);
        let lines: Vec<&str> = out.lines().collect();

        assert_eq!(lines[0], " NAME    | PTS");
        assert_eq!(lines[1], " ------- | ---");
        assert_eq!(lines[2], " Arsenal |   3");
        assert_eq!(lines[3], " Everton |  10");
    }

    #[test]
    fn test_empty_table_has_headers() {
        let out = render_records::<Row>(&TextTable, &[]);
        assert_eq!(out.lines().count(), 2);
    }
}
