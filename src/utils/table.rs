/// A simple text-based table generator for terminal output
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    col_widths: Vec<usize>,
}

/// Display width in characters, not bytes, so emoji status columns line up
fn width_of(s: &str) -> usize {
    s.chars().count()
}

impl Table {
    /// Create a new table with the given headers
    pub fn new(headers: Vec<&str>) -> Self {
        let col_widths = headers.iter().map(|h| width_of(h)).collect();
        let headers = headers.iter().map(|h| h.to_string()).collect();
        Table {
            headers,
            rows: Vec::new(),
            col_widths,
        }
    }

    /// Add a row to the table. Cells past the header count are dropped.
    pub fn add_row(&mut self, row: Vec<&str>) {
        let row_strings: Vec<String> = row
            .iter()
            .take(self.col_widths.len())
            .map(|s| s.to_string())
            .collect();

        for (i, col) in row_strings.iter().enumerate() {
            self.col_widths[i] = self.col_widths[i].max(width_of(col));
        }

        self.rows.push(row_strings);
    }

    /// Render the table as aligned plain text
    pub fn render(&self) -> String {
        let mut output = String::new();

        output.push_str(&self.render_row(&self.headers));
        output.push('\n');

        output.push_str(&self.render_separator());
        output.push('\n');

        for row in &self.rows {
            output.push_str(&self.render_row(row));
            output.push('\n');
        }

        output
    }

    /// Render a single row with proper spacing
    fn render_row(&self, row: &[String]) -> String {
        let mut cells = Vec::with_capacity(row.len());
        for (col, width) in row.iter().zip(self.col_widths.iter()) {
            let padding = width.saturating_sub(width_of(col));
            cells.push(format!("{}{}", col, " ".repeat(padding)));
        }
        cells.join(" | ").trim_end().to_string()
    }

    /// Render a separator line
    fn render_separator(&self) -> String {
        self.col_widths
            .iter()
            .map(|&width| "-".repeat(width))
            .collect::<Vec<_>>()
            .join("-+-")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_table() {
        let mut table = Table::new(vec!["id", "Amount", "Status"]);
        table.add_row(vec!["2", "$15,000.00", "FRAUD 🚨"]);
        table.add_row(vec!["1", "$199.99", "Genuine ✅"]);

        let rendered = table.render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 4);
        assert_eq!(lines[0], "id | Amount     | Status");
        assert_eq!(lines[1], "---+------------+----------");
        assert_eq!(lines[2], "2  | $15,000.00 | FRAUD 🚨");
        assert_eq!(lines[3], "1  | $199.99    | Genuine ✅");
    }

    #[test]
    fn test_extra_cells_are_dropped() {
        let mut table = Table::new(vec!["a"]);
        table.add_row(vec!["x", "ignored"]);
        assert!(!table.render().contains("ignored"));
    }
}
