//! Result sets as they are displayed: column names plus stringified cells.

/// Rows returned by a read or a report. `None` cells are SQL NULLs.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryResult {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

impl QueryResult {
    pub fn new(columns: Vec<String>, rows: Vec<Vec<Option<String>>>) -> Self {
        Self { columns, rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Replaces the column names with friendlier headers.
    ///
    /// Ignored when the header count does not match, so a schema change never hides data.
    pub fn with_headers(mut self, headers: &[&str]) -> Self {
        if !headers.is_empty() && headers.len() == self.columns.len() {
            self.columns = headers.iter().map(|h| h.to_string()).collect();
        }
        self
    }

    /// Fills NULL cells of the given columns with a label, e.g. `"Total"` on rollup rows.
    pub fn with_null_labels(mut self, labels: &[(usize, &str)]) -> Self {
        for row in &mut self.rows {
            for &(index, label) in labels {
                if let Some(cell) = row.get_mut(index) {
                    if cell.is_none() {
                        *cell = Some(label.to_string());
                    }
                }
            }
        }
        self
    }

    /// Value of a cell by column name.
    #[cfg(test)]
    pub fn cell(&self, row: usize, column: &str) -> Option<&str> {
        let index = self.columns.iter().position(|c| c == column)?;
        self.rows.get(row)?.get(index)?.as_deref()
    }
}
