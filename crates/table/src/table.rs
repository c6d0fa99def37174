use crate::error::{Result, TableError};

/// Cell values treated as missing, matching the markers common in exported
/// experiment logs. The empty string is the canonical form.
const MISSING_MARKERS: &[&str] = &["", "NA", "N/A", "NaN", "nan", "NULL", "null", "None"];

/// An ordered table of string-typed cells with named columns.
///
/// Row order is semantically meaningful (it is the chronological event order
/// within a participant) and is preserved by every operation here; nothing in
/// this type re-sorts rows.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl EventTable {
    /// Create an empty table with the given header row
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Index of a column by name
    pub fn column(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Index of a column by name, or a missing-column error
    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column(name)
            .ok_or_else(|| TableError::missing_column(name))
    }

    /// Index of a column, appending an empty one if absent
    pub fn ensure_column(&mut self, name: &str) -> usize {
        if let Some(idx) = self.column(name) {
            return idx;
        }
        self.headers.push(name.to_string());
        let width = self.headers.len();
        for row in &mut self.rows {
            row.resize(width, String::new());
        }
        width - 1
    }

    /// Append a row, padding or truncating to the header width
    pub fn push_row(&mut self, mut cells: Vec<String>) {
        cells.resize(self.headers.len(), String::new());
        self.rows.push(cells);
    }

    /// Raw cells of one row
    pub fn row(&self, row: usize) -> &[String] {
        &self.rows[row]
    }

    /// Whether a cell value counts as missing
    pub fn is_missing(cell: &str) -> bool {
        MISSING_MARKERS.contains(&cell)
    }

    /// Cell value, `None` when missing
    pub fn get(&self, row: usize, col: usize) -> Option<&str> {
        let cell = self.rows[row][col].as_str();
        if Self::is_missing(cell) {
            None
        } else {
            Some(cell)
        }
    }

    /// Cell value parsed as a float, `None` when missing or non-numeric
    pub fn get_f64(&self, row: usize, col: usize) -> Option<f64> {
        self.get(row, col).and_then(|v| v.trim().parse::<f64>().ok())
    }

    /// Cell value parsed as an integer, `None` when missing or non-numeric.
    ///
    /// Numeric text with a fractional part truncates toward zero, so `"3.0"`
    /// and `"3.75"` both read as `3`.
    pub fn get_i64(&self, row: usize, col: usize) -> Option<i64> {
        let raw = self.get(row, col)?.trim();
        if let Ok(v) = raw.parse::<i64>() {
            return Some(v);
        }
        raw.parse::<f64>().ok().map(|v| v as i64)
    }

    pub fn set(&mut self, row: usize, col: usize, value: impl Into<String>) {
        self.rows[row][col] = value.into();
    }

    pub fn set_i64(&mut self, row: usize, col: usize, value: i64) {
        self.rows[row][col] = value.to_string();
    }

    /// Store a float in normalized textual form (integral values carry no
    /// fractional part)
    pub fn set_f64(&mut self, row: usize, col: usize, value: f64) {
        self.rows[row][col] = format_num(value);
    }

    /// Keep only rows for which the predicate holds; relative order is
    /// preserved
    pub fn retain_rows(&mut self, mut keep: impl FnMut(usize) -> bool) {
        let mut idx = 0usize;
        self.rows.retain(|_| {
            let keeping = keep(idx);
            idx += 1;
            keeping
        });
    }
}

/// Normalized textual form of a number: integral values serialize without a
/// fractional part
pub(crate) fn format_num(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 9e15 {
        format!("{}", value as i64)
    } else {
        format!("{value}")
    }
}
