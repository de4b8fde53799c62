//! In-memory tables of named columns, read from and written to CSV.
//!
//! A [`Table`] keeps its columns in insertion order and every column has the same
//! number of rows. Cells are loosely typed [`Value`]s so that a column read from
//! disk can hold numbers, flags, free text and gaps side by side; numeric access
//! coerces on the way out.

mod io;

use std::fmt;

use crate::error::{Error, Result};

pub use io::{read_csv, write_csv};

/// A single cell.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Missing,
    Number(f64),
    Bool(bool),
    Text(String),
}

impl Value {
    /// Parse a raw CSV field.
    ///
    /// Empty fields and `NaN` are missing, numbers become `Number`, `true`/`false`
    /// in any case become `Bool`, anything else is kept as `Text`.
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        if raw.is_empty() {
            return Value::Missing;
        }
        if let Ok(number) = raw.parse::<f64>() {
            return Value::from(number);
        }
        if raw.eq_ignore_ascii_case("true") {
            Value::Bool(true)
        } else if raw.eq_ignore_ascii_case("false") {
            Value::Bool(false)
        } else {
            Value::Text(raw.to_string())
        }
    }

    /// Numeric view of the cell. Text is parsed; flags and gaps have none.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(v) => Some(*v),
            Value::Text(s) => s.trim().parse::<f64>().ok().filter(|v| !v.is_nan()),
            Value::Bool(_) | Value::Missing => None,
        }
    }

    /// Boolean view of the cell.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        if v.is_nan() {
            Value::Missing
        } else {
            Value::Number(v)
        }
    }
}

impl From<Option<f64>> for Value {
    fn from(v: Option<f64>) -> Self {
        v.map_or(Value::Missing, Value::from)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Missing => Ok(()),
            Value::Number(v) => write!(f, "{}", v),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Text(s) => f.write_str(s),
        }
    }
}

/// A named column of cells.
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    name: String,
    values: Vec<Value>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<Value>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Column of numbers; NaN becomes a gap.
    pub fn numeric(name: impl Into<String>, values: impl IntoIterator<Item = f64>) -> Self {
        Self::new(name, values.into_iter().map(Value::from).collect())
    }

    /// Column of flags.
    pub fn boolean(name: impl Into<String>, values: impl IntoIterator<Item = bool>) -> Self {
        Self::new(name, values.into_iter().map(Value::Bool).collect())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn values(&self) -> &[Value] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [Value] {
        &mut self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Numeric view of every cell, `None` where the cell is not a number.
    pub fn to_f64(&self) -> Vec<Option<f64>> {
        self.values.iter().map(Value::as_f64).collect()
    }

    fn take(&self, indices: &[usize]) -> Self {
        Self::new(
            self.name.clone(),
            indices.iter().map(|&i| self.values[i].clone()).collect(),
        )
    }
}

/// An ordered collection of equally long columns.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Create a table with no columns.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from columns, which must all have the same length.
    ///
    /// A column whose name repeats an earlier one replaces it.
    pub fn from_columns(columns: impl IntoIterator<Item = Column>) -> Result<Self> {
        let mut table = Self::new();
        for column in columns {
            table.set_column(column)?;
        }
        Ok(table)
    }

    /// Append (or replace) a numeric column, builder style.
    pub fn with_numeric_column(
        mut self,
        name: impl Into<String>,
        values: impl IntoIterator<Item = f64>,
    ) -> Result<Self> {
        self.set_column(Column::numeric(name, values))?;
        Ok(self)
    }

    pub fn n_rows(&self) -> usize {
        self.columns.first().map_or(0, Column::len)
    }

    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// True when the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows() == 0
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name == name)
    }

    /// Look up a column, failing with `MissingColumn` if it is absent.
    pub fn require_column(&self, name: &str) -> Result<&Column> {
        self.column(name).ok_or_else(|| Error::MissingColumn {
            column: name.to_string(),
        })
    }

    /// Numeric view of a column, failing with `MissingColumn` if it is absent.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<Option<f64>>> {
        Ok(self.require_column(name)?.to_f64())
    }

    /// Replace the column with the same name in place, or append it.
    ///
    /// The first column fixes the row count; later columns must match it.
    pub fn set_column(&mut self, column: Column) -> Result<()> {
        let actual = column.len();
        if !self.columns.is_empty() && actual != self.n_rows() {
            return Err(Error::LengthMismatch {
                column: column.name,
                expected: self.n_rows(),
                actual,
            });
        }

        match self.columns.iter_mut().find(|c| c.name == column.name) {
            Some(existing) => *existing = column,
            None => self.columns.push(column),
        }
        Ok(())
    }

    /// Cells of row `index` in column order.
    pub fn row(&self, index: usize) -> Option<Vec<&Value>> {
        if index >= self.n_rows() {
            return None;
        }
        Some(self.columns.iter().map(|c| &c.values[index]).collect())
    }

    /// New table with the rows at `indices`, in that order.
    ///
    /// Indices past the last row are skipped.
    pub fn take_rows(&self, indices: &[usize]) -> Self {
        let n_rows = self.n_rows();
        let indices: Vec<usize> = indices.iter().copied().filter(|&i| i < n_rows).collect();

        Self {
            columns: self.columns.iter().map(|c| c.take(&indices)).collect(),
        }
    }

    /// New table with the rows where `mask` is true.
    pub fn filter_rows(&self, mask: &[bool]) -> Result<Self> {
        if mask.len() != self.n_rows() {
            return Err(Error::LengthMismatch {
                column: "mask".to_string(),
                expected: self.n_rows(),
                actual: mask.len(),
            });
        }

        let indices: Vec<usize> = mask
            .iter()
            .enumerate()
            .filter_map(|(i, &keep)| keep.then_some(i))
            .collect();
        Ok(self.take_rows(&indices))
    }

    /// The first `n` rows.
    pub fn head(&self, n: usize) -> Self {
        let indices: Vec<usize> = (0..n.min(self.n_rows())).collect();
        self.take_rows(&indices)
    }
}
