//! Response table
//!
//! An ordered sequence of respondent rows over a fixed, named column layout.
//! Construction enforces the structural invariants (at least one column,
//! unique column names, every row as wide as the header), so any
//! `ResponseTable` handed to the scoring engine is already rectangular.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashSet;

/// A single response cell
///
/// `NaN` is not a response; numeric constructors fold it into `Missing`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    /// Build a numeric cell, mapping `NaN` to `Missing`
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Cell::Missing
        } else {
            Cell::Number(value)
        }
    }

    pub fn text(value: impl Into<String>) -> Self {
        Cell::Text(value.into())
    }

    #[inline]
    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(v) => Some(*v),
            _ => None,
        }
    }

    fn from_json(value: &Value, row: usize, column: &str) -> Result<Self> {
        match value {
            Value::Null => Ok(Cell::Missing),
            Value::Number(n) => n.as_f64().map(Cell::number).ok_or_else(|| Error::UnsupportedCell {
                row,
                column: column.to_string(),
            }),
            Value::String(s) => Ok(Cell::Text(s.clone())),
            _ => Err(Error::UnsupportedCell {
                row,
                column: column.to_string(),
            }),
        }
    }
}

impl From<f64> for Cell {
    fn from(value: f64) -> Self {
        Cell::number(value)
    }
}

impl From<Option<f64>> for Cell {
    fn from(value: Option<f64>) -> Self {
        value.map(Cell::number).unwrap_or(Cell::Missing)
    }
}

impl From<&str> for Cell {
    fn from(value: &str) -> Self {
        Cell::Text(value.to_string())
    }
}

/// Tabular survey responses: one row per respondent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawTable")]
pub struct ResponseTable {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

#[derive(Deserialize)]
struct RawTable {
    columns: Vec<String>,
    #[serde(default)]
    rows: Vec<Vec<Cell>>,
}

impl TryFrom<RawTable> for ResponseTable {
    type Error = Error;

    fn try_from(raw: RawTable) -> Result<Self> {
        ResponseTable::new(raw.columns, raw.rows)
    }
}

impl ResponseTable {
    /// Create a table from a header and rows
    ///
    /// Fails when there are no columns, a column name repeats, or a row
    /// does not have exactly one cell per column. `Cell::Number(NaN)` is
    /// stored as `Cell::Missing`.
    pub fn new(columns: Vec<String>, mut rows: Vec<Vec<Cell>>) -> Result<Self> {
        if columns.is_empty() {
            return Err(Error::NoColumns);
        }
        check_unique(&columns)?;

        for (i, row) in rows.iter().enumerate() {
            if row.len() != columns.len() {
                return Err(Error::RaggedRow {
                    row: i,
                    expected: columns.len(),
                    actual: row.len(),
                });
            }
        }

        for cell in rows.iter_mut().flatten() {
            if matches!(cell, Cell::Number(v) if v.is_nan()) {
                *cell = Cell::Missing;
            }
        }

        Ok(Self { columns, rows })
    }

    /// Create a table of numeric responses, `None` marking a missing answer
    pub fn from_numeric<S: Into<String>>(
        columns: impl IntoIterator<Item = S>,
        rows: Vec<Vec<Option<f64>>>,
    ) -> Result<Self> {
        let columns = columns.into_iter().map(Into::into).collect();
        let rows = rows
            .into_iter()
            .map(|row| row.into_iter().map(Cell::from).collect())
            .collect();
        Self::new(columns, rows)
    }

    /// Create a table from JSON records (`[{"id": "a", "q1": 3, "q2": null}, ...]`)
    ///
    /// The first record fixes the column layout and order. Keys absent from
    /// a later record read as missing; keys the first record does not have
    /// are rejected.
    pub fn from_records(records: &[Value]) -> Result<Self> {
        let first = match records.first() {
            Some(Value::Object(map)) => map,
            Some(_) => return Err(Error::NotARecord(0)),
            None => return Err(Error::NoColumns),
        };
        let columns: Vec<String> = first.keys().cloned().collect();

        let mut rows = Vec::with_capacity(records.len());
        for (i, record) in records.iter().enumerate() {
            let map = record.as_object().ok_or(Error::NotARecord(i))?;
            if let Some(extra) = map.keys().find(|k| !first.contains_key(k.as_str())) {
                return Err(Error::UnknownRecordColumn {
                    row: i,
                    column: extra.clone(),
                });
            }

            let row = columns
                .iter()
                .map(|name| match map.get(name) {
                    Some(value) => Cell::from_json(value, i, name),
                    None => Ok(Cell::Missing),
                })
                .collect::<Result<Vec<_>>>()?;
            rows.push(row);
        }

        Self::new(columns, rows)
    }

    /// Convert rows back into JSON records keyed by column name
    pub fn to_records(&self) -> Vec<Value> {
        self.rows
            .iter()
            .map(|row| {
                let map = self
                    .columns
                    .iter()
                    .zip(row)
                    .map(|(name, cell)| {
                        let value = match cell {
                            Cell::Number(v) => serde_json::Number::from_f64(*v)
                                .map(Value::Number)
                                .unwrap_or(Value::Null),
                            Cell::Text(s) => Value::String(s.clone()),
                            Cell::Missing => Value::Null,
                        };
                        (name.clone(), value)
                    })
                    .collect();
                Value::Object(map)
            })
            .collect()
    }

    #[inline]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn n_columns(&self) -> usize {
        self.columns.len()
    }

    /// Zero-based index of a column by name
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Iterate over the cells of one column, top to bottom
    pub fn column(&self, index: usize) -> impl Iterator<Item = &Cell> + '_ {
        self.rows.iter().filter_map(move |row| row.get(index))
    }

    pub fn cell(&self, row: usize, column: usize) -> Option<&Cell> {
        self.rows.get(row).and_then(|r| r.get(column))
    }

    /// Return a copy of this table with extra columns appended on the right
    ///
    /// Each new column must have one cell per existing row and a name the
    /// table does not already use.
    pub fn with_columns(&self, names: Vec<String>, columns: Vec<Vec<Cell>>) -> Result<Self> {
        if names.len() != columns.len() {
            return Err(Error::InvalidConfig(format!(
                "{} column names given for {} columns",
                names.len(),
                columns.len()
            )));
        }
        for name in &names {
            if self.column_index(name).is_some() {
                return Err(Error::OutputColumnExists(name.clone()));
            }
        }
        for column in &columns {
            if column.len() != self.rows.len() {
                return Err(Error::RaggedRow {
                    row: column.len().min(self.rows.len()),
                    expected: self.rows.len(),
                    actual: column.len(),
                });
            }
        }

        let mut header = self.columns.clone();
        header.extend(names);

        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                let mut out = row.clone();
                out.extend(columns.iter().map(|c| c[i].clone()));
                out
            })
            .collect();

        Self::new(header, rows)
    }
}

fn check_unique(columns: &[String]) -> Result<()> {
    let mut seen = HashSet::with_capacity(columns.len());
    for name in columns {
        if !seen.insert(name.as_str()) {
            return Err(Error::DuplicateColumn(name.clone()));
        }
    }
    Ok(())
}
