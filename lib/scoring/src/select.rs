//! Item selection
//!
//! Resolves a [`ColumnSpec`] against a response table and narrows the
//! table to the scored items, converting every cell to `Option<f64>`.

use ahash::AHashMap;
use scalescore_core::{Cell, ColumnSpec, Error, ResponseTable, Result};
use tracing::debug;

/// Numeric view of the scored items, one row per respondent
///
/// Column order follows the caller's request. `sources` records where each
/// item lives in the original table so reverse-code positions can be
/// resolved against the original layout.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemTable {
    names: Vec<String>,
    sources: Vec<usize>,
    rows: Vec<Vec<Option<f64>>>,
}

impl ItemTable {
    #[inline]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Zero-based column index in the original table for each item
    #[inline]
    pub fn sources(&self) -> &[usize] {
        &self.sources
    }

    #[inline]
    pub fn rows(&self) -> &[Vec<Option<f64>>] {
        &self.rows
    }

    #[inline]
    pub fn n_items(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Position of an item within this table, looked up by its original column
    pub fn item_for_source(&self, source: usize) -> Option<usize> {
        self.sources.iter().position(|&s| s == source)
    }

    /// Apply `f` to every present value of one item column
    pub(crate) fn map_column(&mut self, item: usize, f: impl Fn(f64) -> f64) {
        for row in &mut self.rows {
            if let Some(v) = row[item].as_mut() {
                *v = f(*v);
            }
        }
    }
}

/// Resolve a column spec to zero-based indices into `table`
///
/// `Unspecified` and `AllFlag(true)` mean every column; `AllFlag(false)`
/// and empty lists resolve to nothing. Names must exist, positions are
/// 1-based and must be in bounds, and no column may be listed twice.
pub fn resolve_columns(table: &ResponseTable, spec: &ColumnSpec) -> Result<Vec<usize>> {
    let resolved: Vec<usize> = match spec {
        ColumnSpec::Unspecified | ColumnSpec::AllFlag(true) => (0..table.n_columns()).collect(),
        ColumnSpec::AllFlag(false) => Vec::new(),
        ColumnSpec::ByName(names) => {
            let lookup: AHashMap<&str, usize> = table
                .columns()
                .iter()
                .enumerate()
                .map(|(i, name)| (name.as_str(), i))
                .collect();
            names
                .iter()
                .map(|name| {
                    lookup
                        .get(name.as_str())
                        .copied()
                        .ok_or_else(|| Error::ColumnNotFound(name.clone()))
                })
                .collect::<Result<Vec<_>>>()?
        }
        ColumnSpec::ByPosition(positions) => positions
            .iter()
            .map(|&position| {
                if position == 0 || position > table.n_columns() {
                    Err(Error::PositionOutOfBounds {
                        position,
                        columns: table.n_columns(),
                    })
                } else {
                    Ok(position - 1)
                }
            })
            .collect::<Result<Vec<_>>>()?,
    };

    let mut seen = vec![false; table.n_columns()];
    for &index in &resolved {
        if std::mem::replace(&mut seen[index], true) {
            return Err(Error::DuplicateItem(table.columns()[index].clone()));
        }
    }

    Ok(resolved)
}

/// Narrow `table` to the items named by `spec`
///
/// Row order and count are preserved. Fails when the spec resolves to no
/// columns, references a column the table lacks, or when a selected column
/// holds text.
pub fn select_items(table: &ResponseTable, spec: &ColumnSpec) -> Result<ItemTable> {
    let sources = resolve_columns(table, spec)?;
    if sources.is_empty() {
        return Err(Error::EmptyItemSet);
    }

    let rows = table
        .rows()
        .iter()
        .enumerate()
        .map(|(r, row)| {
            sources
                .iter()
                .map(|&c| match &row[c] {
                    Cell::Number(v) if v.is_nan() => Ok(None),
                    Cell::Number(v) => Ok(Some(*v)),
                    Cell::Missing => Ok(None),
                    Cell::Text(_) => Err(Error::NonNumericItem {
                        column: table.columns()[c].clone(),
                        row: r,
                    }),
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    let names: Vec<String> = sources.iter().map(|&c| table.columns()[c].clone()).collect();
    debug!(items = ?names, rows = rows.len(), "selected items");

    Ok(ItemTable { names, sources, rows })
}
