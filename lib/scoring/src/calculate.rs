//! Score calculation
//!
//! Every score kind starts from the mean of a respondent's answered items.
//! A respondent with no answered items has no mean and therefore no score,
//! whatever the kind.

use crate::select::ItemTable;
use scalescore_core::{Error, Result};
use scalescore_schema::{ResponseRange, ScoreKind};

/// Mean of the present values, `None` when nothing is present
pub fn row_mean(row: &[Option<f64>]) -> Option<f64> {
    let (sum, count) = row
        .iter()
        .flatten()
        .fold((0.0f64, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        None
    } else {
        Some(sum / count as f64)
    }
}

/// Computes one score kind from rows of item values
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreCalculator {
    kind: ScoreKind,
    range: Option<ResponseRange>,
}

impl ScoreCalculator {
    /// Fails when `kind` rescales onto 0-100 and no range is given, or when
    /// the given range is not well formed
    pub fn new(kind: ScoreKind, range: Option<ResponseRange>) -> Result<Self> {
        if kind.requires_range() && range.is_none() {
            return Err(Error::RangeRequiredForKind(kind.to_string()));
        }
        if let Some(range) = &range {
            range.check()?;
        }
        Ok(Self { kind, range })
    }

    pub fn kind(&self) -> ScoreKind {
        self.kind
    }

    /// Score a single respondent
    ///
    /// - `mean`: mean of answered items
    /// - `sum`: that mean times the full item count, so a respondent who
    ///   skipped items is projected onto the whole scale
    /// - `100` / `pomp`: the mean mapped from the response range onto 0-100
    pub fn score_row(&self, row: &[Option<f64>]) -> Option<f64> {
        let mean = row_mean(row)?;
        match self.kind {
            ScoreKind::Mean => Some(mean),
            ScoreKind::Sum => Some(mean * row.len() as f64),
            ScoreKind::Hundred | ScoreKind::Pomp => self.range.map(|r| r.to_percent(mean)),
        }
    }

    /// Score every respondent, in row order
    pub fn score_items(&self, items: &ItemTable) -> Vec<Option<f64>> {
        items.rows().iter().map(|row| self.score_row(row)).collect()
    }
}
