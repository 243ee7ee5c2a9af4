//! Instrument scoring
//!
//! Scores every scale of an [`Instrument`] over the same responses and
//! lays the results side by side.

use crate::assemble::ScoreTable;
use crate::engine::Scorer;
use scalescore_core::{Cell, Error, ResponseTable, Result};
use scalescore_schema::Instrument;
use serde::Serialize;
use tracing::debug;

/// Scores for every scale of one instrument, in definition order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InstrumentScores {
    pub instrument: String,
    pub scales: Vec<ScoreTable>,
}

impl InstrumentScores {
    pub fn get(&self, score_name: &str) -> Option<&ScoreTable> {
        self.scales.iter().find(|s| s.score_name() == score_name)
    }

    /// All output column names, scale by scale
    pub fn columns(&self) -> Vec<String> {
        self.scales.iter().flat_map(ScoreTable::columns).collect()
    }

    /// All scale outputs combined into one table
    ///
    /// Fails when the scales disagree on the number of respondents.
    pub fn to_table(&self) -> Result<ResponseTable> {
        let columns: Vec<Vec<Cell>> = self.scales.iter().flat_map(ScoreTable::cell_columns).collect();
        let n_rows = columns.first().map(Vec::len).unwrap_or(0);
        if let Some(scale) = self.scales.iter().find(|s| s.len() != n_rows) {
            return Err(Error::InvalidConfig(format!(
                "scale {} has {} rows, expected {}",
                scale.score_name(),
                scale.len(),
                n_rows
            )));
        }
        let rows = (0..n_rows)
            .map(|i| columns.iter().map(|c| c[i].clone()).collect())
            .collect();
        ResponseTable::new(self.columns(), rows)
    }

    /// Append every scale's output columns onto a copy of `table`
    pub fn bind_to(&self, table: &ResponseTable) -> Result<ResponseTable> {
        let columns = self.scales.iter().flat_map(ScoreTable::cell_columns).collect();
        table.with_columns(self.columns(), columns)
    }
}

/// Score each scale of `instrument` over `table`
///
/// The instrument is validated up front, so a bad scale definition fails
/// before any scale is scored.
pub fn score_instrument(table: &ResponseTable, instrument: &Instrument) -> Result<InstrumentScores> {
    instrument.validate()?;

    let scorers = instrument
        .scales
        .iter()
        .map(|options| Scorer::new(options.clone()))
        .collect::<Result<Vec<_>>>()?;

    // Prepare every scale first so selection and range errors surface
    // before any scores are produced.
    for scorer in &scorers {
        scorer.prepare(table)?;
    }

    let scales = scorers
        .iter()
        .map(|scorer| scorer.score(table))
        .collect::<Result<Vec<_>>>()?;

    debug!(instrument = %instrument.name, scales = scales.len(), rows = table.n_rows(), "scored instrument");

    Ok(InstrumentScores {
        instrument: instrument.name.clone(),
        scales,
    })
}
