//! Scoring pipeline
//!
//! Wires the stages together: validate options, select items, reverse
//! code, then score and gate each respondent, and finally assemble the
//! output table. Every failure is raised before any respondent is scored.

use crate::assemble::{assemble, ScoreTable};
use crate::calculate::ScoreCalculator;
use crate::missing::analyze_row;
use crate::prorate::gate_score;
use crate::reverse::reverse_code;
use crate::select::{select_items, ItemTable};
use rayon::prelude::*;
use scalescore_core::{ResponseTable, Result};
use scalescore_schema::{validate_options, ScoringOptions};
use tracing::{debug, trace};

/// Row count at which scoring switches to a parallel iterator
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Scores one scale over any number of response tables
///
/// Options are validated once, on construction.
#[derive(Debug, Clone)]
pub struct Scorer {
    options: ScoringOptions,
    calculator: ScoreCalculator,
    parallel_threshold: usize,
}

impl Scorer {
    pub fn new(options: ScoringOptions) -> Result<Self> {
        validate_options(&options)?;
        let calculator = ScoreCalculator::new(options.score_kind, options.response_range)?;
        Ok(Self {
            options,
            calculator,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        })
    }

    /// Set the row count at which scoring runs in parallel
    ///
    /// Output order is the same either way. `usize::MAX` keeps scoring
    /// sequential.
    pub fn with_parallel_threshold(mut self, rows: usize) -> Self {
        self.parallel_threshold = rows;
        self
    }

    pub fn options(&self) -> &ScoringOptions {
        &self.options
    }

    /// Select and reverse-code the items of `table`
    ///
    /// This is everything the pipeline does before scoring, exposed so
    /// callers can inspect the values that will be scored.
    pub fn prepare(&self, table: &ResponseTable) -> Result<ItemTable> {
        let items = select_items(table, &self.options.items)?;
        reverse_code(
            table,
            items,
            &self.options.reverse_items,
            self.options.response_range.as_ref(),
        )
    }

    /// Score every respondent in `table`
    pub fn score(&self, table: &ResponseTable) -> Result<ScoreTable> {
        let items = self.prepare(table)?;
        let tolerance = self.options.missing_tolerance;

        let score_row = |row: &Vec<Option<f64>>| {
            let missingness = analyze_row(row);
            let score = gate_score(self.calculator.score_row(row), &missingness, tolerance);
            (score, missingness.valid_count)
        };

        let (scores, valid_counts): (Vec<Option<f64>>, Vec<usize>) =
            if items.n_rows() >= self.parallel_threshold {
                trace!(rows = items.n_rows(), "scoring in parallel");
                items.rows().par_iter().map(score_row).unzip()
            } else {
                items.rows().iter().map(score_row).unzip()
            };

        let scored = scores.iter().filter(|s| s.is_some()).count();
        debug!(
            scale = %self.options.score_name,
            kind = %self.options.score_kind,
            items = items.n_items(),
            rows = scores.len(),
            scored,
            unscored = scores.len() - scored,
            "scored scale"
        );

        assemble(
            self.options.score_name.clone(),
            scores,
            valid_counts,
            self.options.include_valid_count,
        )
    }
}

/// Score one scale over `table` with the given options
pub fn score_scale(table: &ResponseTable, options: &ScoringOptions) -> Result<ScoreTable> {
    Scorer::new(options.clone())?.score(table)
}
