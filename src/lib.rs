//! # scalescore
//!
//! Scale scoring for patient-reported-outcome and quality-of-life
//! questionnaires.
//!
//! scalescore turns a table of item-level responses into one composite
//! score per respondent: it selects the scale's items, reverse-codes the
//! ones that point the other way, computes a prorated sum, a mean, or a
//! 0-100 score, and withholds the score from respondents who skipped too
//! many items.
//!
//! ## Quick Start
//!
//! ```rust
//! use scalescore::prelude::*;
//!
//! let responses = ResponseTable::from_numeric(
//!     ["q1", "q2", "q3", "q4"],
//!     vec![
//!         vec![Some(4.0), Some(3.0), None, Some(2.0)],
//!         vec![Some(1.0), None, None, None],
//!     ],
//! ).unwrap();
//!
//! let options = ScoringOptions::builder()
//!     .response_range(0.0, 4.0)
//!     .score_kind(ScoreKind::Sum)
//!     .missing_tolerance(0.5)
//!     .build()
//!     .unwrap();
//!
//! let scores = score_scale(&responses, &options).unwrap();
//! assert_eq!(scores.scores(), &[Some(12.0), None]);
//! ```
//!
//! ## Crate Structure
//!
//! scalescore is composed of several crates:
//!
//! - `scalescore-core` - Response tables, column addressing, errors, synthetic data
//! - `scalescore-schema` - Scoring options, score kinds, response ranges, instruments
//! - `scalescore-scoring` - The scoring pipeline and its stages
//!
//! ## Score Kinds
//!
//! - **mean**: mean of answered items
//! - **sum**: mean of answered items times the number of items
//! - **100** / **pomp**: mean rescaled from the response range onto 0-100

// Re-export core types
pub use scalescore_core::{
    fake_responses, Cell, ColumnSpec, Error, ErrorKind, FakeDataConfig, ResponseTable, Result,
};

// Re-export schema
pub use scalescore_schema::{
    validate_options, Instrument, ResponseRange, ScoreKind, ScoringOptions, ScoringOptionsBuilder,
};

// Re-export scoring
pub use scalescore_scoring::{
    score_instrument, score_scale, InstrumentScores, ItemTable, Missingness, ResultRow, ScoreTable,
    Scorer,
};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        ResponseTable, Cell, ColumnSpec,
        ScoringOptions, ScoreKind, ResponseRange, Instrument,
        Scorer, ScoreTable, InstrumentScores,
        score_scale, score_instrument,
        Error, ErrorKind, Result,
    };
}

/// Individual pipeline stages, for callers that run them piecemeal
pub mod stages {
    pub use scalescore_scoring::{
        analyze_missingness, analyze_row, apply_gate, assemble, check_conformance, gate_score,
        passes_gate, resolve_columns, reverse_code, row_mean, select_items, ScoreCalculator,
    };
}
