//! # scalescore Scoring
//!
//! The scale scoring engine: turns item-level questionnaire responses into
//! one composite score per respondent.
//!
//! ## Features
//!
//! - **Item selection**: by name, by 1-based position, or every column
//! - **Reverse coding**: reflect items around the response-range midpoint
//! - **Score kinds**: prorated sum, mean, and 0-100 (`100` / `pomp`)
//! - **Missing data**: per-respondent tolerance gate on the proportion of
//!   unanswered items
//! - **Instruments**: several scales scored over the same responses
//!
//! ## Example
//!
//! ```rust
//! use scalescore_core::ResponseTable;
//! use scalescore_schema::{ScoringOptions, ScoreKind};
//! use scalescore_scoring::score_scale;
//!
//! let responses = ResponseTable::from_numeric(
//!     ["q1", "q2", "q3", "q4"],
//!     vec![vec![Some(4.0), Some(3.0), None, Some(2.0)]],
//! ).unwrap();
//!
//! let options = ScoringOptions::builder()
//!     .response_range(0.0, 4.0)
//!     .score_kind(ScoreKind::Pomp)
//!     .include_valid_count(true)
//!     .build()
//!     .unwrap();
//!
//! let scores = score_scale(&responses, &options).unwrap();
//! assert_eq!(scores.scores(), &[Some(75.0)]);
//! assert_eq!(scores.valid_counts(), Some(&[3][..]));
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │  Validate   │────>│   Select    │────>│  Reverse    │
//! │  (options)  │     │  (items)    │     │  (coding)   │
//! └─────────────┘     └─────────────┘     └─────────────┘
//!                                                │
//!                      ┌─────────────┐     ┌─────┴───────┐
//!                      │  Assemble   │<────│ Score + Gate│
//!                      │  (output)   │     │ (per row)   │
//!                      └─────────────┘     └─────────────┘
//! ```

pub mod assemble;
pub mod calculate;
pub mod engine;
pub mod instrument;
pub mod missing;
pub mod prorate;
pub mod reverse;
pub mod select;

pub use assemble::{assemble, ResultRow, ScoreTable};
pub use calculate::{row_mean, ScoreCalculator};
pub use engine::{score_scale, Scorer, DEFAULT_PARALLEL_THRESHOLD};
pub use instrument::{score_instrument, InstrumentScores};
pub use missing::{analyze_missingness, analyze_row, Missingness};
pub use prorate::{apply_gate, gate_score, passes_gate};
pub use reverse::{check_conformance, reverse_code};
pub use select::{resolve_columns, select_items, ItemTable};
