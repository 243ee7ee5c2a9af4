//! # scalescore Schema
//!
//! Declarative scoring options for questionnaire scales.
//!
//! ## Overview
//!
//! A scale is scored from a subset of item columns. This crate describes
//! *how* a scale is scored, without touching any responses:
//!
//! - [`ScoringOptions`] - items, reverse-coded items, response range,
//!   missing-item tolerance, score kind and output naming
//! - [`ScoreKind`] - `sum`, `mean`, `100` or `pomp`
//! - [`ResponseRange`] - inclusive `[min, max]` shared by every item
//! - [`Instrument`] - several scales scored from the same responses
//! - [`validate_options`] - fail-fast parameter checks
//!
//! ## Example
//!
//! ```rust
//! use scalescore_schema::{ScoringOptions, ScoreKind};
//!
//! let options = ScoringOptions::builder()
//!     .items(vec!["q1", "q2", "q3", "q4"])
//!     .reverse_items(vec!["q2"])
//!     .response_range(0.0, 4.0)
//!     .score_kind(ScoreKind::Pomp)
//!     .score_name("fatigue")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(options.valid_count_name(), "fatigue_N");
//! ```

pub mod instrument;
pub mod kind;
pub mod options;
pub mod range;
pub mod validate;

pub use instrument::Instrument;
pub use kind::ScoreKind;
pub use options::{
    ScoringOptions,
    ScoringOptionsBuilder,
    DEFAULT_MISSING_TOLERANCE,
    DEFAULT_SCORE_NAME,
    VALID_COUNT_SUFFIX,
};
pub use range::ResponseRange;
pub use validate::validate_options;
