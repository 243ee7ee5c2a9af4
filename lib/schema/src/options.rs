//! Scoring options
//!
//! Declares how one scale is scored: which columns are its items, which
//! items are reverse-coded, the response range, the score kind, how much
//! missingness a respondent may have, and how the output is labelled.
//!
//! Options can be built in code or loaded from JSON:
//!
//! ```json
//! {
//!   "items": ["q1", "q2", "q3", "q4"],
//!   "reverse_items": ["q2"],
//!   "response_range": { "min": 0, "max": 4 },
//!   "missing_tolerance": 0.5,
//!   "score_kind": "pomp",
//!   "score_name": "fatigue",
//!   "include_valid_count": true
//! }
//! ```

use crate::kind::ScoreKind;
use crate::range::ResponseRange;
use crate::validate::validate_options;
use scalescore_core::{ColumnSpec, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MISSING_TOLERANCE: f64 = 0.5;
pub const DEFAULT_SCORE_NAME: &str = "scoredScale";

/// Suffix appended to the score name for the valid-item count column
pub const VALID_COUNT_SUFFIX: &str = "_N";

/// Options for scoring a single scale
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScoringOptions {
    /// Item columns; `Unspecified` means every column of the table
    pub items: ColumnSpec,

    /// Items to reverse-code before scoring
    pub reverse_items: ColumnSpec,

    /// Response range, required for 0-100 scores and for reverse coding
    #[serde(skip_serializing_if = "Option::is_none")]
    pub response_range: Option<ResponseRange>,

    /// Largest proportion of missing items that still yields a score
    pub missing_tolerance: f64,

    pub score_kind: ScoreKind,

    /// Output column name
    pub score_name: String,

    /// Also emit `<score_name>_N` with the number of answered items
    pub include_valid_count: bool,
}

impl Default for ScoringOptions {
    fn default() -> Self {
        Self {
            items: ColumnSpec::Unspecified,
            reverse_items: ColumnSpec::Unspecified,
            response_range: None,
            missing_tolerance: DEFAULT_MISSING_TOLERANCE,
            score_kind: ScoreKind::default(),
            score_name: DEFAULT_SCORE_NAME.to_string(),
            include_valid_count: false,
        }
    }
}

impl ScoringOptions {
    pub fn builder() -> ScoringOptionsBuilder {
        ScoringOptionsBuilder::default()
    }

    /// Name of the valid-item count column
    pub fn valid_count_name(&self) -> String {
        format!("{}{}", self.score_name, VALID_COUNT_SUFFIX)
    }

    /// Output column names in emission order
    pub fn output_columns(&self) -> Vec<String> {
        let mut columns = vec![self.score_name.clone()];
        if self.include_valid_count {
            columns.push(self.valid_count_name());
        }
        columns
    }

    pub fn validate(&self) -> Result<()> {
        validate_options(self)
    }
}

/// Fluent construction of [`ScoringOptions`]; `build` validates
#[derive(Debug, Clone, Default)]
pub struct ScoringOptionsBuilder {
    options: ScoringOptions,
}

impl ScoringOptionsBuilder {
    pub fn items(mut self, items: impl Into<ColumnSpec>) -> Self {
        self.options.items = items.into();
        self
    }

    pub fn reverse_items(mut self, items: impl Into<ColumnSpec>) -> Self {
        self.options.reverse_items = items.into();
        self
    }

    pub fn response_range(mut self, min: f64, max: f64) -> Self {
        self.options.response_range = Some(ResponseRange { min, max });
        self
    }

    pub fn missing_tolerance(mut self, tolerance: f64) -> Self {
        self.options.missing_tolerance = tolerance;
        self
    }

    pub fn score_kind(mut self, kind: ScoreKind) -> Self {
        self.options.score_kind = kind;
        self
    }

    pub fn score_name(mut self, name: impl Into<String>) -> Self {
        self.options.score_name = name.into();
        self
    }

    pub fn include_valid_count(mut self, include: bool) -> Self {
        self.options.include_valid_count = include;
        self
    }

    pub fn build(self) -> Result<ScoringOptions> {
        self.options.validate()?;
        Ok(self.options)
    }
}
