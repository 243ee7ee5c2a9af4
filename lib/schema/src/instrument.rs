//! Instrument definitions
//!
//! A questionnaire usually reports several scales from one set of
//! responses (e.g. physical, emotional and social functioning). An
//! [`Instrument`] groups the scoring options of each scale so they can be
//! validated together and scored in one pass.

use crate::options::ScoringOptions;
use scalescore_core::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Instrument {
    pub name: String,
    pub scales: Vec<ScoringOptions>,
}

impl Instrument {
    pub fn new(name: impl Into<String>, scales: Vec<ScoringOptions>) -> Self {
        Self {
            name: name.into(),
            scales,
        }
    }

    /// Validate every scale and check that no two scales write the same
    /// output column
    pub fn validate(&self) -> Result<()> {
        if self.scales.is_empty() {
            return Err(Error::InvalidConfig(format!(
                "instrument '{}' defines no scales",
                self.name
            )));
        }

        let mut outputs = HashSet::new();
        for scale in &self.scales {
            scale.validate()?;
            for column in scale.output_columns() {
                if !outputs.insert(column.clone()) {
                    return Err(Error::OutputColumnExists(column));
                }
            }
        }
        Ok(())
    }

    pub fn scale(&self, score_name: &str) -> Option<&ScoringOptions> {
        self.scales.iter().find(|s| s.score_name == score_name)
    }
}
