//! Synthetic questionnaire responses
//!
//! Generates seeded, reproducible response tables for demos, tests and
//! benchmarks: an optional respondent ID column followed by integer item
//! responses drawn uniformly from the response range, with a fraction of
//! answers knocked out as missing.

use crate::error::{Error, Result};
use crate::table::{Cell, ResponseTable};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[derive(Debug, Clone, PartialEq)]
pub struct FakeDataConfig {
    pub n_respondents: usize,
    pub n_items: usize,
    pub min: i64,
    pub max: i64,
    /// Probability that any single answer is missing, in [0, 1]
    pub missing_rate: f64,
    /// Item columns are named `<prefix>1`, `<prefix>2`, ...
    pub item_prefix: String,
    pub id_column: Option<String>,
    pub seed: u64,
}

impl Default for FakeDataConfig {
    fn default() -> Self {
        Self {
            n_respondents: 20,
            n_items: 6,
            min: 0,
            max: 4,
            missing_rate: 0.1,
            item_prefix: "q".to_string(),
            id_column: Some("ID".to_string()),
            seed: 42,
        }
    }
}

/// Generate a response table according to `config`
pub fn fake_responses(config: &FakeDataConfig) -> Result<ResponseTable> {
    if config.n_items == 0 {
        return Err(Error::EmptyItemSet);
    }
    if config.min >= config.max {
        return Err(Error::InvalidRange {
            min: config.min as f64,
            max: config.max as f64,
        });
    }
    if !(0.0..=1.0).contains(&config.missing_rate) {
        return Err(Error::InvalidConfig(format!(
            "missing_rate must be within [0, 1], got {}",
            config.missing_rate
        )));
    }

    let mut columns = Vec::with_capacity(config.n_items + 1);
    if let Some(id) = &config.id_column {
        columns.push(id.clone());
    }
    columns.extend((1..=config.n_items).map(|i| format!("{}{}", config.item_prefix, i)));

    let mut rng = StdRng::seed_from_u64(config.seed);
    let rows = (0..config.n_respondents)
        .map(|r| {
            let mut row = Vec::with_capacity(columns.len());
            if config.id_column.is_some() {
                row.push(Cell::Text(format!("{}", r + 1)));
            }
            for _ in 0..config.n_items {
                if rng.random_bool(config.missing_rate) {
                    row.push(Cell::Missing);
                } else {
                    row.push(Cell::Number(rng.random_range(config.min..=config.max) as f64));
                }
            }
            row
        })
        .collect();

    ResponseTable::new(columns, rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fake_responses_shape() {
        let config = FakeDataConfig {
            n_respondents: 15,
            n_items: 5,
            ..Default::default()
        };
        let table = fake_responses(&config).unwrap();

        assert_eq!(table.n_rows(), 15);
        assert_eq!(table.n_columns(), 6);
        assert_eq!(table.columns()[0], "ID");
        assert_eq!(table.columns()[5], "q5");
    }

    #[test]
    fn test_fake_responses_within_range() {
        let config = FakeDataConfig {
            n_respondents: 50,
            min: 1,
            max: 5,
            id_column: None,
            ..Default::default()
        };
        let table = fake_responses(&config).unwrap();

        for row in table.rows() {
            for cell in row {
                if let Some(v) = cell.as_number() {
                    assert!((1.0..=5.0).contains(&v));
                    assert_eq!(v.fract(), 0.0);
                }
            }
        }
    }

    #[test]
    fn test_fake_responses_deterministic() {
        let config = FakeDataConfig::default();
        assert_eq!(fake_responses(&config).unwrap(), fake_responses(&config).unwrap());
    }

    #[test]
    fn test_missing_rate_extremes() {
        let none_missing = fake_responses(&FakeDataConfig {
            missing_rate: 0.0,
            ..Default::default()
        })
        .unwrap();
        assert!(none_missing.rows().iter().flatten().all(|c| !c.is_missing()));

        let all_missing = fake_responses(&FakeDataConfig {
            missing_rate: 1.0,
            id_column: None,
            ..Default::default()
        })
        .unwrap();
        assert!(all_missing.rows().iter().flatten().all(Cell::is_missing));
    }

    #[test]
    fn test_invalid_config() {
        let bad_range = FakeDataConfig { min: 4, max: 4, ..Default::default() };
        assert!(matches!(fake_responses(&bad_range), Err(Error::InvalidRange { .. })));

        let bad_rate = FakeDataConfig { missing_rate: 1.5, ..Default::default() };
        assert!(matches!(fake_responses(&bad_rate), Err(Error::InvalidConfig(_))));
    }
}
