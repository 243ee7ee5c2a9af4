//! Result assembly
//!
//! Packages final scores into an output table aligned row-for-row with the
//! input responses. Respondents without a score keep their row with a
//! missing value; nothing is dropped or reordered.

use scalescore_core::{Cell, Error, ResponseTable, Result};
use scalescore_schema::VALID_COUNT_SUFFIX;
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// One output row
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ResultRow {
    pub score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub valid_count: Option<usize>,
}

/// Scores for one scale, one row per respondent
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreTable {
    score_name: String,
    scores: Vec<Option<f64>>,
    valid_counts: Option<Vec<usize>>,
}

impl ScoreTable {
    pub fn score_name(&self) -> &str {
        &self.score_name
    }

    /// Name of the valid-item count column, whether or not it is included
    pub fn valid_count_name(&self) -> String {
        format!("{}{}", self.score_name, VALID_COUNT_SUFFIX)
    }

    /// Output column names: `<name>` and, when included, `<name>_N`
    pub fn columns(&self) -> Vec<String> {
        let mut columns = vec![self.score_name.clone()];
        if self.valid_counts.is_some() {
            columns.push(self.valid_count_name());
        }
        columns
    }

    pub fn scores(&self) -> &[Option<f64>] {
        &self.scores
    }

    pub fn valid_counts(&self) -> Option<&[usize]> {
        self.valid_counts.as_deref()
    }

    pub fn len(&self) -> usize {
        self.scores.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scores.is_empty()
    }

    pub fn rows(&self) -> impl Iterator<Item = ResultRow> + '_ {
        self.scores.iter().enumerate().map(move |(i, &score)| ResultRow {
            score,
            valid_count: self.valid_counts.as_ref().map(|counts| counts[i]),
        })
    }

    /// Output columns as response-table cells, in `columns()` order
    pub fn cell_columns(&self) -> Vec<Vec<Cell>> {
        let mut columns = vec![self.scores.iter().map(|&s| Cell::from(s)).collect()];
        if let Some(counts) = &self.valid_counts {
            columns.push(counts.iter().map(|&n| Cell::Number(n as f64)).collect());
        }
        columns
    }

    /// Rows as JSON objects keyed by output column name
    pub fn to_records(&self) -> Vec<Value> {
        let count_name = self.valid_count_name();
        self.rows()
            .map(|row| {
                let mut map = Map::new();
                let score = row
                    .score
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
                    .unwrap_or(Value::Null);
                map.insert(self.score_name.clone(), score);
                if let Some(n) = row.valid_count {
                    map.insert(count_name.clone(), Value::from(n));
                }
                Value::Object(map)
            })
            .collect()
    }

    /// The output columns as a standalone response table
    pub fn to_table(&self) -> Result<ResponseTable> {
        let columns = self.cell_columns();
        let rows = (0..self.len())
            .map(|i| columns.iter().map(|c| c[i].clone()).collect())
            .collect();
        ResponseTable::new(self.columns(), rows)
    }

    /// Append the output columns onto a copy of `table`
    ///
    /// `table` must have one row per scored respondent and no column that
    /// clashes with an output name.
    pub fn bind_to(&self, table: &ResponseTable) -> Result<ResponseTable> {
        if table.n_rows() != self.len() {
            return Err(Error::InvalidConfig(format!(
                "cannot bind {} scores onto a table with {} rows",
                self.len(),
                table.n_rows()
            )));
        }
        table.with_columns(self.columns(), self.cell_columns())
    }
}

impl Serialize for ScoreTable {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_seq(self.to_records())
    }
}

/// Package gated scores and valid counts into a [`ScoreTable`]
///
/// `valid_counts` is kept only when `include_valid_count` is set. Both
/// vectors must hold one entry per respondent.
pub fn assemble(
    score_name: impl Into<String>,
    scores: Vec<Option<f64>>,
    valid_counts: Vec<usize>,
    include_valid_count: bool,
) -> Result<ScoreTable> {
    if scores.len() != valid_counts.len() {
        return Err(Error::InvalidConfig(format!(
            "{} scores given with {} valid counts",
            scores.len(),
            valid_counts.len()
        )));
    }
    Ok(ScoreTable {
        score_name: score_name.into(),
        scores,
        valid_counts: include_valid_count.then_some(valid_counts),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn create_test_scores(include_count: bool) -> ScoreTable {
        assemble(
            "fatigue",
            vec![Some(75.0), None, Some(12.5)],
            vec![3, 1, 4],
            include_count,
        )
        .unwrap()
    }

    #[test]
    fn test_columns() {
        assert_eq!(create_test_scores(false).columns(), vec!["fatigue"]);
        assert_eq!(create_test_scores(true).columns(), vec!["fatigue", "fatigue_N"]);
    }

    #[test]
    fn test_rows_keep_order_and_missing() {
        let table = create_test_scores(true);
        let rows: Vec<ResultRow> = table.rows().collect();

        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], ResultRow { score: Some(75.0), valid_count: Some(3) });
        assert_eq!(rows[1], ResultRow { score: None, valid_count: Some(1) });
        assert_eq!(rows[2].score, Some(12.5));
    }

    #[test]
    fn test_without_count() {
        let table = create_test_scores(false);
        assert!(table.valid_counts().is_none());
        assert!(table.rows().all(|r| r.valid_count.is_none()));
    }

    #[test]
    fn test_records_serialization() {
        let table = create_test_scores(true);
        assert_eq!(
            serde_json::to_value(&table).unwrap(),
            json!([
                {"fatigue": 75.0, "fatigue_N": 3},
                {"fatigue": null, "fatigue_N": 1},
                {"fatigue": 12.5, "fatigue_N": 4}
            ])
        );
    }

    #[test]
    fn test_to_table() {
        let table = create_test_scores(true).to_table().unwrap();
        assert_eq!(table.n_rows(), 3);
        assert_eq!(table.cell(1, 0), Some(&Cell::Missing));
        assert_eq!(table.cell(1, 1), Some(&Cell::Number(1.0)));
    }

    #[test]
    fn test_bind_to_responses() {
        let responses = ResponseTable::from_numeric(
            ["q1"],
            vec![vec![Some(3.0)], vec![None], vec![Some(0.5)]],
        )
        .unwrap();
        let bound = create_test_scores(false).bind_to(&responses).unwrap();

        assert_eq!(bound.columns(), &["q1".to_string(), "fatigue".to_string()][..]);
        assert_eq!(bound.cell(0, 1), Some(&Cell::Number(75.0)));
    }

    #[test]
    fn test_length_mismatch_rejected() {
        for include_count in [true, false] {
            let result = assemble("fatigue", vec![Some(1.0), None], vec![2], include_count);
            assert!(matches!(result, Err(Error::InvalidConfig(_))));
        }
    }

    #[test]
    fn test_bind_to_row_mismatch() {
        let responses = ResponseTable::from_numeric(["q1"], vec![vec![Some(3.0)]]).unwrap();
        assert!(matches!(
            create_test_scores(false).bind_to(&responses),
            Err(Error::InvalidConfig(_))
        ));
    }
}
