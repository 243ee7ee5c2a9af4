use crate::select::ItemTable;
use serde::Serialize;

/// Per-respondent missingness over the scored items
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Missingness {
    /// Number of answered items
    pub valid_count: usize,
    /// `(item_count - valid_count) / item_count`
    pub missing_proportion: f64,
}

/// Missingness of a single row of item values
pub fn analyze_row(row: &[Option<f64>]) -> Missingness {
    let item_count = row.len();
    let valid_count = row.iter().filter(|v| v.is_some()).count();
    let missing_proportion = if item_count == 0 {
        1.0
    } else {
        (item_count - valid_count) as f64 / item_count as f64
    };

    Missingness {
        valid_count,
        missing_proportion,
    }
}

/// Missingness for every respondent, in row order
pub fn analyze_missingness(items: &ItemTable) -> Vec<Missingness> {
    items.rows().iter().map(|row| analyze_row(row)).collect()
}
