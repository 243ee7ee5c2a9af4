//! Reverse coding
//!
//! Reflects designated item columns around the midpoint of the response
//! range (`v -> min + max - v`) so every item points the same direction
//! before scoring.

use crate::select::{resolve_columns, ItemTable};
use scalescore_core::{ColumnSpec, Error, ResponseTable, Result};
use scalescore_schema::ResponseRange;
use tracing::debug;

/// Confirm every present item value lies within `range`
///
/// Values are never clamped; the first offending cell is reported.
pub fn check_conformance(items: &ItemTable, range: &ResponseRange) -> Result<()> {
    for (r, row) in items.rows().iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            if let Some(v) = *value {
                if !range.contains(v) {
                    return Err(Error::OutOfRange {
                        column: items.names()[c].clone(),
                        row: r,
                        value: v,
                        min: range.min,
                        max: range.max,
                    });
                }
            }
        }
    }
    Ok(())
}

/// Reverse-code the items designated by `spec`
///
/// Names and positions in `spec` are resolved against `table`, the
/// original response table, and must all be scored items. When `spec`
/// designates nothing the items are returned unchanged and no range is
/// needed. Otherwise the range is required and every present value must
/// conform to it before anything is reflected.
pub fn reverse_code(
    table: &ResponseTable,
    mut items: ItemTable,
    spec: &ColumnSpec,
    range: Option<&ResponseRange>,
) -> Result<ItemTable> {
    if spec.designates_nothing() {
        return Ok(items);
    }
    let range = range.ok_or(Error::RangeRequiredForReverse)?;

    let targets: Vec<usize> = match spec {
        ColumnSpec::AllFlag(true) => (0..items.n_items()).collect(),
        _ => resolve_columns(table, spec)?
            .into_iter()
            .map(|source| {
                items
                    .item_for_source(source)
                    .ok_or_else(|| Error::ReverseNotInItems(table.columns()[source].clone()))
            })
            .collect::<Result<Vec<_>>>()?,
    };

    check_conformance(&items, range)?;

    for &item in &targets {
        items.map_column(item, |v| range.reflect(v));
    }

    debug!(
        reversed = ?targets.iter().map(|&i| &items.names()[i]).collect::<Vec<_>>(),
        min = range.min,
        max = range.max,
        "reverse coded items"
    );

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::select::select_items;
    use scalescore_core::ErrorKind;

    fn create_test_table() -> ResponseTable {
        ResponseTable::from_numeric(
            ["q1", "q2", "q3", "q4"],
            vec![
                vec![Some(1.0), Some(0.0), None, Some(4.0)],
                vec![Some(4.0), None, Some(2.0), Some(3.0)],
            ],
        )
        .unwrap()
    }

    fn range() -> ResponseRange {
        ResponseRange::new(0.0, 4.0).unwrap()
    }

    #[test]
    fn test_reverse_single_item_by_name() {
        let table = create_test_table();
        let items = select_items(&table, &ColumnSpec::Unspecified).unwrap();
        let reversed = reverse_code(&table, items, &ColumnSpec::names(["q1"]), Some(&range())).unwrap();

        assert_eq!(reversed.rows()[0], vec![Some(3.0), Some(0.0), None, Some(4.0)]);
        assert_eq!(reversed.rows()[1], vec![Some(0.0), None, Some(2.0), Some(3.0)]);
    }

    #[test]
    fn test_reverse_all_leaves_missing_untouched() {
        let table = create_test_table();
        let items = select_items(&table, &ColumnSpec::Unspecified).unwrap();
        let reversed = reverse_code(&table, items, &ColumnSpec::all(), Some(&range())).unwrap();

        assert_eq!(reversed.rows()[0], vec![Some(3.0), Some(4.0), None, Some(0.0)]);
        assert_eq!(reversed.rows()[1], vec![Some(0.0), None, Some(2.0), Some(1.0)]);
    }

    #[test]
    fn test_reverse_none_is_noop() {
        let table = create_test_table();
        let items = select_items(&table, &ColumnSpec::Unspecified).unwrap();
        for spec in [ColumnSpec::none(), ColumnSpec::Unspecified, ColumnSpec::ByName(vec![])] {
            let unchanged = reverse_code(&table, items.clone(), &spec, None).unwrap();
            assert_eq!(unchanged, items);
        }
    }

    #[test]
    fn test_positions_resolve_against_original_table() {
        let table = create_test_table();
        // Items are q3, q4; position 4 in the original table is q4
        let items = select_items(&table, &ColumnSpec::names(["q3", "q4"])).unwrap();
        let reversed = reverse_code(&table, items, &ColumnSpec::positions([4]), Some(&range())).unwrap();

        assert_eq!(reversed.rows()[0], vec![None, Some(0.0)]);
        assert_eq!(reversed.rows()[1], vec![Some(2.0), Some(1.0)]);
    }

    #[test]
    fn test_reverse_item_outside_item_set() {
        let table = create_test_table();
        let items = select_items(&table, &ColumnSpec::names(["q3", "q4"])).unwrap();
        let err = reverse_code(&table, items, &ColumnSpec::names(["q1"]), Some(&range())).unwrap_err();

        assert_eq!(err, Error::ReverseNotInItems("q1".into()));
        assert_eq!(err.kind(), ErrorKind::Selection);
    }

    #[test]
    fn test_unknown_reverse_item() {
        let table = create_test_table();
        let items = select_items(&table, &ColumnSpec::Unspecified).unwrap();
        let err = reverse_code(&table, items, &ColumnSpec::names(["q7"]), Some(&range())).unwrap_err();
        assert_eq!(err, Error::ColumnNotFound("q7".into()));
    }

    #[test]
    fn test_out_of_range_value_rejected() {
        let table = ResponseTable::from_numeric(["q1", "q2"], vec![vec![Some(1.0), Some(5.0)]]).unwrap();
        let items = select_items(&table, &ColumnSpec::Unspecified).unwrap();
        let err = reverse_code(&table, items, &ColumnSpec::names(["q1"]), Some(&range())).unwrap_err();

        assert_eq!(
            err,
            Error::OutOfRange {
                column: "q2".into(),
                row: 0,
                value: 5.0,
                min: 0.0,
                max: 4.0,
            }
        );
        assert_eq!(err.kind(), ErrorKind::Range);
    }

    #[test]
    fn test_missing_range() {
        let table = create_test_table();
        let items = select_items(&table, &ColumnSpec::Unspecified).unwrap();
        let err = reverse_code(&table, items, &ColumnSpec::all(), None).unwrap_err();
        assert_eq!(err, Error::RangeRequiredForReverse);
    }

    #[test]
    fn test_double_reverse_restores_values() {
        let table = create_test_table();
        let items = select_items(&table, &ColumnSpec::Unspecified).unwrap();
        let once = reverse_code(&table, items.clone(), &ColumnSpec::all(), Some(&range())).unwrap();
        let twice = reverse_code(&table, once, &ColumnSpec::all(), Some(&range())).unwrap();
        assert_eq!(twice, items);
    }
}
