use crate::flow::Record;
use super::Column;

/// Stable in-place sort by a column. Descending order swaps the comparator
/// arguments, so records without a value lead.
pub fn sort(records: &mut [Record], column: &Column, descending: bool) {
    records.sort_by(|a, b| match descending {
        false => column.compare(a, b),
        true  => column.compare(b, a),
    });
}
