//! Row packing for the staggered hex grid.

use crate::model::{LayoutError, Slot};
use tracing::debug;

/// One packed row. Slot `j` sits in column `j`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row<T> {
    slots: Vec<Slot<T>>,
}

impl<T> Row<T> {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
        }
    }

    /// Number of slots, filler included.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Check if the row has no slots.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Slots in column order.
    pub fn slots(&self) -> &[Slot<T>] {
        &self.slots
    }

    /// Slot at column `col`.
    pub fn get(&self, col: usize) -> Option<&Slot<T>> {
        self.slots.get(col)
    }

    /// Check if the row ends with the parity filler.
    pub fn has_filler(&self) -> bool {
        self.slots.last().is_some_and(Slot::is_filler)
    }

    /// Number of real items in the row.
    pub fn item_count(&self) -> usize {
        self.slots.iter().filter(|slot| !slot.is_filler()).count()
    }

    /// Consume the row, yielding its items in column order.
    pub fn into_items(self) -> impl Iterator<Item = T> {
        self.slots.into_iter().filter_map(|slot| match slot {
            Slot::Item(item) => Some(item),
            Slot::Filler => None,
        })
    }
}

/// Pack `items` into alternating rows of `num_cols` and `num_cols - 1`
/// slots, starting with a full row.
///
/// When the last two rows end up with the same length parity, a
/// [`Slot::Filler`] is appended to the last row. A single column cannot
/// stagger, so with `num_cols == 1` every item gets its own row and no
/// filler is added.
///
/// # Errors
///
/// Returns `LayoutError::InvalidConfiguration` when `num_cols` is zero and
/// there is at least one item. An empty item list always packs to no rows.
///
/// # Example
///
/// ```
/// use hexbubble::geometry::pack;
///
/// let rows = pack((0..20).collect(), 6).unwrap();
/// let lengths: Vec<usize> = rows.iter().map(|row| row.len()).collect();
/// assert_eq!(lengths, vec![6, 5, 6, 3]);
/// ```
pub fn pack<T>(items: Vec<T>, num_cols: usize) -> Result<Vec<Row<T>>, LayoutError> {
    if items.is_empty() {
        return Ok(Vec::new());
    }
    if num_cols == 0 {
        return Err(LayoutError::invalid("num_cols", "must be at least 1"));
    }

    let short_cols = if num_cols > 1 { num_cols - 1 } else { num_cols };

    let mut rows: Vec<Row<T>> = Vec::new();
    let mut cols_remaining = 0;
    let mut full_row = true;

    for item in items {
        if cols_remaining == 0 {
            cols_remaining = if full_row { num_cols } else { short_cols };
            full_row = !full_row;
            rows.push(Row::with_capacity(cols_remaining + 1));
        }
        if let Some(row) = rows.last_mut() {
            row.slots.push(Slot::Item(item));
        }
        cols_remaining -= 1;
    }

    if num_cols > 1 && rows.len() > 1 {
        let last = rows[rows.len() - 1].len();
        let second_last = rows[rows.len() - 2].len();
        if last % 2 == second_last % 2 {
            if let Some(row) = rows.last_mut() {
                row.slots.push(Slot::Filler);
            }
        }
    }

    debug!(rows = rows.len(), num_cols, "Packed rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lengths<T>(rows: &[Row<T>]) -> Vec<usize> {
        rows.iter().map(Row::len).collect()
    }

    #[test]
    fn empty_items_pack_to_no_rows() {
        let rows = pack(Vec::<u32>::new(), 6).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn empty_items_with_zero_columns_is_not_an_error() {
        let rows = pack(Vec::<u32>::new(), 0).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn zero_columns_with_items_is_rejected() {
        let result = pack(vec![1, 2, 3], 0);
        assert!(matches!(
            result,
            Err(LayoutError::InvalidConfiguration {
                field: "num_cols",
                ..
            })
        ));
    }

    #[test]
    fn twenty_items_six_columns_needs_no_filler() {
        let rows = pack((0..20).collect(), 6).unwrap();
        assert_eq!(lengths(&rows), vec![6, 5, 6, 3]);
        assert!(rows.iter().all(|row| !row.has_filler()));
    }

    #[test]
    fn equal_parity_tail_gets_filler() {
        // 6 + 5 + 1: the 1-item tail shares odd parity with the 5-item row
        let rows = pack((0..12).collect(), 6).unwrap();
        assert_eq!(lengths(&rows), vec![6, 5, 2]);
        assert!(rows[2].has_filler());
        assert_eq!(rows[2].item_count(), 1);
    }

    #[test]
    fn filler_only_ever_on_last_row() {
        let rows = pack((0..30).collect(), 5).unwrap();
        for row in &rows[..rows.len() - 1] {
            assert!(!row.has_filler());
        }
    }

    #[test]
    fn single_full_row_has_no_filler() {
        let rows = pack((0..4).collect(), 6).unwrap();
        assert_eq!(lengths(&rows), vec![4]);
    }

    #[test]
    fn items_keep_order_and_column_index() {
        let rows = pack((0..9).collect(), 4).unwrap();
        assert_eq!(lengths(&rows), vec![4, 3, 2]);
        assert_eq!(rows[0].get(0), Some(&Slot::Item(0)));
        assert_eq!(rows[0].get(3), Some(&Slot::Item(3)));
        assert_eq!(rows[1].get(0), Some(&Slot::Item(4)));
        assert_eq!(rows[2].get(1), Some(&Slot::Item(8)));
    }

    #[test]
    fn single_column_stacks_items_without_filler() {
        let rows = pack((0..5).collect(), 1).unwrap();
        assert_eq!(lengths(&rows), vec![1, 1, 1, 1, 1]);
        assert!(rows.iter().all(|row| !row.has_filler()));
    }

    #[test]
    fn two_columns_alternate_two_and_one() {
        let rows = pack((0..6).collect(), 2).unwrap();
        assert_eq!(lengths(&rows), vec![2, 1, 2, 1]);
    }

    #[test]
    fn item_count_excludes_filler() {
        let rows = pack((0..12).collect(), 6).unwrap();
        let total: usize = rows.iter().map(Row::item_count).sum();
        assert_eq!(total, 12);
    }

    #[test]
    fn into_items_round_trips_order_and_drops_filler() {
        let rows = pack((0..12).collect(), 6).unwrap();
        let items: Vec<i32> = rows.into_iter().flat_map(Row::into_items).collect();
        assert_eq!(items, (0..12).collect::<Vec<_>>());
    }
}
