//! Row/column math shared by the range, scroll-to and remaining-height computations.

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("grid-virtualizer requires either the `std` or the `libm` feature for float rounding");

/// Tolerance used by [`corrected_floor`].
///
/// Dividing a measured viewport width by a measured item width can land just below an integer
/// (e.g. `299.99 / 100.0`), which would otherwise drop a whole column.
pub const COLUMN_EPSILON: f64 = 0.03;

#[cfg(feature = "std")]
pub(crate) fn floor(v: f64) -> f64 {
    v.floor()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn floor(v: f64) -> f64 {
    libm::floor(v)
}

#[cfg(feature = "std")]
pub(crate) fn ceil(v: f64) -> f64 {
    v.ceil()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn ceil(v: f64) -> f64 {
    libm::ceil(v)
}

#[cfg(feature = "std")]
pub(crate) fn round(v: f64) -> f64 {
    // Half-way values round towards +inf.
    (v + 0.5).floor()
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
pub(crate) fn round(v: f64) -> f64 {
    libm::floor(v + 0.5)
}

/// Rounding rule used when mapping an item index onto a row.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RowRounding {
    /// The row that contains the index.
    #[default]
    Floor,
    /// The number of rows needed to hold `index` items.
    Ceil,
}

/// Floors `value`, unless it sits within [`COLUMN_EPSILON`] below the next integer.
pub fn corrected_floor(value: f64) -> f64 {
    let up = ceil(value);
    if up - value < COLUMN_EPSILON {
        up
    } else {
        floor(value)
    }
}

/// Number of items that fit on one row.
///
/// Always `>= 1`: hosts must never report non-positive sizes, but a bad measurement must not
/// turn into a division by zero further down the row math.
pub fn items_per_row(viewport_width: f64, item_width: f64) -> usize {
    let per_row = corrected_floor(viewport_width / item_width);
    if per_row.is_finite() && per_row >= 1.0 {
        per_row as usize
    } else {
        vwarn!(
            viewport_width,
            item_width,
            "items_per_row: degenerate geometry, clamping to 1"
        );
        1
    }
}

/// Maps an item index (or item count) onto a row index (or row count).
pub fn row_index(index: usize, items_per_row: usize, rounding: RowRounding) -> usize {
    let per_row = items_per_row.max(1);
    match rounding {
        RowRounding::Floor => index / per_row,
        RowRounding::Ceil => index.div_ceil(per_row),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn corrected_floor_snaps_near_integers_up() {
        assert_eq!(corrected_floor(2.98), 3.0);
        assert_eq!(corrected_floor(2.95), 2.0);
        // 3.0 - 2.97 rounds to just under the tolerance.
        assert_eq!(corrected_floor(2.97), 3.0);
        assert_eq!(corrected_floor(3.0), 3.0);
        assert_eq!(corrected_floor(3.5), 3.0);
    }

    #[test]
    fn items_per_row_counts_columns() {
        assert_eq!(items_per_row(300.0, 100.0), 3);
        assert_eq!(items_per_row(299.99, 100.0), 3);
        assert_eq!(items_per_row(250.0, 100.0), 2);
    }

    #[test]
    fn items_per_row_never_returns_zero() {
        assert_eq!(items_per_row(50.0, 100.0), 1);
        assert_eq!(items_per_row(0.0, 100.0), 1);
        assert_eq!(items_per_row(100.0, 0.0), 1);
        assert_eq!(items_per_row(-10.0, 100.0), 1);
    }

    #[test]
    fn row_index_floor_and_ceil() {
        assert_eq!(row_index(7, 3, RowRounding::Floor), 2);
        assert_eq!(row_index(7, 3, RowRounding::Ceil), 3);
        assert_eq!(row_index(6, 3, RowRounding::Ceil), 2);
        assert_eq!(row_index(0, 3, RowRounding::Ceil), 0);
        assert_eq!(row_index(5, 0, RowRounding::Floor), 5);
    }
}
