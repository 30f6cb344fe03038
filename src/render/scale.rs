//! Value → bar-length scaling.
//!
//! 1. Shift everything right by the most negative value (if any) so no bar
//!    has a negative length.
//! 2. Only when the shifted maximum overflows `width`, squeeze into
//!    `[0, width]` and round.  Data that already fits is left untouched,
//!    fractional parts included.

use tracing::debug;

use crate::core::data::Table;

/// Bar lengths in ticks, same shape as the [`Table`] they came from.
#[derive(Clone, Debug, PartialEq)]
pub struct ScaledTable {
    rows: Vec<Vec<f64>>,
}

impl ScaledTable {
    #[inline]
    #[must_use]
    pub fn get(&self, record: usize, category: usize) -> Option<f64> {
        self.rows.get(record)?.get(category).copied()
    }

    #[inline]
    #[must_use]
    pub fn rows(&self) -> &[Vec<f64>] {
        &self.rows
    }
}

#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn scale(table: &Table, width: usize) -> ScaledTable {
    let (low, top) = table.extrema();
    let floor = low.min(0.0);
    let high = top - floor;
    let width = width as f64;
    let scaled = high > width;

    // A finite table can still have a span past f64::MAX; halve both sides
    // of the ratio so every intermediate stays finite.
    let share = |v: f64| {
        if high.is_finite() {
            (v - floor) / high
        } else {
            (v * 0.5 - floor * 0.5) / (top * 0.5 - floor * 0.5)
        }
    };

    let rows: Vec<Vec<f64>> = table
        .records()
        .iter()
        .map(|r| {
            r.values
                .iter()
                .map(|&v| {
                    if scaled {
                        (share(v) * width).round_ties_even()
                    } else {
                        v - floor
                    }
                })
                .collect()
        })
        .collect();
    debug!(floor, high, scaled, "scaled table");

    ScaledTable { rows }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::data::Record;

    fn table(rows: &[&[f64]]) -> Table {
        let n = rows[0].len();
        Table::new(
            (1..=n).map(|i| i.to_string()).collect(),
            rows.iter()
                .enumerate()
                .map(|(i, v)| Record {
                    label: format!("r{i}"),
                    values: v.to_vec(),
                })
                .collect(),
        )
        .unwrap()
    }

    #[test]
    fn fitting_data_passes_through_unrounded() {
        let s = scale(&table(&[&[2.0, 3.5], &[6.25, 0.0]]), 50);
        assert_eq!(s.rows(), &[vec![2.0, 3.5], vec![6.25, 0.0]]);
    }

    #[test]
    fn max_equal_to_width_is_not_scaled() {
        let s = scale(&table(&[&[50.0], &[12.4]]), 50);
        assert_eq!(s.get(1, 0), Some(12.4));
    }

    #[test]
    fn overflow_scales_to_width() {
        let vals = [183.32, 231.23, 16.43, 50.21, 508.97, 212.05, 1.0];
        let rows: Vec<&[f64]> = vals.iter().map(std::slice::from_ref).collect();
        let s = scale(&table(&rows), 50);
        let got: Vec<f64> = s.rows().iter().map(|r| r[0]).collect();
        assert_eq!(got, vec![18.0, 23.0, 2.0, 5.0, 50.0, 21.0, 0.0]);
        assert!(got.iter().all(|v| (0.0..=50.0).contains(v)));
    }

    #[test]
    fn negatives_are_offset_before_scaling() {
        let s = scale(&table(&[&[-10.0], &[0.0], &[30.0]]), 50);
        assert_eq!(s.rows(), &[vec![0.0], vec![10.0], vec![40.0]]);

        let s = scale(&table(&[&[-50.0], &[25.0], &[50.0]]), 20);
        // round((v + 50) / 100 * 20)
        assert_eq!(s.rows(), &[vec![0.0], vec![15.0], vec![20.0]]);
    }

    #[test]
    fn rounding_is_half_to_even() {
        // 0.5 -> 0, 1.5 -> 2
        let s = scale(&table(&[&[1.0], &[3.0], &[8.0]]), 4);
        assert_eq!(s.rows(), &[vec![0.0], vec![2.0], vec![4.0]]);
        // 2.5 -> 2, 7.5 -> 8
        let s = scale(&table(&[&[10.0], &[30.0], &[80.0]]), 20);
        assert_eq!(s.rows(), &[vec![2.0], vec![8.0], vec![20.0]]);
    }

    #[test]
    fn span_past_f64_max_still_fills_width() {
        let s = scale(&table(&[&[-1e308], &[0.0], &[1e308]]), 50);
        assert_eq!(s.rows(), &[vec![0.0], vec![25.0], vec![50.0]]);
    }

    #[test]
    fn stacked_categories_share_one_scale() {
        let s = scale(&table(&[&[183.32, 190.52], &[508.97, 10.45]]), 30);
        assert_eq!(s.rows(), &[vec![11.0, 11.0], vec![30.0, 1.0]]);
    }
}
