// SPDX-License-Identifier: MPL-2.0

//! Row-wrap simulation for the expandable chip group.
//!
//! Everything here works on plain widths so it can be driven by any
//! measurement source. Widths passed in already include chip margins.

use std::num::NonZeroUsize;
use thiserror::Error;

/// Maximum number of rows a collapsed group may show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RowLimit {
    /// No limit; the group never overflows.
    #[default]
    Unbounded,
    /// At most this many rows.
    AtMost(NonZeroUsize),
}

impl RowLimit {
    /// Limits the group to `rows` rows. Zero is treated as one.
    pub fn at_most(rows: usize) -> Self {
        RowLimit::AtMost(NonZeroUsize::new(rows.max(1)).unwrap_or(NonZeroUsize::MIN))
    }

    /// Returns true if chips on the given (1-based) row may be shown.
    pub fn allows(&self, row: usize) -> bool {
        match self {
            RowLimit::Unbounded => true,
            RowLimit::AtMost(max) => row <= max.get(),
        }
    }
}

/// Layout failures.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Every chip was evicted and the control still does not fit.
    #[error(
        "impossible layout: control of width {control_width} does not fit in {available_width} with no visible chip left to evict"
    )]
    ImpossibleLayout {
        control_width: f32,
        available_width: f32,
    },
}

/// Result of one row-wrap pass.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WrapOutcome {
    /// 1-based row of every chip, in document order.
    pub rows: Vec<usize>,
    /// Whether each chip is shown.
    pub visible: Vec<bool>,
    /// Width used on the last visible row, including the spacing after its
    /// last chip.
    pub last_row_occupied: f32,
}

impl WrapOutcome {
    /// Number of hidden chips.
    pub fn hidden_count(&self) -> usize {
        self.visible.iter().filter(|visible| !**visible).count()
    }

    /// Row of the last visible chip.
    pub fn last_visible_row(&self) -> Option<usize> {
        self.visible
            .iter()
            .rposition(|visible| *visible)
            .map(|index| self.rows[index])
    }
}

/// Outcome of fitting a control chip after the last visible row.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlFit {
    /// Final measured width of the control.
    pub width: f32,
    /// Number of chips hidden to make room.
    pub evicted: usize,
}

/// Row-wrap parameters: the width to fill, the gap between chips and the
/// row limit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowWrap {
    pub available_width: f32,
    pub spacing: f32,
    pub limit: RowLimit,
}

impl RowWrap {
    pub fn new(available_width: f32, spacing: f32, limit: RowLimit) -> Self {
        Self {
            available_width,
            spacing,
            limit,
        }
    }

    /// Same width and spacing, without a row limit.
    pub fn unbounded(&self) -> Self {
        Self {
            limit: RowLimit::Unbounded,
            ..*self
        }
    }

    /// Distributes chips over rows and marks those past the limit hidden.
    ///
    /// A chip that does not fit next to the previous one starts a new row. A
    /// chip wider than the whole row is placed alone on its own row.
    pub fn simulate(&self, widths: &[f32]) -> WrapOutcome {
        let mut outcome = WrapOutcome {
            rows: Vec::with_capacity(widths.len()),
            visible: Vec::with_capacity(widths.len()),
            last_row_occupied: 0.0,
        };

        let mut row = 1;
        let mut occupied = 0.0;
        let mut in_row = 0;

        for &width in widths {
            if in_row > 0 && occupied + width > self.available_width {
                row += 1;
                occupied = 0.0;
                in_row = 0;
            }
            occupied += width + self.spacing;
            in_row += 1;

            let visible = self.limit.allows(row);
            if visible {
                outcome.last_row_occupied = occupied;
            }
            outcome.rows.push(row);
            outcome.visible.push(visible);
        }

        outcome
    }

    /// Returns true if the chips need more rows than the limit allows.
    ///
    /// Stops walking as soon as the limit is exceeded.
    pub fn would_overflow(&self, widths: &[f32]) -> bool {
        let RowLimit::AtMost(max) = self.limit else {
            return false;
        };

        let mut row = 1;
        let mut occupied = 0.0;
        let mut in_row = 0;

        for &width in widths {
            if in_row > 0 && occupied + width > self.available_width {
                row += 1;
                if row > max.get() {
                    return true;
                }
                occupied = 0.0;
                in_row = 0;
            }
            occupied += width + self.spacing;
            in_row += 1;
        }

        false
    }

    /// Makes room for a control chip at the end of the last visible row.
    ///
    /// `measure` returns the control's width for a given hidden-chip count;
    /// it is called again after every eviction because the control label
    /// usually mentions that count. Visible chips are evicted in reverse
    /// document order until the control fits.
    pub fn fit_control<F>(
        &self,
        outcome: &mut WrapOutcome,
        widths: &[f32],
        mut measure: F,
    ) -> Result<ControlFit, LayoutError>
    where
        F: FnMut(usize) -> f32,
    {
        let mut occupied = outcome.last_row_occupied;
        let mut width = measure(outcome.hidden_count());
        let mut evicted = 0;

        while self.available_width - occupied < width {
            let Some(index) = outcome.visible.iter().rposition(|visible| *visible) else {
                return Err(LayoutError::ImpossibleLayout {
                    control_width: width,
                    available_width: self.available_width,
                });
            };

            outcome.visible[index] = false;
            occupied = (occupied - (widths[index] + self.spacing)).max(0.0);
            evicted += 1;
            width = measure(outcome.hidden_count());

            tracing::trace!(index, occupied, width, "evicted chip to fit control");
        }

        outcome.last_row_occupied = occupied;
        Ok(ControlFit { width, evicted })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_indices(outcome: &WrapOutcome) -> Vec<usize> {
        outcome
            .visible
            .iter()
            .enumerate()
            .filter_map(|(index, visible)| visible.then_some(index))
            .collect()
    }

    #[test]
    fn test_exact_fit_stays_on_one_row() {
        let wrap = RowWrap::new(300.0, 0.0, RowLimit::at_most(1));
        let outcome = wrap.simulate(&[100.0, 100.0, 100.0, 100.0]);

        assert_eq!(outcome.rows, vec![1, 1, 1, 2]);
        assert_eq!(visible_indices(&outcome), vec![0, 1, 2]);
        assert_eq!(outcome.hidden_count(), 1);
        assert_eq!(outcome.last_row_occupied, 300.0);
    }

    #[test]
    fn test_spacing_counts_between_chips() {
        let wrap = RowWrap::new(300.0, 10.0, RowLimit::Unbounded);
        let outcome = wrap.simulate(&[100.0, 100.0, 100.0]);

        // 100 + 10 + 100 + 10 = 220, third chip would end at 320
        assert_eq!(outcome.rows, vec![1, 1, 2]);
        assert_eq!(outcome.last_row_occupied, 110.0);
    }

    #[test]
    fn test_rows_are_non_decreasing_and_cover_every_chip() {
        let widths = [40.0, 260.0, 15.0, 120.0, 300.0, 5.0, 80.0, 80.0, 80.0, 199.0];
        let wrap = RowWrap::new(250.0, 6.0, RowLimit::Unbounded);
        let outcome = wrap.simulate(&widths);

        assert_eq!(outcome.rows.len(), widths.len());
        assert_eq!(outcome.rows[0], 1);
        assert!(outcome.rows.windows(2).all(|pair| pair[0] <= pair[1]));
        assert!(outcome.rows.windows(2).all(|pair| pair[1] - pair[0] <= 1));
        assert_eq!(outcome.hidden_count(), 0);
    }

    #[test]
    fn test_oversized_chip_gets_its_own_row() {
        let wrap = RowWrap::new(100.0, 0.0, RowLimit::Unbounded);
        let outcome = wrap.simulate(&[150.0, 30.0, 180.0]);

        assert_eq!(outcome.rows, vec![1, 2, 3]);
    }

    #[test]
    fn test_hidden_chips_follow_row_limit() {
        let wrap = RowWrap::new(100.0, 0.0, RowLimit::at_most(2));
        let outcome = wrap.simulate(&[60.0, 60.0, 60.0, 60.0, 60.0]);

        assert_eq!(outcome.rows, vec![1, 2, 3, 4, 5]);
        for (row, visible) in outcome.rows.iter().zip(&outcome.visible) {
            assert_eq!(*visible, *row <= 2);
        }
        assert_eq!(outcome.last_visible_row(), Some(2));
    }

    #[test]
    fn test_unbounded_never_overflows() {
        let wrap = RowWrap::new(10.0, 4.0, RowLimit::Unbounded);
        let widths = [50.0; 20];

        assert!(!wrap.would_overflow(&widths));
        assert_eq!(wrap.simulate(&widths).hidden_count(), 0);
    }

    #[test]
    fn test_would_overflow_agrees_with_simulation() {
        let widths = [70.0, 90.0, 30.0, 150.0, 20.0, 20.0, 110.0];
        for max in 1..=6 {
            for available in [80.0, 150.0, 200.0, 500.0] {
                let wrap = RowWrap::new(available, 4.0, RowLimit::at_most(max));
                let hidden = wrap.simulate(&widths).hidden_count();
                assert_eq!(wrap.would_overflow(&widths), hidden > 0);
            }
        }
    }

    #[test]
    fn test_empty_input() {
        let wrap = RowWrap::new(300.0, 8.0, RowLimit::at_most(1));
        let outcome = wrap.simulate(&[]);

        assert!(outcome.rows.is_empty());
        assert_eq!(outcome.last_visible_row(), None);
        assert!(!wrap.would_overflow(&[]));
    }

    #[test]
    fn test_zero_limit_is_one_row() {
        assert_eq!(RowLimit::at_most(0), RowLimit::at_most(1));
        assert!(RowLimit::at_most(0).allows(1));
        assert!(!RowLimit::at_most(0).allows(2));
    }

    #[test]
    fn test_control_evicts_last_chip_until_it_fits() {
        let widths = [100.0, 100.0, 100.0, 100.0];
        let wrap = RowWrap::new(300.0, 0.0, RowLimit::at_most(1));
        let mut outcome = wrap.simulate(&widths);

        let fit = wrap.fit_control(&mut outcome, &widths, |_| 80.0).unwrap();

        assert_eq!(fit.evicted, 1);
        assert_eq!(visible_indices(&outcome), vec![0, 1]);
        assert_eq!(outcome.hidden_count(), 2);
        assert!(wrap.available_width - outcome.last_row_occupied >= fit.width);
    }

    #[test]
    fn test_control_that_fits_evicts_nothing() {
        let widths = [100.0, 100.0, 100.0];
        let wrap = RowWrap::new(290.0, 0.0, RowLimit::at_most(1));
        let mut outcome = wrap.simulate(&widths);

        let fit = wrap.fit_control(&mut outcome, &widths, |_| 80.0).unwrap();

        assert_eq!(fit.evicted, 0);
        assert_eq!(visible_indices(&outcome), vec![0, 1]);
    }

    #[test]
    fn test_control_is_remeasured_after_each_eviction() {
        let widths = [50.0, 50.0, 50.0, 50.0, 50.0];
        let wrap = RowWrap::new(200.0, 0.0, RowLimit::at_most(1));
        let mut outcome = wrap.simulate(&widths);
        let mut seen = Vec::new();

        // label grows with the hidden count: 1 -> 40, 2 -> 60, 3 -> 80.
        // After the first eviction 50 px are free but the relabelled control
        // needs 60, so a second chip has to go.
        let fit = wrap
            .fit_control(&mut outcome, &widths, |hidden| {
                seen.push(hidden);
                20.0 + hidden as f32 * 20.0
            })
            .unwrap();

        assert_eq!(seen, vec![1, 2, 3]);
        assert_eq!(fit.width, 80.0);
        assert_eq!(fit.evicted, 2);
        assert_eq!(visible_indices(&outcome), vec![0, 1]);
    }

    #[test]
    fn test_control_wider_than_row_is_impossible() {
        let widths = [50.0, 50.0, 50.0];
        let wrap = RowWrap::new(100.0, 0.0, RowLimit::at_most(1));
        let mut outcome = wrap.simulate(&widths);

        let err = wrap
            .fit_control(&mut outcome, &widths, |_| 120.0)
            .unwrap_err();

        assert!(matches!(err, LayoutError::ImpossibleLayout { .. }));
        assert_eq!(outcome.hidden_count(), 3);
    }

    #[test]
    fn test_control_alone_when_row_empties() {
        let widths = [250.0, 100.0];
        let wrap = RowWrap::new(300.0, 8.0, RowLimit::at_most(1));
        let mut outcome = wrap.simulate(&widths);

        let fit = wrap.fit_control(&mut outcome, &widths, |_| 80.0).unwrap();

        assert_eq!(fit.evicted, 1);
        assert_eq!(outcome.hidden_count(), 2);
        assert_eq!(outcome.last_row_occupied, 0.0);
    }
}
