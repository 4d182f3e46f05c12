//! Fitting a resolved table into a target width.
//!
//! The natural layout puts every column at its resolved width with a single
//! space between columns. A [`FitTarget`] can then shrink selected columns
//! when the table is too wide, or spread free space between columns when
//! expansion is requested.

use crate::resolve::ResolvedColumns;

/// Minimum separation between two columns.
pub const GAP: usize = 1;

/// Which end of a field is cut when its column is shrunk.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TrimFrom {
    /// Keep the start of the field.
    #[default]
    End,
    /// Keep the end of the field.
    Start,
}

/// A width the table should be fitted into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FitTarget {
    /// Total line width to fit into.
    pub width: usize,
    /// Spread free space across the gaps when the table is narrower.
    pub expand: bool,
    /// Columns that may be shrunk, in order. Negative indices count from the end.
    pub truncatable: Vec<isize>,
    pub trim: TrimFrom,
}

impl FitTarget {
    /// Target with the default truncatable columns: last, then first.
    pub fn new(width: usize) -> Self {
        Self {
            width,
            expand: false,
            truncatable: vec![-1, 0],
            trim: TrimFrom::End,
        }
    }
}

/// Final geometry of a rendered table.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Layout {
    pub columns: ResolvedColumns,
    /// Spaces after each column but the last.
    pub gaps: Vec<usize>,
    pub trim: TrimFrom,
}

impl Layout {
    /// Resolved widths separated by single spaces.
    pub fn natural(columns: ResolvedColumns) -> Self {
        let gaps = vec![GAP; columns.len().saturating_sub(1)];
        Self {
            columns,
            gaps,
            trim: TrimFrom::End,
        }
    }

    /// Width of each column, left to right.
    pub fn widths(&self) -> Vec<usize> {
        self.columns.widths()
    }

    /// Full line width including gaps.
    pub fn total_width(&self) -> usize {
        self.columns.total() + self.gaps.iter().sum::<usize>()
    }

    /// Shrinks or expands the layout toward `target`.
    ///
    /// Columns are never shrunk below one display column, so a table with
    /// too little room to shrink stays wider than the target.
    pub fn fit(mut self, target: &FitTarget) -> Self {
        self.trim = target.trim;
        let total = self.total_width();

        if total > target.width {
            let indices = self.resolve_indices(&target.truncatable);
            if indices.is_empty() {
                return self;
            }
            let excess = total - target.width;
            let per_column = excess.div_ceil(indices.len());
            for idx in indices {
                let over = self.total_width().saturating_sub(target.width);
                let column = &mut self.columns.columns[idx];
                let decrease = per_column.min(over).min(column.width.saturating_sub(1));
                column.width -= decrease;
                if self.total_width() <= target.width {
                    break;
                }
            }
        } else if target.expand && !self.gaps.is_empty() {
            let free = target.width - total;
            let per_gap = free.div_ceil(self.gaps.len());
            for i in 0..self.gaps.len() {
                let room = target.width.saturating_sub(self.total_width());
                self.gaps[i] += per_gap.min(room);
                if self.total_width() >= target.width {
                    break;
                }
            }
        }

        self
    }

    fn resolve_indices(&self, truncatable: &[isize]) -> Vec<usize> {
        let len = self.columns.len() as isize;
        let mut out = Vec::new();
        for &raw in truncatable {
            let idx = if raw < 0 { len + raw } else { raw };
            if (0..len).contains(&idx) && !out.contains(&(idx as usize)) {
                out.push(idx as usize);
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resolve::{Align, ColumnSpec};

    fn layout(widths: &[usize]) -> Layout {
        let columns = widths
            .iter()
            .enumerate()
            .map(|(index, &width)| ColumnSpec {
                index,
                name: format!("c{index}"),
                align: Align::Left,
                width,
            })
            .collect();
        Layout::natural(ResolvedColumns { columns })
    }

    #[test]
    fn natural_layout_uses_single_gaps() {
        let l = layout(&[10, 4, 17]);
        assert_eq!(l.gaps, vec![1, 1]);
        assert_eq!(l.total_width(), 33);
    }

    #[test]
    fn fitting_wide_enough_target_changes_nothing() {
        let l = layout(&[10, 4, 17]).fit(&FitTarget::new(80));
        assert_eq!(l.widths(), vec![10, 4, 17]);
        assert_eq!(l.gaps, vec![1, 1]);
    }

    #[test]
    fn shrinks_last_column_first() {
        // total 33, target 30: excess 3, split over [-1, 0] -> 2 each
        let l = layout(&[10, 4, 17]).fit(&FitTarget::new(30));
        assert_eq!(l.widths(), vec![9, 4, 15]);
        assert_eq!(l.total_width(), 30);
    }

    #[test]
    fn stops_once_table_fits() {
        // excess 1, the last column alone absorbs it
        let l = layout(&[10, 4, 17]).fit(&FitTarget::new(32));
        assert_eq!(l.widths(), vec![10, 4, 16]);
    }

    #[test]
    fn never_shrinks_below_one_column() {
        let l = layout(&[3, 3]).fit(&FitTarget::new(2));
        assert_eq!(l.widths(), vec![1, 1]);
        assert_eq!(l.total_width(), 3);
    }

    #[test]
    fn out_of_range_and_duplicate_indices_are_ignored() {
        let mut target = FitTarget::new(30);
        target.truncatable = vec![9, -9, 1, 1];
        let l = layout(&[10, 4, 17]).fit(&target);
        assert_eq!(l.widths(), vec![10, 1, 17]);
    }

    #[test]
    fn expand_spreads_free_space_over_gaps() {
        let mut target = FitTarget::new(40);
        target.expand = true;
        // total 33, free 7 -> 4 then 3
        let l = layout(&[10, 4, 17]).fit(&target);
        assert_eq!(l.gaps, vec![5, 4]);
        assert_eq!(l.total_width(), 40);
    }

    #[test]
    fn expand_without_gaps_is_a_no_op() {
        let mut target = FitTarget::new(40);
        target.expand = true;
        let l = layout(&[10]).fit(&target);
        assert_eq!(l.total_width(), 10);
    }

    #[test]
    fn fit_records_trim_direction() {
        let mut target = FitTarget::new(80);
        target.trim = TrimFrom::Start;
        let l = layout(&[10, 4]).fit(&target);
        assert_eq!(l.trim, TrimFrom::Start);
    }
}
