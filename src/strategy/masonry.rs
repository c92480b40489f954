use kurbo::{Point, Size};

use crate::foundation::geom::Rect;
use crate::strategy::{LayoutStrategy, StrategyContext};

/// Column-balancing masonry strategy.
///
/// Keeps one running height per column and drops each item atop the shortest
/// contiguous column group wide enough for it (leftmost wins ties). On the
/// horizontal axis the same ledger tracks row widths; the math runs in
/// transposed space and the output point is swapped back.
///
/// The rounding rules for column count and span are tuned against sub-pixel
/// measurement noise and are observable in which column an item lands in, so
/// they are kept literal: round instead of floor/ceil whenever the remainder
/// puts the value within one unit of the next integer.
#[derive(Debug, Default)]
pub struct Masonry {
    /// Effective cell: configured cell size plus gutter.
    cell: f64,
    gutter: f64,
    cols: usize,
    col_ys: Vec<f64>,
    horizontal: bool,
    fit_width: bool,
    container: Size,
}

impl Masonry {
    /// Strategy with empty state; the engine resets it before each pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Column heights ledger (row widths when horizontal). Heights never
    /// decrease within one pass.
    pub fn column_heights(&self) -> &[f64] {
        &self.col_ys
    }

    /// Column count for the current pass.
    pub fn column_count(&self) -> usize {
        self.cols
    }

    fn col_span_for(&self, lane_extent: f64) -> usize {
        // reset_layout has not run yet
        if self.cols == 0 {
            return 0;
        }
        let ratio = lane_extent / self.cell;
        let remainder = lane_extent % self.cell;
        let span = if remainder > 0.0 && remainder < 1.0 {
            ratio.round()
        } else {
            ratio.ceil()
        };
        (span as usize).clamp(1, self.cols)
    }
}

impl LayoutStrategy for Masonry {
    fn name(&self) -> &'static str {
        "masonry"
    }

    fn reset_layout(&mut self, ctx: &StrategyContext) {
        self.horizontal = ctx.horizontal;
        self.fit_width = ctx.fit_width && !ctx.horizontal;
        self.gutter = ctx.gutter;
        self.container = ctx.container;
        self.cell = ctx.cell_size + ctx.gutter;

        // Column count: round up when the leftover gap is within one unit of
        // a full column, so a one-pixel measurement error cannot drop (or
        // invent) a column.
        let span = ctx.cross_extent() + ctx.gutter;
        let ratio = span / self.cell;
        let excess = self.cell - span % self.cell;
        let cols = if excess > 0.0 && excess < 1.0 {
            ratio.round()
        } else {
            ratio.floor()
        };
        self.cols = (cols.max(1.0)) as usize;
        self.col_ys = vec![0.0; self.cols];
    }

    fn manage_stamp(&mut self, rect: &Rect) {
        let r = if self.horizontal {
            rect.transposed()
        } else {
            *rect
        };
        let first_col = ((r.x / self.cell).floor()).max(0.0) as usize;
        let mut last_col = (r.right() / self.cell).floor();
        // a stamp ending exactly on a column boundary does not touch the
        // next column
        if r.right() % self.cell == 0.0 {
            last_col -= 1.0;
        }
        if last_col < 0.0 {
            return;
        }
        let last_col = (last_col as usize).min(self.cols - 1);
        let stamp_bottom = r.bottom();
        for col in first_col..=last_col {
            if col < self.cols {
                self.col_ys[col] = self.col_ys[col].max(stamp_bottom);
            }
        }
    }

    fn item_position(&mut self, outer: Size) -> Point {
        let (lane_extent, depth_extent) = if self.horizontal {
            (outer.height, outer.width)
        } else {
            (outer.width, outer.height)
        };

        let col_span = self.col_span_for(lane_extent);
        let groups = self.cols - col_span + 1;

        // group height is the max over its members; pick the smallest group,
        // leftmost on ties
        let mut best_start = 0;
        let mut best_y = f64::INFINITY;
        for start in 0..groups {
            let group_y = self.col_ys[start..start + col_span]
                .iter()
                .copied()
                .fold(0.0, f64::max);
            if group_y < best_y {
                best_y = group_y;
                best_start = start;
            }
        }

        let lane_pos = self.cell * best_start as f64;
        let new_height = best_y + depth_extent;
        for col in &mut self.col_ys[best_start..best_start + col_span] {
            *col = new_height;
        }

        if self.horizontal {
            Point::new(best_y, lane_pos)
        } else {
            Point::new(lane_pos, best_y)
        }
    }

    fn content_size(&self) -> Size {
        let max_depth = self.col_ys.iter().copied().fold(0.0, f64::max);
        if self.horizontal {
            return Size::new(max_depth, self.container.height);
        }
        if self.fit_width {
            let mut unused = 0;
            let mut i = self.cols;
            while i > 1 {
                i -= 1;
                if self.col_ys[i] != 0.0 {
                    break;
                }
                unused += 1;
            }
            let width = ((self.cols - unused) as f64 * self.cell - self.gutter).max(0.0);
            return Size::new(width, max_depth);
        }
        Size::new(self.container.width, max_depth)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/masonry.rs"]
mod tests;
