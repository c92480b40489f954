use kurbo::{Point, Size};

use crate::strategy::{LayoutStrategy, StrategyContext};

/// Row-flow strategy: items run along the flow axis in insertion order and
/// wrap to a fresh row when the next item would not fit.
///
/// Vertical layouts flow left-to-right and wrap downward; horizontal layouts
/// flow top-to-bottom and wrap rightward. Stamp-unaware (uses the trait's
/// no-op default).
#[derive(Debug, Default)]
pub struct FitRows {
    /// Cursor along the flow axis.
    flow: f64,
    /// Cursor along the wrap axis (top of the current row).
    wrap: f64,
    /// Bottom of the deepest row so far.
    max_wrap: f64,
    flow_extent: f64,
    gutter: f64,
    horizontal: bool,
    container: Size,
}

impl FitRows {
    /// Strategy with empty state; the engine resets it before each pass.
    pub fn new() -> Self {
        Self::default()
    }
}

impl LayoutStrategy for FitRows {
    fn name(&self) -> &'static str {
        "fit-rows"
    }

    fn reset_layout(&mut self, ctx: &StrategyContext) {
        self.flow = 0.0;
        self.wrap = 0.0;
        self.max_wrap = 0.0;
        self.gutter = ctx.gutter;
        self.horizontal = ctx.horizontal;
        self.container = ctx.container;
        self.flow_extent = ctx.cross_extent() + ctx.gutter;
    }

    fn item_position(&mut self, outer: Size) -> Point {
        let (flow_size, wrap_size) = if self.horizontal {
            (outer.height, outer.width)
        } else {
            (outer.width, outer.height)
        };

        let step = flow_size + self.gutter;
        if self.flow != 0.0 && self.flow + step > self.flow_extent {
            self.flow = 0.0;
            self.wrap = self.max_wrap;
        }

        let pos = (self.flow, self.wrap);
        self.max_wrap = self.max_wrap.max(self.wrap + wrap_size);
        self.flow += step;

        if self.horizontal {
            Point::new(pos.1, pos.0)
        } else {
            Point::new(pos.0, pos.1)
        }
    }

    fn content_size(&self) -> Size {
        if self.horizontal {
            Size::new(self.max_wrap, self.container.height)
        } else {
            Size::new(self.container.width, self.max_wrap)
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/fitrows.rs"]
mod tests;
