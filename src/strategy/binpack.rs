use kurbo::{Point, Size};

use crate::foundation::geom::Rect;
use crate::strategy::{LayoutStrategy, StrategyContext};

/// Scan order over the free-space list, which decides where the first fit
/// lands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    /// Top-to-bottom, then left-to-right: vertical bins fill downward.
    #[default]
    DownwardLeftToRight,
    /// Left-to-right, then top-to-bottom: horizontal bins fill rightward.
    RightwardTopToBottom,
}

impl SortDirection {
    fn cmp(self, a: &Rect, b: &Rect) -> std::cmp::Ordering {
        match self {
            Self::DownwardLeftToRight => a.y.total_cmp(&b.y).then(a.x.total_cmp(&b.x)),
            Self::RightwardTopToBottom => a.x.total_cmp(&b.x).then(a.y.total_cmp(&b.y)),
        }
    }
}

/// First-fit allocator over a maximal-free-rectangle decomposition.
///
/// The bin has a fixed extent on one axis and is effectively unbounded
/// (`f64::INFINITY`) on the other. Free space is a list of maximal
/// rectangles: decomposed sets pack arbitrary sizes without a resolution
/// limit, at the cost of an O(n) scan per placement, which is fine at the
/// item counts a layout pass sees.
///
/// Invariant: after every placement, no rect in the list is fully contained
/// by another rect in the list.
#[derive(Debug, Default)]
pub struct Packer {
    width: f64,
    height: f64,
    sort_direction: SortDirection,
    spaces: Vec<Rect>,
}

impl Packer {
    /// Empty packer; nothing fits until [`Packer::reset`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear free space to a single rect spanning the whole bin and select
    /// the scan order.
    pub fn reset(&mut self, width: f64, height: f64, sort_direction: SortDirection) {
        self.width = width;
        self.height = height;
        self.sort_direction = sort_direction;
        self.spaces = vec![Rect::new(0.0, 0.0, width, height)];
    }

    /// Bin width.
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Bin height.
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Current free-space list, in scan order.
    pub fn spaces(&self) -> &[Rect] {
        &self.spaces
    }

    /// Place `rect` at the origin of the first free rect that fits,
    /// first-fit in scan order. Mutates `rect.x`/`rect.y` on success.
    ///
    /// Returns `false`, leaving both `rect` and the free-space list
    /// untouched, when nothing fits (impossible while one axis is unbounded,
    /// but the failure path keeps a failed placement provably side-effect
    /// free).
    pub fn pack(&mut self, rect: &mut Rect) -> bool {
        let hit = self.spaces.iter().find(|space| space.can_fit(rect));
        let Some(space) = hit else {
            return false;
        };
        rect.x = space.x;
        rect.y = space.y;
        self.placed(*rect);
        true
    }

    /// Account for `rect` occupying part of the bin: every intersected free
    /// rect is replaced by its maximal strips around `rect`, then the list is
    /// merged and re-sorted.
    pub fn placed(&mut self, rect: Rect) {
        let mut revised = Vec::with_capacity(self.spaces.len() + 3);
        for space in &self.spaces {
            match space.maximal_free_rects(&rect) {
                Some(strips) => revised.extend(strips),
                None => revised.push(*space),
            }
        }
        self.spaces = merge_rects(revised);
        self.sort_spaces();
    }

    /// Re-add a freed region (an item left the packed area), then merge and
    /// re-sort.
    pub fn add_space(&mut self, rect: Rect) {
        self.spaces.push(rect);
        self.spaces = merge_rects(std::mem::take(&mut self.spaces));
        self.sort_spaces();
    }

    fn sort_spaces(&mut self) {
        let dir = self.sort_direction;
        self.spaces.sort_by(|a, b| dir.cmp(a, b));
    }
}

/// Drop every rect that is contained by a *different* rect in the list.
///
/// A rect trivially contains itself, so the comparison excludes the same
/// index; exact duplicates keep exactly one survivor.
fn merge_rects(mut rects: Vec<Rect>) -> Vec<Rect> {
    let mut i = 0;
    while i < rects.len() {
        let mut contained = false;
        for j in 0..rects.len() {
            if i == j {
                continue;
            }
            if rects[j].contains(&rects[i]) {
                if rects[i] == rects[j] && i < j {
                    // duplicate pair: the earlier copy survives
                    continue;
                }
                contained = true;
                break;
            }
        }
        if contained {
            rects.remove(i);
        } else {
            i += 1;
        }
    }
    rects
}

/// Bin-packing layout strategy over [`Packer`].
///
/// Vertical layouts pack into a bin of the container's width and unbounded
/// height; horizontal layouts transpose that. Stamps are carved straight out
/// of free space without being packed, so later items route around them.
#[derive(Debug, Default)]
pub struct BinPack {
    packer: Packer,
    column_width: Option<f64>,
    row_height: Option<f64>,
    gutter: f64,
    horizontal: bool,
    container: Size,
    max_x: f64,
    max_y: f64,
}

impl BinPack {
    /// Strategy with empty state; the engine resets it before each pass.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inflate an outer size to the footprint the packer reserves: snapped up
    /// to the grid when an explicit cell was configured, otherwise padded by
    /// the gutter. Clamped to the bin extents.
    fn packed_size(&self, outer: Size) -> Size {
        let width = match self.column_width {
            Some(cw) => {
                let cell = cw + self.gutter;
                (outer.width / cell).ceil() * cell
            }
            None => outer.width + self.gutter,
        };
        let height = match self.row_height {
            Some(rh) => {
                let cell = rh + self.gutter;
                (outer.height / cell).ceil() * cell
            }
            None => outer.height + self.gutter,
        };
        Size::new(width.min(self.packer.width()), height.min(self.packer.height()))
    }
}

impl LayoutStrategy for BinPack {
    fn name(&self) -> &'static str {
        "bin-pack"
    }

    fn reset_layout(&mut self, ctx: &StrategyContext) {
        self.column_width = ctx.column_width;
        self.row_height = ctx.row_height;
        self.gutter = ctx.gutter;
        self.horizontal = ctx.horizontal;
        self.container = ctx.container;
        self.max_x = 0.0;
        self.max_y = 0.0;
        if ctx.horizontal {
            self.packer.reset(
                f64::INFINITY,
                ctx.container.height,
                SortDirection::RightwardTopToBottom,
            );
        } else {
            self.packer.reset(
                ctx.container.width,
                f64::INFINITY,
                SortDirection::DownwardLeftToRight,
            );
        }
    }

    fn manage_stamp(&mut self, rect: &Rect) {
        self.packer.placed(*rect);
    }

    fn item_position(&mut self, outer: Size) -> Point {
        let packed = self.packed_size(outer);
        let mut rect = Rect::new(0.0, 0.0, packed.width, packed.height);
        if self.packer.pack(&mut rect) {
            self.max_x = self.max_x.max(rect.right());
            self.max_y = self.max_y.max(rect.bottom());
        } else {
            tracing::warn!(
                width = packed.width,
                height = packed.height,
                "bin-pack: no free rect fits, placing at origin"
            );
        }
        Point::new(rect.x, rect.y)
    }

    fn item_removed(&mut self, rect: &Rect) {
        let packed = self.packed_size(rect.size());
        self.packer
            .add_space(Rect::new(rect.x, rect.y, packed.width, packed.height));
    }

    fn content_size(&self) -> Size {
        if self.horizontal {
            Size::new((self.max_x - self.gutter).max(0.0), self.container.height)
        } else {
            Size::new(self.container.width, (self.max_y - self.gutter).max(0.0))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/strategy/binpack.rs"]
mod tests;
