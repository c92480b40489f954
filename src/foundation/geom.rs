pub use kurbo::{Point, Size, Vec2};

/// Fit tolerance in layout units.
///
/// Upstream measurements carry sub-pixel rounding noise, so a free region
/// accepts a candidate that is oversized by strictly less than one unit in
/// either dimension. The threshold is observable (it changes which free rect
/// a candidate lands in), so it is kept literal rather than re-derived.
pub const FIT_SLACK: f64 = 1.0;

/// Axis-aligned rectangle used for both placed footprints and free regions.
///
/// Coordinates are in container space, top-left origin. A placed rect is
/// immutable once committed; free rects are replaced (never mutated) whenever
/// a new occupant lands.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: f64,
    /// Top edge.
    pub y: f64,
    /// Horizontal extent (non-negative; may be `f64::INFINITY` for the open
    /// axis of a bin).
    pub width: f64,
    /// Vertical extent (non-negative; may be `f64::INFINITY`).
    pub height: f64,
}

impl Rect {
    /// Build a rect from origin and extents.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`).
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge (`y + height`).
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// Top-left corner as a point.
    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    /// Extents as a size.
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Convert to a [`kurbo::Rect`] (min/max form).
    pub fn to_kurbo(&self) -> kurbo::Rect {
        kurbo::Rect::new(self.x, self.y, self.right(), self.bottom())
    }

    /// Swap the axes: `(x, y)` becomes `(y, x)` and width/height trade roles.
    ///
    /// Used by horizontal-axis strategies that run their math in transposed
    /// space.
    pub fn transposed(&self) -> Self {
        Self {
            x: self.y,
            y: self.x,
            width: self.height,
            height: self.width,
        }
    }

    /// True iff `other` lies entirely within this rect, bounds inclusive.
    ///
    /// A zero-size `other` behaves as a point test.
    pub fn contains(&self, other: &Rect) -> bool {
        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// True iff the interiors of the two rects intersect.
    ///
    /// Touching edges do not count as overlap.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && self.right() > other.x
            && self.y < other.bottom()
            && self.bottom() > other.y
    }

    /// Decompose this (free) rect around a just-placed `occupant`.
    ///
    /// Returns up to four maximal strips covering this rect's area minus the
    /// occupant's: top, right, bottom, left. The strips intentionally overlap
    /// each other at the corners; the packer's merge step removes the
    /// redundancy, and the overlap guarantees no free area is lost.
    ///
    /// Returns `None` when `occupant` does not overlap this rect at all (the
    /// caller keeps this rect untouched).
    pub fn maximal_free_rects(&self, occupant: &Rect) -> Option<Vec<Rect>> {
        if !self.overlaps(occupant) {
            return None;
        }

        let mut strips = Vec::with_capacity(4);
        let this_right = self.right();
        let this_bottom = self.bottom();
        let occ_right = occupant.right();
        let occ_bottom = occupant.bottom();

        // top
        if self.y < occupant.y {
            strips.push(Rect::new(self.x, self.y, self.width, occupant.y - self.y));
        }
        // right
        if occ_right < this_right {
            strips.push(Rect::new(
                occ_right,
                self.y,
                this_right - occ_right,
                self.height,
            ));
        }
        // bottom
        if occ_bottom < this_bottom {
            strips.push(Rect::new(
                self.x,
                occ_bottom,
                self.width,
                this_bottom - occ_bottom,
            ));
        }
        // left
        if self.x < occupant.x {
            strips.push(Rect::new(self.x, self.y, occupant.x - self.x, self.height));
        }

        Some(strips)
    }

    /// True iff `candidate` fits inside this rect's extents, with
    /// [`FIT_SLACK`] of tolerance on each axis.
    pub fn can_fit(&self, candidate: &Rect) -> bool {
        candidate.width < self.width + FIT_SLACK && candidate.height < self.height + FIT_SLACK
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/geom.rs"]
mod tests;
