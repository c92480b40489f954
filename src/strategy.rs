use std::collections::BTreeMap;

use kurbo::{Point, Size};

use crate::foundation::error::{BrickworkError, BrickworkResult};
use crate::foundation::geom::Rect;

/// 2D bin-packing strategy over a free-rectangle decomposition.
pub mod binpack;
/// Left-to-right row flow strategy.
pub mod fitrows;
/// Column-balancing masonry strategy.
pub mod masonry;

/// Parameters resolved by the engine before a pass, handed to the strategy at
/// reset.
///
/// `cell_size` has already been run through the fallback chain (explicit
/// option, first item's outer extent, container extent), so strategies never
/// see a zero cell. `column_width`/`row_height` carry the raw option values
/// for strategies that only snap when an explicit grid was requested.
#[derive(Clone, Copy, Debug)]
pub struct StrategyContext {
    /// Measured container size.
    pub container: Size,
    /// Resolved cell size along the cross axis (column width, or row height
    /// on the horizontal axis).
    pub cell_size: f64,
    /// Explicit `columnWidth` option, if any.
    pub column_width: Option<f64>,
    /// Explicit `rowHeight` option, if any.
    pub row_height: Option<f64>,
    /// Space between items.
    pub gutter: f64,
    /// Lay out along the horizontal axis.
    pub horizontal: bool,
    /// Shrink the reported width to the used columns (masonry).
    pub fit_width: bool,
}

impl StrategyContext {
    /// Container extent along the cross axis (the axis items are balanced
    /// across): width for vertical layouts, height for horizontal ones.
    pub fn cross_extent(&self) -> f64 {
        if self.horizontal {
            self.container.height
        } else {
            self.container.width
        }
    }
}

/// One interchangeable packing strategy.
///
/// The engine owns a boxed strategy and drives it through a strict sequence
/// per pass: `reset_layout`, then `manage_stamp` for every obstacle, then
/// `item_position` for every non-ignored item in insertion order, then
/// `content_size`. All of it is synchronous geometry math; strategies never
/// touch the environment.
pub trait LayoutStrategy {
    /// Registered name of the strategy.
    fn name(&self) -> &'static str;

    /// Clear internal state for a fresh pass.
    fn reset_layout(&mut self, ctx: &StrategyContext);

    /// Carve a static obstacle out of the placeable area, exactly as if it
    /// were a placed item. Default: obstacle-unaware strategies ignore it.
    fn manage_stamp(&mut self, _rect: &Rect) {}

    /// Compute the next item's position from its outer size. Mutates
    /// strategy state (the placement is committed).
    fn item_position(&mut self, outer: Size) -> Point;

    /// An item at `rect` left the layout; strategies that can reuse freed
    /// area reclaim it here. Default: no-op.
    fn item_removed(&mut self, _rect: &Rect) {}

    /// Content extent after the placements so far. The cross axis reports
    /// the container extent unless the strategy fits it (masonry fit-width).
    fn content_size(&self) -> Size;
}

type StrategyFactory = Box<dyn Fn() -> Box<dyn LayoutStrategy>>;

/// Explicit name-to-factory map for layout strategies.
///
/// Replaces implicit strategy lookup with a registry the engine owns.
/// Requesting an unregistered name is fatal by design
/// ([`BrickworkError::UnknownMode`]): continuing would silently produce a
/// wrong layout.
pub struct StrategyRegistry {
    factories: BTreeMap<String, StrategyFactory>,
}

impl StrategyRegistry {
    /// Empty registry with no strategies.
    pub fn empty() -> Self {
        Self {
            factories: BTreeMap::new(),
        }
    }

    /// Register (or replace) a strategy factory under `name`.
    pub fn register(&mut self, name: &str, factory: impl Fn() -> Box<dyn LayoutStrategy> + 'static) {
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    /// Instantiate the strategy registered under `name`.
    pub fn create(&self, name: &str) -> BrickworkResult<Box<dyn LayoutStrategy>> {
        match self.factories.get(name) {
            Some(factory) => Ok(factory()),
            None => Err(BrickworkError::unknown_mode(name)),
        }
    }

    /// Registered strategy names, sorted.
    pub fn modes(&self) -> Vec<String> {
        self.factories.keys().cloned().collect()
    }
}

impl Default for StrategyRegistry {
    /// Registry with the built-in strategies: `masonry`, `bin-pack`,
    /// `fit-rows`.
    fn default() -> Self {
        let mut registry = Self::empty();
        registry.register("masonry", || Box::new(masonry::Masonry::new()));
        registry.register("bin-pack", || Box::new(binpack::BinPack::new()));
        registry.register("fit-rows", || Box::new(fitrows::FitRows::new()));
        registry
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("modes", &self.modes())
            .finish()
    }
}
