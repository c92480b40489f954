//! # Brickwork guide
//!
//! This module is a standalone, end-to-end walkthrough of Brickwork's architecture and public
//! API. It is intentionally detailed so integrations can build on a shared mental model of what
//! "a layout pass" means in this codebase.
//!
//! If you are looking for copy/paste commands, start with the repository `README.md`.
//! If you are implementing new strategies or hosts, start here.
//!
//! ---
//!
//! ## Core concepts
//!
//! - [`LayoutEngine`](crate::LayoutEngine): the orchestrator for one container
//! - [`LayoutItem`](crate::LayoutItem): per-element state (measured size, committed position,
//!   transition state)
//! - [`LayoutStrategy`](crate::LayoutStrategy): one interchangeable packing strategy
//! - [`Environment`](crate::Environment): everything the engine consumes from its host
//! - [`Rect`](crate::Rect) / [`Packer`](crate::Packer): the free-rectangle geometry under
//!   bin-packing
//! - [`Scene`](crate::Scene) / [`solve`](crate::solve): headless one-shot solving
//!
//! A layout pass is explicitly staged:
//!
//! 1. **Measuring**: the container, every item, and every stamp are re-measured through
//!    [`Environment::measure`](crate::Environment::measure)
//! 2. **Placing**: the strategy is reset, stamps are carved out, and every non-ignored item gets
//!    a target position, in insertion order (pure geometry, no environment calls)
//! 3. **Writing**: all targets are applied in one batch, synchronously or as animated moves
//! 4. **Settling**: once in-flight moves drain, the container size is fit to content and
//!    [`LayoutEvent::LayoutComplete`](crate::LayoutEvent::LayoutComplete) is emitted
//!
//! ---
//!
//! ## "Reads before writes" (and why)
//!
//! Phase 2 computes every position before phase 3 applies any of them. In a DOM host, each write
//! invalidates layout, so interleaving reads and writes forces one synchronous reflow per item.
//! Batching all reads first makes a pass cost one reflow regardless of item count, and it is also
//! the correctness property that keeps one item's write from changing the measurements behind the
//! next item's computation.
//!
//! Across passes: a new pass may start while the previous one is still settling. In-flight items
//! are re-targeted (their stale tickets cancelled), never queued behind, and the superseded pass
//! never emits its completion.
//!
//! ---
//!
//! ## The environment boundary
//!
//! The engine never touches a real DOM, style system, or event loop. Three capabilities come from
//! the host through the [`Environment`](crate::Environment) trait:
//!
//! - **measurement**: `measure(element) -> Option<ElementBox>`. `None` means the element is
//!   gone; the engine drops the item and keeps going
//! - **transition execution**: `begin_transition(element, ticket, request) -> bool`. `false`
//!   means "no animation here", and the engine commits the move synchronously
//! - **timers**: `schedule_timer(token, delay) -> bool`. Used only for the resize debounce;
//!   `false` makes the engine react immediately instead of deadlocking
//!
//! Completions re-enter through
//! [`LayoutEngine::transition_finished`](crate::LayoutEngine::transition_finished) and
//! [`LayoutEngine::timer_fired`](crate::LayoutEngine::timer_fired). Both are keyed by
//! engine-minted handles ([`TransitionTicket`](crate::TransitionTicket),
//! [`TimerToken`](crate::TimerToken)); a handle the engine no longer holds is stale and ignored.
//! Forgetting a handle *is* the cancellation mechanism; there is no other bookkeeping.
//!
//! [`StaticEnvironment`](crate::StaticEnvironment) is the in-tree host: a table of pre-measured
//! boxes with optional recording of transition and timer requests. Tests and the CLI run on it.
//!
//! ---
//!
//! ## Strategies
//!
//! Three built-ins ship in the default [`StrategyRegistry`](crate::StrategyRegistry):
//!
//! - `"masonry"` ([`Masonry`](crate::Masonry)): per-column height ledger; each item lands atop
//!   the shortest contiguous column group wide enough for it, leftmost on ties
//! - `"bin-pack"` ([`BinPack`](crate::BinPack)): first-fit packing into a maximal-free-rectangle
//!   decomposition; arbitrary sizes, no grid resolution limit
//! - `"fit-rows"` ([`FitRows`](crate::FitRows)): plain row flow with wrapping
//!
//! First-fit (not best-fit) in `"bin-pack"` is a deliberate trade: the scan order already encodes
//! the visual preference (top-to-bottom then left-to-right, or transposed), and item counts per
//! pass are small enough that smarter fitting buys nothing visible.
//!
//! Stamped elements are obstacles: they are fed to the strategy as if they were placed items, so
//! later placements route around them, but no [`LayoutItem`](crate::LayoutItem) is created for
//! them and they are never moved.
//!
//! ---
//!
//! ## Rounding tolerances
//!
//! Measurements arrive with sub-pixel noise, so three literal thresholds absorb it:
//!
//! - a free rect accepts a candidate oversized by less than [`FIT_SLACK`](crate::FIT_SLACK)
//!   (one unit) per axis
//! - the masonry column count rounds up when the leftover gap is within one unit of a column
//! - an item's column span rounds (instead of ceiling) when the overshoot is within one unit
//!
//! These are tuned against real measurement noise, not derived from a model, and they change
//! observable column assignment. Keep them literal.
//!
//! ---
//!
//! ## Headless solving
//!
//! [`Scene`](crate::Scene) is a pure data model (container + options + items + stamps) and
//! [`solve`](crate::solve) runs one pass over a [`StaticEnvironment`](crate::StaticEnvironment)
//! built from it, returning a [`LayoutReport`](crate::LayoutReport). The `brickwork` binary wraps
//! exactly that: scene JSON in, report JSON out.
