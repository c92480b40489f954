use std::collections::HashMap;
use std::time::Duration;

use kurbo::{Point, Size};

use crate::config::LayoutOptions;
use crate::environment::{
    ElementId, Environment, TimerToken, TransitionRequest, TransitionTicket,
};
use crate::foundation::error::BrickworkResult;
use crate::foundation::geom::Rect;
use crate::item::{ItemId, LayoutItem, TransitionState};
use crate::strategy::{LayoutStrategy, StrategyContext, StrategyRegistry};

/// Phase of the current layout pass.
///
/// Every computation (`Placing`) happens strictly before any write
/// (`Writing`); that separation is what keeps one item's write from
/// invalidating the measurements behind the next item's computation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LayoutPhase {
    /// No pass in progress.
    Idle,
    /// Re-measuring the container, items, and stamps.
    Measuring,
    /// Pure geometry: computing every item's target position.
    Placing,
    /// Applying the computed targets in one batch.
    Writing,
    /// Waiting for in-flight transitions to drain.
    Settling,
}

/// Notifications produced by the engine, drained by the host via
/// [`LayoutEngine::take_events`].
#[derive(Clone, Debug, PartialEq)]
pub enum LayoutEvent {
    /// A layout pass settled: every item is at its computed position and the
    /// container has been resized to fit.
    LayoutComplete {
        /// Items laid out by the pass, in insertion order.
        items: Vec<ItemId>,
    },
    /// One item reached a committed position (synchronously or at the end of
    /// an animated move).
    ItemPositioned {
        /// The positioned item.
        item: ItemId,
    },
    /// Items were removed from the collection.
    ItemsRemoved {
        /// Elements whose items were removed.
        elements: Vec<ElementId>,
    },
}

/// One row of the [`LayoutEngine::placements`] snapshot.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ItemPlacement {
    /// Engine item handle.
    pub item: ItemId,
    /// Host element handle.
    pub element: ElementId,
    /// Committed position of the outer box's top-left corner.
    pub position: Point,
    /// Position as fractions of the container box, when `percentPosition`
    /// is set.
    pub percent: Option<Point>,
}

/// Orchestrator for one container: owns the item collection, the active
/// strategy, stamped obstacles, resize debouncing, and the read-then-write
/// layout pipeline.
///
/// The engine is single-threaded and cooperative: it never blocks, and all
/// suspension (the resize debounce timer, per-item transition completions)
/// re-enters through [`LayoutEngine::timer_fired`] and
/// [`LayoutEngine::transition_finished`].
pub struct LayoutEngine {
    container: ElementId,
    options: LayoutOptions,
    registry: StrategyRegistry,
    strategy: Box<dyn LayoutStrategy>,
    mode: String,
    items: Vec<LayoutItem>,
    by_element: HashMap<ElementId, ItemId>,
    stamps: Vec<ElementId>,
    container_size: Size,
    content_size: Size,
    /// Relevant container extent observed at the last pass's Measuring phase;
    /// the resize guard compares against it.
    last_extent: Option<f64>,
    phase: LayoutPhase,
    events: Vec<LayoutEvent>,
    in_flight: HashMap<TransitionTicket, ItemId>,
    pending_timer: Option<TimerToken>,
    pass_items: Vec<ItemId>,
    pass: u64,
    next_item_id: u64,
    next_ticket: u64,
    next_token: u64,
}

impl LayoutEngine {
    /// Build an engine for `container` with the built-in strategies.
    ///
    /// Fails on invalid options or an unregistered `mode` (the one
    /// fatal-by-design error: a wrong strategy would silently produce a wrong
    /// layout).
    pub fn new(container: ElementId, options: LayoutOptions) -> BrickworkResult<Self> {
        Self::with_registry(container, options, StrategyRegistry::default())
    }

    /// Like [`LayoutEngine::new`] with a caller-supplied strategy registry.
    pub fn with_registry(
        container: ElementId,
        options: LayoutOptions,
        registry: StrategyRegistry,
    ) -> BrickworkResult<Self> {
        options.validate()?;
        let strategy = registry.create(&options.mode)?;
        let mode = options.mode.clone();
        Ok(Self {
            container,
            options,
            registry,
            strategy,
            mode,
            items: Vec::new(),
            by_element: HashMap::new(),
            stamps: Vec::new(),
            container_size: Size::ZERO,
            content_size: Size::ZERO,
            last_extent: None,
            phase: LayoutPhase::Idle,
            events: Vec::new(),
            in_flight: HashMap::new(),
            pending_timer: None,
            pass_items: Vec::new(),
            pass: 0,
            next_item_id: 0,
            next_ticket: 0,
            next_token: 0,
        })
    }

    /// Run the initial layout unless `isInitLayout` is off.
    pub fn activate(&mut self, env: &mut dyn Environment) -> BrickworkResult<()> {
        if self.options.is_init_layout {
            self.layout(env)?;
        }
        Ok(())
    }

    /// Discover elements as layout items, in the given order. Elements
    /// already tracked, and elements that fail to measure, are skipped.
    pub fn add_items(&mut self, env: &mut dyn Environment, elements: &[ElementId]) -> Vec<ItemId> {
        let mut added = Vec::new();
        for &element in elements {
            if self.by_element.contains_key(&element) {
                continue;
            }
            let Some(element_box) = env.measure(element) else {
                tracing::warn!(?element, "element not measurable; skipping add");
                continue;
            };
            let id = ItemId(self.next_item_id);
            self.next_item_id += 1;
            self.items.push(LayoutItem::new(id, element, element_box));
            self.by_element.insert(element, id);
            added.push(id);
        }
        added
    }

    /// Add elements and place only them onto the current strategy state,
    /// without resetting it: existing items keep their positions. New items
    /// are committed synchronously and a `LayoutComplete` carrying just the
    /// new items is emitted.
    pub fn append(&mut self, env: &mut dyn Environment, elements: &[ElementId]) -> Vec<ItemId> {
        let added = self.add_items(env, elements);
        if added.is_empty() {
            return added;
        }
        // before the first pass there is no strategy state to extend; the
        // full pass also emits the LayoutComplete
        if self.pass == 0 {
            let _ = self.layout(env);
            return added;
        }
        let mut targets = Vec::with_capacity(added.len());
        for &id in &added {
            let Some(item) = self.items.iter().find(|i| i.id() == id) else {
                continue;
            };
            if item.is_ignored() {
                continue;
            }
            let b = item.element_box();
            let pos = self
                .strategy
                .item_position(Size::new(b.outer_width, b.outer_height));
            targets.push((id, pos));
        }
        let mut stagger_index = 0u32;
        for (id, raw) in targets {
            let target = match self.items.iter().find(|i| i.id() == id) {
                Some(item) => self.adjusted_target(item, raw),
                None => continue,
            };
            self.apply_target(env, id, target, &mut stagger_index);
        }
        self.resize_container();
        self.events.push(LayoutEvent::LayoutComplete {
            items: added.clone(),
        });
        added
    }

    /// Remove elements from the collection. In-flight transitions are
    /// cancelled, freed footprints are returned to the strategy, and an
    /// `ItemsRemoved` event is emitted.
    pub fn remove_items(&mut self, env: &mut dyn Environment, elements: &[ElementId]) {
        let mut removed = Vec::new();
        for &element in elements {
            let Some(id) = self.by_element.remove(&element) else {
                continue;
            };
            let Some(idx) = self.items.iter().position(|i| i.id() == id) else {
                continue;
            };
            let item = self.items.remove(idx);
            if let TransitionState::Transitioning { ticket, .. } = item.state() {
                env.cancel_transition(element, ticket);
                self.in_flight.remove(&ticket);
            }
            if item.has_position() {
                let b = item.element_box();
                let rect = Rect::new(
                    item.position().x,
                    item.position().y,
                    b.outer_width,
                    b.outer_height,
                );
                self.strategy.item_removed(&rect);
            }
            removed.push(element);
        }
        if !removed.is_empty() {
            self.events
                .push(LayoutEvent::ItemsRemoved { elements: removed });
        }
        if self.phase == LayoutPhase::Settling && self.in_flight.is_empty() {
            self.settle();
        }
    }

    /// Register elements as static obstacles. A stamped element that is also
    /// an item is marked ignored (kept in the collection, skipped by
    /// placement).
    pub fn stamp(&mut self, elements: &[ElementId]) {
        for &element in elements {
            if !self.stamps.contains(&element) {
                self.stamps.push(element);
            }
            self.set_ignored(element, true);
        }
    }

    /// Deregister stamped obstacles; previously ignored items become
    /// placeable again.
    pub fn unstamp(&mut self, elements: &[ElementId]) {
        for &element in elements {
            self.stamps.retain(|s| s != &element);
            self.set_ignored(element, false);
        }
    }

    /// Keep the element's item in the collection but skip it during layout.
    pub fn ignore(&mut self, element: ElementId) {
        self.set_ignored(element, true);
    }

    /// Undo [`LayoutEngine::ignore`].
    pub fn unignore(&mut self, element: ElementId) {
        self.set_ignored(element, false);
    }

    /// Run one full layout pass: measure, place, write, settle.
    ///
    /// Idempotent: a second call with unchanged items and container size
    /// recomputes the same positions and moves nothing. Calling while a
    /// previous pass is still settling re-targets its in-flight items; the
    /// superseded pass never emits its `LayoutComplete`.
    #[tracing::instrument(skip(self, env), fields(pass = self.pass + 1, mode = %self.mode))]
    pub fn layout(&mut self, env: &mut dyn Environment) -> BrickworkResult<()> {
        self.pass += 1;

        // Measuring
        self.phase = LayoutPhase::Measuring;
        match env.measure(self.container) {
            Some(b) => self.container_size = Size::new(b.width, b.height),
            None => {
                tracing::warn!(container = ?self.container, "container not measurable; keeping last size");
            }
        }
        self.last_extent = Some(self.relevant_extent(self.container_size));

        let mut vanished = Vec::new();
        for item in &mut self.items {
            match env.measure(item.element()) {
                Some(b) => item.set_element_box(b),
                None => vanished.push(item.element()),
            }
        }
        for element in vanished {
            self.drop_vanished(env, element);
        }

        let mut stamp_rects = Vec::with_capacity(self.stamps.len());
        for &stamp in &self.stamps {
            match env.measure(stamp) {
                Some(b) => stamp_rects.push(Rect::new(b.x, b.y, b.outer_width, b.outer_height)),
                None => tracing::warn!(element = ?stamp, "stamp not measurable; skipping"),
            }
        }

        let ctx = self.strategy_context();

        // Placing: pure geometry, no environment calls
        self.phase = LayoutPhase::Placing;
        self.strategy.reset_layout(&ctx);
        for rect in &stamp_rects {
            self.strategy.manage_stamp(rect);
        }
        let mut targets = Vec::with_capacity(self.items.len());
        for item in &self.items {
            if item.is_ignored() {
                continue;
            }
            let b = item.element_box();
            let pos = self
                .strategy
                .item_position(Size::new(b.outer_width, b.outer_height));
            targets.push((item.id(), pos));
        }
        tracing::debug!(items = targets.len(), stamps = stamp_rects.len(), "placed");

        // Writing: apply every target in one batch
        self.phase = LayoutPhase::Writing;
        self.pass_items = targets.iter().map(|(id, _)| *id).collect();
        let mut stagger_index = 0u32;
        for (id, raw) in targets {
            let target = match self.items.iter().find(|i| i.id() == id) {
                Some(item) => self.adjusted_target(item, raw),
                None => continue,
            };
            self.apply_target(env, id, target, &mut stagger_index);
        }

        // Settling
        if self.in_flight.is_empty() {
            self.settle();
        } else {
            self.phase = LayoutPhase::Settling;
        }
        Ok(())
    }

    /// Debounced external resize notification.
    ///
    /// Coalesces bursts into one deferred check; if the host has no timer
    /// capability the check runs immediately instead. The check relayouts
    /// only when the relevant container extent actually changed since the
    /// last pass, which breaks the layout/resize-notification feedback loop.
    pub fn on_resize(&mut self, env: &mut dyn Environment) -> BrickworkResult<()> {
        if !self.options.is_resize_bound {
            return Ok(());
        }
        if let Some(token) = self.pending_timer.take() {
            env.cancel_timer(token);
        }
        let token = TimerToken(self.next_token);
        self.next_token += 1;
        let delay = Duration::from_millis(self.options.resize_debounce_ms);
        if env.schedule_timer(token, delay) {
            self.pending_timer = Some(token);
            return Ok(());
        }
        self.relayout_if_extent_changed(env)
    }

    /// Host callback for a timer scheduled via the environment. Stale tokens
    /// are ignored.
    pub fn timer_fired(
        &mut self,
        env: &mut dyn Environment,
        token: TimerToken,
    ) -> BrickworkResult<()> {
        if self.pending_timer != Some(token) {
            return Ok(());
        }
        self.pending_timer = None;
        self.relayout_if_extent_changed(env)
    }

    /// Host callback for a finished animated move. Stale tickets (cancelled
    /// or superseded) are ignored; a live ticket commits its target, returns
    /// the item to idle, and may settle the pass.
    pub fn transition_finished(&mut self, ticket: TransitionTicket) {
        let Some(id) = self.in_flight.remove(&ticket) else {
            return;
        };
        if let Some(item) = self.items.iter_mut().find(|i| i.id() == id)
            && let TransitionState::Transitioning { ticket: live, target } = item.state()
            && live == ticket
        {
            item.commit(target);
            self.events.push(LayoutEvent::ItemPositioned { item: id });
        }
        if self.phase == LayoutPhase::Settling && self.in_flight.is_empty() {
            self.settle();
        }
    }

    /// Force every in-flight item to its target and idle.
    ///
    /// Fallback for hosts whose completion signal cannot arrive; the engine
    /// must never deadlock waiting on a transition that cannot complete.
    pub fn flush_transitions(&mut self) {
        let mut positioned = Vec::new();
        for item in &mut self.items {
            if let TransitionState::Transitioning { target, .. } = item.state() {
                item.commit(target);
                positioned.push(item.id());
            }
        }
        self.in_flight.clear();
        for id in positioned {
            self.events.push(LayoutEvent::ItemPositioned { item: id });
        }
        if self.phase == LayoutPhase::Settling {
            self.settle();
        }
    }

    /// Switch the active strategy. Takes effect at the next pass; fails on an
    /// unregistered name without touching current state.
    pub fn set_mode(&mut self, mode: &str) -> BrickworkResult<()> {
        self.strategy = self.registry.create(mode)?;
        self.mode = mode.to_string();
        Ok(())
    }

    /// Drain queued events, oldest first.
    pub fn take_events(&mut self) -> Vec<LayoutEvent> {
        std::mem::take(&mut self.events)
    }

    /// Active strategy name.
    pub fn mode(&self) -> &str {
        &self.mode
    }

    /// Current phase of the layout pass.
    pub fn phase(&self) -> LayoutPhase {
        self.phase
    }

    /// Items in insertion order, ignored ones included.
    pub fn items(&self) -> &[LayoutItem] {
        &self.items
    }

    /// Look up an item by engine handle.
    pub fn item(&self, id: ItemId) -> Option<&LayoutItem> {
        self.items.iter().find(|i| i.id() == id)
    }

    /// Look up an item by host element handle.
    pub fn item_for_element(&self, element: ElementId) -> Option<&LayoutItem> {
        let id = *self.by_element.get(&element)?;
        self.item(id)
    }

    /// Container size as of the last pass (fit-width adjusted).
    pub fn container_size(&self) -> Size {
        self.container_size
    }

    /// Content size reported by the strategy at the last settle.
    pub fn content_size(&self) -> Size {
        self.content_size
    }

    /// Snapshot of committed positions for non-ignored items.
    pub fn placements(&self) -> Vec<ItemPlacement> {
        self.items
            .iter()
            .filter(|i| !i.is_ignored())
            .map(|i| ItemPlacement {
                item: i.id(),
                element: i.element(),
                position: i.position(),
                percent: self.options.percent_position.then(|| {
                    Point::new(
                        safe_ratio(i.position().x, self.container_size.width),
                        safe_ratio(i.position().y, self.container_size.height),
                    )
                }),
            })
            .collect()
    }

    fn set_ignored(&mut self, element: ElementId, ignored: bool) {
        if let Some(&id) = self.by_element.get(&element)
            && let Some(item) = self.items.iter_mut().find(|i| i.id() == id)
        {
            item.set_ignored(ignored);
        }
    }

    /// Resolve the cell size fallback chain: explicit option, first
    /// non-ignored item's outer extent, container extent. Never errors.
    fn strategy_context(&self) -> StrategyContext {
        let horizontal = self.options.is_horizontal;
        let explicit = if horizontal {
            self.options.row_height
        } else {
            self.options.column_width
        };
        let mut cell = explicit.unwrap_or(0.0);
        if cell <= 0.0 {
            cell = self
                .items
                .iter()
                .find(|i| !i.is_ignored())
                .map(|i| {
                    let b = i.element_box();
                    if horizontal { b.outer_height } else { b.outer_width }
                })
                .unwrap_or(0.0);
        }
        if cell <= 0.0 {
            cell = self.relevant_extent(self.container_size);
        }
        if cell <= 0.0 || !cell.is_finite() {
            tracing::warn!("cell size unresolvable; using 1");
            cell = 1.0;
        }
        StrategyContext {
            container: self.container_size,
            cell_size: cell,
            column_width: self.options.column_width,
            row_height: self.options.row_height,
            gutter: self.options.gutter,
            horizontal,
            fit_width: self.options.is_fit_width,
        }
    }

    fn relevant_extent(&self, size: Size) -> f64 {
        if self.options.is_horizontal {
            size.height
        } else {
            size.width
        }
    }

    fn adjusted_target(&self, item: &LayoutItem, raw: Point) -> Point {
        let b = item.element_box();
        let x = if self.options.is_origin_left {
            raw.x
        } else {
            self.container_size.width - (raw.x + b.outer_width)
        };
        let y = if self.options.is_origin_top {
            raw.y
        } else {
            self.container_size.height - (raw.y + b.outer_height)
        };
        Point::new(x, y)
    }

    /// Route one computed target through the per-item transition rules:
    /// no-op on an unchanged position, supersede an in-flight move toward a
    /// different target, animate when possible, commit synchronously
    /// otherwise.
    fn apply_target(
        &mut self,
        env: &mut dyn Environment,
        id: ItemId,
        target: Point,
        stagger_index: &mut u32,
    ) {
        let Some(idx) = self.items.iter().position(|i| i.id() == id) else {
            return;
        };
        let element = self.items[idx].element();

        match self.items[idx].state() {
            TransitionState::Transitioning { ticket, target: old } => {
                if old == target {
                    // already moving there; keep the in-flight transition
                    return;
                }
                env.cancel_transition(element, ticket);
                self.in_flight.remove(&ticket);
                self.items[idx].clear_transition();
            }
            TransitionState::Idle => {
                if self.items[idx].has_position() && self.items[idx].position() == target {
                    self.events.push(LayoutEvent::ItemPositioned { item: id });
                    return;
                }
            }
        }

        // First placements are never animated; neither is anything when the
        // duration is zero.
        let animate = self.options.transition_duration_ms > 0 && self.items[idx].has_position();
        if animate {
            let ticket = TransitionTicket(self.next_ticket);
            self.next_ticket += 1;
            let request = TransitionRequest {
                from: self.items[idx].position(),
                to: target,
                duration: Duration::from_millis(self.options.transition_duration_ms),
                delay: Duration::from_millis(
                    self.options.stagger_ms * u64::from(*stagger_index),
                ),
            };
            if env.begin_transition(element, ticket, &request) {
                self.items[idx].begin_transition(ticket, target);
                self.in_flight.insert(ticket, id);
                *stagger_index += 1;
                return;
            }
        }

        self.items[idx].commit(target);
        self.events.push(LayoutEvent::ItemPositioned { item: id });
    }

    fn relayout_if_extent_changed(&mut self, env: &mut dyn Environment) -> BrickworkResult<()> {
        let Some(b) = env.measure(self.container) else {
            tracing::warn!("container not measurable on resize; skipping");
            return Ok(());
        };
        let extent = self.relevant_extent(Size::new(b.width, b.height));
        if Some(extent) == self.last_extent {
            tracing::debug!(extent, "resize: relevant extent unchanged; skipping layout");
            return Ok(());
        }
        self.layout(env)
    }

    fn drop_vanished(&mut self, env: &mut dyn Environment, element: ElementId) {
        tracing::warn!(?element, "element no longer measurable; dropping item");
        if let Some(id) = self.by_element.remove(&element)
            && let Some(idx) = self.items.iter().position(|i| i.id() == id)
        {
            let item = self.items.remove(idx);
            if let TransitionState::Transitioning { ticket, .. } = item.state() {
                env.cancel_transition(element, ticket);
                self.in_flight.remove(&ticket);
            }
        }
    }

    fn resize_container(&mut self) {
        self.content_size = self.strategy.content_size();
        if self.options.is_fit_width && !self.options.is_horizontal {
            self.container_size.width = self.content_size.width;
        }
    }

    fn settle(&mut self) {
        self.resize_container();
        self.events.push(LayoutEvent::LayoutComplete {
            items: std::mem::take(&mut self.pass_items),
        });
        self.phase = LayoutPhase::Idle;
    }
}

impl std::fmt::Debug for LayoutEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutEngine")
            .field("container", &self.container)
            .field("mode", &self.mode)
            .field("items", &self.items.len())
            .field("stamps", &self.stamps.len())
            .field("phase", &self.phase)
            .field("pass", &self.pass)
            .finish()
    }
}

fn safe_ratio(value: f64, extent: f64) -> f64 {
    if extent > 0.0 { value / extent } else { 0.0 }
}

#[cfg(test)]
#[path = "../tests/unit/engine.rs"]
mod tests;
