use kurbo::Point;

use crate::environment::{ElementBox, ElementId, TransitionTicket};

/// Engine-issued handle for a [`LayoutItem`]. Auto-incrementing, never reused
/// within one engine.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ItemId(pub u64);

/// Per-item transition state.
///
/// At most one target is live per item: a superseding move cancels the old
/// ticket before issuing a new one, so the old target can never be committed
/// after the new one starts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TransitionState {
    /// No pending visual move.
    Idle,
    /// An animated move toward `target` is in flight.
    Transitioning {
        /// Ticket identifying the in-flight move.
        ticket: TransitionTicket,
        /// Position committed when the move completes.
        target: Point,
    },
}

/// Mutable per-element layout state.
///
/// Owned exclusively by the engine; the position is mutated only inside a
/// layout batch or a transition completion.
#[derive(Clone, Debug)]
pub struct LayoutItem {
    id: ItemId,
    element: ElementId,
    element_box: ElementBox,
    position: Point,
    has_position: bool,
    ignored: bool,
    state: TransitionState,
}

impl LayoutItem {
    pub(crate) fn new(id: ItemId, element: ElementId, element_box: ElementBox) -> Self {
        Self {
            id,
            element,
            element_box,
            position: Point::ZERO,
            has_position: false,
            ignored: false,
            state: TransitionState::Idle,
        }
    }

    /// Engine-issued item handle.
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Host element this item tracks.
    pub fn element(&self) -> ElementId {
        self.element
    }

    /// Last measurement taken for the element.
    pub fn element_box(&self) -> &ElementBox {
        &self.element_box
    }

    /// Current committed position (top-left of the outer box).
    pub fn position(&self) -> Point {
        self.position
    }

    /// False until the first layout pass places the item.
    pub fn has_position(&self) -> bool {
        self.has_position
    }

    /// Ignored items stay in the collection but are skipped by layout.
    pub fn is_ignored(&self) -> bool {
        self.ignored
    }

    /// Current transition state.
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// True while an animated move is in flight.
    pub fn is_transitioning(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning { .. })
    }

    pub(crate) fn set_element_box(&mut self, element_box: ElementBox) {
        self.element_box = element_box;
    }

    pub(crate) fn set_ignored(&mut self, ignored: bool) {
        self.ignored = ignored;
    }

    /// Commit a position synchronously, staying `Idle`.
    pub(crate) fn commit(&mut self, target: Point) {
        self.position = target;
        self.has_position = true;
        self.state = TransitionState::Idle;
    }

    /// Enter `Transitioning` toward `target` under `ticket`.
    pub(crate) fn begin_transition(&mut self, ticket: TransitionTicket, target: Point) {
        self.state = TransitionState::Transitioning { ticket, target };
    }

    /// Forget the in-flight move without committing its target.
    pub(crate) fn clear_transition(&mut self) {
        self.state = TransitionState::Idle;
    }
}

#[cfg(test)]
#[path = "../tests/unit/item.rs"]
mod tests;
