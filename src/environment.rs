use std::time::Duration;

use kurbo::Point;

/// Deterministic table-driven environment for tests and headless solving.
pub mod fixture;

/// Opaque handle for a host-owned element.
///
/// Minted by the host; the engine never interprets the value. All
/// engine-private state keyed by an element lives inside the engine, never
/// on the host's objects.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct ElementId(pub u64);

/// Engine-minted handle identifying one in-flight animated move.
///
/// A completion that arrives with a ticket the engine no longer holds is
/// stale and is ignored; forgetting the ticket is the cancellation mechanism.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TransitionTicket(pub u64);

/// Engine-minted handle identifying one scheduled timer.
///
/// Same staleness rule as [`TransitionTicket`]: a firing for a token the
/// engine no longer holds is ignored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub struct TimerToken(pub u64);

/// Measured margins of an element, in layout units.
#[derive(Clone, Copy, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Margins {
    /// Left margin.
    #[serde(default)]
    pub left: f64,
    /// Right margin.
    #[serde(default)]
    pub right: f64,
    /// Top margin.
    #[serde(default)]
    pub top: f64,
    /// Bottom margin.
    #[serde(default)]
    pub bottom: f64,
}

/// The result of measuring an element.
///
/// `x`/`y` are the element's current offset inside the container, in
/// top-left-origin container coordinates (stamped obstacles are carved out of
/// free space at this offset). `outer_width`/`outer_height` are the packing
/// unit: the element's box including its margins.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct ElementBox {
    /// Offset from the container's left edge.
    pub x: f64,
    /// Offset from the container's top edge.
    pub y: f64,
    /// Border-box width.
    pub width: f64,
    /// Border-box height.
    pub height: f64,
    /// Width including margins; the horizontal packing unit.
    pub outer_width: f64,
    /// Height including margins; the vertical packing unit.
    pub outer_height: f64,
    /// Measured margins.
    pub margins: Margins,
}

impl ElementBox {
    /// Build a box from border-box extents and margins, deriving the outer
    /// extents.
    pub fn from_size(width: f64, height: f64, margins: Margins) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width,
            height,
            outer_width: width + margins.left + margins.right,
            outer_height: height + margins.top + margins.bottom,
            margins,
        }
    }
}

/// One animated move the engine asks the environment to execute.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransitionRequest {
    /// Current committed position.
    pub from: Point,
    /// Target position.
    pub to: Point,
    /// Requested transition duration.
    pub duration: Duration,
    /// Advisory start delay (stagger); the environment may ignore it.
    pub delay: Duration,
}

/// Everything the engine consumes from its host.
///
/// The engine never measures, animates, or schedules anything itself; it
/// issues requests through this trait and is re-entered through
/// [`LayoutEngine::transition_finished`](crate::LayoutEngine::transition_finished)
/// and [`LayoutEngine::timer_fired`](crate::LayoutEngine::timer_fired).
pub trait Environment {
    /// Measure an element. `None` means the handle no longer resolves to a
    /// live element; the engine drops the item and continues.
    fn measure(&mut self, element: ElementId) -> Option<ElementBox>;

    /// Start an animated move. Returning `false` means animation is
    /// unsupported or disabled; the engine then commits the move
    /// synchronously instead.
    ///
    /// On completion the host must call
    /// [`LayoutEngine::transition_finished`](crate::LayoutEngine::transition_finished)
    /// with `ticket`, exactly once.
    fn begin_transition(
        &mut self,
        element: ElementId,
        ticket: TransitionTicket,
        request: &TransitionRequest,
    ) -> bool;

    /// The ticket's target has been superseded; the host may stop the visual
    /// move. Its completion, if it still fires, will be ignored.
    fn cancel_transition(&mut self, _element: ElementId, _ticket: TransitionTicket) {}

    /// Ask the host to call
    /// [`LayoutEngine::timer_fired`](crate::LayoutEngine::timer_fired) with
    /// `token` after `delay`. Returning `false` means the host has no timer
    /// capability; the engine then reacts immediately instead of deadlocking.
    fn schedule_timer(&mut self, _token: TimerToken, _delay: Duration) -> bool {
        false
    }

    /// Cancel a previously scheduled timer. A firing that arrives anyway is
    /// ignored by token staleness.
    fn cancel_timer(&mut self, _token: TimerToken) {}
}
