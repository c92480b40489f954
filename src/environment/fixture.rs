use std::collections::HashMap;
use std::time::Duration;

use crate::environment::{
    ElementBox, ElementId, Environment, Margins, TimerToken, TransitionRequest, TransitionTicket,
};

/// Table-driven [`Environment`] with no real timers or animation.
///
/// Backed by a map of pre-measured element boxes. By default every
/// `begin_transition` returns `false` (the engine takes the synchronous
/// path) and timers are unavailable. Tests opt into recording mode with
/// [`StaticEnvironment::animate`] / [`StaticEnvironment::timers`] and then
/// drive completions and firings by hand.
#[derive(Debug, Default)]
pub struct StaticEnvironment {
    boxes: HashMap<ElementId, ElementBox>,
    animate: bool,
    timers: bool,
    started: Vec<(ElementId, TransitionTicket, TransitionRequest)>,
    cancelled: Vec<(ElementId, TransitionTicket)>,
    scheduled: Vec<(TimerToken, Duration)>,
    cancelled_timers: Vec<TimerToken>,
}

impl StaticEnvironment {
    /// Empty environment: nothing measurable, no animation, no timers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register (or replace) the measurement for an element.
    pub fn set_box(&mut self, element: ElementId, element_box: ElementBox) {
        self.boxes.insert(element, element_box);
    }

    /// Register an element by border-box size and margins at offset (0, 0).
    pub fn set_size(&mut self, element: ElementId, width: f64, height: f64, margins: Margins) {
        self.set_box(element, ElementBox::from_size(width, height, margins));
    }

    /// Remove an element so subsequent measurements fail.
    pub fn remove(&mut self, element: ElementId) {
        self.boxes.remove(&element);
    }

    /// Enable recording animation: `begin_transition` returns `true` and the
    /// (element, ticket, request) triple is recorded for the test to complete
    /// manually.
    pub fn animate(mut self, on: bool) -> Self {
        self.animate = on;
        self
    }

    /// Enable recording timers: `schedule_timer` returns `true` and the
    /// (token, delay) pair is recorded for the test to fire manually.
    pub fn timers(mut self, on: bool) -> Self {
        self.timers = on;
        self
    }

    /// Transitions started so far, in request order.
    pub fn started(&self) -> &[(ElementId, TransitionTicket, TransitionRequest)] {
        &self.started
    }

    /// Drain the started-transition log.
    pub fn drain_started(&mut self) -> Vec<(ElementId, TransitionTicket, TransitionRequest)> {
        std::mem::take(&mut self.started)
    }

    /// Transitions cancelled so far.
    pub fn cancelled(&self) -> &[(ElementId, TransitionTicket)] {
        &self.cancelled
    }

    /// Timers scheduled so far.
    pub fn scheduled(&self) -> &[(TimerToken, Duration)] {
        &self.scheduled
    }

    /// Drain the scheduled-timer log.
    pub fn drain_scheduled(&mut self) -> Vec<(TimerToken, Duration)> {
        std::mem::take(&mut self.scheduled)
    }

    /// Timers cancelled so far.
    pub fn cancelled_timers(&self) -> &[TimerToken] {
        &self.cancelled_timers
    }
}

impl Environment for StaticEnvironment {
    fn measure(&mut self, element: ElementId) -> Option<ElementBox> {
        self.boxes.get(&element).copied()
    }

    fn begin_transition(
        &mut self,
        element: ElementId,
        ticket: TransitionTicket,
        request: &TransitionRequest,
    ) -> bool {
        if !self.animate {
            return false;
        }
        self.started.push((element, ticket, *request));
        true
    }

    fn cancel_transition(&mut self, element: ElementId, ticket: TransitionTicket) {
        self.cancelled.push((element, ticket));
    }

    fn schedule_timer(&mut self, token: TimerToken, delay: Duration) -> bool {
        if !self.timers {
            return false;
        }
        self.scheduled.push((token, delay));
        true
    }

    fn cancel_timer(&mut self, token: TimerToken) {
        self.cancelled_timers.push(token);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/environment/fixture.rs"]
mod tests;
