use std::time::Duration;

use super::*;
use kurbo::Point;

#[test]
fn measures_registered_boxes_only() {
    let mut env = StaticEnvironment::new();
    env.set_size(ElementId(1), 100.0, 50.0, Margins::default());

    let b = env.measure(ElementId(1)).unwrap();
    assert_eq!((b.width, b.height), (100.0, 50.0));
    assert_eq!((b.outer_width, b.outer_height), (100.0, 50.0));
    assert!(env.measure(ElementId(2)).is_none());

    env.remove(ElementId(1));
    assert!(env.measure(ElementId(1)).is_none());
}

#[test]
fn margins_inflate_the_outer_box() {
    let mut env = StaticEnvironment::new();
    let margins = Margins {
        left: 5.0,
        right: 5.0,
        top: 10.0,
        bottom: 0.0,
    };
    env.set_size(ElementId(1), 100.0, 50.0, margins);
    let b = env.measure(ElementId(1)).unwrap();
    assert_eq!((b.outer_width, b.outer_height), (110.0, 60.0));
}

#[test]
fn transitions_are_refused_unless_animating() {
    let request = TransitionRequest {
        from: Point::ZERO,
        to: Point::new(10.0, 0.0),
        duration: Duration::from_millis(400),
        delay: Duration::ZERO,
    };

    let mut env = StaticEnvironment::new();
    assert!(!env.begin_transition(ElementId(1), TransitionTicket(0), &request));
    assert!(env.started().is_empty());

    let mut env = StaticEnvironment::new().animate(true);
    assert!(env.begin_transition(ElementId(1), TransitionTicket(0), &request));
    assert_eq!(env.started().len(), 1);
    env.cancel_transition(ElementId(1), TransitionTicket(0));
    assert_eq!(env.cancelled(), &[(ElementId(1), TransitionTicket(0))]);
}

#[test]
fn timers_are_refused_unless_enabled() {
    let mut env = StaticEnvironment::new();
    assert!(!env.schedule_timer(TimerToken(0), Duration::from_millis(100)));

    let mut env = StaticEnvironment::new().timers(true);
    assert!(env.schedule_timer(TimerToken(0), Duration::from_millis(100)));
    assert_eq!(env.scheduled(), &[(TimerToken(0), Duration::from_millis(100))]);
    env.cancel_timer(TimerToken(0));
    assert_eq!(env.cancelled_timers(), &[TimerToken(0)]);
}
