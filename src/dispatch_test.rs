use std::cell::RefCell;
use std::rc::Rc;

use super::*;
use crate::test_support::FakeSurface;

fn recorder() -> (Rc<RefCell<Vec<(i32, i32, bool)>>>, MouseMoveFn) {
    let seen = Rc::new(RefCell::new(Vec::new()));
    let seen_in = Rc::clone(&seen);
    let mousemove: MouseMoveFn = Box::new(move |x, y, clicked| seen_in.borrow_mut().push((x, y, clicked)));
    (seen, mousemove)
}

#[test]
fn absent_capability_creates_no_subscription() {
    let surface = FakeSurface::with_container(100.0, 100.0);
    let sub = bind_input(&surface, None).unwrap();
    assert!(sub.is_none());
    assert_eq!(surface.pointer_listeners(), 0);
}

#[test]
fn present_capability_subscribes_once() {
    let surface = FakeSurface::with_container(100.0, 100.0);
    let (_seen, mousemove) = recorder();
    let sub = bind_input(&surface, Some(mousemove)).unwrap();
    assert!(sub.is_some());
    assert_eq!(surface.pointer_listeners(), 1);
}

#[test]
fn activity_is_forwarded_with_primary_decoded() {
    let surface = FakeSurface::with_container(100.0, 100.0);
    let (seen, mousemove) = recorder();
    let _sub = bind_input(&surface, Some(mousemove)).unwrap();

    surface.move_pointer(10, 20, 1);

    assert_eq!(*seen.borrow(), vec![(10, 20, true)]);
}

#[test]
fn every_activity_yields_exactly_one_invocation() {
    let surface = FakeSurface::with_container(100.0, 100.0);
    let (seen, mousemove) = recorder();
    let _sub = bind_input(&surface, Some(mousemove)).unwrap();

    surface.move_pointer(1, 1, 0);
    surface.move_pointer(1, 1, 0);
    surface.move_pointer(2, 3, 2);
    surface.move_pointer(4, 5, 3);

    assert_eq!(*seen.borrow(), vec![(1, 1, false), (1, 1, false), (2, 3, false), (4, 5, true)]);
}

#[test]
fn dropping_subscription_stops_forwarding() {
    let surface = FakeSurface::with_container(100.0, 100.0);
    let (seen, mousemove) = recorder();
    let sub = bind_input(&surface, Some(mousemove)).unwrap();

    surface.move_pointer(1, 2, 0);
    drop(sub);
    surface.move_pointer(3, 4, 0);

    assert_eq!(seen.borrow().len(), 1);
    assert_eq!(surface.pointer_listeners(), 0);
}

#[test]
fn rejected_registration_is_an_error() {
    let surface = FakeSurface::with_container(100.0, 100.0);
    surface.reject_subscriptions();
    let (_seen, mousemove) = recorder();
    let err = bind_input(&surface, Some(mousemove)).unwrap_err();
    assert!(matches!(err, InitError::Subscribe(_)));
}

#[test]
fn pointer_binding_does_not_need_a_container() {
    let surface = FakeSurface::detached();
    let (seen, mousemove) = recorder();
    let _sub = bind_input(&surface, Some(mousemove)).unwrap();
    surface.move_pointer(5, 6, 1);
    assert_eq!(*seen.borrow(), vec![(5, 6, true)]);
}
