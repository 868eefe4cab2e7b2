use desk_wm::geometry::{Point, Size};
use desk_wm::window::{
    Gesture, InteractionController, PointerEvent, PointerTarget, ResizeEdge, WindowPatch,
    WindowRegistry,
};

fn drag_by(dx: i32, dy: i32, start: Point) -> Point {
    let mut reg = WindowRegistry::new();
    let id = reg.open("files", "Files", ());
    reg.update(id, WindowPatch::position(start));
    let mut ctl = InteractionController::new();

    let grab = Point::new(start.x + 30, start.y + 12);
    ctl.handle(&mut reg, &PointerEvent::down(PointerTarget::TitleBar(id), grab));
    ctl.handle(
        &mut reg,
        &PointerEvent::moved(Point::new(grab.x + dx, grab.y + dy)),
    );
    ctl.handle(
        &mut reg,
        &PointerEvent::up(Point::new(grab.x + dx, grab.y + dy)),
    );
    assert!(ctl.gesture().is_idle());
    reg.get(id).map(|w| w.position()).expect("window present")
}

#[test]
fn drag_moves_window_by_pointer_delta() {
    assert_eq!(drag_by(40, -10, Point::new(100, 100)), Point::new(140, 90));
}

#[test]
fn drag_clamps_to_viewport_top() {
    assert_eq!(drag_by(40, -500, Point::new(100, 100)), Point::new(140, 0));
}

#[test]
fn drag_may_leave_through_the_left_edge() {
    assert_eq!(drag_by(-400, 0, Point::new(100, 100)), Point::new(-300, 100));
}

#[test]
fn drag_focuses_window() {
    let mut reg = WindowRegistry::new();
    let a = reg.open("a", "A", ());
    let b = reg.open("b", "B", ());
    let mut ctl = InteractionController::new();
    ctl.handle(
        &mut reg,
        &PointerEvent::down(PointerTarget::TitleBar(a), Point::new(120, 110)),
    );
    assert_eq!(reg.active_id(), Some(a));
    let z = |id| reg.get(id).map(|w| w.z_index()).expect("window present");
    assert!(z(a) > z(b));
}

#[test]
fn each_move_produces_one_update_in_order() {
    let mut reg = WindowRegistry::new();
    let id = reg.open("a", "A", ());
    let mut ctl = InteractionController::new();
    ctl.handle(
        &mut reg,
        &PointerEvent::down(PointerTarget::TitleBar(id), Point::new(100, 100)),
    );
    let mut seen = Vec::new();
    for step in 1..=5 {
        let p = Point::new(100 + step * 10, 100 + step * 5);
        assert!(ctl.handle(&mut reg, &PointerEvent::moved(p)));
        seen.push(reg.get(id).map(|w| w.position()).expect("window present"));
    }
    assert_eq!(
        seen,
        vec![
            Point::new(110, 105),
            Point::new(120, 110),
            Point::new(130, 115),
            Point::new(140, 120),
            Point::new(150, 125),
        ]
    );
}

#[test]
fn left_edge_resize_grows_width_and_shifts_origin() {
    let mut reg = WindowRegistry::new();
    let id = reg.open("a", "A", ());
    let mut ctl = InteractionController::new();

    let start = Point::new(100, 400);
    ctl.handle(
        &mut reg,
        &PointerEvent::down(PointerTarget::ResizeHandle(id, ResizeEdge::Left), start),
    );
    assert!(matches!(ctl.gesture(), Gesture::Resizing { .. }));
    ctl.handle(&mut reg, &PointerEvent::moved(Point::new(50, 400)));
    ctl.handle(&mut reg, &PointerEvent::up(Point::new(50, 400)));

    let window = reg.get(id).expect("window present");
    assert_eq!(window.size(), Size::new(850, 600));
    assert_eq!(window.position(), Point::new(50, 100));
}

#[test]
fn corner_resize_never_goes_below_minimum() {
    let mut reg = WindowRegistry::new();
    let id = reg.open("a", "A", ());
    let mut ctl = InteractionController::new();
    ctl.handle(
        &mut reg,
        &PointerEvent::down(
            PointerTarget::ResizeHandle(id, ResizeEdge::BottomRight),
            Point::new(899, 699),
        ),
    );
    ctl.handle(&mut reg, &PointerEvent::moved(Point::new(0, 0)));
    let window = reg.get(id).expect("window present");
    assert_eq!(window.size(), Size::new(300, 200));
    assert_eq!(window.position(), Point::new(100, 100));
}

#[test]
fn pointer_up_anywhere_ends_resize() {
    let mut reg = WindowRegistry::new();
    let id = reg.open("a", "A", ());
    let mut ctl = InteractionController::new();
    ctl.handle(
        &mut reg,
        &PointerEvent::down(
            PointerTarget::ResizeHandle(id, ResizeEdge::Bottom),
            Point::new(400, 699),
        ),
    );
    ctl.handle(&mut reg, &PointerEvent::moved(Point::new(400, 749)));
    assert!(ctl.handle(&mut reg, &PointerEvent::up(Point::new(-1000, -1000))));
    assert!(ctl.gesture().is_idle());
    // moves after release do nothing
    ctl.handle(&mut reg, &PointerEvent::moved(Point::new(400, 900)));
    assert_eq!(reg.get(id).map(|w| w.size()), Some(Size::new(800, 650)));
}
