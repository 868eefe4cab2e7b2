use desk_wm::geometry::{Point, Size};
use desk_wm::window::{WindowPatch, WindowRegistry};

#[test]
fn open_three_windows_staggers_and_stacks() {
    let mut reg = WindowRegistry::new();
    let a = reg.open("calculator", "Calculator", ());
    let b = reg.open("terminal", "Terminal", ());
    let c = reg.open("weather", "Weather", ());

    let pos = |id| reg.get(id).map(|w| w.position());
    assert_eq!(pos(a), Some(Point::new(100, 100)));
    assert_eq!(pos(b), Some(Point::new(150, 150)));
    assert_eq!(pos(c), Some(Point::new(200, 200)));

    let z = |id| reg.get(id).map(|w| w.z_index()).expect("window present");
    assert!(z(a) < z(b));
    assert!(z(b) < z(c));
    assert_eq!(reg.active_id(), Some(c));

    for window in reg.windows() {
        assert_eq!(window.size(), Size::new(800, 600));
        assert!(!window.is_minimized());
        assert!(!window.is_maximized());
    }
}

#[test]
fn ids_are_pairwise_distinct() {
    let mut reg = WindowRegistry::new();
    let mut ids = Vec::new();
    for round in 0..50 {
        let id = reg.open("app", format!("Window {round}"), round);
        if round % 3 == 0 {
            reg.close(id);
        }
        ids.push(id);
    }
    let mut sorted = ids.clone();
    sorted.sort();
    sorted.dedup();
    assert_eq!(sorted.len(), ids.len());
}

#[test]
fn operations_on_closed_window_are_no_ops() {
    let mut reg = WindowRegistry::new();
    let a = reg.open("a", "A", ());
    let b = reg.open("b", "B", ());
    reg.close(a);

    let snapshot = |reg: &WindowRegistry<()>| {
        reg.windows()
            .map(|w| {
                (
                    w.id(),
                    w.position(),
                    w.size(),
                    w.z_index(),
                    w.is_minimized(),
                    w.is_maximized(),
                )
            })
            .collect::<Vec<_>>()
    };
    let before = snapshot(&reg);
    let active = reg.active_id();

    reg.focus(a);
    reg.minimize(a);
    reg.maximize(a);
    reg.update(
        a,
        WindowPatch::size(Size::new(1000, 1000)).with_position(Point::new(1, 1)),
    );
    reg.close(a);

    assert_eq!(snapshot(&reg), before);
    assert_eq!(reg.active_id(), active);
    assert_eq!(active, Some(b));
}

#[test]
fn update_always_respects_minimum_size() {
    let mut reg = WindowRegistry::new();
    let id = reg.open("a", "A", ());
    for (w, h) in [(1, 1), (299, 1000), (1000, 199), (300, 200), (-1, -1)] {
        reg.update(id, WindowPatch::size(Size::new(w, h)));
        let size = reg.get(id).map(|w| w.size()).expect("window present");
        assert!(size.width >= 300, "width {} for request {w}", size.width);
        assert!(size.height >= 200, "height {} for request {h}", size.height);
    }
}

#[test]
fn later_focus_wins_the_top() {
    let mut reg = WindowRegistry::new();
    let a = reg.open("a", "A", ());
    let b = reg.open("b", "B", ());
    reg.focus(b);
    reg.focus(a);
    reg.focus(b);
    let z = |id| reg.get(id).map(|w| w.z_index()).expect("window present");
    assert!(z(b) > z(a));
    assert_eq!(reg.active_id(), Some(b));
}

#[test]
fn maximize_twice_is_identity() {
    let mut reg = WindowRegistry::new();
    let id = reg.open("a", "A", ());
    reg.update(id, WindowPatch::position(Point::new(333, 44)));
    let before = reg.get(id).map(|w| (w.position(), w.size(), w.is_maximized()));

    reg.maximize(id);
    let mid = reg.get(id).map(|w| (w.position(), w.size(), w.is_maximized()));
    assert_eq!(
        mid,
        before.map(|(p, s, _)| (p, s, true)),
        "maximize keeps stored geometry"
    );

    reg.maximize(id);
    let after = reg.get(id).map(|w| (w.position(), w.size(), w.is_maximized()));
    assert_eq!(after, before);
}

#[test]
fn closing_active_window_may_hand_focus_to_minimized_window() {
    let mut reg = WindowRegistry::new();
    let a = reg.open("a", "A", ());
    let b = reg.open("b", "B", ());
    reg.focus(a);
    reg.minimize(b);
    reg.close(a);
    assert_eq!(reg.active_id(), Some(b));
    assert_eq!(reg.get(b).map(|w| w.is_minimized()), Some(true));
}

#[test]
fn paint_order_follows_z_and_skips_minimized() {
    let mut reg = WindowRegistry::new();
    let a = reg.open("a", "A", ());
    let b = reg.open("b", "B", ());
    let c = reg.open("c", "C", ());
    reg.focus(a);
    reg.minimize(b);
    let order: Vec<_> = reg
        .visible_in_stacking_order()
        .iter()
        .map(|w| w.id())
        .collect();
    assert_eq!(order, vec![c, a]);
    let running: Vec<_> = reg.windows().map(|w| w.id()).collect();
    assert_eq!(running, vec![a, b, c]);
}
