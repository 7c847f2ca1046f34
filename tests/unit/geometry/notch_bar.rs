use super::*;

const W: f64 = 390.0;

fn notch() -> Rect {
    Rect::new(117.0, 0.0, 273.0, 33.0)
}

fn traced(bar: &Bar) -> (String, f64) {
    let mut t = TracePath::new();
    bar.trace(&mut t);
    t.finish()
}

#[test]
fn straight_bar_is_one_line_at_padding() {
    let (d, len) = traced(&Bar::straight(W, 0.0));
    assert_eq!(d, "M 0,0 L 390,0");
    assert_eq!(len, W);

    let (d, _) = traced(&Bar::straight(W, 6.0));
    assert_eq!(d, "M 0,6 L 390,6");
}

#[test]
fn notched_bar_traces_full_detour() {
    let bar = NotchBar::new(W, notch(), Some(10.0), 0.0);
    assert_eq!(bar.left, 117.0);
    assert_eq!(bar.right, 273.0);
    assert_eq!(bar.radius, 10.0);

    let (d, _) = traced(&Bar::Notched(bar));
    assert_eq!(
        d,
        "M 0,0 L 107,0 A 10,10 0 0,1 117,10 L 117,23 A 10,10 0 0,0 127,33 \
         L 263,33 A 10,10 0 0,0 273,23 L 273,10 A 10,10 0 0,1 283,0 L 390,0"
    );
}

#[test]
fn traced_length_matches_closed_form() {
    for (padding, radius) in [(0.0, Some(10.0)), (4.0, Some(20.0)), (-3.0, None), (12.0, Some(2.0))] {
        let bar = NotchBar::new(W, notch(), radius, padding);
        let (_, len) = traced(&Bar::Notched(bar));
        assert!(
            (len - bar.perimeter()).abs() < 1e-9,
            "padding={padding}: {len} vs {}",
            bar.perimeter()
        );
    }
}

#[test]
fn radius_is_clamped_by_depth_and_width() {
    let bar = NotchBar::new(W, Rect::new(100.0, 0.0, 300.0, 20.0), Some(40.0), 0.0);
    assert_eq!(bar.radius, 10.0);
    let bar = NotchBar::new(W, Rect::new(100.0, 0.0, 110.0, 200.0), Some(40.0), 0.0);
    assert_eq!(bar.radius, 5.0);
}

#[test]
fn crossing_walls_are_swapped() {
    // Negative padding larger than half the width makes the walls cross.
    let bar = NotchBar::new(W, Rect::new(180.0, 0.0, 190.0, 30.0), None, -8.0);
    assert!(bar.left <= bar.right);
    assert_eq!(bar.left, 182.0);
    assert_eq!(bar.right, 188.0);
    assert_eq!(bar.radius, 0.0);
}

#[test]
fn notch_at_left_edge_skips_run_in() {
    let bar = NotchBar::new(W, Rect::new(0.0, 0.0, 80.0, 30.0), Some(8.0), 0.0);
    assert!(!bar.has_run_in());
    let (d, len) = traced(&Bar::Notched(bar));
    assert!(d.starts_with("M 0,0 L 0,22 A 8,8 0 0,0 8,30"));
    assert!((len - bar.perimeter()).abs() < 1e-9);
}

#[test]
fn notch_at_right_edge_skips_run_out() {
    let bar = NotchBar::new(W, Rect::new(320.0, 0.0, 390.0, 30.0), Some(8.0), 0.0);
    assert!(!bar.has_run_out());
    let (d, len) = traced(&Bar::Notched(bar));
    assert!(d.ends_with("A 8,8 0 0,0 390,22 L 390,0"));
    assert!((len - bar.perimeter()).abs() < 1e-9);
}

#[test]
fn perimeter_grows_with_padding() {
    let mut prev = f64::NEG_INFINITY;
    for step in 0..40 {
        let padding = f64::from(step) * 0.5;
        let p = NotchBar::new(W, notch(), Some(20.0), padding).perimeter();
        assert!(p > prev, "padding={padding}: {p} <= {prev}");
        prev = p;
    }
}

#[test]
fn lowest_y_tracks_detour_bottom() {
    let bar = Bar::Notched(NotchBar::new(W, notch(), Some(10.0), 5.0));
    assert_eq!(bar.lowest_y(), 5.0 + 33.0 + 5.0);
    assert_eq!(Bar::straight(W, 3.0).lowest_y(), 3.0);
}

#[test]
fn notch_near_left_edge_still_starts_at_screen_edge() {
    let bar = NotchBar::new(W, Rect::new(6.0, 0.0, 106.0, 30.0), Some(10.0), 0.0);
    assert!(bar.has_run_in());
    assert_eq!(bar.radius, 10.0);
    assert_eq!(bar.entry_radius(), 6.0);

    let (d, len) = traced(&Bar::Notched(bar));
    assert_eq!(
        d,
        "M 0,0 A 6,6 0 0,1 6,6 L 6,20 A 10,10 0 0,0 16,30 \
         L 96,30 A 10,10 0 0,0 106,20 L 106,10 A 10,10 0 0,1 116,0 L 390,0"
    );
    assert!((len - bar.perimeter()).abs() < 1e-9);
}

#[test]
fn notch_near_right_edge_still_reaches_screen_edge() {
    let bar = NotchBar::new(W, Rect::new(284.0, 0.0, 384.0, 30.0), Some(10.0), 0.0);
    assert!(bar.has_run_out());
    assert_eq!(bar.exit_radius(), 6.0);

    let (d, len) = traced(&Bar::Notched(bar));
    assert!(d.starts_with("M 0,0 L 274,0 A 10,10 0 0,1 284,10"));
    assert!(d.ends_with("A 10,10 0 0,0 384,20 L 384,6 A 6,6 0 0,1 390,0"));
    assert!((len - bar.perimeter()).abs() < 1e-9);
}

#[test]
fn entry_corner_shrinks_to_room_at_edge() {
    let bar = NotchBar::new(W, Rect::new(8.0, 0.0, 108.0, 40.0), Some(20.0), 0.0);
    assert_eq!(bar.entry_radius(), 8.0);
    let (d, len) = traced(&Bar::Notched(bar));
    assert!(d.starts_with("M 0,0 A 8,8 0 0,1 8,8 L 8,20"));
    assert!((len - bar.perimeter()).abs() < 1e-9);
}
