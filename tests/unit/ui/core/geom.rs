use super::*;

#[test]
fn rect_contains_is_inclusive_exclusive() {
    let r = Rect::new(10, 20, 3, 2); // x:10..13, y:20..22
    assert!(r.contains(Pos::new(10, 20)));
    assert!(r.contains(Pos::new(12, 21)));

    // Right/bottom edges are exclusive.
    assert!(!r.contains(Pos::new(13, 20)));
    assert!(!r.contains(Pos::new(12, 22)));

    // Outside.
    assert!(!r.contains(Pos::new(9, 20)));
    assert!(!r.contains(Pos::new(10, 19)));
}

#[test]
fn rect_empty_never_contains() {
    let r = Rect::new(0, 0, 0, 10);
    assert!(!r.contains(Pos::new(0, 0)));
    let r = Rect::new(0, 0, 10, 0);
    assert!(!r.contains(Pos::new(0, 0)));
}

#[test]
fn adjacent_rects_never_share_a_point() {
    let left = Rect::new(0, 0, 5, 3);
    let right = Rect::new(5, 0, 5, 3);
    for x in 0..10 {
        for y in 0..3 {
            let p = Pos::new(x, y);
            assert!(!(left.contains(p) && right.contains(p)), "{p:?}");
            assert!(left.contains(p) || right.contains(p), "{p:?}");
        }
    }
    assert!(!left.intersects(right));
}

#[test]
fn intersect_clips_and_reports_empty() {
    let a = Rect::new(0, 0, 10, 10);
    let b = Rect::new(5, 5, 10, 10);
    assert_eq!(a.intersect(b), Rect::new(5, 5, 5, 5));

    let c = Rect::new(20, 20, 2, 2);
    assert!(a.intersect(c).is_empty());
}

#[test]
fn inset_collapses_small_rects() {
    assert_eq!(Rect::new(0, 0, 10, 6).inset(1), Rect::new(1, 1, 8, 4));
    assert!(Rect::new(0, 0, 2, 6).inset(1).is_empty());
}
