use super::*;

#[test]
fn split_top_clamps_to_height() {
    let r = Rect::new(2, 3, 10, 4);
    assert_eq!(
        r.split_top(1),
        (Rect::new(2, 3, 10, 1), Rect::new(2, 4, 10, 3))
    );
    assert_eq!(
        r.split_top(9),
        (Rect::new(2, 3, 10, 4), Rect::new(2, 7, 10, 0))
    );
}

#[test]
fn split_left_clamps_to_width() {
    let r = Rect::new(4, 1, 6, 2);
    assert_eq!(
        r.split_left(2),
        (Rect::new(4, 1, 2, 2), Rect::new(6, 1, 4, 2))
    );
    let (all, rest) = r.split_left(50);
    assert_eq!(all, r);
    assert!(rest.is_empty());
}

#[test]
fn take_left_skips_gap() {
    let r = Rect::new(0, 0, 10, 1);
    let (a, rest) = r.take_left(3, 1);
    assert_eq!(a, Rect::new(0, 0, 3, 1));
    assert_eq!(rest, Rect::new(4, 0, 6, 1));

    let (b, rest) = rest.take_left(8, 1);
    assert_eq!(b, Rect::new(4, 0, 6, 1));
    assert!(rest.is_empty());
}

#[test]
fn inset_x_keeps_height() {
    assert_eq!(Rect::new(0, 2, 10, 5).inset_x(1), Rect::new(1, 2, 8, 5));
    assert!(Rect::new(0, 0, 1, 5).inset_x(1).is_empty());
}
