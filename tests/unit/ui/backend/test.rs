use super::*;
use crate::ui::core::painter::Painter;

#[test]
fn new_buffer_is_blank() {
    let buf = TestBuffer::new(Rect::new(0, 0, 3, 2));
    assert_eq!(buf.text(), "\n");
    assert!(buf.cell(3, 0).is_none());
}

#[test]
fn offset_area_maps_absolute_coordinates() {
    let mut buf = TestBuffer::new(Rect::new(5, 5, 2, 2));
    buf.put(6, 6, "x", Style::default());
    assert_eq!(buf.cell(6, 6).unwrap().symbol, "x");
    assert!(buf.cell(0, 0).is_none());
    assert_eq!(buf.row_text(6), " x");
}

#[test]
fn backend_replays_painter_commands_and_cursor() {
    let mut painter = Painter::new();
    let area = Rect::new(0, 0, 5, 2);
    painter.text(Pos::new(0, 0), "===", Style::default(), area);
    painter.text(Pos::new(0, 1), "ok", Style::default(), area);

    let mut backend = TestBackend::new(5, 2);
    let area = backend.area();
    backend.draw(area, painter.cmds());
    backend.set_cursor(Some(Pos::new(2, 1)));

    assert_eq!(backend.buffer().text(), "===\nok");
    assert_eq!(backend.cursor(), Some(Pos::new(2, 1)));
}
