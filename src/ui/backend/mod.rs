//! Rendering backends.
//!
//! The dashboard only talks to `Backend`. Both implementations share `replay`,
//! which turns paint commands into single-cell writes on a `CellSink`.

use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::Style;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

pub trait Backend {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]);

    fn set_cursor(&mut self, pos: Option<Pos>);
}

/// A grid of cells that accepts one grapheme per write.
pub(crate) trait CellSink {
    fn bounds(&self) -> Rect;

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style);
}

pub(crate) fn replay(sink: &mut dyn CellSink, cmds: &[PaintCmd]) {
    for cmd in cmds {
        match cmd {
            PaintCmd::Fill { rect, style } => fill(sink, *rect, *style),
            PaintCmd::Text {
                pos,
                text,
                style,
                clip,
            } => text_run(sink, *pos, text, *style, *clip),
            PaintCmd::Panel {
                rect,
                title,
                border,
                title_style,
            } => {
                draw_border(sink, *rect, *border);
                if let Some(title) = title {
                    // Keep both corners visible.
                    let clip = Rect::new(rect.x + 1, rect.y, rect.w.saturating_sub(2), 1);
                    text_run(sink, Pos::new(rect.x + 1, rect.y), title, *title_style, clip);
                }
            }
        }
    }
}

fn fill(sink: &mut dyn CellSink, rect: Rect, style: Style) {
    let rect = rect.intersect(sink.bounds());
    for y in rect.y..rect.bottom() {
        for x in rect.x..rect.right() {
            sink.put(x, y, " ", style);
        }
    }
}

fn text_run(sink: &mut dyn CellSink, pos: Pos, text: &str, style: Style, clip: Rect) {
    let clip = clip.intersect(sink.bounds());
    if clip.is_empty() || pos.y < clip.y || pos.y >= clip.bottom() {
        return;
    }
    let mut x = pos.x;
    for g in text.graphemes(true) {
        let w = UnicodeWidthStr::width(g) as u16;
        if w == 0 {
            continue;
        }
        // Wide glyphs are never split at the clip edge.
        if x.saturating_add(w) > clip.right() {
            break;
        }
        if x >= clip.x {
            sink.put(x, pos.y, g, style);
            for dx in 1..w {
                sink.put(x + dx, pos.y, " ", style);
            }
        }
        x = x.saturating_add(w);
    }
}

fn draw_border(sink: &mut dyn CellSink, rect: Rect, style: Style) {
    if rect.w < 2 || rect.h < 2 {
        return;
    }
    let bounds = sink.bounds();
    let right = rect.right() - 1;
    let bottom = rect.bottom() - 1;
    let mut put = |x: u16, y: u16, symbol: &str| {
        if bounds.contains(Pos::new(x, y)) {
            sink.put(x, y, symbol, style);
        }
    };

    for x in rect.x + 1..right {
        put(x, rect.y, "─");
        put(x, bottom, "─");
    }
    for y in rect.y + 1..bottom {
        put(rect.x, y, "│");
        put(right, y, "│");
    }
    put(rect.x, rect.y, "┌");
    put(right, rect.y, "┐");
    put(rect.x, bottom, "└");
    put(right, bottom, "┘");
}

#[cfg(feature = "tui")]
#[path = "ratatui.rs"]
pub mod terminal;

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend.rs"]
mod tests;
