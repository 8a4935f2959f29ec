//! Paint command recording.
//!
//! Dashboard rendering pushes commands into a `Painter`; a `Backend` replays
//! them onto its cells. Every command carries its own clip so a panel can never
//! bleed into its neighbour.

use super::geom::{Pos, Rect};
use super::style::Style;
use unicode_width::UnicodeWidthStr;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PaintCmd {
    Fill { rect: Rect, style: Style },
    /// Text starting at `pos`, cut at the right edge of `clip`.
    Text {
        pos: Pos,
        text: String,
        style: Style,
        clip: Rect,
    },
    /// Box border with an optional title drawn into the top edge.
    Panel {
        rect: Rect,
        title: Option<String>,
        border: Style,
        title_style: Style,
    },
}

#[derive(Debug, Default)]
pub struct Painter {
    cmds: Vec<PaintCmd>,
    cursor: Option<Pos>,
}

impl Painter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cmds(&self) -> &[PaintCmd] {
        &self.cmds
    }

    pub fn cursor(&self) -> Option<Pos> {
        self.cursor
    }

    pub fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }

    pub fn fill(&mut self, rect: Rect, style: Style) {
        if rect.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::Fill { rect, style });
    }

    pub fn text(&mut self, pos: Pos, text: impl Into<String>, style: Style, clip: Rect) {
        let text = text.into();
        if text.is_empty() || clip.is_empty() {
            return;
        }
        self.cmds.push(PaintCmd::Text {
            pos,
            text,
            style,
            clip,
        });
    }

    /// `text` horizontally centered on the middle row of `rect`.
    pub fn text_centered(&mut self, rect: Rect, text: &str, style: Style) {
        let width = UnicodeWidthStr::width(text) as u16;
        let x = rect.x + rect.w.saturating_sub(width) / 2;
        let y = rect.y + rect.h / 2;
        self.text(Pos::new(x, y), text, style, rect);
    }

    /// Bordered box; `title` is padded with one space on each side.
    pub fn panel(&mut self, rect: Rect, title: Option<&str>, border: Style, title_style: Style) {
        if rect.w < 2 || rect.h < 2 {
            return;
        }
        self.cmds.push(PaintCmd::Panel {
            rect,
            title: title.map(|t| format!(" {t} ")),
            border,
            title_style,
        });
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/painter.rs"]
mod tests;
