use super::{replay, Backend, CellSink};
use crate::ui::core::geom::{Pos, Rect};
use crate::ui::core::painter::PaintCmd;
use crate::ui::core::style::{Color, Mod, Style};
use ratatui::backend::CrosstermBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect as RRect;
use ratatui::style::{Color as RColor, Modifier as RModifier, Style as RStyle};
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use std::io;

pub struct RatatuiBackend<'a, 'f> {
    frame: &'a mut Frame<'f>,
    cursor: Option<Pos>,
}

impl<'a, 'f> RatatuiBackend<'a, 'f> {
    pub fn new(frame: &'a mut Frame<'f>) -> Self {
        Self { frame, cursor: None }
    }
}

impl Drop for RatatuiBackend<'_, '_> {
    fn drop(&mut self) {
        if let Some(pos) = self.cursor {
            // Without this call ratatui hides the cursor for the frame.
            self.frame.set_cursor_position((pos.x, pos.y));
        }
    }
}

impl From<RRect> for Rect {
    fn from(r: RRect) -> Self {
        Rect::new(r.x, r.y, r.width, r.height)
    }
}

impl From<Rect> for RRect {
    fn from(r: Rect) -> Self {
        RRect::new(r.x, r.y, r.w, r.h)
    }
}

impl Backend for RatatuiBackend<'_, '_> {
    fn draw(&mut self, area: Rect, cmds: &[PaintCmd]) {
        self.frame.render_widget(PaintWidget { cmds }, area.into());
    }

    fn set_cursor(&mut self, pos: Option<Pos>) {
        self.cursor = pos;
    }
}

/// Owns the crossterm-backed terminal so callers never name `ratatui` types.
pub struct RatatuiTerminal {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl RatatuiTerminal {
    pub fn new(stdout: io::Stdout) -> io::Result<Self> {
        let terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        Ok(Self { terminal })
    }

    pub fn draw<F>(&mut self, f: F) -> io::Result<()>
    where
        F: FnOnce(&mut dyn Backend, Rect),
    {
        self.terminal.draw(|frame| {
            let area: Rect = frame.area().into();
            let mut backend = RatatuiBackend::new(frame);
            f(&mut backend, area);
        })?;
        Ok(())
    }
}

struct PaintWidget<'a> {
    cmds: &'a [PaintCmd],
}

impl Widget for PaintWidget<'_> {
    fn render(self, _area: RRect, buf: &mut Buffer) {
        replay(&mut BufferSink { buf }, self.cmds);
    }
}

struct BufferSink<'a> {
    buf: &'a mut Buffer,
}

impl CellSink for BufferSink<'_> {
    fn bounds(&self) -> Rect {
        self.buf.area.into()
    }

    fn put(&mut self, x: u16, y: u16, symbol: &str, style: Style) {
        if let Some(cell) = self.buf.cell_mut((x, y)) {
            cell.set_symbol(symbol).set_style(RStyle::from(style));
        }
    }
}

impl From<Color> for RColor {
    fn from(c: Color) -> Self {
        match c {
            Color::Reset => RColor::Reset,
            Color::Rgb(r, g, b) => RColor::Rgb(r, g, b),
            Color::Indexed(i) => RColor::Indexed(i),
        }
    }
}

impl From<Mod> for RModifier {
    fn from(m: Mod) -> Self {
        [(Mod::BOLD, RModifier::BOLD), (Mod::UNDERLINE, RModifier::UNDERLINED)]
            .into_iter()
            .filter(|(ours, _)| m.contains(*ours))
            .fold(RModifier::empty(), |acc, (_, theirs)| acc | theirs)
    }
}

impl From<Style> for RStyle {
    fn from(s: Style) -> Self {
        RStyle {
            fg: s.fg.map(RColor::from),
            bg: s.bg.map(RColor::from),
            add_modifier: s.mods.into(),
            ..RStyle::default()
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/backend/ratatui.rs"]
mod tests;
