//! UI 主题：把可配置的颜色集中管理，避免散落在渲染代码里。

use crate::kernel::services::ports::ThemeSettings;
use crate::ui::core::style::Color;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiTheme {
    pub border: Color,
    pub focus_border: Color,
    pub header_fg: Color,
    pub accent_fg: Color,
    pub muted_fg: Color,
    pub text_fg: Color,
    pub button_bg: Color,
    pub button_fg: Color,
    pub button_hover_bg: Color,
    pub button_busy_bg: Color,
    pub tab_active_bg: Color,
    pub tab_active_fg: Color,
    pub tab_hover_fg: Color,
    pub dropdown_bg: Color,
    pub dropdown_hover_bg: Color,
    pub error_fg: Color,
    pub positive_fg: Color,
    pub negative_fg: Color,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminalColorSupport {
    TrueColor,
    Ansi256,
    Ansi16,
}

pub fn detect_terminal_color_support() -> TerminalColorSupport {
    if let Ok(value) = std::env::var("TICKERDASH_COLOR_SUPPORT") {
        let value = value.trim().to_ascii_lowercase();
        match value.as_str() {
            "truecolor" | "24bit" | "rgb" => return TerminalColorSupport::TrueColor,
            "256" | "ansi256" => return TerminalColorSupport::Ansi256,
            "16" | "ansi16" | "basic" => return TerminalColorSupport::Ansi16,
            _ => {}
        }
    }

    let colorterm = std::env::var("COLORTERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    let term = std::env::var("TERM")
        .unwrap_or_default()
        .to_ascii_lowercase();
    if colorterm.contains("truecolor") || colorterm.contains("24bit") || term.contains("direct") {
        return TerminalColorSupport::TrueColor;
    }
    if term.contains("256color") {
        return TerminalColorSupport::Ansi256;
    }
    TerminalColorSupport::Ansi16
}

impl Default for UiTheme {
    fn default() -> Self {
        Self {
            border: Color::Indexed(8),       // DarkGray
            focus_border: Color::Indexed(6), // Cyan
            header_fg: Color::Indexed(6),
            accent_fg: Color::Indexed(6),
            muted_fg: Color::Indexed(8),
            text_fg: Color::Reset,
            // Classic dashboard button blue.
            button_bg: Color::Rgb(0x46, 0xA0, 0xE6),
            button_fg: Color::Indexed(0),
            button_hover_bg: Color::Rgb(0x5A, 0xB4, 0xFA),
            button_busy_bg: Color::Indexed(8),
            tab_active_bg: Color::Indexed(6),
            tab_active_fg: Color::Indexed(0),
            tab_hover_fg: Color::Indexed(15),
            dropdown_bg: Color::Rgb(0x32, 0x32, 0x3C),
            dropdown_hover_bg: Color::Rgb(0x46, 0x46, 0x55),
            error_fg: Color::Indexed(1),    // Red
            positive_fg: Color::Indexed(2), // Green
            negative_fg: Color::Indexed(1),
        }
    }
}

impl UiTheme {
    pub fn from_settings(settings: &ThemeSettings) -> Self {
        let mut theme = Self::default();
        theme.apply_settings(settings);
        theme
    }

    /// Overrides colors named in `settings`; unparseable values are skipped.
    pub fn apply_settings(&mut self, settings: &ThemeSettings) {
        override_color(&mut self.border, settings.border.as_deref());
        override_color(&mut self.focus_border, settings.focus_border.as_deref());
        override_color(&mut self.accent_fg, settings.accent_fg.as_deref());
        override_color(&mut self.muted_fg, settings.muted_fg.as_deref());
        override_color(&mut self.button_bg, settings.button_bg.as_deref());
        override_color(&mut self.button_hover_bg, settings.button_hover_bg.as_deref());
        override_color(&mut self.error_fg, settings.error_fg.as_deref());
    }

    pub fn adapt_to_terminal_capabilities(&mut self) {
        self.apply_color_support(detect_terminal_color_support());
    }

    pub fn apply_color_support(&mut self, support: TerminalColorSupport) {
        if support == TerminalColorSupport::TrueColor {
            return;
        }
        for slot in [
            &mut self.border,
            &mut self.focus_border,
            &mut self.header_fg,
            &mut self.accent_fg,
            &mut self.muted_fg,
            &mut self.text_fg,
            &mut self.button_bg,
            &mut self.button_fg,
            &mut self.button_hover_bg,
            &mut self.button_busy_bg,
            &mut self.tab_active_bg,
            &mut self.tab_active_fg,
            &mut self.tab_hover_fg,
            &mut self.dropdown_bg,
            &mut self.dropdown_hover_bg,
            &mut self.error_fg,
            &mut self.positive_fg,
            &mut self.negative_fg,
        ] {
            *slot = map_color_for_support(*slot, support);
        }
    }

    /// Resolves a configured color string, falling back to the accent color.
    pub fn resolve(&self, value: &str) -> Color {
        value.parse().unwrap_or(self.accent_fg)
    }
}

fn override_color(slot: &mut Color, value: Option<&str>) {
    let Some(value) = value else {
        return;
    };
    match value.parse::<Color>() {
        Ok(color) => *slot = color,
        Err(err) => tracing::warn!(%err, "ignoring theme color"),
    }
}

pub fn map_color_for_support(color: Color, support: TerminalColorSupport) -> Color {
    match (support, color) {
        (TerminalColorSupport::TrueColor, value) => value,
        (_, Color::Reset) => Color::Reset,
        (TerminalColorSupport::Ansi256, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi256_index(r, g, b))
        }
        (TerminalColorSupport::Ansi256, Color::Indexed(i)) => Color::Indexed(i),
        (TerminalColorSupport::Ansi16, Color::Rgb(r, g, b)) => {
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) if i <= 15 => Color::Indexed(i),
        (TerminalColorSupport::Ansi16, Color::Indexed(i)) => {
            let (r, g, b) = ansi256_index_to_rgb(i);
            Color::Indexed(rgb_to_ansi16_index(r, g, b))
        }
    }
}

fn rgb_to_ansi256_index(r: u8, g: u8, b: u8) -> u8 {
    (0u16..=255)
        .map(|index| index as u8)
        .min_by_key(|&index| {
            let (pr, pg, pb) = ansi256_index_to_rgb(index);
            color_distance_sq((r, g, b), (pr, pg, pb))
        })
        .unwrap_or(0)
}

fn rgb_to_ansi16_index(r: u8, g: u8, b: u8) -> u8 {
    ANSI16_RGB
        .iter()
        .enumerate()
        .min_by_key(|(_, &rgb)| color_distance_sq((r, g, b), rgb))
        .map(|(index, _)| index as u8)
        .unwrap_or(0)
}

fn ansi256_index_to_rgb(index: u8) -> (u8, u8, u8) {
    if index <= 15 {
        return ANSI16_RGB[index as usize];
    }

    if (16..=231).contains(&index) {
        let level = [0u8, 95, 135, 175, 215, 255];
        let offset = index - 16;
        let r = level[(offset / 36) as usize];
        let g = level[((offset / 6) % 6) as usize];
        let b = level[(offset % 6) as usize];
        return (r, g, b);
    }

    let gray = 8u8.saturating_add((index - 232).saturating_mul(10));
    (gray, gray, gray)
}

fn color_distance_sq(a: (u8, u8, u8), b: (u8, u8, u8)) -> u32 {
    let dr = i32::from(a.0) - i32::from(b.0);
    let dg = i32::from(a.1) - i32::from(b.1);
    let db = i32::from(a.2) - i32::from(b.2);
    (dr * dr + dg * dg + db * db) as u32
}

const ANSI16_RGB: [(u8, u8, u8); 16] = [
    (0, 0, 0),
    (205, 0, 0),
    (0, 205, 0),
    (205, 205, 0),
    (0, 0, 238),
    (205, 0, 205),
    (0, 205, 205),
    (229, 229, 229),
    (127, 127, 127),
    (255, 0, 0),
    (0, 255, 0),
    (255, 255, 0),
    (92, 92, 255),
    (255, 0, 255),
    (0, 255, 255),
    (255, 255, 255),
];

#[cfg(test)]
#[path = "../../tests/unit/app/theme.rs"]
mod tests;
