//! Cell styling: colors, text modifiers and the `Style` carried by every paint
//! command.

use std::fmt;
use std::ops::BitOr;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Color {
    Reset,
    Rgb(u8, u8, u8),
    Indexed(u8),
}

/// Names accepted in settings, mapped to the 16 basic palette slots.
const NAMED_COLORS: [(&str, u8); 16] = [
    ("black", 0),
    ("red", 1),
    ("green", 2),
    ("yellow", 3),
    ("blue", 4),
    ("magenta", 5),
    ("cyan", 6),
    ("gray", 7),
    ("dark_gray", 8),
    ("light_red", 9),
    ("light_green", 10),
    ("light_yellow", 11),
    ("light_blue", 12),
    ("light_magenta", 13),
    ("light_cyan", 14),
    ("white", 15),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownColor(pub String);

impl fmt::Display for UnknownColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown color {:?}", self.0)
    }
}

impl std::error::Error for UnknownColor {}

impl FromStr for Color {
    type Err = UnknownColor;

    /// Accepts `reset`, a palette name (case-insensitive, `grey`/`darkgrey`
    /// spellings included) or `#RRGGBB`.
    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let v = value.trim();
        let unknown = || UnknownColor(value.to_string());

        if let Some(hex) = v.strip_prefix('#') {
            if hex.len() != 6 || !hex.is_ascii() {
                return Err(unknown());
            }
            let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).map_err(|_| unknown());
            return Ok(Color::Rgb(channel(0)?, channel(2)?, channel(4)?));
        }

        let name = v.to_ascii_lowercase().replace("grey", "gray");
        let name = if name == "darkgray" { "dark_gray" } else { name.as_str() };
        if name == "reset" {
            return Ok(Color::Reset);
        }
        NAMED_COLORS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, index)| Color::Indexed(*index))
            .ok_or_else(unknown)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub struct Mod(u8);

impl Mod {
    pub const NONE: Self = Self(0);
    pub const BOLD: Self = Self(1);
    pub const UNDERLINE: Self = Self(1 << 1);

    pub fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl BitOr for Mod {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub mods: Mod,
}

impl Style {
    pub fn fg(self, color: Color) -> Self {
        Self {
            fg: Some(color),
            ..self
        }
    }

    pub fn bg(self, color: Color) -> Self {
        Self {
            bg: Some(color),
            ..self
        }
    }

    pub fn add_mod(self, m: Mod) -> Self {
        Self {
            mods: self.mods | m,
            ..self
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/style.rs"]
mod tests;
