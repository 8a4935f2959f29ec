//! Cutting rectangles into rows and columns. Every split clamps to the
//! available space, so a small terminal yields empty rects instead of
//! overflowing ones.

use super::geom::Rect;

impl Rect {
    /// First `h` rows and the remainder below them.
    pub fn split_top(self, h: u16) -> (Rect, Rect) {
        let h = h.min(self.h);
        (
            Rect::new(self.x, self.y, self.w, h),
            Rect::new(self.x, self.y + h, self.w, self.h - h),
        )
    }

    /// First `w` columns and the remainder to their right.
    pub fn split_left(self, w: u16) -> (Rect, Rect) {
        let w = w.min(self.w);
        (
            Rect::new(self.x, self.y, w, self.h),
            Rect::new(self.x + w, self.y, self.w - w, self.h),
        )
    }

    /// Takes `w` columns, then drops `gap` more before the remainder.
    pub fn take_left(self, w: u16, gap: u16) -> (Rect, Rect) {
        let (taken, rest) = self.split_left(w);
        let (_, rest) = rest.split_left(gap);
        (taken, rest)
    }

    /// Shrinks by `n` columns on both sides; the height is unchanged.
    pub fn inset_x(self, n: u16) -> Rect {
        let twice = n.saturating_mul(2);
        if self.w <= twice {
            return Rect::new(self.x.saturating_add(n), self.y, 0, self.h);
        }
        Rect::new(self.x + n, self.y, self.w - twice, self.h)
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/ui/core/layout.rs"]
mod tests;
