//! Text measurement and centering.

/// Ink bounding box of laid-out text, relative to the draw origin.
///
/// `left`/`top` are inclusive, `right`/`bottom` exclusive. An empty layout
/// has all four at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TextBounds {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl TextBounds {
    pub fn width(&self) -> i32 {
        self.right - self.left
    }

    pub fn height(&self) -> i32 {
        self.bottom - self.top
    }

    /// Smallest box containing both.
    pub fn union(&self, other: &TextBounds) -> TextBounds {
        TextBounds {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }
}

/// Top-left position that centers an ink box of the given bounds on a
/// `size × size` canvas.
///
/// Integer division truncates toward zero, so text larger than the canvas
/// gets a negative origin and is clipped on both sides.
pub fn centered_origin(size: u32, bounds: &TextBounds) -> (i32, i32) {
    let size = size as i32;
    ((size - bounds.width()) / 2, (size - bounds.height()) / 2)
}

/// Characters that shape an emoji sequence but have no ink of their own:
/// variation selectors, the zero-width joiner and the combining keycap.
pub fn is_zero_width(ch: char) -> bool {
    matches!(ch, '\u{FE00}'..='\u{FE0F}' | '\u{200D}' | '\u{20E3}')
}
