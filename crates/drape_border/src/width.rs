//! Derived border thickness

/// Thickness of a border on each edge, in whole pixels
///
/// Always derived from a border's fields, never stored on it. Hosts use it
/// to reserve space around component content.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct BorderWidth {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl BorderWidth {
    pub const ZERO: BorderWidth = BorderWidth::uniform(0);

    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(width: i32) -> Self {
        Self::new(width, width, width, width)
    }

    /// True when every edge is zero
    pub fn is_empty(&self) -> bool {
        *self == Self::ZERO
    }

    /// Per-edge maximum, for hosts combining several stacked borders
    pub fn max(self, other: Self) -> Self {
        Self {
            top: self.top.max(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
            left: self.left.max(other.left),
        }
    }

    /// Left plus right
    pub fn horizontal(&self) -> i32 {
        self.left + self.right
    }

    /// Top plus bottom
    pub fn vertical(&self) -> i32 {
        self.top + self.bottom
    }
}
