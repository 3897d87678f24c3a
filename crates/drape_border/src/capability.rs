//! Capability queries shared across decoration variants
//!
//! Utilities that only need a color or a stroke depend on these traits, never
//! on the set of concrete variants, so new variants plug in by implementing
//! them.

use drape_paint::{Color, Stroke};

/// Exposes a resolved flat color
pub trait ColorSupport {
    /// Effective color; implementations substitute their default when unset
    fn color(&self) -> Color;
}

/// Exposes a linear stroke
pub trait StrokeSupport {
    /// Stroke as configured, possibly absent
    fn stroke(&self) -> Option<&Stroke>;

    /// Line width with the implied default of 1.0 for absent or non-straight
    /// strokes
    fn line_width(&self) -> f32 {
        self.stroke()
            .and_then(Stroke::line_width)
            .unwrap_or(1.0)
    }
}

/// Item with the widest stroke; the first one wins on ties
pub fn thickest<'a, T>(items: impl IntoIterator<Item = &'a T>) -> Option<&'a T>
where
    T: StrokeSupport + ?Sized + 'a,
{
    items.into_iter().fold(None, |best: Option<&'a T>, item| match best {
        Some(current) if current.line_width() >= item.line_width() => Some(current),
        _ => Some(item),
    })
}
