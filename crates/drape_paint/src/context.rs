//! Graphics context - the adapter contract decorations draw through

use crate::color::Color;
use crate::error::Result;
use crate::primitives::Shape;
use crate::stroke::Stroke;

/// Shared, mutable drawing surface owned by the host for one paint call
///
/// Every `begin_*` call changes one orthogonal piece of state and returns a
/// token describing how to undo it; the matching `end_*` consumes that token.
/// Callers should not pair these by hand: [`ContextScope`](crate::ContextScope)
/// does it and releases on every exit path.
///
/// Tokens are adapter-defined. A typical implementation stores the value that
/// was active before the `begin_*` call.
pub trait GraphicsContext {
    /// Restore token for an alpha composite change
    type AlphaToken;
    /// Restore token for a stroke change
    type StrokeToken;
    /// Restore token for a paint (fill/stroke color) change
    type PaintToken;

    /// Apply an alpha composite with the given amount (0.0 to 1.0)
    fn begin_alpha(&mut self, amount: f32) -> Self::AlphaToken;

    fn end_alpha(&mut self, token: Self::AlphaToken);

    /// Use `stroke` for subsequent outline drawing
    fn begin_stroke(&mut self, stroke: &Stroke) -> Self::StrokeToken;

    fn end_stroke(&mut self, token: Self::StrokeToken);

    /// Use `color` as the current paint
    fn begin_paint(&mut self, color: Color) -> Self::PaintToken;

    fn end_paint(&mut self, token: Self::PaintToken);

    /// Stroke `shape` with the current state
    fn draw(&mut self, shape: &Shape) -> Result<()>;
}

impl<G: GraphicsContext + ?Sized> GraphicsContext for &mut G {
    type AlphaToken = G::AlphaToken;
    type StrokeToken = G::StrokeToken;
    type PaintToken = G::PaintToken;

    fn begin_alpha(&mut self, amount: f32) -> Self::AlphaToken {
        (**self).begin_alpha(amount)
    }

    fn end_alpha(&mut self, token: Self::AlphaToken) {
        (**self).end_alpha(token);
    }

    fn begin_stroke(&mut self, stroke: &Stroke) -> Self::StrokeToken {
        (**self).begin_stroke(stroke)
    }

    fn end_stroke(&mut self, token: Self::StrokeToken) {
        (**self).end_stroke(token);
    }

    fn begin_paint(&mut self, color: Color) -> Self::PaintToken {
        (**self).begin_paint(color)
    }

    fn end_paint(&mut self, token: Self::PaintToken) {
        (**self).end_paint(token);
    }

    fn draw(&mut self, shape: &Shape) -> Result<()> {
        (**self).draw(shape)
    }
}
