//! Scoped graphics state changes
//!
//! A [`ContextScope`] applies one modification to a [`GraphicsContext`] when
//! created and undoes it when dropped. Scopes nest by borrowing the previous
//! scope, so locals declared in acquisition order are released in exact
//! reverse order on every exit path, `?` and unwinding included:
//!
//! ```rust
//! use drape_paint::{
//!     Color, ContextEvent, ContextScope, GraphicsContext, RecordingContext, Rect, Shape, Stroke,
//! };
//!
//! let mut ctx = RecordingContext::new();
//! let stroke = Stroke::basic(2.0);
//! {
//!     let mut alpha = ContextScope::alpha(&mut ctx, Some(0.5));
//!     let mut stroked = ContextScope::stroke(&mut *alpha, Some(&stroke));
//!     let mut painted = ContextScope::paint(&mut *stroked, Some(Color::BLACK));
//!     painted.draw(&Shape::Rect(Rect::new(0.0, 0.0, 8.0, 8.0))).unwrap();
//! }
//! assert!(matches!(ctx.events().last(), Some(ContextEvent::EndAlpha)));
//! assert!(ctx.state().is_pristine());
//! ```

use std::fmt;
use std::ops::{Deref, DerefMut};

use crate::color::Color;
use crate::context::GraphicsContext;
use crate::stroke::Stroke;

enum Restore<A, S, P> {
    Alpha(A),
    Stroke(S),
    Paint(P),
}

/// One restorable modification of a graphics context
///
/// A scope created with `None` is inactive: it touches nothing and releases
/// nothing, which keeps conditional acquisition uniform at the call site.
pub struct ContextScope<'a, G: GraphicsContext + ?Sized> {
    ctx: &'a mut G,
    restore: Option<Restore<G::AlphaToken, G::StrokeToken, G::PaintToken>>,
}

impl<'a, G: GraphicsContext + ?Sized> ContextScope<'a, G> {
    /// Apply an alpha composite when `amount` is present
    pub fn alpha(ctx: &'a mut G, amount: Option<f32>) -> Self {
        let restore = amount.map(|amount| Restore::Alpha(ctx.begin_alpha(amount)));
        Self { ctx, restore }
    }

    /// Apply a stroke when one is present
    pub fn stroke(ctx: &'a mut G, stroke: Option<&Stroke>) -> Self {
        let restore = stroke.map(|stroke| Restore::Stroke(ctx.begin_stroke(stroke)));
        Self { ctx, restore }
    }

    /// Apply a paint color when one is present
    pub fn paint(ctx: &'a mut G, color: Option<Color>) -> Self {
        let restore = color.map(|color| Restore::Paint(ctx.begin_paint(color)));
        Self { ctx, restore }
    }

    /// Whether this scope changed the context and will restore it
    pub fn is_active(&self) -> bool {
        self.restore.is_some()
    }
}

impl<G: GraphicsContext + ?Sized> Deref for ContextScope<'_, G> {
    type Target = G;

    fn deref(&self) -> &G {
        self.ctx
    }
}

impl<G: GraphicsContext + ?Sized> DerefMut for ContextScope<'_, G> {
    fn deref_mut(&mut self) -> &mut G {
        self.ctx
    }
}

impl<G: GraphicsContext + ?Sized> Drop for ContextScope<'_, G> {
    fn drop(&mut self) {
        match self.restore.take() {
            Some(Restore::Alpha(token)) => self.ctx.end_alpha(token),
            Some(Restore::Stroke(token)) => self.ctx.end_stroke(token),
            Some(Restore::Paint(token)) => self.ctx.end_paint(token),
            None => {}
        }
    }
}

impl<G: GraphicsContext + ?Sized> fmt::Debug for ContextScope<'_, G> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self.restore {
            Some(Restore::Alpha(_)) => "alpha",
            Some(Restore::Stroke(_)) => "stroke",
            Some(Restore::Paint(_)) => "paint",
            None => "inactive",
        };
        f.debug_struct("ContextScope").field("kind", &kind).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PaintError, Result};
    use crate::primitives::{Rect, Shape};
    use crate::recording::{ContextEvent, RecordingContext};
    use pretty_assertions::assert_eq;

    fn outline() -> Shape {
        Shape::Rect(Rect::new(0.0, 0.0, 4.0, 4.0))
    }

    #[test]
    fn inactive_scope_touches_nothing() {
        let mut ctx = RecordingContext::new();
        {
            let alpha = ContextScope::alpha(&mut ctx, None);
            assert!(!alpha.is_active());
        }
        assert!(ctx.events().is_empty());
    }

    #[test]
    fn nested_scopes_release_in_reverse_order() {
        let mut ctx = RecordingContext::new();
        let stroke = Stroke::basic(3.0);
        {
            let mut alpha = ContextScope::alpha(&mut ctx, Some(0.25));
            let mut stroked = ContextScope::stroke(&mut *alpha, Some(&stroke));
            let mut painted = ContextScope::paint(&mut *stroked, Some(Color::RED));
            painted.draw(&outline()).unwrap();
        }

        let kinds: Vec<&str> = ctx.events().iter().map(ContextEvent::kind).collect();
        assert_eq!(
            kinds,
            vec![
                "begin_alpha",
                "begin_stroke",
                "begin_paint",
                "draw",
                "end_paint",
                "end_stroke",
                "end_alpha"
            ]
        );
        assert!(ctx.state().is_pristine());
    }

    #[test]
    fn early_error_return_still_restores() {
        fn paint_failing(ctx: &mut RecordingContext) -> Result<()> {
            let mut painted = ContextScope::paint(ctx, Some(Color::BLUE));
            painted.draw(&outline())?;
            Err(PaintError::DrawFailed("surface lost".into()))
        }

        let mut ctx = RecordingContext::new();
        assert!(paint_failing(&mut ctx).is_err());
        assert!(matches!(ctx.events().last(), Some(ContextEvent::EndPaint)));
        assert!(ctx.state().is_pristine());
    }

    #[test]
    fn unwinding_restores_state() {
        let mut ctx = RecordingContext::new();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _alpha = ContextScope::alpha(&mut ctx, Some(0.5));
            panic!("host callback panicked");
        }));

        assert!(result.is_err());
        assert!(matches!(ctx.events().last(), Some(ContextEvent::EndAlpha)));
        assert!(ctx.state().is_pristine());
    }
}
