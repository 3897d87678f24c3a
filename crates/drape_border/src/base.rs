//! Border contract shared by every variant

use drape_paint::{GraphicsContext, Rect, Result, Shape};
use serde::{Deserialize, Serialize};

use crate::width::BorderWidth;

/// Field-wise, right-biased combination of two fragments of one variant
///
/// `a.merge(&b)` replaces every field of `a` that is present in `b` and keeps
/// the rest. Precedence is therefore decided by merge order: merge theme
/// defaults first and contextual overrides after them.
pub trait Merge {
    fn merge(&mut self, other: &Self) -> &mut Self;
}

/// Fields every border variant carries
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct BorderBase {
    /// Identifies the fragment inside its decoration; merge never changes it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Unset reads as fully opaque
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opacity: Option<f32>,
}

impl BorderBase {
    pub const DEFAULT_OPACITY: f32 = 1.0;

    /// Effective opacity; values outside 0..=1 are returned as configured
    pub fn opacity(&self) -> f32 {
        self.opacity.unwrap_or(Self::DEFAULT_OPACITY)
    }
}

impl Merge for BorderBase {
    fn merge(&mut self, other: &Self) -> &mut Self {
        if let Some(opacity) = other.opacity {
            self.opacity = Some(opacity);
        }
        self
    }
}

/// A drawable edge style
///
/// Variants derive their own geometry and drawing sequence but share one
/// guard: nothing is drawn, and the context is not touched, while
/// [`is_paintable`](Border::is_paintable) is false.
pub trait Border {
    fn base(&self) -> &BorderBase;

    fn id(&self) -> Option<&str> {
        self.base().id.as_deref()
    }

    fn opacity(&self) -> f32 {
        self.base().opacity()
    }

    /// Space this border occupies on each edge
    fn width(&self) -> BorderWidth;

    fn is_paintable(&self) -> bool {
        self.opacity() > 0.0 && !self.width().is_empty()
    }

    /// Draw along `outline`
    ///
    /// `bounds`, `component` and `decoration` are host inputs passed through
    /// for variants that need them. Every context modification made here is
    /// released before returning, including when drawing fails.
    fn paint<G, C, D>(
        &self,
        g: &mut G,
        bounds: Rect,
        component: &C,
        decoration: &D,
        outline: &Shape,
    ) -> Result<()>
    where
        G: GraphicsContext + ?Sized,
        C: ?Sized,
        D: ?Sized;
}

/// Fold fragments, lowest precedence first, into one effective instance
///
/// Inputs are left untouched. Returns `None` for an empty sequence.
pub fn merge_all<'a, T>(fragments: impl IntoIterator<Item = &'a T>) -> Option<T>
where
    T: Merge + Clone + 'a,
{
    let mut fragments = fragments.into_iter();
    let mut merged = fragments.next()?.clone();
    for fragment in fragments {
        merged.merge(fragment);
    }
    Some(merged)
}
