//! Line border: one flat outline with a single stroke and color

use drape_paint::{Color, ContextScope, GraphicsContext, Rect, Result, Shape, Stroke};
use serde::{Deserialize, Serialize};

use crate::base::{Border, BorderBase, Merge};
use crate::capability::{ColorSupport, StrokeSupport};
use crate::width::BorderWidth;

/// Color used when a line border has none configured: RGB(210, 210, 210)
pub const DEFAULT_LINE_COLOR: Color = Color::rgb(210.0 / 255.0, 210.0 / 255.0, 210.0 / 255.0);

/// A border drawn as a single line along the outline
///
/// Symmetric on all four edges regardless of the outline's shape. Absent
/// fields stay absent through (de)serialization:
///
/// ```rust
/// use drape_border::LineBorder;
///
/// let border: LineBorder = serde_json::from_str(r##"{ "color": "#3399ff" }"##).unwrap();
/// assert!(border.stroke.is_none());
/// assert_eq!(serde_json::to_string(&border).unwrap(), r##"{"color":"#3399ff"}"##);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineBorder {
    #[serde(flatten)]
    pub base: BorderBase,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<Stroke>,

    /// Unset reads as [`DEFAULT_LINE_COLOR`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<Color>,
}

impl LineBorder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.base.id = Some(id.into());
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.base.opacity = Some(opacity);
        self
    }

    pub fn with_stroke(mut self, stroke: impl Into<Stroke>) -> Self {
        self.stroke = Some(stroke.into());
        self
    }

    pub fn with_color(mut self, color: Color) -> Self {
        self.color = Some(color);
        self
    }
}

impl ColorSupport for LineBorder {
    fn color(&self) -> Color {
        self.color.unwrap_or(DEFAULT_LINE_COLOR)
    }
}

impl StrokeSupport for LineBorder {
    fn stroke(&self) -> Option<&Stroke> {
        self.stroke.as_ref()
    }
}

impl Border for LineBorder {
    fn base(&self) -> &BorderBase {
        &self.base
    }

    /// Rounded stroke width on every edge, zero while invisible
    ///
    /// The stroke width is not validated: a negative basic width yields a
    /// negative, non-empty `BorderWidth` and the border still paints.
    fn width(&self) -> BorderWidth {
        let w = if self.opacity() > 0.0 {
            self.line_width()
        } else {
            0.0
        };
        // Saturating float-to-int cast
        BorderWidth::uniform(w.round() as i32)
    }

    fn paint<G, C, D>(
        &self,
        g: &mut G,
        _bounds: Rect,
        _component: &C,
        _decoration: &D,
        outline: &Shape,
    ) -> Result<()>
    where
        G: GraphicsContext + ?Sized,
        C: ?Sized,
        D: ?Sized,
    {
        let opacity = self.opacity();
        if opacity <= 0.0 || self.width().is_empty() {
            tracing::trace!(opacity, "line border not paintable, skipping");
            return Ok(());
        }

        let stroke = self.stroke();
        let color = self.color();

        let mut alpha = ContextScope::alpha(g, (opacity < 1.0).then_some(opacity));
        let mut stroked = ContextScope::stroke(&mut *alpha, stroke);
        let mut painted = ContextScope::paint(&mut *stroked, Some(color));
        painted.draw(outline)
    }
}

impl Merge for LineBorder {
    fn merge(&mut self, other: &Self) -> &mut Self {
        self.base.merge(&other.base);
        if let Some(stroke) = &other.stroke {
            self.stroke = Some(stroke.clone());
        }
        if let Some(color) = other.color {
            self.color = Some(color);
        }
        self
    }
}
