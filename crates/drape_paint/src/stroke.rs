//! Stroke descriptors

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineCap {
    #[default]
    Butt,
    Round,
    Square,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
    Bevel,
}

/// Dash pattern: alternating on/off lengths starting at `phase`
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dash {
    pub pattern: SmallVec<[f32; 4]>,
    #[serde(default)]
    pub phase: f32,
}

/// A straight line stroke
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BasicStroke {
    #[serde(default = "default_width")]
    pub width: f32,
    #[serde(default)]
    pub cap: LineCap,
    #[serde(default)]
    pub join: LineJoin,
    #[serde(default = "default_miter_limit")]
    pub miter_limit: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dash: Option<Dash>,
}

fn default_width() -> f32 {
    1.0
}

fn default_miter_limit() -> f32 {
    10.0
}

impl Default for BasicStroke {
    fn default() -> Self {
        Self {
            width: default_width(),
            cap: LineCap::Butt,
            join: LineJoin::Miter,
            miter_limit: default_miter_limit(),
            dash: None,
        }
    }
}

impl BasicStroke {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            ..Default::default()
        }
    }

    pub fn with_cap(mut self, cap: LineCap) -> Self {
        self.cap = cap;
        self
    }

    pub fn with_join(mut self, join: LineJoin) -> Self {
        self.join = join;
        self
    }

    pub fn with_dash(mut self, pattern: impl IntoIterator<Item = f32>, phase: f32) -> Self {
        self.dash = Some(Dash {
            pattern: pattern.into_iter().collect(),
            phase,
        });
        self
    }
}

/// Stroke configuration handed to the graphics context
///
/// In a theme file a table deserializes as [`Stroke::Basic`] and a bare
/// string as [`Stroke::Named`]:
///
/// ```toml
/// stroke = { width = 2.0, cap = "round" }
/// # or
/// stroke = "double"
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Stroke {
    /// Straight line stroke with explicit geometry
    Basic(BasicStroke),
    /// Stroke implemented by the host adapter and looked up by name
    Named(String),
}

impl Stroke {
    pub fn basic(width: f32) -> Self {
        Stroke::Basic(BasicStroke::new(width))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Stroke::Named(name.into())
    }

    /// Line width for straight strokes, `None` for host-defined ones
    pub fn line_width(&self) -> Option<f32> {
        match self {
            Stroke::Basic(basic) => Some(basic.width),
            Stroke::Named(_) => None,
        }
    }
}

impl From<BasicStroke> for Stroke {
    fn from(stroke: BasicStroke) -> Self {
        Stroke::Basic(stroke)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn table_parses_as_basic_stroke_with_defaults() {
        let stroke: Stroke =
            serde_json::from_str(r#"{ "width": 2.5, "cap": "round", "join": "bevel" }"#).unwrap();
        assert_eq!(
            stroke,
            Stroke::Basic(
                BasicStroke::new(2.5)
                    .with_cap(LineCap::Round)
                    .with_join(LineJoin::Bevel)
            )
        );
        assert_eq!(stroke.line_width(), Some(2.5));
    }

    #[test]
    fn string_parses_as_named_stroke() {
        let stroke: Stroke = serde_json::from_str(r#""double""#).unwrap();
        assert_eq!(stroke, Stroke::named("double"));
        assert_eq!(stroke.line_width(), None);
    }

    #[test]
    fn dash_pattern_is_kept() {
        let stroke: Stroke =
            serde_json::from_str(r#"{ "dash": { "pattern": [4.0, 2.0], "phase": 1.0 } }"#).unwrap();
        assert_eq!(
            stroke,
            Stroke::Basic(BasicStroke::default().with_dash([4.0, 2.0], 1.0))
        );
    }
}
