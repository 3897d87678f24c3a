//! Drape Borders
//!
//! Border fragments for component decorations. Each fragment is plain data
//! with optional fields, so "unset" stays distinguishable from "set to the
//! default" until paint time.
//!
//! # Overview
//!
//! - [`Border`]: contract every border variant implements (opacity, derived
//!   [`BorderWidth`], paint protocol)
//! - [`Merge`]: field-wise, right-biased combination of two fragments of the
//!   same variant
//! - [`ColorSupport`] / [`StrokeSupport`]: capability queries shared utilities
//!   use without knowing the variant
//! - [`LineBorder`]: a flat outline drawn with one stroke and one color
//!
//! # Merge order
//!
//! Later merged fragments win. Resolve theme defaults first, then contextual
//! overrides:
//!
//! ```rust
//! use drape_border::{Border, ColorSupport, LineBorder, Merge, StrokeSupport};
//! use drape_paint::{Color, Stroke};
//!
//! let mut border = LineBorder::new().with_stroke(Stroke::basic(1.0));
//! let focused = LineBorder::new().with_color(Color::from_hex(0x3399ff));
//!
//! border.merge(&focused);
//! assert_eq!(border.color(), Color::from_hex(0x3399ff));
//! assert_eq!(border.stroke(), Some(&Stroke::basic(1.0)));
//! assert_eq!(border.width().top, 1);
//! ```
//!
//! # Painting
//!
//! ```rust
//! use drape_border::{Border, LineBorder};
//! use drape_paint::{ContextEvent, RecordingContext, Rect, Shape, Stroke};
//!
//! let border = LineBorder::new().with_stroke(Stroke::basic(2.0));
//! let bounds = Rect::new(0.0, 0.0, 40.0, 20.0);
//! let mut ctx = RecordingContext::new();
//!
//! border.paint(&mut ctx, bounds, &(), &(), &Shape::Rect(bounds)).unwrap();
//!
//! let kinds: Vec<_> = ctx.events().iter().map(ContextEvent::kind).collect();
//! assert_eq!(kinds, ["begin_stroke", "begin_paint", "draw", "end_paint", "end_stroke"]);
//! ```

pub mod base;
pub mod capability;
pub mod line;
pub mod width;

pub use base::{merge_all, Border, BorderBase, Merge};
pub use capability::{thickest, ColorSupport, StrokeSupport};
pub use line::{LineBorder, DEFAULT_LINE_COLOR};
pub use width::BorderWidth;
