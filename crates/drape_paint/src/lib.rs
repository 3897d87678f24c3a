//! Drape Paint
//!
//! The drawing surface contract used by Drape decorations.
//!
//! # Features
//!
//! - [`GraphicsContext`]: the adapter contract a host renderer implements
//!   (alpha, stroke and paint modifications plus outline drawing)
//! - [`ContextScope`]: RAII guards that restore a modification on drop
//! - [`RecordingContext`]: an adapter that tracks state and logs every call
//! - Colors, strokes and outline shapes shared by every decoration
//!
//! # Example
//!
//! ```rust
//! use drape_paint::{
//!     Color, ContextEvent, ContextScope, GraphicsContext, RecordingContext, Rect, Shape,
//! };
//!
//! let mut ctx = RecordingContext::new();
//! {
//!     let mut painted = ContextScope::paint(&mut ctx, Some(Color::RED));
//!     painted.draw(&Shape::Rect(Rect::new(0.0, 0.0, 10.0, 10.0))).unwrap();
//! }
//!
//! assert!(ctx.state().is_pristine());
//! assert!(matches!(ctx.events().last(), Some(ContextEvent::EndPaint)));
//! ```

pub mod color;
pub mod context;
pub mod error;
pub mod path;
pub mod primitives;
pub mod recording;
pub mod scope;
pub mod stroke;

pub use color::{Color, ColorParseError};
pub use context::GraphicsContext;
pub use error::{PaintError, Result};
pub use path::{Path, PathBuilder, PathCommand, Point};
pub use primitives::*;
pub use recording::{ContextEvent, ContextState, RecordingContext};
pub use scope::ContextScope;
pub use stroke::{BasicStroke, Dash, LineCap, LineJoin, Stroke};
