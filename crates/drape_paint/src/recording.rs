//! Recording graphics context
//!
//! [`RecordingContext`] implements [`GraphicsContext`] without rasterizing
//! anything. It tracks the current alpha, stroke and paint, and logs every
//! call as a [`ContextEvent`] together with the state each draw saw. Tests use
//! it to assert on acquisition order; headless hosts use it to replay
//! decorations onto a real renderer later.

use crate::color::Color;
use crate::context::GraphicsContext;
use crate::error::Result;
use crate::primitives::Shape;
use crate::stroke::Stroke;

/// Current state of a [`RecordingContext`]
#[derive(Clone, Debug, PartialEq)]
pub struct ContextState {
    /// Accumulated alpha composite (nested alphas multiply)
    pub alpha: f32,
    pub stroke: Option<Stroke>,
    pub paint: Option<Color>,
}

impl Default for ContextState {
    fn default() -> Self {
        Self {
            alpha: 1.0,
            stroke: None,
            paint: None,
        }
    }
}

impl ContextState {
    /// No modification is active
    pub fn is_pristine(&self) -> bool {
        *self == Self::default()
    }
}

/// A call made on a [`RecordingContext`]
#[derive(Clone, Debug, PartialEq)]
pub enum ContextEvent {
    BeginAlpha(f32),
    EndAlpha,
    BeginStroke(Stroke),
    EndStroke,
    BeginPaint(Color),
    EndPaint,
    Draw { shape: Shape, state: ContextState },
}

impl ContextEvent {
    /// Short name of the call, handy for comparing sequences
    pub fn kind(&self) -> &'static str {
        match self {
            ContextEvent::BeginAlpha(_) => "begin_alpha",
            ContextEvent::EndAlpha => "end_alpha",
            ContextEvent::BeginStroke(_) => "begin_stroke",
            ContextEvent::EndStroke => "end_stroke",
            ContextEvent::BeginPaint(_) => "begin_paint",
            ContextEvent::EndPaint => "end_paint",
            ContextEvent::Draw { .. } => "draw",
        }
    }
}

/// Alpha value active before a `begin_alpha`
#[derive(Debug)]
pub struct SavedAlpha(f32);

/// Stroke active before a `begin_stroke`
#[derive(Debug)]
pub struct SavedStroke(Option<Stroke>);

/// Paint active before a `begin_paint`
#[derive(Debug)]
pub struct SavedPaint(Option<Color>);

/// Graphics context that records calls instead of drawing
#[derive(Debug, Default)]
pub struct RecordingContext {
    events: Vec<ContextEvent>,
    state: ContextState,
}

impl RecordingContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get all recorded events
    pub fn events(&self) -> &[ContextEvent] {
        &self.events
    }

    /// Take ownership of recorded events
    pub fn take_events(&mut self) -> Vec<ContextEvent> {
        std::mem::take(&mut self.events)
    }

    /// Current state, as a draw issued now would see it
    pub fn state(&self) -> &ContextState {
        &self.state
    }

    /// Number of draw calls recorded so far
    pub fn draw_count(&self) -> usize {
        self.events
            .iter()
            .filter(|event| matches!(event, ContextEvent::Draw { .. }))
            .count()
    }
}

impl GraphicsContext for RecordingContext {
    type AlphaToken = SavedAlpha;
    type StrokeToken = SavedStroke;
    type PaintToken = SavedPaint;

    fn begin_alpha(&mut self, amount: f32) -> SavedAlpha {
        let saved = SavedAlpha(self.state.alpha);
        self.state.alpha *= amount;
        self.events.push(ContextEvent::BeginAlpha(amount));
        saved
    }

    fn end_alpha(&mut self, token: SavedAlpha) {
        self.state.alpha = token.0;
        self.events.push(ContextEvent::EndAlpha);
    }

    fn begin_stroke(&mut self, stroke: &Stroke) -> SavedStroke {
        let saved = SavedStroke(self.state.stroke.replace(stroke.clone()));
        self.events.push(ContextEvent::BeginStroke(stroke.clone()));
        saved
    }

    fn end_stroke(&mut self, token: SavedStroke) {
        self.state.stroke = token.0;
        self.events.push(ContextEvent::EndStroke);
    }

    fn begin_paint(&mut self, color: Color) -> SavedPaint {
        let saved = SavedPaint(self.state.paint.replace(color));
        self.events.push(ContextEvent::BeginPaint(color));
        saved
    }

    fn end_paint(&mut self, token: SavedPaint) {
        self.state.paint = token.0;
        self.events.push(ContextEvent::EndPaint);
    }

    fn draw(&mut self, shape: &Shape) -> Result<()> {
        tracing::trace!(alpha = self.state.alpha, "recording outline draw");
        self.events.push(ContextEvent::Draw {
            shape: shape.clone(),
            state: self.state.clone(),
        });
        Ok(())
    }
}
