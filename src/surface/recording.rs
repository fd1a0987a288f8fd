use egui::{Pos2, Rect};

use super::{Paint, Pen, Surface};

/// One primitive drawn onto a [`RecordingSurface`]
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Line { from: Pos2, to: Pos2, pen: Pen },
    FillRect { rect: Rect, paint: Paint },
    StrokeRect { rect: Rect, pen: Pen },
    FillEllipse { rect: Rect, paint: Paint },
    StrokeEllipse { rect: Rect, pen: Pen },
}

impl DrawOp {
    /// The area the primitive covers, ignoring stroke width
    pub fn bounds(&self) -> Rect {
        match self {
            DrawOp::Line { from, to, .. } => Rect::from_two_pos(*from, *to),
            DrawOp::FillRect { rect, .. }
            | DrawOp::StrokeRect { rect, .. }
            | DrawOp::FillEllipse { rect, .. }
            | DrawOp::StrokeEllipse { rect, .. } => *rect,
        }
    }
}

/// A surface that draws nothing and remembers every call in order.
///
/// Lets the canvas be rendered without a window.
#[derive(Debug, Default, Clone)]
pub struct RecordingSurface {
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn into_ops(self) -> Vec<DrawOp> {
        self.ops
    }
}

impl Surface for RecordingSurface {
    fn line(&mut self, from: Pos2, to: Pos2, pen: &Pen) {
        self.ops.push(DrawOp::Line { from, to, pen: *pen });
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.ops.push(DrawOp::FillRect { rect, paint: *paint });
    }

    fn stroke_rect(&mut self, rect: Rect, pen: &Pen) {
        self.ops.push(DrawOp::StrokeRect { rect, pen: *pen });
    }

    fn fill_ellipse(&mut self, rect: Rect, paint: &Paint) {
        self.ops.push(DrawOp::FillEllipse { rect, paint: *paint });
    }

    fn stroke_ellipse(&mut self, rect: Rect, pen: &Pen) {
        self.ops.push(DrawOp::StrokeEllipse { rect, pen: *pen });
    }
}
