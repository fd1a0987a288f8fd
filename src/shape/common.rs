use egui::{Color32, Pos2, Rect, pos2};

use crate::style::StyleConfig;
use crate::surface::{Paint, Pen};

/// The part of a [`StyleConfig`] a shape needs to draw itself
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeStyle {
    pub stroke_width: u32,
    pub dash_length: u32,
    pub filled: bool,
    pub dashed: bool,
    pub use_gradient: bool,
    pub first_color: Color32,
    pub second_color: Color32,
}

impl From<&StyleConfig> for ShapeStyle {
    fn from(style: &StyleConfig) -> Self {
        Self {
            stroke_width: style.stroke_width(),
            dash_length: style.dash_length(),
            filled: style.is_filled(),
            dashed: style.is_dashed(),
            use_gradient: style.use_gradient(),
            first_color: style.first_color(),
            second_color: style.second_color(),
        }
    }
}

/// Geometry and frozen style shared by every shape variant.
///
/// `start` and `end` are kept exactly as dragged; the bounding box is
/// normalized only when asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapeData {
    start: Pos2,
    end: Pos2,
    style: ShapeStyle,
}

impl ShapeData {
    pub(crate) fn new(start: Pos2, end: Pos2, style: &StyleConfig) -> Self {
        Self {
            start,
            end,
            style: ShapeStyle::from(style),
        }
    }

    pub fn start(&self) -> Pos2 {
        self.start
    }

    pub fn end(&self) -> Pos2 {
        self.end
    }

    pub fn style(&self) -> &ShapeStyle {
        &self.style
    }

    pub fn width(&self) -> f32 {
        (self.start.x - self.end.x).abs()
    }

    pub fn height(&self) -> f32 {
        (self.start.y - self.end.y).abs()
    }

    /// Top-left corner of the bounding box
    pub fn origin(&self) -> Pos2 {
        pos2(self.start.x.min(self.end.x), self.start.y.min(self.end.y))
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_two_pos(self.start, self.end)
    }

    /// Gradient runs from the drag start to the drag end
    pub fn paint(&self) -> Paint {
        if self.style.use_gradient {
            Paint::LinearGradient {
                from: self.start,
                to: self.end,
                from_color: self.style.first_color,
                to_color: self.style.second_color,
            }
        } else {
            Paint::Solid(self.style.first_color)
        }
    }

    pub fn pen(&self) -> Pen {
        let width = self.style.stroke_width as f32;
        if self.style.dashed {
            Pen::dashed(width, self.style.dash_length as f32, self.paint())
        } else {
            Pen::solid(width, self.paint())
        }
    }
}
