use egui::{Pos2, Rect};

mod common;
pub(crate) mod line;
pub(crate) mod oval;
pub(crate) mod rectangle;

pub use common::{ShapeData, ShapeStyle};
pub use line::Line;
pub use oval::Oval;
pub use rectangle::Rectangle;

use crate::style::ShapeKind;
use crate::surface::Surface;

/// Common behavior of every shape that can sit on the canvas
pub trait Drawable {
    /// Geometry and frozen style
    fn data(&self) -> &ShapeData;

    /// Draw the shape onto the given surface
    fn render(&self, surface: &mut dyn Surface);

    fn start(&self) -> Pos2 {
        self.data().start()
    }

    fn end(&self) -> Pos2 {
        self.data().end()
    }

    fn width(&self) -> f32 {
        self.data().width()
    }

    fn height(&self) -> f32 {
        self.data().height()
    }

    fn origin(&self) -> Pos2 {
        self.data().origin()
    }

    fn bounds(&self) -> Rect {
        self.data().bounds()
    }

    fn style(&self) -> &ShapeStyle {
        self.data().style()
    }
}

/// Every kind of shape the canvas holds
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Line(Line),
    Oval(Oval),
    Rectangle(Rectangle),
}

impl Shape {
    pub fn kind(&self) -> ShapeKind {
        match self {
            Shape::Line(_) => ShapeKind::Line,
            Shape::Oval(_) => ShapeKind::Oval,
            Shape::Rectangle(_) => ShapeKind::Rectangle,
        }
    }
}

impl Drawable for Shape {
    fn data(&self) -> &ShapeData {
        match self {
            Shape::Line(l) => l.data(),
            Shape::Oval(o) => o.data(),
            Shape::Rectangle(r) => r.data(),
        }
    }

    fn render(&self, surface: &mut dyn Surface) {
        match self {
            Shape::Line(l) => l.render(surface),
            Shape::Oval(o) => o.render(surface),
            Shape::Rectangle(r) => r.render(surface),
        }
    }
}

/// Factory functions for creating shapes
pub mod factory {
    use super::*;
    use crate::style::StyleConfig;

    /// Build the shape the style asks for, spanning `start` to `end`
    pub fn create_shape(start: Pos2, end: Pos2, style: &StyleConfig) -> Shape {
        let data = ShapeData::new(start, end, style);
        match style.shape_kind() {
            ShapeKind::Line => Shape::Line(Line::new(data)),
            ShapeKind::Oval => Shape::Oval(Oval::new(data)),
            ShapeKind::Rectangle => Shape::Rectangle(Rectangle::new(data)),
        }
    }
}
