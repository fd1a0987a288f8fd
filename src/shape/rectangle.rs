use super::Drawable;
use super::common::ShapeData;
use crate::surface::Surface;

/// Axis-aligned box spanned by the drag
#[derive(Debug, Clone, PartialEq)]
pub struct Rectangle {
    data: ShapeData,
}

impl Rectangle {
    pub(crate) fn new(data: ShapeData) -> Self {
        Self { data }
    }
}

impl Drawable for Rectangle {
    fn data(&self) -> &ShapeData {
        &self.data
    }

    fn render(&self, surface: &mut dyn Surface) {
        let bounds = self.data.bounds();
        if self.data.style().filled {
            surface.fill_rect(bounds, &self.data.paint());
        } else {
            surface.stroke_rect(bounds, &self.data.pen());
        }
    }
}
