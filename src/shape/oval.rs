use super::Drawable;
use super::common::ShapeData;
use crate::surface::Surface;

/// Ellipse inscribed in the box spanned by the drag
#[derive(Debug, Clone, PartialEq)]
pub struct Oval {
    data: ShapeData,
}

impl Oval {
    pub(crate) fn new(data: ShapeData) -> Self {
        Self { data }
    }
}

impl Drawable for Oval {
    fn data(&self) -> &ShapeData {
        &self.data
    }

    fn render(&self, surface: &mut dyn Surface) {
        let bounds = self.data.bounds();
        if self.data.style().filled {
            surface.fill_ellipse(bounds, &self.data.paint());
        } else {
            surface.stroke_ellipse(bounds, &self.data.pen());
        }
    }
}
