use super::Drawable;
use super::common::ShapeData;
use crate::surface::Surface;

/// Straight segment from the drag start to the drag end.
/// The fill flag has no meaning for a line and is ignored.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    data: ShapeData,
}

impl Line {
    pub(crate) fn new(data: ShapeData) -> Self {
        Self { data }
    }
}

impl Drawable for Line {
    fn data(&self) -> &ShapeData {
        &self.data
    }

    fn render(&self, surface: &mut dyn Surface) {
        surface.line(self.data.start(), self.data.end(), &self.data.pen());
    }
}
