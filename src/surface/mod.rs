use egui::{Color32, Pos2, Rect};

mod painter;
mod recording;

pub use painter::EguiSurface;
pub use recording::{DrawOp, RecordingSurface};

/// Where the color of a fill or stroke comes from
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Paint {
    Solid(Color32),
    /// Two-color gradient along the axis `from` → `to`.
    /// Points beyond either end take that end's color.
    LinearGradient {
        from: Pos2,
        to: Pos2,
        from_color: Color32,
        to_color: Color32,
    },
}

impl Paint {
    /// The color this paint produces at `pos`
    pub fn color_at(&self, pos: Pos2) -> Color32 {
        match *self {
            Paint::Solid(color) => color,
            Paint::LinearGradient {
                from,
                to,
                from_color,
                to_color,
            } => {
                let axis = to - from;
                let length_sq = axis.length_sq();
                if length_sq <= f32::EPSILON {
                    return from_color;
                }
                let t = ((pos - from).dot(axis) / length_sq).clamp(0.0, 1.0);
                lerp_color(from_color, to_color, t)
            }
        }
    }
}

fn lerp_color(a: Color32, b: Color32, t: f32) -> Color32 {
    let channel = |x: u8, y: u8| -> u8 {
        let value = x as f32 + (y as f32 - x as f32) * t;
        value.round().clamp(0.0, 255.0) as u8
    };
    Color32::from_rgba_premultiplied(
        channel(a.r(), b.r()),
        channel(a.g(), b.g()),
        channel(a.b(), b.b()),
        channel(a.a(), b.a()),
    )
}

/// How an outline is stroked
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pen {
    pub width: f32,
    /// On/off length of each dash, `None` for a continuous stroke
    pub dash: Option<f32>,
    pub paint: Paint,
}

impl Pen {
    pub fn solid(width: f32, paint: Paint) -> Self {
        Self {
            width,
            dash: None,
            paint,
        }
    }

    pub fn dashed(width: f32, dash_length: f32, paint: Paint) -> Self {
        Self {
            width,
            dash: Some(dash_length),
            paint,
        }
    }
}

/// A drawing target shapes render themselves onto.
///
/// Rectangles are given normalized (`min` is the top-left corner).
/// Coordinates are canvas-local.
pub trait Surface {
    fn line(&mut self, from: Pos2, to: Pos2, pen: &Pen);

    fn fill_rect(&mut self, rect: Rect, paint: &Paint);

    fn stroke_rect(&mut self, rect: Rect, pen: &Pen);

    /// Fill the ellipse inscribed in `rect`
    fn fill_ellipse(&mut self, rect: Rect, paint: &Paint);

    /// Outline the ellipse inscribed in `rect`
    fn stroke_ellipse(&mut self, rect: Rect, pen: &Pen);
}
