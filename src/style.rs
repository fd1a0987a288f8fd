use std::fmt;
use std::num::NonZeroU32;
use std::str::FromStr;

use egui::Color32;
use serde::{Deserialize, Serialize};

use crate::error::{StyleError, StyleResult};

pub const DEFAULT_STROKE_WIDTH: NonZeroU32 = NonZeroU32::new(3).unwrap();
pub const DEFAULT_DASH_LENGTH: NonZeroU32 = NonZeroU32::new(6).unwrap();

/// The kinds of shape the user can drag out on the canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ShapeKind {
    #[default]
    Line,
    Oval,
    Rectangle,
}

impl ShapeKind {
    /// All kinds, in the order the controls list them
    pub const ALL: [ShapeKind; 3] = [ShapeKind::Line, ShapeKind::Oval, ShapeKind::Rectangle];

    pub fn name(self) -> &'static str {
        match self {
            ShapeKind::Line => "Line",
            ShapeKind::Oval => "Oval",
            ShapeKind::Rectangle => "Rectangle",
        }
    }
}

impl fmt::Display for ShapeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ShapeKind {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ShapeKind::ALL
            .into_iter()
            .find(|kind| kind.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| StyleError::UnknownShapeKind { name: s.to_string() })
    }
}

/// Immutable snapshot of the drawing style, taken when a shape is created.
///
/// A shape keeps its own copy, so changing the controls afterwards never
/// affects shapes that are already on the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleConfig {
    shape_kind: ShapeKind,
    stroke_width: NonZeroU32,
    dash_length: NonZeroU32,
    filled: bool,
    dashed: bool,
    use_gradient: bool,
    first_color: Color32,
    second_color: Color32,
}

impl StyleConfig {
    /// A solid black, unfilled style with the default width and dash length
    pub fn new(shape_kind: ShapeKind) -> Self {
        Self {
            shape_kind,
            stroke_width: DEFAULT_STROKE_WIDTH,
            dash_length: DEFAULT_DASH_LENGTH,
            filled: false,
            dashed: false,
            use_gradient: false,
            first_color: Color32::BLACK,
            second_color: Color32::BLACK,
        }
    }

    pub fn with_stroke_width(mut self, width: NonZeroU32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_dash_length(mut self, length: NonZeroU32) -> Self {
        self.dash_length = length;
        self
    }

    pub fn with_filled(mut self, filled: bool) -> Self {
        self.filled = filled;
        self
    }

    pub fn with_dashed(mut self, dashed: bool) -> Self {
        self.dashed = dashed;
        self
    }

    pub fn with_gradient(mut self, use_gradient: bool) -> Self {
        self.use_gradient = use_gradient;
        self
    }

    pub fn with_colors(mut self, first: Color32, second: Color32) -> Self {
        self.first_color = first;
        self.second_color = second;
        self
    }

    pub fn shape_kind(&self) -> ShapeKind {
        self.shape_kind
    }

    pub fn stroke_width(&self) -> u32 {
        self.stroke_width.get()
    }

    pub fn dash_length(&self) -> u32 {
        self.dash_length.get()
    }

    pub fn is_filled(&self) -> bool {
        self.filled
    }

    pub fn is_dashed(&self) -> bool {
        self.dashed
    }

    pub fn use_gradient(&self) -> bool {
        self.use_gradient
    }

    pub fn first_color(&self) -> Color32 {
        self.first_color
    }

    pub fn second_color(&self) -> Color32 {
        self.second_color
    }
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self::new(ShapeKind::default())
    }
}

/// Anything the canvas can ask for the current style.
pub trait StyleSource {
    /// Capture the style as it is right now
    fn snapshot(&self) -> StyleResult<StyleConfig>;
}

impl StyleSource for StyleConfig {
    fn snapshot(&self) -> StyleResult<StyleConfig> {
        Ok(*self)
    }
}

/// Live state of the drawing controls.
///
/// The two numeric settings are kept as the text the user typed and only
/// parsed when a style snapshot is taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleForm {
    pub shape_kind: ShapeKind,
    pub filled: bool,
    pub dashed: bool,
    pub use_gradient: bool,
    pub first_color: Color32,
    pub second_color: Color32,
    pub stroke_width_text: String,
    pub dash_length_text: String,
}

impl Default for StyleForm {
    fn default() -> Self {
        Self {
            shape_kind: ShapeKind::Line,
            filled: false,
            dashed: false,
            use_gradient: false,
            first_color: Color32::BLACK,
            second_color: Color32::BLACK,
            stroke_width_text: DEFAULT_STROKE_WIDTH.get().to_string(),
            dash_length_text: DEFAULT_DASH_LENGTH.get().to_string(),
        }
    }
}

impl StyleSource for StyleForm {
    fn snapshot(&self) -> StyleResult<StyleConfig> {
        let stroke_width = parse_positive(&self.stroke_width_text).ok_or_else(|| {
            StyleError::InvalidStrokeWidth {
                input: self.stroke_width_text.clone(),
            }
        })?;
        let dash_length = parse_positive(&self.dash_length_text).ok_or_else(|| {
            StyleError::InvalidDashLength {
                input: self.dash_length_text.clone(),
            }
        })?;

        Ok(StyleConfig::new(self.shape_kind)
            .with_stroke_width(stroke_width)
            .with_dash_length(dash_length)
            .with_filled(self.filled)
            .with_dashed(self.dashed)
            .with_gradient(self.use_gradient)
            .with_colors(self.first_color, self.second_color))
    }
}

fn parse_positive(text: &str) -> Option<NonZeroU32> {
    text.trim().parse::<NonZeroU32>().ok()
}
