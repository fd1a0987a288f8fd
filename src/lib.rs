#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod error;
pub mod input;
pub mod panels;
pub mod shape;
pub mod style;
pub mod surface;

pub use app::PaintApp;
pub use canvas::Canvas;
pub use error::{StyleError, StyleResult};
pub use input::{CanvasEvent, InputHandler, PointerSnapshot};
pub use shape::{Drawable, Shape, factory};
pub use style::{ShapeKind, StyleConfig, StyleForm, StyleSource};
pub use surface::{DrawOp, EguiSurface, Paint, Pen, RecordingSurface, Surface};
