use thiserror::Error;

/// Errors raised while turning the controls into a usable style.
///
/// These are input-validation failures: the user typed something the
/// canvas cannot draw with. They are reported and the app keeps running.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// Line width text is not a positive integer
    #[error("line width must be a positive whole number, got {input:?}")]
    InvalidStrokeWidth { input: String },

    /// Dash length text is not a positive integer
    #[error("dash length must be a positive whole number, got {input:?}")]
    InvalidDashLength { input: String },

    /// A shape name that is not one of Line, Oval or Rectangle
    #[error("unknown shape kind {name:?}")]
    UnknownShapeKind { name: String },
}

pub type StyleResult<T> = Result<T, StyleError>;
