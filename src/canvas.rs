use egui::Pos2;
use log::{debug, info};

use crate::error::StyleResult;
use crate::input::CanvasEvent;
use crate::shape::{Drawable, Shape, factory};
use crate::style::StyleSource;
use crate::surface::Surface;

/// Where the canvas is in a drag gesture.
///
/// ```text
///   ┌──────┐  pointer down   ┌──────────┐
///   │ Idle ├────────────────►│ Dragging ├──┐ pointer move:
///   │      │◄────────────────┤          │◄─┘ rebuild transient
///   └──────┘  pointer up     └──────────┘
///             (commit transient, if any)
/// ```
#[derive(Debug, Clone, Default)]
enum CanvasState {
    #[default]
    Idle,
    Dragging {
        start: Pos2,
        /// Built on the first move; absent after a bare press
        transient: Option<Shape>,
    },
}

/// Owns the committed shapes and the shape currently being dragged out.
///
/// Committed shapes are drawn in insertion order; the transient shape is
/// never part of that list and is always drawn last.
#[derive(Debug, Default)]
pub struct Canvas {
    shapes: Vec<Shape>,
    state: CanvasState,
}

impl Canvas {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed shapes, oldest first
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    pub fn transient(&self) -> Option<&Shape> {
        match &self.state {
            CanvasState::Dragging { transient, .. } => transient.as_ref(),
            CanvasState::Idle => None,
        }
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.state, CanvasState::Dragging { .. })
    }

    pub fn can_undo(&self) -> bool {
        !self.shapes.is_empty()
    }

    /// Route a pointer event to the matching transition
    pub fn handle_event(
        &mut self,
        event: CanvasEvent,
        style: &impl StyleSource,
    ) -> StyleResult<()> {
        match event {
            CanvasEvent::PointerDown { pos } => {
                self.pointer_down(pos);
                Ok(())
            }
            CanvasEvent::PointerMove { pos } => self.pointer_move(pos, style),
            CanvasEvent::PointerUp { .. } => {
                self.pointer_up();
                Ok(())
            }
        }
    }

    /// Start a gesture at `pos`. Pressing again mid-drag restarts it.
    pub fn pointer_down(&mut self, pos: Pos2) {
        debug!("Drag started at {:?}", pos);
        self.state = CanvasState::Dragging {
            start: pos,
            transient: None,
        };
    }

    /// Rebuild the transient shape from the drag start to `pos` with the
    /// style as it is right now.
    ///
    /// If the style cannot be read the previous transient shape is kept and
    /// the error is returned. Moves outside a gesture are ignored.
    pub fn pointer_move(&mut self, pos: Pos2, style: &impl StyleSource) -> StyleResult<()> {
        let CanvasState::Dragging { start, transient } = &mut self.state else {
            return Ok(());
        };

        let style = style.snapshot()?;
        *transient = Some(factory::create_shape(*start, pos, &style));
        Ok(())
    }

    /// Finish the gesture, committing the transient shape if one was built
    pub fn pointer_up(&mut self) {
        match std::mem::take(&mut self.state) {
            CanvasState::Dragging {
                transient: Some(shape),
                ..
            } => {
                info!(
                    "Committed {} from {:?} to {:?}",
                    shape.kind(),
                    shape.start(),
                    shape.end()
                );
                self.shapes.push(shape);
            }
            CanvasState::Dragging { transient: None, .. } => {
                debug!("Drag ended without movement, nothing committed");
            }
            CanvasState::Idle => {}
        }
    }

    /// Remove every committed shape. A drag in progress is left alone.
    pub fn clear(&mut self) {
        if self.shapes.is_empty() {
            return;
        }
        info!("Cleared {} shapes", self.shapes.len());
        self.shapes.clear();
    }

    /// Remove the most recently committed shape, if there is one
    pub fn undo_last(&mut self) -> Option<Shape> {
        let removed = self.shapes.pop();
        if let Some(shape) = &removed {
            info!("Undid {}, {} shapes left", shape.kind(), self.shapes.len());
        }
        removed
    }

    /// Draw committed shapes oldest first, then the transient shape on top
    pub fn render(&self, surface: &mut dyn Surface) {
        for shape in &self.shapes {
            shape.render(surface);
        }
        if let Some(shape) = self.transient() {
            shape.render(surface);
        }
    }
}
