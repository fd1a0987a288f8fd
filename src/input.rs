use egui::{Context, LayerId, PointerButton, Pos2, Rect};

/// Pointer events the canvas reacts to, in canvas-local coordinates
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CanvasEvent {
    /// Primary button pressed inside the canvas
    PointerDown { pos: Pos2 },
    /// Pointer moved with the primary button held during a gesture
    PointerMove { pos: Pos2 },
    /// Primary button released, ending a gesture
    PointerUp { pos: Pos2 },
}

/// The bits of egui's pointer state the handler looks at for one frame
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct PointerSnapshot {
    /// Current pointer position in screen coordinates
    pub hover_pos: Option<Pos2>,
    pub primary_pressed: bool,
    pub primary_down: bool,
    pub primary_released: bool,
    /// Another layer (an open popup, a color picker) is on top of the canvas
    /// under the pointer
    pub covered: bool,
}

impl PointerSnapshot {
    /// Read the pointer state, treating `canvas_layer` as the layer the
    /// canvas is painted on
    pub fn from_context(ctx: &Context, canvas_layer: LayerId) -> Self {
        let mut snapshot = ctx.input(|input| Self {
            hover_pos: input.pointer.hover_pos(),
            primary_pressed: input.pointer.button_pressed(PointerButton::Primary),
            primary_down: input.pointer.button_down(PointerButton::Primary),
            primary_released: input.pointer.button_released(PointerButton::Primary),
            covered: false,
        });
        snapshot.covered = snapshot
            .hover_pos
            .and_then(|pos| ctx.layer_id_at(pos))
            .is_some_and(|layer| layer != canvas_layer);
        snapshot
    }
}

/// Turns raw egui pointer input into [`CanvasEvent`]s.
///
/// A gesture only starts with a press inside the canvas that no other layer
/// covers; once started, it keeps receiving moves and the release even
/// outside the canvas bounds.
pub struct InputHandler {
    canvas_rect: Rect,
    last_pointer_pos: Option<Pos2>,
    hover_pos: Option<Pos2>,
    in_gesture: bool,
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new(Rect::NOTHING)
    }
}

impl InputHandler {
    pub fn new(canvas_rect: Rect) -> Self {
        Self {
            canvas_rect,
            last_pointer_pos: None,
            hover_pos: None,
            in_gesture: false,
        }
    }

    /// Update the canvas rectangle (e.g. if window is resized)
    pub fn set_canvas_rect(&mut self, rect: Rect) {
        self.canvas_rect = rect;
    }

    /// Last pointer position in canvas-local coordinates, if it is over the canvas
    pub fn pointer_location(&self) -> Option<Pos2> {
        self.hover_pos
            .filter(|pos| self.canvas_rect.contains(*pos))
            .map(|pos| self.to_local(pos))
    }

    fn to_local(&self, pos: Pos2) -> Pos2 {
        pos - self.canvas_rect.min.to_vec2()
    }

    /// Process raw egui input and generate canvas events
    pub fn process_input(&mut self, ctx: &Context, canvas_layer: LayerId) -> Vec<CanvasEvent> {
        self.translate(PointerSnapshot::from_context(ctx, canvas_layer))
    }

    pub fn translate(&mut self, pointer: PointerSnapshot) -> Vec<CanvasEvent> {
        let mut events = Vec::new();
        self.hover_pos = pointer.hover_pos;
        let Some(pos) = pointer.hover_pos.or(self.last_pointer_pos) else {
            return events;
        };
        let moved = Some(pos) != self.last_pointer_pos;
        self.last_pointer_pos = Some(pos);
        let local = self.to_local(pos);

        if pointer.primary_pressed && !pointer.covered && self.canvas_rect.contains(pos) {
            self.in_gesture = true;
            events.push(CanvasEvent::PointerDown { pos: local });
        } else if self.in_gesture && pointer.primary_down && moved {
            events.push(CanvasEvent::PointerMove { pos: local });
        }

        if self.in_gesture && pointer.primary_released {
            self.in_gesture = false;
            events.push(CanvasEvent::PointerUp { pos: local });
        }

        events
    }
}
