use egui::{LayerId, Painter, Pos2, Rect};

use crate::canvas::Canvas;
use crate::error::StyleError;
use crate::input::{CanvasEvent, InputHandler};
use crate::panels::{central_panel, controls_panel, status_bar};
use crate::style::StyleForm;
use crate::surface::EguiSurface;

/// We derive Deserialize/Serialize so the controls survive a restart.
/// Drawings are never persisted.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)] // if we add new fields, give them default values when deserializing old state
pub struct PaintApp {
    style_form: StyleForm,
    #[serde(skip)]
    canvas: Canvas,
    #[serde(skip)]
    input: InputHandler,
    // Last rejected style, shown until the next successful shape update
    #[serde(skip)]
    last_error: Option<StyleError>,
}

impl Default for PaintApp {
    fn default() -> Self {
        Self {
            style_form: StyleForm::default(),
            canvas: Canvas::new(),
            input: InputHandler::default(),
            last_error: None,
        }
    }
}

impl PaintApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Load previous control settings (if any).
        if let Some(storage) = cc.storage {
            if let Some(app) = eframe::get_value::<Self>(storage, eframe::APP_KEY) {
                log::info!("Restored controls from previous session");
                return app;
            }
        }
        Default::default()
    }

    pub fn style_form(&self) -> &StyleForm {
        &self.style_form
    }

    pub fn style_form_mut(&mut self) -> &mut StyleForm {
        &mut self.style_form
    }

    pub fn canvas(&self) -> &Canvas {
        &self.canvas
    }

    pub fn last_error(&self) -> Option<&StyleError> {
        self.last_error.as_ref()
    }

    /// Canvas-local pointer position for the status bar
    pub fn pointer_location(&self) -> Option<Pos2> {
        self.input.pointer_location()
    }

    pub fn clear(&mut self) {
        self.canvas.clear();
    }

    pub fn undo(&mut self) {
        self.canvas.undo_last();
    }

    /// Feed this frame's pointer input into the canvas painted at
    /// `canvas_rect` on `canvas_layer`
    pub fn handle_canvas_input(
        &mut self,
        ctx: &egui::Context,
        canvas_rect: Rect,
        canvas_layer: LayerId,
    ) {
        self.input.set_canvas_rect(canvas_rect);

        for event in self.input.process_input(ctx, canvas_layer) {
            self.apply_event(event);
            ctx.request_repaint();
        }
    }

    fn apply_event(&mut self, event: CanvasEvent) {
        match self.canvas.handle_event(event, &self.style_form) {
            Ok(()) => {
                if matches!(event, CanvasEvent::PointerMove { .. }) {
                    self.last_error = None;
                }
            }
            Err(err) => {
                if self.last_error.as_ref() != Some(&err) {
                    log::warn!("Cannot draw with current controls: {}", err);
                }
                self.last_error = Some(err);
            }
        }
    }

    /// Draw the canvas contents into `canvas_rect`
    pub fn render_canvas(&self, painter: &Painter, canvas_rect: Rect) {
        let mut surface = EguiSurface::new(painter, canvas_rect);
        self.canvas.render(&mut surface);
    }
}

impl eframe::App for PaintApp {
    /// Called by the frame work to save state before shutdown.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        eframe::set_value(storage, eframe::APP_KEY, self);
    }

    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Panels first, the central panel takes whatever space is left
        controls_panel(self, ctx);
        status_bar(self, ctx);
        central_panel(self, ctx);
    }
}
