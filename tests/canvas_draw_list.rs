use egui::{Color32, Pos2};
use shape_paint::{
    Canvas, CanvasEvent, DrawOp, Drawable, RecordingSurface, ShapeKind, StyleConfig, StyleError,
    StyleForm,
};

// Helper to drag out one shape and release it
fn commit(canvas: &mut Canvas, from: Pos2, to: Pos2, style: &StyleConfig) {
    canvas.pointer_down(from);
    canvas.pointer_move(to, style).unwrap();
    canvas.pointer_up();
}

fn line_style() -> StyleConfig {
    StyleConfig::new(ShapeKind::Line)
}

#[test]
fn test_render_order_is_insertion_order_then_transient() {
    let mut canvas = Canvas::new();
    let rect = StyleConfig::new(ShapeKind::Rectangle).with_filled(true);
    let oval = StyleConfig::new(ShapeKind::Oval);

    commit(&mut canvas, Pos2::new(0.0, 0.0), Pos2::new(10.0, 10.0), &rect);
    commit(&mut canvas, Pos2::new(20.0, 20.0), Pos2::new(30.0, 30.0), &oval);
    commit(&mut canvas, Pos2::new(40.0, 40.0), Pos2::new(50.0, 50.0), &line_style());

    canvas.pointer_down(Pos2::new(1.0, 1.0));
    canvas
        .pointer_move(Pos2::new(2.0, 3.0), &StyleConfig::new(ShapeKind::Rectangle))
        .unwrap();

    let mut surface = RecordingSurface::new();
    canvas.render(&mut surface);

    let ops = surface.ops();
    assert_eq!(ops.len(), 4);
    assert!(matches!(ops[0], DrawOp::FillRect { .. }));
    assert!(matches!(ops[1], DrawOp::StrokeEllipse { .. }));
    assert!(matches!(ops[2], DrawOp::Line { .. }));
    assert!(matches!(ops[3], DrawOp::StrokeRect { .. }));
    assert_eq!(ops[3].bounds().max, Pos2::new(2.0, 3.0));
}

#[test]
fn test_transient_is_not_committed() {
    let mut canvas = Canvas::new();
    canvas.pointer_down(Pos2::new(0.0, 0.0));
    canvas.pointer_move(Pos2::new(5.0, 5.0), &line_style()).unwrap();

    assert!(canvas.is_empty());
    assert!(canvas.transient().is_some());
}

#[test]
fn test_press_and_release_without_move_commits_nothing() {
    let mut canvas = Canvas::new();
    let style = line_style();
    canvas
        .handle_event(CanvasEvent::PointerDown { pos: Pos2::new(0.0, 0.0) }, &style)
        .unwrap();
    canvas
        .handle_event(CanvasEvent::PointerUp { pos: Pos2::new(0.0, 0.0) }, &style)
        .unwrap();

    assert_eq!(canvas.len(), 0);
    assert!(!canvas.is_dragging());
}

#[test]
fn test_undo_removes_most_recent() {
    let mut canvas = Canvas::new();
    let a_style = line_style().with_colors(Color32::RED, Color32::RED);
    let b_style = line_style().with_colors(Color32::BLUE, Color32::BLUE);
    commit(&mut canvas, Pos2::new(0.0, 0.0), Pos2::new(1.0, 1.0), &a_style);
    commit(&mut canvas, Pos2::new(2.0, 2.0), Pos2::new(3.0, 3.0), &b_style);

    canvas.undo_last();

    assert_eq!(canvas.len(), 1);
    assert_eq!(canvas.shapes()[0].style().first_color, Color32::RED);
}

#[test]
fn test_undo_shrinks_by_one_until_empty() {
    let mut canvas = Canvas::new();
    for i in 0..5 {
        let p = Pos2::new(i as f32, 0.0);
        commit(&mut canvas, p, p + egui::vec2(3.0, 3.0), &line_style());
    }

    for expected in (0..5).rev() {
        canvas.undo_last();
        assert_eq!(canvas.len(), expected);
    }

    // Empty list: still a no-op
    assert!(canvas.undo_last().is_none());
    assert_eq!(canvas.len(), 0);
}

#[test]
fn test_clear_empties_list_but_keeps_drag() {
    let mut canvas = Canvas::new();
    canvas.clear();
    assert!(canvas.is_empty());

    commit(&mut canvas, Pos2::new(0.0, 0.0), Pos2::new(5.0, 5.0), &line_style());
    commit(&mut canvas, Pos2::new(5.0, 5.0), Pos2::new(9.0, 9.0), &line_style());

    canvas.pointer_down(Pos2::new(20.0, 20.0));
    canvas.pointer_move(Pos2::new(25.0, 30.0), &line_style()).unwrap();
    canvas.clear();

    assert_eq!(canvas.len(), 0);
    let transient = canvas.transient().expect("drag should survive clear");
    assert_eq!(transient.end(), Pos2::new(25.0, 30.0));

    // Finishing the drag still commits it
    canvas.pointer_up();
    assert_eq!(canvas.len(), 1);
}

#[test]
fn test_style_change_mid_drag_only_affects_transient() {
    let mut form = StyleForm::default();
    let mut canvas = Canvas::new();

    canvas.pointer_down(Pos2::new(0.0, 0.0));
    canvas.pointer_move(Pos2::new(5.0, 5.0), &form).unwrap();
    canvas.pointer_up();

    form.shape_kind = ShapeKind::Oval;
    form.first_color = Color32::GREEN;
    canvas.pointer_down(Pos2::new(10.0, 10.0));
    canvas.pointer_move(Pos2::new(20.0, 20.0), &form).unwrap();

    assert_eq!(canvas.shapes()[0].kind(), ShapeKind::Line);
    assert_eq!(canvas.shapes()[0].style().first_color, Color32::BLACK);
    assert_eq!(canvas.transient().unwrap().kind(), ShapeKind::Oval);
}

#[test]
fn test_invalid_numeric_input_is_a_recoverable_error() {
    let mut canvas = Canvas::new();
    let form = StyleForm {
        dash_length_text: "0".to_string(),
        ..Default::default()
    };

    canvas.pointer_down(Pos2::new(0.0, 0.0));
    let result = canvas.handle_event(CanvasEvent::PointerMove { pos: Pos2::new(4.0, 4.0) }, &form);
    assert_eq!(
        result,
        Err(StyleError::InvalidDashLength {
            input: "0".to_string()
        })
    );

    canvas.pointer_up();
    assert!(canvas.is_empty());
    assert!(!canvas.is_dragging());
}
