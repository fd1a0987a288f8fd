use std::num::NonZeroU32;

use egui::{Color32, Pos2, Rect};
use shape_paint::{
    DrawOp, Drawable, Paint, Pen, RecordingSurface, ShapeKind, StyleConfig, factory,
};

fn width(px: u32) -> NonZeroU32 {
    NonZeroU32::new(px).unwrap()
}

fn render_one(start: Pos2, end: Pos2, style: &StyleConfig) -> Vec<DrawOp> {
    let shape = factory::create_shape(start, end, style);
    let mut surface = RecordingSurface::new();
    shape.render(&mut surface);
    surface.into_ops()
}

#[test]
fn test_factory_builds_requested_kind() {
    for kind in ShapeKind::ALL {
        let shape = factory::create_shape(
            Pos2::new(1.0, 2.0),
            Pos2::new(3.0, 4.0),
            &StyleConfig::new(kind),
        );
        assert_eq!(shape.kind(), kind);
        assert_eq!(shape.start(), Pos2::new(1.0, 2.0));
        assert_eq!(shape.end(), Pos2::new(3.0, 4.0));
    }
}

#[test]
fn test_filled_red_rectangle_scenario() {
    let style = StyleConfig::new(ShapeKind::Rectangle)
        .with_filled(true)
        .with_stroke_width(width(3))
        .with_colors(Color32::RED, Color32::BLACK);
    let shape = factory::create_shape(Pos2::new(10.0, 10.0), Pos2::new(50.0, 30.0), &style);

    let mut surface = RecordingSurface::new();
    shape.render(&mut surface);

    match surface.ops() {
        [DrawOp::FillRect { rect, paint }] => {
            assert_eq!(rect.min, Pos2::new(10.0, 10.0));
            assert_eq!(rect.width(), 40.0);
            assert_eq!(rect.height(), 20.0);
            assert_eq!(*paint, Paint::Solid(Color32::RED));
        }
        other => panic!("expected a single filled rectangle, got {:?}", other),
    }
}

#[test]
fn test_geometry_is_not_normalized_but_bounds_are() {
    let shape = factory::create_shape(
        Pos2::new(50.0, 30.0),
        Pos2::new(10.0, 10.0),
        &StyleConfig::new(ShapeKind::Oval),
    );
    assert_eq!(shape.start(), Pos2::new(50.0, 30.0));
    assert_eq!(shape.origin(), Pos2::new(10.0, 10.0));
    assert_eq!(shape.width(), 40.0);
    assert_eq!(shape.height(), 20.0);
}

#[test]
fn test_bounding_box_invariant_under_swapped_corners() {
    let a = Pos2::new(80.0, 15.0);
    let b = Pos2::new(20.0, 95.0);
    for kind in [ShapeKind::Oval, ShapeKind::Rectangle] {
        for filled in [false, true] {
            let style = StyleConfig::new(kind).with_filled(filled);
            let forward = render_one(a, b, &style);
            let backward = render_one(b, a, &style);
            assert_eq!(forward.len(), 1);
            assert_eq!(forward[0].bounds(), backward[0].bounds());
            assert_eq!(
                forward[0].bounds(),
                Rect::from_min_max(Pos2::new(20.0, 15.0), Pos2::new(80.0, 95.0))
            );
        }
    }
}

#[test]
fn test_line_ignores_fill() {
    let style = StyleConfig::new(ShapeKind::Line).with_filled(true);
    let ops = render_one(Pos2::new(0.0, 0.0), Pos2::new(5.0, 9.0), &style);
    assert_eq!(
        ops,
        vec![DrawOp::Line {
            from: Pos2::new(0.0, 0.0),
            to: Pos2::new(5.0, 9.0),
            pen: Pen::solid(3.0, Paint::Solid(Color32::BLACK)),
        }]
    );
}

#[test]
fn test_outline_uses_dashed_gradient_pen() {
    let style = StyleConfig::new(ShapeKind::Oval)
        .with_stroke_width(width(4))
        .with_dash_length(width(9))
        .with_dashed(true)
        .with_gradient(true)
        .with_colors(Color32::RED, Color32::BLUE);
    let start = Pos2::new(60.0, 40.0);
    let end = Pos2::new(0.0, 0.0);
    let ops = render_one(start, end, &style);

    let expected_paint = Paint::LinearGradient {
        from: start,
        to: end,
        from_color: Color32::RED,
        to_color: Color32::BLUE,
    };
    assert_eq!(
        ops,
        vec![DrawOp::StrokeEllipse {
            rect: Rect::from_min_max(end, start),
            pen: Pen::dashed(4.0, 9.0, expected_paint),
        }]
    );
}

#[test]
fn test_filled_gradient_rectangle_runs_from_start_to_end() {
    let style = StyleConfig::new(ShapeKind::Rectangle)
        .with_filled(true)
        .with_gradient(true)
        .with_colors(Color32::GREEN, Color32::RED);
    let ops = render_one(Pos2::new(0.0, 0.0), Pos2::new(100.0, 0.0), &style);
    let DrawOp::FillRect { paint, .. } = &ops[0] else {
        panic!("expected a fill, got {:?}", ops);
    };
    assert_eq!(paint.color_at(Pos2::new(0.0, 0.0)), Color32::GREEN);
    assert_eq!(paint.color_at(Pos2::new(100.0, 0.0)), Color32::RED);
}

#[test]
fn test_degenerate_shapes_render_zero_size() {
    let point = Pos2::new(7.0, 7.0);
    for kind in ShapeKind::ALL {
        let style = StyleConfig::new(kind);
        let ops = render_one(point, point, &style);
        assert_eq!(ops.len(), 1);
        let bounds = ops[0].bounds();
        assert_eq!(bounds.width(), 0.0);
        assert_eq!(bounds.height(), 0.0);
        assert_eq!(bounds.min, point);
    }
}

#[test]
fn test_shape_keeps_style_it_was_created_with() {
    let mut style = StyleConfig::new(ShapeKind::Rectangle).with_colors(Color32::RED, Color32::RED);
    let shape = factory::create_shape(Pos2::new(0.0, 0.0), Pos2::new(4.0, 4.0), &style);

    style = style.with_colors(Color32::BLUE, Color32::BLUE).with_filled(true);
    assert!(style.is_filled());

    assert_eq!(shape.style().first_color, Color32::RED);
    assert!(!shape.style().filled);
}
