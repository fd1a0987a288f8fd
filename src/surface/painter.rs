use std::f32::consts::TAU;

use egui::epaint::Mesh;
use egui::{Painter, Pos2, Rect, Shape, Stroke, Vec2, vec2};

use super::{Paint, Pen, Surface};

/// Number of straight segments an ellipse outline is approximated with
const ELLIPSE_SEGMENTS: usize = 64;

/// Corners sharper than this (miter length over stroke width) are clamped
const MITER_LIMIT: f32 = 10.0;

/// Draws onto an egui [`Painter`].
///
/// Incoming coordinates are canvas-local and get shifted by the canvas'
/// top-left corner before being handed to egui.
pub struct EguiSurface<'a> {
    painter: &'a Painter,
    offset: Vec2,
}

impl<'a> EguiSurface<'a> {
    pub fn new(painter: &'a Painter, canvas_rect: Rect) -> Self {
        Self {
            painter,
            offset: canvas_rect.min.to_vec2(),
        }
    }

    fn to_screen(&self, pos: Pos2) -> Pos2 {
        pos + self.offset
    }

    fn fill_polygon(&self, points: &[Pos2], paint: &Paint) {
        if points.len() < 3 {
            return;
        }

        match *paint {
            Paint::Solid(color) => {
                let screen = points.iter().map(|p| self.to_screen(*p)).collect();
                self.painter
                    .add(Shape::convex_polygon(screen, color, Stroke::NONE));
            }
            Paint::LinearGradient { .. } => {
                self.painter.add(Shape::mesh(self.gradient_fan(points, paint)));
            }
        }
    }

    /// Triangle fan around the centroid, colored per vertex
    fn gradient_fan(&self, points: &[Pos2], paint: &Paint) -> Mesh {
        let centroid = points
            .iter()
            .fold(Vec2::ZERO, |sum, p| sum + p.to_vec2())
            / points.len() as f32;
        let centroid = centroid.to_pos2();

        let mut mesh = Mesh::default();
        mesh.colored_vertex(self.to_screen(centroid), paint.color_at(centroid));
        for point in points {
            mesh.colored_vertex(self.to_screen(*point), paint.color_at(*point));
        }

        let n = points.len() as u32;
        for i in 0..n {
            mesh.add_triangle(0, 1 + i, 1 + (i + 1) % n);
        }
        mesh
    }

    fn stroke_path(&self, points: &[Pos2], closed: bool, pen: &Pen) {
        if points.is_empty() {
            return;
        }

        let Some(dash) = pen.dash else {
            self.stroke_piece(points, closed, pen);
            return;
        };

        for piece in &dash_path(points, closed, dash) {
            self.stroke_piece(piece, false, pen);
            self.round_caps(piece, pen);
        }
    }

    fn stroke_piece(&self, points: &[Pos2], closed: bool, pen: &Pen) {
        match pen.paint {
            Paint::Solid(color) => {
                let screen = points.iter().map(|p| self.to_screen(*p)).collect();
                let stroke = Stroke::new(pen.width, color);
                if closed {
                    self.painter.add(Shape::closed_line(screen, stroke));
                } else {
                    self.painter.add(Shape::line(screen, stroke));
                }
            }
            Paint::LinearGradient { .. } => {
                let mesh = self.gradient_polyline(points, closed, pen);
                if !mesh.is_empty() {
                    self.painter.add(Shape::mesh(mesh));
                }
            }
        }
    }

    /// Triangle strip along the path with mitered corners, colored per vertex
    fn gradient_polyline(&self, points: &[Pos2], closed: bool, pen: &Pen) -> Mesh {
        let mut path: Vec<Pos2> = Vec::with_capacity(points.len());
        for &point in points {
            if path.last().is_none_or(|last| (point - *last).length() > f32::EPSILON) {
                path.push(point);
            }
        }
        if closed && path.len() > 2 && (path[0] - path[path.len() - 1]).length() <= f32::EPSILON {
            path.pop();
        }

        let mut mesh = Mesh::default();
        let n = path.len();
        if n < 2 {
            return mesh;
        }
        let closed = closed && n > 2;
        let half_width = pen.width / 2.0;

        for i in 0..n {
            let incoming = (i > 0 || closed).then(|| unit_normal(path[(i + n - 1) % n], path[i]));
            let outgoing = (i + 1 < n || closed).then(|| unit_normal(path[i], path[(i + 1) % n]));
            let offset = match (incoming, outgoing) {
                (Some(a), Some(b)) => miter_offset(a, b),
                (Some(normal), None) | (None, Some(normal)) => normal,
                (None, None) => Vec2::ZERO,
            } * half_width;

            let color = pen.paint.color_at(path[i]);
            mesh.colored_vertex(self.to_screen(path[i] + offset), color);
            mesh.colored_vertex(self.to_screen(path[i] - offset), color);
        }

        let segments = if closed { n } else { n - 1 };
        for i in 0..segments {
            let (a, b) = (2 * i as u32, 2 * ((i + 1) % n) as u32);
            mesh.add_triangle(a, a + 1, b);
            mesh.add_triangle(a + 1, b + 1, b);
        }
        mesh
    }

    fn round_caps(&self, piece: &[Pos2], pen: &Pen) {
        let radius = pen.width / 2.0;
        if let (Some(first), Some(last)) = (piece.first(), piece.last()) {
            for end in [*first, *last] {
                self.painter.add(Shape::circle_filled(
                    self.to_screen(end),
                    radius,
                    pen.paint.color_at(end),
                ));
            }
        }
    }
}

impl Surface for EguiSurface<'_> {
    fn line(&mut self, from: Pos2, to: Pos2, pen: &Pen) {
        self.stroke_path(&[from, to], false, pen);
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.fill_polygon(&rect_points(rect), paint);
    }

    fn stroke_rect(&mut self, rect: Rect, pen: &Pen) {
        self.stroke_path(&rect_points(rect), true, pen);
    }

    fn fill_ellipse(&mut self, rect: Rect, paint: &Paint) {
        self.fill_polygon(&ellipse_points(rect), paint);
    }

    fn stroke_ellipse(&mut self, rect: Rect, pen: &Pen) {
        self.stroke_path(&ellipse_points(rect), true, pen);
    }
}

fn unit_normal(from: Pos2, to: Pos2) -> Vec2 {
    let dir = (to - from).normalized();
    vec2(-dir.y, dir.x)
}

/// Offset for a unit-width stroke at a corner between two segment normals
fn miter_offset(incoming: Vec2, outgoing: Vec2) -> Vec2 {
    let sum = incoming + outgoing;
    if sum.length() <= f32::EPSILON {
        // Path doubles back on itself
        return incoming;
    }
    let miter = sum.normalized();
    let cos_half_angle = miter.dot(incoming).max(1.0 / MITER_LIMIT);
    miter / cos_half_angle
}

fn rect_points(rect: Rect) -> [Pos2; 4] {
    [
        rect.left_top(),
        rect.right_top(),
        rect.right_bottom(),
        rect.left_bottom(),
    ]
}

fn ellipse_points(rect: Rect) -> Vec<Pos2> {
    let center = rect.center();
    let radius = rect.size() / 2.0;
    (0..ELLIPSE_SEGMENTS)
        .map(|i| {
            let angle = i as f32 / ELLIPSE_SEGMENTS as f32 * TAU;
            center + vec2(radius.x * angle.cos(), radius.y * angle.sin())
        })
        .collect()
}

fn close_path(points: &[Pos2], closed: bool) -> Vec<Pos2> {
    let mut path = points.to_vec();
    if closed {
        if let Some(first) = points.first() {
            path.push(*first);
        }
    }
    path
}

/// Split a path into the "on" pieces of a dash pattern with equal on and
/// off lengths. The pattern starts "on" at the first point and carries
/// across corners.
pub(crate) fn dash_path(points: &[Pos2], closed: bool, dash: f32) -> Vec<Vec<Pos2>> {
    let path = close_path(points, closed);
    if path.len() < 2 {
        return Vec::new();
    }
    if dash <= 0.0 {
        return vec![path];
    }

    let mut pieces = Vec::new();
    let mut current = vec![path[0]];
    let mut on = true;
    let mut remaining = dash;

    for segment in path.windows(2) {
        let (mut a, b) = (segment[0], segment[1]);
        let mut length = (b - a).length();

        while length > remaining {
            let split = a + (b - a) * (remaining / length);
            if on {
                current.push(split);
                pieces.push(std::mem::take(&mut current));
            } else {
                current = vec![split];
            }
            on = !on;
            length -= remaining;
            a = split;
            remaining = dash;
        }

        remaining -= length;
        if on {
            current.push(b);
        }
    }

    if on && current.len() > 1 {
        pieces.push(current);
    }
    pieces
}
