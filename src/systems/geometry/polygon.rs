use std::f64::consts::TAU;

use super::vec2::Vec2;

/// Fewest sides a polygon may have
pub const MIN_SIDES: u32 = 3;

/// Clamp a host-provided side count: truncate toward zero, then floor at 3.
///
/// NaN and negative inputs land on the minimum.
pub fn clamp_side_count(n: f64) -> u32 {
    let truncated = n.trunc();
    if truncated.is_nan() || truncated < MIN_SIDES as f64 {
        MIN_SIDES
    } else if truncated >= u32::MAX as f64 {
        u32::MAX
    } else {
        truncated as u32
    }
}

/// Regular polygon with an eagerly derived vertex list.
///
/// Vertex `i` sits at `center + radius * (cos θ, sin θ)` with
/// `θ = rotation + i * 2π / sides`. Every setter rebuilds the list before
/// returning, so `vertices()` never lags behind the parameters.
#[derive(Clone, Debug)]
pub struct RegularPolygon {
    center: Vec2,
    radius: f64,
    sides: u32,
    rotation: f64,
    vertices: Vec<Vec2>,
}

impl RegularPolygon {
    pub fn new(center: Vec2, radius: f64, sides: u32, rotation: f64) -> Self {
        let mut polygon = Self {
            center,
            radius,
            sides: sides.max(MIN_SIDES),
            rotation,
            vertices: Vec::new(),
        };
        polygon.rebuild();
        polygon
    }

    pub fn center(&self) -> Vec2 { self.center }

    pub fn radius(&self) -> f64 { self.radius }

    pub fn sides(&self) -> u32 { self.sides }

    pub fn rotation(&self) -> f64 { self.rotation }

    /// Ordered vertex list; insertion order is winding order
    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Distance from center to the midpoint of a side
    pub fn apothem(&self) -> f64 {
        self.radius * (std::f64::consts::PI / self.sides as f64).cos()
    }

    /// Edges as `(start, end)` pairs, closing back to vertex 0
    pub fn edges(&self) -> impl Iterator<Item = (Vec2, Vec2)> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| (self.vertices[i], self.vertices[(i + 1) % n]))
    }

    pub fn set_side_count(&mut self, sides: u32) {
        self.sides = sides.max(MIN_SIDES);
        self.rebuild();
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
        self.rebuild();
    }

    pub fn set_center(&mut self, x: f64, y: f64) {
        self.center = Vec2::new(x, y);
        self.rebuild();
    }

    /// Add one side, uncapped
    pub fn grow(&mut self) {
        self.set_side_count(self.sides.saturating_add(1));
    }

    /// Flat `[x0, y0, x1, y1, ...]` buffer for the renderer
    pub fn flat_vertices(&self) -> Vec<f64> {
        let mut out = Vec::with_capacity(self.vertices.len() * 2);
        for v in &self.vertices {
            out.push(v.x);
            out.push(v.y);
        }
        out
    }

    fn rebuild(&mut self) {
        let step = TAU / self.sides as f64;
        self.vertices.clear();
        self.vertices.reserve(self.sides as usize);
        for i in 0..self.sides {
            let theta = self.rotation + i as f64 * step;
            let (sin, cos) = theta.sin_cos();
            self.vertices.push(Vec2::new(
                self.center.x + self.radius * cos,
                self.center.y + self.radius * sin,
            ));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn vertex_count_matches_sides_and_all_sit_on_circumcircle() {
        for n in 3..40 {
            let p = RegularPolygon::new(Vec2::new(12.0, -7.0), 55.0, n, 0.3);
            assert_eq!(p.vertices().len(), n as usize);
            for v in p.vertices() {
                assert_abs_diff_eq!(v.distance(p.center()), 55.0, epsilon = 1e-9);
            }
        }
    }

    #[test]
    fn consecutive_vertices_are_evenly_spaced() {
        let p = RegularPolygon::new(Vec2::zero(), 100.0, 7, -FRAC_PI_2);
        let side = p.vertices()[0].distance(p.vertices()[1]);
        for (a, b) in p.edges() {
            assert_abs_diff_eq!(a.distance(b), side, epsilon = 1e-9);
        }
    }

    #[test]
    fn first_vertex_follows_rotation() {
        let p = RegularPolygon::new(Vec2::zero(), 100.0, 6, -FRAC_PI_2);
        assert_abs_diff_eq!(p.vertices()[0].x, 0.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.vertices()[0].y, -100.0, epsilon = 1e-9);
    }

    #[test]
    fn setters_rebuild_immediately() {
        let mut p = RegularPolygon::new(Vec2::zero(), 10.0, 3, 0.0);

        p.set_side_count(9);
        assert_eq!(p.vertices().len(), 9);

        p.set_radius(20.0);
        assert_abs_diff_eq!(p.vertices()[0].x, 20.0, epsilon = 1e-9);

        p.set_center(5.0, 5.0);
        assert_abs_diff_eq!(p.vertices()[0].x, 25.0, epsilon = 1e-9);
        assert_abs_diff_eq!(p.vertices()[0].y, 5.0, epsilon = 1e-9);
    }

    #[test]
    fn side_count_never_drops_below_three() {
        let mut p = RegularPolygon::new(Vec2::zero(), 10.0, 0, 0.0);
        assert_eq!(p.sides(), 3);
        p.set_side_count(1);
        assert_eq!(p.vertices().len(), 3);
    }

    #[test]
    fn host_side_counts_truncate_then_clamp() {
        assert_eq!(clamp_side_count(7.9), 7);
        assert_eq!(clamp_side_count(3.99), 3);
        assert_eq!(clamp_side_count(2.5), 3);
        assert_eq!(clamp_side_count(-4.0), 3);
        assert_eq!(clamp_side_count(f64::NAN), 3);
    }

    #[test]
    fn grow_adds_one_side_and_vertex() {
        let mut p = RegularPolygon::new(Vec2::zero(), 10.0, 19, 0.0);
        p.grow();
        assert_eq!(p.sides(), 20);
        assert_eq!(p.vertices().len(), 20);
    }
}
