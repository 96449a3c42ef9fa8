use crate::systems::geometry::Vec2;

/// Closest point to `p` on segment `ab`.
///
/// `t = ((p - a)·(b - a)) / |b - a|²` clamped to `[0, 1]`. A zero-length
/// segment has no direction to project onto, so it answers `a`.
pub fn closest_point_on_segment(p: Vec2, a: Vec2, b: Vec2) -> Vec2 {
    let ab = b - a;
    let len_sq = ab.length_squared();
    if len_sq == 0.0 {
        return a;
    }
    let t = ((p - a).dot(ab) / len_sq).clamp(0.0, 1.0);
    a + ab * t
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn projects_onto_interior() {
        let q = closest_point_on_segment(
            Vec2::new(5.0, 8.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(10.0, 0.0),
        );
        assert_eq!(q, Vec2::new(5.0, 0.0));
    }

    #[test]
    fn clamps_to_endpoints() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(10.0, 0.0);
        assert_eq!(closest_point_on_segment(Vec2::new(-3.0, 2.0), a, b), a);
        assert_eq!(closest_point_on_segment(Vec2::new(14.0, -1.0), a, b), b);
    }

    #[test]
    fn points_on_segment_map_to_themselves() {
        let a = Vec2::new(-12.5, 3.0);
        let b = Vec2::new(40.0, -17.25);
        for i in 0..=20 {
            let t = i as f64 / 20.0;
            let p = a + (b - a) * t;
            let q = closest_point_on_segment(p, a, b);
            assert_abs_diff_eq!(q.x, p.x, epsilon = 1e-9);
            assert_abs_diff_eq!(q.y, p.y, epsilon = 1e-9);
        }
    }

    #[test]
    fn degenerate_segment_returns_start_without_nan() {
        let a = Vec2::new(4.0, -2.0);
        let q = closest_point_on_segment(Vec2::new(100.0, 50.0), a, a);
        assert_eq!(q, a);
        assert!(q.is_finite());
    }
}
