use crate::core::random::random_range;
use crate::systems::body::PhysicsBody;
use crate::systems::geometry::{Vec2, MIN_SIDES};

use super::level::{NestedLevel, DEEP_TUNING, INNER_TUNING};

const INNER_RADIUS_RATIO: f64 = 0.42;
const INNER_BODY_OFFSET: (f64, f64) = (-0.12, -0.14);
const INNER_BODY_RADIUS_RATIO: f64 = 0.22;
const INNER_BODY_MIN_RADIUS: f64 = 6.0;
const INNER_GRAVITY_RATIO: f64 = 1.1;
const INNER_SPEED: f64 = 20.0;

const DEEP_POSITION_RATIO: f64 = 0.35;
const DEEP_BODY_RADIUS_RATIO: f64 = 0.35;
const DEEP_BODY_MIN_RADIUS: f64 = 2.0;
const DEEP_POLYGON_RATIO: f64 = 0.6;
const DEEP_SPEED: f64 = 15.0;

/// Tier 1 plus its optional terminal tier 2
#[derive(Clone, Debug)]
pub struct InnerLevel {
    pub level: NestedLevel,
    /// Tier 2, materialized on the first tick the depth gate allows it
    pub deep: Option<NestedLevel>,
}

/// What happened inside the tree during one tick
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NestedReport {
    pub inner_hit: bool,
    pub deep_hit: bool,
    pub deep_spawned: bool,
}

/// Bounded two-tier nesting hosted by one body.
///
/// Tier 1 exists iff `current_depth < max_depth` when the tree is built.
/// Tier 2 appears lazily iff `current_depth + 1 < max_depth`. Nothing deeper
/// is ever simulated, however large `max_depth` is.
#[derive(Clone, Debug)]
pub struct NestedSimulationTree {
    current_depth: u32,
    max_depth: u32,
    inner: Option<InnerLevel>,
}

impl NestedSimulationTree {
    /// Build the tree for `parent`, drawing tier-1 velocity from `rng`
    pub fn build(parent: &PhysicsBody, current_depth: u32, max_depth: u32, rng: &mut u32) -> Self {
        let inner = (current_depth < max_depth).then(|| InnerLevel {
            level: spawn_inner(parent, current_depth, rng),
            deep: None,
        });
        Self { current_depth, max_depth, inner }
    }

    pub fn current_depth(&self) -> u32 { self.current_depth }

    pub fn max_depth(&self) -> u32 { self.max_depth }

    pub fn inner(&self) -> Option<&InnerLevel> {
        self.inner.as_ref()
    }

    pub fn deep(&self) -> Option<&NestedLevel> {
        self.inner.as_ref().and_then(|i| i.deep.as_ref())
    }

    /// Number of live nested tiers (0, 1 or 2)
    pub fn active_tiers(&self) -> u32 {
        match &self.inner {
            None => 0,
            Some(InnerLevel { deep: None, .. }) => 1,
            Some(InnerLevel { deep: Some(_), .. }) => 2,
        }
    }

    /// Re-derive the tier-1 body's gravity after the host body's changed.
    /// Tier 2 scales the tier-1 body's gravity, so it follows on the next tick.
    pub fn set_host_gravity(&mut self, gravity: f64) {
        if let Some(inner) = self.inner.as_mut() {
            inner.level.body.gravity = gravity * INNER_GRAVITY_RATIO;
        }
    }

    /// Advance tier 1, then tier 2. `parent_gravity` is the hosting body's.
    pub fn update(&mut self, parent_gravity: f64, dt: f64, rng: &mut u32) -> NestedReport {
        let mut report = NestedReport::default();
        let Some(InnerLevel { level, deep }) = self.inner.as_mut() else {
            return report;
        };

        report.inner_hit = level.step(parent_gravity, dt, &INNER_TUNING);

        let inner_depth = self.current_depth + 1;
        if inner_depth >= self.max_depth {
            return report;
        }

        if deep.is_none() {
            *deep = Some(spawn_deep(&level.body, inner_depth, rng));
            report.deep_spawned = true;
        }
        if let Some(deep) = deep.as_mut() {
            deep.radius = level.body.radius * DEEP_POLYGON_RATIO;
            report.deep_hit = deep.step(level.body.gravity, dt, &DEEP_TUNING);
        }
        report
    }
}

fn spawn_inner(parent: &PhysicsBody, current_depth: u32, rng: &mut u32) -> NestedLevel {
    let r = parent.radius;
    let vx = random_range(rng, -INNER_SPEED, INNER_SPEED);
    let vy = random_range(rng, -INNER_SPEED, INNER_SPEED);
    let radius = (r * INNER_BODY_RADIUS_RATIO).max(INNER_BODY_MIN_RADIUS);
    let body = PhysicsBody::new(INNER_BODY_OFFSET.0 * r, INNER_BODY_OFFSET.1 * r, radius)
        .with_velocity(vx, vy)
        .with_gravity(parent.gravity * INNER_GRAVITY_RATIO);

    NestedLevel {
        center: Vec2::zero(),
        radius: r * INNER_RADIUS_RATIO,
        sides: MIN_SIDES.max(current_depth.saturating_add(4)),
        body,
    }
}

fn spawn_deep(inner_body: &PhysicsBody, depth: u32, rng: &mut u32) -> NestedLevel {
    let vx = random_range(rng, -DEEP_SPEED, DEEP_SPEED);
    let vy = random_range(rng, -DEEP_SPEED, DEEP_SPEED);
    let pos = inner_body.pos * DEEP_POSITION_RATIO;
    let radius = (inner_body.radius * DEEP_BODY_RADIUS_RATIO).max(DEEP_BODY_MIN_RADIUS);
    let body = PhysicsBody::new(pos.x, pos.y, radius)
        .with_velocity(vx, vy)
        .with_gravity(inner_body.gravity);

    crate::engine_log!("nested: deep tier materialized at depth {}", depth + 1);

    NestedLevel {
        center: Vec2::zero(),
        radius: inner_body.radius * DEEP_POLYGON_RATIO,
        sides: MIN_SIDES.max(depth.saturating_add(4)),
        body,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn parent() -> PhysicsBody {
        PhysicsBody::new(0.0, 0.0, 40.0).with_gravity(900.0)
    }

    #[test]
    fn depth_zero_builds_nothing() {
        let mut rng = 1;
        let mut tree = NestedSimulationTree::build(&parent(), 0, 0, &mut rng);
        assert!(tree.inner().is_none());
        assert_eq!(tree.update(900.0, 0.016, &mut rng), NestedReport::default());
        assert_eq!(tree.active_tiers(), 0);
    }

    #[test]
    fn inner_level_is_scaled_from_parent() {
        let mut rng = 1;
        let tree = NestedSimulationTree::build(&parent(), 0, 1, &mut rng);
        let inner = &tree.inner().expect("tier 1").level;

        assert_abs_diff_eq!(inner.radius, 16.8, epsilon = 1e-12);
        assert_eq!(inner.sides, 4);
        assert_eq!(inner.center, Vec2::zero());
        assert_abs_diff_eq!(inner.body.pos.x, -4.8, epsilon = 1e-12);
        assert_abs_diff_eq!(inner.body.pos.y, -5.6, epsilon = 1e-12);
        assert_abs_diff_eq!(inner.body.radius, 8.8, epsilon = 1e-12);
        assert_abs_diff_eq!(inner.body.gravity, 990.0, epsilon = 1e-9);
        assert!(inner.body.velocity.x.abs() <= 20.0);
        assert!(inner.body.velocity.y.abs() <= 20.0);
    }

    #[test]
    fn small_parent_gets_minimum_inner_radius() {
        let mut rng = 1;
        let small = PhysicsBody::new(0.0, 0.0, 10.0);
        let tree = NestedSimulationTree::build(&small, 0, 3, &mut rng);
        assert_eq!(tree.inner().map(|i| i.level.body.radius), Some(6.0));
    }

    #[test]
    fn inner_sides_depend_on_current_depth() {
        let mut rng = 1;
        let tree = NestedSimulationTree::build(&parent(), 2, 5, &mut rng);
        assert_eq!(tree.inner().map(|i| i.level.sides), Some(6));
    }

    #[test]
    fn depth_one_never_materializes_deep_tier() {
        let mut rng = 1;
        let mut tree = NestedSimulationTree::build(&parent(), 0, 1, &mut rng);
        for _ in 0..500 {
            let report = tree.update(900.0, 0.016, &mut rng);
            assert!(!report.deep_spawned);
        }
        assert!(tree.deep().is_none());
        assert_eq!(tree.active_tiers(), 1);
    }

    #[test]
    fn depth_two_materializes_deep_tier_on_first_tick() {
        let mut rng = 1;
        let mut tree = NestedSimulationTree::build(&parent(), 0, 2, &mut rng);
        assert!(tree.deep().is_none());

        let report = tree.update(900.0, 0.016, &mut rng);
        assert!(report.deep_spawned);
        let deep = tree.deep().expect("tier 2");
        assert_abs_diff_eq!(deep.radius, 8.8 * 0.6, epsilon = 1e-12);

        let again = tree.update(900.0, 0.016, &mut rng);
        assert!(!again.deep_spawned);
    }

    #[test]
    fn deep_level_is_scaled_from_inner_body() {
        let mut rng = 5;
        let inner_body = PhysicsBody::new(10.0, -20.0, 8.8).with_gravity(990.0);
        let deep = spawn_deep(&inner_body, 1, &mut rng);

        assert_eq!(deep.sides, 5);
        assert_eq!(deep.center, Vec2::zero());
        assert_abs_diff_eq!(deep.body.pos.x, 3.5, epsilon = 1e-12);
        assert_abs_diff_eq!(deep.body.pos.y, -7.0, epsilon = 1e-12);
        assert_abs_diff_eq!(deep.body.radius, 8.8 * 0.35, epsilon = 1e-12);
        assert_abs_diff_eq!(deep.radius, 8.8 * 0.6, epsilon = 1e-12);
        assert!(deep.body.velocity.x.abs() <= 15.0);
        assert!(deep.body.velocity.y.abs() <= 15.0);
    }

    #[test]
    fn tiny_inner_body_gets_minimum_deep_radius() {
        let mut rng = 5;
        let inner_body = PhysicsBody::new(0.0, 0.0, 4.0);
        assert_eq!(spawn_deep(&inner_body, 1, &mut rng).body.radius, 2.0);
    }

    #[test]
    fn host_gravity_change_reaches_both_tiers() {
        let mut rng = 1;
        let mut tree = NestedSimulationTree::build(&parent(), 0, 2, &mut rng);
        tree.update(900.0, 0.016, &mut rng);

        tree.set_host_gravity(0.0);
        let inner = tree.inner().expect("tier 1");
        assert_eq!(inner.level.body.gravity, 0.0);

        // Tier 2 steps with 0.18 x tier-1 body gravity, now zero
        let mut deep = tree.deep().expect("tier 2").clone();
        let vy = deep.body.velocity.y;
        deep.body.pos = Vec2::zero();
        deep.step(inner.level.body.gravity, 0.001, &DEEP_TUNING);
        assert_eq!(deep.body.velocity.y, vy);
    }

    #[test]
    fn host_gravity_without_tiers_is_a_no_op() {
        let mut rng = 1;
        let mut tree = NestedSimulationTree::build(&parent(), 0, 0, &mut rng);
        tree.set_host_gravity(10.0);
        assert_eq!(tree.active_tiers(), 0);
    }

    #[test]
    fn large_max_depth_still_stops_at_two_tiers() {
        let mut rng = 9;
        let mut tree = NestedSimulationTree::build(&parent(), 0, 12, &mut rng);
        for _ in 0..300 {
            tree.update(900.0, 0.016, &mut rng);
        }
        assert_eq!(tree.active_tiers(), 2);
    }

    #[test]
    fn side_counts_saturate_at_tier_caps() {
        let mut rng = 3;
        let mut tree = NestedSimulationTree::build(&parent(), 0, 2, &mut rng);
        let mut last_inner = 0;
        let mut last_deep = 0;
        for _ in 0..5000 {
            tree.update(900.0, 0.016, &mut rng);
            let inner = tree.inner().map(|i| i.level.sides).unwrap_or(0);
            let deep = tree.deep().map(|d| d.sides).unwrap_or(0);
            assert!(inner >= last_inner && inner <= 20);
            assert!(deep >= last_deep && deep <= 30);
            last_inner = inner;
            last_deep = deep;
        }
        assert!(last_inner > 4);
    }
}
