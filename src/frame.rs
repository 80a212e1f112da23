//! The per-frame loop: animations, then camera, then one redraw.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::navigator::Navigator;
use crate::registry::AssetRegistry;
use crate::stage::Stage;

/// When the driver asks for a redraw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum RedrawPolicy {
    /// Redraw on every tick.
    #[default]
    Always,
    /// Redraw only when an animation advanced or the stage changed.
    OnDemand,
}

/// Drives one tick per display refresh.
///
/// Holds nothing but the time of the previous tick.
#[derive(Debug, Default)]
pub struct FrameDriver {
    last_tick: Option<Instant>,
    policy: RedrawPolicy,
}

impl FrameDriver {
    pub fn new(policy: RedrawPolicy) -> Self {
        Self {
            last_tick: None,
            policy,
        }
    }

    pub fn policy(&self) -> RedrawPolicy {
        self.policy
    }

    /// Seconds since the previous call; zero on the first.
    pub fn delta(&mut self, now: Instant) -> f32 {
        let dt = self
            .last_tick
            .map(|last| now.saturating_duration_since(last).as_secs_f32())
            .unwrap_or(0.0);
        self.last_tick = Some(now);
        dt
    }

    /// Forget the previous tick, so the next delta is zero.
    ///
    /// Called before the loop sleeps, so time spent waiting for input is not
    /// replayed as one long frame.
    pub fn pause(&mut self) {
        self.last_tick = None;
    }

    /// Run one frame at `now` and return whether it should be redrawn.
    pub fn tick(
        &mut self,
        now: Instant,
        stage: &mut Stage,
        registry: &mut AssetRegistry,
        navigator: &mut Navigator,
    ) -> bool {
        let dt = self.delta(now);
        self.step(dt, stage, registry, navigator)
    }

    /// Run one frame with an explicit delta in seconds.
    pub fn step(
        &mut self,
        dt: f32,
        stage: &mut Stage,
        registry: &mut AssetRegistry,
        navigator: &mut Navigator,
    ) -> bool {
        let animated = registry.advance(dt, navigator.focused_id(), navigator.is_transitioning());
        navigator.tick(dt, stage);
        let dirty = stage.consume_redraw();

        match self.policy {
            RedrawPolicy::Always => true,
            RedrawPolicy::OnDemand => animated || dirty,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entity::{Entity, Framing, NavOrder};
    use crate::model::ModelSpec;
    use glam::Vec3;
    use std::time::Duration;

    fn world(clips: bool) -> (Stage, AssetRegistry, Navigator) {
        let mut stage = Stage::default();
        let mut registry = AssetRegistry::new();
        let mut navigator = Navigator::new(
            [
                Entity::new("a", "A", Framing::new(Vec3::ZERO, Vec3::Z)),
                Entity::new("b", "B", Framing::new(Vec3::X * 4.0, Vec3::Z)),
            ],
            NavOrder::new(["a", "b"]).unwrap(),
        );
        for (id, x) in [("a", 0.0), ("b", 4.0)] {
            let mut spec = ModelSpec::new("m.glb", Vec3::new(x, 0.0, 1.0));
            if clips {
                spec = spec.idle_clip(1.0);
            }
            registry.insert(id.into(), &spec, None);
        }
        navigator.place_at(&"a".into(), &mut stage);
        (stage, registry, navigator)
    }

    #[test]
    fn first_delta_is_zero_then_measures_elapsed() {
        let mut driver = FrameDriver::default();
        let start = Instant::now();
        assert_eq!(driver.delta(start), 0.0);
        let dt = driver.delta(start + Duration::from_millis(250));
        assert!((dt - 0.25).abs() < 1e-4);
    }

    #[test]
    fn pause_drops_the_time_spent_waiting() {
        let mut driver = FrameDriver::new(RedrawPolicy::OnDemand);
        let start = Instant::now();
        driver.delta(start);
        driver.pause();
        assert_eq!(driver.delta(start + Duration::from_secs(30)), 0.0);
        let dt = driver.delta(start + Duration::from_secs(30) + Duration::from_millis(16));
        assert!((dt - 0.016).abs() < 1e-4);
    }

    #[test]
    fn earlier_instant_gives_zero_delta() {
        let mut driver = FrameDriver::default();
        let start = Instant::now();
        driver.delta(start + Duration::from_millis(10));
        assert_eq!(driver.delta(start), 0.0);
    }

    #[test]
    fn tick_measures_delta_between_instants() {
        let (mut stage, mut registry, mut navigator) = world(false);
        let mut driver = FrameDriver::default();
        let start = Instant::now();
        navigator.navigate_next(&stage, None);

        driver.tick(start, &mut stage, &mut registry, &mut navigator);
        assert!(navigator.is_transitioning());

        driver.tick(
            start + Duration::from_secs(2),
            &mut stage,
            &mut registry,
            &mut navigator,
        );
        assert!(!navigator.is_transitioning());
        assert_eq!(navigator.focused_id().as_str(), "b");
    }

    #[test]
    fn always_policy_redraws_every_tick() {
        let (mut stage, mut registry, mut navigator) = world(false);
        let mut driver = FrameDriver::new(RedrawPolicy::Always);
        assert!(driver.step(0.016, &mut stage, &mut registry, &mut navigator));
        assert!(driver.step(0.016, &mut stage, &mut registry, &mut navigator));
    }

    #[test]
    fn on_demand_skips_still_frames() {
        let (mut stage, mut registry, mut navigator) = world(false);
        let mut driver = FrameDriver::new(RedrawPolicy::OnDemand);

        // Initial placement raised the flag.
        assert!(driver.step(0.016, &mut stage, &mut registry, &mut navigator));
        assert!(!driver.step(0.016, &mut stage, &mut registry, &mut navigator));

        navigator.navigate_next(&stage, None);
        assert!(driver.step(0.016, &mut stage, &mut registry, &mut navigator));
    }

    #[test]
    fn on_demand_redraws_while_animating() {
        let (mut stage, mut registry, mut navigator) = world(true);
        let mut driver = FrameDriver::new(RedrawPolicy::OnDemand);
        driver.step(0.016, &mut stage, &mut registry, &mut navigator);
        assert!(driver.step(0.016, &mut stage, &mut registry, &mut navigator));
    }

    #[test]
    fn flight_completes_through_the_driver() {
        let (mut stage, mut registry, mut navigator) = world(true);
        let mut driver = FrameDriver::default();
        navigator.navigate_next(&stage, None);

        for _ in 0..200 {
            driver.step(1.0 / 60.0, &mut stage, &mut registry, &mut navigator);
        }

        assert!(!navigator.is_transitioning());
        assert_eq!(stage.pose().position, Vec3::X * 4.0);
    }
}
