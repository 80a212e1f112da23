//! The assembled showcase: stage, models, navigation and frame driver.

use std::time::Instant;

use crate::camera::Camera;
use crate::config::ShowcaseConfig;
use crate::entity::{Entity, EntityId};
use crate::error::ConfigError;
use crate::frame::FrameDriver;
use crate::navigator::{Navigator, OnLand};
use crate::registry::AssetRegistry;
use crate::stage::Stage;

/// Direction of a held yaw key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Spin {
    Left,
    Right,
}

/// Everything one running showcase owns, built once at startup.
pub struct Showcase {
    stage: Stage,
    registry: AssetRegistry,
    navigator: Navigator,
    driver: FrameDriver,
    rotate_speed: f32,
}

impl Showcase {
    /// Build a showcase from a config, with the camera already on the start entity.
    pub fn new(config: &ShowcaseConfig) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut stage = Stage::new(Camera::new()).with_background(config.background);

        let mut registry = AssetRegistry::new();
        for entity in &config.entities {
            if let Some(model) = &entity.model {
                registry.insert(entity.id.clone(), model, entity.companion.as_ref());
            }
        }

        let mut navigator = Navigator::new(
            config.entities.iter().map(|entity| entity.entity()),
            config.nav_order()?,
        )
        .duration(config.flight.duration)
        .easing(config.flight.easing);

        let start = config.start_id()?;
        navigator.place_at(&start, &mut stage);
        log::info!(
            "Showcase ready: {} entities, {} models, starting at '{}'",
            config.entities.len(),
            registry.model_count(),
            start
        );

        Ok(Self {
            stage,
            registry,
            navigator,
            driver: FrameDriver::new(config.redraw),
            rotate_speed: config.rotate_speed,
        })
    }

    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    pub fn stage_mut(&mut self) -> &mut Stage {
        &mut self.stage
    }

    pub fn registry(&self) -> &AssetRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut AssetRegistry {
        &mut self.registry
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn focus_entity(&mut self, id: &EntityId, on_land: Option<OnLand>) -> bool {
        self.navigator.focus_entity(id, &self.stage, on_land)
    }

    pub fn navigate_next(&mut self, on_land: Option<OnLand>) -> bool {
        self.navigator.navigate_next(&self.stage, on_land)
    }

    pub fn navigate_previous(&mut self, on_land: Option<OnLand>) -> bool {
        self.navigator.navigate_previous(&self.stage, on_land)
    }

    pub fn focused_id(&self) -> &EntityId {
        self.navigator.focused_id()
    }

    pub fn is_transitioning(&self) -> bool {
        self.navigator.is_transitioning()
    }

    /// The focused entity and its two neighbors in the navigation order.
    pub fn neighborhood(&self) -> (Option<&Entity>, Option<&Entity>, Option<&Entity>) {
        let (previous, next) = self.navigator.order().neighbors(self.focused_id());
        (
            self.navigator.entity(previous),
            self.navigator.focused(),
            self.navigator.entity(next),
        )
    }

    /// Human-readable `previous < focused > next` line for titles and labels.
    pub fn caption(&self) -> String {
        let name = |entity: Option<&Entity>| {
            entity
                .map(|entity| entity.name.clone())
                .unwrap_or_else(|| "?".to_string())
        };
        let (previous, focused, next) = self.neighborhood();
        format!("{} < {} > {}", name(previous), name(focused), name(next))
    }

    /// Turn the focused entity's model by `dt` seconds' worth of rotation.
    ///
    /// Returns `false` if the focused entity has no model.
    pub fn spin_focused(&mut self, spin: Spin, dt: f32) -> bool {
        let angle = match spin {
            Spin::Left => self.rotate_speed * dt,
            Spin::Right => -self.rotate_speed * dt,
        };
        let focused = self.navigator.focused_id().clone();
        match self.registry.transform_mut(&focused) {
            Some(transform) => {
                transform.rotate_yaw(angle);
                self.stage.request_redraw();
                true
            }
            None => false,
        }
    }

    /// Seconds since the previous frame; zero on the first.
    pub fn frame_delta(&mut self, now: Instant) -> f32 {
        self.driver.delta(now)
    }

    /// Stop the frame clock while the loop sleeps waiting for input.
    pub fn pause_clock(&mut self) {
        self.driver.pause();
    }

    /// Run one frame with a measured delta. Returns whether to redraw.
    pub fn step(&mut self, dt: f32) -> bool {
        self.driver.step(
            dt,
            &mut self.stage,
            &mut self.registry,
            &mut self.navigator,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_on_the_first_entity_framing() {
        let config = ShowcaseConfig::default();
        let showcase = Showcase::new(&config).unwrap();

        assert_eq!(showcase.focused_id().as_str(), "ivern");
        assert!(!showcase.is_transitioning());
        assert_eq!(
            showcase.stage().pose().position,
            config.entities[0].framing.position
        );
        assert_eq!(showcase.registry().model_count(), 3);
    }

    #[test]
    fn configured_start_is_honoured() {
        let config = ShowcaseConfig {
            start: Some("mf".into()),
            ..ShowcaseConfig::default()
        };
        let showcase = Showcase::new(&config).unwrap();
        assert_eq!(showcase.focused_id().as_str(), "mf");
    }

    #[test]
    fn caption_lists_neighbors() {
        let showcase = Showcase::new(&ShowcaseConfig::default()).unwrap();
        assert_eq!(showcase.caption(), "Miss Fortune < Ivern > Volibear");
    }

    #[test]
    fn spin_rotates_only_the_focused_model() {
        let mut showcase = Showcase::new(&ShowcaseConfig::default()).unwrap();
        let before = showcase.registry().transform(&"ivern".into()).unwrap();
        let other = showcase.registry().transform(&"mf".into()).unwrap();

        assert!(showcase.spin_focused(Spin::Left, 0.1));

        let after = showcase.registry().transform(&"ivern".into()).unwrap();
        assert_ne!(before.rotation, after.rotation);
        assert_eq!(showcase.registry().transform(&"mf".into()).unwrap(), other);
    }

    #[test]
    fn spin_without_model_is_ignored() {
        let mut config = ShowcaseConfig::default();
        config.entities[0].model = None;
        let mut showcase = Showcase::new(&config).unwrap();
        assert!(!showcase.spin_focused(Spin::Right, 0.1));
    }

    #[test]
    fn invalid_config_is_rejected() {
        let mut config = ShowcaseConfig::default();
        config.nav_order.push("teemo".into());
        assert!(Showcase::new(&config).is_err());
    }
}
