//! Showcase configuration, loaded from RON.
//!
//! ```ron
//! (
//!     flight: (duration: 1.4, easing: EaseInOutCubic),
//!     entities: [
//!         (
//!             id: "ivern",
//!             name: "Ivern",
//!             framing: (position: (-4.1, 0.6, 6.6), look_at: (-4.6, 0.2, 7.4)),
//!         ),
//!     ],
//! )
//! ```

use std::collections::HashSet;
use std::f32::consts::PI;
use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::easing::Easing;
use crate::entity::{Entity, EntityId, Framing, NavOrder};
use crate::error::ConfigError;
use crate::frame::RedrawPolicy;
use crate::model::ModelSpec;
use crate::navigator::DEFAULT_FLIGHT_DURATION;
use crate::stage::hex_to_rgb;

/// Configuration for the app window.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Showcase".to_string(),
            width: 1280,
            height: 720,
        }
    }
}

impl WindowConfig {
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }
}

/// Timing of camera flights.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    /// Seconds from takeoff to landing.
    pub duration: f32,
    pub easing: Easing,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            duration: DEFAULT_FLIGHT_DURATION,
            easing: Easing::EaseInOutCubic,
        }
    }
}

/// One navigable entity and the models standing at it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EntityConfig {
    pub id: EntityId,
    pub name: String,
    pub framing: Framing,
    #[serde(default)]
    pub model: Option<ModelSpec>,
    #[serde(default)]
    pub companion: Option<ModelSpec>,
}

impl EntityConfig {
    pub fn entity(&self) -> Entity {
        Entity::new(self.id.clone(), self.name.clone(), self.framing)
    }
}

/// Everything needed to build a [`Showcase`](crate::Showcase).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShowcaseConfig {
    #[serde(default)]
    pub window: WindowConfig,
    #[serde(default)]
    pub flight: FlightConfig,
    #[serde(default)]
    pub redraw: RedrawPolicy,
    /// Radians per second applied while a yaw key is held.
    #[serde(default = "default_rotate_speed")]
    pub rotate_speed: f32,
    #[serde(default = "default_background")]
    pub background: Vec3,
    /// Entity to start on; the first in the navigation order if unset.
    #[serde(default)]
    pub start: Option<EntityId>,
    pub entities: Vec<EntityConfig>,
    /// Navigation order; the order of `entities` if empty.
    #[serde(default)]
    pub nav_order: Vec<EntityId>,
}

fn default_rotate_speed() -> f32 {
    2.0
}

fn default_background() -> Vec3 {
    hex_to_rgb(0x0a0a1a)
}

impl Default for ShowcaseConfig {
    fn default() -> Self {
        let entities = vec![
            EntityConfig {
                id: "ivern".into(),
                name: "Ivern".to_string(),
                framing: Framing::new(Vec3::new(-4.1, 0.6, 6.6), Vec3::new(-4.6, 0.2, 7.4)),
                model: Some(
                    ModelSpec::new("models/ivern.glb", Vec3::new(-4.6, 0.04, 7.4))
                        .yaw(PI * 0.75)
                        .scale(0.00125)
                        .idle_clip(2.5),
                ),
                companion: None,
            },
            EntityConfig {
                id: "volibear".into(),
                name: "Volibear".to_string(),
                framing: Framing::new(Vec3::new(-12.7, 0.6, 2.2), Vec3::new(-11.9, 0.2, 2.8)),
                model: Some(
                    ModelSpec::new("models/volibear.glb", Vec3::new(-11.9, 0.04, 2.8))
                        .yaw(PI * 0.6)
                        .scale(0.00125)
                        .idle_clip(2.5),
                ),
                companion: None,
            },
            EntityConfig {
                id: "mf".into(),
                name: "Miss Fortune".to_string(),
                framing: Framing::new(Vec3::new(-1.6, 0.6, 12.6), Vec3::new(-2.4, 0.2, 11.8)),
                model: Some(
                    ModelSpec::new("models/mf.glb", Vec3::new(-2.4, 0.04, 11.8))
                        .yaw(-PI * 0.4)
                        .scale(0.0015)
                        .idle_clip(2.5),
                ),
                companion: None,
            },
        ];

        Self {
            window: WindowConfig::default(),
            flight: FlightConfig::default(),
            redraw: RedrawPolicy::default(),
            rotate_speed: default_rotate_speed(),
            background: default_background(),
            start: None,
            entities,
            nav_order: vec!["ivern".into(), "volibear".into(), "mf".into()],
        }
    }
}

impl ShowcaseConfig {
    /// Read and validate a RON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_ron(&contents)?;
        log::info!(
            "Loaded config {} ({} entities)",
            path.display(),
            config.entities.len()
        );
        Ok(config)
    }

    /// Parse and validate a RON config string.
    pub fn from_ron(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = ron::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_ron(&self) -> Result<String, ron::Error> {
        ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())
    }

    /// The effective navigation order: `nav_order`, or entity order when it is empty.
    pub fn order_ids(&self) -> Vec<EntityId> {
        if self.nav_order.is_empty() {
            self.entities.iter().map(|entity| entity.id.clone()).collect()
        } else {
            self.nav_order.clone()
        }
    }

    pub fn nav_order(&self) -> Result<NavOrder, ConfigError> {
        NavOrder::new(self.order_ids()).ok_or(ConfigError::EmptyOrder)
    }

    /// The entity to start on.
    pub fn start_id(&self) -> Result<EntityId, ConfigError> {
        match &self.start {
            Some(id) => Ok(id.clone()),
            None => Ok(self.nav_order()?.first().clone()),
        }
    }

    /// Check the config for inconsistencies.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let duration = self.flight.duration;
        if !duration.is_finite() || duration < 0.0 {
            return Err(ConfigError::InvalidDuration(duration));
        }
        if !self.rotate_speed.is_finite() {
            return Err(ConfigError::InvalidRotateSpeed(self.rotate_speed));
        }

        for entity in &self.entities {
            for model in entity.model.iter().chain(entity.companion.iter()) {
                if !model.scale.is_finite() || model.scale <= 0.0 {
                    return Err(ConfigError::InvalidScale {
                        entity: entity.id.to_string(),
                        scale: model.scale,
                    });
                }
                if let Some(seconds) = model.idle_clip {
                    if !seconds.is_finite() || seconds <= 0.0 {
                        return Err(ConfigError::InvalidClip {
                            entity: entity.id.to_string(),
                            seconds,
                        });
                    }
                }
            }
        }

        let mut defined = HashSet::new();
        for entity in &self.entities {
            if !defined.insert(&entity.id) {
                return Err(ConfigError::DuplicateEntity(entity.id.to_string()));
            }
        }

        let order = self.order_ids();
        if order.is_empty() {
            return Err(ConfigError::EmptyOrder);
        }
        let mut seen = HashSet::new();
        for id in &order {
            if !seen.insert(id) {
                return Err(ConfigError::DuplicateInOrder(id.to_string()));
            }
            if !defined.contains(id) {
                return Err(ConfigError::UnknownInOrder(id.to_string()));
            }
        }

        if let Some(start) = &self.start {
            if !defined.contains(start) {
                return Err(ConfigError::UnknownStart(start.to_string()));
            }
        }

        Ok(())
    }
}
