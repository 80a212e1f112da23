//! # Showcase
//!
//! **A 3D character showcase with a camera that swoops between points of interest.**
//!
//! Entities are placed on a map, each with a camera framing. The [`Navigator`] flies
//! the camera from one framing to the next along an arc that rises with the length
//! of the hop, while the [`AssetRegistry`] keeps every character's idle animation
//! playing.
//!
//! ## Quick Start
//!
//! ```no_run
//! use showcase::*;
//!
//! fn main() -> anyhow::Result<()> {
//!     run(ShowcaseConfig::default())
//! }
//! ```
//!
//! Without a window, drive a [`Showcase`] by hand:
//!
//! ```
//! use showcase::*;
//!
//! let mut showcase = Showcase::new(&ShowcaseConfig::default()).unwrap();
//! assert!(showcase.navigate_next(None));
//! assert_eq!(showcase.focused_id().as_str(), "volibear");
//!
//! while showcase.is_transitioning() {
//!     showcase.step(1.0 / 60.0);
//! }
//! ```

mod animation;
mod app;
mod camera;
mod config;
mod easing;
mod entity;
mod error;
mod flight;
mod frame;
mod gpu;
mod input;
mod model;
mod navigator;
mod registry;
mod showcase;
mod stage;

pub use animation::{AnimationPlayer, ClipPlayer, Mixer};
pub use app::run;
pub use camera::Camera;
pub use config::{EntityConfig, FlightConfig, ShowcaseConfig, WindowConfig};
pub use easing::Easing;
pub use entity::{Entity, EntityId, Framing, NavOrder};
pub use error::{ConfigError, GpuError};
pub use flight::{ARC_CLEARANCE, ARC_RISE_PER_UNIT, Flight, arc_height, arc_offset, arc_position};
pub use frame::{FrameDriver, RedrawPolicy};
pub use gpu::GpuContext;
pub use input::{Input, Intent, Step};
pub use model::{ModelRole, ModelSpec, Owner, Transform};
pub use navigator::{DEFAULT_FLIGHT_DURATION, Navigator, OnLand};
pub use registry::AssetRegistry;
pub use showcase::{Showcase, Spin};
pub use stage::{CameraPose, Light, LightRig, Stage, hex_to_rgb};

// Re-export glam math types for convenience
pub use glam::{Mat4, Quat, Vec3};

// Re-export the ECS used by the registry
pub use hecs;

// Re-export commonly used winit types for convenience
pub use winit::keyboard::KeyCode;
