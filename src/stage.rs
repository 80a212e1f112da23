//! The stage: camera, lights and the redraw signal shared by everything that
//! changes what is on screen.

use std::cell::Cell;

use glam::Vec3;

use crate::camera::Camera;

/// Where the camera is and what it looks at.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraPose {
    pub position: Vec3,
    pub look_at: Vec3,
}

impl CameraPose {
    pub fn new(position: impl Into<Vec3>, look_at: impl Into<Vec3>) -> Self {
        Self {
            position: position.into(),
            look_at: look_at.into(),
        }
    }
}

/// A light color and intensity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Light {
    pub color: Vec3,
    pub intensity: f32,
}

impl Light {
    /// Build a light from a packed `0xRRGGBB` color.
    pub fn hex(rgb: u32, intensity: f32) -> Self {
        Self {
            color: hex_to_rgb(rgb),
            intensity,
        }
    }
}

/// Ambient, directional and hemisphere lighting for the scene.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LightRig {
    pub ambient: Light,
    pub directional: Light,
    /// The directional light shines from here towards the origin.
    pub directional_position: Vec3,
    /// Sky color of the hemisphere light.
    pub hemisphere_sky: Light,
    /// Ground color of the hemisphere light, sharing the sky intensity.
    pub hemisphere_ground: Vec3,
}

impl Default for LightRig {
    fn default() -> Self {
        Self {
            ambient: Light::hex(0xffffff, 0.6),
            directional: Light::hex(0xfff4e0, 1.0),
            directional_position: Vec3::new(10.0, 20.0, 10.0),
            hemisphere_sky: Light::hex(0x87ceeb, 0.4),
            hemisphere_ground: hex_to_rgb(0x362a1f),
        }
    }
}

/// Convert a packed `0xRRGGBB` color to unit floats per channel.
pub fn hex_to_rgb(rgb: u32) -> Vec3 {
    Vec3::new(
        ((rgb >> 16) & 0xff) as f32 / 255.0,
        ((rgb >> 8) & 0xff) as f32 / 255.0,
        (rgb & 0xff) as f32 / 255.0,
    )
}

/// Owns the camera, the light rig and the render-on-demand flag.
///
/// [`Stage::set_pose`] is the only way to move the camera, so the tracked look-at
/// point can never drift from the orientation actually applied.
#[derive(Debug)]
pub struct Stage {
    camera: Camera,
    pub lights: LightRig,
    pub background: Vec3,
    needs_redraw: Cell<bool>,
}

impl Stage {
    pub fn new(camera: Camera) -> Self {
        Self {
            camera,
            lights: LightRig::default(),
            background: hex_to_rgb(0x0a0a1a),
            // First frame always draws.
            needs_redraw: Cell::new(true),
        }
    }

    pub fn with_background(mut self, background: impl Into<Vec3>) -> Self {
        self.background = background.into();
        self
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn pose(&self) -> CameraPose {
        CameraPose {
            position: self.camera.position,
            look_at: self.camera.look_at,
        }
    }

    /// Move and orient the camera in one step and mark the frame dirty.
    pub fn set_pose(&mut self, position: Vec3, look_at: Vec3) {
        self.camera.position = position;
        self.camera.look_at = look_at;
        self.request_redraw();
    }

    /// Update the aspect ratio for a new surface size.
    ///
    /// Zero-sized dimensions (a minimized window) are ignored.
    pub fn resize(&mut self, width: u32, height: u32) {
        if width > 0 && height > 0 {
            self.camera.aspect = width as f32 / height as f32;
            self.request_redraw();
        }
    }

    pub fn request_redraw(&self) {
        self.needs_redraw.set(true);
    }

    /// Returns whether a redraw was requested since the last call, and clears the flag.
    pub fn consume_redraw(&self) -> bool {
        self.needs_redraw.replace(false)
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::new(Camera::default())
    }
}
