//! Model placement: transforms and the components attached to spawned models.

use glam::{Mat4, Quat, Vec3};
use serde::{Deserialize, Serialize};

use crate::entity::EntityId;

/// Position, rotation and scale of a model in world space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// World-space position (translation).
    pub position: Vec3,
    /// Rotation as a unit quaternion.
    pub rotation: Quat,
    /// Scale factors for each axis.
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn position(mut self, position: Vec3) -> Self {
        self.position = position;
        self
    }

    /// Rotate about the vertical axis by `angle` radians.
    pub fn yaw(mut self, angle: f32) -> Self {
        self.rotation = Quat::from_rotation_y(angle);
        self
    }

    pub fn uniform_scale(mut self, scale: f32) -> Self {
        self.scale = Vec3::splat(scale);
        self
    }

    /// Add `angle` radians of rotation about the vertical axis.
    pub fn rotate_yaw(&mut self, angle: f32) {
        self.rotation = Quat::from_rotation_y(angle) * self.rotation;
    }

    /// Current rotation about the vertical axis, in radians.
    pub fn yaw_angle(&self) -> f32 {
        let (yaw, _, _) = self.rotation.to_euler(glam::EulerRot::YXZ);
        yaw
    }

    pub fn matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.position)
    }
}

/// Where and how a model is placed, and which idle clip it plays.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelSpec {
    /// Asset path of the model, resolved by the loader.
    pub path: String,
    pub position: Vec3,
    /// Rotation about the vertical axis in radians.
    #[serde(default)]
    pub yaw: f32,
    #[serde(default = "one")]
    pub scale: f32,
    /// Length in seconds of the looping idle clip, if the model has one.
    #[serde(default)]
    pub idle_clip: Option<f32>,
}

fn one() -> f32 {
    1.0
}

impl ModelSpec {
    pub fn new(path: impl Into<String>, position: impl Into<Vec3>) -> Self {
        Self {
            path: path.into(),
            position: position.into(),
            yaw: 0.0,
            scale: 1.0,
            idle_clip: None,
        }
    }

    pub fn yaw(mut self, yaw: f32) -> Self {
        self.yaw = yaw;
        self
    }

    pub fn scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn idle_clip(mut self, seconds: f32) -> Self {
        self.idle_clip = Some(seconds);
        self
    }

    pub fn transform(&self) -> Transform {
        Transform::new()
            .position(self.position)
            .yaw(self.yaw)
            .uniform_scale(self.scale)
    }
}

/// Whether a spawned model is an entity's own model or a companion next to it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModelRole {
    Primary,
    Companion,
}

/// Component linking a spawned model to the entity it belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Owner {
    pub id: EntityId,
    pub role: ModelRole,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spec_builds_transform() {
        let spec = ModelSpec::new("models/mf.glb", Vec3::new(-2.4, 0.04, 11.8))
            .yaw(-0.4 * std::f32::consts::PI)
            .scale(0.0015);
        let transform = spec.transform();

        assert_eq!(transform.position, spec.position);
        assert_eq!(transform.scale, Vec3::splat(0.0015));
        assert!((transform.yaw_angle() - spec.yaw).abs() < 1e-5);
    }

    #[test]
    fn rotate_yaw_accumulates() {
        let mut transform = Transform::new();
        transform.rotate_yaw(0.25);
        transform.rotate_yaw(0.5);
        assert!((transform.yaw_angle() - 0.75).abs() < 1e-5);
    }

    #[test]
    fn matrix_places_origin_at_position() {
        let transform = Transform::new()
            .position(Vec3::new(1.0, 2.0, 3.0))
            .uniform_scale(2.0);
        let origin = transform.matrix().transform_point3(Vec3::ZERO);
        assert!((origin - Vec3::new(1.0, 2.0, 3.0)).length() < 1e-6);
    }
}
