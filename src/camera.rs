use glam::{Mat4, Vec3};

/// A perspective camera that remembers the point it looks at.
///
/// Orientation is stored as a look-at target rather than a forward vector, so the
/// target can always be read back. Flights need it as the start point of the next
/// look-at interpolation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    pub position: Vec3,
    pub look_at: Vec3,
    pub up: Vec3,
    pub fov: f32, // radians
    pub near: f32,
    pub far: f32,
    pub aspect: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::new(0.0, 10.0, 30.0),
            look_at: Vec3::ZERO,
            up: Vec3::Y,
            fov: 60f32.to_radians(),
            near: 0.05,
            far: 80.0,
            aspect: 16.0 / 9.0,
        }
    }
}

impl Camera {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn at(mut self, position: impl Into<Vec3>) -> Self {
        self.position = position.into();
        self
    }

    pub fn looking_at(mut self, target: impl Into<Vec3>) -> Self {
        self.look_at = target.into();
        self
    }

    pub fn with_fov(mut self, fov_degrees: f32) -> Self {
        self.fov = fov_degrees.to_radians();
        self
    }

    pub fn with_clip(mut self, near: f32, far: f32) -> Self {
        self.near = near;
        self.far = far;
        self
    }

    /// Unit vector from the camera towards its look-at point.
    ///
    /// Falls back to -Z when the two points coincide.
    pub fn forward(&self) -> Vec3 {
        (self.look_at - self.position).normalize_or(Vec3::NEG_Z)
    }

    /// Compute the right vector from forward and up.
    pub fn right(&self) -> Vec3 {
        self.forward().cross(self.up).normalize_or_zero()
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.forward(), self.up)
    }

    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fov, self.aspect, self.near, self.far)
    }

    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }
}
