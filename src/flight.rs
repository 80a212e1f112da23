//! Camera flights: timed, arcing interpolation between two camera poses.
//!
//! Horizontal motion and the look-at point are interpolated linearly. The height
//! follows the straight-line interpolation plus a parabolic bump,
//! `4·t·(1−t)·(arc_height − y_lerp)`, which is zero at both ends and largest halfway.
//! Longer hops therefore swoop higher, and the camera still lands exactly on the
//! target pose.

use glam::Vec3;

use crate::easing::Easing;
use crate::stage::CameraPose;

/// Height gained per unit of horizontal distance travelled.
pub const ARC_RISE_PER_UNIT: f32 = 0.25;
/// Minimum clearance above the higher endpoint.
pub const ARC_CLEARANCE: f32 = 0.5;

/// Peak height of the arc between `start` and `target`.
///
/// Uses the straight-line horizontal (XZ) distance, so it grows monotonically with
/// the length of the hop.
pub fn arc_height(start: Vec3, target: Vec3) -> f32 {
    let horizontal = Vec3::new(target.x - start.x, 0.0, target.z - start.z).length();
    start.y.max(target.y) + horizontal * ARC_RISE_PER_UNIT + ARC_CLEARANCE
}

/// Vertical lift above the linear interpolation at eased progress `t`.
pub fn arc_offset(t: f32, arc_height: f32, y_lerp: f32) -> f32 {
    4.0 * t * (1.0 - t) * (arc_height - y_lerp)
}

/// Camera position at eased progress `t` along the arc from `start` to `target`.
pub fn arc_position(start: Vec3, target: Vec3, arc_height: f32, t: f32) -> Vec3 {
    let x = start.x + (target.x - start.x) * t;
    let z = start.z + (target.z - start.z) * t;
    let y_lerp = start.y + (target.y - start.y) * t;
    Vec3::new(x, y_lerp + arc_offset(t, arc_height, y_lerp), z)
}

/// An in-flight camera transition.
#[derive(Clone, Debug, PartialEq)]
pub struct Flight {
    from: CameraPose,
    to: CameraPose,
    arc_height: f32,
    duration: f32,
    elapsed: f32,
    easing: Easing,
}

impl Flight {
    /// Start a flight from `from` to `to`.
    ///
    /// The arc height is fixed here from the start and target positions.
    pub fn new(from: CameraPose, to: CameraPose, duration: f32, easing: Easing) -> Self {
        Self {
            from,
            to,
            arc_height: arc_height(from.position, to.position),
            duration: duration.max(0.0),
            elapsed: 0.0,
            easing,
        }
    }

    /// Pose the flight took off from.
    pub fn origin(&self) -> CameraPose {
        self.from
    }

    /// Pose the flight lands on.
    pub fn target(&self) -> CameraPose {
        self.to
    }

    pub fn arc_height(&self) -> f32 {
        self.arc_height
    }

    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Linear progress in `[0, 1]`.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    pub fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }

    /// Advance by `dt` seconds. Negative deltas are ignored.
    pub fn advance(&mut self, dt: f32) {
        if dt > 0.0 {
            self.elapsed = (self.elapsed + dt).min(self.duration);
        }
    }

    /// Pose at linear progress `progress`, passed through the easing curve.
    ///
    /// At progress 1 this is exactly the target pose.
    pub fn pose_at(&self, progress: f32) -> CameraPose {
        if progress >= 1.0 {
            return self.to;
        }
        let t = self.easing.apply(progress);
        CameraPose {
            position: arc_position(self.from.position, self.to.position, self.arc_height, t),
            look_at: self.from.look_at.lerp(self.to.look_at, t),
        }
    }

    /// Pose at the current progress.
    pub fn pose(&self) -> CameraPose {
        self.pose_at(self.progress())
    }
}
