use glam::{EulerRot, Quat, Vec3A};

/// Logical transform of a vehicle: +Z is up, +X is forward.
///
/// Heading is authoritative here and is never written back from the physics
/// body; translation mirrors the body at the end of every physics step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pose {
    pub pos: Vec3A,
    pub rot: Quat,
}

impl Default for Pose {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Pose {
    pub const IDENTITY: Self = Self {
        pos: Vec3A::ZERO,
        rot: Quat::IDENTITY,
    };

    #[must_use]
    pub const fn new(pos: Vec3A, rot: Quat) -> Self {
        Self { pos, rot }
    }

    /// Get the forward direction as a unit vector
    #[must_use]
    pub fn forward(&self) -> Vec3A {
        self.rot * Vec3A::X
    }

    /// Get the lateral (sideways) direction as a unit vector
    #[must_use]
    pub fn lateral(&self) -> Vec3A {
        self.rot * Vec3A::Y
    }

    /// Heading about +Z, in degrees
    #[must_use]
    pub fn yaw_degrees(&self) -> f32 {
        self.rot.to_euler(EulerRot::ZYX).0.to_degrees()
    }
}
