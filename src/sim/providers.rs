use glam::{Quat, Vec3A};

/// Hit information from a ground probe.
#[derive(Clone, Copy, Debug)]
pub struct RayHit {
    pub point: Vec3A,
    pub normal: Vec3A,
    pub distance: f32,
}

/// Ray-cast seam of the external collision backend.
pub trait GroundRaycaster {
    /// Cast from `from` along `dir` (unit length) up to `max_dist`, returning
    /// the closest hit among surfaces whose filter bits intersect `mask`.
    fn cast_ray(&self, from: Vec3A, dir: Vec3A, max_dist: f32, mask: u32) -> Option<RayHit>;
}

/// The slice of the external physics engine's rigid body that the controller
/// reads and writes every physics step.
pub trait RigidBody {
    fn linear_velocity(&self) -> Vec3A;
    fn set_linear_velocity(&mut self, vel: Vec3A);

    fn angular_velocity(&self) -> Vec3A;
    fn set_angular_velocity(&mut self, vel: Vec3A);

    fn position(&self) -> Vec3A;
    fn set_position(&mut self, pos: Vec3A);

    fn rotation(&self) -> Quat;
    fn set_rotation(&mut self, rot: Quat);

    /// Queue a mass-independent force: the backend must change velocity by
    /// `accel * dt` during its next integration, regardless of body mass.
    fn apply_acceleration(&mut self, accel: Vec3A);

    /// Drop the body from simulation until the next wake.
    ///
    /// Sleep-then-wake around a teleport forces the backend to discard stale
    /// contact and velocity data from before the jump.
    fn sleep(&mut self);
    fn wake(&mut self);
}
