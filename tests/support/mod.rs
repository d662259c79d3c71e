#![allow(dead_code)]

use glam::{Quat, Vec3A};
use kartsim::sim::{GroundRaycaster, Pose, RayHit, RigidBody, Vehicle, VehicleConfig};

pub const DT: f32 = 1.0 / 60.0;

/// Deterministic stand-in for a physics backend body.
///
/// Queued accelerations only take effect at the explicit `integrate` call,
/// mirroring a real engine's deferred force application: the controller never
/// observes a force it applied within the same step.
pub struct TestBody {
    pub vel: Vec3A,
    pub ang_vel: Vec3A,
    pub pos: Vec3A,
    pub rot: Quat,
    pub queued_accel: Vec3A,
    pub sleep_calls: u32,
    pub awake: bool,
}

impl TestBody {
    pub fn at(pos: Vec3A) -> Self {
        Self {
            vel: Vec3A::ZERO,
            ang_vel: Vec3A::ZERO,
            pos,
            rot: Quat::IDENTITY,
            queued_accel: Vec3A::ZERO,
            sleep_calls: 0,
            awake: true,
        }
    }

    /// Advance like a backend would: apply the queued acceleration, then move.
    pub fn integrate(&mut self, dt: f32) {
        self.vel += self.queued_accel * dt;
        self.queued_accel = Vec3A::ZERO;
        self.pos += self.vel * dt;
    }
}

impl RigidBody for TestBody {
    fn linear_velocity(&self) -> Vec3A {
        self.vel
    }

    fn set_linear_velocity(&mut self, vel: Vec3A) {
        self.vel = vel;
    }

    fn angular_velocity(&self) -> Vec3A {
        self.ang_vel
    }

    fn set_angular_velocity(&mut self, vel: Vec3A) {
        self.ang_vel = vel;
    }

    fn position(&self) -> Vec3A {
        self.pos
    }

    fn set_position(&mut self, pos: Vec3A) {
        self.pos = pos;
    }

    fn rotation(&self) -> Quat {
        self.rot
    }

    fn set_rotation(&mut self, rot: Quat) {
        self.rot = rot;
    }

    fn apply_acceleration(&mut self, accel: Vec3A) {
        self.queued_accel += accel;
    }

    fn sleep(&mut self) {
        self.sleep_calls += 1;
        self.awake = false;
    }

    fn wake(&mut self) {
        self.awake = true;
    }
}

/// Infinite flat ground plane at a fixed height, on one filter layer.
pub struct FlatGround {
    pub height: f32,
    pub layer: u32,
}

impl FlatGround {
    pub fn at(height: f32) -> Self {
        Self { height, layer: 1 }
    }
}

impl GroundRaycaster for FlatGround {
    fn cast_ray(&self, from: Vec3A, dir: Vec3A, max_dist: f32, mask: u32) -> Option<RayHit> {
        if mask & self.layer == 0 {
            return None;
        }
        if dir.z >= 0.0 {
            return None;
        }

        let distance = (from.z - self.height) / -dir.z;
        if distance < 0.0 || distance > max_dist {
            return None;
        }

        Some(RayHit {
            point: Vec3A::new(from.x, from.y, self.height),
            normal: Vec3A::Z,
            distance,
        })
    }
}

/// A vehicle resting 1.5 over flat ground at zero, probe length 2.0:
/// comfortably within contact range.
pub fn grounded_rig(config: VehicleConfig) -> (Vehicle, TestBody, FlatGround) {
    let spawn = Pose::new(Vec3A::new(0.0, 0.0, 1.5), Quat::IDENTITY);
    let vehicle = Vehicle::new(config, spawn, Vec3A::new(0.0, 0.0, -1.0));
    let body = TestBody::at(spawn.pos);
    (vehicle, body, FlatGround::at(0.0))
}

pub fn assert_near(actual: f32, expected: f32, eps: f32) {
    assert!(
        (actual - expected).abs() <= eps,
        "expected {expected} +/- {eps}, got {actual}"
    );
}

pub fn assert_quat_near(actual: Quat, expected: Quat) {
    assert!(
        actual.dot(expected).abs() > 1.0 - 1e-5,
        "expected rotation {expected:?}, got {actual:?}"
    );
}
