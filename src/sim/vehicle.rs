use super::{GroundRaycaster, Pose, RigidBody, VehicleConfig};
use crate::math::{lerp, lerp_vec3, planar, smooth_step};
use glam::{Quat, Vec3, Vec3A};
use log::debug;

/// Per-second smoothing rate of the heading-delta target.
const TURN_SMOOTHING: f32 = 4.0;
/// Per-second smoothing rate of the lateral tilt value.
const TILT_SMOOTHING: f32 = 4.0;
/// Per-second fraction by which the rotation chases the new yaw.
const YAW_CHASE_RATE: f32 = 2.0;
/// Per-second smoothing rate of the visual cabin tilt.
const CABIN_TILT_RATE: f32 = 4.0;
/// Per-second rate at which the model up-axis settles onto the ground normal.
const GROUND_ALIGN_RATE: f32 = 8.0;
/// Per-second rate at which residual velocity bleeds off while idle.
const IDLE_DAMP_RATE: f32 = 2.0;

/// Planar speed² below which the vehicle counts as stationary for steering.
const STATIONARY_SPEED_SQ: f32 = 0.1;
/// Planar speed² below which idle damping engages.
const IDLE_SPEED_SQ: f32 = 4.0;

/// Margin added to the derived probe length so a tilted body still finds the ground.
const PROBE_MARGIN: f32 = 1.0;
/// Extra length of the near-ground probe over the contact probe.
const NEAR_GROUND_EXTRA: f32 = 1.0;

/// Snapshot of the controller's latched and smoothed motion state.
#[derive(Clone, Copy, Debug)]
pub struct VehicleState {
    pub speed_request: f32,
    pub speed_target: f32,
    pub turn_request: f32,
    pub turn_target: f32,
    pub tilt_target: f32,
    pub on_ground: bool,
    pub near_ground: bool,
    pub pose: Pose,
}

/// Arcade vehicle-movement controller.
///
/// Owns the latched input requests, the smoothed motion targets, and the
/// logical pose. Each visual frame the input layer calls the `request_*`
/// intents and then [`Vehicle::frame_update`]; each fixed physics step
/// [`Vehicle::tick_update`] consumes the latched state and writes
/// velocity/heading back through the [`RigidBody`] provider.
///
/// The canonical per-frame order is: sample input, run the frame's physics
/// steps, then `frame_update`.
#[derive(Clone, Debug)]
pub struct Vehicle {
    config: VehicleConfig,
    pose: Pose,

    /// One-shot throttle/brake request, consumed by `frame_update`.
    speed_request: f32,
    /// Eased forward-speed target, persists across steps.
    speed_target: f32,
    /// One-shot steering request, consumed by `tick_update`.
    turn_request: f32,
    /// Smoothed heading delta in degrees, persists across steps.
    turn_target: f32,
    /// Smoothed lateral tilt, derived from the raw turn request.
    tilt_target: f32,

    ground_probe_dist: f32,
    on_ground: bool,
    near_ground: bool,

    // Renderer-only state; nothing below feeds back into the motion update.
    model_up: Vec3A,
    cabin_tilt: Quat,
}

impl Vehicle {
    /// `model_offset` is the visual model origin relative to the body
    /// reference point; its length (plus a margin) becomes the ground probe
    /// length.
    #[must_use]
    pub fn new(config: VehicleConfig, spawn: Pose, model_offset: Vec3A) -> Self {
        config.validate();

        Self {
            config,
            pose: spawn,
            speed_request: 0.0,
            speed_target: 0.0,
            turn_request: 0.0,
            turn_target: 0.0,
            tilt_target: 0.0,
            ground_probe_dist: model_offset.length() + PROBE_MARGIN,
            on_ground: false,
            near_ground: false,
            model_up: Vec3A::Z,
            cabin_tilt: Quat::IDENTITY,
        }
    }

    /// Recompute the ground probe length after the visual model moved.
    pub fn set_model_offset(&mut self, model_offset: Vec3A) {
        self.ground_probe_dist = model_offset.length() + PROBE_MARGIN;
    }

    /// Latch a full-throttle request for this frame.
    pub fn request_acceleration(&mut self) {
        self.speed_request = self.config.max_speed;
    }

    /// Two-phase brake: shave speed off the request while still fast, flip to
    /// full reverse once the planar speed drops under the reverse threshold.
    pub fn request_brake(&mut self, body: &impl RigidBody) {
        if planar(body.linear_velocity()).length_squared() > self.config.reverse_threshold_sq {
            self.speed_request -= self.config.brake_deceleration;
        } else {
            self.speed_request = -self.config.max_speed;
        }
    }

    /// Latch a steering request. `direction` is -1 (left) to +1 (right).
    /// Ignored while fully airborne unless the config allows air steering.
    pub fn request_turn(&mut self, direction: f32) {
        if self.near_ground || self.on_ground || self.config.turn_in_air {
            self.turn_request = self.config.steering * direction;
        }
    }

    /// Per-visual-frame update: ease the speed target toward the latched
    /// request, then consume the request.
    pub fn frame_update(&mut self, dt: f32) {
        self.speed_target = smooth_step(
            self.speed_target,
            self.speed_request,
            dt * self.config.acceleration,
        );
        self.speed_request = 0.0;
    }

    /// Per-physics-step update. Stage order matters: tilt reads the pre-reset
    /// turn request, traction and drift read the ground probes, and the pose
    /// mirrors the body position only after all velocity writes.
    pub fn tick_update(&mut self, body: &mut impl RigidBody, ground: &impl GroundRaycaster, dt: f32) {
        self.turn(body, dt);
        self.tilt_cabin(body, dt);
        self.settle_idle(body, dt);
        self.probe_ground(ground, dt);

        if self.near_ground || self.on_ground {
            body.apply_acceleration(self.pose.forward() * self.speed_target);
        }

        self.shape_lateral_velocity(body);

        // The body is authoritative for translation.
        self.pose.pos = body.position();
    }

    fn is_stationary(&self, body: &impl RigidBody) -> bool {
        !self.config.turn_when_stationary
            && planar(body.linear_velocity()).length_squared() < STATIONARY_SPEED_SQ
    }

    fn turn(&mut self, body: &impl RigidBody, dt: f32) {
        self.turn_target = lerp(self.turn_target, self.turn_request, dt * TURN_SMOOTHING);
        self.tilt_target = lerp(self.tilt_target, self.turn_request, dt * TILT_SMOOTHING);
        self.turn_request = 0.0;

        // Tilt above keeps settling even when the heading is frozen.
        if self.is_stationary(body) {
            return;
        }

        // Reversing flips the steering sense, like a real car backing up.
        let yaw = self.pose.yaw_degrees();
        let target_yaw = if self.speed_target < 0.0 {
            yaw - self.turn_target
        } else {
            yaw + self.turn_target
        };

        let target = Quat::from_rotation_z(target_yaw.to_radians());
        self.pose.rot = self.pose.rot.slerp(target, (dt * YAW_CHASE_RATE).min(1.0));
    }

    fn tilt_cabin(&mut self, body: &impl RigidBody, dt: f32) {
        if self.is_stationary(body) {
            return;
        }

        let pitch = if self.config.forward_tilt == 0.0 {
            0.0
        } else {
            self.speed_target / self.config.forward_tilt
        };
        let roll = if self.config.body_tilt == 0.0 {
            self.turn_target / 6.0
        } else {
            (self.turn_target / 6.0) * self.config.body_tilt
        };

        let target = Quat::from_rotation_y(pitch.to_radians()) * Quat::from_rotation_x(roll.to_radians());
        self.cabin_tilt = self.cabin_tilt.slerp(target, (dt * CABIN_TILT_RATE).min(1.0));
    }

    /// Keeps the vehicle planted while no throttle or brake is held.
    fn settle_idle(&mut self, body: &mut impl RigidBody, dt: f32) {
        if self.speed_request == 0.0
            && planar(body.linear_velocity()).length_squared() < IDLE_SPEED_SQ
        {
            let damped = lerp_vec3(body.linear_velocity(), Vec3A::ZERO, dt * IDLE_DAMP_RATE);
            body.set_linear_velocity(damped);
        }
    }

    fn probe_ground(&mut self, ground: &impl GroundRaycaster, dt: f32) {
        let origin = self.pose.pos;
        let mask = self.config.ground_mask;

        self.on_ground = ground
            .cast_ray(origin, -Vec3A::Z, self.ground_probe_dist, mask)
            .is_some();

        let near = ground.cast_ray(
            origin,
            -Vec3A::Z,
            self.ground_probe_dist + NEAR_GROUND_EXTRA,
            mask,
        );
        self.near_ground = near.is_some();

        // Visual ground alignment; while airborne the model holds its last
        // orientation.
        if let Some(hit) = near {
            self.model_up =
                lerp_vec3(self.model_up, hit.normal, dt * GROUND_ALIGN_RATE).normalize_or(Vec3A::Z);
        }
    }

    /// Scale the sideways component of the body velocity in the vehicle's
    /// local frame. Written back only with ground contact; airborne motion
    /// stays ballistic.
    fn shape_lateral_velocity(&mut self, body: &mut impl RigidBody) {
        let mut local = self.pose.rot.inverse() * body.linear_velocity();
        local.y *= 0.9 + self.config.drift / 10.0;

        if self.near_ground || self.on_ground {
            body.set_linear_velocity(self.pose.rot * local);
        }
    }

    /// Snap the vehicle to a new pose, zeroing body velocities and all
    /// latched speed/turn state. Always succeeds.
    pub fn teleport(&mut self, body: &mut impl RigidBody, pos: Vec3A, rot: Quat) {
        body.set_linear_velocity(Vec3A::ZERO);
        body.set_angular_velocity(Vec3A::ZERO);
        body.set_position(pos);

        self.speed_request = 0.0;
        self.speed_target = 0.0;
        self.turn_request = 0.0;
        self.turn_target = 0.0;

        body.sleep();
        self.pose = Pose::new(pos, rot);
        body.wake();

        debug!("teleported vehicle to {pos}");
    }

    #[must_use]
    pub const fn state(&self) -> VehicleState {
        VehicleState {
            speed_request: self.speed_request,
            speed_target: self.speed_target,
            turn_request: self.turn_request,
            turn_target: self.turn_target,
            tilt_target: self.tilt_target,
            on_ground: self.on_ground,
            near_ground: self.near_ground,
            pose: self.pose,
        }
    }

    /// Planar speed of the body.
    #[must_use]
    pub fn speed(&self, body: &impl RigidBody) -> f32 {
        planar(body.linear_velocity()).length()
    }

    #[must_use]
    pub fn velocity(&self, body: &impl RigidBody) -> Vec3A {
        body.linear_velocity()
    }

    #[must_use]
    pub const fn is_on_ground(&self) -> bool {
        self.on_ground
    }

    #[must_use]
    pub const fn is_near_ground(&self) -> bool {
        self.near_ground
    }

    /// Smoothed heading delta in degrees.
    #[must_use]
    pub const fn turn_target(&self) -> f32 {
        self.turn_target
    }

    /// Smoothed lateral tilt value.
    #[must_use]
    pub const fn tilt(&self) -> f32 {
        self.tilt_target
    }

    #[must_use]
    pub const fn speed_target(&self) -> f32 {
        self.speed_target
    }

    #[must_use]
    pub const fn pose(&self) -> Pose {
        self.pose
    }

    #[must_use]
    pub const fn config(&self) -> &VehicleConfig {
        &self.config
    }

    #[must_use]
    pub const fn ground_probe_dist(&self) -> f32 {
        self.ground_probe_dist
    }

    /// Rotation for the whole visual model: terrain alignment with the
    /// logical yaw re-applied on top.
    #[must_use]
    pub fn model_rotation(&self) -> Quat {
        Quat::from_rotation_arc(Vec3::Z, self.model_up.into())
            * Quat::from_rotation_z(self.pose.yaw_degrees().to_radians())
    }

    /// Local rotation of the visual cabin (pitch from throttle, roll from
    /// steering), relative to the model.
    #[must_use]
    pub const fn cabin_tilt(&self) -> Quat {
        self.cabin_tilt
    }
}
