/// Designer-facing tunables for one vehicle.
///
/// Read-only during simulation; the controller never mutates its config.
/// Angle-valued fields are in degrees.
#[derive(Clone, Copy, Debug)]
pub struct VehicleConfig {
    /// Easing rate of the forward-speed target (higher = snappier throttle)
    pub acceleration: f32,
    /// Top forward speed; also the magnitude latched by a full throttle or reverse request
    pub max_speed: f32,
    /// Speed taken off the request per brake call while still fast
    pub brake_deceleration: f32,
    /// Planar speed² under which braking flips into reversing
    pub reverse_threshold_sq: f32,
    /// Heading delta requested by a full steering input
    pub steering: f32,
    /// Not read by the motion update; carried for backends that apply their own pull
    pub gravity: f32,
    /// Lateral velocity retention knob: 0 keeps 90% per step, 1 keeps all of
    /// it, and values above 1 amplify the slide instead of damping it
    pub drift: f32,
    /// Cabin roll coefficient. Zero falls back to the bare 1/6 scale
    pub body_tilt: f32,
    /// Divisor turning the speed target into cabin pitch. Zero disables pitch
    pub forward_tilt: f32,
    /// Allow steering while fully airborne
    pub turn_in_air: bool,
    /// Allow the heading to change while standing (near) still
    pub turn_when_stationary: bool,
    /// Filter bits handed to every ground probe
    pub ground_mask: u32,
}

impl Default for VehicleConfig {
    fn default() -> Self {
        Self::ROADSTER
    }
}

impl VehicleConfig {
    /// All-round road tuning.
    pub const ROADSTER: Self = Self {
        acceleration: 12.0,
        max_speed: 30.0,
        brake_deceleration: 1.7,
        reverse_threshold_sq: 150.0,
        steering: 80.0,
        gravity: 20.0,
        drift: 0.85,
        body_tilt: 1.0,
        forward_tilt: 9.06,
        turn_in_air: true,
        turn_when_stationary: true,
        ground_mask: u32::MAX,
    };

    /// Loose rear end: `drift` above 1.0 feeds lateral slide back in every
    /// step instead of bleeding it off.
    pub const KEELHAULER: Self = Self {
        acceleration: 10.0,
        max_speed: 34.0,
        brake_deceleration: 2.2,
        reverse_threshold_sq: 150.0,
        steering: 95.0,
        gravity: 20.0,
        drift: 1.2,
        body_tilt: 1.4,
        forward_tilt: 7.5,
        turn_in_air: false,
        turn_when_stationary: false,
        ground_mask: u32::MAX,
    };

    /// Panics when a tunable is non-finite or a core rate is not positive.
    /// Bad configuration is a wiring fault and must fail before the
    /// simulation starts, not during it.
    pub fn validate(&self) {
        for (name, value) in [
            ("acceleration", self.acceleration),
            ("max_speed", self.max_speed),
            ("brake_deceleration", self.brake_deceleration),
            ("reverse_threshold_sq", self.reverse_threshold_sq),
            ("steering", self.steering),
            ("gravity", self.gravity),
            ("drift", self.drift),
            ("body_tilt", self.body_tilt),
            ("forward_tilt", self.forward_tilt),
        ] {
            assert!(
                value.is_finite(),
                "VehicleConfig::{name} must be finite, got {value}"
            );
        }

        assert!(
            self.acceleration > 0.0,
            "VehicleConfig::acceleration must be positive"
        );
        assert!(
            self.max_speed > 0.0,
            "VehicleConfig::max_speed must be positive"
        );
    }
}
