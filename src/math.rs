use glam::Vec3A;

/// Eased interpolation from `from` to `to`.
///
/// `t` is clamped to `[0, 1]` and shaped by the smoothstep polynomial, so the
/// result never overshoots and the ramp has zero slope at both endpoints.
#[must_use]
pub fn smooth_step(from: f32, to: f32, t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    let eased = t * t * (3.0 - 2.0 * t);
    from + (to - from) * eased
}

/// Linear interpolation with `t` clamped to `[0, 1]`.
#[must_use]
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t.clamp(0.0, 1.0)
}

/// Component-wise linear interpolation with `t` clamped to `[0, 1]`.
#[must_use]
pub fn lerp_vec3(from: Vec3A, to: Vec3A, t: f32) -> Vec3A {
    from.lerp(to, t.clamp(0.0, 1.0))
}

/// The ground-plane (XY) component of a vector.
///
/// Speed thresholds compare against this, not the full magnitude, so falling
/// straight down never counts as moving.
#[must_use]
pub fn planar(v: Vec3A) -> Vec3A {
    Vec3A::new(v.x, v.y, 0.0)
}
