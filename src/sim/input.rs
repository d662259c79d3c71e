use super::{RigidBody, Vehicle};

/// One input symbol per control, generic over the host engine's key type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBindings<K> {
    pub accelerate: K,
    pub brake: K,
    pub steer_left: K,
    pub steer_right: K,
}

impl Default for KeyBindings<char> {
    fn default() -> Self {
        Self {
            accelerate: 'w',
            brake: 's',
            steer_left: 'a',
            steer_right: 'd',
        }
    }
}

/// Thin adapter between the host's key state and the vehicle's intent
/// surface. Holds no state beyond the bindings; call `sample` once per
/// visual frame.
#[derive(Clone, Copy, Debug)]
pub struct InputAdapter<K> {
    pub bindings: KeyBindings<K>,
}

impl<K: Copy> InputAdapter<K> {
    #[must_use]
    pub const fn new(bindings: KeyBindings<K>) -> Self {
        Self { bindings }
    }

    /// Forward every held control to the vehicle. Holding both steering keys
    /// is fine: requests overwrite, so the later call (steer right) wins.
    pub fn sample(
        &self,
        is_down: impl Fn(K) -> bool,
        vehicle: &mut Vehicle,
        body: &impl RigidBody,
    ) {
        if is_down(self.bindings.accelerate) {
            vehicle.request_acceleration();
        }
        if is_down(self.bindings.brake) {
            vehicle.request_brake(body);
        }

        if is_down(self.bindings.steer_left) {
            vehicle.request_turn(-1.0);
        }
        if is_down(self.bindings.steer_right) {
            vehicle.request_turn(1.0);
        }
    }
}
