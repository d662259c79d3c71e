use super::{GroundRaycaster, Pose, RigidBody, Vehicle, VehicleConfig};
use ahash::AHashMap;
use fastrand::Rng;
use glam::Vec3A;
use log::info;

/// Settings for the headless driver.
#[derive(Clone, Debug)]
pub struct WorldConfig {
    /// Fixed physics steps per second.
    pub tick_rate: f32,
    /// Poses handed out by spawn and respawn.
    pub spawn_points: Vec<Pose>,
    /// Optional RNG seed for deterministic respawn placement.
    /// If None, a random seed will be used.
    pub rng_seed: Option<u64>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            tick_rate: 60.0,
            spawn_points: vec![Pose::IDENTITY],
            rng_seed: None,
        }
    }
}

/// A vehicle paired with its backend body.
pub struct WorldVehicle<B> {
    pub vehicle: Vehicle,
    pub body: B,
}

/// Headless driver for a set of vehicles over one ground backend.
///
/// The world only fans the frame/tick updates out; it never integrates
/// bodies itself. Callers advance their physics backend between steps.
pub struct World<B, G> {
    pub ground: G,
    /// Do NOT add/remove vehicles by editing the map directly; use
    /// `add_vehicle` so ids stay unique.
    pub vehicles: AHashMap<u64, WorldVehicle<B>>,
    spawn_points: Vec<Pose>,
    rng: Rng,
    tick_time: f32,
    tick_count: u64,
    last_vehicle_id: u64,
}

impl<B: RigidBody, G: GroundRaycaster> World<B, G> {
    #[must_use]
    pub fn new(ground: G, config: WorldConfig) -> Self {
        assert!(
            config.tick_rate > 0.0,
            "WorldConfig::tick_rate must be positive"
        );
        assert!(
            !config.spawn_points.is_empty(),
            "WorldConfig::spawn_points must not be empty"
        );

        Self {
            ground,
            vehicles: AHashMap::new(),
            spawn_points: config.spawn_points,
            rng: config.rng_seed.map_or_else(Rng::new, Rng::with_seed),
            tick_time: 1.0 / config.tick_rate,
            tick_count: 0,
            last_vehicle_id: 0,
        }
    }

    /// Register a vehicle at a randomly chosen spawn point, returning the id
    /// that keys it in `vehicles`.
    pub fn add_vehicle(&mut self, mut body: B, config: VehicleConfig, model_offset: Vec3A) -> u64 {
        let idx = self.rng.usize(0..self.spawn_points.len());
        let spawn = self.spawn_points[idx];

        let mut vehicle = Vehicle::new(config, spawn, model_offset);
        vehicle.teleport(&mut body, spawn.pos, spawn.rot);

        self.last_vehicle_id += 1;
        info!("vehicle {} spawned at {}", self.last_vehicle_id, spawn.pos);
        self.vehicles
            .insert(self.last_vehicle_id, WorldVehicle { vehicle, body });
        self.last_vehicle_id
    }

    /// Per-visual-frame work: ease every vehicle's speed target.
    pub fn frame(&mut self, dt: f32) {
        for wv in self.vehicles.values_mut() {
            wv.vehicle.frame_update(dt);
        }
    }

    /// Run `ticks` fixed physics steps. Call with 1 from a real engine's
    /// fixed-step callback; larger counts are for headless fast-forward.
    pub fn step(&mut self, ticks: u32) {
        for _ in 0..ticks {
            for wv in self.vehicles.values_mut() {
                wv.vehicle.tick_update(&mut wv.body, &self.ground, self.tick_time);
            }
            self.tick_count += 1;
        }
    }

    /// Teleport a vehicle back to a randomly chosen spawn point.
    pub fn respawn(&mut self, id: u64) {
        let idx = self.rng.usize(0..self.spawn_points.len());
        let spawn = self.spawn_points[idx];

        let wv = self.vehicles.get_mut(&id).expect("unknown vehicle id");
        wv.vehicle.teleport(&mut wv.body, spawn.pos, spawn.rot);
        info!("vehicle {id} respawned at {}", spawn.pos);
    }

    #[must_use]
    pub const fn tick_time(&self) -> f32 {
        self.tick_time
    }

    #[must_use]
    pub const fn tick_rate(&self) -> f32 {
        1.0 / self.tick_time
    }

    #[inline]
    #[must_use]
    pub const fn tick_count(&self) -> u64 {
        self.tick_count
    }
}
