mod support;

use glam::{Quat, Vec3A};
use kartsim::sim::{Pose, Vehicle, VehicleConfig};
use support::*;

#[test]
fn probe_length_derived_from_model_offset() {
    let vehicle = Vehicle::new(
        VehicleConfig::ROADSTER,
        Pose::IDENTITY,
        Vec3A::new(0.0, 0.0, -1.5),
    );
    assert_near(vehicle.ground_probe_dist(), 2.5, 1e-6);
}

#[test]
fn set_model_offset_recomputes_probe() {
    let mut vehicle = Vehicle::new(
        VehicleConfig::ROADSTER,
        Pose::IDENTITY,
        Vec3A::new(0.0, 0.0, -1.5),
    );

    vehicle.set_model_offset(Vec3A::new(0.0, 0.0, -0.5));
    assert_near(vehicle.ground_probe_dist(), 1.5, 1e-6);
}

fn rig_at_height(z: f32) -> (Vehicle, TestBody, FlatGround) {
    let spawn = Pose::new(Vec3A::new(0.0, 0.0, z), Quat::IDENTITY);
    let vehicle = Vehicle::new(
        VehicleConfig::ROADSTER,
        spawn,
        Vec3A::new(0.0, 0.0, -1.0), // probe 2.0, near probe 3.0
    );
    (vehicle, TestBody::at(spawn.pos), FlatGround::at(0.0))
}

#[test]
fn contact_bands() {
    // Within the contact probe: both flags set.
    let (mut vehicle, mut body, ground) = rig_at_height(1.5);
    vehicle.tick_update(&mut body, &ground, DT);
    assert!(vehicle.is_on_ground());
    assert!(vehicle.is_near_ground());

    // Past the contact probe but within the longer near probe.
    let (mut vehicle, mut body, ground) = rig_at_height(2.5);
    vehicle.tick_update(&mut body, &ground, DT);
    assert!(!vehicle.is_on_ground());
    assert!(vehicle.is_near_ground());

    // Past both probes: fully airborne.
    let (mut vehicle, mut body, ground) = rig_at_height(3.5);
    vehicle.tick_update(&mut body, &ground, DT);
    assert!(!vehicle.is_on_ground());
    assert!(!vehicle.is_near_ground());
}

#[test]
fn ground_mask_filters_surfaces() {
    let config = VehicleConfig {
        ground_mask: 0b01,
        ..VehicleConfig::ROADSTER
    };
    let spawn = Pose::new(Vec3A::new(0.0, 0.0, 1.5), Quat::IDENTITY);
    let mut vehicle = Vehicle::new(config, spawn, Vec3A::new(0.0, 0.0, -1.0));
    let mut body = TestBody::at(spawn.pos);
    let ground = FlatGround {
        height: 0.0,
        layer: 0b10,
    };

    vehicle.tick_update(&mut body, &ground, DT);
    assert!(!vehicle.is_on_ground());
    assert!(!vehicle.is_near_ground());

    let config = VehicleConfig {
        ground_mask: 0b11,
        ..VehicleConfig::ROADSTER
    };
    let mut vehicle = Vehicle::new(config, spawn, Vec3A::new(0.0, 0.0, -1.0));
    vehicle.tick_update(&mut body, &ground, DT);
    assert!(vehicle.is_on_ground());
}

#[test]
fn model_rotation_reapplies_heading_on_flat_ground() {
    let (mut vehicle, mut body, ground) = grounded_rig(VehicleConfig::ROADSTER);

    for _ in 0..30 {
        vehicle.request_acceleration();
        vehicle.frame_update(DT);
        vehicle.request_turn(1.0);
        vehicle.tick_update(&mut body, &ground, DT);
        body.integrate(DT);
    }

    let yaw = vehicle.pose().yaw_degrees();
    assert!(yaw > 0.5);

    // Flat ground keeps the model up-axis at +Z, so the model rotation is
    // exactly the heading.
    assert_quat_near(
        vehicle.model_rotation(),
        Quat::from_rotation_z(yaw.to_radians()),
    );
}
