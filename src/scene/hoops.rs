use bevy::prelude::*;

use crate::constants::{
    color_from_hex, Colors, ARM_LENGTH, ARM_THICKNESS, BACKBOARD_ALPHA, BACKBOARD_CENTER_Y,
    BACKBOARD_DEPTH, BACKBOARD_HEIGHT, BACKBOARD_WIDTH, NET_ALPHA, POLE_HEIGHT, POLE_OFFSET_X,
    POLE_RADIUS, RIM_HEIGHT, RIM_RADIUS, RIM_TUBE_RADIUS,
};
use crate::court::geometry::{hoop_placements, rim_center_x};
use crate::court::net::{hoop_net, line_points};

use super::mesh::line_list;

pub struct HoopsPlugin;

const RIM_MINOR_RESOLUTION: usize = 16;
const RIM_MAJOR_RESOLUTION: usize = 100;
const POLE_RESOLUTION: u32 = 32;
const RIM_ROUGHNESS: f32 = 0.3;
const RIM_METALLIC: f32 = 0.8;

impl Plugin for HoopsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_hoops);
    }
}

/// Spawns the two hoop assemblies, one per baseline. Each is a parent entity
/// at the backboard plane, yawed so its local +x points at center court, with
/// backboard, rim, net and support children laid out in hoop-local space.
fn spawn_hoops(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    // Both ends share one set of meshes and materials.
    let backboard_mesh = meshes.add(Cuboid::new(
        BACKBOARD_DEPTH,
        BACKBOARD_HEIGHT,
        BACKBOARD_WIDTH,
    ));
    let rim_mesh = meshes.add(
        Torus {
            minor_radius: RIM_TUBE_RADIUS,
            major_radius: RIM_RADIUS,
        }
        .mesh()
        .minor_resolution(RIM_MINOR_RESOLUTION)
        .major_resolution(RIM_MAJOR_RESOLUTION),
    );
    let net_mesh = meshes.add(line_list(line_points(hoop_net())));
    let pole_mesh = meshes.add(
        Cylinder::new(POLE_RADIUS, POLE_HEIGHT)
            .mesh()
            .resolution(POLE_RESOLUTION),
    );
    let arm_mesh = meshes.add(Cuboid::new(ARM_LENGTH, ARM_THICKNESS, ARM_THICKNESS));

    let backboard_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::BACKBOARD).with_alpha(BACKBOARD_ALPHA),
        alpha_mode: AlphaMode::Blend,
        double_sided: true,
        cull_mode: None,
        ..default()
    });
    let rim_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::RIM),
        perceptual_roughness: RIM_ROUGHNESS,
        metallic: RIM_METALLIC,
        ..default()
    });
    let net_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::NET).with_alpha(NET_ALPHA),
        alpha_mode: AlphaMode::Blend,
        unlit: true,
        ..default()
    });
    let support_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::SUPPORT),
        ..default()
    });

    for placement in hoop_placements() {
        commands
            .spawn((
                Transform::from_xyz(placement.x, 0.0, 0.0)
                    .with_rotation(Quat::from_rotation_y(placement.rotation_y)),
                Visibility::default(),
            ))
            .with_children(|hoop| {
                hoop.spawn((
                    Mesh3d(backboard_mesh.clone()),
                    MeshMaterial3d(backboard_material.clone()),
                    Transform::from_xyz(0.0, BACKBOARD_CENTER_Y, 0.0),
                ));

                // The torus primitive already lies in the horizontal plane.
                hoop.spawn((
                    Mesh3d(rim_mesh.clone()),
                    MeshMaterial3d(rim_material.clone()),
                    Transform::from_xyz(rim_center_x(), RIM_HEIGHT, 0.0),
                ));

                // Net points carry their own rim offset, so no local transform.
                hoop.spawn((
                    Mesh3d(net_mesh.clone()),
                    MeshMaterial3d(net_material.clone()),
                    Transform::default(),
                ));

                hoop.spawn((
                    Mesh3d(pole_mesh.clone()),
                    MeshMaterial3d(support_material.clone()),
                    Transform::from_xyz(POLE_OFFSET_X, POLE_HEIGHT / 2.0, 0.0),
                ));

                hoop.spawn((
                    Mesh3d(arm_mesh.clone()),
                    MeshMaterial3d(support_material.clone()),
                    Transform::from_xyz(POLE_OFFSET_X / 2.0, BACKBOARD_CENTER_Y, 0.0),
                ));
            });
    }
}
