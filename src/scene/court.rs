use bevy::prelude::*;

use crate::constants::{
    color_from_hex, Colors, COURT_LENGTH, COURT_THICKNESS, COURT_WIDTH, MARKING_SEGMENTS,
};
use crate::court::geometry::{center_circle, center_line, three_point_arcs, ArcMarking};

use super::mesh::flat_ring;

pub struct CourtPlugin;

const FLOOR_ROUGHNESS: f32 = 0.6;

impl Plugin for CourtPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_court);
    }
}

fn spawn_court(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(COURT_LENGTH, COURT_THICKNESS, COURT_WIDTH))),
        MeshMaterial3d(materials.add(StandardMaterial {
            base_color: color_from_hex(Colors::COURT),
            perceptual_roughness: FLOOR_ROUGHNESS,
            ..default()
        })),
        Transform::default(),
    ));

    // All painted markings share one flat white material.
    let paint = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::MARKING),
        unlit: true,
        double_sided: true,
        cull_mode: None,
        ..default()
    });

    let line = center_line();
    commands.spawn((
        Mesh3d(meshes.add(Cuboid::new(line.size.x, line.size.y, line.size.z))),
        MeshMaterial3d(paint.clone()),
        Transform::from_translation(line.position),
    ));

    spawn_arc_marking(&mut commands, &mut meshes, center_circle(), paint.clone());

    for arc in three_point_arcs() {
        spawn_arc_marking(&mut commands, &mut meshes, arc, paint.clone());
    }
}

fn spawn_arc_marking(
    commands: &mut Commands,
    meshes: &mut Assets<Mesh>,
    marking: ArcMarking,
    material: Handle<StandardMaterial>,
) {
    let mesh = meshes.add(flat_ring(
        marking.inner_radius,
        marking.outer_radius,
        MARKING_SEGMENTS,
        marking.theta_start,
        marking.theta_length,
    ));

    commands.spawn((
        Mesh3d(mesh),
        MeshMaterial3d(material),
        Transform::from_translation(marking.position).with_rotation(
            Quat::from_rotation_x(marking.rotation_x) * Quat::from_rotation_z(marking.rotation_z),
        ),
    ));
}
