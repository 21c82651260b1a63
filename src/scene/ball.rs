use std::f32::consts::{FRAC_PI_2, PI};

use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors, BALL_RADIUS, SEAM_LIFT, SEAM_TUBE_RADIUS};
use crate::court::geometry::ball_rest_height;

pub struct BallPlugin;

const BALL_SECTORS: usize = 32;
const BALL_STACKS: usize = 32;
const SEAM_MINOR_RESOLUTION: usize = 8;
const SEAM_MAJOR_RESOLUTION: usize = 100;
const VERTICAL_SEAMS: usize = 3;
const BALL_ROUGHNESS: f32 = 0.5;

impl Plugin for BallPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_ball);
    }
}

fn spawn_ball(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let ball_mesh = meshes.add(Sphere::new(BALL_RADIUS).mesh().uv(BALL_SECTORS, BALL_STACKS));
    let seam_mesh = meshes.add(
        Torus {
            minor_radius: SEAM_TUBE_RADIUS,
            major_radius: BALL_RADIUS + SEAM_LIFT,
        }
        .mesh()
        .minor_resolution(SEAM_MINOR_RESOLUTION)
        .major_resolution(SEAM_MAJOR_RESOLUTION),
    );

    let ball_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::BALL),
        perceptual_roughness: BALL_ROUGHNESS,
        ..default()
    });
    let seam_material = materials.add(StandardMaterial {
        base_color: color_from_hex(Colors::SEAM),
        unlit: true,
        ..default()
    });

    commands
        .spawn((
            Transform::from_xyz(0.0, ball_rest_height(), 0.0),
            Visibility::default(),
        ))
        .with_children(|ball| {
            ball.spawn((
                Mesh3d(ball_mesh),
                MeshMaterial3d(ball_material),
                Transform::default(),
            ));

            // Equator seam; the torus primitive already lies flat.
            ball.spawn((
                Mesh3d(seam_mesh.clone()),
                MeshMaterial3d(seam_material.clone()),
                Transform::default(),
            ));

            // Vertical seams fanned evenly about the vertical axis.
            for i in 0..VERTICAL_SEAMS {
                let yaw = i as f32 * PI / VERTICAL_SEAMS as f32;
                ball.spawn((
                    Mesh3d(seam_mesh.clone()),
                    MeshMaterial3d(seam_material.clone()),
                    Transform::from_rotation(
                        Quat::from_rotation_y(yaw) * Quat::from_rotation_x(FRAC_PI_2),
                    ),
                ));
            }
        });
}
