use std::f32::consts::FRAC_PI_2;

use bevy::core_pipeline::tonemapping::Tonemapping;
use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;

use crate::constants::{CAMERA_EYE_DISTANCE, CAMERA_EYE_HEIGHT};

use super::input::InputState;
use super::UpdateSet;

pub struct CameraPlugin;

const FOV_DEGREES: f32 = 75.0;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 1000.0;

const ROTATE_SPEED: f32 = 0.005;
const PAN_SPEED: f32 = 0.02;
const ZOOM_SPEED: f32 = 0.1;
const MIN_RADIUS: f32 = 2.0;
const MAX_RADIUS: f32 = 120.0;
/// Keep pitch just shy of the poles so yaw stays well defined.
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Turntable rig: the camera hangs `radius` away from `focus`, aimed at it,
/// with yaw around the world Y axis and pitch around the camera's local X.
#[derive(Component)]
pub(crate) struct OrbitCamera {
    pub(crate) focus: Vec3,
    pub(crate) yaw: f32,
    pub(crate) pitch: f32,
    pub(crate) radius: f32,
    pub(crate) enabled: bool,
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self {
            focus: Vec3::ZERO,
            yaw: 0.0,
            pitch: -CAMERA_EYE_HEIGHT.atan2(CAMERA_EYE_DISTANCE),
            radius: Vec2::new(CAMERA_EYE_DISTANCE, CAMERA_EYE_HEIGHT).length(),
            enabled: true,
        }
    }
}

impl OrbitCamera {
    pub(crate) fn rotate(&mut self, delta: Vec2) {
        self.yaw -= delta.x * ROTATE_SPEED;
        self.pitch = (self.pitch - delta.y * ROTATE_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Grab-style pan: the scene follows the cursor, so the focus moves
    /// against the drag along the camera's right and up axes.
    pub(crate) fn pan(&mut self, right: Vec3, up: Vec3, delta: Vec2) {
        self.focus += (right * -delta.x + up * delta.y) * PAN_SPEED;
    }

    pub(crate) fn zoom(&mut self, amount: f32) {
        self.radius = (self.radius * (1.0 - amount * ZOOM_SPEED)).clamp(MIN_RADIUS, MAX_RADIUS);
    }

    /// World transform for the current focus, angles and distance.
    pub(crate) fn transform(&self) -> Transform {
        let rotation = Quat::from_euler(EulerRot::YXZ, self.yaw, self.pitch, 0.0);
        let mut transform = Transform::from_rotation(rotation);
        transform.translation = self.focus - transform.forward() * self.radius;
        transform
    }
}

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, setup_camera).add_systems(
            Update,
            (sync_orbit_enabled, drive_orbit_camera)
                .chain()
                .in_set(UpdateSet::Camera),
        );
    }
}

fn setup_camera(mut commands: Commands) {
    let orbit = OrbitCamera::default();
    let transform = orbit.transform();

    commands.spawn((
        Camera3d::default(),
        Msaa::Sample4,
        Tonemapping::ReinhardLuminance,
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR_PLANE,
            far: FAR_PLANE,
            ..default()
        }),
        transform,
        orbit,
    ));
}

fn sync_orbit_enabled(input: Res<InputState>, mut q_camera: Query<&mut OrbitCamera>) {
    for mut orbit in &mut q_camera {
        if orbit.enabled != input.orbit_enabled {
            orbit.enabled = input.orbit_enabled;
        }
    }
}

fn drive_orbit_camera(
    buttons: Res<ButtonInput<MouseButton>>,
    motion: Res<AccumulatedMouseMotion>,
    scroll: Res<AccumulatedMouseScroll>,
    mut q_camera: Query<(&mut OrbitCamera, &mut Transform)>,
) {
    let Ok((mut orbit, mut transform)) = q_camera.single_mut() else {
        return;
    };

    if orbit.enabled {
        if buttons.pressed(MouseButton::Left) && motion.delta != Vec2::ZERO {
            orbit.rotate(motion.delta);
        }

        if buttons.pressed(MouseButton::Right) && motion.delta != Vec2::ZERO {
            let right = *transform.right();
            let up = *transform.up();
            orbit.pan(right, up, motion.delta);
        }

        if scroll.delta.y != 0.0 {
            orbit.zoom(scroll.delta.y);
        }
    }

    *transform = orbit.transform();
}
