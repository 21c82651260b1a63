use bevy::prelude::*;

use crate::constants::{color_from_hex, Colors};

use super::input::InputState;

#[derive(SystemSet, Debug, Hash, Eq, PartialEq, Clone)]
pub(crate) enum UpdateSet {
    Input,
    Camera,
}

pub struct CorePlugin;

/// Bevy ambient brightness is in cd/m^2.
const AMBIENT_BRIGHTNESS: f32 = 300.0;
/// Key light illuminance in lux (overcast daylight territory).
const KEY_LIGHT_ILLUMINANCE: f32 = 10_000.0;
const KEY_LIGHT_POSITION: Vec3 = Vec3::new(10.0, 20.0, 15.0);

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputState>()
            .insert_resource(ClearColor(color_from_hex(Colors::BACKGROUND)))
            .insert_resource(AmbientLight {
                color: Color::WHITE,
                brightness: AMBIENT_BRIGHTNESS,
                ..default()
            })
            .configure_sets(Update, (UpdateSet::Input, UpdateSet::Camera).chain())
            .add_systems(Startup, setup_lights);
    }
}

fn setup_lights(mut commands: Commands) {
    commands.spawn((
        DirectionalLight {
            illuminance: KEY_LIGHT_ILLUMINANCE,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(KEY_LIGHT_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
