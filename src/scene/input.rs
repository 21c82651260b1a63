use bevy::prelude::*;

use super::UpdateSet;

pub struct InputPlugin;

#[derive(Resource)]
pub(crate) struct InputState {
    /// Whether mouse input drives the orbit camera. Starts on; the O key
    /// toggles it.
    pub(crate) orbit_enabled: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            orbit_enabled: true,
        }
    }
}

impl InputState {
    pub(crate) fn toggle_orbit(&mut self) {
        self.orbit_enabled = !self.orbit_enabled;
    }
}

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, input_system.in_set(UpdateSet::Input));
    }
}

fn input_system(mut input: ResMut<InputState>, keys: Res<ButtonInput<KeyCode>>) {
    if keys.just_pressed(KeyCode::KeyO) {
        input.toggle_orbit();
        info!(
            "orbit camera {}",
            if input.orbit_enabled {
                "enabled"
            } else {
                "disabled"
            }
        );
    }
}
