mod constants;
mod court;
mod scene;

use bevy::prelude::*;
use bevy::window::{PresentMode, WindowResolution};

use scene::{
    BallPlugin, CameraPlugin, CorePlugin, CourtPlugin, HoopsPlugin, HudPlugin, InputPlugin,
};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Basketball Court".to_string(),
                resolution: WindowResolution::new(1280, 720),
                present_mode: PresentMode::AutoVsync,
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(CorePlugin)
        .add_plugins(CourtPlugin)
        .add_plugins(HoopsPlugin)
        .add_plugins(BallPlugin)
        .add_plugins(CameraPlugin)
        .add_plugins(InputPlugin)
        .add_plugins(HudPlugin)
        .run();
}
