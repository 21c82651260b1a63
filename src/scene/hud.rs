use bevy::prelude::*;

use crate::constants::color_from_hex;

pub struct HudPlugin;

const OVERLAY_LEFT: f32 = 20.0;
const HEADER_BOTTOM: f32 = 44.0;
const BODY_BOTTOM: f32 = 20.0;
const HEADER_FONT_SIZE: f32 = 18.0;
const BODY_FONT_SIZE: f32 = 16.0;

const TEXT_COLOR: u32 = 0xffffff;

impl Plugin for HudPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, spawn_instructions);
    }
}

fn spawn_instructions(mut commands: Commands) {
    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(OVERLAY_LEFT),
            bottom: Val::Px(HEADER_BOTTOM),
            ..default()
        },
        Text::new("Controls:"),
        TextFont::from_font_size(HEADER_FONT_SIZE),
        TextColor(color_from_hex(TEXT_COLOR)),
    ));

    commands.spawn((
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(OVERLAY_LEFT),
            bottom: Val::Px(BODY_BOTTOM),
            ..default()
        },
        Text::new("O - Toggle orbit camera"),
        TextFont::from_font_size(BODY_FONT_SIZE),
        TextColor(color_from_hex(TEXT_COLOR)),
    ));
}
