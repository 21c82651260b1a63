pub const COURT_LENGTH: f32 = 30.0;
pub const COURT_WIDTH: f32 = 15.0;
pub const COURT_THICKNESS: f32 = 0.2;

pub const COURT_HALF_LENGTH: f32 = COURT_LENGTH / 2.0;

/// Painted markings float just above the floor top (y = 0.1), each layer a
/// little higher than the one below so they never z-fight.
pub const CENTER_LINE_Y: f32 = 0.105;
pub const CENTER_CIRCLE_Y: f32 = 0.11;
pub const THREE_POINT_Y: f32 = 0.115;

pub const CENTER_LINE_WIDTH: f32 = 0.1;
pub const CENTER_LINE_THICKNESS: f32 = 0.01;

pub const CENTER_CIRCLE_INNER_RADIUS: f32 = 1.75;
pub const CENTER_CIRCLE_OUTER_RADIUS: f32 = 1.8;

pub const THREE_POINT_RADIUS: f32 = 6.75;
pub const THREE_POINT_HALF_WIDTH: f32 = 0.05;

/// Distance from the baseline to the center of each three-point arc.
pub const ARC_BASELINE_INSET: f32 = 1.575;
/// Distance from the baseline to each hoop group origin (the backboard plane).
pub const HOOP_BASELINE_INSET: f32 = 1.2;

pub const MARKING_SEGMENTS: usize = 64;

pub const BACKBOARD_DEPTH: f32 = 0.05;
pub const BACKBOARD_WIDTH: f32 = 1.8;
pub const BACKBOARD_HEIGHT: f32 = 1.2;
pub const BACKBOARD_CENTER_Y: f32 = 3.35;
pub const BACKBOARD_ALPHA: f32 = 0.8;

/// Regulation rim: 3.05 m off the floor, 45.72 cm inner diameter.
pub const RIM_HEIGHT: f32 = 3.05;
pub const RIM_RADIUS: f32 = 0.2286;
pub const RIM_TUBE_RADIUS: f32 = 0.025;

pub const NET_SEGMENTS: usize = 12;
pub const NET_RINGS: usize = 4;
pub const NET_BOTTOM_RADIUS: f32 = 0.18;
pub const NET_HEIGHT: f32 = 0.4;
pub const NET_ALPHA: f32 = 0.8;

pub const POLE_RADIUS: f32 = 0.1;
pub const POLE_HEIGHT: f32 = 4.0;
/// Pole center sits behind the backboard in hoop-local space.
pub const POLE_OFFSET_X: f32 = -0.5;
pub const ARM_LENGTH: f32 = 0.55;
pub const ARM_THICKNESS: f32 = 0.1;

pub const BALL_RADIUS: f32 = 0.122;
pub const SEAM_TUBE_RADIUS: f32 = 0.004;
/// Seam tori sit a hair off the ball surface so they read as painted lines.
pub const SEAM_LIFT: f32 = 0.001;

pub const CAMERA_EYE_HEIGHT: f32 = 15.0;
pub const CAMERA_EYE_DISTANCE: f32 = 30.0;

#[derive(Clone, Copy)]
pub struct Colors;

impl Colors {
    pub const BACKGROUND: u32 = 0x000000;
    pub const COURT: u32 = 0xc68642;
    pub const MARKING: u32 = 0xffffff;
    pub const BACKBOARD: u32 = 0xffffff;
    pub const RIM: u32 = 0xffa500;
    pub const NET: u32 = 0xffffff;
    pub const SUPPORT: u32 = 0x808080;
    pub const BALL: u32 = 0xd35400;
    pub const SEAM: u32 = 0x000000;
}

pub fn color_from_hex(rgb: u32) -> bevy::prelude::Color {
    let r = ((rgb >> 16) & 0xff) as f32 / 255.0;
    let g = ((rgb >> 8) & 0xff) as f32 / 255.0;
    let b = (rgb & 0xff) as f32 / 255.0;
    bevy::prelude::Color::srgb(r, g, b)
}
