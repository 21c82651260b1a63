use std::f32::consts::{FRAC_PI_2, PI, TAU};

use bevy::prelude::Vec3;

use crate::constants::{
    ARC_BASELINE_INSET, BALL_RADIUS, CENTER_CIRCLE_INNER_RADIUS, CENTER_CIRCLE_OUTER_RADIUS,
    CENTER_CIRCLE_Y, CENTER_LINE_THICKNESS, CENTER_LINE_WIDTH, CENTER_LINE_Y, COURT_HALF_LENGTH,
    COURT_THICKNESS, COURT_WIDTH, HOOP_BASELINE_INSET, RIM_RADIUS, RIM_TUBE_RADIUS,
    THREE_POINT_HALF_WIDTH, THREE_POINT_RADIUS, THREE_POINT_Y,
};

#[derive(Clone, Copy)]
pub struct BoxMarking {
    pub size: Vec3,
    pub position: Vec3,
}

/// A flat annular band, laid out in its local XY plane and oriented onto the
/// floor by `rotation_x` / `rotation_z` (x applied after z, both about the
/// marking's own origin).
#[derive(Clone, Copy)]
pub struct ArcMarking {
    pub inner_radius: f32,
    pub outer_radius: f32,
    pub theta_start: f32,
    pub theta_length: f32,
    pub position: Vec3,
    pub rotation_x: f32,
    pub rotation_z: f32,
}

#[derive(Clone, Copy)]
pub struct HoopPlacement {
    pub x: f32,
    pub rotation_y: f32,
}

pub fn center_line() -> BoxMarking {
    BoxMarking {
        size: Vec3::new(CENTER_LINE_WIDTH, CENTER_LINE_THICKNESS, COURT_WIDTH),
        position: Vec3::new(0.0, CENTER_LINE_Y, 0.0),
    }
}

pub fn center_circle() -> ArcMarking {
    ArcMarking {
        inner_radius: CENTER_CIRCLE_INNER_RADIUS,
        outer_radius: CENTER_CIRCLE_OUTER_RADIUS,
        theta_start: 0.0,
        theta_length: TAU,
        position: Vec3::new(0.0, CENTER_CIRCLE_Y, 0.0),
        rotation_x: -FRAC_PI_2,
        rotation_z: 0.0,
    }
}

pub fn three_point_arc(x_pos: f32, rotation_z: f32) -> ArcMarking {
    ArcMarking {
        inner_radius: THREE_POINT_RADIUS - THREE_POINT_HALF_WIDTH,
        outer_radius: THREE_POINT_RADIUS + THREE_POINT_HALF_WIDTH,
        theta_start: -FRAC_PI_2,
        theta_length: PI,
        position: Vec3::new(x_pos, THREE_POINT_Y, 0.0),
        rotation_x: -FRAC_PI_2,
        rotation_z,
    }
}

/// Far arc first (spun half a turn so its opening faces center court), then
/// the near arc.
pub fn three_point_arcs() -> [ArcMarking; 2] {
    let x = COURT_HALF_LENGTH - ARC_BASELINE_INSET;

    [three_point_arc(x, PI), three_point_arc(-x, 0.0)]
}

pub fn hoop_placements() -> [HoopPlacement; 2] {
    let x = COURT_HALF_LENGTH - HOOP_BASELINE_INSET;

    [
        HoopPlacement { x, rotation_y: PI },
        HoopPlacement { x: -x, rotation_y: 0.0 },
    ]
}

/// Rim center offset along the hoop's local +x so the ring clears the board.
pub fn rim_center_x() -> f32 {
    RIM_RADIUS + RIM_TUBE_RADIUS
}

pub fn ball_rest_height() -> f32 {
    BALL_RADIUS + COURT_THICKNESS / 2.0
}
