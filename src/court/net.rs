use std::f32::consts::TAU;

use bevy::prelude::Vec3;

use crate::constants::{
    NET_BOTTOM_RADIUS, NET_HEIGHT, NET_RINGS, NET_SEGMENTS, RIM_HEIGHT, RIM_RADIUS,
};

use super::geometry::rim_center_x;

/// A tapered cord net hanging from a rim, in hoop-local coordinates. The rim
/// center sits at (`center_x`, `top_y`, 0).
#[derive(Clone, Copy)]
pub struct NetShape {
    pub segments: usize,
    pub rings: usize,
    pub top_radius: f32,
    pub bottom_radius: f32,
    pub height: f32,
    pub top_y: f32,
    pub center_x: f32,
}

pub fn hoop_net() -> NetShape {
    NetShape {
        segments: NET_SEGMENTS,
        rings: NET_RINGS,
        top_radius: RIM_RADIUS,
        bottom_radius: NET_BOTTOM_RADIUS,
        height: NET_HEIGHT,
        top_y: RIM_HEIGHT,
        center_x: rim_center_x(),
    }
}

fn cord_sample(net: NetShape, angle: f32, radius: f32, y: f32) -> Vec3 {
    Vec3::new(angle.cos() * radius + net.center_x, y, angle.sin() * radius)
}

/// One vertical cord per segment boundary, rim circle down to the bottom
/// opening. Points come in (top, bottom) pairs.
pub fn strand_points(net: NetShape) -> Vec<Vec3> {
    let mut points = Vec::with_capacity((net.segments + 1) * 2);

    for i in 0..=net.segments {
        let angle = TAU * i as f32 / net.segments as f32;
        points.push(cord_sample(net, angle, net.top_radius, net.top_y));
        points.push(cord_sample(
            net,
            angle,
            net.bottom_radius,
            net.top_y - net.height,
        ));
    }

    points
}

/// Horizontal loops at evenly spaced heights between rim and bottom opening,
/// each loop a chain of segment pairs that wraps back onto its first point.
pub fn ring_points(net: NetShape) -> Vec<Vec3> {
    let mut points = Vec::with_capacity((net.rings + 1) * (net.segments + 1) * 2);

    for j in 0..=net.rings {
        let ratio = j as f32 / net.rings as f32;
        let radius = net.top_radius - (net.top_radius - net.bottom_radius) * ratio;
        let y = net.top_y - net.height * ratio;

        for i in 0..=net.segments {
            let angle = TAU * i as f32 / net.segments as f32;
            let next = TAU * (i + 1) as f32 / net.segments as f32;
            points.push(cord_sample(net, angle, radius, y));
            points.push(cord_sample(net, next, radius, y));
        }
    }

    points
}

/// All net cords as line-list endpoint pairs: strands first, then rings.
pub fn line_points(net: NetShape) -> Vec<Vec3> {
    let mut points = strand_points(net);
    points.extend(ring_points(net));
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strand_points_cover_every_segment_boundary() {
        let net = hoop_net();
        let points = strand_points(net);

        assert_eq!(points.len(), (net.segments + 1) * 2);
        assert_eq!(points.len(), 26);
    }

    #[test]
    fn ring_points_cover_every_level_and_segment() {
        let net = hoop_net();
        let points = ring_points(net);

        assert_eq!(points.len(), (net.rings + 1) * (net.segments + 1) * 2);
        assert_eq!(points.len(), 130);
    }

    #[test]
    fn line_points_put_strands_before_rings() {
        let net = hoop_net();
        let all = line_points(net);
        let strands = strand_points(net);

        assert_eq!(all.len(), 156);
        assert_eq!(all[..strands.len()], strands[..]);
    }

    #[test]
    fn strands_run_from_rim_circle_to_bottom_opening() {
        let net = hoop_net();
        let points = strand_points(net);

        for pair in points.chunks(2) {
            let top = pair[0];
            let bottom = pair[1];

            assert!((top.y - net.top_y).abs() < 1e-6);
            assert!((bottom.y - (net.top_y - net.height)).abs() < 1e-6);

            let top_angle = top.z.atan2(top.x - net.center_x);
            let bottom_angle = bottom.z.atan2(bottom.x - net.center_x);
            assert!(
                (top_angle - bottom_angle).abs() < 1e-4,
                "strand should not twist around the net axis"
            );
        }
    }

    #[test]
    fn ring_levels_taper_linearly_toward_the_bottom() {
        let net = hoop_net();
        let points = ring_points(net);
        let per_level = (net.segments + 1) * 2;

        for j in 0..=net.rings {
            let ratio = j as f32 / net.rings as f32;
            let expected_radius = net.top_radius - (net.top_radius - net.bottom_radius) * ratio;
            let expected_y = net.top_y - net.height * ratio;

            for p in &points[j * per_level..(j + 1) * per_level] {
                let radius = Vec3::new(p.x - net.center_x, 0.0, p.z).length();
                assert!((radius - expected_radius).abs() < 1e-5);
                assert!((p.y - expected_y).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn ring_segments_chain_and_wrap_around_each_level() {
        let net = hoop_net();
        let points = ring_points(net);
        let per_level = (net.segments + 1) * 2;

        for j in 0..=net.rings {
            let level = &points[j * per_level..(j + 1) * per_level];

            for k in 0..net.segments {
                let pair_end = level[2 * k + 1];
                let next_start = level[2 * k + 2];
                assert!((pair_end - next_start).length() < 1e-6);
            }

            // The extra pair repeats the first one a full turn later.
            let last = net.segments;
            assert!((level[2 * last] - level[0]).length() < 1e-4);
            assert!((level[2 * last + 1] - level[1]).length() < 1e-4);
        }
    }

    #[test]
    fn net_narrows_and_stays_above_the_floor() {
        let net = hoop_net();

        assert!(net.bottom_radius < net.top_radius);
        assert!(net.top_y - net.height > 0.0);
    }
}
