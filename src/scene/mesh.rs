use bevy::asset::RenderAssetUsages;
use bevy::mesh::{Indices, Mesh, PrimitiveTopology};
use bevy::prelude::Vec3;

/// Builds a flat annular band in the local XY plane, normals facing +Z.
///
/// The band runs from `theta_start` counterclockwise for `theta_length`
/// radians and is sampled at `segments + 1` spokes with an inner and an outer
/// vertex each, so a full turn closes back onto its starting spoke.
pub fn flat_ring(
    inner_radius: f32,
    outer_radius: f32,
    segments: usize,
    theta_start: f32,
    theta_length: f32,
) -> Mesh {
    let spokes = segments + 1;
    let mut positions = Vec::with_capacity(spokes * 2);
    let mut normals = Vec::with_capacity(spokes * 2);
    let mut uvs = Vec::with_capacity(spokes * 2);

    for i in 0..spokes {
        let fraction = i as f32 / segments as f32;
        let theta = theta_start + theta_length * fraction;
        let (sin, cos) = theta.sin_cos();

        positions.push([cos * inner_radius, sin * inner_radius, 0.0]);
        positions.push([cos * outer_radius, sin * outer_radius, 0.0]);
        normals.push([0.0, 0.0, 1.0]);
        normals.push([0.0, 0.0, 1.0]);
        uvs.push([fraction, 0.0]);
        uvs.push([fraction, 1.0]);
    }

    let mut indices = Vec::with_capacity(segments * 6);
    for i in 0..segments as u32 {
        let base = i * 2;
        indices.extend_from_slice(&[base, base + 1, base + 2, base + 2, base + 1, base + 3]);
    }

    Mesh::new(PrimitiveTopology::TriangleList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, positions)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
        .with_inserted_attribute(Mesh::ATTRIBUTE_UV_0, uvs)
        .with_inserted_indices(Indices::U32(indices))
}

/// Builds a line-list mesh from endpoint pairs. Normals are filled with a
/// constant so the mesh satisfies the standard material vertex layout.
pub fn line_list(points: Vec<Vec3>) -> Mesh {
    let normals = vec![[0.0, 1.0, 0.0]; points.len()];

    Mesh::new(PrimitiveTopology::LineList, RenderAssetUsages::default())
        .with_inserted_attribute(Mesh::ATTRIBUTE_POSITION, points)
        .with_inserted_attribute(Mesh::ATTRIBUTE_NORMAL, normals)
}

#[cfg(test)]
mod tests {
    use std::f32::consts::{FRAC_PI_2, PI, TAU};

    use bevy::mesh::VertexAttributeValues;

    use super::*;

    fn positions(mesh: &Mesh) -> &Vec<[f32; 3]> {
        match mesh.attribute(Mesh::ATTRIBUTE_POSITION) {
            Some(VertexAttributeValues::Float32x3(values)) => values,
            _ => panic!("expected float32x3 positions"),
        }
    }

    #[test]
    fn flat_ring_has_two_vertices_per_spoke_and_six_indices_per_segment() {
        let mesh = flat_ring(1.75, 1.8, 64, 0.0, TAU);

        assert_eq!(mesh.count_vertices(), (64 + 1) * 2);

        let Some(Indices::U32(indices)) = mesh.indices() else {
            panic!("expected u32 indices");
        };
        assert_eq!(indices.len(), 64 * 6);
        assert!(indices.iter().all(|&i| (i as usize) < (64 + 1) * 2));
    }

    #[test]
    fn full_turn_closes_back_onto_the_starting_spoke() {
        let mesh = flat_ring(1.75, 1.8, 64, 0.0, TAU);
        let verts = positions(&mesh);

        let first_inner = Vec3::from_array(verts[0]);
        let first_outer = Vec3::from_array(verts[1]);
        let last_inner = Vec3::from_array(verts[verts.len() - 2]);
        let last_outer = Vec3::from_array(verts[verts.len() - 1]);

        assert!((first_inner - last_inner).length() < 1e-4);
        assert!((first_outer - last_outer).length() < 1e-4);
    }

    #[test]
    fn half_turn_band_spans_exactly_its_arc() {
        let mesh = flat_ring(6.7, 6.8, 64, -FRAC_PI_2, PI);
        let verts = positions(&mesh);

        // First spoke points straight down the local -Y, last straight up.
        let first_inner = Vec3::from_array(verts[0]);
        let last_inner = Vec3::from_array(verts[verts.len() - 2]);
        assert!((first_inner - Vec3::new(0.0, -6.7, 0.0)).length() < 1e-4);
        assert!((last_inner - Vec3::new(0.0, 6.7, 0.0)).length() < 1e-4);

        // Every sample stays on the +X side of the opening.
        for v in verts {
            assert!(v[0] >= -1e-4);
        }
    }

    #[test]
    fn ring_samples_stay_between_the_radii() {
        let mesh = flat_ring(6.7, 6.8, 64, -FRAC_PI_2, PI);

        for v in positions(&mesh) {
            let radius = Vec3::from_array(*v).length();
            assert!(radius > 6.7 - 1e-4);
            assert!(radius < 6.8 + 1e-4);
        }
    }

    #[test]
    fn flat_ring_normals_face_out_of_the_plane() {
        let mesh = flat_ring(1.0, 2.0, 8, 0.0, TAU);

        let Some(VertexAttributeValues::Float32x3(normals)) =
            mesh.attribute(Mesh::ATTRIBUTE_NORMAL)
        else {
            panic!("expected float32x3 normals");
        };
        assert!(normals.iter().all(|n| *n == [0.0, 0.0, 1.0]));
    }

    #[test]
    fn line_list_keeps_points_in_order() {
        let points = vec![
            Vec3::ZERO,
            Vec3::X,
            Vec3::new(0.5, 1.0, -2.0),
            Vec3::ONE,
        ];
        let mesh = line_list(points.clone());

        assert_eq!(mesh.count_vertices(), points.len());
        assert!(mesh.indices().is_none());

        let verts = positions(&mesh);
        for (vert, point) in verts.iter().zip(&points) {
            assert_eq!(Vec3::from_array(*vert), *point);
        }
    }
}
