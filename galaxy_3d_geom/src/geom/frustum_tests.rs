use glam::{Mat4, Quat, Vec3};
use crate::geom::{AlignedBox, Sphere};
use super::*;

const TOLERANCE: f32 = 1e-4;

fn assert_vec3_near(a: Vec3, b: Vec3) {
    assert!(a.abs_diff_eq(b, TOLERANCE), "expected {} ≈ {}", a, b);
}

/// 90° vertical FOV, aspect 1, near 1, far 100
fn create_test_frustum() -> Frustum {
    Frustum::perspective(1.0, (std::f32::consts::FRAC_PI_2 * 0.5).tan(), 1.0, 100.0)
}

// ============================================================================
// Construction
// ============================================================================

#[test]
fn test_perspective_vertices() {
    let frustum = create_test_frustum();

    assert_vec3_near(frustum.vertices[VERTEX_NEAR_TOP_LEFT], Vec3::new(-1.0, 1.0, -1.0));
    assert_vec3_near(frustum.vertices[VERTEX_NEAR_TOP_RIGHT], Vec3::new(1.0, 1.0, -1.0));
    assert_vec3_near(frustum.vertices[VERTEX_NEAR_BOTTOM_RIGHT], Vec3::new(1.0, -1.0, -1.0));
    assert_vec3_near(frustum.vertices[VERTEX_NEAR_BOTTOM_LEFT], Vec3::new(-1.0, -1.0, -1.0));
    assert_vec3_near(frustum.vertices[VERTEX_FAR_TOP_LEFT], Vec3::new(-100.0, 100.0, -100.0));
    assert_vec3_near(frustum.vertices[VERTEX_FAR_BOTTOM_RIGHT], Vec3::new(100.0, -100.0, -100.0));
}

#[test]
fn test_planes_are_normalized_and_point_inward() {
    let frustum = create_test_frustum();
    let center = Vec3::new(0.0, 0.0, -50.0);

    for plane in &frustum.planes {
        assert!((plane.normal.length() - 1.0).abs() < 1e-5, "plane normal should be unit length");
        assert!(plane.signed_distance(center) > 0.0, "frustum center should be on the inner side");
    }

    assert_vec3_near(frustum.planes[PLANE_NEAR].normal, Vec3::NEG_Z);
    assert_vec3_near(frustum.planes[PLANE_FAR].normal, Vec3::Z);
    assert!(frustum.planes[PLANE_TOP].normal.y < 0.0);
    assert!(frustum.planes[PLANE_BOTTOM].normal.y > 0.0);
    assert!(frustum.planes[PLANE_RIGHT].normal.x < 0.0);
    assert!(frustum.planes[PLANE_LEFT].normal.x > 0.0);
}

#[test]
fn test_vertices_lie_on_their_planes() {
    let frustum = Frustum::new(0.3, 0.5, 0.7, 0.2, 0.5, 40.0, false);

    let on_plane = [
        (PLANE_NEAR, [0, 1, 2, 3]),
        (PLANE_FAR, [4, 5, 6, 7]),
        (PLANE_TOP, [0, 1, 4, 5]),
        (PLANE_RIGHT, [1, 2, 5, 6]),
        (PLANE_BOTTOM, [2, 3, 6, 7]),
        (PLANE_LEFT, [0, 3, 4, 7]),
    ];
    for (plane, vertices) in on_plane {
        for v in vertices {
            let d = frustum.planes[plane].signed_distance(frustum.vertices[v]);
            assert!(d.abs() < 1e-3, "vertex {} off plane {}: {}", v, plane, d);
        }
    }
}

#[test]
fn test_orthographic_vertices() {
    let frustum = Frustum::new(2.0, 2.0, 3.0, 3.0, 0.5, 10.0, true);

    assert_vec3_near(frustum.vertices[VERTEX_NEAR_TOP_LEFT], Vec3::new(-3.0, 2.0, -0.5));
    assert_vec3_near(frustum.vertices[VERTEX_FAR_TOP_LEFT], Vec3::new(-3.0, 2.0, -10.0));
    assert_vec3_near(frustum.planes[PLANE_TOP].normal, Vec3::NEG_Y);
    assert_vec3_near(frustum.planes[PLANE_LEFT].normal, Vec3::X);
}

#[test]
fn test_from_inverse_projection_matches_gl_perspective() {
    let proj = Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_2, 1.0, 1.0, 100.0);
    let frustum = Frustum::from_inverse_projection(&proj.inverse());
    let expected = create_test_frustum();

    for (a, b) in frustum.vertices.iter().zip(expected.vertices.iter()) {
        assert!(a.abs_diff_eq(*b, 1e-2), "expected {} ≈ {}", a, b);
    }
}

#[test]
fn test_stereo_union_of_identical_frusta_is_idempotent() {
    let eye = Frustum::new(1.0, 1.2, 0.9, 1.1, 0.1, 50.0, false);
    let combined = Frustum::from_stereo(&eye, &eye);

    for (a, b) in combined.vertices.iter().zip(eye.vertices.iter()) {
        assert_vec3_near(*a, *b);
    }
    for (a, b) in combined.planes.iter().zip(eye.planes.iter()) {
        assert_vec3_near(a.normal, b.normal);
        assert!((a.offset - b.offset).abs() < TOLERANCE);
    }
}

#[test]
fn test_stereo_union_encloses_both_eyes() {
    let left = Frustum::new(1.0, 1.0, 1.2, 0.8, 0.1, 50.0, false)
        .transformed(&Mat4::from_translation(Vec3::new(-0.03, 0.0, 0.0)));
    let right = Frustum::new(1.0, 1.0, 0.8, 1.2, 0.1, 50.0, false)
        .transformed(&Mat4::from_translation(Vec3::new(0.03, 0.0, 0.0)));
    let combined = Frustum::from_stereo(&left, &right);

    // Near the outer far corners: each seen by one eye only
    let far_left = Sphere::new(Vec3::new(-55.0, -45.0, -49.0), 0.0);
    let far_right = Sphere::new(Vec3::new(55.0, 45.0, -49.0), 0.0);

    assert!(left.inside(&far_left) && !right.inside(&far_left));
    assert!(right.inside(&far_right) && !left.inside(&far_right));
    assert!(combined.inside(&far_left));
    assert!(combined.inside(&far_right));
}

#[test]
fn test_clip_offsets_move_only_near_and_far() {
    let base = create_test_frustum();
    let adjusted = Frustum::with_clip_offsets(&base, 1.0, -50.0);

    // Near face now at z = -2, far face at z = -50
    assert!((adjusted.vertices[VERTEX_NEAR_TOP_LEFT].z + 2.0).abs() < TOLERANCE);
    assert!((adjusted.vertices[VERTEX_FAR_TOP_LEFT].z + 50.0).abs() < TOLERANCE);
    assert_vec3_near(adjusted.vertices[VERTEX_NEAR_TOP_RIGHT], Vec3::new(2.0, 2.0, -2.0));

    for plane in [PLANE_TOP, PLANE_RIGHT, PLANE_BOTTOM, PLANE_LEFT] {
        assert_vec3_near(adjusted.planes[plane].normal, base.planes[plane].normal);
        assert!((adjusted.planes[plane].offset - base.planes[plane].offset).abs() < TOLERANCE);
    }
}

// ============================================================================
// Containment
// ============================================================================

#[test]
fn test_sphere_inside_and_outside() {
    let frustum = create_test_frustum();
    let sphere = Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0);
    assert!(frustum.inside(&sphere));

    let moved = sphere.transformed(&Mat4::from_translation(Vec3::new(50.0, 0.0, 0.0)));
    assert!(!frustum.inside(&moved));
}

#[test]
fn test_sphere_straddling_plane_is_inside() {
    let frustum = create_test_frustum();
    // Center beyond the far plane by less than the radius
    let sphere = Sphere::new(Vec3::new(0.0, 0.0, -101.0), 2.0);
    assert!(frustum.inside(&sphere));
}

#[test]
fn test_inside_ignore_near() {
    let frustum = create_test_frustum();
    // Between the camera and the near plane
    let sphere = Sphere::new(Vec3::new(0.0, 0.0, -0.2), 0.1);

    assert!(!frustum.inside(&sphere));
    assert!(frustum.inside_ignore_near(&sphere));

    let near_box = AlignedBox::new(Vec3::new(-0.05, -0.05, -0.3), Vec3::new(0.05, 0.05, -0.2));
    assert!(!frustum.inside(&near_box));
    assert!(frustum.inside_ignore_near(&near_box));
}

#[test]
fn test_box_inside_outside_and_behind() {
    let frustum = create_test_frustum();

    let inside = AlignedBox::new(Vec3::new(-1.0, -1.0, -11.0), Vec3::new(1.0, 1.0, -9.0));
    assert!(frustum.inside(&inside));

    let right = AlignedBox::new(Vec3::new(100.0, -1.0, -11.0), Vec3::new(101.0, 1.0, -9.0));
    assert!(!frustum.inside(&right));

    let behind = AlignedBox::new(Vec3::new(-1.0, -1.0, 5.0), Vec3::new(1.0, 1.0, 7.0));
    assert!(!frustum.inside(&behind));

    let straddling = AlignedBox::new(Vec3::new(5.0, -1.0, -11.0), Vec3::new(15.0, 1.0, -9.0));
    assert!(frustum.inside(&straddling));
}

#[test]
fn test_box_test_is_conservative_near_edges() {
    let frustum = create_test_frustum();

    // Beyond the far-right edge: passes every single plane, yet the
    // right plane rejects every point with z >= -100. Kept as visible.
    let corner = AlignedBox::new(Vec3::new(101.0, -1.0, -120.0), Vec3::new(110.0, 1.0, -99.0));
    assert!(frustum.inside(&corner));

    let closest_candidate = Vec3::new(101.0, 0.0, -100.0);
    assert!(frustum.planes[PLANE_RIGHT].signed_distance(closest_candidate) < 0.0);
}

#[test]
fn test_classify() {
    let frustum = create_test_frustum();

    let inside = AlignedBox::new(Vec3::new(-1.0, -1.0, -11.0), Vec3::new(1.0, 1.0, -9.0));
    assert_eq!(frustum.classify(&inside), FrustumTest::Inside);

    let partial = AlignedBox::new(Vec3::new(5.0, -1.0, -11.0), Vec3::new(15.0, 1.0, -9.0));
    assert_eq!(frustum.classify(&partial), FrustumTest::Partial);

    let outside = AlignedBox::new(Vec3::new(100.0, -1.0, -11.0), Vec3::new(101.0, 1.0, -9.0));
    assert_eq!(frustum.classify(&outside), FrustumTest::Outside);
    assert_eq!(frustum.inside(&outside), frustum.classify(&outside) != FrustumTest::Outside);
}

// ============================================================================
// Transform
// ============================================================================

#[test]
fn test_transform_keeps_planes_and_vertices_consistent() {
    let world = Mat4::from_rotation_translation(
        Quat::from_rotation_y(std::f32::consts::FRAC_PI_2),
        Vec3::new(5.0, 2.0, -3.0),
    );
    let local = create_test_frustum();
    let frustum = local.transformed(&world);

    // Local -Z maps to world -X after a +90° Y rotation
    let ahead = world.transform_point3(Vec3::new(0.0, 0.0, -10.0));
    assert_vec3_near(ahead, Vec3::new(-5.0, 2.0, -3.0));
    assert!(frustum.inside(&Sphere::new(ahead, 1.0)));
    assert!(!frustum.inside(&Sphere::new(Vec3::new(15.0, 2.0, -3.0), 1.0)));

    for (plane, [a, _, _]) in frustum.planes.iter().zip(PLANE_VERTICES) {
        assert!(plane.signed_distance(frustum.vertices[a]).abs() < 1e-3);
    }
}

#[test]
fn test_mirroring_transform_keeps_normals_inward() {
    let mirror = Mat4::from_scale(Vec3::new(-1.0, 1.0, 1.0));
    let frustum = create_test_frustum().transformed(&mirror);

    assert_vec3_near(frustum.planes[PLANE_NEAR].normal, Vec3::NEG_Z);
    assert_vec3_near(frustum.planes[PLANE_FAR].normal, Vec3::Z);

    let center = frustum.vertices.iter().sum::<Vec3>() / VERTEX_COUNT as f32;
    for plane in &frustum.planes {
        assert!(plane.signed_distance(center) > 0.0);
    }

    assert!(frustum.inside(&Sphere::new(Vec3::new(0.0, 0.0, -10.0), 1.0)));
    assert!(frustum.inside(&Sphere::new(Vec3::new(-8.0, 0.0, -10.0), 1.0)));
    assert!(!frustum.inside(&Sphere::new(Vec3::new(0.0, 0.0, 10.0), 1.0)));
    assert!(!frustum.inside(&Sphere::new(Vec3::new(-50.0, 0.0, -10.0), 1.0)));
}

#[test]
fn test_aligned_box_from_frustum_bounds_vertices() {
    let frustum = create_test_frustum();
    let aabb = AlignedBox::from_frustum(&frustum);

    assert_vec3_near(aabb.min, Vec3::new(-100.0, -100.0, -100.0));
    assert_vec3_near(aabb.max, Vec3::new(100.0, 100.0, -1.0));
}

#[test]
fn test_index_constants() {
    assert_eq!(PLANE_NEAR, 0);
    assert_eq!(PLANE_FAR, 1);
    assert_eq!(PLANE_TOP, 2);
    assert_eq!(PLANE_RIGHT, 3);
    assert_eq!(PLANE_BOTTOM, 4);
    assert_eq!(PLANE_LEFT, 5);
    assert_eq!(VERTEX_NEAR_TOP_LEFT, 0);
    assert_eq!(VERTEX_FAR_BOTTOM_LEFT, 7);
}
