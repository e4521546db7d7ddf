// Host-side tests for ray picking and camera ray construction.

use glam::{Vec2, Vec3};
use roomviz_core::{
    pick_floor, pick_object, ray_aabb, Camera, Dimensions, FurnitureKind, ObjectId,
    PlaceableObject, Ray,
};

fn unit_box(id: u32) -> PlaceableObject {
    PlaceableObject::new(
        ObjectId(id),
        FurnitureKind::Box,
        Dimensions::new(1.0, 1.0, 1.0),
        [0.5, 0.5, 0.5],
    )
}

#[test]
fn ray_aabb_hits_front_face() {
    let ray = Ray::new(Vec3::new(0.0, 0.5, 5.0), Vec3::NEG_Z);
    let t = ray_aabb(&ray, Vec3::splat(-0.5), Vec3::splat(0.5)).unwrap();
    assert!((t - 4.5).abs() < 1e-5);
}

#[test]
fn ray_aabb_misses_beside_and_behind() {
    let beside = Ray::new(Vec3::new(2.0, 0.0, 5.0), Vec3::NEG_Z);
    assert!(ray_aabb(&beside, Vec3::splat(-0.5), Vec3::splat(0.5)).is_none());
    let away = Ray::new(Vec3::new(0.0, 0.0, 5.0), Vec3::Z);
    assert!(ray_aabb(&away, Vec3::splat(-0.5), Vec3::splat(0.5)).is_none());
}

#[test]
fn ray_aabb_from_inside_returns_exit() {
    let ray = Ray::new(Vec3::ZERO, Vec3::X);
    let t = ray_aabb(&ray, Vec3::splat(-0.5), Vec3::splat(0.5)).unwrap();
    assert!((t - 0.5).abs() < 1e-5);
}

#[test]
fn nearest_object_wins() {
    let small = unit_box(1);
    // deeper box reaches closer to a ray coming down +z
    let deep = PlaceableObject::new(
        ObjectId(2),
        FurnitureKind::Box,
        Dimensions::new(1.0, 1.0, 3.0),
        [0.5, 0.5, 0.5],
    );
    let ray = Ray::new(Vec3::new(0.0, 0.5, 10.0), Vec3::NEG_Z);
    let hit = pick_object(&ray, &[small.clone(), deep.clone()]).unwrap();
    assert_eq!(hit.id, ObjectId(2));
    assert!((hit.distance - 8.5).abs() < 1e-5);
    let hit = pick_object(&ray, &[deep, small]).unwrap();
    assert_eq!(hit.id, ObjectId(2));
}

#[test]
fn equal_distance_keeps_the_earlier_object() {
    let ray = Ray::new(Vec3::new(0.0, 0.5, 10.0), Vec3::NEG_Z);
    let hit = pick_object(&ray, &[unit_box(4), unit_box(9)]).unwrap();
    assert_eq!(hit.id, ObjectId(4));
    assert!((hit.point.z - 0.5).abs() < 1e-5);
}

#[test]
fn pick_object_reports_distance_and_point() {
    let objects = [unit_box(7)];
    let ray = Ray::new(Vec3::new(0.2, 10.0, -0.1), Vec3::NEG_Y);
    let hit = pick_object(&ray, &objects).unwrap();
    assert_eq!(hit.id, ObjectId(7));
    assert!((hit.distance - 9.0).abs() < 1e-5);
    assert!((hit.point - Vec3::new(0.2, 1.0, -0.1)).length() < 1e-5);
}

#[test]
fn pick_object_on_empty_scene_is_none() {
    let ray = Ray::new(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y);
    assert!(pick_object(&ray, &Vec::<PlaceableObject>::new()).is_none());
}

#[test]
fn floor_hit_projects_to_y_zero() {
    let ray = Ray::new(Vec3::new(1.0, 4.0, -2.0), Vec3::new(1.0, -2.0, 0.0));
    let p = pick_floor(&ray).unwrap();
    assert_eq!(p.y, 0.0);
    assert!((p.x - 3.0).abs() < 1e-5);
    assert!((p.z + 2.0).abs() < 1e-5);
}

#[test]
fn floor_parallel_or_behind_is_none() {
    let level = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::X);
    assert!(pick_floor(&level).is_none());
    let up = Ray::new(Vec3::new(0.0, 1.0, 0.0), Vec3::Y);
    assert!(pick_floor(&up).is_none());
}

#[test]
fn ray_direction_is_normalized() {
    let ray = Ray::new(Vec3::ZERO, Vec3::new(3.0, 0.0, 4.0));
    assert!((ray.dir.length() - 1.0).abs() < 1e-6);
    assert_eq!(ray.at(5.0), Vec3::new(3.0, 0.0, 4.0));
}

fn test_camera() -> Camera {
    Camera {
        eye: Vec3::new(0.0, 0.0, 5.0),
        target: Vec3::ZERO,
        up: Vec3::Y,
        aspect: 1.0,
        fovy_radians: std::f32::consts::FRAC_PI_2,
        znear: 0.1,
        zfar: 100.0,
    }
}

#[test]
fn center_ray_points_at_target() {
    let cam = test_camera();
    let ray = cam.ray_through_ndc(Vec2::ZERO);
    assert_eq!(ray.origin, cam.eye);
    assert!((ray.dir - Vec3::NEG_Z).length() < 1e-4, "{:?}", ray.dir);
    assert!((cam.forward() - Vec3::NEG_Z).length() < 1e-6);
}

#[test]
fn corner_rays_follow_the_frustum() {
    // 90 degree fov: the right edge of the screen is 45 degrees off axis
    let cam = test_camera();
    let right = cam.ray_through_ndc(Vec2::new(1.0, 0.0));
    assert!(right.dir.x > 0.0);
    assert!((right.dir.x + right.dir.z).abs() < 1e-3, "{:?}", right.dir);
    let up = cam.ray_through_ndc(Vec2::new(0.0, 1.0));
    assert!(up.dir.y > 0.0);
    assert!((up.dir.y + up.dir.z).abs() < 1e-3, "{:?}", up.dir);
}

#[test]
fn camera_ray_picks_object_in_view() {
    let cam = test_camera();
    let objects = [unit_box(3)];
    // box spans y 0..1; aim slightly above the screen center
    let ray = cam.ray_through_ndc(Vec2::new(0.0, 0.1));
    let hit = pick_object(&ray, &objects).unwrap();
    assert_eq!(hit.id, ObjectId(3));
}

#[test]
fn projection_inverts_the_camera_ray() {
    let cam = test_camera();
    let ndc = cam.project_to_ndc(Vec3::ZERO).unwrap();
    assert!(ndc.length() < 1e-5);
    // 90 degree fov: a point at 45 degrees lands on the right edge
    let edge = cam.project_to_ndc(Vec3::new(2.0, 0.0, 3.0)).unwrap();
    assert!((edge.x - 1.0).abs() < 1e-4 && edge.y.abs() < 1e-5, "{:?}", edge);

    let ray = cam.ray_through_ndc(Vec2::new(0.3, -0.4));
    let p = cam.project_to_ndc(ray.at(7.0)).unwrap();
    assert!((p - Vec2::new(0.3, -0.4)).length() < 1e-3, "{:?}", p);
}

#[test]
fn points_behind_the_eye_do_not_project() {
    let cam = test_camera();
    assert!(cam.project_to_ndc(Vec3::new(0.0, 0.0, 9.0)).is_none());
    assert!(cam.project_to_ndc(Vec3::new(0.0, 0.0, 5.0)).is_none());
}
