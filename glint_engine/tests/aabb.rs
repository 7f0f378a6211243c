use approx::assert_relative_eq;
use rand::Rng;
use glint_engine::core::types::*;
use glint_engine::object::list::ObjectList;
use glint_engine::object::moving_sphere::MovingSphereObject;
use glint_engine::object::sphere::SphereObject;
use glint_engine::shared::aabb::{Aabb, Axis, HasAabb};
use glint_engine::shared::interval::Interval;
use glint_engine::shared::ray::Ray;
use glint_engine::shared::rng;

mod common;

#[test]
fn corners_are_sorted_on_construction() {
    let a = Aabb::new((1., -2., 3.), (-1., 2., -3.));
    let b = Aabb::new((-1., -2., -3.), (1., 2., 3.));
    assert_eq!(a, b);
    assert_eq!(a.min(), Point3::new(-1., -2., -3.));
    assert_eq!(a.max(), Point3::new(1., 2., 3.));
    assert_eq!(a.size(), Vector3::new(2., 4., 6.));
    assert_eq!(a.longest_axis(), Axis::Z);
}

#[test]
fn hit_ignores_corner_order() {
    let rng = &mut common::seeded(0x5A9);
    for _ in 0..200 {
        let (a, b) = (rng::vector_in_unit_cube(rng) * 5., rng::vector_in_unit_cube(rng) * 5.);
        // Swap a random subset of the axes between the two corners
        let mask = glam::BVec3::new(rng.gen(), rng.gen(), rng.gen());
        let (c, d) = (Point3::select(mask, b, a), Point3::select(mask, a, b));
        let (ab, cd) = (Aabb::new(a, b), Aabb::new(c, d));

        for _ in 0..20 {
            let ray = common::random_ray(rng);
            let interval = Interval::new(0., Number::INFINITY);
            assert_eq!(ab.hit(&ray, &interval), cd.hit(&ray, &interval));
        }
    }
}

#[test]
fn encompass_contains_both_and_commutes() {
    let rng = &mut common::seeded(0xAABB);
    for _ in 0..100 {
        let a = Aabb::new(rng::vector_in_unit_cube(rng) * 5., rng::vector_in_unit_cube(rng) * 5.);
        let b = Aabb::new(rng::vector_in_unit_cube(rng) * 5., rng::vector_in_unit_cube(rng) * 5.);
        let ab = Aabb::encompass(a, b);
        assert_eq!(ab, Aabb::encompass(b, a));
        assert!(ab.contains_aabb(&a), "{ab:?} should contain {a:?}");
        assert!(ab.contains_aabb(&b), "{ab:?} should contain {b:?}");
    }

    assert_eq!(Aabb::encompass_iter(Vec::<Aabb>::new()), None);
}

#[test]
fn hit_respects_interval() {
    let aabb = Aabb::new((-1., -1., -1.), (1., 1., 1.));
    let ray = Ray::new(Point3::new(0., 0., -5.), Vector3::Z);

    assert!(aabb.hit(&ray, &Interval::new(0., 10.)));
    assert!(aabb.hit(&ray, &Interval::new(0., 4.5)));
    assert!(!aabb.hit(&ray, &Interval::new(0., 3.)));
    assert!(!aabb.hit(&ray, &Interval::new(7., 10.)));
    // Pointing away
    assert!(!aabb.hit(&Ray::new(Point3::new(0., 0., -5.), Vector3::NEG_Z), &Interval::new(0., 100.)));
}

#[test]
fn hit_with_axis_parallel_rays() {
    let aabb = Aabb::new((-1., -1., -1.), (1., 1., 1.));
    let inside_slab = Ray::new(Point3::new(0.5, 0.5, -5.), Vector3::Z);
    let outside_slab = Ray::new(Point3::new(2., 0.5, -5.), Vector3::Z);

    assert!(aabb.hit(&inside_slab, &Interval::new(0., Number::INFINITY)));
    assert!(!aabb.hit(&outside_slab, &Interval::new(0., Number::INFINITY)));
}

#[test]
fn hit_with_rays_lying_in_a_face() {
    let aabb = Aabb::new((0., 0., 0.), (1., 1., 1.));
    let search = Interval::new(0.001, Number::INFINITY);

    // Exactly on the `min` and `max` faces, running along them
    assert!(aabb.hit(&Ray::new(Point3::new(0., 0.5, -5.), Vector3::Z), &search));
    assert!(aabb.hit(&Ray::new(Point3::new(1., 0.5, -5.), Vector3::Z), &search));
    assert!(aabb.hit(&Ray::new(Point3::new(0., 0., -5.), Vector3::Z), &search));
    assert!(aabb.hit(&Ray::new(Point3::new(0.5, 1., 5.), Vector3::NEG_Z), &search));
    // In the face plane, but beside the box
    assert!(!aabb.hit(&Ray::new(Point3::new(0., 1.5, -5.), Vector3::Z), &search));
}

#[test]
fn min_padded_only_grows_thin_sides() {
    let flat = Aabb::new((0., 0., 2.), (1., 1., 2.));
    let padded = flat.min_padded(0.1);
    assert_relative_eq!(padded.size(), Vector3::new(1., 1., 0.1), epsilon = 1e-9);
    assert_relative_eq!(padded.centre(), flat.centre(), epsilon = 1e-9);
    assert!(padded.contains_aabb(&flat));
}

#[test]
fn moving_sphere_box_covers_whole_window() {
    let sphere = MovingSphereObject::new((0., 0., 0.), (0., 4., 0.), 0. ..1., 1., common::grey());
    let aabb = sphere.aabb(&Interval::new(0., 1.)).expect("sphere is bounded");
    assert_relative_eq!(aabb.min(), Point3::new(-1., -1., -1.));
    assert_relative_eq!(aabb.max(), Point3::new(1., 5., 1.));
    assert_relative_eq!(sphere.centre(0.5), Point3::new(0., 2., 0.));
}

#[test]
fn list_box_is_union_or_none() {
    let time = Interval::new(0., 1.);
    assert_eq!(ObjectList::default().aabb(&time), None);

    let list: ObjectList = [
        SphereObject::new((0., 0., 0.), 1., common::grey()),
        SphereObject::new((5., 0., 0.), 2., common::grey()),
    ]
    .into_iter()
    .collect();
    let aabb = list.aabb(&time).expect("spheres are bounded");
    assert_relative_eq!(aabb.min(), Point3::new(-1., -2., -2.));
    assert_relative_eq!(aabb.max(), Point3::new(7., 2., 2.));
}
