use approx::assert_relative_eq;
use glint_engine::core::types::*;
use glint_engine::material::dielectric::DielectricMaterial;
use glint_engine::material::isotropic::IsotropicMaterial;
use glint_engine::material::lambertian::LambertianMaterial;
use glint_engine::material::light::LightMaterial;
use glint_engine::material::metal::MetalMaterial;
use glint_engine::material::{Material, MaterialInstance};
use glint_engine::shared::ray::Ray;
use glint_engine::shared::rng;

mod common;

const ALBEDO: Colour = Colour::new([0.2, 0.4, 0.6]);

#[test]
fn lambertian_always_scatters_outwards() {
    let material = MaterialInstance::from(LambertianMaterial::new(ALBEDO));
    let rng = &mut common::seeded(20);

    for _ in 0..1000 {
        let normal = rng::vector_on_unit_sphere(rng);
        let intersection = common::intersection_at_origin(&material, normal, true);
        let ray = Ray::new_at_time(-normal, normal, 0.25);

        let scatter = material.scatter(&ray, &intersection, rng).expect("lambertian never absorbs");
        assert_eq!(scatter.attenuation, ALBEDO);
        assert_eq!(scatter.ray.pos(), intersection.pos);
        assert_eq!(scatter.ray.time(), 0.25);
        assert!(scatter.ray.dir().dot(normal) >= -1e-9);
        assert!(scatter.ray.dir().length_squared() > 0.);
    }
}

#[test]
fn default_material_is_grey_lambertian() {
    let MaterialInstance::LambertianMaterial(lambertian) = MaterialInstance::default() else {
        panic!("default should be lambertian");
    };
    let colour = glint_engine::texture::Texture::value(&lambertian.albedo, Point2::ZERO, Point3::ZERO);
    assert_eq!(colour, Colour::HALF_GREY);
}

#[test]
fn metal_reflects_mirror_like() {
    let material = MaterialInstance::from(MetalMaterial::new(ALBEDO, 0.));
    let rng = &mut common::seeded(21);
    let intersection = common::intersection_at_origin(&material, Vector3::Y, true);
    let ray = Ray::new(Point3::new(-1., 1., 0.), Vector3::new(1., -1., 0.));

    let scatter = material.scatter(&ray, &intersection, rng).expect("mirror reflection is above surface");
    assert_eq!(scatter.attenuation, ALBEDO);
    assert_relative_eq!(scatter.ray.dir(), Vector3::new(1., 1., 0.).normalize(), epsilon = 1e-12);
}

#[test]
fn metal_absorbs_below_surface() {
    let material = MaterialInstance::from(MetalMaterial::new(ALBEDO, 0.));
    let rng = &mut common::seeded(22);
    // Normal on the same side as the ray is travelling, so the reflection goes into the surface
    let intersection = common::intersection_at_origin(&material, Vector3::NEG_Y, true);
    let ray = Ray::new(Point3::new(-1., 1., 0.), Vector3::new(1., -1., 0.));

    assert!(material.scatter(&ray, &intersection, rng).is_none());
}

#[test]
fn metal_fuzz_is_clamped() {
    assert_eq!(MetalMaterial::new(ALBEDO, 5.).fuzz(), 1.);
    assert_eq!(MetalMaterial::new(ALBEDO, -1.).fuzz(), 0.);
    assert_eq!(MetalMaterial::new(ALBEDO, 0.3).fuzz(), 0.3);
}

#[test]
fn dielectric_reflects_or_refracts_straight_through() {
    let material = MaterialInstance::from(DielectricMaterial::new(1.5));
    let rng = &mut common::seeded(23);
    let intersection = common::intersection_at_origin(&material, Vector3::NEG_Z, true);
    let ray = Ray::new(Point3::new(0., 0., -1.), Vector3::Z);

    let (mut reflected, mut refracted) = (0, 0);
    for _ in 0..1000 {
        let scatter = material.scatter(&ray, &intersection, rng).expect("dielectrics never absorb");
        assert_eq!(scatter.attenuation, Colour::WHITE);
        let dir = scatter.ray.dir();
        if dir.z < 0. {
            assert_relative_eq!(dir, Vector3::NEG_Z, epsilon = 1e-9);
            reflected += 1;
        } else {
            assert_relative_eq!(dir, Vector3::Z, epsilon = 1e-9);
            refracted += 1;
        }
    }
    // Head-on reflectance of glass is about 4%
    assert!(refracted > reflected * 5, "{reflected} reflected, {refracted} refracted");
}

#[test]
fn dielectric_total_internal_reflection() {
    let material = MaterialInstance::from(DielectricMaterial::new(1.5));
    let rng = &mut common::seeded(24);
    // Leaving the glass at a grazing angle
    let intersection = common::intersection_at_origin(&material, Vector3::NEG_Y, false);
    let ray = Ray::new(Point3::new(-1., -0.2, 0.), Vector3::new(1., 0.2, 0.));

    for _ in 0..100 {
        let scatter = material.scatter(&ray, &intersection, rng).expect("dielectrics never absorb");
        assert!(scatter.ray.dir().y < 0., "ray should stay inside the glass");
    }
}

#[test]
fn light_emits_and_never_scatters() {
    let material = MaterialInstance::from(LightMaterial::new(Colour::splat(4.)));
    let rng = &mut common::seeded(25);
    let intersection = common::intersection_at_origin(&material, Vector3::Y, true);
    let ray = Ray::new(Point3::Y, Vector3::NEG_Y);

    assert!(material.scatter(&ray, &intersection, rng).is_none());
    assert_eq!(material.emitted_light(&intersection), Colour::splat(4.));

    let other = MaterialInstance::from(LambertianMaterial::new(ALBEDO));
    assert_eq!(other.emitted_light(&intersection), Colour::BLACK);
}

#[test]
fn isotropic_scatters_anywhere() {
    let material = MaterialInstance::from(IsotropicMaterial::new(ALBEDO));
    let rng = &mut common::seeded(26);
    let intersection = common::intersection_at_origin(&material, Vector3::X, true);
    let ray = Ray::new(Point3::NEG_X, Vector3::X);

    let (mut forward, mut backward) = (0, 0);
    for _ in 0..1000 {
        let scatter = material.scatter(&ray, &intersection, rng).expect("isotropic never absorbs");
        assert_eq!(scatter.attenuation, ALBEDO);
        assert!(scatter.ray.dir().length() <= 1.);
        if scatter.ray.dir().x > 0. {
            forward += 1;
        } else {
            backward += 1;
        }
    }
    assert!(forward > 300 && backward > 300, "{forward} forward, {backward} backward");
}
