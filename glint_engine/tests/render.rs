use approx::assert_relative_eq;
use glint_engine::core::types::*;
use glint_engine::material::lambertian::LambertianMaterial;
use glint_engine::material::light::LightMaterial;
use glint_engine::material::MaterialInstance;
use glint_engine::object::axis_rect::{AxisRectObject, RectPlane};
use glint_engine::object::list::ObjectList;
use glint_engine::object::sphere::SphereObject;
use glint_engine::render::integrator::{Integrator, MAX_DEPTH_LIMIT};
use glint_engine::render::render_opts::{IntegratorOpts, RenderOpts};
use glint_engine::render::renderer::{RenderError, Renderer};
use glint_engine::render::sink::PixelSink;
use glint_engine::scene::camera::{CamInvalidError, Camera};
use glint_engine::scene::Scene;
use glint_engine::shared::ray::Ray;
use glint_engine::shared::rng;
use glint_engine::skybox::dynamic::DynamicSkybox;
use glint_engine::skybox::none::NoSkybox;
use glint_engine::skybox::simple::WhiteSkybox;
use nonzero::nonzero;

mod common;

const TINY_RENDER_OPTIONS: RenderOpts = RenderOpts {
    width: nonzero!(8_usize),
    height: nonzero!(6_usize),
    samples: nonzero!(4_usize),
    integrator: IntegratorOpts {
        max_depth: 5,
        min_dist: 0.001,
    },
};

const ALBEDO: Colour = Colour::new([0.3, 0.6, 0.9]);

fn sphere_scene(material: MaterialInstance) -> Scene {
    Scene {
        objects: SphereObject::new(Point3::ZERO, 1., material).into(),
        skybox: WhiteSkybox.into(),
    }
}

/// Collects every pixel written, so tests can check what the renderer produced
#[derive(Default)]
struct RecordingSink(Vec<(usize, usize, Colour)>);

impl PixelSink for RecordingSink {
    fn put_colour(&mut self, x: usize, y: usize, colour: Colour) { self.0.push((x, y, colour)) }
}

#[test]
fn zero_depth_is_black() {
    let scene = sphere_scene(LambertianMaterial::new(ALBEDO).into());
    let integrator = Integrator::default();
    let rng = &mut common::seeded(40);
    for _ in 0..100 {
        let ray = common::random_ray(rng);
        assert_eq!(integrator.radiance(&scene, &ray, 0, rng), Colour::BLACK);
    }
}

#[test]
fn miss_returns_sky() {
    let scene = sphere_scene(LambertianMaterial::new(ALBEDO).into());
    let integrator = Integrator::default();
    let ray = Ray::new(Point3::new(0., 5., 0.), Vector3::Y);
    assert_eq!(
        integrator.radiance(&scene, &ray, 1, &mut common::seeded(41)),
        Colour::WHITE
    );
}

#[test]
fn convex_diffuse_bounces_once_into_sky() {
    let scene = sphere_scene(LambertianMaterial::new(ALBEDO).into());
    let integrator = Integrator::default();
    let rng = &mut common::seeded(42);
    let ray = Ray::new(Point3::new(0., 0., -5.), Vector3::Z);

    // Out of depth after the first bounce
    assert_eq!(integrator.radiance(&scene, &ray, 1, rng), Colour::BLACK);
    // Scattered rays always leave a convex object, and see the white sky
    for _ in 0..100 {
        assert_eq!(integrator.radiance(&scene, &ray, 2, rng), ALBEDO);
        assert_eq!(integrator.sample(&scene, &ray, rng), ALBEDO);
    }
}

#[test]
fn lights_only_emit() {
    let scene = sphere_scene(LightMaterial::new(Colour::splat(3.)).into());
    let integrator = Integrator::default();
    let ray = Ray::new(Point3::new(0., 0., -5.), Vector3::Z);
    assert_eq!(
        integrator.radiance(&scene, &ray, 1, &mut common::seeded(43)),
        Colour::splat(3.)
    );
}

#[test]
fn zero_width_rect_renders() {
    let material = MaterialInstance::from(LambertianMaterial::new(ALBEDO));
    let line = AxisRectObject::new(RectPlane::XY, 0. ..=0., -1. ..=1., 0., material);
    let scene = Scene {
        objects: line.into(),
        skybox: WhiteSkybox.into(),
    };
    let integrator = Integrator::default();
    let rng = &mut common::seeded(44);
    let ray = Ray::new(Point3::new(0., 0.5, -5.), Vector3::Z);
    for _ in 0..20 {
        let colour = integrator.sample(&scene, &ray, rng);
        assert!(colour.is_finite());
        assert!(colour.into_iter().all(|c| c >= 0.));
    }
}

#[test]
fn excessive_depth_is_clamped() {
    common::init_logging();
    let integrator = Integrator::new(IntegratorOpts {
        max_depth: 100_000,
        ..IntegratorOpts::default()
    });
    assert_eq!(integrator.opts().max_depth, MAX_DEPTH_LIMIT);
    assert_eq!(Integrator::default().opts().max_depth, 50);
}

#[test]
fn renders_every_pixel_once() {
    let scene = Scene {
        objects: ObjectList::default().into(),
        skybox: WhiteSkybox.into(),
    };
    let mut sink = RecordingSink::default();
    let stats = Renderer::new(TINY_RENDER_OPTIONS)
        .render(&scene, &Camera::default(), &mut sink, &mut common::seeded(44))
        .expect("camera is valid");

    assert_eq!(stats.num_px, 8 * 6);
    assert_eq!(stats.num_samples, 8 * 6 * 4);
    assert_eq!(sink.0.len(), 8 * 6);
    let mut coords = sink.0.iter().map(|&(x, y, _)| (x, y)).collect::<Vec<_>>();
    coords.sort();
    coords.dedup();
    assert_eq!(coords.len(), 8 * 6);
    assert!(sink.0.iter().all(|&(_, _, c)| c == Colour::WHITE));
}

#[test]
fn renders_into_image_buffer() {
    // Camera sits inside a glowing sphere, so every sample sees the same light
    let scene = Scene {
        objects: SphereObject::new(Point3::ZERO, 100., MaterialInstance::from(LightMaterial::new(Colour::splat(2.))))
            .into(),
        skybox: NoSkybox.into(),
    };
    let mut img = image::Rgb32FImage::new(8, 6);
    Renderer::new(TINY_RENDER_OPTIONS)
        .render(&scene, &Camera::default(), &mut img, &mut common::seeded(45))
        .expect("camera is valid");

    assert!(img.pixels().all(|px| px.0 == [2.; 3]));
}

#[test]
fn first_row_is_top_of_image() {
    let scene = Scene {
        objects: ObjectList::default().into(),
        skybox: DynamicSkybox::new(|dir| if dir.y > 0. { Colour::WHITE } else { Colour::BLACK }).into(),
    };
    let camera = Camera {
        v_fov: 90.,
        ..Camera::default()
    };
    let mut img = image::Rgb32FImage::new(8, 6);
    Renderer::new(TINY_RENDER_OPTIONS)
        .render(&scene, &camera, &mut img, &mut common::seeded(46))
        .expect("camera is valid");

    for x in 0..8 {
        assert_eq!(img.get_pixel(x, 0).0, [1.; 3]);
        assert_eq!(img.get_pixel(x, 5).0, [0.; 3]);
    }
}

#[test]
fn invalid_camera_is_an_error() {
    common::init_logging();
    let scene = sphere_scene(LambertianMaterial::new(ALBEDO).into());
    let camera = Camera {
        v_fov: 0.,
        ..Camera::default()
    };
    let mut sink = RecordingSink::default();
    let err = Renderer::new(TINY_RENDER_OPTIONS)
        .render(&scene, &camera, &mut sink, &mut common::seeded(47))
        .expect_err("zero fov can't make a viewport");

    assert_eq!(err, RenderError::CameraInvalid { source: CamInvalidError::FovInvalid });
    assert!(sink.0.is_empty());
}

#[test]
fn diffuse_sphere_averages_to_albedo() {
    let scene = sphere_scene(LambertianMaterial::new(ALBEDO).into());
    let camera = Camera::look_at((0., 0., -5.), Point3::ZERO, 10.);
    let opts = RenderOpts {
        width: nonzero!(3_usize),
        height: nonzero!(3_usize),
        ..TINY_RENDER_OPTIONS
    };
    let mut img = image::Rgb32FImage::new(3, 3);
    Renderer::new(opts)
        .render(&scene, &camera, &mut img, &mut common::seeded(48))
        .expect("camera is valid");

    // The sphere fills the whole view
    for px in img.pixels() {
        let colour = Colour::new(px.0);
        assert!(common::colours_eq(colour, ALBEDO, 1e-6), "{colour:?} should be the albedo");
    }
}

#[test]
fn viewport_centre_looks_forwards() {
    let camera = Camera::look_at((1., 2., 3.), (1., 2., -7.), 40.);
    let viewport = camera.calculate_viewport(2.).expect("camera is valid");
    let rng = &mut common::seeded(49);

    let ray = viewport.calc_ray(0.5, 0.5, rng);
    assert_relative_eq!(ray.pos(), Point3::new(1., 2., 3.));
    assert_relative_eq!(ray.dir().normalize(), Vector3::NEG_Z, epsilon = 1e-9);
    assert_relative_eq!(camera.focus_dist, 10.);
}

#[test]
fn camera_rays_sample_the_shutter() {
    let camera = Camera {
        shutter: (2. ..3.).into(),
        defocus_angle: 5.,
        focus_dist: 4.,
        ..Camera::default()
    };
    let viewport = camera.calculate_viewport(1.).expect("camera is valid");
    let rng = &mut common::seeded(50);

    for _ in 0..100 {
        let (s, t) = (rng::vector_in_unit_cube(rng).x.abs(), rng::vector_in_unit_cube(rng).y.abs());
        let ray = viewport.calc_ray(s, t, rng);
        assert!((2.0..=3.0).contains(&ray.time()));
        // Defocus only moves the origin within the lens disk
        assert!(ray.pos().z.abs() < 1e-9);
        assert!(ray.pos().length() <= 4. * (2.5 as Number).to_radians().tan() + 1e-9);
    }
}

#[test]
fn invalid_cameras_are_rejected() {
    let bad = [
        (
            Camera {
                fwd: Vector3::ZERO,
                ..Camera::default()
            },
            CamInvalidError::ForwardVectorInvalid,
        ),
        (
            Camera {
                fwd: Vector3::Y,
                ..Camera::default()
            },
            CamInvalidError::ForwardVectorInvalid,
        ),
        (
            Camera {
                v_fov: 180.,
                ..Camera::default()
            },
            CamInvalidError::FovInvalid,
        ),
        (
            Camera {
                focus_dist: 0.,
                ..Camera::default()
            },
            CamInvalidError::FocalLengthInvalid,
        ),
    ];
    for (camera, expected) in bad {
        assert_eq!(camera.calculate_viewport(1.), Err(expected));
    }
    assert_eq!(
        Camera::default().calculate_viewport(-1.),
        Err(CamInvalidError::AspectRatioInvalid)
    );
}
