use glint_engine::core::types::*;
use glint_engine::object::Object;
use glint_engine::render::render_opts::{IntegratorOpts, RenderOpts};
use glint_engine::render::renderer::Renderer;
use glint_engine::scene::preset::{self, Preset};
use glint_engine::shared::aabb::HasAabb;
use glint_engine::shared::interval::Interval;
use nonzero::nonzero;

mod common;

const PREVIEW_OPTIONS: RenderOpts = RenderOpts {
    width: nonzero!(6_usize),
    height: nonzero!(4_usize),
    samples: nonzero!(2_usize),
    integrator: IntegratorOpts {
        max_depth: 8,
        min_dist: 0.001,
    },
};

/// Renders a tiny preview of the preset, and checks nothing came out broken
fn assert_renders(name: &str, preset: Preset) {
    let mut img = image::Rgb32FImage::new(6, 4);
    Renderer::new(PREVIEW_OPTIONS)
        .render(&preset.scene, &preset.camera, &mut img, &mut common::seeded(60))
        .unwrap_or_else(|err| panic!("{name} failed to render: {err}"));

    for px in img.pixels() {
        let colour = Colour::new(px.0);
        assert!(colour.is_finite(), "{name} rendered {colour:?}");
        assert!(colour.into_iter().all(|c| c >= 0.), "{name} rendered {colour:?}");
    }
}

#[test]
fn all_presets_render() {
    common::init_logging();
    let rng = &mut common::seeded(61);
    assert_renders("random_spheres", preset::random_spheres(rng).expect("spheres are bounded"));
    assert_renders(
        "two_perlin_spheres",
        preset::two_perlin_spheres(rng).expect("spheres are bounded"),
    );
    assert_renders("earth", preset::earth("this/image/does/not/exist.jpg"));
    assert_renders("simple_light", preset::simple_light(rng));
    assert_renders("cornell_box", preset::cornell_box());
    assert_renders("cornell_smoke", preset::cornell_smoke());
}

#[test]
fn cornell_box_is_enclosed() {
    let preset = preset::cornell_box();
    let aabb = preset
        .scene
        .objects
        .aabb(&Interval::new(0., 1.))
        .expect("everything in the box is bounded");
    assert!(aabb.min().cmple(Point3::splat(0.)).all());
    assert!(aabb.max().cmpge(Point3::splat(555.)).all());

    // Looking in through the open side, above the blocks, the back wall is the first thing hit
    let rng = &mut common::seeded(62);
    let viewport = preset.camera.calculate_viewport(1.).expect("camera is valid");
    let ray = viewport.calc_ray(0.5, 0.3, rng);
    let hit = preset
        .scene
        .objects
        .intersect(&ray, &Interval::new(0.001, Number::INFINITY), rng)
        .expect("ray should hit the back wall");
    assert!((hit.pos.z - 555.).abs() < 1e-6, "hit {:?}", hit.pos);
    assert!(hit.front_face);
}
