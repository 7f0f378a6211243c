//! This module is a repository of ready-made scenes, each with a camera that frames it nicely.
//!
//! There is no significance to them, apart from not having to manually create scenes by hand.
//! Scenes that contain a [BvhObject] take an rng to build it with, and can fail for the same reasons
//! [BvhObject::new] can.

use std::path::Path;

use rand::Rng;
use rand_core::RngCore;

use crate::core::types::{Colour, Number, Point3, Vector3};
use crate::material::dielectric::DielectricMaterial;
use crate::material::lambertian::LambertianMaterial;
use crate::material::light::LightMaterial;
use crate::material::metal::MetalMaterial;
use crate::material::MaterialInstance;
use crate::object::axis_box::AxisBoxObject;
use crate::object::axis_rect::{AxisRectObject, RectPlane};
use crate::object::bvh::BvhObject;
use crate::object::flip::FlippedObject;
use crate::object::homogenous_volume::HomogeneousVolumeObject;
use crate::object::list::ObjectList;
use crate::object::moving_sphere::MovingSphereObject;
use crate::object::sphere::SphereObject;
use crate::object::transform::{RotatedYObject, TranslatedObject};
use crate::object::ObjectInstance;
use crate::scene::camera::Camera;
use crate::scene::Scene;
use crate::shared::generic_bvh::BvhBuildError;
use crate::shared::interval::Interval;
use crate::shared::rng;
use crate::skybox::none::NoSkybox;
use crate::skybox::SkyboxInstance;
use crate::texture::checker::CheckerTexture;
use crate::texture::image::ImageTexture;
use crate::texture::noise::NoiseTexture;
use crate::texture::TextureInstance;

/// A scene, and the camera it's meant to be viewed through
#[derive(Clone, Debug)]
pub struct Preset {
    pub scene: Scene,
    pub camera: Camera,
}

/// The time window that moving objects are keyframed over, and that cameras keep their shutter open for
const SHUTTER: Interval<Number> = Interval::new(0., 1.);

fn lambertian(albedo: impl Into<TextureInstance>) -> MaterialInstance { LambertianMaterial::new(albedo).into() }

fn light(emissive: impl Into<TextureInstance>) -> MaterialInstance { LightMaterial::new(emissive).into() }

/// Camera looking from `from` to `to`, with the shutter open over [SHUTTER]
fn camera(from: impl Into<Point3>, to: impl Into<Point3>, v_fov: Number) -> Camera {
    Camera {
        shutter: SHUTTER,
        ..Camera::look_at(from, to, v_fov)
    }
}

/// From **Ray Tracing in One Weekend**: a grid of small random spheres around three big ones, on a checkered floor.
///
/// The small diffuse spheres bounce upwards while the shutter is open.
pub fn random_spheres(rng: &mut dyn RngCore) -> Result<Preset, BvhBuildError> {
    const BIG_BALL_CENTRE: Point3 = Point3::new(4., 0.2, 0.);

    let mut objects: Vec<ObjectInstance> = Vec::new();

    let checker = CheckerTexture::new(Colour::new([0.2, 0.3, 0.1]), Colour::new([0.9, 0.9, 0.9]));
    objects.push(SphereObject::new((0., -1000., 0.), 1000., lambertian(checker)).into());

    for a in -11..11 {
        for b in -11..11 {
            let (a, b) = (a as Number, b as Number);
            let material_choice = rng.gen::<Number>();
            let centre = Point3::new(a + 0.9 * rng.gen::<Number>(), 0.2, b + 0.9 * rng.gen::<Number>());

            if (centre - BIG_BALL_CENTRE).length() <= 0.9 {
                continue;
            }

            let obj: ObjectInstance = if material_choice < 0.8 {
                let bounce = Vector3::new(0., rng.gen_range(0.0..0.5), 0.);
                let albedo = rng::colour_rgb_range(rng, 0.0..1.0);
                MovingSphereObject::new(centre, centre + bounce, SHUTTER, 0.2, lambertian(albedo)).into()
            } else if material_choice < 0.95 {
                let albedo = rng::colour_rgb_range(rng, 0.5..1.0);
                let fuzz = rng.gen_range(0.0..0.5);
                SphereObject::new(centre, 0.2, MaterialInstance::from(MetalMaterial::new(albedo, fuzz))).into()
            } else {
                SphereObject::new(centre, 0.2, MaterialInstance::from(DielectricMaterial::new(1.5))).into()
            };
            objects.push(obj);
        }
    }

    objects.push(SphereObject::new((0., 1., 0.), 1., MaterialInstance::from(DielectricMaterial::new(1.5))).into());
    objects.push(SphereObject::new((-4., 1., 0.), 1., lambertian(Colour::new([0.4, 0.2, 0.1]))).into());
    objects.push(
        SphereObject::new(
            (4., 1., 0.),
            1.,
            MaterialInstance::from(MetalMaterial::new(Colour::new([0.7, 0.6, 0.5]), 0.)),
        )
        .into(),
    );

    let bvh = BvhObject::new(objects, SHUTTER, rng)?;

    Ok(Preset {
        scene: Scene {
            objects: bvh.into(),
            skybox: SkyboxInstance::default(),
        },
        camera: Camera {
            focus_dist: 10.,
            defocus_angle: 0.6,
            ..camera((13., 2., 3.), Point3::ZERO, 20.)
        },
    })
}

/// A marbled sphere sitting on a marbled floor
pub fn two_perlin_spheres(rng: &mut dyn RngCore) -> Result<Preset, BvhBuildError> {
    let marble = lambertian(NoiseTexture::new(4., rng.gen()));

    let objects: [ObjectInstance; 2] = [
        SphereObject::new((0., -1000., 0.), 1000., marble.clone()).into(),
        SphereObject::new((0., 2., 0.), 2., marble).into(),
    ];
    let bvh = BvhObject::new(objects, SHUTTER, rng)?;

    Ok(Preset {
        scene: Scene {
            objects: bvh.into(),
            skybox: SkyboxInstance::default(),
        },
        camera: camera((13., 2., 3.), Point3::ZERO, 20.),
    })
}

/// A globe textured with the image at `path`.
///
/// If the image can't be loaded the globe is still there, but painted with the fallback colour.
pub fn earth(path: impl AsRef<Path>) -> Preset {
    let surface = lambertian(ImageTexture::open_or_fallback(path));
    Preset {
        scene: Scene {
            objects: SphereObject::new(Point3::ZERO, 2., surface).into(),
            skybox: SkyboxInstance::default(),
        },
        camera: camera((0., 0., 12.), Point3::ZERO, 20.),
    }
}

/// The marbled spheres in the dark, lit by a rectangular panel and a glowing sphere above them
pub fn simple_light(rng: &mut dyn RngCore) -> Preset {
    let marble = lambertian(NoiseTexture::new(4., rng.gen()));
    let lamp = light(Colour::splat(4.));

    let mut objects = ObjectList::default();
    objects.push(SphereObject::new((0., -1000., 0.), 1000., marble.clone()));
    objects.push(SphereObject::new((0., 2., 0.), 2., marble));
    objects.push(AxisRectObject::new(RectPlane::XY, 3. ..5., 1. ..3., -2., lamp.clone()));
    objects.push(SphereObject::new((0., 7., 0.), 2., lamp));

    Preset {
        scene: Scene {
            objects: objects.into(),
            skybox: NoSkybox.into(),
        },
        camera: camera((26., 3., 6.), (0., 2., 0.), 20.),
    }
}

/// Five walls of the classic box and the ceiling light, facing inwards
fn cornell_walls(lamp: Colour) -> ObjectList {
    let red = lambertian(Colour::new([0.65, 0.05, 0.05]));
    let white = lambertian(Colour::splat(0.73));
    let green = lambertian(Colour::new([0.12, 0.45, 0.15]));

    let wall = |plane: RectPlane, k: Number, material: MaterialInstance| {
        ObjectInstance::from(AxisRectObject::new(plane, 0. ..555., 0. ..555., k, material))
    };

    let mut objects = ObjectList::default();
    objects.push(FlippedObject::new(wall(RectPlane::YZ, 555., green)));
    objects.push(wall(RectPlane::YZ, 0., red));
    objects.push(AxisRectObject::new(RectPlane::XZ, 213. ..343., 227. ..332., 554., light(lamp)));
    objects.push(FlippedObject::new(wall(RectPlane::XZ, 555., white.clone())));
    objects.push(wall(RectPlane::XZ, 0., white.clone()));
    objects.push(FlippedObject::new(wall(RectPlane::XY, 555., white)));
    objects
}

/// The two boxes that stand inside the cornell box, rotated then moved into place
fn cornell_blocks() -> [ObjectInstance; 2] {
    let white = lambertian(Colour::splat(0.73));
    let block = |size: Vector3, degrees: Number, offset: Vector3| {
        let block = ObjectInstance::from(AxisBoxObject::new(Point3::ZERO, size, white.clone()));
        let rotated = ObjectInstance::from(RotatedYObject::new(block, degrees));
        ObjectInstance::from(TranslatedObject::new(rotated, offset))
    };
    [
        block(Vector3::new(165., 330., 165.), 15., Vector3::new(265., 0., 295.)),
        block(Vector3::new(165., 165., 165.), -18., Vector3::new(130., 0., 65.)),
    ]
}

fn cornell_camera() -> Camera { camera((278., 278., -800.), (278., 278., 0.), 40.) }

/// The classic cornell box scene, a tall and a short block in a box lit from above
pub fn cornell_box() -> Preset {
    let mut objects = cornell_walls(Colour::splat(15.));
    cornell_blocks().into_iter().for_each(|b| objects.push(b));

    Preset {
        scene: Scene {
            objects: objects.into(),
            skybox: NoSkybox.into(),
        },
        camera: cornell_camera(),
    }
}

/// The cornell box, with the blocks replaced by a dark and a light cloud of smoke of the same shape
pub fn cornell_smoke() -> Preset {
    let mut objects = cornell_walls(Colour::splat(7.));
    let [tall, short] = cornell_blocks();
    objects.push(HomogeneousVolumeObject::new(tall, 0.01, Colour::BLACK));
    objects.push(HomogeneousVolumeObject::new(short, 0.01, Colour::WHITE));

    Preset {
        scene: Scene {
            objects: objects.into(),
            skybox: NoSkybox.into(),
        },
        camera: cornell_camera(),
    }
}
