use rand::Rng;
use rand_core::RngCore;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::types::{Number, Point3, Vector3};
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use crate::shared::{rng, validate};

/// A thin-lens camera with a shutter that stays open over an interval of time
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    /// Position the camera is located at
    pub pos: Point3,
    /// Direction the camera is looking in
    pub fwd: Vector3,
    /// Vertical FOV, in degrees
    pub v_fov: Number,
    /// Distance at which the camera is focused at
    pub focus_dist: Number,
    /// How large the defocus cone for each ray is, in degrees.
    ///
    /// Larger angles increase defocus blur, zero gives perfect focus.
    pub defocus_angle: Number,
    /// Rays are cast at random times inside this interval
    pub shutter: Interval<Number>,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            pos: Point3::ZERO,
            fwd: Vector3::NEG_Z,
            v_fov: 45.0,
            focus_dist: 1.0,
            defocus_angle: 0.0,
            shutter: Interval::ZERO,
        }
    }
}

#[derive(Error, Copy, Clone, Debug, PartialEq)]
pub enum CamInvalidError {
    /// The look direction (forward vector) was zero, or pointed straight up or down
    #[error("the provided `fwd` vector couldn't be normalised, or was vertical")]
    ForwardVectorInvalid,
    /// The field-of-view was not inside `0..180` degrees
    #[error("the provided FOV was not valid")]
    FovInvalid,
    /// The focus distance was not `> 0`
    #[error("the provided focal length was not valid")]
    FocalLengthInvalid,
    /// The aspect ratio was not `> 0`
    #[error("the aspect ratio was not valid")]
    AspectRatioInvalid,
}

impl Camera {
    /// A camera at `from` looking at `to`, focused at `to`
    pub fn look_at(from: impl Into<Point3>, to: impl Into<Point3>, v_fov: Number) -> Self {
        let (from, to) = (from.into(), to.into());
        Self {
            pos: from,
            fwd: to - from,
            v_fov,
            focus_dist: (to - from).length(),
            ..Self::default()
        }
    }

    /// A method for calculating the viewport from a camera
    ///
    /// # Errors
    /// This will return a [`CamInvalidError`] if any of the settings of the camera are not valid, and so
    /// the viewport couldn't be calculated. This might happen if the FOV is zero ([`CamInvalidError::FovInvalid`]).
    pub fn calculate_viewport(&self, aspect_ratio: Number) -> Result<Viewport, CamInvalidError> {
        let focal_length = self.focus_dist;

        if !(self.v_fov > 0. && self.v_fov < 180.) {
            return Err(CamInvalidError::FovInvalid);
        }
        if !(focal_length > 0.) {
            return Err(CamInvalidError::FocalLengthInvalid);
        }
        if !(aspect_ratio > 0.) {
            return Err(CamInvalidError::AspectRatioInvalid);
        }

        // Calculate the u,v,w unit basis vectors for the camera coordinate frame.
        let w = -self.fwd.try_normalize().ok_or(CamInvalidError::ForwardVectorInvalid)?;
        let u = Vector3::cross(Vector3::Y, w)
            .try_normalize()
            .ok_or(CamInvalidError::ForwardVectorInvalid)?;
        let v = Vector3::cross(w, u);

        let h = (self.v_fov.to_radians() / 2.).tan();
        let viewport_height = 2. * h * focal_length;
        let viewport_width = viewport_height * aspect_ratio;
        // Vectors across the horizontal and down the vertical viewport edges.
        let viewport_u = u * viewport_width;
        let viewport_v = -v * viewport_height;
        let top_left = self.pos - (w * focal_length) - (viewport_u / 2.) - (viewport_v / 2.);

        // Calculate the camera defocus disk basis vectors.
        let defocus_radius = focal_length * (self.defocus_angle.to_radians() / 2.).tan();

        validate::point3(top_left);
        validate::vector3(viewport_u);
        validate::vector3(viewport_v);

        Ok(Viewport {
            pos: self.pos,
            top_left,
            viewport_u,
            viewport_v,
            defocus_disk_u: u * defocus_radius,
            defocus_disk_v: v * defocus_radius,
            shutter: self.shutter,
        })
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub pos: Point3,
    pub top_left: Point3,
    pub viewport_u: Vector3,
    pub viewport_v: Vector3,
    pub defocus_disk_u: Vector3,
    pub defocus_disk_v: Vector3,
    pub shutter: Interval<Number>,
}

impl Viewport {
    /// Calculates the view ray for the normalised screen coordinates `(s, t)`,
    /// where `(0, 0)` is the top-left and `(1, 1)` the bottom-right of the view
    ///
    /// The ray's origin is jittered across the defocus disk, and its time across the shutter interval.
    pub fn calc_ray(&self, s: Number, t: Number, rng: &mut dyn RngCore) -> Ray {
        let pixel = self.top_left + (self.viewport_u * s) + (self.viewport_v * t);

        let disk = rng::vector_in_unit_circle(rng);
        let origin = self.pos + (self.defocus_disk_u * disk.x) + (self.defocus_disk_v * disk.y);

        let time = self.shutter.start + rng.gen::<Number>() * self.shutter.size();
        Ray::new_at_time(origin, pixel - origin, time)
    }
}
