use crate::core::types::{Number, Point3, Vector3};

/// A ray with an origin, a direction, and the instant in time it was cast at.
///
/// The direction is *not* normalised; intersection distances are measured in multiples of it.
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Ray {
    pos: Point3,
    dir: Vector3,
    inv_dir: Vector3,
    time: Number,
}

impl Ray {
    pub fn new(pos: Point3, dir: Vector3) -> Self { Self::new_at_time(pos, dir, 0.) }

    pub fn new_at_time(pos: Point3, dir: Vector3, time: Number) -> Self {
        Self {
            pos,
            dir,
            inv_dir: dir.recip(),
            time,
        }
    }

    /// World-space origin of the ray
    #[inline(always)]
    pub fn pos(&self) -> Point3 { self.pos }

    /// Direction vector of the ray. May have any length, including zero.
    #[inline(always)]
    pub fn dir(&self) -> Vector3 { self.dir }

    /// Component-wise reciprocal of [Self::dir()]. Zero components become infinities.
    #[inline(always)]
    pub fn inv_dir(&self) -> Vector3 { self.inv_dir }

    /// The time sample this ray was cast at, normally inside a camera's shutter interval
    #[inline(always)]
    pub fn time(&self) -> Number { self.time }

    /// Gets the position at a given distance along the ray
    ///
    /// `pos + (t * dir)`
    #[inline]
    pub fn at(&self, t: Number) -> Point3 { self.pos + (self.dir * t) }
}
