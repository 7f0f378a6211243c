//! Helper module for RNG-related functions
//!
//! All functions take the generator explicitly; nothing here holds global state.

use crate::core::colour::ColourRgb;
use crate::core::types::{Channel, Vector2, Vector3};
use rand::Rng;
use std::ops::Range;

// region 3D

/// Returns a random vector in a unit cube (`-1..=1`)
pub fn vector_in_unit_cube<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    Vector3::new(
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
        rng.gen_range(-1.0..=1.0),
    )
}

/// Returns a random vector in a unit sphere (`-1..=1`, `length <= 1`)
pub fn vector_in_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    loop {
        let v = vector_in_unit_cube(rng);
        if v.length_squared() <= 1. {
            break v;
        }
    }
}

/// Returns a random vector on a unit sphere (`length = 1`)
pub fn vector_on_unit_sphere<R: Rng + ?Sized>(rng: &mut R) -> Vector3 {
    loop {
        if let Some(vec) = vector_in_unit_sphere(rng).try_normalize() {
            break vec;
        }
    }
}

// endregion 3D

// region 2D

/// Returns a random vector in a unit circle (`-1..=1`, `length <= 1`)
pub fn vector_in_unit_circle<R: Rng + ?Sized>(rng: &mut R) -> Vector2 {
    loop {
        let v = Vector2::new(rng.gen_range(-1.0..=1.0), rng.gen_range(-1.0..=1.0));
        if v.length_squared() <= 1. {
            break v;
        }
    }
}

// endregion 2D

// region Colours

/// Returns a random colour with every channel inside the given range
pub fn colour_rgb_range<R: Rng + ?Sized>(rng: &mut R, range: Range<Channel>) -> ColourRgb {
    ColourRgb::new([(); 3].map(|_| rng.gen_range(range.clone())))
}

// endregion Colours
