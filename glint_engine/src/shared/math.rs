use crate::core::types::{Number, Vector3};

/// Calculates the vector reflection of vector `d` across the surface normal `n`
pub fn reflect(d: Vector3, n: Vector3) -> Vector3 { d - n * (2. * d.dot(n)) }

/// Refracts the unit vector `vec` through a surface with unit normal `n`, where `ir_ratio` is the ratio
/// of refractive indices (`incident / transmitted`)
pub fn refract(vec: Vector3, n: Vector3, ir_ratio: Number) -> Vector3 {
    let cos_theta = Vector3::dot(-vec, n).min(1.);
    let r_out_perp = (vec + n * cos_theta) * ir_ratio;
    let r_out_parallel = n * -Number::sqrt(Number::abs(1.0 - r_out_perp.length_squared()));
    r_out_perp + r_out_parallel
}

/// Schlick's approximation for the reflectance of a dielectric at the given angle
pub fn schlick_reflectance(cosine: Number, ir_ratio: Number) -> Number {
    let r0 = (1. - ir_ratio) / (1. + ir_ratio);
    let r0_sqr = r0 * r0;
    r0_sqr + (1. - r0_sqr) * Number::powi(1. - cosine, 5)
}
