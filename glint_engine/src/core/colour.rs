use crate::core::types::{Channel, Number};
use crate::{forward_fn, impl_op, impl_op_assign};
use serde::{Deserialize, Serialize};
use std::array;
use std::ops::{Index, IndexMut};

/// A linear RGB colour
///
/// Channels are not clamped, and may exceed `1.0` for emissive sources.
#[derive(Copy, Clone, Debug, Default, PartialOrd, PartialEq, Serialize, Deserialize)]
#[repr(transparent)]
pub struct ColourRgb(pub [Channel; 3]);

// region Constructors

impl ColourRgb {
    pub const fn new(val: [Channel; 3]) -> Self { Self(val) }
    pub const fn splat(val: Channel) -> Self { Self([val; 3]) }

    pub fn r(&self) -> Channel { self.0[0] }
    pub fn g(&self) -> Channel { self.0[1] }
    pub fn b(&self) -> Channel { self.0[2] }
}

// endregion Constructors

// region Known Colours

impl ColourRgb {
    pub const BLACK: Self = Self::splat(0.);
    pub const WHITE: Self = Self::splat(1.);
    pub const HALF_GREY: Self = Self::splat(0.5);
    /// Bright cyan, returned by textures that have nothing to sample
    pub const DEBUG_CYAN: Self = Self::new([0., 1., 1.]);
}

// endregion Known Colours

// region To/From impls

impl From<[Channel; 3]> for ColourRgb {
    fn from(val: [Channel; 3]) -> Self { Self::new(val) }
}
impl From<(Channel, Channel, Channel)> for ColourRgb {
    fn from((r, g, b): (Channel, Channel, Channel)) -> Self { Self::new([r, g, b]) }
}
impl From<ColourRgb> for [Channel; 3] {
    fn from(val: ColourRgb) -> Self { val.0 }
}
impl From<ColourRgb> for image::Rgb<f32> {
    fn from(val: ColourRgb) -> Self { image::Rgb(val.0) }
}

// endregion To/From impls

// region Iterating/Indexing

impl IntoIterator for ColourRgb {
    type Item = Channel;
    type IntoIter = array::IntoIter<Channel, 3>;

    fn into_iter(self) -> Self::IntoIter { self.0.into_iter() }
}

impl Index<usize> for ColourRgb {
    type Output = Channel;

    fn index(&self, index: usize) -> &Self::Output { &self.0[index] }
}
impl IndexMut<usize> for ColourRgb {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output { &mut self.0[index] }
}

// endregion Iterating/Indexing

// region Operators

impl ColourRgb {
    /// Maps each channel of the colour with the given closure, and returns the new colour
    #[inline]
    pub fn map(&self, op: impl Fn(Channel) -> Channel) -> Self { self.0.map(op).into() }
    /// Maps each channel of the colour with the matching channel of another
    #[inline]
    pub fn map2(&self, other: &Self, mut op: impl FnMut(Channel, Channel) -> Channel) -> Self {
        array::from_fn(|i| op(self[i], other[i])).into()
    }

    /// Linearly interpolates between `a` (at `t = 0`) and `b` (at `t = 1`)
    pub fn lerp(a: Self, b: Self, t: Number) -> Self {
        let t = t as Channel;
        a.map2(&b, |a, b| a + (b - a) * t)
    }

    /// Gamma-2 correction, for callers that quantise into an sRGB-ish output
    pub fn gamma_corrected(&self) -> Self { self.map(|c| c.max(0.).sqrt()) }

    pub fn is_finite(&self) -> bool { self.0.iter().all(|c| c.is_finite()) }
}

impl_op!(std::ops::Add : fn add(a: ColourRgb, b: ColourRgb) -> ColourRgb { ColourRgb::map2(&a, &b, |a, b| a + b) });
impl_op!(std::ops::Sub : fn sub(a: ColourRgb, b: ColourRgb) -> ColourRgb { ColourRgb::map2(&a, &b, |a, b| a - b) });
impl_op!(std::ops::Mul : fn mul(a: ColourRgb, b: ColourRgb) -> ColourRgb { ColourRgb::map2(&a, &b, |a, b| a * b) });
impl_op!(std::ops::Div : fn div(a: ColourRgb, b: ColourRgb) -> ColourRgb { ColourRgb::map2(&a, &b, |a, b| a / b) });

impl_op!(std::ops::Mul : fn mul(a: ColourRgb, b: Channel) -> ColourRgb { a.map(|a| a * b) });
impl_op!(std::ops::Div : fn div(a: ColourRgb, b: Channel) -> ColourRgb { a.map(|a| a / b) });

impl_op_assign!(std::ops::AddAssign : fn add_assign(a: ColourRgb, b: ColourRgb) { a = a + b });
impl_op_assign!(std::ops::MulAssign : fn mul_assign(a: ColourRgb, b: ColourRgb) { a = a * b });
impl_op_assign!(std::ops::MulAssign : fn mul_assign(a: ColourRgb, b: Channel) { a = a * b });
impl_op_assign!(std::ops::DivAssign : fn div_assign(a: ColourRgb, b: Channel) { a = a / b });

// endregion Operators

forward_fn! {
    impl ColourRgb {
        abs();
        sqrt();
        min(min: Channel);
        max(max: Channel);
        clamp(min: Channel, max: Channel);
    }
}

impl std::iter::Sum for ColourRgb {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self { iter.fold(Self::BLACK, |a, b| a + b) }
}
