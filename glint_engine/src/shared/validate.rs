//! Debug-only invariant checks.
//!
//! Every function here returns immediately in builds without `debug_assertions`.

use crate::core::types::{Colour, Number, Point3, Vector3};
use crate::shared::intersect::Intersection;
use crate::shared::interval::Interval;
use crate::shared::ray::Ray;
use approx::*;
use std::borrow::Borrow;

macro_rules! debug_assert_only {
    () => {
        if cfg!(not(debug_assertions)) {
            return;
        }
    };
}

pub const EPSILON: Number = 1e-6;
pub const RELATIVE: Number = 1e-3;

#[inline(always)]
#[track_caller]
pub fn number(val: impl Borrow<Number>) {
    debug_assert_only!();
    let val = val.borrow();
    assert!(!val.is_nan(), "should not be nan; val: {val}");
}

#[inline(always)]
#[track_caller]
pub fn normal3(n: impl Borrow<Vector3>) {
    debug_assert_only!();
    let n = n.borrow();
    vector3(n);
    assert!(n.is_normalized(), "should be normalised; vec: {n:?}, len: {:?}", n.length());
}

#[inline(always)]
#[track_caller]
pub fn point3(p: impl Borrow<Point3>) {
    debug_assert_only!();
    let p = p.borrow();
    assert!(!p.is_nan(), "should not be nan; point: {p:?}");
}

#[inline(always)]
#[track_caller]
pub fn vector3(v: impl Borrow<Vector3>) {
    debug_assert_only!();
    let v = v.borrow();
    assert!(!v.is_nan(), "should not be nan; vec: {v:?}");
}

#[inline(always)]
#[track_caller]
pub fn colour(c: impl Borrow<Colour>) {
    debug_assert_only!();
    let c = c.borrow();
    assert!(
        c.0.iter().all(|&chan| chan >= 0.0 && !chan.is_nan()),
        "channels should be >= 0; col: {c:?}"
    )
}

/// Asserts that an intersection was valid for the ray and the search interval it was found in
#[inline(always)]
#[track_caller]
pub fn intersection(ray: &Ray, intersect: &Intersection, interval: &Interval<Number>) {
    debug_assert_only!();

    point3(intersect.pos);
    number(intersect.dist);
    assert!(!intersect.uv.is_nan(), "uv should not be nan; uv: {:?}", intersect.uv);

    assert!(
        interval.contains(&intersect.dist),
        "intersect dist {} not in interval {}",
        intersect.dist,
        interval
    );

    assert!(
        Point3::relative_eq(&intersect.pos, &ray.at(intersect.dist), EPSILON, RELATIVE),
        "intersect position doesn't match ray at intersection dist; intersect_pos: {i_pos:?}, dist: {dist}, ray: {ray:?}, ray_pos: {r_pos:?}",
        i_pos = intersect.pos,
        dist = intersect.dist,
        r_pos = ray.at(intersect.dist)
    );

    normal3(intersect.normal);
}
