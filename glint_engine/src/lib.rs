//! The geometric core of an offline path tracer.
//!
//! Scenes are built from [objects](object) carrying [materials](material) and [textures](texture),
//! optionally accelerated by a [BVH](object::bvh), and rendered through the recursive
//! [integrator](render::integrator).

pub mod core;
pub mod material;
pub mod object;
pub mod render;
pub mod scene;
pub mod shared;
pub mod skybox;
pub mod texture;
