use crate::tracing_targets;

tracing_targets! {
    OBJECT = "object",
    BVH = "bvh",
    TEXTURE = "texture",
    RENDERER = "renderer",
}
