pub mod integrator;
pub mod render_opts;
pub mod renderer;
pub mod sink;
