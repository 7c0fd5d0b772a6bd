pub mod normalizer;
pub mod renderer;
