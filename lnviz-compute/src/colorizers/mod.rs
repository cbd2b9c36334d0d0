pub mod color_space;
pub mod colorizer;
pub mod cyclic;
pub mod diverging;

pub use colorizer::Colorizer;
pub use cyclic::{color_for_phase, phase_hsl, CyclicColorizer, SURFACE_ALPHA};
pub use diverging::{color_for_scalar, DivergingColorizer};
