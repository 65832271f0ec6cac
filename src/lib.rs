//! # orbitviz
//!
//! Orbital-propagation core for an interactive Earth/constellation viewer.
//!
//! The crate turns Celestrak-style orbital element records into immutable
//! [`orbit::OrbitDescriptor`]s (derived constants, a perifocal→inertial
//! rotation matrix and a closed orbit polyline), and evaluates per-frame
//! marker positions with a simplified linear-phase law.
//!
//! Scene construction, cameras, textures and the render loop are external
//! collaborators: they consume the polylines and positions produced here
//! and feed wall-clock timestamps back in.

pub mod catalog;
pub mod constants;
pub mod constellation;
pub mod elements;
pub mod errors;
mod frame;
pub mod orbit;
pub mod preprocess;
pub mod propagation;
pub mod scene;

pub use constellation::Constellation;
pub use elements::RawElements;
pub use errors::OrbitvizError;
pub use orbit::OrbitDescriptor;
pub use preprocess::{preprocess, PreprocessOptions};
pub use propagation::{position_at_time, EvalOptions};
pub use scene::ConstellationView;
