//! # Constants and type definitions for orbitviz
//!
//! Physical constants, unit-conversion factors and the common type aliases
//! used throughout the crate. These definitions are shared by the orbit
//! preprocessor, the position evaluator and the scene helpers.

use nalgebra::Vector3;

// -------------------------------------------------------------------------------------------------
// Physical constants and unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Number of seconds in a day
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Earth gravitational parameter μ in km³/s² (WGS-72 derived value)
pub const MU_EARTH: f64 = 398_600.4418;

/// Earth mean radius in kilometers
pub const EARTH_RADIUS_KM: f64 = 6_371.0;

/// Kilometers per simulation length unit.
///
/// The host scene models Earth as a sphere of radius 6, so one simulation
/// unit spans one sixth of the Earth radius.
pub const KM_PER_UNIT: f64 = EARTH_RADIUS_KM / 6.0;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in degrees
pub type Degree = f64;
/// Angle in radians
pub type Radian = f64;
/// Distance in kilometers
pub type Kilometer = f64;
/// Distance in simulation length units (see [`KM_PER_UNIT`])
pub type SimUnit = f64;
/// Instant in milliseconds since the Unix epoch
pub type UnixMillis = f64;

/// Ordered point sequence sampling an orbit, in simulation units.
///
/// Closed polylines duplicate their first point at the end.
pub type Polyline = Vec<Vector3<SimUnit>>;
