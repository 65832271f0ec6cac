//! Scene-frame helpers for the rendering collaborator.
//!
//! The orbital math works in an inertial frame whose z-axis is the
//! celestial pole; the host scene treats y as "up". A fixed 90° rotation
//! about the x-axis bridges the two conventions. It is applied exactly
//! once per point, after the shape/evaluator computation, and is never
//! baked into a descriptor's rotation matrix (which stays pure orbital
//! geometry).

use itertools::Itertools;
use nalgebra::{Rotation3, Vector3};

use crate::constants::{Polyline, SimUnit, UnixMillis};
use crate::constellation::Constellation;
use crate::orbit::OrbitDescriptor;
use crate::propagation::{position_at_time, EvalOptions};

/// Fixed 90°-about-X rotation aligning the orbital frame with the scene's
/// up-axis convention.
pub fn scene_tilt() -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::x_axis(), std::f64::consts::FRAC_PI_2)
}

/// Tilt a single computed position into the scene frame.
pub fn tilt_point(p: &Vector3<SimUnit>) -> Vector3<SimUnit> {
    scene_tilt() * p
}

/// Marker position at `t_millis`, already tilted into the scene frame.
pub fn scene_position_at_time(
    descriptor: &OrbitDescriptor,
    t_millis: UnixMillis,
    options: &EvalOptions,
) -> Vector3<SimUnit> {
    tilt_point(&position_at_time(descriptor, t_millis, options))
}

/// Sorted distinct constellation tags present in a processed catalog.
///
/// Feeds the host UI's constellation selector.
pub fn constellation_tags(catalog: &[OrbitDescriptor]) -> Vec<Constellation> {
    catalog
        .iter()
        .map(|d| d.constellation)
        .sorted()
        .dedup()
        .collect()
}

/// Explicit, owned selection of the currently displayed constellation.
///
/// The rendering collaborator owns one of these instead of mutating
/// shared scene collections: selecting a constellation replaces the
/// active set, and each frame reads marker positions for exactly the
/// active objects.
#[derive(Debug)]
pub struct ConstellationView<'a> {
    catalog: &'a [OrbitDescriptor],
    active: Vec<&'a OrbitDescriptor>,
}

impl<'a> ConstellationView<'a> {
    pub fn new(catalog: &'a [OrbitDescriptor]) -> Self {
        Self {
            catalog,
            active: Vec::new(),
        }
    }

    /// Replace the active set with every object of `constellation`.
    pub fn select(&mut self, constellation: Constellation) {
        self.active = self
            .catalog
            .iter()
            .filter(|d| d.constellation == constellation)
            .collect();
    }

    /// Stop displaying everything.
    pub fn clear(&mut self) {
        self.active.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.active.is_empty()
    }

    pub fn len(&self) -> usize {
        self.active.len()
    }

    /// Currently displayed descriptors, in catalog order.
    pub fn active(&self) -> &[&'a OrbitDescriptor] {
        &self.active
    }

    /// Closed orbit polylines of the active objects, tilted into the
    /// scene frame, ready for static line drawing.
    pub fn polylines(&self) -> Vec<Polyline> {
        let tilt = scene_tilt();
        self.active
            .iter()
            .map(|d| d.polyline.iter().map(|p| tilt * p).collect())
            .collect()
    }

    /// Scene-frame marker position per active object at `t_millis`, in
    /// catalog order matching [`Self::active`].
    pub fn marker_positions(
        &self,
        t_millis: UnixMillis,
        options: &EvalOptions,
    ) -> Vec<Vector3<SimUnit>> {
        self.active
            .iter()
            .map(|d| scene_position_at_time(d, t_millis, options))
            .collect()
    }
}
