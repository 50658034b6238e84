//! Orbital placement of message cards.
//!
//! Each message sits on one of six fixed presets, picked by its index, and is
//! scaled by how far it is from the front of the list.

use crate::types::{Orbit, Transform, ORBITS};

/// Depth flattening applied to the z axis to fake perspective.
const DEPTH_FLATTEN: f64 = 0.52;

/// Y rotation per degree of orbit angle, so cards face the core.
const FACE_CORE: f64 = -0.6;

const BASE_SCALE: f64 = 0.92;
const DEPTH_SCALE: f64 = 0.18;

/// The preset for a message index.
pub fn preset(index: usize) -> &'static Orbit {
    &ORBITS[index % ORBITS.len()]
}

/// Place message `index` of a list of `total` messages.
///
/// Pure: identical arguments always produce identical transforms, so an
/// unchanged message does not jitter between renders.
pub fn placement(index: usize, total: usize) -> Transform {
    let orbit = preset(index);
    let total = total.max(1) as f64;
    let depth = (total - index as f64) / total;
    let angle = orbit.angle.to_radians();

    Transform {
        x: angle.cos() * orbit.radius,
        y: orbit.elevation,
        z: angle.sin() * orbit.radius * DEPTH_FLATTEN,
        rotate_y: orbit.angle * FACE_CORE,
        rotate_x: orbit.tilt,
        scale: BASE_SCALE + depth * DEPTH_SCALE,
    }
}

/// Place every message of a list of `total`.
pub fn layout(total: usize) -> Vec<Transform> {
    (0..total).map(|index| placement(index, total)).collect()
}
