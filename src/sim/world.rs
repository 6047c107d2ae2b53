//! Procedural city generation
//!
//! Each layer is a sliding window over an endless strip of buildings:
//! buildings scroll left, fall off once fully past the left edge, and new
//! ones are appended after the rightmost until the layer is full again.

use rand::Rng;

use super::state::Building;
use crate::tuning::LayerTuning;

/// Build a full layer for the start of a run, evenly spaced from x = 0
pub fn initial_layer<R: Rng>(layer: &LayerTuning, rng: &mut R) -> Vec<Building> {
    (0..layer.count)
        .map(|i| random_building(layer, i as f32 * layer.initial_spacing, rng))
        .collect()
}

/// Scroll a layer left by `speed * parallax`, recycle off-screen buildings
/// and top it back up to its target length
pub fn advance_layer<R: Rng>(
    buildings: &mut Vec<Building>,
    layer: &LayerTuning,
    speed: f32,
    rng: &mut R,
) {
    let dx = speed * layer.parallax;
    for building in buildings.iter_mut() {
        building.x -= dx;
    }
    buildings.retain(|b| b.right() >= 0.0);
    extend_layer(buildings, layer, rng);
}

/// Append buildings after the rightmost one until the layer holds `layer.count`
pub fn extend_layer<R: Rng>(
    buildings: &mut Vec<Building>,
    layer: &LayerTuning,
    rng: &mut R,
) {
    while buildings.len() < layer.count {
        let x = match buildings.last() {
            Some(last) => last.x + layer.base_gap + rng.random::<f32>() * layer.jitter,
            // Whole layer scrolled away (only possible with extreme tuning)
            None => 0.0,
        };
        buildings.push(random_building(layer, x, rng));
    }
}

fn random_building<R: Rng>(layer: &LayerTuning, x: f32, rng: &mut R) -> Building {
    let (min_w, max_w) = layer.width;
    let (min_h, max_h) = layer.height;
    Building {
        x,
        width: min_w + rng.random::<f32>() * (max_w - min_w),
        height: min_h + rng.random::<f32>() * (max_h - min_h),
    }
}
