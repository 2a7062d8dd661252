use crate::constants::{
    TWINKLE_INTERVAL_MS, TWINKLE_MAX_OPACITY, TWINKLE_MIN_OPACITY, TWINKLE_PROBABILITY,
};
use rand::Rng;
use serde::Deserialize;

#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct TwinkleParams {
    pub interval_ms: u32,
    /// Chance that a given star changes on a given tick.
    pub probability: f64,
    pub min_opacity: f64,
    pub max_opacity: f64,
}

impl Default for TwinkleParams {
    fn default() -> Self {
        Self {
            interval_ms: TWINKLE_INTERVAL_MS,
            probability: TWINKLE_PROBABILITY,
            min_opacity: TWINKLE_MIN_OPACITY,
            max_opacity: TWINKLE_MAX_OPACITY,
        }
    }
}

/// Draw the gate for one star and, if it passes, a fresh opacity.
#[inline]
pub fn twinkle_opacity<R: Rng + ?Sized>(rng: &mut R, params: &TwinkleParams) -> Option<f64> {
    if rng.gen::<f64>() >= params.probability {
        return None;
    }
    let span = params.max_opacity - params.min_opacity;
    Some(params.min_opacity + rng.gen::<f64>() * span)
}

/// One timer tick over `star_count` stars: `(index, opacity)` for each star
/// whose draw fell under the probability.
pub fn twinkle_tick<R: Rng + ?Sized>(
    rng: &mut R,
    star_count: usize,
    params: &TwinkleParams,
) -> Vec<(usize, f64)> {
    (0..star_count)
        .filter_map(|i| twinkle_opacity(rng, params).map(|o| (i, o)))
        .collect()
}
