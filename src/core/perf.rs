use crate::constants::{ANIMATION_DURATION_PROPERTY, LOW_END_MAX_CORES, REDUCED_ANIMATION_DURATION};
use serde::Deserialize;

#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct PerfParams {
    /// Devices reporting this many logical cores or fewer are treated as low-end.
    pub low_end_max_cores: u32,
    pub reduced_animation_duration: String,
    pub duration_property: String,
}

impl Default for PerfParams {
    fn default() -> Self {
        Self {
            low_end_max_cores: LOW_END_MAX_CORES,
            reduced_animation_duration: REDUCED_ANIMATION_DURATION.to_string(),
            duration_property: ANIMATION_DURATION_PROPERTY.to_string(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fidelity {
    Full,
    Reduced,
}

/// `navigator.hardwareConcurrency` counts only when it is a positive number.
#[inline]
pub fn reported_cores(raw: f64) -> Option<f64> {
    (raw.is_finite() && raw > 0.0).then_some(raw)
}

#[inline]
pub fn is_low_end(cores: Option<f64>, max_cores: u32) -> bool {
    cores.is_some_and(|c| c <= max_cores as f64)
}

pub fn fidelity_for(cores: Option<f64>, params: &PerfParams) -> Fidelity {
    if is_low_end(cores, params.low_end_max_cores) {
        Fidelity::Reduced
    } else {
        Fidelity::Full
    }
}
