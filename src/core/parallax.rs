use crate::constants::{PARALLAX_AMPLITUDE, PARALLAX_BASE_SPEED, PARALLAX_SPEED_STEP};
use glam::DVec2;
use serde::Deserialize;

/// Per-layer speed and overall amplitude of the pointer parallax.
#[derive(Clone, Copy, Debug, PartialEq, Deserialize)]
#[serde(default)]
pub struct ParallaxParams {
    pub base_speed: f64,
    pub speed_step: f64,
    pub amplitude: f64,
}

impl Default for ParallaxParams {
    fn default() -> Self {
        Self {
            base_speed: PARALLAX_BASE_SPEED,
            speed_step: PARALLAX_SPEED_STEP,
            amplitude: PARALLAX_AMPLITUDE,
        }
    }
}

impl ParallaxParams {
    #[inline]
    pub fn speed_for_layer(&self, index: usize) -> f64 {
        self.base_speed + index as f64 * self.speed_step
    }

    /// Translation in px for layer `index` given a pointer fraction.
    #[inline]
    pub fn offset_for_layer(&self, pointer: DVec2, index: usize) -> DVec2 {
        pointer * self.speed_for_layer(index) * self.amplitude
    }
}

/// Map a client coordinate to a fraction centred on the viewport, roughly
/// in [-0.5, 0.5]. A zero-sized viewport yields 0.
#[inline]
pub fn pointer_fraction(client: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        client / extent - 0.5
    } else {
        0.0
    }
}

#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub struct PointerState {
    pub position: DVec2,
    /// Set by every move, cleared by leave. Nothing else sets it.
    pub moving: bool,
}

impl PointerState {
    pub fn on_move(&mut self, client_x: f64, client_y: f64, viewport_w: f64, viewport_h: f64) {
        self.position = DVec2::new(
            pointer_fraction(client_x, viewport_w),
            pointer_fraction(client_y, viewport_h),
        );
        self.moving = true;
    }

    pub fn on_leave(&mut self) {
        self.moving = false;
    }
}

/// Transform state of a single tracked element.
#[derive(Default, Clone, Copy, Debug, PartialEq)]
pub enum LayerTransform {
    /// No inline transform has been written yet.
    #[default]
    Untouched,
    Translate(DVec2),
    /// Explicitly set to `none` by the low-end downgrade.
    Cleared,
}

impl LayerTransform {
    /// CSS `transform` value to write, or `None` to leave the element alone.
    pub fn to_css(&self) -> Option<String> {
        match self {
            LayerTransform::Untouched => None,
            LayerTransform::Translate(v) => Some(format!("translate({}px, {}px)", v.x, v.y)),
            LayerTransform::Cleared => Some("none".to_string()),
        }
    }
}

pub struct ParallaxField {
    params: ParallaxParams,
    layers: Vec<LayerTransform>,
    suspended: bool,
}

impl ParallaxField {
    pub fn new(layer_count: usize, params: ParallaxParams) -> Self {
        Self {
            params,
            layers: vec![LayerTransform::Untouched; layer_count],
            suspended: false,
        }
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn is_suspended(&self) -> bool {
        self.suspended
    }

    pub fn layer(&self, index: usize) -> Option<LayerTransform> {
        self.layers.get(index).copied()
    }

    /// Advance one frame and return the indices whose transform changed.
    ///
    /// While the pointer moves every layer follows it at its own speed. Once
    /// it has left, translated layers snap back to the origin; untouched and
    /// cleared layers are left as they are.
    pub fn step(&mut self, pointer: &PointerState) -> Vec<usize> {
        let mut changed = Vec::new();
        if self.suspended {
            return changed;
        }
        for (i, layer) in self.layers.iter_mut().enumerate() {
            let next = if pointer.moving {
                LayerTransform::Translate(self.params.offset_for_layer(pointer.position, i))
            } else {
                match *layer {
                    LayerTransform::Translate(_) => LayerTransform::Translate(DVec2::ZERO),
                    other => other,
                }
            };
            if next != *layer {
                *layer = next;
                changed.push(i);
            }
        }
        changed
    }

    /// Clear every layer to `none` and stop following the pointer.
    pub fn suspend(&mut self) -> usize {
        self.suspended = true;
        self.layers.fill(LayerTransform::Cleared);
        self.layers.len()
    }
}
