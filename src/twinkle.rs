use crate::core::twinkle::{twinkle_tick, TwinkleParams};
use crate::dom::{self, Interval};
use crate::site::Effect;
use rand::rngs::StdRng;
use rand::SeedableRng;
use web_sys as web;

pub struct Twinkle {
    interval: Option<Interval>,
}

impl Twinkle {
    pub fn start(document: &web::Document, selector: &str, params: TwinkleParams) -> Option<Self> {
        let stars = dom::query_all(document, selector);
        if stars.is_empty() {
            log::debug!("[twinkle] no elements match {}", selector);
            return None;
        }
        let count = stars.len();
        let mut rng = StdRng::from_entropy();
        let interval = Interval::new(params.interval_ms, move || {
            for (i, opacity) in twinkle_tick(&mut rng, stars.len(), &params) {
                if let Some(star) = stars.get(i) {
                    dom::set_style(star, "opacity", &opacity.to_string());
                }
            }
        })?;
        log::info!(
            "[twinkle] stars={} every {}ms p={}",
            count,
            params.interval_ms,
            params.probability
        );
        Some(Self {
            interval: Some(interval),
        })
    }
}

impl Effect for Twinkle {
    fn name(&self) -> &'static str {
        "twinkle"
    }

    fn stop(&mut self) {
        self.interval.take();
    }
}
