use crate::config::FadeConfig;
use crate::dom;
use crate::site::Effect;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

type ObserverCallback = Closure<dyn FnMut(js_sys::Array, web::IntersectionObserver)>;

/// Starts each element's CSS entrance animation the first time it scrolls
/// into view. Triggered elements are unobserved.
pub struct FadeIn {
    observer: web::IntersectionObserver,
    _callback: ObserverCallback,
}

impl FadeIn {
    pub fn start(document: &web::Document, selector: &str, config: &FadeConfig) -> Option<Self> {
        let elements = dom::query_all(document, selector);
        if elements.is_empty() {
            log::debug!("[fade] no elements match {}", selector);
            return None;
        }

        let callback = Closure::wrap(Box::new(
            move |entries: js_sys::Array, observer: web::IntersectionObserver| {
                for entry in entries.iter() {
                    let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                        continue;
                    };
                    if !entry.is_intersecting() {
                        continue;
                    }
                    let target = entry.target();
                    if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
                        dom::set_style(el, "animation-play-state", "running");
                    }
                    observer.unobserve(&target);
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

        let options = web::IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(config.threshold));
        options.set_root_margin(&config.root_margin());
        let observer = match web::IntersectionObserver::new_with_options(
            callback.as_ref().unchecked_ref(),
            &options,
        ) {
            Ok(o) => o,
            Err(e) => {
                log::error!("IntersectionObserver error: {:?}", e);
                return None;
            }
        };
        for el in &elements {
            observer.observe(el);
        }
        log::info!(
            "[fade] observing={} threshold={} margin={}",
            elements.len(),
            config.threshold,
            config.root_margin()
        );
        Some(Self {
            observer,
            _callback: callback,
        })
    }
}

impl Effect for FadeIn {
    fn name(&self) -> &'static str {
        "fade"
    }

    fn stop(&mut self) {
        self.observer.disconnect();
    }
}
