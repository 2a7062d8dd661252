use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// All elements matching `selector`. An invalid selector matches nothing.
pub fn query_all(document: &web::Document, selector: &str) -> Vec<web::HtmlElement> {
    let list = match document.query_selector_all(selector) {
        Ok(list) => list,
        Err(e) => {
            log::warn!("[dom] bad selector {:?}: {:?}", selector, e);
            return Vec::new();
        }
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect()
}

pub fn query_one(document: &web::Document, selector: &str) -> Option<web::HtmlElement> {
    document
        .query_selector(selector)
        .ok()
        .flatten()
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

pub fn viewport_size() -> Option<(f64, f64)> {
    let w = web::window()?;
    let width = w.inner_width().ok()?.as_f64()?;
    let height = w.inner_height().ok()?.as_f64()?;
    Some((width, height))
}

#[inline]
pub fn viewport_width() -> Option<f64> {
    viewport_size().map(|(w, _)| w)
}

/// Disable or restore background scrolling of the page body.
pub fn set_scroll_lock(document: &web::Document, locked: bool) {
    if let Some(body) = document.body() {
        set_style(&body, "overflow", if locked { "hidden" } else { "" });
    }
}

/// An event listener that is removed from its target when dropped.
pub struct Listener {
    target: web::EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(web::Event)>,
}

impl Listener {
    pub fn new(
        target: &web::EventTarget,
        event: &'static str,
        handler: impl FnMut(web::Event) + 'static,
    ) -> Self {
        let callback = Closure::wrap(Box::new(handler) as Box<dyn FnMut(web::Event)>);
        _ = target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref());
        Self {
            target: target.clone(),
            event,
            callback,
        }
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        _ = self
            .target
            .remove_event_listener_with_callback(self.event, self.callback.as_ref().unchecked_ref());
    }
}

/// A repeating window timer, cleared when dropped.
pub struct Interval {
    handle: i32,
    _callback: Closure<dyn FnMut()>,
}

impl Interval {
    pub fn new(period_ms: u32, tick: impl FnMut() + 'static) -> Option<Self> {
        let window = web::window()?;
        let callback = Closure::wrap(Box::new(tick) as Box<dyn FnMut()>);
        let timeout = i32::try_from(period_ms).unwrap_or(i32::MAX);
        match window.set_interval_with_callback_and_timeout_and_arguments_0(
            callback.as_ref().unchecked_ref(),
            timeout,
        ) {
            Ok(handle) => Some(Self {
                handle,
                _callback: callback,
            }),
            Err(e) => {
                log::error!("setInterval error: {:?}", e);
                None
            }
        }
    }
}

impl Drop for Interval {
    fn drop(&mut self) {
        if let Some(w) = web::window() {
            w.clear_interval_with_handle(self.handle);
        }
    }
}
