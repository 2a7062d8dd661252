use crate::core::scroll::{classify_href, LinkAction};
use crate::dom::{self, Listener};
use crate::site::Effect;
use web_sys as web;

fn scroll_to(target: &web::Element) {
    let options = web::ScrollIntoViewOptions::new();
    options.set_behavior(web::ScrollBehavior::Smooth);
    options.set_block(web::ScrollLogicalPosition::Start);
    target.scroll_into_view_with_scroll_into_view_options(&options);
}

/// Smooth in-page scrolling for fragment links; other links navigate normally.
pub struct SmoothScroll {
    listeners: Vec<Listener>,
}

impl SmoothScroll {
    pub fn start(document: &web::Document, selector: &str) -> Option<Self> {
        let links = dom::query_all(document, selector);
        if links.is_empty() {
            log::debug!("[scroll] no elements match {}", selector);
            return None;
        }
        let listeners: Vec<Listener> = links
            .iter()
            .map(|link| {
                let doc = document.clone();
                let source = link.clone();
                Listener::new(link.as_ref(), "click", move |ev| {
                    let href = source.get_attribute("href");
                    let action = classify_href(href.as_deref());
                    if action.prevents_default() {
                        ev.prevent_default();
                    }
                    if let LinkAction::ScrollTo(id) = action {
                        match doc.get_element_by_id(id) {
                            Some(target) => scroll_to(&target),
                            None => log::debug!("[scroll] no element with id {:?}", id),
                        }
                    }
                })
            })
            .collect();
        log::info!("[scroll] links={}", listeners.len());
        Some(Self { listeners })
    }
}

impl Effect for SmoothScroll {
    fn name(&self) -> &'static str {
        "scroll"
    }

    fn stop(&mut self) {
        self.listeners.clear();
    }
}
