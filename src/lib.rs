#![cfg(target_arch = "wasm32")]
use crate::config::SiteConfig;
use crate::site::Site;
use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub mod config;
mod constants;
pub mod core;
mod dom;
mod fade;
mod frame;
mod menu;
mod parallax;
mod perf;
mod scroll;
mod site;
mod twinkle;

thread_local! {
    static SITE: RefCell<Option<Site>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("cafe-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop every running effect and release its listeners and timers.
#[wasm_bindgen]
pub fn shutdown() {
    let site = SITE.with(|slot| slot.borrow_mut().take());
    if let Some(mut site) = site {
        site.stop();
        log::info!("cafe-web stopped");
    }
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;
    wait_for_dom_ready(&document).await?;

    let config = read_config(&document);
    match config.log_level() {
        Ok(level) => log::set_max_level(level),
        Err(e) => log::warn!("[config] {}", e),
    }

    let site = Site::start(&document, &config);
    log::info!("cafe-web ready ({:?})", site.fidelity());
    let previous = SITE.with(|slot| slot.borrow_mut().replace(site));
    if let Some(mut previous) = previous {
        previous.stop();
    }
    Ok(())
}

/// Resolve once the document has been parsed.
async fn wait_for_dom_ready(document: &web::Document) -> anyhow::Result<()> {
    let state = js_sys::Reflect::get(document, &JsValue::from_str("readyState"))
        .ok()
        .and_then(|v| v.as_string());
    if state.as_deref() != Some("loading") {
        return Ok(());
    }
    let doc = document.clone();
    let ready = js_sys::Promise::new(&mut |resolve, _reject| {
        _ = doc.add_event_listener_with_callback("DOMContentLoaded", &resolve);
    });
    JsFuture::from(ready)
        .await
        .map_err(|e| anyhow::anyhow!("DOMContentLoaded: {:?}", e))?;
    Ok(())
}

/// Page-embedded JSON overrides, or the defaults when absent or invalid.
fn read_config(document: &web::Document) -> SiteConfig {
    let Some(script) = document.get_element_by_id(constants::CONFIG_SCRIPT_ID) else {
        return SiteConfig::default();
    };
    let text = script.text_content().unwrap_or_default();
    match SiteConfig::from_json(&text) {
        Ok(config) => {
            log::info!("[config] loaded #{}", constants::CONFIG_SCRIPT_ID);
            config
        }
        Err(e) => {
            log::warn!("[config] {}; using defaults", e);
            SiteConfig::default()
        }
    }
}
