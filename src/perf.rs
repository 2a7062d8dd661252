use crate::core::perf::{fidelity_for, reported_cores, Fidelity, PerfParams};
use crate::dom;
use crate::parallax::Parallax;
use wasm_bindgen::JsCast;
use web_sys as web;

/// One-time check at load: on low-core devices shorten CSS animations and
/// switch the parallax off.
pub fn apply(document: &web::Document, params: &PerfParams, parallax: Option<&Parallax>) -> Fidelity {
    let cores = web::window().and_then(|w| reported_cores(w.navigator().hardware_concurrency()));
    let fidelity = fidelity_for(cores, params);
    if fidelity == Fidelity::Reduced {
        if let Some(root) = document
            .document_element()
            .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
        {
            dom::set_style(
                &root,
                &params.duration_property,
                &params.reduced_animation_duration,
            );
        }
        if let Some(p) = parallax {
            p.suspend();
        }
        log::info!(
            "[perf] low-end device (cores={:?}), {}={}",
            cores,
            params.duration_property,
            params.reduced_animation_duration
        );
    } else {
        log::debug!("[perf] cores={:?}, full fidelity", cores);
    }
    fidelity
}
