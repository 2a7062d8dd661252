use crate::core::parallax::{ParallaxField, ParallaxParams, PointerState};
use crate::dom::{self, Listener};
use crate::frame::{self, AnimationTask};
use crate::site::Effect;
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::JsCast;
use web_sys as web;

struct ParallaxContext {
    layers: Vec<web::HtmlElement>,
    pointer: PointerState,
    field: ParallaxField,
}

impl ParallaxContext {
    fn frame(&mut self) {
        for i in self.field.step(&self.pointer) {
            self.write(i);
        }
    }

    fn write(&self, index: usize) {
        let css = self.field.layer(index).and_then(|t| t.to_css());
        if let (Some(layer), Some(css)) = (self.layers.get(index), css) {
            dom::set_style(layer, "transform", &css);
        }
    }
}

/// Pointer-driven drift of the decorative layers, updated once per frame.
pub struct Parallax {
    ctx: Rc<RefCell<ParallaxContext>>,
    task: AnimationTask,
    listeners: Vec<Listener>,
}

impl Parallax {
    pub fn start(
        document: &web::Document,
        selector: &str,
        params: ParallaxParams,
    ) -> Option<Self> {
        let layers = dom::query_all(document, selector);
        if layers.is_empty() {
            log::debug!("[parallax] no elements match {}", selector);
            return None;
        }
        let count = layers.len();
        let ctx = Rc::new(RefCell::new(ParallaxContext {
            field: ParallaxField::new(count, params),
            layers,
            pointer: PointerState::default(),
        }));

        let ctx_move = ctx.clone();
        let on_move = Listener::new(document.as_ref(), "mousemove", move |ev| {
            let Some(ev) = ev.dyn_ref::<web::MouseEvent>() else {
                return;
            };
            let Some((w, h)) = dom::viewport_size() else {
                return;
            };
            ctx_move
                .borrow_mut()
                .pointer
                .on_move(ev.client_x() as f64, ev.client_y() as f64, w, h);
        });

        let ctx_leave = ctx.clone();
        let on_leave = Listener::new(document.as_ref(), "mouseleave", move |_ev| {
            ctx_leave.borrow_mut().pointer.on_leave();
        });

        let ctx_frame = ctx.clone();
        let task = frame::start_loop(move || ctx_frame.borrow_mut().frame());

        log::info!(
            "[parallax] layers={} base_speed={} step={} amplitude={}",
            count,
            params.base_speed,
            params.speed_step,
            params.amplitude
        );
        Some(Self {
            ctx,
            task,
            listeners: vec![on_move, on_leave],
        })
    }

    /// Clear every layer's transform once and stop following the pointer.
    pub fn suspend(&self) {
        let mut ctx = self.ctx.borrow_mut();
        let cleared = ctx.field.suspend();
        for i in 0..cleared {
            ctx.write(i);
        }
        log::info!("[parallax] suspended, cleared {} layers", cleared);
    }
}

impl Effect for Parallax {
    fn name(&self) -> &'static str {
        "parallax"
    }

    fn stop(&mut self) {
        self.task.cancel();
        self.listeners.clear();
    }
}
