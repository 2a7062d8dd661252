use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

type TickSlot = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;

/// A callback that runs on every display refresh until cancelled.
///
/// Each frame schedules the next one through `requestAnimationFrame`.
/// `cancel` must not be called from inside the step itself.
pub struct AnimationTask {
    cancelled: Rc<Cell<bool>>,
    pending: Rc<Cell<Option<i32>>>,
    tick: TickSlot,
}

impl AnimationTask {
    pub fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        if let (Some(handle), Some(w)) = (self.pending.take(), web::window()) {
            _ = w.cancel_animation_frame(handle);
        }
        // Drops the closure and with it the closure's reference to `tick`.
        self.tick.borrow_mut().take();
    }
}

impl Drop for AnimationTask {
    fn drop(&mut self) {
        self.cancel();
    }
}

fn request_frame(tick: &TickSlot) -> Option<i32> {
    let window = web::window()?;
    let slot = tick.borrow();
    let callback = slot.as_ref()?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .ok()
}

pub fn start_loop(mut step: impl FnMut() + 'static) -> AnimationTask {
    let tick: TickSlot = Rc::new(RefCell::new(None));
    let cancelled = Rc::new(Cell::new(false));
    let pending = Rc::new(Cell::new(None));

    let tick_clone = tick.clone();
    let cancelled_tick = cancelled.clone();
    let pending_tick = pending.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        pending_tick.set(None);
        if cancelled_tick.get() {
            return;
        }
        step();
        pending_tick.set(request_frame(&tick_clone));
    }) as Box<dyn FnMut()>));

    pending.set(request_frame(&tick));
    AnimationTask {
        cancelled,
        pending,
        tick,
    }
}
