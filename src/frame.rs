use crate::reveal::RevealLabels;
use crate::surface::CanvasSurface;
use hero_core::{FrameHost, Scheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut()>>>>;
pub type SharedScheduler = Rc<RefCell<Scheduler<RafHost>>>;

/// [`FrameHost`] backed by `requestAnimationFrame`.
pub struct RafHost {
    window: web::Window,
    callback: FrameCallback,
    handle: Option<i32>,
}

impl RafHost {
    pub fn new(window: web::Window) -> Self {
        Self {
            window,
            callback: Rc::new(RefCell::new(None)),
            handle: None,
        }
    }

    pub fn callback(&self) -> FrameCallback {
        self.callback.clone()
    }

    /// Drop the frame closure, breaking the closure -> scheduler -> host cycle.
    pub fn release(&self) {
        self.callback.borrow_mut().take();
    }
}

impl FrameHost for RafHost {
    fn request_frame(&mut self) {
        let cb = self.callback.borrow();
        let Some(cb) = cb.as_ref() else {
            return;
        };
        match self
            .window
            .request_animation_frame(cb.as_ref().unchecked_ref())
        {
            Ok(id) => self.handle = Some(id),
            Err(e) => log::error!("[loop] requestAnimationFrame failed: {:?}", e),
        }
    }

    fn cancel_frame(&mut self) {
        if let Some(id) = self.handle.take() {
            _ = self.window.cancel_animation_frame(id);
        }
    }
}

/// Install the per-frame closure. Frames run once the scheduler is started.
pub fn install_loop(scheduler: &SharedScheduler, mut surface: CanvasSurface, labels: Rc<RevealLabels>) {
    let callback = scheduler.borrow().host().callback();
    let scheduler_tick = scheduler.clone();
    *callback.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        let mut revealed = Vec::new();
        scheduler_tick
            .borrow_mut()
            .on_frame(&mut surface, &mut revealed);
        labels.show_all(&revealed);
    }) as Box<dyn FnMut()>));
}
