use crate::constants::VISIBILITY_THRESHOLD;
use crate::dom;
use crate::frame::SharedScheduler;
use crate::reveal::RevealLabels;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Resync the canvas and reinitialize particles whenever the window resizes.
pub fn wire_resize(
    window: &web::Window,
    scheduler: &SharedScheduler,
    canvas: &web::HtmlCanvasElement,
    container: &web::Element,
) {
    let scheduler = scheduler.clone();
    let canvas = canvas.clone();
    let container = container.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some((w, h)) = dom::resync_canvas_to_container(&canvas, &container) else {
            log::debug!("[loop] container collapsed, keeping previous size");
            return;
        };
        scheduler.borrow_mut().resize(w, h);
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", closure.as_ref().unchecked_ref());
    closure.forget();
}

/// Pause the loop while the container is off-screen and resume when it returns.
pub fn wire_visibility(scheduler: &SharedScheduler, container: &web::Element) {
    let scheduler = scheduler.clone();
    let closure = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let Some(entry) = entries
            .iter()
            .last()
            .and_then(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
        else {
            return;
        };
        let mut s = scheduler.borrow_mut();
        if entry.is_intersecting() {
            s.resume();
        } else {
            s.pause();
        }
    }) as Box<dyn FnMut(js_sys::Array)>);

    let init = web::IntersectionObserverInit::new();
    init.set_threshold(&wasm_bindgen::JsValue::from_f64(VISIBILITY_THRESHOLD));
    match web::IntersectionObserver::new_with_options(closure.as_ref().unchecked_ref(), &init) {
        Ok(observer) => {
            observer.observe(container);
            closure.forget();
        }
        Err(e) => log::warn!("[loop] visibility gating unavailable: {:?}", e),
    }
}

/// Arm one-shot timers for timer-triggered reveals. Each fires through the
/// scheduler's emitter, so a target already revealed is left alone.
pub fn arm_timer_reveals(window: &web::Window, scheduler: &SharedScheduler, labels: &Rc<RevealLabels>) {
    let Some(delays) = scheduler.borrow().timer_reveals() else {
        return;
    };
    for (target, delay_ms) in delays {
        let scheduler = scheduler.clone();
        let labels = labels.clone();
        let closure = Closure::wrap(Box::new(move || {
            if scheduler.borrow_mut().reveal_due(target) {
                labels.show(target);
            }
        }) as Box<dyn FnMut()>);
        let armed = window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.as_ref().unchecked_ref(),
            delay_ms.min(i32::MAX as u32) as i32,
        );
        if let Err(e) = armed {
            log::warn!("[reveal] could not arm timer for {:?}: {:?}", target, e);
        }
        closure.forget();
    }
}
