#![cfg(target_arch = "wasm32")]
use crate::constants::*;
use crate::frame::{RafHost, SharedScheduler};
use crate::options::{immediate_reveals, HostOptions};
use crate::reveal::RevealLabels;
use crate::surface::CanvasSurface;
use hero_core::{HeroEngine, Scheduler};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

mod constants;
mod dom;
mod events;
mod frame;
mod options;
mod reveal;
mod sizing;
mod surface;

thread_local! {
    static HERO: RefCell<Option<SharedScheduler>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("hero-web starting");

    // Missing markup or a bad config leaves the page as-is: no animation, no error.
    if let Err(e) = init() {
        log::warn!("hero disabled: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let (window, document) = dom::window_document().ok_or_else(|| anyhow::anyhow!("no document"))?;

    let container = document
        .get_element_by_id(CONTAINER_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CONTAINER_ID))?;
    let canvas: web::HtmlCanvasElement = document
        .get_element_by_id(CANVAS_ID)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", CANVAS_ID))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow::anyhow!("#{} is not a canvas: {:?}", CANVAS_ID, e))?;
    let ctx = canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;

    let options = HostOptions::from_attributes(
        container.get_attribute(REVEAL_ATTR).as_deref(),
        container.get_attribute(GATED_ATTR).as_deref(),
        dom::prefers_reduced_motion(&window, REDUCED_MOTION_QUERY),
    );
    let labels = Rc::new(RevealLabels::find(&container));
    if !options.animates() {
        labels.show_all(&immediate_reveals());
        log::info!("[loop] reduced motion, animation disabled");
        return Ok(());
    }

    let (w, h) = dom::sync_canvas_to_container(&canvas, &container);
    let engine = match HeroEngine::new(&options.hero_config(), w, h, rand::random()) {
        Ok(engine) => engine,
        Err(e) => {
            labels.show_all(&immediate_reveals());
            return Err(e.into());
        }
    };
    let scheduler: SharedScheduler = Rc::new(RefCell::new(Scheduler::new(
        RafHost::new(window.clone()),
        engine,
    )));

    frame::install_loop(&scheduler, CanvasSurface::new(ctx), labels.clone());

    let mut revealed = Vec::new();
    scheduler.borrow_mut().start(false, &mut revealed);
    labels.show_all(&revealed);

    events::arm_timer_reveals(&window, &scheduler, &labels);
    events::wire_resize(&window, &scheduler, &canvas, &container);
    if options.visibility_gated {
        events::wire_visibility(&scheduler, &container);
    }
    log::info!(
        "[loop] running (gated={}, phase_reveal={})",
        options.visibility_gated,
        options.phase_reveal
    );

    HERO.with(|hero| *hero.borrow_mut() = Some(scheduler));
    Ok(())
}

fn with_hero(f: impl FnOnce(&SharedScheduler)) {
    HERO.with(|hero| {
        if let Some(s) = hero.borrow().as_ref() {
            f(s);
        }
    });
}

/// Freeze the animation, e.g. when the host knows the hero is hidden.
#[wasm_bindgen]
pub fn hero_pause() {
    with_hero(|s| {
        s.borrow_mut().pause();
    });
}

#[wasm_bindgen]
pub fn hero_resume() {
    with_hero(|s| {
        s.borrow_mut().resume();
    });
}

/// Tear the animation down before the hosting page or component unmounts.
#[wasm_bindgen]
pub fn hero_stop() {
    let taken = HERO.with(|hero| hero.borrow_mut().take());
    if let Some(s) = taken {
        let mut s = s.borrow_mut();
        s.stop();
        s.host().release();
    }
}
