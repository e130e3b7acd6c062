use crate::sizing;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<(web::Window, web::Document)> {
    let window = web::window()?;
    let document = window.document()?;
    Some((window, document))
}

#[inline]
pub fn query(root: &web::Element, selector: &str) -> Option<web::Element> {
    root.query_selector(selector).ok().flatten()
}

/// Match the canvas backing store to the container's client size at startup.
///
/// Returns the new size in canvas pixels, never smaller than 1x1.
pub fn sync_canvas_to_container(
    canvas: &web::HtmlCanvasElement,
    container: &web::Element,
) -> (f32, f32) {
    let (w, h) = sizing::initial_backing_size(container.client_width(), container.client_height());
    set_backing_size(canvas, w, h)
}

/// Resync after a resize. A collapsed container leaves the canvas untouched.
pub fn resync_canvas_to_container(
    canvas: &web::HtmlCanvasElement,
    container: &web::Element,
) -> Option<(f32, f32)> {
    let (w, h) = sizing::resize_backing_size(container.client_width(), container.client_height())?;
    Some(set_backing_size(canvas, w, h))
}

fn set_backing_size(canvas: &web::HtmlCanvasElement, w: u32, h: u32) -> (f32, f32) {
    canvas.set_width(w);
    canvas.set_height(h);
    (w as f32, h as f32)
}

pub fn prefers_reduced_motion(window: &web::Window, query: &str) -> bool {
    window
        .match_media(query)
        .ok()
        .flatten()
        .map(|mq| mq.matches())
        .unwrap_or(false)
}
