/// Backing size for the canvas at startup, never smaller than 1x1.
pub fn initial_backing_size(client_width: i32, client_height: i32) -> (u32, u32) {
    (client_width.max(1) as u32, client_height.max(1) as u32)
}

/// Backing size after a window resize.
///
/// `None` when the container has collapsed (hidden or zero height). The canvas
/// and the engine then keep their previous size.
pub fn resize_backing_size(client_width: i32, client_height: i32) -> Option<(u32, u32)> {
    if client_width <= 0 || client_height <= 0 {
        return None;
    }
    Some((client_width as u32, client_height as u32))
}
