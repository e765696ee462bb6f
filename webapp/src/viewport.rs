use tracing::warn;

// current window width in css pixels
//
// read on the first render and again on every resize, so the breakpoint is always
// measured against innerWidth like the --bp-* thresholds.  outside a browser window we
// fall back to 0, which classifies as the smallest (mobile) layout
pub fn viewport_width() -> f64 {
    let width = web_sys::window()
        .and_then(|window| window.inner_width().ok())
        .and_then(|width| width.as_f64());

    match width {
        Some(width) => width,
        None => {
            warn!("could not read window.innerWidth, assuming a mobile viewport");
            0.0
        }
    }
}
