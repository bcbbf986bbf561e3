use glam::Vec2;
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn as_mouse(event: &web::Event) -> Option<&web::MouseEvent> {
    event.dyn_ref::<web::MouseEvent>()
}

/// Viewport coordinates, matching `getBoundingClientRect`.
#[inline]
pub fn client_pos(ev: &web::MouseEvent) -> Vec2 {
    Vec2::new(ev.client_x() as f32, ev.client_y() as f32)
}

/// Document coordinates, including scroll.
#[inline]
pub fn page_pos(ev: &web::MouseEvent) -> (i32, i32) {
    (ev.page_x(), ev.page_y())
}

/// True when the click landed on `element` itself rather than a descendant.
pub fn targets_exactly(event: &web::Event, element: &web::HtmlElement) -> bool {
    let own: &wasm_bindgen::JsValue = element.as_ref();
    event
        .target()
        .map(wasm_bindgen::JsValue::from)
        .is_some_and(|target| &target == own)
}
