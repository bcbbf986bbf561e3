use gloo::events::EventListener;
use web_sys as web;

/// Calls `handler(hidden)` on every `visibilitychange`. Dropping the returned
/// listener detaches it.
pub fn on_visibility_change(
    document: &web::Document,
    mut handler: impl FnMut(bool) + 'static,
) -> EventListener {
    let doc = document.clone();
    EventListener::new(document, "visibilitychange", move |_event| {
        handler(doc.hidden());
    })
}
