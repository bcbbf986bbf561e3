use crate::error::FxError;
use smallvec::SmallVec;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn html_element(document: &web::Document, element_id: &str) -> Option<web::HtmlElement> {
    document
        .get_element_by_id(element_id)
        .and_then(|el| el.dyn_into::<web::HtmlElement>().ok())
}

/// Look up every id, reporting all missing ones at once.
pub fn require_elements<const N: usize>(
    document: &web::Document,
    ids: [&'static str; N],
) -> Result<[web::HtmlElement; N], FxError> {
    let mut found = Vec::with_capacity(N);
    let mut missing: SmallVec<[&'static str; 4]> = SmallVec::new();
    for id in ids {
        match html_element(document, id) {
            Some(el) => found.push(el),
            None => missing.push(id),
        }
    }
    if !missing.is_empty() {
        return Err(FxError::MissingElements(missing));
    }
    found
        .try_into()
        .map_err(|_| FxError::missing(ids.iter().copied()))
}

/// All elements matching `selector` that are `HtmlElement`s.
pub fn query_all(
    document: &web::Document,
    selector: &str,
) -> Result<Vec<web::HtmlElement>, FxError> {
    let list = document.query_selector_all(selector).map_err(js_error)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<web::HtmlElement>().ok())
        .collect())
}

#[inline]
pub fn set_style(el: &web::HtmlElement, property: &str, value: &str) {
    _ = el.style().set_property(property, value);
}

#[inline]
pub fn px(value: i32) -> String {
    format!("{}px", value)
}

pub fn js_error(e: JsValue) -> FxError {
    FxError::Js(format!("{:?}", e))
}
