use smallvec::SmallVec;

/// Failures a controller can hit while attaching to the page.
///
/// None of these are fatal: the composition layer logs them and the affected
/// effect simply does not appear.
#[derive(Debug, thiserror::Error)]
pub enum FxError {
    #[error("missing elements: {}", .0.join(", "))]
    MissingElements(SmallVec<[&'static str; 4]>),
    #[error("unknown parallax layer kind `{0}`")]
    UnknownLayerKind(String),
    #[error("no window or document available")]
    NoDocument,
    #[error("DOM call failed: {0}")]
    Js(String),
}

impl FxError {
    pub fn missing(ids: impl IntoIterator<Item = &'static str>) -> Self {
        FxError::MissingElements(ids.into_iter().collect())
    }
}
