use crate::constants::{HERO_BG_ID, HERO_EARTH_ID, TV_HAND_CONTAINER_ID};
use crate::core::constants::{
    BACKGROUND_MULTIPLIER, DRAG_SENSITIVITY, EARTH_MULTIPLIER, MODAL_VIDEO_URL, TV_HAND_MULTIPLIER,
};
use crate::core::parallax::{LayerKind, LayerSpec};
use crate::core::spark::SparkTiming;

/// Tunables for every controller on the page.
#[derive(Clone, Debug, PartialEq)]
pub struct FxConfig {
    pub spark: SparkTiming,
    pub layers: Vec<LayerSpec>,
    pub drag_sensitivity: f64,
    pub video_url: String,
}

impl Default for FxConfig {
    fn default() -> Self {
        Self {
            spark: SparkTiming::default(),
            layers: vec![
                LayerSpec::new(TV_HAND_CONTAINER_ID, TV_HAND_MULTIPLIER, LayerKind::Container),
                LayerSpec::new(HERO_BG_ID, BACKGROUND_MULTIPLIER, LayerKind::Free),
                LayerSpec::new(HERO_EARTH_ID, EARTH_MULTIPLIER, LayerKind::Earth),
            ],
            drag_sensitivity: DRAG_SENSITIVITY,
            video_url: MODAL_VIDEO_URL.to_string(),
        }
    }
}

impl FxConfig {
    pub fn with_video_url(mut self, url: impl Into<String>) -> Self {
        self.video_url = url.into();
        self
    }
}
