/// DOM ids, selectors and class names the landing page markup provides.
///
/// Every controller looks its elements up through these names; keeping them
/// in one place keeps the Rust side and the HTML in sync.
// Spark animation
pub const HERO_HAND_ID: &str = "hero-hand";
pub const HERO_TV_ID: &str = "hero-tv";
pub const HERO_SPARK_ID: &str = "hero-spark";

// Parallax
pub const HERO_CONTAINER_ID: &str = "hero-container";
pub const TV_HAND_CONTAINER_ID: &str = "tv-hand-container";
pub const HERO_BG_ID: &str = "hero-bg";
pub const HERO_EARTH_ID: &str = "hero-earth";

// Cursor
pub const CUSTOM_CURSOR_ID: &str = "custom-cursor";

// Video modal (opened from `HERO_TV_ID`)
pub const VIDEO_MODAL_ID: &str = "video-modal";
pub const CLOSE_MODAL_ID: &str = "close-modal";
pub const MODAL_VIDEO_ID: &str = "modal-video";

// Carousels
pub const CAROUSEL_SELECTOR: &str = ".carousel-wrapper";

// Classes toggled on the spark overlay
pub const SPARK_HIDDEN_CLASS: &str = "spark-hidden";
pub const SPARK_EFFECT_CLASS: &str = "spark-effect";

// Cursor affordances on carousels
pub const CURSOR_GRAB: &str = "grab";
pub const CURSOR_AUTO: &str = "auto";
