// Shared timing and tuning constants for the hero effects.

// Spark loop timing (milliseconds)
pub const HAND_ANIMATION_DURATION_MS: u32 = 2500; // one CSS hand-smack cycle
pub const SPARK_DURATION_MS: u32 = 750; // how long a spark stays visible
pub const IMPACT_DELAY_MS: u32 = 800; // hand hits the TV this far into the cycle

// Parallax layer multipliers (pixels of travel at the container edge)
pub const TV_HAND_MULTIPLIER: f32 = 150.0;
pub const BACKGROUND_MULTIPLIER: f32 = 25.0;
pub const EARTH_MULTIPLIER: f32 = 100.0;

// Carousel drag: scroll pixels per pointer pixel
pub const DRAG_SENSITIVITY: f64 = 2.0;

// Video shown when the hero TV is clicked
pub const MODAL_VIDEO_URL: &str = "https://www.youtube.com/embed/dQw4w9WgXcQ";
