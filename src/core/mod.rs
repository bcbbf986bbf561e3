pub mod carousel;
pub mod config;
pub mod constants;
pub mod lifecycle;
pub mod modal;
/// Pointer-driven parallax math. The web side converts a `DomRect` into a
/// `ContainerRect` and writes the returned transforms into `style.transform`.
pub mod parallax;
pub mod scheduler;
/// Spark flash loop. The hand is animated by a CSS keyframe we never touch;
/// the loop only flashes the spark at the impact point of each cycle.
pub mod spark;

pub use config::FxConfig;
pub use lifecycle::Lifecycle;
