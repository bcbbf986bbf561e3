use crate::constants::HERO_CONTAINER_ID;
use crate::error::FxError;
use fnv::FnvHashMap;
use glam::Vec2;
use std::str::FromStr;

/// How a layer turns its displacement into a CSS transform.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LayerKind {
    /// `default`: shifts freely on both axes.
    #[default]
    Free,
    /// `earth`: horizontal only, stays anchored to the bottom center.
    Earth,
    /// `container`: both axes while staying centered on its own box.
    Container,
}

impl LayerKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Free => "default",
            Self::Earth => "earth",
            Self::Container => "container",
        }
    }

    pub fn transform(self, shift: Vec2) -> String {
        match self {
            Self::Free => format!("translate({}px, {}px)", shift.x, shift.y),
            Self::Earth => format!("translateX(calc(-50% + {}px))", shift.x),
            Self::Container => format!(
                "translate(calc(-50% + {}px), calc(-50% + {}px))",
                shift.x, shift.y
            ),
        }
    }
}

impl FromStr for LayerKind {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "default" => Ok(Self::Free),
            "earth" => Ok(Self::Earth),
            "container" => Ok(Self::Container),
            other => Err(FxError::UnknownLayerKind(other.to_string())),
        }
    }
}

/// Viewport-space box of the reference container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContainerRect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

/// Pointer offset from the container center, normalized so the container
/// edges sit at -1 and 1. Points outside the container go past that range.
#[inline]
pub fn pointer_offset(rect: ContainerRect, client: Vec2) -> Vec2 {
    let half = Vec2::new(rect.width, rect.height) * 0.5;
    if half.x <= 0.0 || half.y <= 0.0 {
        return Vec2::ZERO;
    }
    let local = client - Vec2::new(rect.left, rect.top);
    (local - half) / half
}

/// Registered element plus its movement settings.
#[derive(Clone, Debug)]
pub struct Layer<E> {
    pub element: E,
    pub multiplier: f32,
    pub kind: LayerKind,
}

impl<E> Layer<E> {
    #[inline]
    pub fn displacement(&self, offset: Vec2) -> Vec2 {
        offset * self.multiplier
    }

    pub fn transform_for(&self, offset: Vec2) -> String {
        self.kind.transform(self.displacement(offset))
    }
}

/// Static description of a layer, used for the default registrations.
#[derive(Clone, Debug, PartialEq)]
pub struct LayerSpec {
    pub id: String,
    pub multiplier: f32,
    pub kind: LayerKind,
}

impl LayerSpec {
    pub fn new(id: &str, multiplier: f32, kind: LayerKind) -> Self {
        Self {
            id: id.to_string(),
            multiplier,
            kind,
        }
    }
}

/// Id-keyed set of layers. Iteration order is unspecified.
#[derive(Debug)]
pub struct ParallaxRegistry<E> {
    layers: FnvHashMap<String, Layer<E>>,
}

impl<E> Default for ParallaxRegistry<E> {
    fn default() -> Self {
        Self {
            layers: FnvHashMap::default(),
        }
    }
}

impl<E> ParallaxRegistry<E> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `element` under `id`; a missing element is skipped with a warning.
    /// Returns whether a layer was added.
    pub fn register(
        &mut self,
        id: &str,
        element: Option<E>,
        multiplier: f32,
        kind: LayerKind,
    ) -> bool {
        let Some(element) = element else {
            log::warn!("[parallax] element with id '{}' not found", id);
            return false;
        };
        let layer = Layer {
            element,
            multiplier,
            kind,
        };
        if self.insert(id, layer).is_some() {
            log::debug!("[parallax] replaced layer '{}'", id);
        } else {
            log::debug!("[parallax] registered '{}' as {}", id, kind.as_str());
        }
        true
    }

    /// Inserts a layer, returning the one it replaced.
    pub fn insert(&mut self, id: &str, layer: Layer<E>) -> Option<Layer<E>> {
        self.layers.insert(id.to_string(), layer)
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    pub fn clear(&mut self) {
        self.layers.clear();
    }

    /// Transform for every layer given the current pointer offset.
    pub fn frame(&self, offset: Vec2) -> impl Iterator<Item = (&E, String)> + '_ {
        self.layers
            .values()
            .map(move |layer| (&layer.element, layer.transform_for(offset)))
    }
}

/// Registers `layers` only once the reference container is known, so a page
/// without `#hero-container` keeps an empty registry.
pub fn attach_layers<C, E>(
    registry: &mut ParallaxRegistry<E>,
    container: Option<C>,
    layers: &[LayerSpec],
    mut lookup: impl FnMut(&str) -> Option<E>,
) -> Result<C, FxError> {
    let container = container.ok_or_else(|| FxError::missing([HERO_CONTAINER_ID]))?;
    for layer in layers {
        registry.register(&layer.id, lookup(&layer.id), layer.multiplier, layer.kind);
    }
    Ok(container)
}
