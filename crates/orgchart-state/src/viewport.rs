#![forbid(unsafe_code)]

//! Pan, zoom, and fit-to-view geometry.
//!
//! The viewport owns a bounded zoom factor, a scroll offset, and the state
//! of an in-flight pan gesture. All geometry is abstract canvas space: node
//! bounds are measured by the rendering layer and passed in, scroll offsets
//! come back out.
//!
//! # Gesture model
//!
//! A pan is a continuous drag: `pan_start` on press, `pan_move` per pointer
//! move (inverse-drag — the content follows the pointer, so scroll decreases
//! by the pointer delta), `pan_end` on release or when the pointer leaves
//! the surface. A gesture that travelled past the click-suppression
//! threshold must not also count as a node click; `pan_end` reports which
//! kind of interaction it was.

use orgchart_core::geometry::{Bounds, Point};

/// Lower zoom bound.
pub const MIN_ZOOM: f64 = 0.5;
/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 2.0;

/// Configuration for pan gesture detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanConfig {
    /// Minimum Manhattan travel before the gesture suppresses the click
    /// (default: 3.0).
    pub click_threshold: f64,
}

impl Default for PanConfig {
    fn default() -> Self {
        Self {
            click_threshold: 3.0,
        }
    }
}

/// Result of a fit-to-view computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Fit {
    /// Chosen zoom factor; never above 1.0 (fit only zooms out).
    pub zoom: f64,
    /// Scroll offset aligning the content center with the container center.
    pub scroll: Point,
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct PanSession {
    start: Point,
    last: Point,
}

/// Zoom factor, scroll offset, and pan gesture state.
#[derive(Debug, Clone, PartialEq)]
pub struct Viewport {
    zoom: f64,
    scroll: Point,
    pan: Option<PanSession>,
    dragged: bool,
    config: PanConfig,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new()
    }
}

impl Viewport {
    /// A viewport at 100% zoom and zero scroll.
    #[must_use]
    pub fn new() -> Self {
        Self {
            zoom: 1.0,
            scroll: Point::ZERO,
            pan: None,
            dragged: false,
            config: PanConfig::default(),
        }
    }

    /// Override the pan gesture configuration.
    #[must_use]
    pub fn with_pan_config(mut self, config: PanConfig) -> Self {
        self.config = config;
        self
    }

    /// Current zoom factor.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Current scroll offset.
    #[must_use]
    pub fn scroll(&self) -> Point {
        self.scroll
    }

    /// Whether a pan gesture is in flight.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.pan.is_some()
    }

    /// Adjust zoom by a signed delta, clamped to `[MIN_ZOOM, MAX_ZOOM]`.
    ///
    /// Returns the new zoom factor.
    pub fn zoom_by(&mut self, delta: f64) -> f64 {
        self.zoom = (self.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        self.zoom
    }

    /// Fit the given node bounds into `container`.
    ///
    /// Computes the bounding box of all supplied bounds, zooms out (never
    /// past 100% in) until it fits, and scrolls so the box center aligns
    /// with the container center at that zoom. Returns `None` — a no-op —
    /// when no bounds are supplied (nothing visible).
    pub fn fit_to_view(
        &mut self,
        node_bounds: impl IntoIterator<Item = Bounds>,
        container: Bounds,
    ) -> Option<Fit> {
        let bbox = Bounds::enclosing(node_bounds)?;

        // Degenerate boxes produce an infinite ratio; the 1.0 cap absorbs it.
        let zoom_x = container.width / bbox.width;
        let zoom_y = container.height / bbox.height;
        let zoom = zoom_x.min(zoom_y).min(1.0);

        let center = bbox.center();
        let scroll = Point::new(
            center.x - container.width / (2.0 * zoom),
            center.y - container.height / (2.0 * zoom),
        );

        self.zoom = zoom;
        self.scroll = scroll;
        Some(Fit { zoom, scroll })
    }

    /// Begin a pan gesture at the given pointer position.
    pub fn pan_start(&mut self, point: Point) {
        self.pan = Some(PanSession {
            start: point,
            last: point,
        });
        self.dragged = false;
    }

    /// Continue a pan gesture.
    ///
    /// Scroll decreases by exactly the pointer delta since the previous
    /// move; the last-point reference then advances. Returns the applied
    /// delta, or `None` when no gesture is active (stray move events are
    /// ignored).
    pub fn pan_move(&mut self, point: Point) -> Option<Point> {
        let session = self.pan.as_mut()?;
        let delta = point.delta(session.last);
        session.last = point;
        if point.manhattan_distance(session.start) >= self.config.click_threshold {
            self.dragged = true;
        }
        self.scroll.x -= delta.x;
        self.scroll.y -= delta.y;
        Some(delta)
    }

    /// End the pan gesture.
    ///
    /// Returns `true` if the gesture travelled past the click-suppression
    /// threshold — the release must then not be treated as a node click.
    pub fn pan_end(&mut self) -> bool {
        let was_drag = self.pan.is_some() && self.dragged;
        self.pan = None;
        self.dragged = false;
        was_drag
    }

    /// Reset to the initial view (dataset change).
    pub fn reset(&mut self) {
        let config = self.config;
        *self = Self::new().with_pan_config(config);
    }
}
