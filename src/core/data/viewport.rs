use crate::core::data::cursor::ScreenPoint;
use crate::core::data::window_dimensions::WindowDimensions;
use thiserror::Error;

/// Multiplicative step applied to the viewport extent per wheel notch.
pub const ZOOM_STEP: f64 = 1.1;

pub const DEFAULT_LEFT: f64 = -2.0;
pub const DEFAULT_BOTTOM: f64 = -1.0;
pub const DEFAULT_WIDTH: f64 = 3.0;
pub const DEFAULT_HEIGHT: f64 = 2.0;

#[derive(Debug, Error, Copy, Clone, PartialEq)]
pub enum ViewportError {
    #[error("viewport extent must be positive and finite: {width}x{height}")]
    InvalidExtent { width: f64, height: f64 },
    #[error("viewport origin must be finite: ({left}, {bottom})")]
    NonFiniteOrigin { left: f64, bottom: f64 },
    #[error("window width must be non-zero to derive a screen-to-world scale")]
    EmptyWindow,
}

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct WorldPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Scrolling toward the user zooms in.
    #[must_use]
    pub fn from_wheel(toward_user: bool) -> Self {
        if toward_user { Self::In } else { Self::Out }
    }

    #[must_use]
    pub fn factor(self) -> f64 {
        match self {
            Self::In => 1.0 / ZOOM_STEP,
            Self::Out => ZOOM_STEP,
        }
    }
}

/// The visible rectangle of the complex plane.
///
/// `left`/`bottom` locate the lower-left corner in world units. Width and height scale
/// independently: the aspect ratio is never corrected to match the window, so a resize
/// only changes how many world units one screen pixel covers.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Viewport {
    left: f64,
    bottom: f64,
    width: f64,
    height: f64,
    screen_to_world_scale: f64,
}

impl Viewport {
    pub fn new(
        left: f64,
        bottom: f64,
        width: f64,
        height: f64,
        window_width: u32,
    ) -> Result<Self, ViewportError> {
        if !valid_extent(width, height) {
            return Err(ViewportError::InvalidExtent { width, height });
        }

        if !left.is_finite() || !bottom.is_finite() {
            return Err(ViewportError::NonFiniteOrigin { left, bottom });
        }

        if window_width == 0 {
            return Err(ViewportError::EmptyWindow);
        }

        Ok(Self {
            left,
            bottom,
            width,
            height,
            screen_to_world_scale: width / f64::from(window_width),
        })
    }

    /// The startup view `{left: -2, bottom: -1, width: 3, height: 2}` for a window.
    pub fn initial(window: WindowDimensions) -> Result<Self, ViewportError> {
        Self::new(
            DEFAULT_LEFT,
            DEFAULT_BOTTOM,
            DEFAULT_WIDTH,
            DEFAULT_HEIGHT,
            window.width,
        )
    }

    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// World units covered by one screen pixel.
    #[must_use]
    pub fn screen_to_world_scale(&self) -> f64 {
        self.screen_to_world_scale
    }

    /// Maps a screen position onto the world using the current rectangle.
    ///
    /// The vertical axis is measured down from the top edge (`height - y * height /
    /// window_height`) and then offset by `bottom`. The shader reconstructs world
    /// positions with the same convention, so this must not be rewritten in terms of a
    /// symmetric `bottom + ...` expression.
    #[must_use]
    pub fn screen_to_world(&self, point: ScreenPoint, window: WindowDimensions) -> WorldPoint {
        let window_width = f64::from(window.width);
        let window_height = f64::from(window.height);

        WorldPoint {
            x: point.x * self.width / window_width + self.left,
            y: self.height - point.y * self.height / window_height + self.bottom,
        }
    }

    /// Drags the view by a screen-space delta.
    ///
    /// Screen Y grows downward while world Y grows upward, hence the sign flip on the
    /// vertical component.
    pub fn pan_by_screen_delta(&mut self, dx_screen: f64, dy_screen: f64) {
        self.left -= dx_screen * self.screen_to_world_scale;
        self.bottom += dy_screen * self.screen_to_world_scale;
    }

    /// Scales the view by `factor` keeping the world point under `cursor` fixed.
    ///
    /// Returns `false` and leaves the view untouched when the window is empty or the
    /// scaled extent would stop being positive and finite.
    pub fn zoom_about(
        &mut self,
        cursor: ScreenPoint,
        window: WindowDimensions,
        factor: f64,
    ) -> bool {
        if window.is_empty() || !factor.is_finite() || factor <= 0.0 {
            return false;
        }

        let anchor = self.screen_to_world(cursor, window);
        let width = self.width * factor;
        let height = self.height * factor;

        if !valid_extent(width, height) {
            return false;
        }

        let left = (self.left - anchor.x) * factor + anchor.x;
        let bottom = (self.bottom - anchor.y) * factor + anchor.y;

        if !left.is_finite() || !bottom.is_finite() {
            return false;
        }

        self.left = left;
        self.bottom = bottom;
        self.width = width;
        self.height = height;
        self.screen_to_world_scale = width / f64::from(window.width);

        true
    }

    pub fn zoom(
        &mut self,
        direction: ZoomDirection,
        cursor: ScreenPoint,
        window: WindowDimensions,
    ) -> bool {
        self.zoom_about(cursor, window, direction.factor())
    }

    /// Rederives the scale for a new window width. The world rectangle is unchanged.
    pub fn resize(&mut self, window_width: u32) {
        if window_width == 0 {
            return;
        }

        self.screen_to_world_scale = self.width / f64::from(window_width);
    }
}

impl Default for Viewport {
    fn default() -> Self {
        let window = WindowDimensions::default();

        Self {
            left: DEFAULT_LEFT,
            bottom: DEFAULT_BOTTOM,
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            screen_to_world_scale: DEFAULT_WIDTH / f64::from(window.width),
        }
    }
}

fn valid_extent(width: f64, height: f64) -> bool {
    width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0
}
