//! Aspect-preserving fit of content into a fixed container.
//!
//! Computes the size and top-left offset at which content (an image) is drawn
//! inside a container (the canvas). Pure geometry: no pixel operations and no
//! allocations, so it works under `no_std`.
//!
//! # Example
//!
//! ```
//! use memefit::{fit, Placement};
//!
//! // A portrait image on the 400×400 meme canvas: full height, centered horizontally.
//! let placement = fit(400.0, 400.0, 100.0, 200.0).unwrap();
//! assert_eq!(placement, Placement::new(200.0, 400.0, 100.0, 0.0));
//! ```

use core::fmt;

/// Relative tolerance used by containment checks.
const EPSILON: f64 = 1e-9;

/// Which side of the fit a dimension belongs to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Role {
    /// The fixed drawing surface.
    Container,
    /// The content being fitted.
    Content,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Container => f.write_str("container"),
            Self::Content => f.write_str("content"),
        }
    }
}

/// Horizontal or vertical extent.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Width,
    Height,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Width => f.write_str("width"),
            Self::Height => f.write_str("height"),
        }
    }
}

/// Fit computation error.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum FitError {
    /// A width or height is zero, negative, NaN or infinite.
    #[error("{role} {axis} must be a positive finite number, got {value}")]
    InvalidDimension { role: Role, axis: Axis, value: f64 },
    /// The content's aspect ratio is too extreme to scale into the container:
    /// one side of the placement rounds to zero or overflows.
    #[error("content {content_width}x{content_height} cannot be scaled into the container (placement {width}x{height})")]
    DegeneratePlacement {
        content_width: f64,
        content_height: f64,
        width: f64,
        height: f64,
    },
}

/// Content shape, as seen by [`FitMode::Classic`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Taller than wide (aspect ratio below 1).
    Portrait,
    /// Wider than tall, or exactly square.
    Landscape,
}

/// Width × height in pixels.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
}

impl Dimensions {
    /// Create new dimensions. Validity is checked when they are used in a fit.
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Width divided by height.
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Portrait when the aspect ratio is strictly below 1, landscape otherwise.
    pub fn shape(&self) -> Shape {
        if self.aspect_ratio() < 1.0 {
            Shape::Portrait
        } else {
            Shape::Landscape
        }
    }

    pub fn is_square(&self) -> bool {
        self.width == self.height
    }

    /// Check that both extents are positive and finite.
    pub fn validate(&self, role: Role) -> Result<(), FitError> {
        check_extent(self.width, role, Axis::Width)?;
        check_extent(self.height, role, Axis::Height)?;
        Ok(())
    }
}

fn check_extent(value: f64, role: Role, axis: Axis) -> Result<(), FitError> {
    // NaN fails the comparison, infinities fail is_finite.
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(FitError::InvalidDimension { role, axis, value })
    }
}

/// Where and how large to draw content inside a container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Placement {
    /// Scaled content width.
    pub width: f64,
    /// Scaled content height.
    pub height: f64,
    /// Left edge of the content, relative to the container.
    pub start_x: f64,
    /// Top edge of the content, relative to the container.
    pub start_y: f64,
}

impl Placement {
    pub const fn new(width: f64, height: f64, start_x: f64, start_y: f64) -> Self {
        Self {
            width,
            height,
            start_x,
            start_y,
        }
    }

    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Right edge (`start_x + width`).
    pub fn right(&self) -> f64 {
        self.start_x + self.width
    }

    /// Bottom edge (`start_y + height`).
    pub fn bottom(&self) -> f64 {
        self.start_y + self.height
    }

    /// Whether the placement lies inside the container, within float tolerance.
    pub fn is_within(&self, container: Dimensions) -> bool {
        let (over_x, over_y) = self.overflow(container);
        over_x == 0.0 && over_y == 0.0
    }

    /// How far the placement spills past the container on each axis.
    ///
    /// Counts both edges; `(0.0, 0.0)` when contained. Spill smaller than the
    /// float tolerance is reported as zero.
    pub fn overflow(&self, container: Dimensions) -> (f64, f64) {
        let tolerance = EPSILON * container.width.max(container.height).max(1.0);
        let spill = |near: f64, far: f64, limit: f64| {
            let total = (-near).max(0.0) + (far - limit).max(0.0);
            if total <= tolerance { 0.0 } else { total }
        };
        (
            spill(self.start_x, self.right(), container.width),
            spill(self.start_y, self.bottom(), container.height),
        )
    }
}

/// How the constraining axis is chosen.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum FitMode {
    /// Choose the axis from the content's shape alone: portrait content fills
    /// the container height, landscape and square content fill the width.
    ///
    /// Exact for square containers. On a non-square container the scaled
    /// content can exceed the container on the other axis; the result is
    /// returned unchanged and [`Placement::overflow`] reports the spill.
    #[default]
    Classic,
    /// Choose the axis whose scale factor is smaller, so the content always
    /// lies inside the container.
    Contain,
}

/// Fit configuration.
///
/// # Example
///
/// ```
/// use memefit::{Dimensions, Fit, FitMode, Placement};
///
/// let placement = Fit::new(FitMode::Contain)
///     .compute(Dimensions::new(400.0, 200.0), Dimensions::new(50.0, 50.0))
///     .unwrap();
/// assert_eq!(placement, Placement::new(200.0, 200.0, 100.0, 0.0));
/// ```
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Fit {
    pub mode: FitMode,
}

impl Fit {
    pub const fn new(mode: FitMode) -> Self {
        Self { mode }
    }

    /// Compute the placement of `content` inside `container`.
    pub fn compute(&self, container: Dimensions, content: Dimensions) -> Result<Placement, FitError> {
        container.validate(Role::Container)?;
        content.validate(Role::Content)?;

        let aspect_ratio = content.aspect_ratio();
        let height_constrains = match self.mode {
            FitMode::Classic => aspect_ratio < 1.0,
            FitMode::Contain => {
                let scale_w = container.width / content.width;
                let scale_h = container.height / content.height;
                scale_w > scale_h
            }
        };

        let placement = if height_constrains {
            // Full height, centered horizontally.
            let width = container.height * aspect_ratio;
            Placement {
                width,
                height: container.height,
                start_x: (container.width - width) / 2.0,
                start_y: 0.0,
            }
        } else {
            // Full width, centered vertically.
            let height = container.width / aspect_ratio;
            Placement {
                width: container.width,
                height,
                start_x: 0.0,
                start_y: (container.height - height) / 2.0,
            }
        };

        let usable = |v: f64| v.is_finite() && v > 0.0;
        if !(usable(placement.width) && usable(placement.height)) {
            return Err(FitError::DegeneratePlacement {
                content_width: content.width,
                content_height: content.height,
                width: placement.width,
                height: placement.height,
            });
        }
        Ok(placement)
    }
}

/// Fit content of `content_width × content_height` into a container of
/// `container_width × container_height` using [`FitMode::Classic`].
pub fn fit(
    container_width: f64,
    container_height: f64,
    content_width: f64,
    content_height: f64,
) -> Result<Placement, FitError> {
    Fit::new(FitMode::Classic).compute(
        Dimensions::new(container_width, container_height),
        Dimensions::new(content_width, content_height),
    )
}
