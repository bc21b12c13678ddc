//! Sprite rectangles and the rectangle-to-inset transform.
//!
//! Descriptor files locate every sprite on its sheet with a `SOURCE_RECT`, and
//! optionally the stretchable content area with an `INNER_RECT`. Hamster wants
//! the latter expressed as insets (distance from each outer edge to the
//! matching inner edge), which is what [`InsetTransform`] computes.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Axis-aligned pixel rectangle on a sprite sheet (origin top-left).
///
/// Parsed from descriptor values of the form `"x,y,width,height"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge in pixels
    pub x: i32,
    /// Top edge in pixels
    pub y: i32,
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge (`x + width`), widened so extreme values cannot overflow.
    #[must_use]
    pub fn right(&self) -> i64 {
        i64::from(self.x) + i64::from(self.width)
    }

    /// Bottom edge (`y + height`), widened so extreme values cannot overflow.
    #[must_use]
    pub fn bottom(&self) -> i64 {
        i64::from(self.y) + i64::from(self.height)
    }
}

impl FromStr for Rect {
    type Err = anyhow::Error;

    /// Parses `"x,y,width,height"`. Whitespace around each number is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != 4 {
            anyhow::bail!(
                "Invalid rectangle '{s}'. Expected four comma-separated integers (x,y,width,height)"
            );
        }

        let mut values = [0_i32; 4];
        for (slot, part) in values.iter_mut().zip(&parts) {
            *slot = part
                .parse()
                .context(format!("Invalid rectangle component '{part}' in '{s}'"))?;
        }

        Ok(Self::new(values[0], values[1], values[2], values[3]))
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{},{},{}", self.x, self.y, self.width, self.height)
    }
}

/// Margins from an outer rectangle's edges to an inner rectangle's edges.
///
/// Field order matches the YAML Hamster expects (`top`, `bottom`, `left`, `right`).
/// Margins are `i64`: the difference of two `i32` coordinates always fits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
    /// Distance from outer top edge to inner top edge
    pub top: i64,
    /// Distance from inner bottom edge to outer bottom edge
    pub bottom: i64,
    /// Distance from outer left edge to inner left edge
    pub left: i64,
    /// Distance from inner right edge to outer right edge
    pub right: i64,
}

impl Insets {
    /// All-zero insets.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Substituted for degenerate insets when the fallback policy is enabled.
    pub const DEGENERATE_FALLBACK: Self = Self::new(40, 40, 35, 35);

    /// Creates a new inset quad.
    #[must_use]
    pub const fn new(top: i64, bottom: i64, left: i64, right: i64) -> Self {
        Self {
            top,
            bottom,
            left,
            right,
        }
    }

    /// True when any margin is negative (inner rectangle escapes the outer one).
    #[must_use]
    pub const fn has_negative(&self) -> bool {
        self.top < 0 || self.bottom < 0 || self.left < 0 || self.right < 0
    }
}

/// Rectangle-to-inset transform.
///
/// `replace_degenerate` selects what happens when the inner rectangle is
/// identical to the outer one, i.e. the skin carries no real margin
/// information: `false` yields [`Insets::ZERO`], `true` yields
/// [`Insets::DEGENERATE_FALLBACK`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InsetTransform {
    /// Substitute the fallback quad when inner == outer
    pub replace_degenerate: bool,
}

impl InsetTransform {
    /// Creates a transform with the given degenerate-inset policy.
    #[must_use]
    pub const fn new(replace_degenerate: bool) -> Self {
        Self { replace_degenerate }
    }

    /// Computes insets for `outer` given an optional `inner` rectangle.
    ///
    /// Returns `None` when there is no inner rectangle. Containment is not
    /// checked: an inner rectangle reaching outside `outer` produces negative
    /// margins, which are returned as-is.
    ///
    /// # Examples
    ///
    /// ```
    /// use hamster_skin::models::{Insets, InsetTransform, Rect};
    ///
    /// let outer = Rect::new(10, 20, 100, 100);
    /// let inner = Rect::new(15, 25, 90, 80);
    /// let insets = InsetTransform::default().apply(&outer, Some(&inner));
    /// assert_eq!(insets, Some(Insets::new(5, 15, 5, 5)));
    /// ```
    #[must_use]
    pub fn apply(&self, outer: &Rect, inner: Option<&Rect>) -> Option<Insets> {
        let inner = inner?;

        if inner == outer && self.replace_degenerate {
            return Some(Insets::DEGENERATE_FALLBACK);
        }

        let top = i64::from(inner.y) - i64::from(outer.y);
        let left = i64::from(inner.x) - i64::from(outer.x);

        Some(Insets {
            top,
            bottom: i64::from(outer.height) - top - i64::from(inner.height),
            left,
            right: i64::from(outer.width) - left - i64::from(inner.width),
        })
    }
}
