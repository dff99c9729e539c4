// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use kurbo::{Affine, Point, Vec2};

/// Translate + uniform scale applied to the page content.
///
/// A point `p` in unscaled content coordinates is rendered at
/// `translate + p * scale` in viewport coordinates. The transform origin is
/// the content's top-left corner, matching a container styled with
/// `transform-origin: 0 0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TransformState {
    /// Translation in viewport pixels, applied after scaling.
    pub translate: Vec2,
    /// Uniform scale factor. Always `> 0` for transforms produced by this crate.
    pub scale: f64,
}

impl Default for TransformState {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl TransformState {
    /// The natural (unzoomed) transform.
    pub const IDENTITY: Self = Self {
        translate: Vec2::ZERO,
        scale: 1.0,
    };

    /// Creates a transform from its translation components and scale.
    #[must_use]
    pub const fn new(translate_x: f64, translate_y: f64, scale: f64) -> Self {
        Self {
            translate: Vec2::new(translate_x, translate_y),
            scale,
        }
    }

    /// Returns `true` if this is exactly the identity transform.
    #[must_use]
    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }

    /// Returns `true` if every component is finite and the scale is positive.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.translate.is_finite() && self.scale.is_finite() && self.scale > 0.0
    }

    /// Returns this transform, or the identity if it is not [valid](Self::is_valid).
    ///
    /// A wrong zoom level recovers on the next user action; a non-finite one
    /// would poison every later step, so it is dropped here.
    #[must_use]
    pub fn sanitized(self) -> Self {
        if self.is_valid() { self } else { Self::IDENTITY }
    }

    /// Content → viewport as a Kurbo affine.
    #[must_use]
    pub fn to_affine(&self) -> Affine {
        Affine::translate(self.translate) * Affine::scale(self.scale)
    }

    /// Maps a content-space point to viewport coordinates.
    #[must_use]
    pub fn content_to_view(&self, pt: Point) -> Point {
        Point::new(
            self.translate.x + pt.x * self.scale,
            self.translate.y + pt.y * self.scale,
        )
    }

    /// Maps a viewport point back to the content-space point rendered under it.
    #[must_use]
    pub fn view_to_content(&self, pt: Point) -> Point {
        Point::new(
            (pt.x - self.translate.x) / self.scale,
            (pt.y - self.translate.y) / self.scale,
        )
    }

    /// Computes the transform for `new_zoom` that keeps the content point under
    /// `cursor` stationary.
    ///
    /// The content coordinate under the cursor is re-derived from `self` on
    /// every call, so repeated steps compose without accumulating drift. When
    /// `old_zoom == new_zoom` the transform is returned unchanged.
    ///
    /// If `self` is not valid, or the result would not be, the step starts from
    /// (or falls back to) the identity transform.
    ///
    /// ```rust
    /// use kurbo::Point;
    /// use loupe_view::TransformState;
    ///
    /// let next = TransformState::IDENTITY.step_zoom(1.0, 2.0, Point::new(10.0, 20.0));
    /// assert_eq!(next, TransformState::new(-10.0, -20.0, 2.0));
    /// ```
    #[must_use]
    pub fn step_zoom(self, old_zoom: f64, new_zoom: f64, cursor: Point) -> Self {
        if old_zoom == new_zoom {
            return self;
        }
        let current = self.sanitized();
        let content = current.view_to_content(cursor);
        let next = Self::new(
            cursor.x - content.x * new_zoom,
            cursor.y - content.y * new_zoom,
            new_zoom,
        );
        next.sanitized()
    }

    /// Formats this transform as a CSS `transform` value.
    ///
    /// The output has the exact form `translate(<x>px, <y>px) scale(<s>)`; the
    /// identity renders as `translate(0px, 0px) scale(1)`.
    #[must_use]
    pub fn css(&self) -> TransformCss {
        TransformCss(*self)
    }
}

/// [`Display`](fmt::Display) adaptor returned by [`TransformState::css`].
#[derive(Clone, Copy, Debug)]
pub struct TransformCss(TransformState);

impl fmt::Display for TransformCss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Adding 0.0 folds -0.0 into 0.0 so the identity never prints as `-0px`.
        let TransformState { translate, scale } = self.0;
        write!(
            f,
            "translate({}px, {}px) scale({})",
            translate.x + 0.0,
            translate.y + 0.0,
            scale + 0.0
        )
    }
}
