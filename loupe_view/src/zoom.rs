// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;

use crate::transform::TransformState;

/// Bounds and step size for the logical zoom level.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomLimits {
    /// Lowest zoom level a step may produce before snapping back to natural.
    pub min_zoom: f64,
    /// Highest reachable zoom level.
    pub max_zoom: f64,
    /// Zoom change per wheel tick.
    pub zoom_step: f64,
}

impl ZoomLimits {
    /// `[0.5, 5.0]` stepped by `0.1`.
    pub const DEFAULT: Self = Self {
        min_zoom: 0.5,
        max_zoom: 5.0,
        zoom_step: 0.1,
    };

    /// Creates normalized limits.
    ///
    /// The range is reordered so that `min_zoom <= max_zoom`. A step that is
    /// not finite and positive is replaced by the default step.
    #[must_use]
    pub fn new(min_zoom: f64, max_zoom: f64, zoom_step: f64) -> Self {
        let (min_zoom, max_zoom) = if min_zoom <= max_zoom {
            (min_zoom, max_zoom)
        } else {
            (max_zoom, min_zoom)
        };
        let zoom_step = if zoom_step.is_finite() && zoom_step > 0.0 {
            zoom_step
        } else {
            Self::DEFAULT.zoom_step
        };
        Self {
            min_zoom,
            max_zoom,
            zoom_step,
        }
    }

    /// Number of whole steps above natural that stay within `max_zoom`.
    #[allow(
        clippy::cast_possible_truncation,
        reason = "Step counts are small; `as` saturates for out-of-range values."
    )]
    fn max_ticks(&self) -> u32 {
        let span = (self.max_zoom - 1.0) / self.zoom_step;
        if span.is_finite() && span > 0.0 {
            // Round to the nearest tick so 4.0 / 0.1 = 40.000...01 still gives 40.
            (span + 0.5) as u32
        } else {
            0
        }
    }

    fn level(&self, ticks: u32) -> f64 {
        // `max`/`min` rather than `clamp`: the fields are public and may be unordered.
        (1.0 + f64::from(ticks) * self.zoom_step)
            .max(self.min_zoom)
            .min(self.max_zoom)
    }
}

impl Default for ZoomLimits {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Direction of a single zoom tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ZoomDirection {
    /// Magnify.
    In,
    /// Shrink back toward natural size.
    Out,
}

impl ZoomDirection {
    /// Classifies a wheel event's vertical delta: negative (wheel away from the
    /// user) zooms in, zero or positive zooms out.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Self {
        if delta_y < 0.0 { Self::In } else { Self::Out }
    }
}

/// Result of [`ZoomState::apply_wheel`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum WheelOutcome {
    /// The page is magnified; write `transform` to the mount.
    Zoomed {
        /// New transform for the mount.
        transform: TransformState,
        /// `true` if this step left the natural state (the zoomed indicator turns on).
        entered: bool,
    },
    /// The step reached natural size or below and the state snapped to identity.
    Reset {
        /// `true` if the page was zoomed before this step (the zoomed indicator turns off).
        was_zoomed: bool,
    },
}

/// Logical zoom level plus the transform that realizes it.
///
/// The zoom level is kept as a whole number of steps above natural so that
/// stepping back down lands on exactly `1.0`. Whenever the level is `1.0` the
/// transform is exactly [`TransformState::IDENTITY`].
#[derive(Clone, Debug)]
pub struct ZoomState {
    limits: ZoomLimits,
    max_ticks: u32,
    ticks: u32,
    zoom: f64,
    transform: TransformState,
}

impl Default for ZoomState {
    fn default() -> Self {
        Self::new(ZoomLimits::DEFAULT)
    }
}

impl ZoomState {
    /// Creates a zoom state at natural size.
    #[must_use]
    pub fn new(limits: ZoomLimits) -> Self {
        Self {
            limits,
            max_ticks: limits.max_ticks(),
            ticks: 0,
            zoom: 1.0,
            transform: TransformState::IDENTITY,
        }
    }

    /// Returns the configured limits.
    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    /// Returns the current logical zoom level.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    /// Returns the transform realizing the current zoom level.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.transform
    }

    /// Returns `true` while the page is magnified above natural size.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.ticks > 0
    }

    /// Applies one wheel tick anchored at `cursor` (viewport coordinates).
    ///
    /// The level moves by one step and is clamped to the limits. A result at
    /// or below `1.0` snaps to natural size and reports
    /// [`WheelOutcome::Reset`]; there is no shrunk mode.
    pub fn apply_wheel(&mut self, direction: ZoomDirection, cursor: Point) -> WheelOutcome {
        let ticks = match direction {
            ZoomDirection::In => Some(self.ticks.saturating_add(1).min(self.max_ticks)),
            ZoomDirection::Out => self.ticks.checked_sub(1),
        };
        let next = ticks
            .filter(|&ticks| ticks > 0)
            .map(|ticks| (ticks, self.limits.level(ticks)))
            .filter(|&(_, zoom)| zoom > 1.0);
        let Some((ticks, new_zoom)) = next else {
            let was_zoomed = self.is_zoomed();
            self.reset();
            return WheelOutcome::Reset { was_zoomed };
        };

        let entered = !self.is_zoomed();
        let old_zoom = self.zoom;
        self.ticks = ticks;
        self.zoom = new_zoom;
        self.transform = self.transform.step_zoom(old_zoom, new_zoom, cursor);
        WheelOutcome::Zoomed {
            transform: self.transform,
            entered,
        }
    }

    /// Returns to natural size and the identity transform.
    ///
    /// Idempotent: calling this at natural size changes nothing.
    pub fn reset(&mut self) -> TransformState {
        self.ticks = 0;
        self.zoom = 1.0;
        self.transform = TransformState::IDENTITY;
        self.transform
    }

    /// Snapshot of the current state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> ZoomDebugInfo {
        ZoomDebugInfo {
            zoom: self.zoom,
            steps_above_natural: self.ticks,
            max_steps: self.max_ticks,
            transform: self.transform,
            limits: self.limits,
        }
    }
}

/// Debug snapshot of a [`ZoomState`].
#[derive(Clone, Copy, Debug)]
pub struct ZoomDebugInfo {
    /// Current logical zoom level.
    pub zoom: f64,
    /// Whole steps above natural size.
    pub steps_above_natural: u32,
    /// Step count at which `max_zoom` is reached.
    pub max_steps: u32,
    /// Current transform.
    pub transform: TransformState,
    /// Configured limits.
    pub limits: ZoomLimits,
}

#[cfg(test)]
mod tests {
    use kurbo::Point;

    use super::{WheelOutcome, ZoomDirection, ZoomLimits, ZoomState};
    use crate::TransformState;

    const CURSOR: Point = Point::new(100.0, 200.0);

    #[test]
    fn wheel_delta_classification() {
        assert_eq!(ZoomDirection::from_wheel_delta(-3.0), ZoomDirection::In);
        assert_eq!(ZoomDirection::from_wheel_delta(0.0), ZoomDirection::Out);
        assert_eq!(ZoomDirection::from_wheel_delta(53.0), ZoomDirection::Out);
    }

    #[test]
    fn first_zoom_in_enters_and_anchors_on_cursor() {
        let mut zoom = ZoomState::default();
        let WheelOutcome::Zoomed { transform, entered } = zoom.apply_wheel(ZoomDirection::In, CURSOR)
        else {
            panic!("expected a zoomed outcome");
        };
        assert!(entered);
        assert!((transform.scale - 1.1).abs() < 1e-9);
        assert!((transform.translate.x - -10.0).abs() < 1e-9);
        assert!((transform.translate.y - -20.0).abs() < 1e-9);

        // Second step is not an entry.
        assert!(matches!(
            zoom.apply_wheel(ZoomDirection::In, CURSOR),
            WheelOutcome::Zoomed { entered: false, .. }
        ));
    }

    #[test]
    fn zoom_in_never_exceeds_max() {
        let mut zoom = ZoomState::default();
        for _ in 0..100 {
            zoom.apply_wheel(ZoomDirection::In, CURSOR);
            assert!(zoom.zoom() <= 5.0);
        }
        assert_eq!(zoom.zoom(), 5.0);
        assert_eq!(zoom.debug_info().max_steps, 40);

        // At the ceiling the transform stops changing.
        let before = zoom.transform();
        zoom.apply_wheel(ZoomDirection::In, Point::new(7.0, 9.0));
        assert_eq!(zoom.transform(), before);
    }

    #[test]
    fn zoom_out_from_natural_reports_reset_without_toggle() {
        let mut zoom = ZoomState::default();
        assert_eq!(
            zoom.apply_wheel(ZoomDirection::Out, CURSOR),
            WheelOutcome::Reset { was_zoomed: false }
        );
        assert_eq!(zoom.zoom(), 1.0);
        assert!(zoom.transform().is_identity());
    }

    #[test]
    fn stepping_back_down_lands_exactly_on_identity() {
        let mut zoom = ZoomState::default();
        for _ in 0..7 {
            zoom.apply_wheel(ZoomDirection::In, Point::new(13.0, 450.0));
        }
        for _ in 0..6 {
            assert!(matches!(
                zoom.apply_wheel(ZoomDirection::Out, Point::new(800.0, 3.0)),
                WheelOutcome::Zoomed { .. }
            ));
            assert!(zoom.zoom() > 1.0);
        }
        assert_eq!(
            zoom.apply_wheel(ZoomDirection::Out, CURSOR),
            WheelOutcome::Reset { was_zoomed: true }
        );
        assert_eq!(zoom.zoom(), 1.0);
        assert_eq!(zoom.transform(), TransformState::IDENTITY);
    }

    #[test]
    fn reset_is_idempotent() {
        let mut zoom = ZoomState::default();
        zoom.apply_wheel(ZoomDirection::In, CURSOR);
        assert!(zoom.is_zoomed());
        assert_eq!(zoom.reset(), TransformState::IDENTITY);
        assert_eq!(zoom.reset(), TransformState::IDENTITY);
        assert!(!zoom.is_zoomed());
        assert_eq!(zoom.zoom(), 1.0);
    }

    #[test]
    fn limits_are_normalized() {
        let limits = ZoomLimits::new(4.0, 0.5, -1.0);
        assert_eq!(limits.min_zoom, 0.5);
        assert_eq!(limits.max_zoom, 4.0);
        assert_eq!(limits.zoom_step, ZoomLimits::DEFAULT.zoom_step);
    }

    #[test]
    fn ceiling_below_natural_never_zooms() {
        let mut zoom = ZoomState::new(ZoomLimits::new(0.25, 0.75, 0.1));
        assert_eq!(
            zoom.apply_wheel(ZoomDirection::In, CURSOR),
            WheelOutcome::Reset { was_zoomed: false }
        );
        assert!(zoom.transform().is_identity());
    }
}
