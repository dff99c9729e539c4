// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `loupe_view` across long wheel sequences.
//!
//! These drive `ZoomState` through mixed in/out gestures at moving cursor
//! positions and check the clamping, anchoring and identity invariants after
//! every step.

use kurbo::Point;
use loupe_view::{TransformState, WheelOutcome, ZoomDirection, ZoomLimits, ZoomState};

/// Small deterministic generator so the sequences are reproducible.
struct Lcg(u64);

impl Lcg {
    fn next_u64(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.0 >> 33
    }

    fn coord(&mut self, max: u64) -> f64 {
        (self.next_u64() % max) as f64 + 0.25
    }
}

#[test]
fn cursor_point_stays_fixed_across_mixed_steps() {
    let mut rng = Lcg(7);
    let mut zoom = ZoomState::default();

    for _ in 0..500 {
        let cursor = Point::new(rng.coord(1920), rng.coord(1080));
        let direction = if rng.next_u64() % 3 == 0 {
            ZoomDirection::Out
        } else {
            ZoomDirection::In
        };
        let before = zoom.transform().view_to_content(cursor);

        match zoom.apply_wheel(direction, cursor) {
            WheelOutcome::Zoomed { transform, .. } => {
                let after = transform.view_to_content(cursor);
                assert!((after.x - before.x).abs() < 1e-9, "x drifted at {cursor:?}");
                assert!((after.y - before.y).abs() < 1e-9, "y drifted at {cursor:?}");
                assert!(zoom.zoom() > 1.0);
            }
            WheelOutcome::Reset { .. } => {
                assert_eq!(zoom.zoom(), 1.0);
                assert_eq!(zoom.transform(), TransformState::IDENTITY);
            }
        }
        assert!(zoom.zoom() <= ZoomLimits::DEFAULT.max_zoom);
        assert!(zoom.zoom() >= 1.0);
    }
}

#[test]
fn zoom_out_sequences_never_produce_a_shrunk_transform() {
    let mut zoom = ZoomState::default();
    let cursor = Point::new(640.0, 360.0);
    for _ in 0..3 {
        zoom.apply_wheel(ZoomDirection::In, cursor);
    }
    for _ in 0..20 {
        zoom.apply_wheel(ZoomDirection::Out, cursor);
        assert!(zoom.transform().scale >= 1.0);
        assert!(zoom.zoom() >= ZoomLimits::DEFAULT.min_zoom);
    }
    assert!(zoom.transform().is_identity());
}

#[test]
fn anchor_moves_between_steps() {
    let mut zoom = ZoomState::default();

    // Zoom in at the top-left, then at the bottom-right. Each step anchors on
    // its own cursor, using the transform left by the previous one.
    let a = Point::new(0.0, 0.0);
    let b = Point::new(800.0, 600.0);
    zoom.apply_wheel(ZoomDirection::In, a);
    let content_at_b = zoom.transform().view_to_content(b);
    zoom.apply_wheel(ZoomDirection::In, b);

    let t = zoom.transform();
    let back = t.content_to_view(content_at_b);
    assert!((back.x - b.x).abs() < 1e-9);
    assert!((back.y - b.y).abs() < 1e-9);
    assert!((t.scale - 1.2).abs() < 1e-9);
}
