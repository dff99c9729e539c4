// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_view --heading-base-level=0

//! Loupe View: cursor-anchored zoom math for a whole-page transform.
//!
//! This crate is the headless core of Loupe's page zoom. It provides:
//! - [`TransformState`]: the translate + uniform scale applied to the page
//!   content, with content/viewport conversion and CSS formatting.
//! - [`TransformState::step_zoom`]: the cursor-anchored zoom step that keeps
//!   the content point under the pointer visually fixed.
//! - [`ZoomState`]: the logical zoom level, bounded by [`ZoomLimits`] and
//!   stepped one wheel tick at a time.
//!
//! It does **not** touch the DOM or listen to input. Callers are expected to:
//! - Classify wheel input with [`ZoomDirection::from_wheel_delta`].
//! - Write the resulting transform (via [`TransformState::css`]) to whatever
//!   element wraps the page content.
//! - Toggle any "zoomed" styling from the `entered` / `was_zoomed` flags of
//!   [`WheelOutcome`].
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Point;
//! use loupe_view::{WheelOutcome, ZoomDirection, ZoomState};
//!
//! let mut zoom = ZoomState::default();
//! let cursor = Point::new(100.0, 200.0);
//!
//! let WheelOutcome::Zoomed { transform, entered } =
//!     zoom.apply_wheel(ZoomDirection::from_wheel_delta(-120.0), cursor)
//! else {
//!     unreachable!();
//! };
//! assert!(entered);
//!
//! // The content point under the cursor has not moved.
//! let content = transform.view_to_content(cursor);
//! assert!((content.x - 100.0).abs() < 1e-9);
//! assert!((content.y - 200.0).abs() < 1e-9);
//!
//! // Zooming back out snaps to natural size.
//! assert_eq!(
//!     zoom.apply_wheel(ZoomDirection::Out, cursor),
//!     WheelOutcome::Reset { was_zoomed: true }
//! );
//! ```
//!
//! ## Design notes
//!
//! - The zoom is uniform and the transform origin is the content's top-left
//!   corner.
//! - There is no shrunk mode: any step that would land at or below natural
//!   size resets to the identity transform.
//! - [`ZoomState`] is the source of truth for the transform; nothing is read
//!   back from rendered styles.
//!
//! This crate is `no_std`.

#![no_std]

mod transform;
mod zoom;

pub use transform::{TransformCss, TransformState};
pub use zoom::{WheelOutcome, ZoomDebugInfo, ZoomDirection, ZoomLimits, ZoomState};
