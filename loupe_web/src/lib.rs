// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_web --heading-base-level=0

//! Browser host for Loupe page zoom.
//!
//! When built for `wasm32` and loaded into a page (for example as an extension
//! content script), this crate:
//!
//! - Waits for the document to be ready to accept DOM mutation
//!   (`DOMContentLoaded`, or immediately if it already fired).
//! - Moves every child of `<body>` into a single `<div id="page-zoom-container">`
//!   whose transform origin is its top-left corner ([`DomMount`]).
//! - Injects a `<style>` rule that shows a zoom-in cursor while the modifier is held.
//! - Forwards `keydown` / `keyup` / `wheel` / window `blur` to a
//!   [`loupe::ZoomEngine`], cancelling default scrolling while a zoom gesture
//!   is active and hosting the idle-reset timer.
//!
//! The DOM contract is fixed:
//!
//! | What | Value |
//! |---|---|
//! | Container id | [`CONTAINER_ID`] |
//! | Container style | [`CONTAINER_STYLE`] |
//! | Modifier-held class on `<body>` | [`MODIFIER_HELD_CLASS`] |
//! | Zoomed class on `<body>` | [`ZOOMED_CLASS`] |
//!
//! On other targets only the constants and [`MountError`] are available, so
//! the crate can be part of a native workspace build.
//!
//! ```no_run
//! #[cfg(target_arch = "wasm32")]
//! fn mount_now() -> Result<(), loupe_web::MountError> {
//!     loupe_web::install()
//! }
//! ```
//!
//! Logging goes to the browser console through `gloo::console`.

mod error;
#[cfg(target_arch = "wasm32")]
mod host;
#[cfg(target_arch = "wasm32")]
mod mount;

pub use error::MountError;
#[cfg(target_arch = "wasm32")]
pub use host::{install, start};
#[cfg(target_arch = "wasm32")]
pub use mount::DomMount;

use loupe::Marker;

/// Id of the element that wraps all page content.
pub const CONTAINER_ID: &str = "page-zoom-container";

/// Inline style of the zoom container.
///
/// The transition only smooths what the user sees; the engine always computes
/// the exact end state.
pub const CONTAINER_STYLE: &str =
    "transform-origin: 0 0; transition: transform 0.2s ease-out; will-change: transform;";

/// Class on `<body>` while the zoom modifier is held.
pub const MODIFIER_HELD_CLASS: &str = "alt-pressed";

/// Class on `<body>` while the page is magnified.
pub const ZOOMED_CLASS: &str = "page-zoomed";

/// Style sheet injected into `<head>`.
pub const CURSOR_STYLE: &str = "body.alt-pressed * { cursor: zoom-in !important; }";

/// The `<body>` class that represents `marker`.
#[must_use]
pub fn marker_class(marker: Marker) -> &'static str {
    match marker {
        Marker::ModifierHeld => MODIFIER_HELD_CLASS,
        Marker::Zoomed => ZOOMED_CLASS,
    }
}
