// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe --heading-base-level=0

//! Loupe: hold a modifier and scroll to magnify a page around the pointer.
//!
//! [`ZoomEngine`] ties together the headless pieces:
//! - [`loupe_view`]: cursor-anchored transform math and the bounded zoom level.
//! - [`loupe_event_state`]: whether the zoom modifier is held.
//! - [`loupe_timing`]: the single pending idle reset.
//!
//! The host feeds it [`InputEvent`]s and honours the returned [`Dispatch`];
//! the engine writes transforms and markers to a [`ViewportMount`]. Nothing
//! here touches the DOM directly, so the whole state machine is testable with
//! a recording mount and a simulated clock.
//!
//! ## Example
//!
//! ```rust
//! use kurbo::Point;
//! use loupe::{InputEvent, Key, Marker, Modifiers, TransformState, ViewportMount, ZoomConfig, ZoomEngine};
//!
//! #[derive(Default)]
//! struct Page {
//!     css: String,
//!     zoomed: bool,
//! }
//!
//! impl ViewportMount for Page {
//!     fn set_transform(&mut self, transform: &TransformState) {
//!         self.css = transform.css().to_string();
//!     }
//!     fn set_marker(&mut self, marker: Marker, on: bool) {
//!         if marker == Marker::Zoomed {
//!             self.zoomed = on;
//!         }
//!     }
//! }
//!
//! let mut engine = ZoomEngine::with_mount(ZoomConfig::DEFAULT, Page::default());
//!
//! // Alt down, then one wheel tick toward the page.
//! let _ = engine.handle(InputEvent::KeyDown { key: Key::Other, modifiers: Modifiers::ALT }, 0);
//! let dispatch = engine.handle(
//!     InputEvent::Wheel { delta_y: -1.0, cursor: Point::new(100.0, 200.0) },
//!     5,
//! );
//! assert!(dispatch.prevent_default);
//! assert!(engine.mount().unwrap().zoomed);
//!
//! // Alt up: one second later the page returns to natural size.
//! let _ = engine.handle(InputEvent::KeyUp { key: Key::Other, modifiers: Modifiers::empty() }, 10);
//! assert!(!engine.poll_timer(1009));
//! assert!(engine.poll_timer(1010));
//! assert_eq!(engine.mount().unwrap().css, "translate(0px, 0px) scale(1)");
//! ```
//!
//! This crate is `no_std`.

#![no_std]

mod config;
mod engine;
mod input;
mod mount;

pub use config::ZoomConfig;
pub use engine::ZoomEngine;
pub use input::{Dispatch, InputEvent, Key};
pub use mount::{Marker, ViewportMount};

pub use loupe_event_state::modifier::{Modifier, Modifiers};
pub use loupe_timing::{Pending, TimerToken};
pub use loupe_view::{TransformState, ZoomLimits};
