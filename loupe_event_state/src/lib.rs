// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=loupe_event_state --heading-base-level=0

//! Loupe Event State: keyboard state tracking for zoom gestures.
//!
//! This crate provides small state machines that need to see more than one
//! event to know what the user is doing. Currently:
//!
//! - [`modifier`]: track whether a designated modifier key is held, including
//!   the forced release when the window loses focus mid-gesture.
//!
//! The trackers accept pre-digested input (a [`modifier::Modifiers`] snapshot
//! taken from the host's keyboard event) and return transitions the caller can
//! act on. They assume no particular event system.
//!
//! ## Usage
//!
//! ```rust
//! use loupe_event_state::modifier::{Modifier, ModifierTracker, ModifierTransition, Modifiers};
//!
//! let mut tracker = ModifierTracker::new(Modifier::Alt);
//! assert_eq!(tracker.on_key_down(Modifiers::ALT), Some(ModifierTransition::Pressed));
//! assert!(tracker.is_pressed());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

pub mod modifier;
