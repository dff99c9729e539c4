// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Modifier tracking: is the designated modifier key currently held?
//!
//! ## Usage
//!
//! 1) Create a [`ModifierTracker`] for the modifier that arms the gesture.
//! 2) Feed every key-down and key-up with the event's modifier flags to
//!    [`ModifierTracker::on_key_down`] / [`ModifierTracker::on_key_up`].
//! 3) Call [`ModifierTracker::on_blur`] when the window loses focus, since the
//!    matching key-up will never arrive.
//! 4) React to the returned [`ModifierTransition`], if any.
//!
//! ## Minimal example
//!
//! ```
//! use loupe_event_state::modifier::{
//!     Modifier, ModifierTracker, ModifierTransition, Modifiers, ReleaseCause,
//! };
//!
//! let mut alt = ModifierTracker::new(Modifier::Alt);
//! assert_eq!(alt.on_key_down(Modifiers::ALT), Some(ModifierTransition::Pressed));
//!
//! // Auto-repeat does not re-trigger.
//! assert_eq!(alt.on_key_down(Modifiers::ALT), None);
//!
//! // Focus leaves the page with Alt still held.
//! assert_eq!(
//!     alt.on_blur(),
//!     Some(ModifierTransition::Released { cause: ReleaseCause::Blur })
//! );
//! assert!(!alt.is_pressed());
//! ```

use bitflags::bitflags;

bitflags! {
    /// Snapshot of the modifier flags carried by a keyboard event.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// `altKey` (Option on macOS).
        const ALT = 1 << 0;
        /// `ctrlKey`.
        const CONTROL = 1 << 1;
        /// `shiftKey`.
        const SHIFT = 1 << 2;
        /// `metaKey` (Command / Windows key).
        const META = 1 << 3;
    }
}

/// A single modifier key.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Modifier {
    /// Alt / Option.
    #[default]
    Alt,
    /// Control.
    Control,
    /// Shift.
    Shift,
    /// Meta / Command.
    Meta,
}

impl Modifier {
    /// The flag for this modifier in a [`Modifiers`] snapshot.
    #[must_use]
    pub const fn flag(self) -> Modifiers {
        match self {
            Self::Alt => Modifiers::ALT,
            Self::Control => Modifiers::CONTROL,
            Self::Shift => Modifiers::SHIFT,
            Self::Meta => Modifiers::META,
        }
    }

    /// Returns `true` if `mods` has this modifier set.
    #[must_use]
    pub fn is_held_in(self, mods: Modifiers) -> bool {
        mods.contains(self.flag())
    }
}

/// Why the modifier was released.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReleaseCause {
    /// A key-up arrived without the modifier flag.
    KeyUp,
    /// The window lost focus while the modifier was held.
    Blur,
}

/// A change of the tracked modifier state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ModifierTransition {
    /// `Released` → `Pressed`.
    Pressed,
    /// `Pressed` → `Released`.
    Released {
        /// What caused the release.
        cause: ReleaseCause,
    },
}

/// Two-state machine for one modifier key.
///
/// Starts released. Transitions are only reported on an actual change, so
/// key-repeat (a stream of key-downs with the modifier held) is reported once.
#[derive(Clone, Copy, Debug, Default)]
pub struct ModifierTracker {
    modifier: Modifier,
    pressed: bool,
}

impl ModifierTracker {
    /// Creates a released tracker for `modifier`.
    #[must_use]
    pub const fn new(modifier: Modifier) -> Self {
        Self {
            modifier,
            pressed: false,
        }
    }

    /// The modifier this tracker watches.
    #[must_use]
    pub fn modifier(&self) -> Modifier {
        self.modifier
    }

    /// Returns `true` while the modifier is held.
    #[must_use]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Handles a key-down carrying `mods`.
    pub fn on_key_down(&mut self, mods: Modifiers) -> Option<ModifierTransition> {
        if self.pressed || !self.modifier.is_held_in(mods) {
            return None;
        }
        self.pressed = true;
        Some(ModifierTransition::Pressed)
    }

    /// Handles a key-up carrying `mods`.
    ///
    /// Releasing some other key while the modifier is still held is not a release.
    pub fn on_key_up(&mut self, mods: Modifiers) -> Option<ModifierTransition> {
        if !self.pressed || self.modifier.is_held_in(mods) {
            return None;
        }
        self.pressed = false;
        Some(ModifierTransition::Released {
            cause: ReleaseCause::KeyUp,
        })
    }

    /// Handles loss of window focus: a held modifier is forced to released.
    pub fn on_blur(&mut self) -> Option<ModifierTransition> {
        if !self.pressed {
            return None;
        }
        self.pressed = false;
        Some(ModifierTransition::Released {
            cause: ReleaseCause::Blur,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_tracker_is_released() {
        let tracker = ModifierTracker::new(Modifier::Alt);
        assert!(!tracker.is_pressed());
        assert_eq!(tracker.modifier(), Modifier::Alt);
    }

    #[test]
    fn key_down_with_flag_presses_once() {
        let mut tracker = ModifierTracker::default();
        assert_eq!(
            tracker.on_key_down(Modifiers::ALT),
            Some(ModifierTransition::Pressed)
        );
        // Key-repeat.
        assert_eq!(tracker.on_key_down(Modifiers::ALT), None);
        assert_eq!(tracker.on_key_down(Modifiers::ALT | Modifiers::SHIFT), None);
        assert!(tracker.is_pressed());
    }

    #[test]
    fn key_down_without_flag_is_ignored() {
        let mut tracker = ModifierTracker::default();
        assert_eq!(tracker.on_key_down(Modifiers::CONTROL), None);
        assert_eq!(tracker.on_key_down(Modifiers::empty()), None);
        assert!(!tracker.is_pressed());
    }

    #[test]
    fn key_up_releases_only_when_flag_clears() {
        let mut tracker = ModifierTracker::default();
        tracker.on_key_down(Modifiers::ALT);

        // Some other key released while Alt is still down.
        assert_eq!(tracker.on_key_up(Modifiers::ALT), None);
        assert!(tracker.is_pressed());

        assert_eq!(
            tracker.on_key_up(Modifiers::empty()),
            Some(ModifierTransition::Released {
                cause: ReleaseCause::KeyUp
            })
        );
        assert!(!tracker.is_pressed());

        // Nothing left to release.
        assert_eq!(tracker.on_key_up(Modifiers::empty()), None);
    }

    #[test]
    fn blur_forces_release() {
        let mut tracker = ModifierTracker::default();
        tracker.on_key_down(Modifiers::ALT);
        assert_eq!(
            tracker.on_blur(),
            Some(ModifierTransition::Released {
                cause: ReleaseCause::Blur
            })
        );
        assert!(!tracker.is_pressed());
        assert_eq!(tracker.on_blur(), None);
    }

    #[test]
    fn other_modifier_choice_reads_its_own_flag() {
        let mut tracker = ModifierTracker::new(Modifier::Control);
        assert_eq!(tracker.on_key_down(Modifiers::ALT), None);
        assert_eq!(
            tracker.on_key_down(Modifiers::CONTROL),
            Some(ModifierTransition::Pressed)
        );
        assert!(Modifier::Meta.is_held_in(Modifiers::META | Modifiers::SHIFT));
        assert!(!Modifier::Shift.is_held_in(Modifiers::META));
    }
}
