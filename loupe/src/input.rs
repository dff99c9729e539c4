// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Point;
use loupe_event_state::modifier::Modifiers;

/// Key identity, reduced to what the engine distinguishes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// The Escape key.
    Escape,
    /// A key producing a single printable character.
    Character(char),
    /// Any other key, including the modifiers themselves.
    Other,
}

impl Key {
    /// Interprets a DOM `KeyboardEvent.key` value.
    ///
    /// ```rust
    /// use loupe::Key;
    ///
    /// assert_eq!(Key::from_dom("Escape"), Key::Escape);
    /// assert_eq!(Key::from_dom("z"), Key::Character('z'));
    /// assert_eq!(Key::from_dom("Alt"), Key::Other);
    /// ```
    #[must_use]
    pub fn from_dom(key: &str) -> Self {
        if key == "Escape" {
            return Self::Escape;
        }
        let mut chars = key.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Self::Character(c),
            _ => Self::Other,
        }
    }
}

/// Raw input the engine reacts to.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum InputEvent {
    /// A key went down (including auto-repeat).
    KeyDown {
        /// Which key.
        key: Key,
        /// Modifier flags at the time of the event.
        modifiers: Modifiers,
    },
    /// A key went up.
    KeyUp {
        /// Which key.
        key: Key,
        /// Modifier flags at the time of the event.
        modifiers: Modifiers,
    },
    /// A wheel tick.
    Wheel {
        /// Vertical delta; negative means the wheel rolled away from the user.
        delta_y: f64,
        /// Pointer position in viewport coordinates.
        cursor: Point,
    },
    /// The window lost focus.
    Blur,
}

/// What the host must do with the event that was just handled.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[must_use]
pub struct Dispatch {
    /// Suppress the event's default action and stop it from propagating.
    pub prevent_default: bool,
}

impl Dispatch {
    /// Leave the event alone.
    pub const PASS: Self = Self {
        prevent_default: false,
    };
    /// The engine consumed the event.
    pub const CONSUME: Self = Self {
        prevent_default: true,
    };
}
