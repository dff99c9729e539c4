// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_event_state::modifier::Modifier;
use loupe_view::ZoomLimits;

use crate::input::Key;

/// Fixed tuning for a [`ZoomEngine`](crate::ZoomEngine).
///
/// Hosts use [`ZoomConfig::DEFAULT`]; other values exist so tests and
/// embedders can exercise the engine under different constants.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConfig {
    /// Zoom bounds and step.
    pub limits: ZoomLimits,
    /// Idle time after the modifier is released before the page returns to
    /// natural size.
    pub reset_delay_ms: u64,
    /// Modifier that turns wheel input into zoom.
    pub modifier: Modifier,
    /// Key that resets zoom immediately.
    pub reset_key: Key,
}

impl ZoomConfig {
    /// Alt + wheel zooms in `0.1` steps within `[0.5, 5.0]`, Escape resets, and
    /// the page returns to natural size 1000 ms after Alt is released.
    pub const DEFAULT: Self = Self {
        limits: ZoomLimits::DEFAULT,
        reset_delay_ms: 1000,
        modifier: Modifier::Alt,
        reset_key: Key::Escape,
    };
}

impl Default for ZoomConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}
