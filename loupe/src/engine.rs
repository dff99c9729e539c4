// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_event_state::modifier::{ModifierTracker, ModifierTransition};
use loupe_timing::{Pending, TimerSlot, TimerToken};
use loupe_view::{TransformState, WheelOutcome, ZoomDirection, ZoomState};

use crate::config::ZoomConfig;
use crate::input::{Dispatch, InputEvent};
use crate::mount::{Marker, ViewportMount};

/// One page's zoom engine.
///
/// Owns the zoom level and transform, the modifier state, and the idle-reset
/// slot. Every handler runs to completion synchronously; the only deferred
/// work is the idle reset, which the host triggers through
/// [`ZoomEngine::on_timer`] or [`ZoomEngine::poll_timer`].
///
/// Until a mount is [attached](Self::attach), wheel input is swallowed
/// without changing any state: a zoom that cannot be shown is not applied.
#[derive(Debug)]
pub struct ZoomEngine<M> {
    config: ZoomConfig,
    zoom: ZoomState,
    modifier: ModifierTracker,
    idle: TimerSlot,
    mount: Option<M>,
}

impl<M: ViewportMount> ZoomEngine<M> {
    /// Creates an engine at natural size with no mount.
    #[must_use]
    pub fn new(config: ZoomConfig) -> Self {
        Self {
            config,
            zoom: ZoomState::new(config.limits),
            modifier: ModifierTracker::new(config.modifier),
            idle: TimerSlot::new(),
            mount: None,
        }
    }

    /// Creates an engine that drives `mount`.
    #[must_use]
    pub fn with_mount(config: ZoomConfig, mount: M) -> Self {
        let mut engine = Self::new(config);
        engine.attach(mount);
        engine
    }

    /// Attaches the mount, replacing any previous one.
    ///
    /// The new mount is assumed to be at natural size; if the engine is
    /// currently zoomed its transform and markers are written immediately.
    pub fn attach(&mut self, mount: M) {
        let mount = self.mount.insert(mount);
        if self.zoom.is_zoomed() {
            mount.set_transform(&self.zoom.transform());
            mount.set_marker(Marker::Zoomed, true);
        }
        if self.modifier.is_pressed() {
            mount.set_marker(Marker::ModifierHeld, true);
        }
    }

    /// Returns `true` once a mount is attached.
    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mount.is_some()
    }

    /// The attached mount.
    #[must_use]
    pub fn mount(&self) -> Option<&M> {
        self.mount.as_ref()
    }

    /// The attached mount, mutably.
    pub fn mount_mut(&mut self) -> Option<&mut M> {
        self.mount.as_mut()
    }

    /// The engine's configuration.
    #[must_use]
    pub fn config(&self) -> &ZoomConfig {
        &self.config
    }

    /// Current logical zoom level.
    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.zoom.zoom()
    }

    /// Transform currently applied to the mount.
    #[must_use]
    pub fn transform(&self) -> TransformState {
        self.zoom.transform()
    }

    /// Returns `true` while the page is magnified.
    #[must_use]
    pub fn is_zoomed(&self) -> bool {
        self.zoom.is_zoomed()
    }

    /// Returns `true` while the zoom modifier is held.
    #[must_use]
    pub fn modifier_pressed(&self) -> bool {
        self.modifier.is_pressed()
    }

    /// The scheduled idle reset, if any.
    #[must_use]
    pub fn pending_reset(&self) -> Option<Pending> {
        self.idle.pending()
    }

    /// Handles one input event observed at `now_ms`.
    pub fn handle(&mut self, event: InputEvent, now_ms: u64) -> Dispatch {
        match event {
            InputEvent::KeyDown { key, modifiers } => {
                if let Some(transition) = self.modifier.on_key_down(modifiers) {
                    self.on_modifier(transition, now_ms);
                }
                if key == self.config.reset_key {
                    self.reset();
                }
                Dispatch::PASS
            }
            InputEvent::KeyUp { modifiers, .. } => {
                if let Some(transition) = self.modifier.on_key_up(modifiers) {
                    self.on_modifier(transition, now_ms);
                }
                Dispatch::PASS
            }
            InputEvent::Blur => {
                if let Some(transition) = self.modifier.on_blur() {
                    self.on_modifier(transition, now_ms);
                }
                Dispatch::PASS
            }
            InputEvent::Wheel { delta_y, cursor } => {
                if !self.modifier.is_pressed() {
                    return Dispatch::PASS;
                }
                // Active zooming is not idleness.
                self.idle.cancel();
                let Some(mount) = self.mount.as_mut() else {
                    return Dispatch::CONSUME;
                };
                match self
                    .zoom
                    .apply_wheel(ZoomDirection::from_wheel_delta(delta_y), cursor)
                {
                    WheelOutcome::Zoomed { transform, entered } => {
                        mount.set_transform(&transform);
                        if entered {
                            mount.set_marker(Marker::Zoomed, true);
                        }
                    }
                    WheelOutcome::Reset { was_zoomed } => {
                        if was_zoomed {
                            mount.set_transform(&TransformState::IDENTITY);
                            mount.set_marker(Marker::Zoomed, false);
                        }
                    }
                }
                Dispatch::CONSUME
            }
        }
    }

    /// Returns to natural size immediately and cancels any pending idle reset.
    ///
    /// At natural size this only cancels the timer; the mount is not touched.
    pub fn reset(&mut self) {
        self.idle.cancel();
        if !self.zoom.is_zoomed() {
            return;
        }
        let identity = self.zoom.reset();
        if let Some(mount) = self.mount.as_mut() {
            mount.set_transform(&identity);
            mount.set_marker(Marker::Zoomed, false);
        }
    }

    /// Host timer callback for the idle reset armed with `token`.
    ///
    /// Returns `true` if the page was reset. Stale tokens (from an arm that was
    /// since cancelled or replaced) are ignored.
    pub fn on_timer(&mut self, token: TimerToken) -> bool {
        self.idle.fire(token) && self.idle_reset()
    }

    /// Polling alternative to [`Self::on_timer`]: runs the idle reset if it is
    /// due at `now_ms`. Returns `true` if the page was reset.
    pub fn poll_timer(&mut self, now_ms: u64) -> bool {
        self.idle.poll(now_ms) && self.idle_reset()
    }

    fn idle_reset(&mut self) -> bool {
        // A press or wheel always cancels first, but a blur can race a
        // just-fired host timer, so eligibility is checked again here.
        if self.modifier.is_pressed() || !self.zoom.is_zoomed() {
            return false;
        }
        self.reset();
        true
    }

    fn on_modifier(&mut self, transition: ModifierTransition, now_ms: u64) {
        match transition {
            ModifierTransition::Pressed => {
                self.idle.cancel();
                if let Some(mount) = self.mount.as_mut() {
                    mount.set_marker(Marker::ModifierHeld, true);
                }
            }
            ModifierTransition::Released { .. } => {
                if let Some(mount) = self.mount.as_mut() {
                    mount.set_marker(Marker::ModifierHeld, false);
                }
                if self.zoom.is_zoomed() {
                    self.idle.arm(now_ms, self.config.reset_delay_ms);
                }
            }
        }
    }
}
