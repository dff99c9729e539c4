// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use gloo::console;
use gloo::events::{EventListener, EventListenerOptions, EventListenerPhase};
use gloo::timers::callback::Timeout;
use kurbo::Point;
use loupe::{InputEvent, Key, Modifiers, TimerToken, ZoomConfig, ZoomEngine};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::wasm_bindgen;
use web_sys::{Event, KeyboardEvent, WheelEvent};

use crate::{DomMount, MountError};

/// Entry point run when the module is instantiated.
///
/// Installs immediately if the document is already parsed, otherwise on
/// `DOMContentLoaded`. Failures are logged, never thrown.
#[wasm_bindgen(start)]
pub fn start() {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        console::warn!("loupe: no document; page zoom disabled");
        return;
    };
    if document.ready_state() == "loading" {
        EventListener::once(&document, "DOMContentLoaded", |_| install_or_log()).forget();
    } else {
        install_or_log();
    }
}

fn install_or_log() {
    if let Err(err) = install() {
        console::warn!("loupe: page zoom not installed:", err.to_string());
    }
}

/// Mounts the page and subscribes the engine to input for the page's lifetime.
pub fn install() -> Result<(), MountError> {
    let window = web_sys::window().ok_or(MountError::NoWindow)?;
    let document = window.document().ok_or(MountError::NoDocument)?;
    let mount = DomMount::install(&document)?;
    let host = Rc::new(Host {
        engine: RefCell::new(ZoomEngine::with_mount(ZoomConfig::DEFAULT, mount)),
        timer: RefCell::new(None),
    });

    let h = Rc::clone(&host);
    EventListener::new(&document, "keydown", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            let input = InputEvent::KeyDown {
                key: Key::from_dom(&key.key()),
                modifiers: modifiers_of(key),
            };
            h.dispatch(event, input);
        }
    })
    .forget();

    let h = Rc::clone(&host);
    EventListener::new(&document, "keyup", move |event| {
        if let Some(key) = event.dyn_ref::<KeyboardEvent>() {
            let input = InputEvent::KeyUp {
                key: Key::from_dom(&key.key()),
                modifiers: modifiers_of(key),
            };
            h.dispatch(event, input);
        }
    })
    .forget();

    // Capture phase and non-passive, so the page never scrolls mid-gesture and
    // page scripts do not see the wheel.
    let wheel_options = EventListenerOptions {
        phase: EventListenerPhase::Capture,
        passive: false,
    };
    let h = Rc::clone(&host);
    EventListener::new_with_options(&document, "wheel", wheel_options, move |event| {
        if let Some(wheel) = event.dyn_ref::<WheelEvent>() {
            let input = InputEvent::Wheel {
                delta_y: wheel.delta_y(),
                cursor: Point::new(f64::from(wheel.client_x()), f64::from(wheel.client_y())),
            };
            h.dispatch(event, input);
        }
    })
    .forget();

    let h = host;
    EventListener::new(&window, "blur", move |event| {
        h.dispatch(event, InputEvent::Blur);
    })
    .forget();

    console::log!("loupe: page zoom installed");
    Ok(())
}

/// Engine plus the host timer backing its idle-reset slot.
struct Host {
    engine: RefCell<ZoomEngine<DomMount>>,
    /// Host timeout for the armed token. Dropping a `Timeout` clears it.
    timer: RefCell<Option<(TimerToken, Timeout)>>,
}

impl Host {
    fn dispatch(self: &Rc<Self>, event: &Event, input: InputEvent) {
        let dispatch = self.engine.borrow_mut().handle(input, now_ms());
        if dispatch.prevent_default {
            event.prevent_default();
            event.stop_propagation();
        }
        self.sync_timer();
    }

    /// Makes the host timeout match the engine's pending reset.
    fn sync_timer(self: &Rc<Self>) {
        let pending = self.engine.borrow().pending_reset();
        let mut slot = self.timer.borrow_mut();
        let Some(pending) = pending else {
            *slot = None;
            return;
        };
        if matches!(&*slot, Some((token, _)) if *token == pending.token) {
            return;
        }

        let delay = pending.deadline.saturating_sub(now_ms());
        let delay = u32::try_from(delay).unwrap_or(u32::MAX);
        let host: Weak<Self> = Rc::downgrade(self);
        let token = pending.token;
        // Replacing the slot drops (and so clears) any earlier timeout.
        *slot = Some((
            token,
            Timeout::new(delay, move || {
                if let Some(host) = host.upgrade() {
                    host.fire(token);
                }
            }),
        ));
    }

    /// Runs from inside the timeout's own callback, so the spent `Timeout`
    /// stays in the slot until the next event replaces or clears it.
    fn fire(&self, token: TimerToken) {
        if self.engine.borrow_mut().on_timer(token) {
            console::log!("loupe: idle reset");
        }
    }
}

fn modifiers_of(event: &KeyboardEvent) -> Modifiers {
    let mut mods = Modifiers::empty();
    mods.set(Modifiers::ALT, event.alt_key());
    mods.set(Modifiers::CONTROL, event.ctrl_key());
    mods.set(Modifiers::SHIFT, event.shift_key());
    mods.set(Modifiers::META, event.meta_key());
    mods
}

#[allow(
    clippy::cast_possible_truncation,
    reason = "Epoch milliseconds are non-negative and far below u64::MAX; `as` saturates."
)]
fn now_ms() -> u64 {
    js_sys::Date::now() as u64
}
