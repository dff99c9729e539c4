// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

/// Why the page could not be mounted for zooming.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MountError {
    /// No global `window` (not running in a browser main thread).
    NoWindow,
    /// The window has no document.
    NoDocument,
    /// The document has no `<body>` yet.
    NoBody,
    /// A zoom container already exists; the script was loaded twice.
    AlreadyMounted,
    /// A DOM call threw.
    Dom(String),
}

impl fmt::Display for MountError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoWindow => f.write_str("no global window"),
            Self::NoDocument => f.write_str("window has no document"),
            Self::NoBody => f.write_str("document has no body"),
            Self::AlreadyMounted => f.write_str("page is already mounted for zooming"),
            Self::Dom(msg) => write!(f, "DOM call failed: {msg}"),
        }
    }
}

impl core::error::Error for MountError {}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for MountError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        Self::Dom(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}
