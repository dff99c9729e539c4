// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use loupe_view::TransformState;

/// Boundary markers the engine toggles on the host's root element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Marker {
    /// The zoom modifier is held (cursor affordance).
    ModifierHeld,
    /// The page is magnified above natural size.
    Zoomed,
}

/// The element that wraps all page content and receives the zoom transform.
///
/// Implementations must render a point `p` of the content at
/// `translate + p * scale`, i.e. use a transform origin at the content's
/// top-left corner. The engine is the only writer of the transform; it never
/// reads it back.
pub trait ViewportMount {
    /// Replaces the mount's transform.
    fn set_transform(&mut self, transform: &TransformState);

    /// Adds (`on == true`) or removes a marker.
    fn set_marker(&mut self, marker: Marker, on: bool);
}

impl<M: ViewportMount + ?Sized> ViewportMount for &mut M {
    fn set_transform(&mut self, transform: &TransformState) {
        (**self).set_transform(transform);
    }

    fn set_marker(&mut self, marker: Marker, on: bool) {
        (**self).set_marker(marker, on);
    }
}
