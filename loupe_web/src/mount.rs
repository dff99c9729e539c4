// Copyright 2025 the Loupe Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use gloo::console;
use loupe::{Marker, TransformState, ViewportMount};
use wasm_bindgen::JsCast;
use web_sys::{Document, HtmlElement};

use crate::{CONTAINER_ID, CONTAINER_STYLE, CURSOR_STYLE, MountError, marker_class};

/// The page's content wrapped in a single transformable container.
///
/// Markers are toggled as classes on `<body>`, which stays the container's
/// parent.
#[derive(Debug)]
pub struct DomMount {
    container: HtmlElement,
    root: HtmlElement,
}

impl DomMount {
    /// Moves every child of `<body>` into a new zoom container and injects the
    /// cursor style sheet.
    ///
    /// Fails with [`MountError::AlreadyMounted`] if a container with
    /// [`CONTAINER_ID`] already exists.
    pub fn install(document: &Document) -> Result<Self, MountError> {
        let body = document.body().ok_or(MountError::NoBody)?;
        if document.get_element_by_id(CONTAINER_ID).is_some() {
            return Err(MountError::AlreadyMounted);
        }

        let container = document
            .create_element("div")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| MountError::Dom("created <div> is not an HtmlElement".into()))?;
        container.set_id(CONTAINER_ID);
        container.style().set_css_text(CONTAINER_STYLE);

        while let Some(child) = body.first_child() {
            container.append_child(&child)?;
        }
        body.append_child(&container)?;

        let style = document.create_element("style")?;
        style.set_text_content(Some(CURSOR_STYLE));
        match document.head() {
            Some(head) => head.append_child(&style)?,
            // Headless documents still get the cursor rule.
            None => body.append_child(&style)?,
        };

        Ok(Self {
            container,
            root: body,
        })
    }

    /// The zoom container.
    #[must_use]
    pub fn container(&self) -> &HtmlElement {
        &self.container
    }

    /// The element carrying the marker classes.
    #[must_use]
    pub fn root(&self) -> &HtmlElement {
        &self.root
    }
}

impl ViewportMount for DomMount {
    fn set_transform(&mut self, transform: &TransformState) {
        let css = transform.css().to_string();
        if let Err(err) = self.container.style().set_property("transform", &css) {
            console::warn!("loupe: failed to set transform", err);
        }
    }

    fn set_marker(&mut self, marker: Marker, on: bool) {
        let class = marker_class(marker);
        let classes = self.root.class_list();
        let result = if on {
            classes.add_1(class)
        } else {
            classes.remove_1(class)
        };
        if let Err(err) = result {
            console::warn!("loupe: failed to toggle class", class, err);
        }
    }
}
