// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, HtmlElement};

pub fn set_page_title(new_title: &str) {
	let Some(document) = window().and_then(|window| window.document()) else {
		return;
	};
	document.set_title(new_title);
}

/// Gives keyboard focus to the referenced element. Does nothing if the element isn't mounted.
pub fn focus_node<G: Html>(node_ref: &NodeRef<G>) {
	let Some(node) = node_ref.try_get::<G>() else {
		return;
	};
	let Ok(element) = node.to_web_sys().dyn_into::<HtmlElement>() else {
		return;
	};
	if let Err(error) = element.focus() {
		log::warn!("Couldn't move focus: {:?}", error);
	}
}
