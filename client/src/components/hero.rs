// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::{HERO_IMAGE, SITE_NAME, TAGLINE};
use sycamore::prelude::*;

#[component]
pub fn Hero<G: Html>(ctx: Scope) -> View<G> {
	view! {
		ctx,
		section(id="hero") {
			img(src=HERO_IMAGE, class="hero_image", width="635", height="635", alt="Madr Hero")
			article(class="hero_titles") {
				h1(class="madr") { (SITE_NAME) }
				h2(class="hero_tagline") { (TAGLINE) }
			}
		}
	}
}
