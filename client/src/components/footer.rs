// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::{COPYRIGHT_NOTICE, LOGO_IMAGE, SOCIAL_LINKS, TAGLINE};
use sycamore::prelude::*;

#[component]
pub fn Footer<G: Html>(ctx: Scope) -> View<G> {
	let social_icons = View::new_fragment(
		SOCIAL_LINKS
			.iter()
			.map(|link| {
				view! {
					ctx,
					img(src=link.icon, class="footer_social_icon", width="47", height="45", alt=link.name)
				}
			})
			.collect(),
	);

	view! {
		ctx,
		footer(id="footer") {
			section(class="footer_logo_section") {
				article(class="footer_logo") {
					img(src=LOGO_IMAGE, width="112", height="54", alt="")
					p(class="p-white") { (TAGLINE) }
				}
				article(class="footer_social") {
					(social_icons)
				}
			}
			p(class="p-white") { (COPYRIGHT_NOTICE) }
		}
	}
}
