// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::ADVANTAGE_TILES;
use sycamore::prelude::*;

#[component]
pub fn Advantages<G: Html>(ctx: Scope) -> View<G> {
	let tiles = View::new_fragment(
		ADVANTAGE_TILES
			.iter()
			.map(|tile| {
				view! {
					ctx,
					div(class="advantage_tile") {
						img(src=tile.icon, class="advantage_icon", height="96", alt=tile.alt)
						div(class="advantage_text") {
							h3(class="advantage_title") { (tile.title) }
							p(class="advantage_description") { (tile.text) }
						}
					}
				}
			})
			.collect(),
	);

	view! {
		ctx,
		section(id="advantages") {
			article(class="advantage_tiles") {
				(tiles)
			}
		}
	}
}
