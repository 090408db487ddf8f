// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::content::{CAROUSEL_CARDS, CAROUSEL_HEADING, CAROUSEL_VISIBLE_CARDS};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

/// Gets the indices of the cards to show, starting at `start` and wrapping around the end of the list.
/// No index appears twice, even when fewer than `visible` cards exist.
pub fn carousel_window(len: usize, start: usize, visible: usize) -> Vec<usize> {
	if len == 0 {
		return Vec::new();
	}
	let start = start % len;
	(0..visible.min(len)).map(|offset| (start + offset) % len).collect()
}

#[component]
pub fn Carousel<G: Html>(ctx: Scope) -> View<G> {
	let start_signal = create_signal(ctx, 0usize);
	let card_count = CAROUSEL_CARDS.len();

	let previous_handler = move |_event: WebEvent| {
		if card_count > 0 {
			start_signal.set((*start_signal.get() + card_count - 1) % card_count);
		}
	};
	let next_handler = move |_event: WebEvent| {
		if card_count > 0 {
			start_signal.set((*start_signal.get() + 1) % card_count);
		}
	};

	view! {
		ctx,
		section(id="presentation") {
			h2 {
				b(class="madr") {
					(CAROUSEL_HEADING[0])
					br {}
					(CAROUSEL_HEADING[1])
				}
			}
			div(class="carousel") {
				button(type="button", class="carousel_previous", on:click=previous_handler) { "‹" }
				article(class="carousel_cards") {
					(View::new_fragment(
						carousel_window(card_count, *start_signal.get(), CAROUSEL_VISIBLE_CARDS)
							.into_iter()
							.map(|index| {
								let card = &CAROUSEL_CARDS[index];
								view! {
									ctx,
									div(class="card") {
										img(src=card.image, class="card_image", width="420", height="234", alt=card.alt)
										div(class="card_section") {
											h3(class="h3-white") { (card.title) }
											p(class="p-white") { (card.description) }
										}
									}
								}
							})
							.collect(),
					))
				}
				button(type="button", class="carousel_next", on:click=next_handler) { "›" }
			}
		}
	}
}
