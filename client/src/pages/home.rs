// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::components::advantages::Advantages;
use crate::components::carousel::Carousel;
use crate::components::footer::Footer;
use crate::components::header::HeaderHome;
use crate::components::hero::Hero;
use crate::content::PAGE_TITLE;
use crate::page_utils::set_page_title;
use sycamore::prelude::*;

#[component]
pub fn LandingView<G: Html>(ctx: Scope) -> View<G> {
	if G::IS_BROWSER {
		set_page_title(PAGE_TITLE);
	}

	view! {
		ctx,
		HeaderHome
		main {
			Hero
			Carousel
			Advantages
			div(class="info_strip")
		}
		Footer
	}
}
