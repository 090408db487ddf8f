// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::login_modal::LoginModal;
use crate::content::{LOGO_IMAGE, SEARCH_ICON};
use sycamore::prelude::*;
use web_sys::Event as WebEvent;

#[component]
pub fn HeaderHome<G: Html>(ctx: Scope) -> View<G> {
	// The header owns whether the login dialog is showing; the dialog only gets the signal.
	let login_open_signal = create_signal(ctx, false);

	let open_login_handler = move |_event: WebEvent| login_open_signal.set(true);

	view! {
		ctx,
		header(id="header_home") {
			img(src=LOGO_IMAGE, width="112", height="54", alt="Madr")
			div(class="header_search") {
				input(type="search", name="TxtPesquisar", id="TxtPesquisar", class="header_search_input", placeholder="Pesquisar")
				img(src=SEARCH_ICON, class="header_search_icon", width="21", height="20", alt="Pesquisar")
			}
			nav(class="header_menu") {
				span(class="span-white") { "Cadastre-se" }
				span(class="span-white") { "|" }
				button(type="button", id="header_login", class="span-white header_login", on:click=open_login_handler) { "Entrar" }
			}
		}
		LoginModal(open=login_open_signal)
	}
}
