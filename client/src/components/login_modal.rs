// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::login::{dismiss, dismissal_for_key, reset_when_closed, send_login, Dismissal, LoginFormState};
use crate::page_utils::focus_node;
use madr_shared::login::{validate_login, LoginField, LoginForm, EMAIL_MAX_LENGTH, PASSWORD_MIN_LENGTH};
use madr_shared::messages::LOGIN_FAILED_MESSAGE;
use madr_shared::LOGIN_ENDPOINT;
use sycamore::futures::spawn_local_scoped;
use sycamore::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event as WebEvent, KeyboardEvent};

#[derive(Prop)]
pub struct FieldErrorProps<'a> {
	state: &'a Signal<LoginFormState>,
	field: LoginField,
}

/// Shows the first validation message for a field beneath its input
#[component]
pub fn FieldError<'a, G: Html>(ctx: Scope<'a>, props: FieldErrorProps<'a>) -> View<G> {
	let state = props.state;
	let field = props.field;
	let message = create_memo(ctx, move || state.get().error_for(field).map(String::from));

	view! {
		ctx,
		(if let Some(message) = (*message.get()).clone() {
			view! {
				ctx,
				p(class="p-error") { (message) }
			}
		} else {
			view! { ctx, }
		})
	}
}

#[derive(Prop)]
pub struct LoginModalProps<'a> {
	open: &'a Signal<bool>,
}

/// The login dialog. It's only rendered while `open` is set, and closing it always goes through that signal.
///
/// Opening the dialog moves focus to the email input, so Escape reaches the dialog's key handler without the user
/// clicking into it first.
#[component]
pub fn LoginModal<'a, G: Html>(ctx: Scope<'a>, props: LoginModalProps<'a>) -> View<G> {
	let open = props.open;
	let form_state = create_signal(ctx, LoginFormState::default());
	let email_signal = create_signal(ctx, String::new());
	let password_signal = create_signal(ctx, String::new());
	reset_when_closed(ctx, open, form_state, email_signal, password_signal);

	let pending_signal = create_memo(ctx, || form_state.get().pending);
	let message_signal = create_memo(ctx, || form_state.get().message.clone());

	let email_input_ref = create_node_ref(ctx);
	create_effect(ctx, move || {
		if *open.get() && G::IS_BROWSER {
			// Runs after the dialog's nodes exist
			spawn_local_scoped(ctx, async move {
				focus_node(email_input_ref);
			});
		}
	});

	let backdrop_click_handler = move |_event: WebEvent| dismiss(open, Dismissal::Backdrop);
	let close_button_handler = move |_event: WebEvent| dismiss(open, Dismissal::CloseButton);
	let keydown_handler = move |event: WebEvent| {
		let Some(key_event) = event.dyn_ref::<KeyboardEvent>() else { return; };
		if let Some(dismissal) = dismissal_for_key(&key_event.key()) {
			dismiss(open, dismissal);
		}
	};

	let form_submission_handler = move |event: WebEvent| {
		event.prevent_default();
		if form_state.get_untracked().pending {
			return;
		}

		let form = LoginForm {
			email: (*email_signal.get()).clone(),
			password: (*password_signal.get()).clone(),
		};
		if let Err(errors) = validate_login(&form) {
			form_state.modify().reject(errors);
			return;
		}
		let Some(ticket) = form_state.modify().begin_submission() else { return; };

		spawn_local_scoped(ctx, async move {
			let applied = match send_login(&form).await {
				Ok(response) => form_state.modify().apply_response(ticket, response),
				Err(error) => {
					log::error!("Login request failed: {}", error);
					form_state.modify().fail(ticket, LOGIN_FAILED_MESSAGE)
				}
			};
			if !applied {
				log::debug!("Dropped the answer to a login from before the dialog was closed");
			}
		});
	};

	view! {
		ctx,
		(if *open.get() {
			view! {
				ctx,
				div(id="login_modal_backdrop", class="modal_backdrop", tabindex="-1", on:click=backdrop_click_handler, on:keydown=keydown_handler) {
					div(id="login_modal", class="modal_panel", role="dialog", on:click=|event: WebEvent| event.stop_propagation()) {
						button(type="button", class="modal_close", title="Fechar", on:click=close_button_handler) { "×" }
						div(class="modal_title") {
							span(class="modal_greeting") {
								"Bem-vindo à"
								br {}
							}
							span(class="modal_brand") { "Madr" }
						}
						form(id="login_form", action=LOGIN_ENDPOINT, method="post", on:submit=form_submission_handler) {
							div(class="login_fields") {
								div(class="login_field") {
									label(for="email") { "Usuário/E-mail" }
									input(ref=email_input_ref, type="text", name=LoginField::Email.name(), id="email", placeholder="Nome do usuário/e-mail", maxlength=EMAIL_MAX_LENGTH, bind:value=email_signal)
									FieldError(state=form_state, field=LoginField::Email)
								}
								div(class="login_field") {
									label(for="password") { "Senha" }
									input(type="password", name=LoginField::Password.name(), id="password", placeholder="Senha", minlength=PASSWORD_MIN_LENGTH, bind:value=password_signal)
									FieldError(state=form_state, field=LoginField::Password)
								}
							}
							div(class="login_actions") {
								button(type="submit", class="button-primary button-form-submit", disabled=*pending_signal.get()) { "Entrar" }
								(if let Some(message) = (*message_signal.get()).clone() {
									view! { ctx, p(id="login_message", class="p-message") { (message) } }
								} else {
									view! { ctx, }
								})
								div(class="login_register") {
									span(class="span-primary") { "Não tem uma conta?" }
									span(class="span-primary underline") { "Cadastre-se" }
								}
							}
						}
					}
				}
			}
		} else {
			view! { ctx, }
		})
	}
}
