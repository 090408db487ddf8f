// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::error::RequestError;
use gloo_net::http::Request;
use madr_shared::login::{FieldErrors, LoginField, LoginForm};
use madr_shared::messages::{LoginResponse, INVALID_FIELDS_MESSAGE};
use madr_shared::LOGIN_ENDPOINT;
use sycamore::prelude::*;

/// Everything the login dialog shows besides the input values themselves
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct LoginFormState {
	pub errors: FieldErrors,
	pub message: Option<String>,
	pub pending: bool,
	/// Bumped by every submission and every reset. A response is only applied if it carries the current value.
	pub(crate) generation: u64,
}

/// Identifies one submission so its response can be matched to the form that sent it
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct SubmissionTicket(u64);

impl LoginFormState {
	/// Marks a submission as in flight. Returns `None` if one already was.
	pub fn begin_submission(&mut self) -> Option<SubmissionTicket> {
		if self.pending {
			return None;
		}
		self.generation += 1;
		self.pending = true;
		self.errors = FieldErrors::new();
		self.message = None;
		Some(SubmissionTicket(self.generation))
	}

	fn is_current(&self, ticket: SubmissionTicket) -> bool {
		self.pending && ticket.0 == self.generation
	}

	/// Records a form that failed validation before it was sent
	pub fn reject(&mut self, errors: FieldErrors) {
		self.pending = false;
		self.errors = errors;
		self.message = Some(String::from(INVALID_FIELDS_MESSAGE));
	}

	/// Shows the server's answer. Answers to submissions from before the last reset are dropped; returns whether
	/// the response was applied.
	pub fn apply_response(&mut self, ticket: SubmissionTicket, response: LoginResponse) -> bool {
		if !self.is_current(ticket) {
			return false;
		}
		self.pending = false;
		self.errors = response.errors().cloned().unwrap_or_default();
		self.message = Some(response.message().to_owned());
		true
	}

	pub fn fail(&mut self, ticket: SubmissionTicket, message: impl Into<String>) -> bool {
		if !self.is_current(ticket) {
			return false;
		}
		self.pending = false;
		self.errors = FieldErrors::new();
		self.message = Some(message.into());
		true
	}

	pub fn reset(&mut self) {
		*self = Self {
			generation: self.generation + 1,
			..Self::default()
		};
	}

	/// The one message to show under a field, if any
	pub fn error_for(&self, field: LoginField) -> Option<&str> {
		self.errors.first(field)
	}

	pub fn is_blank(&self) -> bool {
		self.errors.is_empty() && self.message.is_none() && !self.pending
	}
}

/// The ways a user can close the login dialog
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Dismissal {
	Backdrop,
	CloseButton,
	EscapeKey,
}

/// Maps a `KeyboardEvent.key` value to a dismissal. Older browsers report Escape as "Esc".
pub fn dismissal_for_key(key: &str) -> Option<Dismissal> {
	match key {
		"Escape" | "Esc" => Some(Dismissal::EscapeKey),
		_ => None,
	}
}

pub fn dismiss(open: &Signal<bool>, dismissal: Dismissal) {
	if *open.get_untracked() {
		log::debug!("Closing login dialog: {:?}", dismissal);
		open.set(false);
	}
}

/// Clears the form whenever the dialog is closed, so a reopened dialog starts fresh.
pub fn reset_when_closed<'a>(
	ctx: Scope<'a>,
	open: &'a ReadSignal<bool>,
	state: &'a Signal<LoginFormState>,
	email: &'a Signal<String>,
	password: &'a Signal<String>,
) {
	create_effect(ctx, move || {
		if !*open.get() {
			state.modify().reset();
			email.set(String::new());
			password.set(String::new());
		}
	});
}

pub async fn send_login(form: &LoginForm) -> Result<LoginResponse, RequestError> {
	let response = Request::post(LOGIN_ENDPOINT)
		.json(form)
		.map_err(RequestError::Send)?
		.send()
		.await
		.map_err(RequestError::Send)?;
	log::debug!("Login request answered with status {}", response.status());
	response.json().await.map_err(RequestError::Response)
}

#[cfg(test)]
mod tests {
	use super::*;
	use madr_shared::messages::{LOGIN_FAILED_MESSAGE, LOGIN_SUCCESS_MESSAGE};
	use sycamore::reactive::create_scope_immediate;

	fn email_errors(messages: &[&str]) -> FieldErrors {
		let mut errors = FieldErrors::new();
		for message in messages {
			errors.push(LoginField::Email, *message);
		}
		errors
	}

	#[test]
	fn only_one_submission_at_a_time() {
		let mut state = LoginFormState::default();
		let ticket = state.begin_submission().unwrap();
		assert!(state.begin_submission().is_none());
		assert!(state.apply_response(ticket, LoginResponse::success()));
		assert!(!state.pending);
		assert!(state.begin_submission().is_some());
	}

	#[test]
	fn shows_first_error_only() {
		let mut state = LoginFormState::default();
		state.reject(email_errors(&["first", "second"]));
		assert_eq!(state.error_for(LoginField::Email), Some("first"));
		assert_eq!(state.error_for(LoginField::Password), None);
		assert_eq!(state.message.as_deref(), Some(INVALID_FIELDS_MESSAGE));
	}

	#[test]
	fn responses_replace_previous_errors() {
		let mut state = LoginFormState::default();
		state.reject(email_errors(&["bad"]));
		let ticket = state.begin_submission().unwrap();
		state.apply_response(ticket, LoginResponse::success());
		assert!(state.errors.is_empty());
		assert_eq!(state.message.as_deref(), Some(LOGIN_SUCCESS_MESSAGE));

		let ticket = state.begin_submission().unwrap();
		state.apply_response(ticket, LoginResponse::invalid(email_errors(&["server side"])));
		assert_eq!(state.error_for(LoginField::Email), Some("server side"));
	}

	#[test]
	fn transport_failure_clears_pending() {
		let mut state = LoginFormState::default();
		let ticket = state.begin_submission().unwrap();
		assert!(state.fail(ticket, LOGIN_FAILED_MESSAGE));
		assert!(!state.pending);
		assert_eq!(state.message.as_deref(), Some(LOGIN_FAILED_MESSAGE));
	}

	#[test]
	fn response_from_before_a_reset_is_dropped() {
		let mut state = LoginFormState::default();
		let first = state.begin_submission().unwrap();
		state.reset();

		let second = state.begin_submission().unwrap();
		assert!(!state.apply_response(first, LoginResponse::invalid(email_errors(&["stale"]))));
		assert!(!state.fail(first, LOGIN_FAILED_MESSAGE));
		assert_eq!(state.error_for(LoginField::Email), None);
		assert!(state.pending, "the newer submission is still in flight");

		assert!(state.apply_response(second, LoginResponse::success()));
		assert!(!state.pending);
	}

	#[test]
	fn late_response_never_reaches_a_reopened_dialog() {
		create_scope_immediate(|ctx| {
			let open = create_signal(ctx, true);
			let state = create_signal(ctx, LoginFormState::default());
			let email = create_signal(ctx, String::new());
			let password = create_signal(ctx, String::new());
			reset_when_closed(ctx, open, state, email, password);

			let ticket = state.modify().begin_submission().unwrap();
			open.set(false);
			open.set(true);
			assert!(!state.get().pending);

			let applied = state
				.modify()
				.apply_response(ticket, LoginResponse::invalid(email_errors(&["stale"])));
			assert!(!applied);
			assert!(state.get().is_blank());
		});
	}

	#[test]
	fn closing_the_dialog_forgets_errors() {
		create_scope_immediate(|ctx| {
			let open = create_signal(ctx, false);
			let state = create_signal(ctx, LoginFormState::default());
			let email = create_signal(ctx, String::new());
			let password = create_signal(ctx, String::new());
			reset_when_closed(ctx, open, state, email, password);

			open.set(true);
			email.set(String::from("leitor"));
			state.modify().reject(email_errors(&["bad"]));
			assert_eq!(state.get().error_for(LoginField::Email), Some("bad"));

			open.set(false);
			assert!(state.get().is_blank());
			assert!(email.get().is_empty());

			open.set(true);
			assert!(state.get().errors.is_empty());
			assert!(state.get().message.is_none());
		});
	}

	#[test]
	fn errors_survive_while_open() {
		create_scope_immediate(|ctx| {
			let open = create_signal(ctx, true);
			let state = create_signal(ctx, LoginFormState::default());
			let email = create_signal(ctx, String::new());
			let password = create_signal(ctx, String::new());
			reset_when_closed(ctx, open, state, email, password);

			state.modify().reject(email_errors(&["bad"]));
			password.set(String::from("1234"));
			assert_eq!(state.get().error_for(LoginField::Email), Some("bad"));
			assert_eq!(*password.get(), "1234");
		});
	}

	#[test]
	fn escape_is_the_only_dismissing_key() {
		assert_eq!(dismissal_for_key("Escape"), Some(Dismissal::EscapeKey));
		assert_eq!(dismissal_for_key("Esc"), Some(Dismissal::EscapeKey));
		assert_eq!(dismissal_for_key("Enter"), None);
		assert_eq!(dismissal_for_key("e"), None);
	}

	#[test]
	fn every_dismissal_closes_and_clears_the_dialog() {
		for dismissal in [Dismissal::Backdrop, Dismissal::CloseButton, Dismissal::EscapeKey] {
			create_scope_immediate(|ctx| {
				let open = create_signal(ctx, true);
				let state = create_signal(ctx, LoginFormState::default());
				let email = create_signal(ctx, String::from("leitor"));
				let password = create_signal(ctx, String::new());
				reset_when_closed(ctx, open, state, email, password);
				state.modify().reject(email_errors(&["bad"]));

				dismiss(open, dismissal);
				assert!(!*open.get(), "{:?} left the dialog open", dismissal);
				assert!(state.get().is_blank());
				assert!(email.get().is_empty());
			});
		}
	}
}
