// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use regex::Regex;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::sync::OnceLock;

pub const PASSWORD_MIN_LENGTH: usize = 8;
pub const EMAIL_MAX_LENGTH: usize = 255;

pub const INVALID_EMAIL_MESSAGE: &str = "Por favor, insira um e-mail válido.";
pub const EMAIL_TOO_LONG_MESSAGE: &str = "O e-mail deve ter no máximo 255 caracteres.";
pub const PASSWORD_TOO_SHORT_MESSAGE: &str = "A senha deve ter pelo menos 8 caracteres.";

#[derive(Clone, Copy, Debug, Deserialize, Eq, Hash, Ord, PartialEq, PartialOrd, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LoginField {
	Email,
	Password,
}

impl LoginField {
	/// The name of the form input carrying this field
	pub fn name(&self) -> &'static str {
		match self {
			Self::Email => "email",
			Self::Password => "password",
		}
	}
}

/// Login data exactly as the user typed it
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
pub struct LoginForm {
	#[serde(default)]
	pub email: String,
	#[serde(default)]
	pub password: String,
}

/// Login data that passed validation
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LoginCredentials {
	pub email: String,
	pub password: String,
}

/// Validation messages for each form field that failed, in the order they were found.
#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<LoginField, Vec<String>>);

impl FieldErrors {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn push(&mut self, field: LoginField, message: impl Into<String>) {
		self.0.entry(field).or_default().push(message.into());
	}

	pub fn get(&self, field: LoginField) -> Option<&[String]> {
		self.0.get(&field).map(|messages| messages.as_slice())
	}

	/// Gets the message that should be shown for a field. Only one message is shown per field at a time.
	pub fn first(&self, field: LoginField) -> Option<&str> {
		self.get(field).and_then(|messages| messages.first()).map(|message| message.as_str())
	}

	pub fn contains(&self, field: LoginField) -> bool {
		self.0.contains_key(&field)
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}

fn email_pattern() -> &'static Regex {
	static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();
	EMAIL_PATTERN.get_or_init(|| {
		Regex::new(r"^[A-Za-z0-9_'+\-]+(\.[A-Za-z0-9_'+\-]+)*@([A-Za-z0-9]([A-Za-z0-9\-]*[A-Za-z0-9])?\.)+[A-Za-z]{2,}$")
			.expect("email pattern is a valid regular expression")
	})
}

pub fn is_valid_email(email: &str) -> bool {
	email_pattern().is_match(email)
}

/// Checks the login form, collecting every problem with every field.
///
/// The email is trimmed before it's checked; the password is used as given.
pub fn validate_login(form: &LoginForm) -> Result<LoginCredentials, FieldErrors> {
	let mut errors = FieldErrors::new();

	let email = form.email.trim();
	if !is_valid_email(email) {
		errors.push(LoginField::Email, INVALID_EMAIL_MESSAGE);
	}
	if email.chars().count() > EMAIL_MAX_LENGTH {
		errors.push(LoginField::Email, EMAIL_TOO_LONG_MESSAGE);
	}

	if form.password.chars().count() < PASSWORD_MIN_LENGTH {
		errors.push(LoginField::Password, PASSWORD_TOO_SHORT_MESSAGE);
	}

	if errors.is_empty() {
		Ok(LoginCredentials {
			email: email.to_owned(),
			password: form.password.clone(),
		})
	} else {
		Err(errors)
	}
}
