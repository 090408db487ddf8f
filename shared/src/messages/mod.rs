// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::login::FieldErrors;
use serde::{Deserialize, Serialize};

pub const LOGIN_SUCCESS_MESSAGE: &str = "Login realizado com sucesso!";
pub const INVALID_FIELDS_MESSAGE: &str = "Campos inválidos. Falha ao realizar login.";
pub const LOGIN_FAILED_MESSAGE: &str = "Erro de banco de dados: Falha ao realizar login.";

/// Response data from the server for a login attempt
#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum LoginResponse {
	Success { message: String },
	Invalid { errors: FieldErrors, message: String },
	Failed { message: String },
}

impl LoginResponse {
	pub fn success() -> Self {
		Self::Success {
			message: String::from(LOGIN_SUCCESS_MESSAGE),
		}
	}

	pub fn invalid(errors: FieldErrors) -> Self {
		Self::Invalid {
			errors,
			message: String::from(INVALID_FIELDS_MESSAGE),
		}
	}

	pub fn failed() -> Self {
		Self::Failed {
			message: String::from(LOGIN_FAILED_MESSAGE),
		}
	}

	pub fn message(&self) -> &str {
		match self {
			Self::Success { message } | Self::Invalid { message, .. } | Self::Failed { message } => message,
		}
	}

	pub fn errors(&self) -> Option<&FieldErrors> {
		match self {
			Self::Invalid { errors, .. } => Some(errors),
			_ => None,
		}
	}

	pub fn is_success(&self) -> bool {
		matches!(self, Self::Success { .. })
	}
}
