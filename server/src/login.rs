// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_std::sync::Arc;
use http_types::mime;
use madr_shared::login::{validate_login, LoginCredentials, LoginForm};
use madr_shared::messages::LoginResponse;
use std::fmt;
use tide::utils::async_trait;
use tide::{Body, Request, Response, StatusCode};

#[derive(Debug)]
pub enum AuthenticationError {
	Unavailable(String),
}

impl fmt::Display for AuthenticationError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Unavailable(reason) => write!(f, "The authentication service is unavailable: {}", reason),
		}
	}
}

impl std::error::Error for AuthenticationError {}

/// Something that can check validated credentials
#[async_trait]
pub trait AuthenticationProvider: Send + Sync {
	async fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), AuthenticationError>;
}

/// Accepts every well-formed login without checking it against anything.
///
/// There's no account storage behind the site yet, so this only records that a login was requested.
#[derive(Clone, Copy, Debug, Default)]
pub struct StubAuthenticator;

#[async_trait]
impl AuthenticationProvider for StubAuthenticator {
	async fn authenticate(&self, credentials: &LoginCredentials) -> Result<(), AuthenticationError> {
		tide::log::info!("Login requested for: {}", credentials.email);
		Ok(())
	}
}

/// Validates a login form and, if it's valid, hands it to the authentication provider.
///
/// Invalid forms never reach the provider.
pub async fn submit_login<P: AuthenticationProvider + ?Sized>(form: LoginForm, provider: &P) -> LoginResponse {
	let credentials = match validate_login(&form) {
		Ok(credentials) => credentials,
		Err(errors) => return LoginResponse::invalid(errors),
	};

	match provider.authenticate(&credentials).await {
		Ok(()) => LoginResponse::success(),
		Err(error) => {
			tide::log::error!("Login for {} failed: {}", credentials.email, error);
			LoginResponse::failed()
		}
	}
}

fn response_status(response: &LoginResponse) -> StatusCode {
	match response {
		LoginResponse::Success { .. } => StatusCode::Ok,
		LoginResponse::Invalid { .. } => StatusCode::UnprocessableEntity,
		LoginResponse::Failed { .. } => StatusCode::InternalServerError,
	}
}

/// POST /api/login
///
/// Takes the login form as either JSON or a URL-encoded form body. Responds with a [LoginResponse] as JSON.
pub async fn login(mut request: Request<()>, provider: Arc<dyn AuthenticationProvider>) -> tide::Result {
	let is_form_body = request
		.content_type()
		.map(|content_type| content_type.essence() == mime::FORM.essence())
		.unwrap_or(false);
	let form: tide::Result<LoginForm> = if is_form_body {
		request.body_form().await
	} else {
		request.body_json().await
	};
	let form = match form {
		Ok(form) => form,
		Err(error) => {
			tide::log::debug!("Unreadable login request body: {}", error);
			return Err(tide::Error::new(
				StatusCode::BadRequest,
				anyhow::Error::msg("The login form couldn't be read."),
			));
		}
	};

	let login_response = submit_login(form, provider.as_ref()).await;

	let mut response = Response::new(response_status(&login_response));
	response.set_body(Body::from_json(&login_response)?);
	Ok(response)
}
