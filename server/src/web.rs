// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use crate::login::{login, AuthenticationProvider};
use async_std::sync::Arc;
use madr_shared::LOGIN_ENDPOINT;
use miette::IntoDiagnostic;
use std::path::Path;
use tide::Server;

pub fn add_api_routes(app: &mut Server<()>, provider: Arc<dyn AuthenticationProvider>) {
	app.at(LOGIN_ENDPOINT).post({
		let provider = Arc::clone(&provider);
		move |request| login(request, Arc::clone(&provider))
	});
}

/// Serves the client bundle. The landing page is the directory's index.html; everything else is looked up as a file.
pub fn add_static_routes(app: &mut Server<()>, static_directory: &Path) -> miette::Result<()> {
	app.at("/")
		.serve_file(static_directory.join("index.html"))
		.into_diagnostic()?;
	app.at("/").serve_dir(static_directory).into_diagnostic()?;
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::login::StubAuthenticator;
	use madr_shared::login::{LoginField, LoginForm};
	use madr_shared::messages::{LoginResponse, LOGIN_SUCCESS_MESSAGE};
	use tide::http::{mime, Body, Method, Request, Response, StatusCode, Url};

	fn test_app() -> Server<()> {
		let mut app = tide::new();
		add_api_routes(&mut app, Arc::new(StubAuthenticator));
		app
	}

	fn login_request() -> Request {
		Request::new(Method::Post, Url::parse("http://localhost/api/login").unwrap())
	}

	#[async_std::test]
	async fn accepts_json_login() {
		let mut request = login_request();
		let form = LoginForm {
			email: String::from("leitor@madr.com"),
			password: String::from("romances1"),
		};
		request.set_body(Body::from_json(&form).unwrap());

		let mut response: Response = test_app().respond(request).await.unwrap();
		assert_eq!(response.status(), StatusCode::Ok);
		let body: LoginResponse = response.body_json().await.unwrap();
		assert_eq!(body.message(), LOGIN_SUCCESS_MESSAGE);
	}

	#[async_std::test]
	async fn accepts_url_encoded_form() {
		let mut request = login_request();
		request.set_body(Body::from_string(String::from(
			"email=leitor%40madr.com&password=romances1",
		)));
		request.set_content_type(mime::FORM);

		let mut response: Response = test_app().respond(request).await.unwrap();
		assert_eq!(response.status(), StatusCode::Ok);
		let body: LoginResponse = response.body_json().await.unwrap();
		assert!(body.is_success());
	}

	#[async_std::test]
	async fn invalid_login_returns_field_errors() {
		let mut request = login_request();
		request.set_body(Body::from_json(&serde_json::json!({ "email": "leitor", "password": "romances1" })).unwrap());

		let mut response: Response = test_app().respond(request).await.unwrap();
		assert_eq!(response.status(), StatusCode::UnprocessableEntity);
		let body: LoginResponse = response.body_json().await.unwrap();
		let errors = body.errors().unwrap();
		assert!(errors.first(LoginField::Email).is_some());
		assert!(!errors.contains(LoginField::Password));
	}

	#[async_std::test]
	async fn malformed_body_is_a_bad_request() {
		let mut request = login_request();
		request.set_body(Body::from_string(String::from("{ not json")));
		request.set_content_type(mime::JSON);

		let response: Response = test_app().respond(request).await.unwrap();
		assert_eq!(response.status(), StatusCode::BadRequest);
	}

	#[async_std::test]
	async fn login_endpoint_only_takes_posts() {
		let request = Request::new(Method::Get, Url::parse("http://localhost/api/login").unwrap());
		let response: Response = test_app().respond(request).await.unwrap();
		assert_eq!(response.status(), StatusCode::MethodNotAllowed);
	}
}
