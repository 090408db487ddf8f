// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use std::fmt;

/// Errors that can occur while talking to the server over HTTP
#[derive(Debug)]
pub enum RequestError {
	Send(gloo_net::Error),
	Response(gloo_net::Error),
}

impl fmt::Display for RequestError {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Send(error) => write!(f, "Failed to send the request: {}", error),
			Self::Response(error) => write!(f, "The server sent an unreadable response: {}", error),
		}
	}
}
