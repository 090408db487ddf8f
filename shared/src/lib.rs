// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

pub mod login;
pub mod messages;

/// Path of the login submission endpoint, relative to the site root
pub const LOGIN_ENDPOINT: &str = "/api/login";
