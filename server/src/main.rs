// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use async_std::sync::Arc;
use clap::Parser;
use miette::{IntoDiagnostic, Result};

mod args;
use args::CliArgs;

mod config;
use config::parse_config;

mod login;
use login::StubAuthenticator;

mod web;
use web::{add_api_routes, add_static_routes};

#[async_std::main]
async fn main() -> Result<()> {
	let args = CliArgs::parse();
	let config = parse_config(&args.config)?;

	tide::log::with_level(config.log_level()?);

	let mut app = tide::new();
	add_api_routes(&mut app, Arc::new(StubAuthenticator));
	add_static_routes(&mut app, &config.static_path())?;

	let listen_address = args.listen_address(&config.listen_address).to_owned();
	tide::log::info!("Serving Madr on {}", listen_address);
	app.listen(listen_address).await.into_diagnostic()?;

	Ok(())
}
