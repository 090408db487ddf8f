// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use clap::Parser;

#[derive(Debug, Parser)]
#[command(name = "madr-server")]
#[command(author, version, about = "Serves the Madr landing page and its login endpoint", long_about = None)]
pub struct CliArgs {
	#[arg(short, long, default_value = "config.kdl", help = "Configuration file path")]
	pub config: String,
	#[arg(short, long, help = "Address to listen on, in place of the configured listen-address")]
	pub listen: Option<String>,
}

impl CliArgs {
	/// The address the server should bind, preferring the command line over the configuration file
	pub fn listen_address<'a>(&'a self, configured: &'a str) -> &'a str {
		self.listen.as_deref().unwrap_or(configured)
	}
}
