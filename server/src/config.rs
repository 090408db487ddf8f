// © 2025 Madr contributors
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use knuffel::Decode;
use tide::log::LevelFilter;
use miette::{miette, IntoDiagnostic, Result};
use std::fs;
use std::path::PathBuf;
use std::str::FromStr;

#[derive(Debug, Decode)]
pub struct ConfigDocument {
	#[knuffel(child, unwrap(argument))]
	pub listen_address: String,
	#[knuffel(child, unwrap(argument), default = String::from("static"))]
	pub static_directory: String,
	#[knuffel(child, unwrap(argument), default = String::from("info"))]
	pub log_level: String,
}

impl ConfigDocument {
	pub fn static_path(&self) -> PathBuf {
		PathBuf::from(&self.static_directory)
	}

	pub fn log_level(&self) -> Result<LevelFilter> {
		LevelFilter::from_str(&self.log_level).map_err(|_| {
			miette!(
				"Unknown log level \"{}\"; expected one of off, error, warn, info, debug, trace",
				self.log_level
			)
		})
	}
}

pub fn parse_config(path: &str) -> Result<ConfigDocument> {
	let config_file_contents = fs::read_to_string(path).into_diagnostic()?;
	parse_config_str(path, &config_file_contents)
}

fn parse_config_str(path: &str, contents: &str) -> Result<ConfigDocument> {
	let config = knuffel::parse(path, contents).into_diagnostic()?;
	Ok(config)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults_apply_to_optional_nodes() {
		let config = parse_config_str("config.kdl", "listen-address \"127.0.0.1:8080\"\n").unwrap();
		assert_eq!(config.listen_address, "127.0.0.1:8080");
		assert_eq!(config.static_path(), PathBuf::from("static"));
		assert_eq!(config.log_level().unwrap(), LevelFilter::Info);
	}

	#[test]
	fn reads_every_node() {
		let config = parse_config_str(
			"config.kdl",
			"listen-address \"0.0.0.0:80\"\nstatic-directory \"/srv/madr\"\nlog-level \"debug\"\n",
		)
		.unwrap();
		assert_eq!(config.static_directory, "/srv/madr");
		assert_eq!(config.log_level().unwrap(), LevelFilter::Debug);
	}

	#[test]
	fn listen_address_is_required() {
		assert!(parse_config_str("config.kdl", "log-level \"warn\"\n").is_err());
	}

	#[test]
	fn rejects_unknown_log_level() {
		let config = parse_config_str("config.kdl", "listen-address \"127.0.0.1:8080\"\nlog-level \"loud\"\n").unwrap();
		assert!(config.log_level().is_err());
	}
}
