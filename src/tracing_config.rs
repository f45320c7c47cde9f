//! Diagnostic logging for the CLI.
//!
//! `NDFIELD_LOG` (or `RUST_LOG`) enables the subscriber with the usual filter
//! syntax, e.g. `NDFIELD_LOG=ndfield=debug`. `NDFIELD_LOG_FORMAT=json` switches
//! to one JSON object per event. Output always goes to stderr.

use tracing_subscriber::prelude::*;
use tracing_subscriber::{EnvFilter, Registry, fmt};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
	Text,
	Json,
}

impl LogFormat {
	fn from_env() -> Self {
		match std::env::var("NDFIELD_LOG_FORMAT").unwrap_or_default().to_lowercase().as_str() {
			"json" => Self::Json,
			_ => Self::Text,
		}
	}
}

fn build_filter() -> EnvFilter {
	match std::env::var("NDFIELD_LOG") {
		Ok(val) => EnvFilter::builder().parse_lossy(val),
		Err(_) => EnvFilter::from_default_env(),
	}
}

/// Install the global subscriber when logging is requested; otherwise do nothing.
pub fn init_tracing() {
	if std::env::var_os("NDFIELD_LOG").is_none() && std::env::var_os("RUST_LOG").is_none() {
		return;
	}

	let filter = build_filter();
	match LogFormat::from_env() {
		LogFormat::Json => {
			let json_layer = fmt::layer().json().with_writer(std::io::stderr);
			Registry::default().with(filter).with(json_layer).init();
		}
		LogFormat::Text => {
			tracing_subscriber::fmt().with_env_filter(filter).with_writer(std::io::stderr).init();
		}
	}
}
