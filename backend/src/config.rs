use std::{
	net::{IpAddr, Ipv4Addr, SocketAddr},
	path::PathBuf,
};

/// Everything the server reads from `.env` (or the real environment) on startup
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	pub host: IpAddr,
	pub port: u16,
	// where the built frontend lives
	pub dist_dir: PathBuf
}

impl Config {
	pub fn from_env() -> Self {
		Self::from_lookup(|key| dotenv::var(key).ok())
	}

	/// Anything that's missing or doesn't parse just gets its default
	pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
		macro_rules! dotenv_num{
			($key:expr, $default:expr, $type:ident) => {
				lookup($key)
					.and_then(|v| v.parse::<$type>().ok())
					.unwrap_or($default)
			}
		}

		Self {
			host: dotenv_num!("BACKEND_HOST", IpAddr::V4(Ipv4Addr::LOCALHOST), IpAddr),
			port: dotenv_num!("BACKEND_PORT", 8080, u16),
			dist_dir: lookup("DIST_DIR")
				.filter(|d| !d.is_empty())
				.map_or_else(|| PathBuf::from("frontend/dist"), PathBuf::from)
		}
	}

	pub fn addr(&self) -> SocketAddr {
		SocketAddr::new(self.host, self.port)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::HashMap;

	fn config_from(vars: &[(&str, &str)]) -> Config {
		let vars = vars.iter()
			.map(|(k, v)| (k.to_string(), v.to_string()))
			.collect::<HashMap<_, _>>();
		Config::from_lookup(|key| vars.get(key).cloned())
	}

	#[test]
	fn defaults_when_nothing_is_set() {
		let config = config_from(&[]);
		assert_eq!(config.addr(), "127.0.0.1:8080".parse().unwrap());
		assert_eq!(config.dist_dir, PathBuf::from("frontend/dist"));
	}

	#[test]
	fn reads_what_is_set() {
		let config = config_from(&[
			("BACKEND_HOST", "0.0.0.0"),
			("BACKEND_PORT", "3000"),
			("DIST_DIR", "/srv/spa"),
		]);
		assert_eq!(config.addr(), "0.0.0.0:3000".parse().unwrap());
		assert_eq!(config.dist_dir, PathBuf::from("/srv/spa"));
	}

	#[test]
	fn garbage_falls_back_to_defaults() {
		let config = config_from(&[
			("BACKEND_HOST", "localhost:80"),
			("BACKEND_PORT", "eighty"),
			("DIST_DIR", ""),
		]);
		assert_eq!(config, config_from(&[]));
	}
}
