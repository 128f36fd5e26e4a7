use tracing::Level;

use crate::Error;

pub const DEFAULT_USER_ID: &str = "current-user";
pub const DEFAULT_NAME: &str = "John Doe";

/// Settings for a session, read from the environment (and `.env`).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
	/// `SOCIAL_USER_ID`: the identity that likes posts.
	pub user_id: String,
	/// `SOCIAL_DEFAULT_NAME`: the name the composer starts with.
	pub default_name: String,
	/// `SOCIAL_LOG`: the most verbose level that is logged.
	pub log_level: Level,
}

impl Default for Config {
	fn default() -> Self {
		Self {
			user_id: DEFAULT_USER_ID.into(),
			default_name: DEFAULT_NAME.into(),
			log_level: Level::INFO,
		}
	}
}

impl Config {
	/// Reads the config from the process environment.
	///
	/// # Errors
	///
	/// Returns [`Error::Config`] if `SOCIAL_LOG` is not a log level.
	pub fn from_env() -> Result<Self, Error> {
		Self::from_lookup(|var| std::env::var(var).ok())
	}

	/// Reads the config through `lookup`, falling back to the defaults for
	/// missing or empty variables.
	///
	/// # Errors
	///
	/// Returns [`Error::Config`] if `SOCIAL_LOG` is not a log level.
	pub fn from_lookup<F>(lookup: F) -> Result<Self, Error>
	where
		F: Fn(&'static str) -> Option<String>,
	{
		let lookup = |var| lookup(var).filter(|value| !value.trim().is_empty());
		let defaults = Self::default();

		let log_level = match lookup("SOCIAL_LOG") {
			Some(level) => level.trim().parse().map_err(|_| Error::Config {
				var: "SOCIAL_LOG",
				message: format!("{level:?} is not one of trace, debug, info, warn, error"),
			})?,
			None => defaults.log_level,
		};

		Ok(Self {
			user_id: lookup("SOCIAL_USER_ID").unwrap_or(defaults.user_id),
			default_name: lookup("SOCIAL_DEFAULT_NAME").unwrap_or(defaults.default_name),
			log_level,
		})
	}
}
