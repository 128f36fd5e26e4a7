#![warn(clippy::pedantic)]

use std::process::ExitCode;

use simple_social::{session, trace, App, Config};

fn main() -> ExitCode {
	dotenvy::dotenv().ok();

	let config = match Config::from_env() {
		Ok(config) => config,
		Err(error) => {
			eprintln!("{error}");
			return ExitCode::FAILURE;
		}
	};

	trace::init_tracing_subscriber(config.log_level);

	tracing::info!(user = %config.user_id, "starting session");

	let mut app = App::new(&config);
	let stdin = std::io::stdin();

	if let Err(error) = session::run(&mut app, stdin.lock(), std::io::stdout().lock()) {
		tracing::error!(%error, "session failed");
		return ExitCode::FAILURE;
	}

	ExitCode::SUCCESS
}
