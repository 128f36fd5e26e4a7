use tracing::{level_filters::LevelFilter, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initializes the tracing subscriber, logging events up to `level`.
///
/// Logs go to stderr since stdout carries the feed.
pub fn init_tracing_subscriber(level: Level) {
	tracing_subscriber::registry()
		.with(LevelFilter::from_level(level))
		.with(
			tracing_subscriber::fmt::layer()
				.with_ansi(true)
				.with_writer(std::io::stderr),
		)
		.init();
}
