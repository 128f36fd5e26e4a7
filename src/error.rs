/// Error type for the application.
///
/// None of these reach the feed itself: a rejected draft or an unknown
/// post id is swallowed where the user interacts with the app.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("validation error: {0}")]
	Validation(#[from] validator::ValidationErrors),
	#[error("invalid value for {var}: {message}")]
	Config { var: &'static str, message: String },
	#[error("io error: {0}")]
	Io(#[from] std::io::Error),
	#[error("json error: {0}")]
	Json(#[from] serde_json::Error),
}

impl Error {
	/// Flattens the error into one message per line, as `field: message`
	/// for validation errors.
	#[must_use]
	pub fn messages(&self) -> Vec<String> {
		match self {
			Self::Validation(errors) => errors
				.field_errors()
				.into_iter()
				.flat_map(|(field, errors)| {
					errors.iter().map(move |error| {
						let message = error
							.message
							.as_deref()
							.unwrap_or(&*error.code)
							.to_owned();

						format!("{field}: {message}")
					})
				})
				.collect(),
			_ => vec![self.to_string()],
		}
	}
}

#[cfg(test)]
mod test {
	use validator::{ValidationError, ValidationErrors};

	use super::Error;

	#[test]
	fn test_validation_messages() {
		let mut errors = ValidationErrors::new();
		errors.add("caption", ValidationError::new("caption_blank"));

		let error = Error::from(errors);

		assert_eq!(error.messages(), vec!["caption: caption_blank".to_owned()]);
	}

	#[test]
	fn test_config_messages() {
		let error = Error::Config {
			var: "SOCIAL_LOG",
			message: "unknown level".into(),
		};

		assert_eq!(
			error.messages(),
			vec!["invalid value for SOCIAL_LOG: unknown level".to_owned()]
		);
	}
}
