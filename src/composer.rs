use validator::Validate;

use crate::{
	model::{Creator, PostDraft},
	Error,
};

/// The fields of the "Create Post" form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Composer {
	pub name: String,
	pub caption: String,
	pub image_url: String,
	pub tags: String,
}

impl Composer {
	/// An empty form with `name` filled in.
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			..Self::default()
		}
	}

	/// Turns the form into a draft.
	///
	/// A blank caption suppresses the submission and leaves every field as
	/// it was. Otherwise the caption, image and tags are cleared and the
	/// name is kept for the next post.
	pub fn submit(&mut self) -> Option<PostDraft> {
		let draft = PostDraft {
			creator: Creator::new(self.name.clone()),
			caption: self.caption.clone(),
			image_url: non_empty(&self.image_url),
			tags: non_empty(&self.tags),
		};

		if let Err(errors) = draft.validate() {
			tracing::debug!(errors = ?Error::from(errors).messages(), "submission suppressed");
			return None;
		}

		self.caption.clear();
		self.image_url.clear();
		self.tags.clear();

		Some(draft)
	}
}

fn non_empty(value: &str) -> Option<String> {
	(!value.is_empty()).then(|| value.to_owned())
}
