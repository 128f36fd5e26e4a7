use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::{composer::Composer, config::Config, store::PostStore, view::FeedView};

/// The root of a session: the feed, the form and who is looking at them.
#[derive(Clone, Debug)]
pub struct App {
	store: PostStore,
	composer: Composer,
	show_form: bool,
	user_id: String,
}

impl App {
	#[must_use]
	pub fn new(config: &Config) -> Self {
		Self {
			store: PostStore::new(),
			composer: Composer::new(config.default_name.clone()),
			show_form: false,
			user_id: config.user_id.clone(),
		}
	}

	#[must_use]
	pub fn store(&self) -> &PostStore {
		&self.store
	}

	#[must_use]
	pub fn composer(&self) -> &Composer {
		&self.composer
	}

	pub fn composer_mut(&mut self) -> &mut Composer {
		&mut self.composer
	}

	#[must_use]
	pub fn user_id(&self) -> &str {
		&self.user_id
	}

	#[must_use]
	pub fn show_form(&self) -> bool {
		self.show_form
	}

	/// Opens the form if closed, closes it otherwise. Returns whether it
	/// is now open.
	pub fn toggle_form(&mut self) -> bool {
		self.show_form = !self.show_form;
		self.show_form
	}

	/// Submits the form, creating a post and closing the form.
	///
	/// Returns `None` when the form is closed or the composer holds a blank
	/// caption; nothing changes in either case.
	pub fn submit(&mut self) -> Option<Uuid> {
		if !self.show_form {
			tracing::debug!("submit with the form closed ignored");
			return None;
		}

		let draft = self.composer.submit()?;

		match self.store.create(draft) {
			Ok(post) => {
				let id = post.id;
				self.show_form = false;
				Some(id)
			}
			Err(error) => {
				tracing::debug!(errors = ?error.messages(), "post rejected");
				None
			}
		}
	}

	/// Toggles the current user's like on a post.
	pub fn like(&mut self, post_id: Uuid) -> bool {
		self.store.toggle_like(post_id, &self.user_id)
	}

	pub fn delete(&mut self, post_id: Uuid) -> bool {
		self.store.delete(post_id)
	}

	#[must_use]
	pub fn feed(&self) -> FeedView {
		self.feed_at(Utc::now())
	}

	#[must_use]
	pub fn feed_at(&self, now: DateTime<Utc>) -> FeedView {
		FeedView::new(self.store.posts(), &self.user_id, now, self.show_form)
	}
}
