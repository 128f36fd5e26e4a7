use std::sync::Arc;

use chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use crate::{
	model::{Post, PostDraft},
	Error,
};

/// The ordered feed of posts, newest first.
///
/// Every mutation builds a new collection and swaps it in, so a snapshot
/// taken with [`PostStore::snapshot`] never changes after the fact.
#[derive(Clone, Debug)]
pub struct PostStore {
	posts: Arc<[Post]>,
}

impl Default for PostStore {
	fn default() -> Self {
		Self::new()
	}
}

impl PostStore {
	#[must_use]
	pub fn new() -> Self {
		Self {
			posts: Arc::from(Vec::new()),
		}
	}

	/// A consistent view of the feed at this moment.
	#[must_use]
	pub fn snapshot(&self) -> Arc<[Post]> {
		Arc::clone(&self.posts)
	}

	#[must_use]
	pub fn posts(&self) -> &[Post] {
		&self.posts
	}

	#[must_use]
	pub fn get(&self, post_id: Uuid) -> Option<&Post> {
		self.posts.iter().find(|post| post.id == post_id)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.posts.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.posts.is_empty()
	}

	/// Creates a post from the draft and puts it at the top of the feed.
	///
	/// # Errors
	///
	/// Returns [`Error::Validation`] if the caption is blank, in which
	/// case the feed is left as it was.
	pub fn create(&mut self, draft: PostDraft) -> Result<&Post, Error> {
		self.create_at(draft, Utc::now())
	}

	/// Same as [`PostStore::create`], with an explicit creation time.
	///
	/// # Errors
	///
	/// Returns [`Error::Validation`] if the caption is blank.
	#[tracing::instrument(skip_all)]
	pub fn create_at(&mut self, draft: PostDraft, created_at: DateTime<Utc>) -> Result<&Post, Error> {
		draft.validate()?;

		let post = Post::new(Uuid::new_v4(), draft, created_at);

		tracing::info!(post = %post.id, creator = %post.creator.name, "created post");

		self.posts = std::iter::once(post)
			.chain(self.posts.iter().cloned())
			.collect();

		Ok(&self.posts[0])
	}

	/// Toggles `user_id`'s like on the post. Returns `false`, leaving the
	/// feed untouched, if no post has the id.
	pub fn toggle_like(&mut self, post_id: Uuid, user_id: &str) -> bool {
		if self.get(post_id).is_none() {
			tracing::debug!(post = %post_id, "like on unknown post ignored");
			return false;
		}

		self.posts = self
			.posts
			.iter()
			.map(|post| {
				let mut post = post.clone();

				if post.id == post_id {
					let liked = post.toggle_like(user_id);
					tracing::debug!(post = %post_id, user = user_id, liked, likes = post.likes(), "toggled like");
				}

				post
			})
			.collect();

		true
	}

	/// Removes the post from the feed. Returns `false`, leaving the feed
	/// untouched, if no post has the id.
	pub fn delete(&mut self, post_id: Uuid) -> bool {
		if self.get(post_id).is_none() {
			tracing::debug!(post = %post_id, "delete of unknown post ignored");
			return false;
		}

		self.posts = self
			.posts
			.iter()
			.filter(|post| post.id != post_id)
			.cloned()
			.collect();

		tracing::debug!(post = %post_id, "deleted post");

		true
	}
}

#[cfg(test)]
mod test {
	use std::collections::HashSet;

	use uuid::Uuid;

	use super::PostStore;
	use crate::model::{Creator, PostDraft};

	fn draft(caption: &str) -> PostDraft {
		PostDraft::new(Creator::new("John Doe"), caption)
	}

	fn assert_like_invariant(store: &PostStore) {
		for post in store.posts() {
			assert_eq!(post.likes() as usize, post.liked_by().len());
		}
	}

	#[test]
	fn test_create_prepends() {
		let mut store = PostStore::new();

		let first = store.create(draft("first")).unwrap().id;
		let second = store.create(draft("second")).unwrap().id;

		assert_eq!(store.len(), 2);
		assert_eq!(store.posts()[0].id, second);
		assert_eq!(store.posts()[1].id, first);
		assert_eq!(store.posts()[0].likes(), 0);
		assert!(store.posts()[0].liked_by().is_empty());
	}

	#[test]
	fn test_create_blank_caption() {
		let mut store = PostStore::new();
		store.create(draft("kept")).unwrap();

		let before = store.snapshot();

		for caption in ["", " ", "\n\t  "] {
			assert!(store.create(draft(caption)).is_err());
		}

		assert_eq!(store.posts(), &before[..]);
	}

	#[test]
	fn test_create_unique_ids() {
		let mut store = PostStore::new();

		for i in 0..100 {
			store.create(draft(&format!("post {i}"))).unwrap();
		}

		let ids = store.posts().iter().map(|post| post.id).collect::<HashSet<_>>();

		assert_eq!(ids.len(), 100);
	}

	#[test]
	fn test_toggle_like_twice_restores() {
		let mut store = PostStore::new();
		let id = store.create(draft("Hello")).unwrap().id;
		store.toggle_like(id, "someone-else");

		let before = store.get(id).unwrap().clone();

		assert!(store.toggle_like(id, "current-user"));
		assert_eq!(store.get(id).unwrap().likes(), 2);
		assert!(store.toggle_like(id, "current-user"));

		assert_eq!(store.get(id).unwrap(), &before);
	}

	#[test]
	fn test_toggle_like_unknown_post() {
		let mut store = PostStore::new();
		store.create(draft("Hello")).unwrap();

		let before = store.snapshot();

		assert!(!store.toggle_like(Uuid::new_v4(), "current-user"));
		assert!(std::sync::Arc::ptr_eq(&before, &store.snapshot()));
	}

	#[test]
	fn test_toggle_like_only_touches_target() {
		let mut store = PostStore::new();
		let a = store.create(draft("a")).unwrap().id;
		let b = store.create(draft("b")).unwrap().id;

		store.toggle_like(a, "current-user");

		assert_eq!(store.get(a).unwrap().likes(), 1);
		assert_eq!(store.get(b).unwrap().likes(), 0);
	}

	#[test]
	fn test_delete() {
		let mut store = PostStore::new();
		let a = store.create(draft("a")).unwrap().id;
		let b = store.create(draft("b")).unwrap().id;
		let c = store.create(draft("c")).unwrap().id;

		assert!(store.delete(b));

		let ids = store.posts().iter().map(|post| post.id).collect::<Vec<_>>();
		assert_eq!(ids, vec![c, a]);
	}

	#[test]
	fn test_delete_unknown_post() {
		let mut store = PostStore::new();
		store.create(draft("a")).unwrap();
		store.create(draft("b")).unwrap();

		let before = store.snapshot();

		assert!(!store.delete(Uuid::new_v4()));
		assert_eq!(store.posts(), &before[..]);
	}

	#[test]
	fn test_snapshot_is_stable() {
		let mut store = PostStore::new();
		let id = store.create(draft("Hello")).unwrap().id;

		let snapshot = store.snapshot();

		store.toggle_like(id, "current-user");
		store.create(draft("World")).unwrap();

		assert_eq!(snapshot.len(), 1);
		assert_eq!(snapshot[0].likes(), 0);
		assert_eq!(store.len(), 2);
	}

	#[test]
	fn test_like_invariant_over_sequence() {
		let mut store = PostStore::new();
		let users = ["current-user", "alice", "bob"];

		let mut ids = Vec::new();
		for i in 0..5 {
			ids.push(store.create(draft(&format!("post {i}"))).unwrap().id);
		}

		for step in 0..60 {
			let id = ids[step % ids.len()];
			let user = users[step % users.len()];

			store.toggle_like(id, user);
			assert_like_invariant(&store);

			if step % 17 == 0 {
				store.delete(id);
				assert_like_invariant(&store);
			}
		}
	}
}
