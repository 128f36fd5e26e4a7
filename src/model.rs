use std::collections::BTreeSet;

use macros::model;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::{Validate, ValidationError};

fn validate_caption(caption: &str) -> Result<(), ValidationError> {
	if caption.trim().is_empty() {
		return Err(ValidationError::new("caption_blank"));
	}

	Ok(())
}

/// The author of a post, as displayed above it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Creator {
	/// The free-text display name.
	pub name: String,
	/// An avatar image, if the creator has one.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
}

impl Creator {
	#[must_use]
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			image_url: None,
		}
	}

	/// The first character of the name, shown in place of an avatar.
	#[must_use]
	pub fn initial(&self) -> Option<char> {
		self.name.chars().next()
	}
}

/// A single post in the feed.
///
/// Everything except the like state is fixed at creation. The like state
/// is only reachable through [`Post::toggle_like`], which keeps `likes`
/// equal to the size of `liked_by`.
#[model]
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Post {
	/// The unique identifier of the post.
	#[serde(skip_deserializing)]
	pub id: Uuid,
	/// The user that created the post.
	pub creator: Creator,
	/// The text of the post. Must contain something other than whitespace.
	#[validate(custom(function = "validate_caption"))]
	pub caption: String,
	/// An image shown above the caption. Not checked to be a valid URI.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub image_url: Option<String>,
	/// Comma-separated tags, split only when displayed.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub tags: Option<String>,
	/// The number of users that like the post.
	#[serde(skip_deserializing)]
	likes: u32,
	/// The users that like the post.
	#[serde(skip_deserializing)]
	liked_by: BTreeSet<String>,
	/// The creation time of the post.
	#[serde(skip_deserializing)]
	pub created_at: chrono::DateTime<chrono::Utc>,
}

impl Post {
	/// Builds a post with no likes from a draft.
	#[must_use]
	pub fn new(id: Uuid, draft: PostDraft, created_at: chrono::DateTime<chrono::Utc>) -> Self {
		Self {
			id,
			creator: draft.creator,
			caption: draft.caption,
			image_url: draft.image_url,
			tags: draft.tags,
			likes: 0,
			liked_by: BTreeSet::new(),
			created_at,
		}
	}

	#[must_use]
	pub fn likes(&self) -> u32 {
		self.likes
	}

	#[must_use]
	pub fn liked_by(&self) -> &BTreeSet<String> {
		&self.liked_by
	}

	#[must_use]
	pub fn is_liked_by(&self, user_id: &str) -> bool {
		self.liked_by.contains(user_id)
	}

	/// Adds `user_id` to the likes if absent, removes it otherwise.
	/// Returns whether the user likes the post afterwards.
	pub fn toggle_like(&mut self, user_id: &str) -> bool {
		if self.liked_by.remove(user_id) {
			self.likes -= 1;
			false
		} else {
			self.liked_by.insert(user_id.to_owned());
			self.likes += 1;
			true
		}
	}

	/// The tags as they are displayed, in order and trimmed.
	///
	/// Empty segments are kept, so `"a,,b"` yields `["a", "", "b"]`, but
	/// an empty string has no tags at all.
	pub fn tags(&self) -> impl Iterator<Item = &str> {
		self.tags
			.as_deref()
			.filter(|tags| !tags.is_empty())
			.into_iter()
			.flat_map(|tags| tags.split(','))
			.map(str::trim)
	}
}

impl PostDraft {
	#[must_use]
	pub fn new(creator: Creator, caption: impl Into<String>) -> Self {
		Self {
			creator,
			caption: caption.into(),
			image_url: None,
			tags: None,
		}
	}

	#[must_use]
	pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
		self.image_url = Some(image_url.into());
		self
	}

	#[must_use]
	pub fn with_tags(mut self, tags: impl Into<String>) -> Self {
		self.tags = Some(tags.into());
		self
	}
}

#[cfg(test)]
mod test {
	use uuid::Uuid;
	use validator::Validate;

	use super::{Creator, Post, PostDraft};

	fn post(draft: PostDraft) -> Post {
		Post::new(Uuid::new_v4(), draft, chrono::Utc::now())
	}

	#[test]
	fn test_draft_caption_validation() {
		let creator = Creator::new("John Doe");

		assert!(PostDraft::new(creator.clone(), "Hello").validate().is_ok());
		assert!(PostDraft::new(creator.clone(), "").validate().is_err());
		assert!(PostDraft::new(creator, " \n\t ").validate().is_err());
	}

	#[test]
	fn test_toggle_like() {
		let mut post = post(PostDraft::new(Creator::new("John Doe"), "Hello"));

		assert!(post.toggle_like("current-user"));
		assert_eq!(post.likes(), 1);
		assert!(post.is_liked_by("current-user"));

		assert!(post.toggle_like("someone-else"));
		assert_eq!(post.likes(), 2);

		assert!(!post.toggle_like("current-user"));
		assert_eq!(post.likes(), 1);
		assert!(!post.is_liked_by("current-user"));
		assert_eq!(post.likes() as usize, post.liked_by().len());
	}

	#[test]
	fn test_tags() {
		let post = post(
			PostDraft::new(Creator::new("John Doe"), "Hello")
				.with_tags("travel, photography ,,nature"),
		);

		assert_eq!(
			post.tags().collect::<Vec<_>>(),
			vec!["travel", "photography", "", "nature"]
		);
	}

	#[test]
	fn test_no_tags() {
		let post = post(PostDraft::new(Creator::new("John Doe"), "Hello"));

		assert_eq!(post.tags().count(), 0);

		let post = Post::new(
			Uuid::new_v4(),
			PostDraft::new(Creator::new("John Doe"), "Hello").with_tags(""),
			chrono::Utc::now(),
		);

		assert_eq!(post.tags().count(), 0);
	}

	#[test]
	fn test_blank_tags_kept() {
		let post = post(PostDraft::new(Creator::new("John Doe"), "Hello").with_tags(" "));

		assert_eq!(post.tags().collect::<Vec<_>>(), vec![""]);
	}

	#[test]
	fn test_initial() {
		assert_eq!(Creator::new("Émile").initial(), Some('É'));
		assert_eq!(Creator::new("").initial(), None);
	}

	#[test]
	fn test_serialize_shape() {
		let mut post = post(
			PostDraft::new(Creator::new("John Doe"), "Hello").with_image_url("https://a.b/c.jpg"),
		);
		post.toggle_like("current-user");

		let value = serde_json::to_value(&post).unwrap();

		assert_eq!(value["creator"]["name"], "John Doe");
		assert_eq!(value["imageUrl"], "https://a.b/c.jpg");
		assert_eq!(value["likes"], 1);
		assert_eq!(value["likedBy"], serde_json::json!(["current-user"]));
		assert!(value.get("tags").is_none());
		assert!(value["createdAt"].is_string());
	}

	#[test]
	fn test_draft_deserialize() {
		let draft: PostDraft = serde_json::from_str(
			r#"{ "creator": { "name": "John Doe" }, "caption": "Hello", "tags": "a, b" }"#,
		)
		.unwrap();

		assert_eq!(draft.creator.name, "John Doe");
		assert_eq!(draft.image_url, None);
		assert_eq!(draft.tags.as_deref(), Some("a, b"));
	}
}
