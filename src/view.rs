//! Read-only projections of the feed for display.

use std::fmt;

use chrono::{DateTime, Utc};

use crate::{format::relative_age, model::Post};

pub const EMPTY_TITLE: &str = "No posts yet";
pub const EMPTY_HINT: &str = "Create your first post to get started!";

/// A single post as the viewer sees it at `now`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PostCard {
	pub position: usize,
	pub initial: Option<char>,
	pub name: String,
	pub age: String,
	pub image_url: Option<String>,
	pub caption: String,
	pub tags: Vec<String>,
	pub likes: u32,
	/// Whether the viewer likes the post, shown as a filled heart.
	pub liked: bool,
}

impl PostCard {
	#[must_use]
	pub fn new(position: usize, post: &Post, viewer: &str, now: DateTime<Utc>) -> Self {
		Self {
			position,
			initial: post.creator.initial(),
			name: post.creator.name.clone(),
			age: relative_age(post.created_at, now),
			image_url: post.image_url.clone().filter(|url| !url.is_empty()),
			caption: post.caption.clone(),
			tags: post.tags().map(|tag| format!("#{tag}")).collect(),
			likes: post.likes(),
			liked: post.is_liked_by(viewer),
		}
	}
}

impl fmt::Display for PostCard {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let initial = self.initial.map(String::from).unwrap_or_default();

		writeln!(f, "{}. [{initial}] {} · {}", self.position, self.name, self.age)?;

		if let Some(image_url) = &self.image_url {
			writeln!(f, "   <image {image_url}>")?;
		}

		writeln!(f, "   {}", self.caption)?;

		if !self.tags.is_empty() {
			writeln!(f, "   {}", self.tags.join(" "))?;
		}

		let heart = if self.liked { '♥' } else { '♡' };
		write!(f, "   {heart} {}", self.likes)
	}
}

/// The whole feed as the viewer sees it at `now`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FeedView {
	pub cards: Vec<PostCard>,
	/// Whether the "Create Post" form is open, which hides the empty
	/// feed placeholder.
	pub show_form: bool,
}

impl FeedView {
	#[must_use]
	pub fn new(posts: &[Post], viewer: &str, now: DateTime<Utc>, show_form: bool) -> Self {
		Self {
			cards: posts
				.iter()
				.enumerate()
				.map(|(index, post)| PostCard::new(index + 1, post, viewer, now))
				.collect(),
			show_form,
		}
	}

	#[must_use]
	pub fn is_placeholder(&self) -> bool {
		self.cards.is_empty() && !self.show_form
	}
}

impl fmt::Display for FeedView {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.is_placeholder() {
			return write!(f, "{EMPTY_TITLE}\n{EMPTY_HINT}");
		}

		for (index, card) in self.cards.iter().enumerate() {
			if index > 0 {
				f.write_str("\n\n")?;
			}

			write!(f, "{card}")?;
		}

		Ok(())
	}
}
