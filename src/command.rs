use std::str::FromStr;

use uuid::Uuid;

use crate::store::PostStore;

pub const HELP: &str = "\
commands:
  form             open or close the Create Post form
  name <text>      set your name
  caption <text>   set the caption
  image <uri>      set the image URL (empty to clear)
  tags <text>      set comma-separated tags (empty to clear)
  submit           create the post
  like <post>      like or unlike a post, by feed position or id
  delete <post>    delete a post, by feed position or id
  feed             show the feed
  export           print the feed as JSON
  help             show this message
  quit             end the session";

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum CommandError {
	#[error("unknown command {0:?}, try `help`")]
	Unknown(String),
	#[error("`{0}` needs a post, by feed position or id")]
	MissingPost(&'static str),
	#[error("{0:?} is not a feed position or post id")]
	InvalidPost(String),
	#[error("no post at position {0}")]
	NoSuchPosition(usize),
}

/// How a command points at a post.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostRef {
	/// 1-based position in the feed as last shown.
	Position(usize),
	Id(Uuid),
}

impl FromStr for PostRef {
	type Err = CommandError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if let Ok(position) = s.parse::<usize>() {
			return Ok(Self::Position(position));
		}

		Uuid::parse_str(s)
			.map(Self::Id)
			.map_err(|_| CommandError::InvalidPost(s.to_owned()))
	}
}

impl PostRef {
	/// Finds the id the reference points at.
	///
	/// An id is returned as-is, even if no post has it, since the store
	/// ignores unknown ids.
	///
	/// # Errors
	///
	/// Returns [`CommandError::NoSuchPosition`] if the position is outside the feed.
	pub fn resolve(self, store: &PostStore) -> Result<Uuid, CommandError> {
		match self {
			Self::Id(id) => Ok(id),
			Self::Position(position) => position
				.checked_sub(1)
				.and_then(|index| store.posts().get(index))
				.map(|post| post.id)
				.ok_or(CommandError::NoSuchPosition(position)),
		}
	}
}

/// A single line of input to a session.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
	ToggleForm,
	Name(String),
	Caption(String),
	ImageUrl(String),
	Tags(String),
	Submit,
	Like(PostRef),
	Delete(PostRef),
	Feed,
	Export,
	Help,
	Quit,
}

impl FromStr for Command {
	type Err = CommandError;

	/// Parses a line. The text after a field command is taken verbatim,
	/// apart from the single space separating it from the command.
	fn from_str(line: &str) -> Result<Self, Self::Err> {
		let line = line.trim_end_matches(['\r', '\n']);
		let (command, rest) = line
			.trim_start()
			.split_once(' ')
			.unwrap_or((line.trim(), ""));

		let post = |name| match rest.trim() {
			"" => Err(CommandError::MissingPost(name)),
			post => post.parse::<PostRef>(),
		};

		Ok(match command {
			"form" => Self::ToggleForm,
			"name" => Self::Name(rest.to_owned()),
			"caption" => Self::Caption(rest.to_owned()),
			"image" => Self::ImageUrl(rest.trim().to_owned()),
			"tags" => Self::Tags(rest.to_owned()),
			"submit" => Self::Submit,
			"like" => Self::Like(post("like")?),
			"delete" => Self::Delete(post("delete")?),
			"feed" => Self::Feed,
			"export" => Self::Export,
			"help" => Self::Help,
			"quit" | "exit" => Self::Quit,
			other => return Err(CommandError::Unknown(other.to_owned())),
		})
	}
}
