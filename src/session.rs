use std::io::{BufRead, Write};

use crate::{
	app::App,
	command::{Command, HELP},
	Error,
};

/// Runs a session, reading one command per line from `input` until it
/// ends or a `quit` command.
///
/// Bad commands are reported on `output` and the session carries on.
///
/// # Errors
///
/// Returns an error if reading `input` or writing `output` fails.
pub fn run<R, W>(app: &mut App, input: R, mut output: W) -> Result<(), Error>
where
	R: BufRead,
	W: Write,
{
	writeln!(output, "{}", app.feed())?;

	for line in input.lines() {
		let line = line?;

		if line.trim().is_empty() {
			continue;
		}

		let command = match line.parse::<Command>() {
			Ok(command) => command,
			Err(error) => {
				writeln!(output, "error: {error}")?;
				continue;
			}
		};

		if !apply(app, command, &mut output)? {
			break;
		}
	}

	output.flush()?;

	Ok(())
}

/// Applies a single command. Returns `false` once the session should end.
fn apply<W: Write>(app: &mut App, command: Command, output: &mut W) -> Result<bool, Error> {
	match command {
		Command::ToggleForm => {
			let open = app.toggle_form();
			let composer = app.composer();

			if open {
				writeln!(output, "Create Post (posting as {})", composer.name)?;
			} else {
				writeln!(output, "{}", app.feed())?;
			}
		}
		Command::Name(name) => app.composer_mut().name = name,
		Command::Caption(caption) => app.composer_mut().caption = caption,
		Command::ImageUrl(image_url) => app.composer_mut().image_url = image_url,
		Command::Tags(tags) => app.composer_mut().tags = tags,
		Command::Submit => {
			if app.submit().is_some() {
				writeln!(output, "{}", app.feed())?;
			} else if !app.show_form() {
				writeln!(output, "error: the form is closed, open it with `form`")?;
			}
		}
		Command::Like(post) | Command::Delete(post) => {
			let id = match post.resolve(app.store()) {
				Ok(id) => id,
				Err(error) => {
					writeln!(output, "error: {error}")?;
					return Ok(true);
				}
			};

			if matches!(command, Command::Like(..)) {
				app.like(id);
			} else {
				app.delete(id);
			}

			writeln!(output, "{}", app.feed())?;
		}
		Command::Feed => writeln!(output, "{}", app.feed())?,
		Command::Export => {
			serde_json::to_writer_pretty(&mut *output, app.store().posts())?;
			writeln!(output)?;
		}
		Command::Help => writeln!(output, "{HELP}")?,
		Command::Quit => return Ok(false),
	}

	Ok(true)
}
