use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::palettes::palette::{InputFormat, PaletteError};

/// A candidate color string together with the 1-based line it was read from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceLine {
	pub line: usize,
	pub text: String,
}

fn hex_lines_internal<R: BufRead>(reader: R) -> Result<Vec<SourceLine>, PaletteError> {
	let mut format = InputFormat::default();
	let mut lines = Vec::new();

	for (i, line) in reader.lines().enumerate() {
		let line = line?;
		if i == 0 {
			format = InputFormat::detect(&line);
		}

		if format.is_comment(&line) {
			continue;
		}

		let trimmed_line = line.trim();
		if trimmed_line.is_empty() {
			continue;
		}

		lines.push(SourceLine { line: i + 1, text: trimmed_line.to_owned() });
	}

	Ok(lines)
}

/// Reads the color lines of a hex list file, dropping comments if the file turns out to be a paint.net palette.
/// The lines aren't validated here.
pub fn hex_lines_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<SourceLine>, PaletteError> {
	let f = File::open(path)?;
	let reader = BufReader::new(f);
	hex_lines_internal(reader)
}

pub fn hex_lines_from_string<S: Into<String>>(s: S) -> Result<Vec<SourceLine>, PaletteError> {
	let s = s.into();
	let reader = BufReader::new(s.as_bytes());
	hex_lines_internal(reader)
}
