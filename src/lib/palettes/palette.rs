use std::fmt::{Display, Formatter};
use std::io;
use std::path::{Path, PathBuf};

use crate::palettes::ARGB_HEX_DIGITS;
use crate::palettes::pal_hex::{hex_lines_from_file, hex_lines_from_string, SourceLine};
use crate::palettes::pal_paintnet::{is_paintnet_comment, PAINTNET_MAGIC};

/// A color decoded from an ARGB hex string.
///
/// `source` is kept verbatim since the palette writer echoes it instead of re-encoding the channels.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct ArgbColor {
	pub source: String,
	pub a: u8,
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl ArgbColor {
	/// Parses `hex` as a single base-16 integer and splits it into its four channels.
	///
	/// Only plain hex digits are accepted, so prefixes like `0x` or `#` have to be removed by the caller.
	/// Anything above the low 32 bits is dropped.
	pub fn decode<S: Into<String>>(hex: S) -> Result<ArgbColor, PaletteError> {
		let source = hex.into();
		if source.is_empty() || !source.chars().all(|c| c.is_ascii_hexdigit()) {
			return Err(PaletteError::InvalidInput { value: source });
		}

		let low_digits = &source[source.len().saturating_sub(ARGB_HEX_DIGITS)..];
		let v = u32::from_str_radix(low_digits, 16)
			.map_err(|_| PaletteError::InvalidInput { value: source.clone() })?;

		Ok(Self {
			a: ((v >> 24) & 0xFF) as u8,
			r: ((v >> 16) & 0xFF) as u8,
			g: ((v >> 8) & 0xFF) as u8,
			b: (v & 0xFF) as u8,
			source,
		})
	}

	pub fn argb(&self) -> u32 {
		(self.a as u32) << 24 | (self.r as u32) << 16 | (self.g as u32) << 8 | self.b as u32
	}

	/// Whether decoding threw away non-zero digits above bit 31.
	pub fn is_truncated(&self) -> bool {
		self.source.chars().rev().skip(ARGB_HEX_DIGITS).any(|c| c != '0')
	}
}

impl Display for ArgbColor {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:08X}", self.argb())
	}
}

#[derive(Clone, Default, Debug, PartialEq)]
pub struct Palette {
	pub colors: Vec<ArgbColor>,
}

impl Palette {
	pub fn push_color(&mut self, c: ArgbColor) {
		self.colors.push(c);
	}

	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// Decodes every line before returning, so a single bad line fails the whole palette.
	pub fn from_source_lines(lines: Vec<SourceLine>) -> Result<Palette, PaletteError> {
		let mut pal = Palette::default();

		for SourceLine { line, text } in lines {
			let color = ArgbColor::decode(text)
				.map_err(|e| match e {
					PaletteError::InvalidInput { value } => PaletteError::InvalidTextLine { line, value },
					e => e,
				})?;

			pal.push_color(color);
		}

		Ok(pal)
	}

	pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Palette, PaletteError> {
		Self::from_source_lines(hex_lines_from_file(path)?)
	}

	pub fn load_from_string<S: Into<String>>(s: S) -> Result<Palette, PaletteError> {
		Self::from_source_lines(hex_lines_from_string(s)?)
	}

	/// Builds a palette from a whitespace-separated list like `"ffaaabac ff0072ca 80010203"`.
	pub fn from_hex_list<S: AsRef<str>>(s: S) -> Result<Palette, PaletteError> {
		let colors = s.as_ref()
			.split_whitespace()
			.map(ArgbColor::decode)
			.collect::<Result<Vec<ArgbColor>, PaletteError>>()?;

		Ok(Palette { colors })
	}
}

impl From<Vec<ArgbColor>> for Palette {
	fn from(colors: Vec<ArgbColor>) -> Self {
		Palette { colors }
	}
}

#[derive(Debug)]
pub enum PaletteError {
	Empty,
	InvalidInput { value: String },
	InvalidTextLine { line: usize, value: String },
	FileWrite { path: PathBuf, err: io::Error },
	IoErr(io::Error),
}

impl Display for PaletteError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			PaletteError::Empty => write!(f, "The input contains no colors"),
			PaletteError::InvalidInput { value } => write!(f, "\"{value}\" is not a hexadecimal color value"),
			PaletteError::InvalidTextLine { line, value } => write!(f, "Invalid data in line {line}: \"{value}\" is not a hexadecimal color value"),
			PaletteError::FileWrite { path, err } => write!(f, "Can't write {}: {err}", path.display()),
			PaletteError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for PaletteError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			PaletteError::FileWrite { err, .. } => Some(err),
			PaletteError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<io::Error> for PaletteError {
	fn from(e: io::Error) -> Self {
		PaletteError::IoErr(e)
	}
}

/// Text dialects the reader understands, recognized by their first line.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum InputFormat {
	#[default]
	Hex, // one color per line
	PaintNet, // ;paint.net Palette File
}

impl InputFormat {
	pub fn detect(first_line: &str) -> InputFormat {
		if first_line == PAINTNET_MAGIC {
			InputFormat::PaintNet
		} else {
			InputFormat::Hex
		}
	}

	pub(crate) fn is_comment(&self, line: &str) -> bool {
		match self {
			InputFormat::Hex => false,
			InputFormat::PaintNet => is_paintnet_comment(line),
		}
	}
}
