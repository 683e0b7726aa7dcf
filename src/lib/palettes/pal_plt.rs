use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use rand::Rng;

use crate::palettes::palette::{ArgbColor, Palette, PaletteError};

// Toon Boom Harmony palette file, e.g.
// ToonBoomAnimationInc PaletteFile 2
// Solid    ffaaabac                   0x5e2f1c0a9b7d3e41 170 171 172 255

pub const PLT_HEADER: &str = "ToonBoomAnimationInc PaletteFile 2";
pub const PLT_EXTENSION: &str = "plt";
pub const DEFAULT_PLT_NAME: &str = "output";

/// Harmony's per-color id. It's random and never derived from the color itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ColorId(pub u64);

impl ColorId {
	pub fn generate<R: Rng>(rng: &mut R) -> Self {
		Self(rng.random())
	}
}

impl Display for ColorId {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "0x{:016x}", self.0)
	}
}

/// Formats one palette entry. Channels are written in R G B A order.
pub fn format_plt_line(color: &ArgbColor, id: ColorId) -> String {
	format!("Solid    {:<26} {id} {:>3} {:>3} {:>3} {:>3}", color.source, color.r, color.g, color.b, color.a)
}

/// Turns a user-supplied output name into the base name for [`Palette::write_plt_file`]
/// by dropping a trailing extension, so `blah.plt` doesn't end up as `blah.plt.plt`.
pub fn plt_name<S: AsRef<str>>(name: Option<S>) -> String {
	match name {
		Some(name) if !name.as_ref().is_empty() => {
			Path::new(name.as_ref()).with_extension("").to_string_lossy().into_owned()
		}
		_ => DEFAULT_PLT_NAME.to_string(),
	}
}

impl Palette {
	pub fn write_plt<W: Write, R: Rng>(&self, writer: &mut W, rng: &mut R) -> std::io::Result<()> {
		writeln!(writer, "{PLT_HEADER}")?;
		for color in &self.colors {
			writeln!(writer, "{}", format_plt_line(color, ColorId::generate(rng)))?;
		}

		Ok(())
	}

	/// Writes `<dir>/<name>.plt`, replacing any existing file. Returns the written path.
	pub fn write_plt_file_in<P: AsRef<Path>, S: AsRef<str>>(&self, dir: P, name: S) -> Result<PathBuf, PaletteError> {
		let path = dir.as_ref().join(format!("{}.{PLT_EXTENSION}", name.as_ref()));

		let f = File::create(&path)
			.map_err(|err| PaletteError::FileWrite { path: path.clone(), err })?;
		let mut writer = BufWriter::new(f);

		self.write_plt(&mut writer, &mut rand::rng())
			.and_then(|_| writer.flush())
			.map_err(|err| PaletteError::FileWrite { path: path.clone(), err })?;

		Ok(path)
	}

	/// Writes `<name>.plt` to the current working directory.
	pub fn write_plt_file<S: AsRef<str>>(&self, name: S) -> Result<PathBuf, PaletteError> {
		self.write_plt_file_in(".", name)
	}
}
