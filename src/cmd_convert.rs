use std::path::PathBuf;

use anyhow::{Context, Result};
use colored::Colorize;

use hex2plt::palettes::pal_plt::plt_name;
use hex2plt::palettes::palette::{Palette, PaletteError};

use crate::commands::Cli;

fn print_debug_palette(pal: &Palette) {
	println!("{:#^40}", " DEBUG MODE ");

	for (i, color) in pal.colors.iter().enumerate() {
		println!(
			"[{i}] {} {:<10} a={:>3} {} {} {}",
			"    ".on_truecolor(color.r, color.g, color.b),
			color.source,
			color.a,
			format!("r={:>3}", color.r).red(),
			format!("g={:>3}", color.g).green(),
			format!("b={:>3}", color.b).blue(),
		);
	}
}

pub(crate) fn convert(cli: &Cli) -> Result<PathBuf> {
	let pal = Palette::load_from_file(&cli.input)
		.with_context(|| format!("Couldn't read colors from {}", cli.input.display()))?;

	if pal.is_empty() {
		return Err(PaletteError::Empty).with_context(|| format!("Nothing to convert in {}", cli.input.display()));
	}

	for color in pal.colors.iter().filter(|c| c.is_truncated()) {
		eprintln!("{} \"{}\" is longer than 32 bits, only {color} is used", "NOTE:".yellow(), color.source);
	}

	if cli.debug {
		print_debug_palette(&pal);
	}

	let name = plt_name(cli.output.as_deref());
	let path = pal.write_plt_file(&name)?;

	println!("Wrote {} colors to {}", pal.len(), path.display());

	Ok(path)
}
