use clap::Parser;
use const_format::formatcp;
use std::path::PathBuf;

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Converts a list of ARGB hex colors into a Toon Boom Harmony palette (.plt)")]
pub(crate) struct Cli {
	#[arg(help = "A text file with one ARGB hex color per line. paint.net palettes are supported.")]
	pub input: PathBuf,
	#[arg(help = "The output palette name. Any extension is replaced with .plt. [default: output]")]
	pub output: Option<String>,

	#[arg(long, help = "Prints every decoded color.")]
	pub debug: bool,
}
