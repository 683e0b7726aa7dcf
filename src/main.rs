use std::fs;
use std::process::ExitCode;

use clap::Parser;
use humansize::DECIMAL;

use crate::cmd_convert::convert;
use crate::commands::Cli;

mod cmd_convert;
mod commands;

fn main() -> ExitCode {
	let cli = Cli::parse();

	match convert(&cli) {
		Ok(output) => {
			match fs::metadata(&output) {
				Ok(m) => {
					let size = humansize::format_size(m.len(), DECIMAL);
					println!("Output file size: {size}");
				}
				Err(err) => {
					eprintln!("Can't determine output file size: {err}");
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
