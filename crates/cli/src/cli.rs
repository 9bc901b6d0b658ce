use std::path::PathBuf;

use clap::{ArgAction, Parser};

#[derive(Parser, Debug)]
#[command(name = "marginal")]
#[command(about = "Annotate completion candidates read from stdin")]
#[command(version)]
/// Command-line arguments.
pub struct Cli {
	/// Category the host reports for the session (e.g. file, command)
	#[arg(long, short = 'c')]
	pub category: Option<String>,

	/// Command that opened the session
	#[arg(long)]
	pub command: Option<String>,

	/// Prompt text of the session
	#[arg(long, short = 'p', default_value = "")]
	pub prompt: String,

	/// Current input line, used to complete file name fragments
	#[arg(long)]
	pub input: Option<String>,

	/// Viewport width in columns (defaults to $COLUMNS, then 80)
	#[arg(long, short = 'w')]
	pub width: Option<usize>,

	/// TOML configuration file
	#[arg(long)]
	pub config: Option<PathBuf>,

	/// Number of times to toggle the annotator tables before annotating
	#[arg(long, short = 't', default_value_t = 0)]
	pub toggle: usize,

	/// Increase log verbosity (-v debug, -vv trace)
	#[arg(short, long, action = ArgAction::Count)]
	pub verbose: u8,
}

impl Cli {
	pub fn viewport_width(&self) -> usize {
		self.width
			.or_else(|| std::env::var("COLUMNS").ok()?.trim().parse().ok())
			.filter(|width| *width > 0)
			.unwrap_or(80)
	}

	pub fn log_level(&self) -> tracing::Level {
		match self.verbose {
			0 => tracing::Level::WARN,
			1 => tracing::Level::DEBUG,
			_ => tracing::Level::TRACE,
		}
	}
}
