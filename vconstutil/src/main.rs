//! CLI that resolves native V4L2 constants for downstream builds.

pub(crate) mod cmd;
pub(crate) mod util;

use std::path::PathBuf;

use clap::Parser;

/// vconstutil: native V4L2 constant resolver
///
/// Compiles a probe against the host's V4L2 headers and prints the values
/// it reports as Rust constant declarations, one per line.
#[derive(Parser, Debug)]
struct Args {
	/// Log verbosely. Specify multiple times for more verbosity.
	#[clap(long, short = 'v', action = clap::ArgAction::Count)]
	pub verbose: u8,
	/// The command to execute
	#[clap(subcommand)]
	command:     Command,
}

/// Subcommands for the resolver utility
#[derive(Parser, Debug)]
enum Command {
	/// Resolves every catalog symbol and prints the constant declarations
	Resolve(ResolveArgs),
	/// Lists the symbol catalog
	List(ListArgs),
	/// Prints the C probe source without compiling it
	Probe(ProbeArgs),
}

/// Native compiler configuration.
#[derive(Parser, Debug)]
pub(crate) struct CompilerConfig {
	/// The C compiler to use. Defaults to `$CC`, then `cc`.
	#[clap(long)]
	pub cc: Option<String>,

	/// Adds a directory to the header search path.
	#[clap(long = "include-dir", short = 'I')]
	pub include_dir: Vec<PathBuf>,

	/// Passes an extra flag to the compiler, after any in `$CFLAGS`.
	#[clap(long, allow_hyphen_values = true)]
	pub cflag: Vec<String>,
}

/// Arguments for the `resolve` command
#[derive(Parser, Debug)]
pub(crate) struct ResolveArgs {
	/// Compiler configuration arguments.
	#[clap(flatten)]
	pub compiler: CompilerConfig,

	/// Writes the declarations to this file instead of standard output.
	///
	/// The file is replaced in one step, and only if every symbol resolved.
	#[clap(long, short = 'o')]
	pub output: Option<PathBuf>,

	/// Print the compiler command and probe source instead of running them.
	#[clap(long)]
	pub dry_run: bool,
}

/// Arguments for the `list` command
#[derive(Parser, Debug)]
pub(crate) struct ListArgs {
	/// Only list the given families (e.g. `request`, `pixel-format`).
	#[clap(long, short = 'f', value_delimiter = ',')]
	pub family: Vec<vconst::Family>,

	/// Emit JSON instead of plain text.
	#[clap(long)]
	pub json: bool,
}

/// Arguments for the `probe` command
#[derive(Parser, Debug)]
pub(crate) struct ProbeArgs {}

fn pmain() -> Result<(), Box<dyn std::error::Error>> {
	let args = Args::parse();

	let verbosity = match args.verbose {
		0 => log::LevelFilter::Info,
		1 => log::LevelFilter::Debug,
		_ => log::LevelFilter::Trace,
	};

	log::set_max_level(verbosity);
	colog::default_builder().filter_level(verbosity).try_init()?;

	match args.command {
		Command::Resolve(args) => {
			cmd::resolve::run(args)?;
		}
		Command::List(args) => {
			cmd::list::run(args)?;
		}
		Command::Probe(args) => {
			cmd::probe::run(args)?;
		}
	}

	Ok(())
}

fn main() {
	if let Err(e) = pmain() {
		log::error!("fatal: {}", e);
		std::process::exit(1);
	}
}
