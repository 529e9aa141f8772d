//! Access to the native build environment.
//!
//! The resolver only needs one capability from the host: build a [`Probe`],
//! run it, and hand back what it printed. [`HostCompiler`] does that with the
//! system C compiler inside a scratch directory that is removed on every exit
//! path.

use std::{
	collections::HashSet,
	ffi::{OsStr, OsString},
	path::{Path, PathBuf},
	process::{Command, Stdio},
	sync::atomic::{AtomicBool, Ordering::Relaxed},
};

use crate::{
	catalog::Catalog,
	error::{BuildFailure, ExecutionFailure, ResolveError},
	probe::Probe,
};

/// The compiler used when `CC` is not set.
pub const DEFAULT_COMPILER: &str = "cc";

/// A native environment able to build and run probes.
pub trait NativeEnvironment {
	/// Builds and runs `probe`, returning everything it wrote to standard output.
	///
	/// Implementations must not cache results between calls.
	fn run_probe(&self, probe: &Probe<'_>) -> Result<String, ResolveError>;
}

/// The host's C compiler, driven as a subprocess.
#[derive(Debug, Clone)]
pub struct HostCompiler {
	/// The compiler executable.
	program:      OsString,
	/// Extra flags, passed before include directories.
	flags:        Vec<OsString>,
	/// Additional `-I` directories.
	include_dirs: Vec<PathBuf>,
}

impl HostCompiler {
	/// Creates a compiler invocation for `program` with no extra flags.
	#[must_use]
	pub fn new(program: impl Into<OsString>) -> Self {
		Self {
			program:      program.into(),
			flags:        Vec::new(),
			include_dirs: Vec::new(),
		}
	}

	/// Creates a compiler invocation from the `CC` and `CFLAGS` environment
	/// variables, falling back to [`DEFAULT_COMPILER`].
	#[must_use]
	pub fn from_env() -> Self {
		let program = std::env::var_os("CC")
			.filter(|cc| !cc.is_empty())
			.unwrap_or_else(|| {
				static HAS_WARNED: AtomicBool = AtomicBool::new(false);
				if !HAS_WARNED.swap(true, Relaxed) {
					log::warn!("`CC` environment variable not set; using '{DEFAULT_COMPILER}'");
				}
				DEFAULT_COMPILER.into()
			});

		Self::new(program).env_flags()
	}

	/// Appends the whitespace separated flags in the `CFLAGS` environment
	/// variable, if it is set.
	#[must_use]
	pub fn env_flags(self) -> Self {
		match std::env::var("CFLAGS") {
			Ok(cflags) => self.flags(cflags.split_ascii_whitespace()),
			Err(std::env::VarError::NotUnicode(_)) => {
				log::warn!("ignoring `CFLAGS`: not valid unicode");
				self
			}
			Err(std::env::VarError::NotPresent) => self,
		}
	}

	/// Appends a single compiler flag.
	#[must_use]
	pub fn flag(mut self, flag: impl Into<OsString>) -> Self {
		self.flags.push(flag.into());
		self
	}

	/// Appends several compiler flags.
	#[must_use]
	pub fn flags<I>(mut self, flags: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<OsString>,
	{
		self.flags.extend(flags.into_iter().map(Into::into));
		self
	}

	/// Adds a directory to the header search path.
	#[must_use]
	pub fn include_dir(mut self, dir: impl Into<PathBuf>) -> Self {
		self.include_dirs.push(dir.into());
		self
	}

	/// The compiler executable.
	#[must_use]
	pub fn program(&self) -> &OsStr {
		&self.program
	}

	/// Returns the command that compiles `source` into the executable `output`.
	#[must_use]
	pub fn command(&self, source: &Path, output: &Path) -> Command {
		let mut cmd = Command::new(&self.program);

		cmd.args(&self.flags);
		for dir in &self.include_dirs {
			cmd.arg("-I").arg(dir);
		}
		cmd.arg("-o").arg(output).arg(source).stdin(Stdio::null());

		cmd
	}
}

impl NativeEnvironment for HostCompiler {
	fn run_probe(&self, probe: &Probe<'_>) -> Result<String, ResolveError> {
		// Removed when dropped, whichever way this function returns.
		let scratch = tempfile::Builder::new()
			.prefix("vconst-probe-")
			.tempdir()
			.map_err(BuildFailure::Workspace)?;

		let source = scratch.path().join("probe.c");
		let exe = scratch.path().join("probe");

		std::fs::write(&source, probe.source()).map_err(BuildFailure::Workspace)?;

		let mut cmd = self.command(&source, &exe);
		log::debug!("compiling probe for {} symbols", probe.catalog().len());
		log::trace!("{cmd:?}");

		let output = cmd.output().map_err(|source| {
			BuildFailure::Spawn {
				program: self.program.to_string_lossy().into_owned(),
				source,
			}
		})?;

		let diagnostics = String::from_utf8_lossy(&output.stderr);

		if !output.status.success() {
			let missing = undeclared(probe.catalog(), &diagnostics);

			if let Some(&first) = missing.first() {
				for name in &missing {
					log::error!("symbol `{name}` is not defined by the native headers");
				}
				return Err(ResolveError::UnresolvedSymbol {
					name: first.to_string(),
				});
			}

			return Err(BuildFailure::Compiler {
				status:  output.status,
				suspect: first_mentioned(probe.catalog(), &diagnostics).map(str::to_string),
				stderr:  diagnostics.into_owned(),
			}
			.into());
		}

		if !diagnostics.trim().is_empty() {
			log::debug!("compiler diagnostics:\n{diagnostics}");
		}

		log::debug!("running probe {}", exe.display());

		let output = Command::new(&exe)
			.stdin(Stdio::null())
			.output()
			.map_err(ExecutionFailure::Spawn)?;

		if !output.status.success() {
			return Err(ExecutionFailure::Status {
				status: output.status,
				stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
			}
			.into());
		}

		String::from_utf8(output.stdout).map_err(|_| ExecutionFailure::NotUtf8.into())
	}
}

/// Returns the catalog names the compiler reported as undeclared, in catalog
/// order.
///
/// Both GCC (`'X' undeclared`) and Clang (`use of undeclared identifier 'X'`)
/// name the identifier on the same line as the word `undeclared`. Spelling
/// suggestions after `did you mean` are ignored.
fn undeclared<'a>(catalog: &Catalog<'a>, diagnostics: &str) -> Vec<&'a str> {
	let reported = diagnostics
		.lines()
		.filter(|line| line.contains("undeclared"))
		.map(|line| line.split("did you mean").next().unwrap_or(line))
		.flat_map(identifiers)
		.collect::<HashSet<_>>();

	catalog
		.entries()
		.iter()
		.map(|entry| entry.name)
		.filter(|name| reported.contains(name))
		.collect()
}

/// Splits `text` into its identifier-like tokens.
fn identifiers(text: &str) -> impl Iterator<Item = &str> {
	text.split(|c: char| !(c.is_ascii_alphanumeric() || c == '_'))
		.filter(|token| !token.is_empty())
}

/// Returns the catalog name that occurs first, as a whole identifier, in
/// `diagnostics`.
fn first_mentioned<'a>(catalog: &Catalog<'a>, diagnostics: &str) -> Option<&'a str> {
	let names = catalog
		.entries()
		.iter()
		.map(|entry| entry.name)
		.collect::<HashSet<_>>();

	identifiers(diagnostics).find_map(|token| names.get(token).copied())
}
