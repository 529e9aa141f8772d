//! Utilities used throughout the `vconstutil` CLI.

use std::{io::Write, path::Path};

use vconst::HostCompiler;

/// Builds the host compiler described by the command line.
///
/// `--cc` takes precedence over `$CC`. Flags from `$CFLAGS` are always
/// applied, followed by any `--cflag` arguments.
pub fn host_compiler(config: &crate::CompilerConfig) -> HostCompiler {
	let compiler = match &config.cc {
		Some(cc) => HostCompiler::new(cc).env_flags(),
		None => HostCompiler::from_env(),
	};

	config
		.include_dir
		.iter()
		.fold(compiler.flags(&config.cflag), |cc, dir| cc.include_dir(dir))
}

/// Replaces the file at `path` with `contents` in a single rename.
///
/// The temporary file is created next to `path` so the rename never crosses
/// a filesystem boundary. If anything fails, `path` is left untouched.
pub fn write_atomically(path: &Path, contents: &str) -> Result<(), Box<dyn std::error::Error>> {
	let dir = match path.parent() {
		Some(parent) if !parent.as_os_str().is_empty() => parent,
		_ => Path::new("."),
	};

	let mut file = tempfile::NamedTempFile::new_in(dir)?;
	file.write_all(contents.as_bytes())?;
	file.as_file().sync_all()?;
	file.persist(path)?;

	Ok(())
}

#[cfg(test)]
mod tests {
	use std::path::PathBuf;

	use super::*;

	#[test]
	fn writes_and_replaces() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("v4l2_consts.rs");

		write_atomically(&path, "const A: u32 = 1;\n").unwrap();
		assert_eq!(std::fs::read_to_string(&path).unwrap(), "const A: u32 = 1;\n");

		write_atomically(&path, "const B: u32 = 2;\n").unwrap();
		assert_eq!(std::fs::read_to_string(&path).unwrap(), "const B: u32 = 2;\n");

		// Only the output file remains; no temporaries are left behind.
		assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
	}

	#[test]
	fn missing_directory_leaves_nothing() {
		let dir = tempfile::tempdir().unwrap();
		let path = dir.path().join("missing").join("v4l2_consts.rs");

		assert!(write_atomically(&path, "const A: u32 = 1;\n").is_err());
		assert!(!path.exists());
	}

	#[test]
	fn explicit_compiler_and_includes() {
		let config = crate::CompilerConfig {
			cc:          Some("clang".into()),
			include_dir: vec![PathBuf::from("/opt/a"), PathBuf::from("/opt/b")],
			cflag:       vec!["-DVCONST_TEST=1".into()],
		};

		let cc = host_compiler(&config);
		assert_eq!(cc.program(), "clang");

		let cmd = cc.command(Path::new("probe.c"), Path::new("probe"));
		let args = cmd
			.get_args()
			.map(|arg| arg.to_string_lossy().into_owned())
			.collect::<Vec<_>>();

		// `$CFLAGS` from the test environment may come first.
		let tail = &args[args.len() - 8..];
		assert_eq!(
			tail,
			[
				"-DVCONST_TEST=1",
				"-I",
				"/opt/a",
				"-I",
				"/opt/b",
				"-o",
				"probe",
				"probe.c"
			]
		);
	}
}
