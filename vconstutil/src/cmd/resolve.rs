//! Implements the resolve command, which compiles and runs the probe against
//! the host headers and emits the constant declarations.

use std::{io::Write, path::Path};

use vconst::{Probe, v4l2::V4L2};

pub fn run(args: crate::ResolveArgs) -> Result<(), Box<dyn std::error::Error>> {
	let compiler = crate::util::host_compiler(&args.compiler);

	if args.dry_run {
		V4L2.validate()?;
		let cmd = compiler.command(Path::new("probe.c"), Path::new("probe"));
		log::info!("would compile with: {cmd:?}");
		log::info!("probe source:\n{}", Probe::new(&V4L2).source());
		return Ok(());
	}

	log::info!(
		"resolving {} symbols from {}",
		V4L2.len(),
		V4L2.headers().join(", ")
	);

	let constants = vconst::resolve(&V4L2, &compiler)?;

	if let Some(path) = &args.output {
		crate::util::write_atomically(path, &vconst::render(&constants))?;
		log::info!("wrote {} constants to {}", constants.len(), path.display());
	} else {
		let mut stdout = std::io::stdout().lock();
		vconst::emit(&constants, &mut stdout)?;
		stdout.flush()?;
	}

	Ok(())
}
