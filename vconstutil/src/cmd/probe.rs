//! Implements the probe command, which prints the C probe source.

use std::io::Write;

use vconst::{Probe, v4l2::V4L2};

pub fn run(_args: crate::ProbeArgs) -> Result<(), Box<dyn std::error::Error>> {
	V4L2.validate()?;

	let mut stdout = std::io::stdout().lock();
	stdout.write_all(Probe::new(&V4L2).source().as_bytes())?;
	stdout.flush()?;

	Ok(())
}
