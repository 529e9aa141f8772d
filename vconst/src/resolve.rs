//! The resolver.

use crate::{
	catalog::{Catalog, SymbolEntry},
	error::{ExecutionFailure, ResolveError},
	native::NativeEnvironment,
	probe::{Probe, Report},
	record::ResolvedConstant,
};

/// Resolves every symbol in `catalog` against `native`.
///
/// On success, returns exactly one constant per catalog entry, in catalog
/// order. Any failure (an undefined symbol, a probe that does not build or
/// run, or a value wider than its declared width) fails the whole call and
/// no constants are returned.
///
/// Values are obtained from `native` on every call; nothing is cached.
pub fn resolve(
	catalog: &Catalog<'_>,
	native: &impl NativeEnvironment,
) -> Result<Vec<ResolvedConstant>, ResolveError> {
	catalog.validate()?;

	let probe = Probe::new(catalog);
	let stdout = native.run_probe(&probe)?;
	let reports = probe.parse_output(&stdout).map_err(ExecutionFailure::from)?;

	log::debug!("probe reported {} symbols", reports.len());

	catalog
		.entries()
		.iter()
		.zip(reports)
		.map(|(entry, report)| constant(entry, report))
		.collect()
}

/// Builds the constant for `entry` from what the probe reported for it.
///
/// The value is first reduced to its native size, which undoes the sign
/// extension a signed native type picks up when widened to 64 bits, and
/// must then fit the entry's declared width.
fn constant(entry: &SymbolEntry<'_>, report: Report) -> Result<ResolvedConstant, ResolveError> {
	let Report { size, value } = report;
	let value = match size.checked_mul(8) {
		Some(bits) if bits < u64::BITS => value & ((1_u64 << bits) - 1),
		_ => value,
	};

	if !entry.width.fits(value) {
		return Err(ResolveError::WidthMismatch {
			name:         entry.name.to_string(),
			declared:     entry.width,
			native_bytes: size,
			value,
		});
	}

	log::trace!("{} = {value:#x} ({size} bytes)", entry.name);

	Ok(ResolvedConstant {
		name:  entry.name.to_string(),
		width: entry.width,
		value,
	})
}
