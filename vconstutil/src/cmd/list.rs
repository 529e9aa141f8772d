//! Implements the list command, which prints the symbol catalog.

use vconst::{SymbolEntry, v4l2::V4L2};

pub fn run(args: crate::ListArgs) -> Result<(), Box<dyn std::error::Error>> {
	let entries = selected(&args.family);

	if args.json {
		println!("{}", serde_json::to_string_pretty(&entries)?);
		return Ok(());
	}

	let name_width = entries.iter().map(|e| e.name.len()).max().unwrap_or(0);
	for entry in &entries {
		println!(
			"{:name_width$}  {:8}  {}",
			entry.name,
			entry.width.to_string(),
			entry.family
		);
	}

	log::debug!("listed {} of {} symbols", entries.len(), V4L2.len());

	Ok(())
}

/// Returns the catalog entries in the given families, in catalog order. An
/// empty filter selects every entry.
fn selected(families: &[vconst::Family]) -> Vec<&'static SymbolEntry<'static>> {
	V4L2.entries()
		.iter()
		.filter(|entry| families.is_empty() || families.contains(&entry.family))
		.collect()
}
