//! Native probe program generation and output parsing.
//!
//! The probe is a C program that prints one line per catalog entry, in
//! catalog order:
//!
//! ```text
//! <index> <name> <sizeof> <value>
//! ```
//!
//! carrying the size in bytes of the expression the headers define for the
//! symbol, and its value cast to `unsigned long long`. Every symbol is
//! referenced directly, so macros, enumerators and constant objects are all
//! accepted; a symbol the headers lack makes the probe fail to compile.

use std::fmt::Write as _;

use crate::{
	catalog::{Catalog, SymbolEntry},
	error::MalformedOutput,
};

/// Reporting macros and the start of `main`, emitted after the includes.
const PRELUDE: &str = r##"
#define VCONST_REPORT(index, sym) \
	printf("%u %s %u %llu\n", (unsigned)(index), #sym, (unsigned)sizeof(sym), (unsigned long long)(sym))

int main(void)
{
"##;

/// A probe program for a single catalog.
#[derive(Debug, Clone, Copy)]
pub struct Probe<'a> {
	/// The catalog this probe reports on.
	catalog: &'a Catalog<'a>,
}

/// What the probe reported for one entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Report {
	/// `sizeof` the symbol's expression, in bytes.
	pub size:  u32,
	/// The value, widened to 64 bits by the native compiler.
	pub value: u64,
}

impl<'a> Probe<'a> {
	/// Creates a probe for `catalog`.
	#[must_use]
	pub const fn new(catalog: &'a Catalog<'a>) -> Self {
		Self { catalog }
	}

	/// The catalog this probe reports on.
	#[must_use]
	pub const fn catalog(&self) -> &'a Catalog<'a> {
		self.catalog
	}

	/// Renders the C source of the probe.
	///
	/// The catalog must have been validated first; names and headers are
	/// pasted into the source verbatim.
	#[must_use]
	pub fn source(&self) -> String {
		let mut src = String::with_capacity(256 + self.catalog.len() * 128);

		src.push_str("#include <stdio.h>\n");
		for header in self.catalog.headers() {
			// Writing to a `String` cannot fail.
			let _ = writeln!(src, "#include <{header}>");
		}

		src.push_str(PRELUDE);

		for (index, SymbolEntry { name, .. }) in self.catalog.entries().iter().enumerate() {
			let _ = writeln!(src, "\tVCONST_REPORT({index}, {name});");
		}

		src.push_str("\treturn 0;\n}\n");
		src
	}

	/// Parses the probe's standard output into one [`Report`] per entry.
	///
	/// The output must contain exactly one well-formed line per entry, in
	/// catalog order; anything else is rejected.
	pub fn parse_output(&self, stdout: &str) -> Result<Vec<Report>, MalformedOutput> {
		let entries = self.catalog.entries();
		let mut reports = Vec::with_capacity(entries.len());
		let mut lines = stdout.lines();

		for (index, entry) in entries.iter().enumerate() {
			let Some(line) = lines.next() else {
				return Err(MalformedOutput::Truncated {
					expected: entries.len(),
					got:      index,
				});
			};

			reports.push(parse_line(index, entry.name, line)?);
		}

		if let Some(line) = lines.find(|line| !line.trim().is_empty()) {
			return Err(MalformedOutput::TrailingOutput {
				line: line.to_string(),
			});
		}

		Ok(reports)
	}
}

/// Parses a single output line that must describe entry `index` named `name`.
fn parse_line(index: usize, name: &str, line: &str) -> Result<Report, MalformedOutput> {
	let malformed = |reason: &'static str| {
		MalformedOutput::BadLine {
			line: index + 1,
			text: line.to_string(),
			reason,
		}
	};

	let mut fields = line.split_ascii_whitespace();

	let reported_index = fields
		.next()
		.ok_or_else(|| malformed("empty line"))?
		.parse::<usize>()
		.map_err(|_| malformed("index is not a number"))?;
	let reported_name = fields.next().ok_or_else(|| malformed("missing symbol name"))?;

	if reported_index != index || reported_name != name {
		return Err(MalformedOutput::OutOfOrder {
			expected: name.to_string(),
			got:      reported_name.to_string(),
		});
	}

	let size = fields
		.next()
		.ok_or_else(|| malformed("missing size"))?
		.parse::<u32>()
		.map_err(|_| malformed("size is not a number"))?;
	if !(1..=8).contains(&size) {
		return Err(malformed("size is not between 1 and 8 bytes"));
	}

	let value = fields
		.next()
		.ok_or_else(|| malformed("missing value"))?
		.parse::<u64>()
		.map_err(|_| malformed("value is not an unsigned 64-bit number"))?;

	if fields.next().is_some() {
		return Err(malformed("unexpected trailing fields"));
	}

	Ok(Report { size, value })
}
