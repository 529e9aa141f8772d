//! Resolved constants and their textual form.
//!
//! Each constant renders as exactly one line of Rust source:
//!
//! ```text
//! const <name>: <u32|u64> = <decimal>;
//! ```
//!
//! Downstream builds splice these lines into their own sources verbatim, so
//! the shape must never change.

use core::fmt;

use crate::catalog::WidthClass;

/// A symbol together with the value the native environment gave it.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ResolvedConstant {
	/// The catalog name.
	pub name:  String,
	/// The declared width.
	pub width: WidthClass,
	/// The value. Always fits `width`.
	pub value: u64,
}

impl fmt::Display for ResolvedConstant {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(
			f,
			"const {}: {} = {};",
			self.name,
			self.width.keyword(),
			self.value
		)
	}
}

/// Writes one line per constant to `out`, in order.
pub fn emit<W: std::io::Write>(constants: &[ResolvedConstant], mut out: W) -> std::io::Result<()> {
	for constant in constants {
		writeln!(out, "{constant}")?;
	}
	out.flush()
}

/// Renders every constant into a single string, one line each.
#[must_use]
pub fn render(constants: &[ResolvedConstant]) -> String {
	use fmt::Write as _;

	let mut text = String::with_capacity(constants.len() * 48);
	for constant in constants {
		// Writing to a `String` cannot fail.
		let _ = writeln!(text, "{constant}");
	}
	text
}
