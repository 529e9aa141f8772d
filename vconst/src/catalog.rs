//! Symbol catalog types.
//!
//! A [`Catalog`] is a flat, ordered table of [`SymbolEntry`] rows together
//! with the system headers that define them. The order of the table is the
//! order of the emitted records; nothing downstream ever reorders it.

use std::collections::HashSet;

/// The width at which a resolved value is declared in the emitted artifact.
///
/// This is declared per entry and is never inferred from the entry's
/// [`Family`].
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	serde::Serialize,
	strum::EnumString,
	strum::Display,
	strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WidthClass {
	/// A 32-bit quantity, emitted as `u32`.
	Narrow32,
	/// A pointer/native-long sized quantity, emitted as `u64`.
	Wide64,
}

impl WidthClass {
	/// The Rust type keyword used for this width in emitted records.
	#[must_use]
	pub const fn keyword(self) -> &'static str {
		match self {
			Self::Narrow32 => "u32",
			Self::Wide64 => "u64",
		}
	}

	/// The number of bits in this width.
	#[must_use]
	pub const fn bits(self) -> u32 {
		match self {
			Self::Narrow32 => 32,
			Self::Wide64 => 64,
		}
	}

	/// The largest value representable at this width.
	#[must_use]
	pub const fn max_value(self) -> u64 {
		u64::MAX >> (u64::BITS - self.bits())
	}

	/// Whether `value` can be declared at this width without truncation.
	#[must_use]
	pub const fn fits(self, value: u64) -> bool {
		value <= self.max_value()
	}
}

/// The semantic group an entry belongs to.
///
/// Families only group the table for readability and filtering.
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	Hash,
	serde::Serialize,
	strum::EnumString,
	strum::Display,
	strum::EnumIter,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum Family {
	/// Device-control (ioctl) request codes.
	Request,
	/// Image pixel formats.
	PixelFormat,
	/// Software defined radio sample formats.
	SdrFormat,
	/// Touch sensor data formats.
	TouchFormat,
	/// Metadata buffer formats.
	MetaFormat,
}

/// A single named symbol to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct SymbolEntry<'a> {
	/// The symbol name, exactly as the native headers spell it.
	pub name:   &'a str,
	/// The declared width of the resolved value.
	pub width:  WidthClass,
	/// The group this symbol belongs to.
	pub family: Family,
}

impl<'a> SymbolEntry<'a> {
	/// Creates a new entry.
	#[must_use]
	pub const fn new(name: &'a str, width: WidthClass, family: Family) -> Self {
		Self {
			name,
			width,
			family,
		}
	}
}

/// An ordered table of symbols and the headers that define them.
#[derive(Debug, Clone, Copy)]
pub struct Catalog<'a> {
	/// Headers included by the probe, in order, e.g. `linux/videodev2.h`.
	headers: &'a [&'a str],
	/// The symbol table, in emission order.
	entries: &'a [SymbolEntry<'a>],
}

impl<'a> Catalog<'a> {
	/// Creates a catalog from its headers and entries.
	///
	/// No checks are performed here; see [`Catalog::validate`].
	#[must_use]
	pub const fn new(headers: &'a [&'a str], entries: &'a [SymbolEntry<'a>]) -> Self {
		Self { headers, entries }
	}

	/// The system headers the probe includes.
	#[must_use]
	pub const fn headers(&self) -> &'a [&'a str] {
		self.headers
	}

	/// The entries, in emission order.
	#[must_use]
	pub const fn entries(&self) -> &'a [SymbolEntry<'a>] {
		self.entries
	}

	/// The number of entries.
	#[must_use]
	pub const fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the catalog has no entries.
	#[must_use]
	pub const fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Looks up an entry by name.
	#[must_use]
	pub fn get(&self, name: &str) -> Option<&'a SymbolEntry<'a>> {
		self.entries.iter().find(|entry| entry.name == name)
	}

	/// Returns the contiguous family groups of the catalog, in order.
	pub fn groups(&self) -> impl Iterator<Item = (Family, &'a [SymbolEntry<'a>])> + 'a {
		self.entries
			.chunk_by(|a, b| a.family == b.family)
			.filter_map(|group| group.first().map(|first| (first.family, group)))
	}

	/// Checks the coherence invariants of the catalog.
	///
	/// Names must be unique C identifiers, each family must occupy a single
	/// contiguous run, and at least one well-formed header must be present.
	pub fn validate(&self) -> Result<(), CatalogError> {
		if self.headers.is_empty() {
			return Err(CatalogError::NoHeaders);
		}

		for header in self.headers {
			if !is_header_name(header) {
				return Err(CatalogError::InvalidHeader {
					header: (*header).to_string(),
				});
			}
		}

		let mut names = HashSet::with_capacity(self.entries.len());
		let mut finished_families = HashSet::new();
		let mut current_family = None;

		for (index, entry) in self.entries.iter().enumerate() {
			if !is_c_identifier(entry.name) {
				return Err(CatalogError::InvalidSymbol {
					index,
					name: entry.name.to_string(),
				});
			}

			if !names.insert(entry.name) {
				return Err(CatalogError::DuplicateSymbol {
					name: entry.name.to_string(),
				});
			}

			if current_family != Some(entry.family) {
				if let Some(previous) = current_family {
					finished_families.insert(previous);
				}

				if finished_families.contains(&entry.family) {
					return Err(CatalogError::ScatteredFamily {
						family: entry.family,
						name:   entry.name.to_string(),
					});
				}

				current_family = Some(entry.family);
			}
		}

		Ok(())
	}
}

/// A violation of the catalog's coherence invariants.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
	/// The catalog names no headers to include.
	#[error("catalog does not name any headers")]
	NoHeaders,
	/// A header name cannot be placed in an `#include <...>` directive.
	#[error("header name {header:?} is not usable in an include directive")]
	InvalidHeader {
		/// The offending header name.
		header: String,
	},
	/// An entry name is not a C identifier.
	#[error("entry {index} has invalid symbol name {name:?}")]
	InvalidSymbol {
		/// Position of the entry in the catalog.
		index: usize,
		/// The offending name.
		name:  String,
	},
	/// Two entries share a name.
	#[error("symbol `{name}` appears more than once")]
	DuplicateSymbol {
		/// The repeated name.
		name: String,
	},
	/// A family's entries are split across more than one run.
	#[error("symbol `{name}` reopens the {family} group after it was closed")]
	ScatteredFamily {
		/// The family that was reopened.
		family: Family,
		/// The first entry that reopened it.
		name:   String,
	},
}

/// Whether `name` is a C identifier (`[A-Za-z_][A-Za-z0-9_]*`).
pub(crate) fn is_c_identifier(name: &str) -> bool {
	let mut chars = name.chars();
	chars
		.next()
		.is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Whether `header` can be placed inside `#include <...>`.
fn is_header_name(header: &str) -> bool {
	!header.is_empty()
		&& !header
			.chars()
			.any(|c| matches!(c, '<' | '>' | '"' | '\n' | '\r'))
}

#[cfg(test)]
mod tests {
	use super::*;

	const HEADERS: &[&str] = &["linux/videodev2.h"];

	#[test]
	fn width_keywords() {
		assert_eq!(WidthClass::Narrow32.keyword(), "u32");
		assert_eq!(WidthClass::Wide64.keyword(), "u64");
		assert_eq!(WidthClass::Narrow32.bits(), 32);
		assert_eq!(WidthClass::Wide64.bits(), 64);
	}

	#[test]
	fn width_fits() {
		assert!(WidthClass::Narrow32.fits(u64::from(u32::MAX)));
		assert!(!WidthClass::Narrow32.fits(u64::from(u32::MAX) + 1));
		assert!(WidthClass::Wide64.fits(u64::MAX));
		assert_eq!(WidthClass::Narrow32.max_value(), u64::from(u32::MAX));
		assert_eq!(WidthClass::Wide64.max_value(), u64::MAX);
	}

	#[test]
	fn names_round_trip_through_strum() {
		assert_eq!(Family::PixelFormat.to_string(), "pixel-format");
		assert_eq!("meta-format".parse::<Family>(), Ok(Family::MetaFormat));
		assert_eq!(WidthClass::Wide64.to_string(), "wide64");
		assert_eq!("narrow32".parse::<WidthClass>(), Ok(WidthClass::Narrow32));
	}

	#[test]
	fn identifiers() {
		assert!(is_c_identifier("VIDIOC_QUERYCAP"));
		assert!(is_c_identifier("_x1"));
		assert!(!is_c_identifier(""));
		assert!(!is_c_identifier("1ABC"));
		assert!(!is_c_identifier("A B"));
		assert!(!is_c_identifier("A);system(\"x\""));
	}

	#[test]
	fn valid_catalog() {
		let entries = [
			SymbolEntry::new("REQ_A", WidthClass::Wide64, Family::Request),
			SymbolEntry::new("FMT_B", WidthClass::Narrow32, Family::PixelFormat),
			SymbolEntry::new("FMT_C", WidthClass::Narrow32, Family::PixelFormat),
		];
		let catalog = Catalog::new(HEADERS, &entries);
		assert_eq!(catalog.validate(), Ok(()));
		assert_eq!(catalog.len(), 3);
		assert_eq!(catalog.get("FMT_B").map(|e| e.width), Some(WidthClass::Narrow32));
		assert!(catalog.get("FMT_D").is_none());
	}

	#[test]
	fn empty_catalog_is_valid() {
		let catalog = Catalog::new(HEADERS, &[]);
		assert_eq!(catalog.validate(), Ok(()));
		assert!(catalog.is_empty());
	}

	#[test]
	fn rejects_duplicates() {
		let entries = [
			SymbolEntry::new("REQ_A", WidthClass::Wide64, Family::Request),
			SymbolEntry::new("REQ_A", WidthClass::Wide64, Family::Request),
		];
		assert_eq!(
			Catalog::new(HEADERS, &entries).validate(),
			Err(CatalogError::DuplicateSymbol {
				name: "REQ_A".into(),
			})
		);
	}

	#[test]
	fn rejects_invalid_names() {
		let entries = [
			SymbolEntry::new("REQ_A", WidthClass::Wide64, Family::Request),
			SymbolEntry::new("REQ-B", WidthClass::Wide64, Family::Request),
		];
		assert_eq!(
			Catalog::new(HEADERS, &entries).validate(),
			Err(CatalogError::InvalidSymbol {
				index: 1,
				name:  "REQ-B".into(),
			})
		);
	}

	#[test]
	fn rejects_scattered_families() {
		let entries = [
			SymbolEntry::new("REQ_A", WidthClass::Wide64, Family::Request),
			SymbolEntry::new("FMT_B", WidthClass::Narrow32, Family::PixelFormat),
			SymbolEntry::new("REQ_C", WidthClass::Wide64, Family::Request),
		];
		assert_eq!(
			Catalog::new(HEADERS, &entries).validate(),
			Err(CatalogError::ScatteredFamily {
				family: Family::Request,
				name:   "REQ_C".into(),
			})
		);
	}

	#[test]
	fn rejects_bad_headers() {
		assert_eq!(Catalog::new(&[], &[]).validate(), Err(CatalogError::NoHeaders));
		assert_eq!(
			Catalog::new(&["evil>\n#include <x"], &[]).validate(),
			Err(CatalogError::InvalidHeader {
				header: "evil>\n#include <x".into(),
			})
		);
	}

	#[test]
	fn groups_follow_order() {
		let entries = [
			SymbolEntry::new("REQ_A", WidthClass::Wide64, Family::Request),
			SymbolEntry::new("REQ_B", WidthClass::Wide64, Family::Request),
			SymbolEntry::new("FMT_C", WidthClass::Narrow32, Family::PixelFormat),
		];
		let catalog = Catalog::new(HEADERS, &entries);
		let groups = catalog
			.groups()
			.map(|(family, group)| (family, group.len()))
			.collect::<Vec<_>>();
		assert_eq!(groups, [(Family::Request, 2), (Family::PixelFormat, 1)]);
	}
}
