//! Resolves small catalogs against a throwaway header with the real host C
//! compiler. Skipped when no compiler is available.

use std::{path::Path, process::Command};

use vconst::{
	BuildFailure,
	Catalog,
	Family,
	HostCompiler,
	ResolveError,
	SymbolEntry,
	WidthClass,
	render,
	resolve,
};

const HEADER: &str = r"
#define PROBE_TEST_IOC(dir, type, nr, size) \
	(((unsigned long)(dir) << 30) | ((unsigned long)(size) << 16) | ((type) << 8) | (nr))
#define PROBE_TEST_FOURCC(a, b, c, d) \
	((unsigned int)(a) | ((unsigned int)(b) << 8) | ((unsigned int)(c) << 16) | ((unsigned int)(d) << 24))

struct probe_test_arg {
	unsigned int words[26];
};

#define REQ_A PROBE_TEST_IOC(2, 'V', 0, sizeof(struct probe_test_arg))
#define FMT_B PROBE_TEST_FOURCC('B', 'A', '2', '4')
#define FMT_NEG (-1)
#define FMT_BROKEN (probe_test_undeclared + 1)

enum { FMT_ENUM = 7 };
static const unsigned long long REQ_STATIC = 0x123456789ULL;
";

const HEADERS: &[&str] = &["probe_test.h"];

/// Writes the test header and returns a compiler that can find it, or `None`
/// if the host has no working C compiler.
fn compiler(dir: &Path) -> Option<HostCompiler> {
	std::fs::write(dir.join("probe_test.h"), HEADER).unwrap();

	let cc = HostCompiler::from_env();
	let available = Command::new(cc.program())
		.arg("--version")
		.output()
		.is_ok_and(|out| out.status.success());

	if available {
		Some(cc.include_dir(dir))
	} else {
		eprintln!("skipping: no usable C compiler ({:?})", cc.program());
		None
	}
}

#[test]
fn resolves_macro_computed_values() {
	let dir = tempfile::tempdir().unwrap();
	let Some(cc) = compiler(dir.path()) else {
		return;
	};

	let entries = [
		SymbolEntry::new("REQ_A", WidthClass::Wide64, Family::Request),
		SymbolEntry::new("FMT_B", WidthClass::Narrow32, Family::PixelFormat),
	];
	let constants = resolve(&Catalog::new(HEADERS, &entries), &cc).unwrap();

	assert_eq!(
		render(&constants),
		"const REQ_A: u64 = 2155866624;\nconst FMT_B: u32 = 875967042;\n"
	);
}

#[test]
fn output_is_deterministic() {
	let dir = tempfile::tempdir().unwrap();
	let Some(cc) = compiler(dir.path()) else {
		return;
	};

	let entries = [
		SymbolEntry::new("REQ_A", WidthClass::Wide64, Family::Request),
		SymbolEntry::new("FMT_B", WidthClass::Narrow32, Family::PixelFormat),
		SymbolEntry::new("FMT_NEG", WidthClass::Narrow32, Family::PixelFormat),
	];
	let catalog = Catalog::new(HEADERS, &entries);

	let first = render(&resolve(&catalog, &cc).unwrap());
	let second = render(&resolve(&catalog, &cc).unwrap());
	assert_eq!(first, second);
	assert!(first.ends_with("const FMT_NEG: u32 = 4294967295;\n"));
}

#[test]
fn missing_symbol_fails_without_output() {
	let dir = tempfile::tempdir().unwrap();
	let Some(cc) = compiler(dir.path()) else {
		return;
	};

	let entries = [
		SymbolEntry::new("REQ_A", WidthClass::Wide64, Family::Request),
		SymbolEntry::new("FMT_GHOST", WidthClass::Narrow32, Family::PixelFormat),
		SymbolEntry::new("FMT_B", WidthClass::Narrow32, Family::PixelFormat),
	];
	let err = resolve(&Catalog::new(HEADERS, &entries), &cc).unwrap_err();

	assert!(
		matches!(&err, ResolveError::UnresolvedSymbol { name } if name == "FMT_GHOST"),
		"{err}"
	);
}

#[test]
fn enumerators_and_constant_objects_resolve() {
	let dir = tempfile::tempdir().unwrap();
	let Some(cc) = compiler(dir.path()) else {
		return;
	};

	let entries = [
		SymbolEntry::new("REQ_STATIC", WidthClass::Wide64, Family::Request),
		SymbolEntry::new("FMT_ENUM", WidthClass::Narrow32, Family::PixelFormat),
	];
	let constants = resolve(&Catalog::new(HEADERS, &entries), &cc).unwrap();

	assert_eq!(
		render(&constants),
		"const REQ_STATIC: u64 = 4886718345;\nconst FMT_ENUM: u32 = 7;\n"
	);
}

#[test]
fn first_missing_symbol_in_catalog_order_is_reported() {
	let dir = tempfile::tempdir().unwrap();
	let Some(cc) = compiler(dir.path()) else {
		return;
	};

	let entries = [
		SymbolEntry::new("FMT_B", WidthClass::Narrow32, Family::PixelFormat),
		SymbolEntry::new("FMT_GHOST_A", WidthClass::Narrow32, Family::PixelFormat),
		SymbolEntry::new("FMT_ENUM", WidthClass::Narrow32, Family::PixelFormat),
		SymbolEntry::new("FMT_GHOST_B", WidthClass::Narrow32, Family::PixelFormat),
	];
	let err = resolve(&Catalog::new(HEADERS, &entries), &cc).unwrap_err();

	assert_eq!(err.symbol(), Some("FMT_GHOST_A"), "{err}");
	assert!(matches!(err, ResolveError::UnresolvedSymbol { .. }), "{err}");
}

#[test]
fn broken_definition_is_a_build_failure() {
	let dir = tempfile::tempdir().unwrap();
	let Some(cc) = compiler(dir.path()) else {
		return;
	};

	let entries = [
		SymbolEntry::new("FMT_B", WidthClass::Narrow32, Family::PixelFormat),
		SymbolEntry::new("FMT_BROKEN", WidthClass::Narrow32, Family::PixelFormat),
	];
	let err = resolve(&Catalog::new(HEADERS, &entries), &cc).unwrap_err();

	assert!(
		matches!(
			err,
			ResolveError::NativeBuildFailure(BuildFailure::Compiler { .. })
		),
		"{err}"
	);
}

#[test]
fn missing_header_is_a_build_failure() {
	let dir = tempfile::tempdir().unwrap();
	let Some(cc) = compiler(dir.path()) else {
		return;
	};

	let entries = [SymbolEntry::new("FMT_B", WidthClass::Narrow32, Family::PixelFormat)];
	let catalog = Catalog::new(&["probe_test_missing.h"], &entries);
	let err = resolve(&catalog, &cc).unwrap_err();

	assert!(
		matches!(
			err,
			ResolveError::NativeBuildFailure(BuildFailure::Compiler { suspect: None, .. })
		),
		"{err}"
	);
}
