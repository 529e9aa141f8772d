//! Error types for constant resolution.
//!
//! Every failure is fatal to the whole resolution run; there is no partial
//! result type anywhere in this crate.

use std::process::ExitStatus;

use crate::catalog::{CatalogError, WidthClass};

/// An error returned by [`crate::resolve`].
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
	/// The native headers do not define a catalog symbol.
	#[error("symbol `{name}` is not defined by the native headers")]
	UnresolvedSymbol {
		/// The catalog name that could not be resolved.
		name: String,
	},
	/// The probe could not be compiled or linked.
	#[error("failed to build the native probe: {0}")]
	NativeBuildFailure(#[from] BuildFailure),
	/// The probe could not be run, or its output was unusable.
	#[error("failed to execute the native probe: {0}")]
	NativeExecutionFailure(#[from] ExecutionFailure),
	/// A native value does not fit its declared width.
	#[error(
		"symbol `{name}` is declared {declared} ({}) but the headers define it as the \
		 {native_bytes}-byte value {value}, which does not fit",
		.declared.keyword()
	)]
	WidthMismatch {
		/// The catalog name.
		name:         String,
		/// The width the catalog declares.
		declared:     WidthClass,
		/// `sizeof` the native expression.
		native_bytes: u32,
		/// The value after reduction to its native width.
		value:        u64,
	},
	/// The catalog itself is incoherent.
	#[error("invalid symbol catalog: {0}")]
	Catalog(#[from] CatalogError),
}

impl ResolveError {
	/// The catalog symbol this error is about, if it concerns a single one.
	#[must_use]
	pub fn symbol(&self) -> Option<&str> {
		match self {
			Self::UnresolvedSymbol { name } | Self::WidthMismatch { name, .. } => {
				Some(name.as_str())
			}
			Self::NativeBuildFailure(BuildFailure::Compiler {
				suspect: Some(name),
				..
			}) => Some(name.as_str()),
			_ => None,
		}
	}
}

/// The probe failed to build.
#[derive(Debug, thiserror::Error)]
pub enum BuildFailure {
	/// The scratch directory or the probe source could not be written.
	#[error("failed to prepare the probe sources: {0}")]
	Workspace(#[source] std::io::Error),
	/// The compiler could not be started.
	#[error("failed to start compiler `{program}`: {source}")]
	Spawn {
		/// The compiler program that was invoked.
		program: String,
		/// The underlying spawn error.
		source:  std::io::Error,
	},
	/// The compiler ran and reported failure.
	#[error("compiler exited with {status}{}\n{stderr}", suspect_note(.suspect))]
	Compiler {
		/// The compiler's exit status.
		status:  ExitStatus,
		/// Everything the compiler wrote to standard error.
		stderr:  String,
		/// The first catalog symbol that appears in `stderr`, if any.
		suspect: Option<String>,
	},
}

/// Renders the suspect symbol of a failed build, if there is one.
fn suspect_note(suspect: &Option<String>) -> String {
	suspect
		.as_ref()
		.map(|name| format!(" (first catalog symbol in diagnostics: `{name}`)"))
		.unwrap_or_default()
}

/// The probe failed to run, or printed something unusable.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionFailure {
	/// The probe binary could not be started.
	#[error("failed to start probe: {0}")]
	Spawn(#[source] std::io::Error),
	/// The probe exited unsuccessfully.
	#[error("probe exited with {status}: {stderr}")]
	Status {
		/// The probe's exit status.
		status: ExitStatus,
		/// Everything the probe wrote to standard error.
		stderr: String,
	},
	/// The probe's standard output is not valid UTF-8.
	#[error("probe output is not valid UTF-8")]
	NotUtf8,
	/// The probe's output does not match the catalog.
	#[error("{0}")]
	Output(#[from] MalformedOutput),
}

/// Probe output that does not describe the catalog line for line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MalformedOutput {
	/// Fewer lines than catalog entries.
	#[error("probe reported {got} of {expected} symbols")]
	Truncated {
		/// The number of catalog entries.
		expected: usize,
		/// The number of lines actually printed.
		got:      usize,
	},
	/// More non-empty lines than catalog entries.
	#[error("unexpected trailing probe output: {line:?}")]
	TrailingOutput {
		/// The first extra line.
		line: String,
	},
	/// A line reports a different symbol than the catalog expects there.
	#[error("expected a report for `{expected}` but the probe reported `{got}`")]
	OutOfOrder {
		/// The catalog name at this position.
		expected: String,
		/// The name the probe printed.
		got:      String,
	},
	/// A line could not be parsed.
	#[error("probe output line {line} ({text:?}) is malformed: {reason}")]
	BadLine {
		/// One-based line number.
		line:   usize,
		/// The offending line.
		text:   String,
		/// What is wrong with it.
		reason: &'static str,
	},
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unresolved_names_symbol() {
		let err = ResolveError::UnresolvedSymbol {
			name: "FMT_GHOST".into(),
		};
		assert_eq!(
			err.to_string(),
			"symbol `FMT_GHOST` is not defined by the native headers"
		);
		assert_eq!(err.symbol(), Some("FMT_GHOST"));
	}

	#[test]
	fn width_mismatch_message() {
		let err = ResolveError::WidthMismatch {
			name:         "FMT_WIDE".into(),
			declared:     WidthClass::Narrow32,
			native_bytes: 8,
			value:        1 << 40,
		};
		assert_eq!(
			err.to_string(),
			"symbol `FMT_WIDE` is declared narrow32 (u32) but the headers define it as the \
			 8-byte value 1099511627776, which does not fit"
		);
		assert_eq!(err.symbol(), Some("FMT_WIDE"));
	}

	#[test]
	fn malformed_output_is_an_execution_failure() {
		let err = ResolveError::from(ExecutionFailure::from(MalformedOutput::Truncated {
			expected: 3,
			got:      1,
		}));
		assert_eq!(
			err.to_string(),
			"failed to execute the native probe: probe reported 1 of 3 symbols"
		);
		assert_eq!(err.symbol(), None);
	}

	#[test]
	fn suspect_note_is_optional() {
		assert_eq!(suspect_note(&None), "");
		assert_eq!(
			suspect_note(&Some("FMT_GHOST".into())),
			" (first catalog symbol in diagnostics: `FMT_GHOST`)"
		);
	}
}
