//! Resolves V4L2 request codes and format identifiers from the host's native
//! headers.
//!
//! Several V4L2 request codes are computed by C macros from the size of
//! kernel structures, so their values depend on the architecture and the
//! kernel headers in use. This crate compiles a small probe program against
//! the host headers, runs it, and turns what it prints into Rust constant
//! declarations:
//!
//! ```text
//! const VIDIOC_QUERYCAP: u64 = 2154321408;
//! const V4L2_PIX_FMT_YUYV: u32 = 1448695129;
//! ```
//!
//! Resolution is all-or-nothing; see [`resolve`].

mod catalog;
mod error;
mod native;
mod probe;
mod record;
mod resolve;
pub mod v4l2;

pub use self::{
	catalog::{Catalog, CatalogError, Family, SymbolEntry, WidthClass},
	error::{BuildFailure, ExecutionFailure, MalformedOutput, ResolveError},
	native::{DEFAULT_COMPILER, HostCompiler, NativeEnvironment},
	probe::{Probe, Report},
	record::{ResolvedConstant, emit, render},
	resolve::resolve,
};
