//! All subcommand implementations for the constant resolver utility.

pub mod list;
pub mod probe;
pub mod resolve;
