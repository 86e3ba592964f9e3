//! The `staybook` command line, exposed as a library so `build.rs` can
//! render the man page from the same clap definition.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
