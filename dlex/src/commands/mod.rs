//! Command modules for the dlex CLI.
//!
//! Each subcommand lives in its own file with an `*Args` struct, a
//! command handler and a `run_*` entry point.

pub mod common;

pub mod init;
pub mod lex;

// Re-export command types and functions
pub use init::{run_init, InitArgs};
pub use lex::{run_lex, LexArgs};
