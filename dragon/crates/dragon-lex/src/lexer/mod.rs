//! Lexer module.
//!
//! The lexer implementation is split into focused components:
//! - `core` - Main Lexer struct and dispatch
//! - `identifier` - Identifier and keyword lexing
//! - `number` - The numeric literal automaton
//! - `operator` - Relational operator lexing

mod core;
mod identifier;
pub mod number;
mod operator;

pub use self::core::Lexer;
pub use number::{NumberState, Transition};
