/*!
## Rust Machine Module

This Rust module evaluates dork trees against a pair of bounded stacks.

*/

pub type Cell = u64;

pub const STACK_CAPACITY: usize = 1 << 20;
pub const SOURCE_EXTENSION: &str = "dork";
pub const STACK_FILE_SUFFIX: &str = ".dorkstack";

pub mod cell;
mod context;
mod eval;
mod memory;
mod operation;
mod runtime;
mod stack;

pub use context::{Context, DirScope, Options};
pub use eval::evaluate;
pub use memory::Memory;
pub use operation::Operation;
pub use runtime::{interpret, interpret_file, interpret_with, run};
pub use stack::Stack;

#[cfg(test)]
mod tests;
