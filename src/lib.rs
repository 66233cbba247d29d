//! # dork
//!
//! A stack-oriented esoteric language with a single 64-bit accumulator,
//! two bounded auxiliary stacks, and one-character opcodes.
//!
//! Install with `cargo install dorklang`, then run a program with
//! `dork program.dork`. The final accumulator becomes the exit status.
//! ```text
//! $ echo "''+!" > a.dork && dork a.dork
//! A
//! ```
//!
//! The library runs programs from memory as well:
//! ```
//! use dork::mach::{interpret_with, Options};
//! let mut input: &[u8] = b"";
//! let mut output = Vec::new();
//! let value = interpret_with(b"(+ + +)", Options::new(), &mut input, &mut output);
//! assert_eq!(value.ok(), Some(3));
//! ```

#[path = "doc/reference.rs"]
#[allow(non_snake_case)]
pub mod _Reference;

pub mod lang;
pub mod mach;
pub mod term;
