/*!
# Rust Language Module

This Rust module turns dork source bytes into a tree: lexing,
peephole cleanup, and tree building.

*/

pub type Column = std::ops::Range<usize>;

#[macro_use]
mod error;
mod clean;
mod embed;
mod lex;
pub mod lexeme;
pub mod token;
pub mod tree;

pub use clean::clean;
pub use embed::embed_file;
pub use error::Error;
pub use error::ErrorCode;
pub use lex::lex;
pub use lexeme::Lexeme;
pub use token::{Token, TokenCollection};
pub use tree::{Node, NodeId, Tree};

#[cfg(test)]
mod tests;
