use super::token::*;
use super::{clean, lex, Error};
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

/// Lexes and cleans the source file at `path` into a single embedded token.
///
/// The tree builder expands the token into a change-directory into the
/// file's own directory, the file's program, and a change-directory back
/// to `restore`.
pub fn embed_file(path: &Path, restore: &Path) -> Result<Token> {
    let source = std::fs::read(path)?;
    let mut tokens = lex(&source)?;
    clean(&mut tokens);
    let enter = match path.parent() {
        Some(dir) => dir.to_string_lossy().into_owned(),
        None => String::new(),
    };
    let restore = restore.to_string_lossy();
    Ok(Token::embedded(
        enter.as_bytes(),
        restore.as_bytes(),
        tokens,
    ))
}
