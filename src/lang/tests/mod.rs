use super::*;

mod clean_test;

/// Lexemes between the program markers, separators and no-ops removed.
fn lexemes(s: &str) -> Vec<Lexeme> {
    let tokens = lex(s.as_bytes()).unwrap();
    strip(tokens.useful_lexemes())
}

fn cleaned(s: &str) -> Vec<Lexeme> {
    let mut tokens = lex(s.as_bytes()).unwrap();
    clean(&mut tokens);
    strip(tokens.useful_lexemes())
}

fn strip(mut v: Vec<Lexeme>) -> Vec<Lexeme> {
    assert_eq!(v.first(), Some(&Lexeme::StartProgram));
    assert_eq!(v.last(), Some(&Lexeme::EndProgram));
    v.pop();
    v.remove(0);
    v
}

fn lex_error(s: &str) -> ErrorCode {
    match lex(s.as_bytes()) {
        Ok(tokens) => panic!("{} lexed as\n{}", s, tokens),
        Err(e) => e.code(),
    }
}
