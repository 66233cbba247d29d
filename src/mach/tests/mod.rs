use super::*;
use crate::lang::{Error, ErrorCode};

mod memory_test;

fn run(source: &str) -> Result<Cell, Error> {
    run_input(source, "").map(|(value, _)| value)
}

fn run_input(source: &str, input: &str) -> Result<(Cell, String), Error> {
    let mut input = input.as_bytes();
    let mut output: Vec<u8> = vec![];
    let value = interpret_with(source.as_bytes(), Options::new(), &mut input, &mut output)?;
    Ok((value, String::from_utf8_lossy(&output).into_owned()))
}

fn error_code(source: &str) -> ErrorCode {
    match run(source) {
        Ok(value) => panic!("{} evaluated to {}", source, value),
        Err(e) => e.code(),
    }
}

fn stack_of(cells: &[Cell]) -> Stack<Cell> {
    let mut stack = Stack::new(STACK_CAPACITY);
    stack.extend(cells.iter().copied()).unwrap();
    stack
}
