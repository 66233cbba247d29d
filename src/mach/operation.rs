use super::{cell, Cell, Stack};
use crate::error;
use crate::lang::Error;
use chrono::Utc;
use rand::rngs::OsRng;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};
use std::convert::TryFrom;
use std::io::{BufRead, Write};

type Result<T> = std::result::Result<T, Error>;

pub struct Operation {}

impl Operation {
    pub fn add_pair(stack: &mut Stack<Cell>) -> Result<Cell> {
        let (top, second) = stack.pop_2()?;
        Ok(top.wrapping_add(second))
    }

    pub fn subtract_pair(stack: &mut Stack<Cell>) -> Result<Cell> {
        let (top, second) = stack.pop_2()?;
        Ok(top.wrapping_sub(second))
    }

    pub fn multiply_pair(stack: &mut Stack<Cell>) -> Result<Cell> {
        let (top, second) = stack.pop_2()?;
        Ok(top.wrapping_mul(second))
    }

    pub fn divide_pair(stack: &mut Stack<Cell>) -> Result<Cell> {
        let (top, second) = stack.pop_2()?;
        Operation::divide(top, second)
    }

    pub fn add_whole(stack: &mut Stack<Cell>) -> Result<Cell> {
        let cells = stack.drain_all()?;
        Ok(cells.into_iter().fold(0, Cell::wrapping_add))
    }

    /// The top cell minus every cell below it.
    pub fn subtract_whole(stack: &mut Stack<Cell>) -> Result<Cell> {
        let mut cells = stack.drain_all()?.into_iter();
        let first = cells.next().unwrap_or(0);
        Ok(cells.fold(first, Cell::wrapping_sub))
    }

    pub fn multiply_whole(stack: &mut Stack<Cell>) -> Result<Cell> {
        let cells = stack.drain_all()?;
        Ok(cells.into_iter().fold(1, Cell::wrapping_mul))
    }

    /// The top cell reduced modulo every cell below it, top down.
    pub fn divide_whole(stack: &mut Stack<Cell>) -> Result<Cell> {
        let mut cells = stack.drain_all()?.into_iter();
        let first = cells.next().unwrap_or(0);
        cells.try_fold(first, Operation::modulo)
    }

    pub fn divide(lhs: Cell, rhs: Cell) -> Result<Cell> {
        match lhs.checked_div(rhs) {
            Some(quotient) => Ok(quotient),
            None => Err(error!(DivisionByZero)),
        }
    }

    pub fn modulo(lhs: Cell, rhs: Cell) -> Result<Cell> {
        match lhs.checked_rem(rhs) {
            Some(remainder) => Ok(remainder),
            None => Err(error!(DivisionByZero)),
        }
    }

    pub fn and_pair(stack: &Stack<Cell>) -> Result<Cell> {
        let (top, second) = stack.peek_2()?;
        Ok(Cell::from(*top > 0 && *second > 0))
    }

    pub fn and_whole(stack: &Stack<Cell>) -> Result<Cell> {
        if stack.is_empty() {
            return Err(error!(StackUnderflow; "STACK EMPTY"));
        }
        Ok(Cell::from(stack.as_slice().iter().all(|&cell| cell > 0)))
    }

    /// Pushes `from..to` in ascending order.
    pub fn iota(stack: &mut Stack<Cell>, from: Cell, to: Cell) -> Result<()> {
        if from < to && to - from > (stack.capacity() - stack.len()) as Cell {
            return Err(error!(StackOverflow; "STACK FULL"));
        }
        stack.extend(from..to)
    }

    pub fn pop_random(stack: &mut Stack<Cell>) -> Result<Cell> {
        if stack.is_empty() {
            return Err(error!(StackUnderflow; "STACK EMPTY"));
        }
        let index = OsRng.gen_range(0..stack.len());
        stack.remove(index)
    }

    /// Uniform in-place permutation.
    pub fn shuffle(stack: &mut Stack<Cell>) {
        stack.as_mut_slice().shuffle(&mut OsRng)
    }

    pub fn random_byte() -> Result<Cell> {
        let mut bytes = [0u8; 1];
        Operation::random_fill(&mut bytes)?;
        Ok(Cell::from(bytes[0]))
    }

    pub fn random_max() -> Result<Cell> {
        let mut bytes = [0u8; 8];
        Operation::random_fill(&mut bytes)?;
        Ok(Cell::from_le_bytes(bytes))
    }

    fn random_fill(bytes: &mut [u8]) -> Result<()> {
        match OsRng.try_fill_bytes(bytes) {
            Ok(()) => Ok(()),
            Err(e) => Err(error!(InternalError; e.to_string())),
        }
    }

    /// CRC-64 of the stack read as text, bottom to top.
    pub fn hash(stack: &Stack<Cell>) -> Cell {
        let text = cell::encode(stack.as_slice());
        crc::crc64::checksum_ecma(text.as_bytes())
    }

    pub fn hash_byte(stack: &Stack<Cell>) -> Cell {
        Operation::hash(stack) & 0xFF
    }

    pub fn seconds() -> Result<Cell> {
        Cell::try_from(Utc::now().timestamp()).map_err(|_| error!(Overflow))
    }

    pub fn nanoseconds() -> Result<Cell> {
        match Utc::now().timestamp_nanos_opt() {
            Some(nanos) => Cell::try_from(nanos).map_err(|_| error!(Overflow)),
            None => Err(error!(Overflow)),
        }
    }

    pub fn print_char(output: &mut dyn Write, value: Cell) -> Result<()> {
        let mut buf = [0u8; 4];
        output.write_all(cell::to_char(value).encode_utf8(&mut buf).as_bytes())?;
        Ok(())
    }

    pub fn print_number(output: &mut dyn Write, value: Cell) -> Result<()> {
        write!(output, "{}", value)?;
        Ok(())
    }

    /// Reads one UTF-8 encoded character.
    pub fn input_char(input: &mut dyn BufRead) -> Result<Cell> {
        let first = match Operation::read_byte(input)? {
            Some(byte) => byte,
            None => return Err(error!(InputPastEnd)),
        };
        let width = match first {
            0x00..=0x7F => 1,
            0xC0..=0xDF => 2,
            0xE0..=0xEF => 3,
            0xF0..=0xF7 => 4,
            _ => return Err(error!(BadInput; "INVALID UTF-8")),
        };
        let mut bytes = vec![first];
        while bytes.len() < width {
            match Operation::read_byte(input)? {
                Some(byte) => bytes.push(byte),
                None => return Err(error!(InputPastEnd)),
            }
        }
        match std::str::from_utf8(&bytes).ok().and_then(|s| s.chars().next()) {
            Some(ch) => Ok(Cell::from(u32::from(ch))),
            None => Err(error!(BadInput; "INVALID UTF-8")),
        }
    }

    /// Skips leading whitespace and reads an unsigned decimal number.
    pub fn input_number(input: &mut dyn BufRead) -> Result<Cell> {
        loop {
            match Operation::peek_byte(input)? {
                Some(byte) if byte.is_ascii_whitespace() => input.consume(1),
                Some(_) => break,
                None => return Err(error!(InputPastEnd)),
            }
        }
        let mut value: Option<Cell> = None;
        while let Some(byte) = Operation::peek_byte(input)? {
            if !byte.is_ascii_digit() {
                break;
            }
            input.consume(1);
            let digit = Cell::from(byte - b'0');
            let next = value
                .unwrap_or(0)
                .checked_mul(10)
                .and_then(|v| v.checked_add(digit));
            match next {
                Some(v) => value = Some(v),
                None => return Err(error!(Overflow)),
            }
        }
        value.ok_or_else(|| error!(BadInput; "EXPECTED NUMBER"))
    }

    fn peek_byte(input: &mut dyn BufRead) -> Result<Option<u8>> {
        Ok(input.fill_buf()?.first().copied())
    }

    fn read_byte(input: &mut dyn BufRead) -> Result<Option<u8>> {
        let byte = Operation::peek_byte(input)?;
        if byte.is_some() {
            input.consume(1);
        }
        Ok(byte)
    }
}
