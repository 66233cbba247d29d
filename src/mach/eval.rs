use super::{cell, runtime, Cell, Context, DirScope, Operation, SOURCE_EXTENSION};
use crate::error;
use crate::lang::{Error, Lexeme, Node, NodeId, Tree};
use log::debug;
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

/// Evaluates the program rooted at [`Tree::ROOT`] starting from `initial`.
pub fn evaluate(tree: &Tree, context: &mut Context, initial: Cell) -> Result<Cell> {
    value(tree, Tree::ROOT, context, initial)
}

fn value(tree: &Tree, id: NodeId, context: &mut Context, input: Cell) -> Result<Cell> {
    match tree.node(id)? {
        Node::Parent {
            lexeme,
            children,
            data,
        } => parent(tree, *lexeme, children, data, context, input),
        Node::Terminal { lexeme, data } => terminal(*lexeme, data, context, input),
    }
}

fn sequence(tree: &Tree, children: &[NodeId], context: &mut Context, input: Cell) -> Result<Cell> {
    children
        .iter()
        .try_fold(input, |acc, &child| value(tree, child, context, acc))
}

fn parent(
    tree: &Tree,
    lexeme: Lexeme,
    children: &[NodeId],
    data: &[u8],
    context: &mut Context,
    input: Cell,
) -> Result<Cell> {
    use Lexeme::*;
    match lexeme {
        StartProgram => {
            let mut scope = DirScope::enter(context);
            sequence(tree, children, &mut scope, input)
        }
        StartReadFileSection => {
            let output = sequence(tree, children, context, input)?;
            include(data, context, output)
        }
        StartAdditionSection => {
            let local = sequence(tree, children, context, 0)?;
            Ok(input.wrapping_add(local))
        }
        StartSubtractionSection => {
            let local = sequence(tree, children, context, 0)?;
            Ok(input.wrapping_sub(local))
        }
        StartMultiplicationSection => {
            let local = sequence(tree, children, context, 0)?;
            Ok(input.wrapping_mul(local))
        }
        StartDivisionSection => {
            let local = sequence(tree, children, context, 0)?;
            Operation::divide(input, local)
        }
        StartJumpIfPositiveSection => {
            let mut output = input;
            while output > 0 {
                output = sequence(tree, children, context, output)?;
            }
            Ok(output)
        }
        StartJumpIfZeroSection => {
            let mut output = input;
            while output == 0 {
                output = sequence(tree, children, context, output)?;
            }
            Ok(output)
        }
        StartCommentSection => Ok(input),
        _ => Err(error!(SyntaxError; "UNRECOGNIZED LEXEME")),
    }
}

fn terminal(lexeme: Lexeme, data: &[u8], context: &mut Context, input: Cell) -> Result<Cell> {
    use Lexeme::*;
    let memory = &mut context.memory;
    let output = match lexeme {
        AddOne => input.wrapping_add(1),
        AddEight => input.wrapping_add(8),
        AddStackPair => Operation::add_pair(memory.active_mut())?,
        AddStackWhole => Operation::add_whole(memory.active_mut())?,
        SubtractOne => input.wrapping_sub(1),
        SubtractEight => input.wrapping_sub(8),
        SubtractStackPair => Operation::subtract_pair(memory.active_mut())?,
        SubtractStackWhole => Operation::subtract_whole(memory.active_mut())?,
        MultiplyTwo => input.wrapping_mul(2),
        MultiplyEight => input.wrapping_mul(8),
        MultiplyStackPair => Operation::multiply_pair(memory.active_mut())?,
        MultiplyStackWhole => Operation::multiply_whole(memory.active_mut())?,
        DivideTwo => input / 2,
        DivideEight => input / 8,
        DivideStackPair => Operation::divide_pair(memory.active_mut())?,
        DivideStackWhole => Operation::divide_whole(memory.active_mut())?,
        Square => input.wrapping_mul(input),
        Cube => input.wrapping_mul(input).wrapping_mul(input),

        SetZero => 0,
        SetOneByte => 1 << 3,
        SetEightByte => 1 << 6,
        SetOneKibibyte => 1 << 13,
        SetEightKibibyte => 1 << 16,
        SetOneMebibyte => 1 << 23,
        SetEightMebibyte => 1 << 26,
        SetOneGibibyte => 1 << 33,
        SetEightGibibyte => 1 << 36,
        SetRandomByte => Operation::random_byte()?,
        SetRandomMax => Operation::random_max()?,
        SetSecondTimestamp => Operation::seconds()?,
        SetNanosecondTimestamp => Operation::nanoseconds()?,

        PrintCharacter => {
            Operation::print_char(context.output, input)?;
            input
        }
        PrintNumber => {
            Operation::print_number(context.output, input)?;
            input
        }
        InputCharacter => Operation::input_char(context.input)?,
        InputNumber => Operation::input_number(context.input)?,

        IotaFromZero => {
            Operation::iota(memory.active_mut(), 0, input)?;
            input
        }
        IotaFromOne => {
            Operation::iota(memory.active_mut(), 1, input)?;
            input
        }
        LogicalAndStackPair => Operation::and_pair(memory.active())?,
        LogicalAndStackWhole => Operation::and_whole(memory.active())?,
        WriteStackToFile => {
            let path = context.resolve(cell::stack_file_name(input));
            let text = cell::encode(context.memory.active().as_slice());
            std::fs::write(&path, text)?;
            debug!("wrote stack to {}", path.display());
            input
        }
        ReadStackFromFile => {
            let path = context.resolve(cell::stack_file_name(input));
            let cells = cell::decode(&std::fs::read(&path)?);
            context.memory.active_mut().replace(cells)?;
            debug!("read stack from {}", path.display());
            input
        }
        DeleteFile => {
            let path = context.resolve(cell::stack_file_name(input));
            std::fs::remove_file(&path)?;
            input
        }
        ClearStack => {
            memory.active_mut().clear();
            input
        }
        ResetState => {
            memory.reset();
            0
        }
        PushStack => {
            memory.active_mut().push(input)?;
            input
        }
        CountStack => memory.active().len() as Cell,
        PopStackLast => memory.active_mut().pop()?,
        PopStackRandom => Operation::pop_random(memory.active_mut())?,
        UseStackZero => {
            memory.select(0)?;
            input
        }
        UseStackOne => {
            memory.select(1)?;
            input
        }
        UseStackSwapped => {
            memory.toggle();
            input
        }
        HashStackOneByte => Operation::hash_byte(memory.active()),
        HashStackEightByte => Operation::hash(memory.active()),
        SortStackAscending => {
            memory.active_mut().sort_ascending();
            input
        }
        SortStackDescending => {
            memory.active_mut().sort_descending();
            input
        }
        ShuffleStack => {
            Operation::shuffle(memory.active_mut());
            input
        }
        SwapStackTop => {
            memory.active_mut().swap_top()?;
            input
        }
        ReverseStack => {
            memory.active_mut().reverse();
            input
        }

        Invert => Cell::from(input == 0),
        Complement => !input,
        Plaintext => include(data, context, input)?,
        ChangeDir => {
            let dir = context.resolve(path_from(data)?);
            debug!("working directory now {}", dir.display());
            context.working_dir = dir;
            input
        }
        _ => return Err(error!(SyntaxError; "UNRECOGNIZED LEXEME")),
    };
    Ok(output)
}

#[cfg(unix)]
fn path_from(data: &[u8]) -> Result<&Path> {
    use std::os::unix::ffi::OsStrExt;
    Ok(Path::new(std::ffi::OsStr::from_bytes(data)))
}

#[cfg(not(unix))]
fn path_from(data: &[u8]) -> Result<&Path> {
    match std::str::from_utf8(data) {
        Ok(path) => Ok(Path::new(path)),
        Err(_) => Err(error!(BadInput; "INVALID PATH")),
    }
}

/// Runs a source file as a sub-program, or pushes any other file's text
/// so that its first character ends on top.
fn include(data: &[u8], context: &mut Context, input: Cell) -> Result<Cell> {
    if data.is_empty() {
        return Ok(input);
    }
    let path = context.resolve(path_from(data)?);
    let content = std::fs::read(&path)?;
    let is_source = path
        .extension()
        .map_or(false, |ext| ext == SOURCE_EXTENSION);
    if !is_source {
        let stack = context.memory.active_mut();
        stack.extend(cell::decode(&content).into_iter().rev())?;
        return Ok(input);
    }
    let dir = match path.parent() {
        Some(dir) => dir.to_path_buf(),
        None => context.working_dir.clone(),
    };
    debug!("entering {}", path.display());
    let mut nested = context.nested(dir);
    let output = runtime::run(&content, &mut nested, input)?;
    debug!("leaving {} with {}", path.display(), output);
    Ok(output)
}
