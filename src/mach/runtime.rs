use super::{evaluate, Cell, Context, Options};
use crate::lang::{clean, lex, Error, Tree};
use log::{debug, trace};
use std::io::{BufRead, Write};
use std::path::Path;

type Result<T> = std::result::Result<T, Error>;

/// Lexes, cleans, builds, and evaluates `source` in an existing context.
pub fn run(source: &[u8], context: &mut Context, initial: Cell) -> Result<Cell> {
    let mut tokens = lex(source)?;
    debug!("lexed {} tokens", tokens.len());
    if !context.options.skip_clean {
        clean(&mut tokens);
    }
    if context.options.debug {
        write!(context.trace, "{}", tokens)?;
    } else {
        trace!("tokens:\n{}", tokens);
    }
    let tree = Tree::build(&tokens)?;
    debug!("built tree of {} nodes", tree.len());
    evaluate(&tree, context, initial)
}

/// Runs `source` with stdin and stdout attached.
pub fn interpret(source: &[u8], options: Options) -> Result<Cell> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    let mut input = stdin.lock();
    let mut output = stdout.lock();
    interpret_with(source, options, &mut input, &mut output)
}

pub fn interpret_with(
    source: &[u8],
    options: Options,
    input: &mut dyn BufRead,
    output: &mut dyn Write,
) -> Result<Cell> {
    let initial = options.initial_value;
    let mut context = Context::new(options, input, output);
    let result = run(source, &mut context, initial);
    let flushed = context.output.flush();
    let value = result?;
    flushed?;
    debug!("program finished with {}", value);
    Ok(value)
}

/// Runs the program in `path` with its own directory as working directory.
pub fn interpret_file<P: AsRef<Path>>(path: P, options: Options) -> Result<Cell> {
    let path = options.working_dir.join(path);
    let source = std::fs::read(&path)?;
    let dir = match path.parent() {
        Some(dir) => dir.to_path_buf(),
        None => options.working_dir.clone(),
    };
    interpret(&source, options.working_dir(dir))
}
