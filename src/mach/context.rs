use super::{Cell, Memory};
use std::io::{BufRead, Write};
use std::path::{Path, PathBuf};

/// ## Interpreter options
///
/// An empty `working_dir` means the process working directory.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Options {
    pub working_dir: PathBuf,
    pub skip_clean: bool,
    pub debug: bool,
    pub initial_value: Cell,
}

impl Options {
    pub fn new() -> Options {
        Options::default()
    }
    pub fn working_dir<P: Into<PathBuf>>(mut self, dir: P) -> Options {
        self.working_dir = dir.into();
        self
    }
    pub fn skip_clean(mut self, skip_clean: bool) -> Options {
        self.skip_clean = skip_clean;
        self
    }
    pub fn debug(mut self, debug: bool) -> Options {
        self.debug = debug;
        self
    }
    pub fn initial_value(mut self, value: Cell) -> Options {
        self.initial_value = value;
        self
    }
}

/// ## Interpreter context
///
/// Everything a running program can touch besides the accumulator,
/// which is threaded through evaluation by value.

pub struct Context<'a> {
    pub options: Options,
    pub working_dir: PathBuf,
    pub memory: Memory,
    pub input: &'a mut dyn BufRead,
    pub output: &'a mut dyn Write,
    /// Receives the token listing when `options.debug` is set.
    pub trace: Box<dyn Write + 'a>,
}

impl<'a> Context<'a> {
    pub fn new(
        options: Options,
        input: &'a mut dyn BufRead,
        output: &'a mut dyn Write,
    ) -> Context<'a> {
        Context {
            working_dir: options.working_dir.clone(),
            options,
            memory: Memory::default(),
            input,
            output,
            trace: Box::new(std::io::stderr()),
        }
    }

    pub fn trace_to(mut self, trace: &'a mut dyn Write) -> Context<'a> {
        self.trace = Box::new(trace);
        self
    }

    /// A context for a sub-program running in `working_dir`. The streams
    /// are shared; the stacks are copied, so changes made by the
    /// sub-program are not seen by this context.
    pub fn nested<'b>(&'b mut self, working_dir: PathBuf) -> Context<'b> {
        Context {
            options: self.options.clone(),
            working_dir,
            memory: self.memory.clone(),
            input: &mut *self.input,
            output: &mut *self.output,
            trace: Box::new(&mut self.trace),
        }
    }

    /// `path` relative to the context's working directory.
    pub fn resolve<P: AsRef<Path>>(&self, path: P) -> PathBuf {
        self.working_dir.join(path)
    }
}

/// ## Working directory scope
///
/// Restores the context's working directory when dropped, whether the
/// scoped evaluation succeeded or not.

pub struct DirScope<'s, 'a> {
    context: &'s mut Context<'a>,
    saved: PathBuf,
}

impl<'s, 'a> DirScope<'s, 'a> {
    pub fn enter(context: &'s mut Context<'a>) -> DirScope<'s, 'a> {
        let saved = context.working_dir.clone();
        DirScope { context, saved }
    }
}

impl<'s, 'a> Drop for DirScope<'s, 'a> {
    fn drop(&mut self) {
        self.context.working_dir = std::mem::take(&mut self.saved);
    }
}

impl<'s, 'a> std::ops::Deref for DirScope<'s, 'a> {
    type Target = Context<'a>;
    fn deref(&self) -> &Context<'a> {
        self.context
    }
}

impl<'s, 'a> std::ops::DerefMut for DirScope<'s, 'a> {
    fn deref_mut(&mut self) -> &mut Context<'a> {
        self.context
    }
}
