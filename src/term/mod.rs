extern crate ansi_term;
use crate::lang::Error;
use crate::mach::{interpret_file, Cell, Options};
use ansi_term::Style;
use std::path::PathBuf;

const USAGE: &str = "usage: dork [--skip-clean] [--skip-exit-status] [--debug] FILE";

/// Highest accumulator value passed through as the exit status.
const MAX_EXIT_STATUS: Cell = 124;
const CLAMPED_EXIT_STATUS: i32 = 125;
const FAILED_EXIT_STATUS: i32 = 126;

struct Args {
    path: PathBuf,
    options: Options,
    skip_exit_status: bool,
}

pub fn main() {
    let args = match parse_args(std::env::args().skip(1)) {
        Some(args) => args,
        None => {
            eprintln!("{}", USAGE);
            std::process::exit(FAILED_EXIT_STATUS);
        }
    };
    match interpret_file(&args.path, args.options) {
        Ok(value) => {
            if !args.skip_exit_status {
                std::process::exit(exit_status(value));
            }
        }
        Err(error) => {
            report(&error);
            std::process::exit(FAILED_EXIT_STATUS);
        }
    }
}

fn parse_args<I: Iterator<Item = String>>(args: I) -> Option<Args> {
    let mut path = None;
    let mut options = Options::new();
    let mut skip_exit_status = false;
    for arg in args {
        match arg.as_str() {
            "--skip-clean" => options = options.skip_clean(true),
            "--skip-exit-status" => skip_exit_status = true,
            "--debug" => options = options.debug(true),
            _ if arg.starts_with("--") => return None,
            _ if path.is_none() => path = Some(PathBuf::from(arg)),
            _ => return None,
        }
    }
    Some(Args {
        path: path?,
        options,
        skip_exit_status,
    })
}

fn exit_status(value: Cell) -> i32 {
    if value <= MAX_EXIT_STATUS {
        value as i32
    } else {
        CLAMPED_EXIT_STATUS
    }
}

fn report(error: &Error) {
    eprintln!("{}", Style::new().bold().paint(error.to_string()));
}
