#![allow(dead_code)]

use dork::lang::{Error, ErrorCode};
use dork::mach::{interpret_with, Cell, Options};
use std::path::{Path, PathBuf};

pub fn run(source: &str) -> Result<Cell, Error> {
    exec(source, Options::new(), "").map(|(value, _)| value)
}

pub fn run_in(dir: &Path, source: &str) -> Result<Cell, Error> {
    exec(source, Options::new().working_dir(dir), "").map(|(value, _)| value)
}

pub fn exec(source: &str, options: Options, input: &str) -> Result<(Cell, String), Error> {
    let mut input = input.as_bytes();
    let mut output: Vec<u8> = vec![];
    let value = interpret_with(source.as_bytes(), options, &mut input, &mut output)?;
    Ok((value, String::from_utf8_lossy(&output).into_owned()))
}

pub fn code<T: std::fmt::Debug>(result: Result<T, Error>) -> ErrorCode {
    match result {
        Ok(value) => panic!("expected an error, got {:?}", value),
        Err(error) => error.code(),
    }
}

/// A fresh directory under the system temp dir, removed on drop.
pub struct Scratch {
    dir: PathBuf,
}

impl Scratch {
    pub fn new() -> Scratch {
        let dir = std::env::temp_dir().join(format!("dork-{:016x}", rand::random::<u64>()));
        std::fs::create_dir_all(&dir).unwrap();
        Scratch { dir }
    }

    pub fn path(&self) -> &Path {
        &self.dir
    }

    pub fn join<P: AsRef<Path>>(&self, name: P) -> PathBuf {
        self.dir.join(name)
    }

    pub fn write<P: AsRef<Path>>(&self, name: P, contents: &str) -> PathBuf {
        let path = self.dir.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(&path, contents).unwrap();
        path
    }

    pub fn read(&self, name: &str) -> String {
        std::fs::read_to_string(self.dir.join(name)).unwrap()
    }
}

impl Drop for Scratch {
    fn drop(&mut self) {
        let _ = std::fs::remove_dir_all(&self.dir);
    }
}
