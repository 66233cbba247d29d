//! # dork
//!
//! Runs a dork program and exits with its final accumulator.
//!

fn main() {
    dork::term::main()
}
