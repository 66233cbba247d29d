mod common;
use common::*;
use dork::lang::{embed_file, ErrorCode, Lexeme, Token, Tree};
use dork::mach::{evaluate, interpret_file, interpret_with, Context, Options};

#[test]
fn test_stack_file_round_trip() {
    let scratch = Scratch::new();
    let source = "~''+: +: +: ~' . || , %++";
    assert_eq!(run_in(scratch.path(), source).unwrap(), 198);
    assert_eq!(scratch.read("8.dorkstack"), "ABC");
}

#[test]
fn test_stack_file_replaces_stack() {
    let scratch = Scratch::new();
    scratch.write("3.dorkstack", "\u{e9}\u{1F600}");
    assert_eq!(run_in(scratch.path(), "~+: +: +, %:").unwrap(), 2);
    assert_eq!(run_in(scratch.path(), "~+ + +, ;").unwrap(), 0x1F600);
    assert_eq!(run_in(scratch.path(), "~+ + +, ; ;").unwrap(), 0xE9);
}

#[test]
fn test_stack_file_outside_unicode() {
    let scratch = Scratch::new();
    let source = "~%': ~: ~' . || , ; ;";
    assert_eq!(run_in(scratch.path(), source).unwrap(), 0xFFFD);
    assert_eq!(scratch.read("8.dorkstack"), "\u{FFFD}\u{0}");
}

#[test]
fn test_delete_stack_file() {
    let scratch = Scratch::new();
    assert_eq!(run_in(scratch.path(), "~+: ' .").unwrap(), 8);
    assert!(scratch.join("8.dorkstack").exists());
    assert_eq!(run_in(scratch.path(), "' |").unwrap(), 8);
    assert!(!scratch.join("8.dorkstack").exists());
    assert_eq!(code(run_in(scratch.path(), "' |")), ErrorCode::FileNotFound);
    assert_eq!(code(run_in(scratch.path(), "' ,")), ErrorCode::FileNotFound);
}

#[test]
fn test_include_program() {
    let scratch = Scratch::new();
    scratch.write("sub/lib.dork", "++");
    assert_eq!(run_in(scratch.path(), "'{{sub/lib.dork}}").unwrap(), 16);
    assert_eq!(run_in(scratch.path(), "'{{sub/lib.dork sub/lib.dork}}").unwrap(), 24);
}

#[test]
fn test_include_runs_in_its_directory() {
    let scratch = Scratch::new();
    scratch.write("sub/lib.dork", "~+: ~' .");
    assert_eq!(run_in(scratch.path(), "{{sub/lib.dork}} +").unwrap(), 9);
    assert!(scratch.join("sub/8.dorkstack").exists());
    assert!(!scratch.join("8.dorkstack").exists());
    assert_eq!(run_in(scratch.path(), "' . {{sub/lib.dork}}").unwrap(), 8);
    assert!(scratch.join("8.dorkstack").exists());
}

#[test]
fn test_include_text() {
    let scratch = Scratch::new();
    scratch.write("t.txt", "hi");
    assert_eq!(run_in(scratch.path(), "{{t.txt}};").unwrap(), 104);
    assert_eq!(run_in(scratch.path(), "{{t.txt}} %:").unwrap(), 2);
    assert_eq!(run_in(scratch.path(), "{{t.txt}} ; ;").unwrap(), 105);
}

#[test]
fn test_nested_stacks_are_copies() {
    let scratch = Scratch::new();
    scratch.write("push.dork", "'':");
    scratch.write("pop.dork", ";");
    assert_eq!(run_in(scratch.path(), "{{push.dork}} %:").unwrap(), 0);
    assert_eq!(run_in(scratch.path(), "~':{{pop.dork}} ~ ;").unwrap(), 8);
    assert_eq!(run_in(scratch.path(), "~':{{pop.dork}}").unwrap(), 8);
}

#[test]
fn test_nested_error_aborts() {
    let scratch = Scratch::new();
    scratch.write("bad.dork", ";");
    scratch.write("broken.dork", "(");
    assert_eq!(
        code(run_in(scratch.path(), "{{bad.dork}} +")),
        ErrorCode::StackUnderflow
    );
    assert_eq!(
        code(run_in(scratch.path(), "{{broken.dork}}")),
        ErrorCode::UnclosedSection
    );
    assert_eq!(
        code(run_in(scratch.path(), "{{missing.dork}}")),
        ErrorCode::FileNotFound
    );
}

#[test]
fn test_nested_output_shares_stream() {
    let scratch = Scratch::new();
    scratch.write("say.dork", "!");
    let options = Options::new().working_dir(scratch.path());
    let (_, output) = exec("''+{{say.dork}}+!", options, "").unwrap();
    assert_eq!(output, "AB");
}

#[test]
fn test_embedded_file() {
    let scratch = Scratch::new();
    let lib = scratch.write("sub/lib.dork", "~+: ~' . ++");
    let token = embed_file(&lib, scratch.path()).unwrap();
    assert_eq!(token.lexeme, Lexeme::Embedded);
    let tokens = vec![Token::new(Lexeme::StartProgram), token, Token::new(Lexeme::EndProgram)];
    let tree = Tree::build(&tokens).unwrap();

    let mut input: &[u8] = b"";
    let mut output: Vec<u8> = vec![];
    let options = Options::new().working_dir(scratch.path());
    let mut context = Context::new(options, &mut input, &mut output);
    assert_eq!(evaluate(&tree, &mut context, 0).unwrap(), 16);
    assert_eq!(context.working_dir, scratch.path());
    assert!(scratch.join("sub/8.dorkstack").exists());
}

#[test]
fn test_interpret_file() {
    let scratch = Scratch::new();
    scratch.write("lib.dork", "''");
    let main = scratch.write("main.dork", "{{lib.dork}} +");
    assert_eq!(interpret_file(&main, Options::new()).unwrap(), 65);
    let options = Options::new().working_dir(scratch.path());
    assert_eq!(interpret_file("main.dork", options).unwrap(), 65);
    assert_eq!(
        code(interpret_file(scratch.join("none.dork"), Options::new())),
        ErrorCode::FileNotFound
    );
}

#[test]
fn test_relative_paths_use_working_dir() {
    let first = Scratch::new();
    let second = Scratch::new();
    first.write("n.dork", "'");
    second.write("n.dork", "''");
    let mut input: &[u8] = b"";
    let mut output: Vec<u8> = vec![];
    let a = interpret_with(
        b"{{n.dork}}",
        Options::new().working_dir(first.path()),
        &mut input,
        &mut output,
    );
    let b = interpret_with(
        b"{{n.dork}}",
        Options::new().working_dir(second.path()),
        &mut input,
        &mut output,
    );
    assert_eq!((a.unwrap(), b.unwrap()), (8, 64));
}

#[cfg(unix)]
#[test]
fn test_include_raw_byte_path() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    let scratch = Scratch::new();
    scratch.write(OsStr::from_bytes(b"f\xff.txt"), "hi");
    let mut input: &[u8] = b"";
    let mut output: Vec<u8> = vec![];
    let options = Options::new().working_dir(scratch.path());
    let value = interpret_with(b"{{f\xff.txt}} %:", options, &mut input, &mut output);
    assert_eq!(value.unwrap(), 2);
    let options = Options::new().working_dir(scratch.path());
    let value = interpret_with(b"{{f\xfe.txt}}", options, &mut input, &mut output);
    assert_eq!(code(value), ErrorCode::FileNotFound);
}
