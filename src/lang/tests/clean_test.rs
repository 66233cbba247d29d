use super::*;
use Lexeme::*;

#[test]
fn test_unit_runs() {
    assert_eq!(cleaned("+ + + + + + + +"), vec![AddEight]);
    assert_eq!(cleaned("- - - - - - - - -"), vec![SubtractEight, SubtractOne]);
    assert_eq!(cleaned("* * *"), vec![MultiplyEight]);
    assert_eq!(cleaned("/ / /"), vec![DivideEight]);
    assert_eq!(cleaned("* *"), vec![MultiplyTwo, MultiplyTwo]);
}

#[test]
fn test_zero_then_eight() {
    assert_eq!(cleaned("~++"), vec![SetOneByte]);
    assert_eq!(cleaned("~ + + + + + + + +"), vec![SetOneByte]);
    assert_eq!(cleaned("~++++++++"), vec![SetOneByte, AddEight, AddEight, AddEight]);
}

#[test]
fn test_invert() {
    assert_eq!(cleaned("\\ \\ \\"), vec![Invert]);
    assert_eq!(cleaned("\\ \\"), vec![Invert, Invert]);
}

#[test]
fn test_logical_and() {
    assert_eq!(cleaned("& &"), vec![LogicalAndStackPair]);
    assert_eq!(cleaned("& &&"), vec![LogicalAndStackWhole]);
    assert_eq!(cleaned("&& &&"), vec![LogicalAndStackWhole]);
    assert_eq!(cleaned("&& &"), vec![LogicalAndStackWhole, LogicalAndStackPair]);
}

#[test]
fn test_ordering() {
    assert_eq!(cleaned("s r"), vec![SortStackDescending]);
    assert_eq!(cleaned("r r"), vec![]);
    assert_eq!(cleaned("r r r"), vec![ReverseStack]);
    assert_eq!(cleaned("%s s"), vec![SortStackAscending]);
    assert_eq!(cleaned("r ss"), vec![SortStackDescending]);
    assert_eq!(cleaned("s : s"), vec![SortStackAscending, PushStack, SortStackAscending]);
}

#[test]
fn test_sections_untouched() {
    assert_eq!(
        cleaned("(+ + + + + + + +)"),
        vec![StartAdditionSection, AddEight, EndAdditionSection]
    );
    assert_eq!(cleaned("{ + }"), vec![StartCommentSection, EndCommentSection]);
}

#[test]
fn test_idempotent() {
    for source in &[
        "~ + + + + + + + + + + + + + + + +",
        "s r r s %s ss r",
        "\\ \\ \\ \\ \\ \\ \\",
        "& & && & &&",
        "* * * * * * / / / / ~ ++ ++",
        "(+ + +)[- - -]<<+>>",
    ] {
        let mut once = lex(source.as_bytes()).unwrap();
        clean(&mut once);
        let mut twice = once.clone();
        clean(&mut twice);
        assert_eq!(once, twice, "{}", source);
    }
}
