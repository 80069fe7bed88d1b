// Author: Dustin Pilgrim
// License: MIT

#[cfg(test)]
use super::*;
use crate::error::ParseErrorKind;
use rstest::rstest;

fn segments(input: &str) -> Vec<Segment> {
    Path::parse(input)
        .expect("path should parse")
        .expect("path should not be empty")
        .iter()
        .cloned()
        .collect()
}

#[test]
fn test_empty_path_addresses_root() {
    let path = Path::parse("").expect("empty path is not an error");
    assert!(path.is_none());
}

#[test]
fn test_string_token() {
    assert_eq!(segments("a"), vec![Segment::Key("a".into())]);
    assert_eq!(segments("aleph"), vec![Segment::Key("aleph".into())]);

    let path = Path::parse("aleph").unwrap().unwrap();
    assert!(path.next().is_none());
    assert_eq!(path.segment().as_key(), Some("aleph"));
    assert_eq!(path.segment().as_index(), None);
}

#[test]
fn test_int_token() {
    assert_eq!(segments("[0]"), vec![Segment::Index(0)]);
    assert_eq!(segments("[321]"), vec![Segment::Index(321)]);

    let path = Path::parse("[321]").unwrap().unwrap();
    assert!(path.next().is_none());
    assert_eq!(path.segment().as_index(), Some(321));
}

#[test]
fn test_token_chain() {
    let expected = vec![
        Segment::Index(0),
        Segment::Key("_one".into()),
        Segment::Key("a".into()),
        Segment::Index(3),
        Segment::Index(43),
        Segment::Key("four".into()),
    ];
    assert_eq!(segments("[0]._one.a[3][43].four"), expected);

    let path = Path::parse("[0]._one.a[3][43].four").unwrap().unwrap();
    assert_eq!(path.len(), 6);
    assert_eq!(path.next().map(Path::segment), Some(&Segment::Key("_one".into())));
}

#[test]
fn test_key_directly_after_index() {
    assert_eq!(
        segments("[3]x"),
        vec![Segment::Index(3), Segment::Key("x".into())]
    );
}

#[rstest]
#[case("one")]
#[case("[42]")]
#[case("one.two")]
#[case("one[2]")]
#[case("[0]._one.a[3][43].four")]
#[case("a[1][2][3].b_2.C")]
fn test_canonical_round_trip(#[case] input: &str) {
    let path = Path::parse(input).unwrap().unwrap();
    assert_eq!(path.to_string(), input);
    assert_eq!(Path::parse(&path.to_string()).unwrap().unwrap(), path);
}

#[test]
fn test_round_trip_drops_redundant_delimiter() {
    let path = Path::parse("one.[2]").unwrap().unwrap();
    assert_eq!(path.to_string(), "one[2]");
}

#[test]
fn test_trailing_delimiter_is_consumed() {
    assert_eq!(segments("one."), vec![Segment::Key("one".into())]);
    assert_eq!(segments("[1]."), vec![Segment::Index(1)]);
    assert_eq!(
        segments("a[2]."),
        vec![Segment::Key("a".into()), Segment::Index(2)]
    );
    assert_eq!(Path::parse("one.").unwrap().unwrap().to_string(), "one");
}

#[test]
fn test_long_path_parse_clone_and_drop() {
    let input = vec!["a"; 200_000].join(".");
    let path = Path::parse(&input).unwrap().unwrap();
    assert_eq!(path.len(), 200_000);

    let copy = path.clone();
    assert_eq!(copy, path);
    assert_eq!(copy.to_string(), input);
    drop(copy);
    drop(path);
}

#[test]
fn test_long_path_error_stack() {
    let input = format!("{}..b", vec!["[7]"; 100_000].concat());
    let err = Path::parse(&input).unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptyToken);
    assert_eq!(err.stack().len(), 100_000);
    assert_eq!(err.stack()[0], "[7]");
}

#[rstest]
#[case("[", ParseErrorKind::UnbalancedBrackets)]
#[case("one[12.two", ParseErrorKind::UnbalancedBrackets)]
#[case("one[].two", ParseErrorKind::BadIntegerToken)]
#[case("[007]", ParseErrorKind::BadIntegerToken)]
#[case("[-1]", ParseErrorKind::BadIntegerToken)]
#[case("[0x10]", ParseErrorKind::BadIntegerToken)]
#[case("[99999999999999999999999999]", ParseErrorKind::BadIntegerToken)]
#[case(".two", ParseErrorKind::EmptyToken)]
#[case("one..two", ParseErrorKind::EmptyToken)]
#[case("1abc", ParseErrorKind::BadStringToken)]
#[case("one.t-wo", ParseErrorKind::BadStringToken)]
#[case("a b", ParseErrorKind::BadStringToken)]
fn test_parse_errors(#[case] input: &str, #[case] kind: ParseErrorKind) {
    let err = Path::parse(input).unwrap_err();
    println!("{}", err);
    assert_eq!(err.kind, kind, "input {:?}", input);
    assert_eq!(err.code, Some(kind.code()));
}

#[test]
fn test_error_stack_most_recent_first() {
    let err = Path::parse("alpha[2].beta..gamma").unwrap_err();
    assert_eq!(err.kind, ParseErrorKind::EmptyToken);
    assert_eq!(err.stack(), &["beta", "[2]", "alpha"]);
}

#[test]
fn test_error_stack_empty_on_first_token() {
    let err = Path::parse("[").unwrap_err();
    assert!(err.stack().is_empty());
}

#[test]
fn test_error_display_lists_stack_in_parse_order() {
    let err = Path::parse("one.two[3three").unwrap_err();
    let rendered = err.to_string();
    assert!(rendered.contains("Unbalanced brackets."));
    assert!(rendered.contains("stack: \"one\" \"two\""), "{}", rendered);
    assert!(rendered.contains("Code: 104"));
}
