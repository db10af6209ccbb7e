use sqsutil::{OptionMap, parse, to_option_string};
use test_log::test;

fn map(entries: &[(&str, &str)]) -> OptionMap {
    entries
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

#[test]
fn parse_documented_examples() {
    assert_eq!(parse(""), OptionMap::new());
    assert_eq!(parse("foo=bar"), map(&[("foo", "bar")]));
    assert_eq!(
        parse("foo=bar,bar=foo,hello=world"),
        map(&[("foo", "bar"), ("bar", "foo"), ("hello", "world")])
    );
    assert_eq!(parse("a=1,a=2"), map(&[("a", "2")]));
    assert_eq!(parse("novalue"), map(&[("novalue", "")]));
}

#[test]
fn parse_strips_value_quotes() {
    assert_eq!(
        parse("k=\"quoted value\""),
        map(&[("k", "quoted value")])
    );
    assert_eq!(parse("k=`raw \\n`"), map(&[("k", "raw \\n")]));
    assert_eq!(parse("k='x'"), map(&[("k", "x")]));
    assert_eq!(parse(r#"k="line\nbreak""#), map(&[("k", "line\nbreak")]));
}

#[test]
fn parse_strips_whole_string_quotes() {
    assert_eq!(parse("\"k=v\""), map(&[("k", "v")]));
    assert_eq!(
        parse(r#""a=1,b=\"two\"""#),
        map(&[("a", "1"), ("b", "two")])
    );
}

#[test]
fn parse_keeps_malformed_quotes_literally() {
    // Unbalanced quotes on the value are kept as-is.
    assert_eq!(parse("k=\"open"), map(&[("k", "\"open")]));
    // Multi-character single quotes are not a valid literal.
    assert_eq!(parse("k='abc'"), map(&[("k", "'abc'")]));
    // Unknown escapes fall back to the raw text.
    assert_eq!(parse(r#"k="\q""#), map(&[("k", r#""\q""#)]));
    // Whole-string quoting that does not unquote cleanly is ignored.
    assert_eq!(
        parse(r#""a=1","b=2""#),
        map(&[("\"a", "1\""), ("\"b", "2\"")])
    );
}

#[test]
fn parse_quoted_value_with_comma_is_split_first() {
    let options = parse("k=\"a,b\"");
    assert_eq!(options, map(&[("k", "\"a"), ("b\"", "")]));
}

#[test]
fn parse_trailing_and_leading_commas_yield_empty_entry() {
    assert_eq!(parse("a=b,"), map(&[("a", "b"), ("", "")]));
    assert_eq!(parse(",,"), map(&[("", "")]));
}

#[test]
fn parse_empty_value_and_empty_key() {
    assert_eq!(parse("k="), map(&[("k", "")]));
    assert_eq!(parse("=v"), map(&[("", "v")]));
    assert_eq!(parse("k=\"\""), map(&[("k", "")]));
}

#[test]
fn parse_unicode() {
    assert_eq!(
        parse("städte=\"Zürich\",emoji=🚀"),
        map(&[("städte", "Zürich"), ("emoji", "🚀")])
    );
}

#[test]
fn reparse_of_canonical_form_is_stable() {
    let inputs = [
        "foo=bar,bar=foo,hello=world",
        "a=1,a=2",
        "novalue",
        "k=\"quoted value\"",
        "\"k=v\"",
        "a=b,",
        r#"path="C:\\temp",quote="say \"hi\"""#,
        "tab=\"a\tb\",bell=\"\\a\"",
    ];
    for input in inputs {
        let parsed = parse(input);
        let canonical = to_option_string(&parsed);
        assert_eq!(parse(&canonical), parsed, "input: {input}, canonical: {canonical}");
    }
}
