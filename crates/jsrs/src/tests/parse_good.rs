use super::object;
use crate::parser::parse;
use crate::value::Value;

#[test]
fn record_with_every_shape() {
    // Scenario: {a:1,b:'x\n',c:[1,2,,3]}
    let parsed = parse(b"{a:1,b:'x\\n',c:[1,2,,3]}").unwrap();
    assert_eq!(
        parsed,
        object([
            ("a", Value::Int(1)),
            ("b", Value::String("x\n".into())),
            (
                "c",
                Value::Array(vec![
                    Value::Int(1),
                    Value::Int(2),
                    Value::Undefined,
                    Value::Int(3),
                ])
            ),
        ])
    );
}

#[test]
fn empty_containers() {
    assert_eq!(parse(b"{}"), Ok(object([])));
    assert_eq!(parse(b"[]"), Ok(Value::Array(vec![])));
    assert_eq!(parse(b"{ /* nothing */ }"), Ok(object([])));
    assert_eq!(parse(b"[\t]"), Ok(Value::Array(vec![])));
}

#[test]
fn nested_structures() {
    let parsed = parse(b"{outer:{inner:[{deep:null}]}}").unwrap();
    assert_eq!(
        parsed,
        object([(
            "outer",
            object([("inner", Value::Array(vec![object([("deep", Value::Null)])]))])
        )])
    );
}

#[test]
fn trailing_commas() {
    assert_eq!(parse(b"{a:1,}"), Ok(object([("a", Value::Int(1))])));
    assert_eq!(parse(b"[1,]"), Ok(Value::Array(vec![Value::Int(1)])));
}

#[test]
fn elisions() {
    assert_eq!(
        parse(b"[,,5]"),
        Ok(Value::Array(vec![
            Value::Undefined,
            Value::Undefined,
            Value::Int(5),
        ]))
    );
    // A lone comma fills one slot; the closing bracket does not add one.
    assert_eq!(parse(b"[,]"), Ok(Value::Array(vec![Value::Undefined])));
    assert_eq!(
        parse(b"[undefined]"),
        Ok(Value::Array(vec![Value::Undefined]))
    );
}

#[test]
fn undefined_entries_are_dropped() {
    assert_eq!(
        parse(b"{a:undefined,b:1}"),
        Ok(object([("b", Value::Int(1))]))
    );
    assert_eq!(parse(b"{a:,b:2}"), Ok(object([("b", Value::Int(2))])));
    assert_eq!(parse(b"{a:undefined}"), Ok(object([])));
}

#[test]
fn key_forms() {
    assert_eq!(parse(b"{'k v':1}"), Ok(object([("k v", Value::Int(1))])));
    assert_eq!(parse(b"{\"k\":1}"), Ok(object([("k", Value::Int(1))])));
    assert_eq!(parse(b"{_a$1:1}"), Ok(object([("_a$1", Value::Int(1))])));
    // Numeric keys take their canonical decimal spelling.
    assert_eq!(parse(b"{1:1}"), Ok(object([("1", Value::Int(1))])));
    assert_eq!(parse(b"{1.5:1}"), Ok(object([("1.5", Value::Int(1))])));
    assert_eq!(parse(b"{0x10:1}"), Ok(object([("16", Value::Int(1))])));
}

#[test]
fn unicode_identifier_keys() {
    assert_eq!(
        parse("{café:1}".as_bytes()),
        Ok(object([("café", Value::Int(1))]))
    );
    // Escapes are allowed in identifiers and decode into the key.
    assert_eq!(
        parse(b"{\\u0061bc:1}"),
        Ok(object([("abc", Value::Int(1))]))
    );
    assert_eq!(
        parse(b"{a\\u{62}c:1}"),
        Ok(object([("abc", Value::Int(1))]))
    );
}

#[test]
fn insertion_order_is_preserved() {
    let Ok(Value::Object(map)) = parse(b"{z:1,a:2,m:3}") else {
        panic!("expected an object");
    };
    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, ["z", "a", "m"]);
}

#[test]
fn duplicate_keys_keep_the_last_value() {
    assert_eq!(parse(b"{a:1,a:2}"), Ok(object([("a", Value::Int(2))])));
}

#[test]
fn comments_between_any_tokens() {
    let plain = parse(b"{a:1,b:[2,3]}").unwrap();
    for input in [
        &b"{/*x*/a:1,b:[2,3]}"[..],
        b"{a/*x*/:1,b:[2,3]}",
        b"{a:/*x*/1,b:[2,3]}",
        b"{a:1/*x*/,b:[2,3]}",
        b"{a:1,/*x*/b:[2,3]}",
        b"{a:1,b:[/*x*/2,3]}",
        b"{a:1,b:[2/*x*/,3]}",
        b"{a:1,b:[2,3/*x*/]}",
        b"{a:1,b:[2,3]/*x*/}",
        b"// lead\n{a:1,b:[2,3]}",
        b"{a:1,b:[2,3]} // trail",
        b"{a:1,\n// note\nb:[2,3]}",
    ] {
        assert_eq!(parse(input).unwrap(), plain, "{:?}", input);
    }
}

#[test]
fn ecmascript_whitespace() {
    let input = "\u{FEFF}{a:\u{3000}1,\u{2028}b:\u{A0}2}\u{2029}".as_bytes();
    assert_eq!(
        parse(input),
        Ok(object([("a", Value::Int(1)), ("b", Value::Int(2))]))
    );
}

#[test]
fn iso_date_text_parses_as_string() {
    assert_eq!(
        parse(b"'2017-01-01T00:00:00.000Z'"),
        Ok(Value::String("2017-01-01T00:00:00.000Z".into()))
    );
}
