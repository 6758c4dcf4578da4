use rstest::rstest;

use crate::error::ErrorKind;
use crate::factory::{SetError, ValueFactory};
use crate::parser::{parse, parse_with};

#[rstest]
#[case(b"{a:1", "Missing closing brace")]
#[case(b"{", "Missing closing brace")]
#[case(b"{a:1,", "Missing closing brace")]
#[case(b"[1,2", "Missing closing bracket")]
#[case(b"[", "Missing closing bracket")]
#[case(b"[1,", "Missing closing bracket")]
fn unterminated_containers(#[case] input: &[u8], #[case] message: &'static str) {
    assert_eq!(parse(input).unwrap_err().kind, ErrorKind::Syntax(message));
}

#[rstest]
#[case(b"{a 1}", "Unexpected token")]
#[case(b"{a}", "Unexpected token")]
#[case(b"{'k' 1}", "Unexpected token")]
#[case(b"{a:1 b:2}", "Invalid format in object")]
#[case(b"{a:1]", "Invalid format in object")]
#[case(b"[1 2]", "Invalid format in array: missed comma")]
#[case(b"[1;2]", "Invalid format in array: missed comma")]
#[case(b"12 34", "Invalid format")]
#[case(b"{}{}", "Invalid format")]
fn separator_errors(#[case] input: &[u8], #[case] message: &'static str) {
    assert_eq!(parse(input).unwrap_err().kind, ErrorKind::Syntax(message));
}

#[test]
fn bad_keys() {
    assert_eq!(
        parse(b"{:1}").unwrap_err().kind,
        ErrorKind::Syntax("Unexpected identifier")
    );
    // A sign with no digits is an empty numeric key.
    assert_eq!(
        parse(b"{-:1}").unwrap_err().kind,
        ErrorKind::Syntax("Invalid format")
    );
}

#[test]
fn bad_value_inside_containers() {
    assert_eq!(parse(b"{a:@}").unwrap_err().kind, ErrorKind::InvalidType);
    assert_eq!(parse(b"[@]").unwrap_err().kind, ErrorKind::InvalidType);
    assert_eq!(parse(b"{a:}").unwrap_err().kind, ErrorKind::InvalidType);
}

#[test]
fn nested_errors_propagate() {
    let err = parse(b"[[1,[012]]]").unwrap_err();
    assert_eq!(err.kind, ErrorKind::Syntax("Use new octal literal syntax"));
    assert_eq!(err.offset, 5);
}

/// Factory whose objects refuse every property.
struct Sealed;

impl ValueFactory for Sealed {
    type Value = ();
    type Array = ();
    type Object = ();

    fn undefined(&self) {}
    fn null(&self) {}
    fn bool(&self, _: bool) {}
    fn int(&self, _: i32) {}
    fn number(&self, _: f64) {}
    fn string(&self, _: &[u8]) {}
    fn array_new(&self) {}
    fn array_push(&self, _: &mut (), _: ()) {}
    fn array_build(&self, _: ()) {}
    fn object_new(&self) {}
    fn object_set(&self, _: &mut (), _: &[u8], _: ()) -> Result<(), SetError> {
        Err(SetError)
    }
    fn object_build(&self, _: ()) {}
}

#[test]
fn rejected_property_set_surfaces() {
    let err = parse_with(b"{a:1}", &Sealed).unwrap_err();
    assert_eq!(err.kind, ErrorKind::PropertySet);
}
