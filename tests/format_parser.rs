//! Table-driven tests of the format parser against locale-shaped registries.
//!
//! Two registries are built the way a generator would expose them: a base
//! table shared by every locale, and a French table layered on top of it.

use approx::assert_relative_eq;
use faker_format::{
    ErrorKind, Format, FormatError, FormatParser, Literal, MethodArity, StaticRegistry,
};
use rstest::{fixture, rstest};

fn base_registry() -> StaticRegistry {
    StaticRegistry::new()
        .properties(["name", "address", "firstName", "firstNameMale", "lastName"])
        .method("name", MethodArity::range(0, 1))
        .method("firstName", MethodArity::range(0, 1))
        .method("numberBetween", MethodArity::range(0, 2))
        .method("randomFloat", MethodArity::range(0, 3))
        .method("randomElements", MethodArity::range(0, 3))
        .method("randomDigit", MethodArity::exact(0))
        .method("shuffle", MethodArity::at_least(0))
}

fn en_us_registry() -> StaticRegistry {
    base_registry().extend(StaticRegistry::new().properties(["state", "stateAbbr"]))
}

fn fr_fr_registry() -> StaticRegistry {
    base_registry().extend(StaticRegistry::new().properties([
        "region",
        "department",
        "departmentName",
    ]))
}

#[fixture]
fn parser() -> FormatParser<StaticRegistry> {
    FormatParser::with_registry(en_us_registry())
}

fn s(text: &str) -> Literal {
    Literal::String(text.to_string())
}

fn assert_property(format: &Format, name: &str) {
    assert_eq!(format.name(), name, "invalid format name");
    assert!(format.is_property(), "format not marked as a property");
    assert!(format.arguments().is_empty(), "property has arguments");
}

#[rstest]
#[case("name")]
#[case("address")]
#[case("firstName")]
#[case("firstNameMale")]
#[case("state")]
#[case("stateAbbr")]
fn test_parse_properties(parser: FormatParser<StaticRegistry>, #[case] expression: &str) {
    let format = parser.parse(expression).unwrap();
    assert_property(&format, expression);
}

#[rstest]
#[case("name")]
#[case("address")]
#[case("firstName")]
#[case("firstNameMale")]
#[case("region")]
#[case("department")]
#[case("departmentName")]
fn test_parse_french_properties(#[case] expression: &str) {
    let parser = FormatParser::with_registry(fr_fr_registry());
    let format = parser.parse(expression).unwrap();
    assert_property(&format, expression);
}

#[rstest]
#[case("name()", "name", vec![s("")])]
#[case("name('male')", "name", vec![s("male")])]
#[case("numberBetween(0)", "numberBetween", vec![Literal::Integer(0)])]
#[case(
    "numberBetween(0,10)",
    "numberBetween",
    vec![Literal::Integer(0), Literal::Integer(10)]
)]
#[case(
    "randomElements(['a', 'b', 'c'], 1, false)",
    "randomElements",
    vec![
        Literal::List(vec![s("a"), s("b"), s("c")]),
        Literal::Integer(1),
        Literal::Boolean(false),
    ]
)]
#[case("randomDigit()", "randomDigit", vec![s("")])]
#[case(
    "shuffle([[1, 2], [3]], \"x, y\", male)",
    "shuffle",
    vec![
        Literal::List(vec![
            Literal::List(vec![Literal::Integer(1), Literal::Integer(2)]),
            Literal::List(vec![Literal::Integer(3)]),
        ]),
        s("x, y"),
        s("male"),
    ]
)]
fn test_parse_methods(
    parser: FormatParser<StaticRegistry>,
    #[case] expression: &str,
    #[case] expected_name: &str,
    #[case] expected_args: Vec<Literal>,
) {
    let format = parser.parse(expression).unwrap();
    assert_eq!(format.name(), expected_name);
    assert!(!format.is_property(), "format marked as a property");
    assert_eq!(format.arguments().len(), expected_args.len());
    assert_eq!(format.arguments(), expected_args.as_slice());
}

#[rstest]
fn test_parse_float_arguments(parser: FormatParser<StaticRegistry>) {
    let format = parser.parse("randomFloat(2, -1.5, 10.25)").unwrap();
    let args = format.arguments();
    assert_eq!(args[0], Literal::Integer(2));
    assert_relative_eq!(args[1].as_float().unwrap(), -1.5);
    assert_relative_eq!(args[2].as_float().unwrap(), 10.25);
}

#[rstest]
// Unknown properties
#[case("unknownName", ErrorKind::UnknownCapability)]
#[case("first name", ErrorKind::Syntax)]
// fr_FR only properties
#[case("region", ErrorKind::UnknownCapability)]
#[case("department", ErrorKind::UnknownCapability)]
#[case("departmentName", ErrorKind::UnknownCapability)]
// Invalid method calls
#[case("name(", ErrorKind::Syntax)]
#[case("unknownMethod(0)", ErrorKind::UnknownCapability)]
#[case("numberBetween(0,10,12)", ErrorKind::UnknownCapability)]
#[case("randomDigit(1, 2)", ErrorKind::UnknownCapability)]
// Malformed text
#[case("name)", ErrorKind::Syntax)]
#[case("name())", ErrorKind::Syntax)]
#[case("name(1) ", ErrorKind::Syntax)]
#[case("numberBetween(0, 'ten)", ErrorKind::Syntax)]
#[case("randomElements(['a', 'b', 1)", ErrorKind::Syntax)]
#[case("randomElements('a'], 1)", ErrorKind::Syntax)]
#[case("", ErrorKind::Syntax)]
fn test_parse_rejections(
    parser: FormatParser<StaticRegistry>,
    #[case] expression: &str,
    #[case] kind: ErrorKind,
) {
    let err = parser.parse(expression).unwrap_err();
    assert_eq!(err.kind(), kind, "unexpected error for '{}': {}", expression, err);
}

#[test]
fn test_parse_before_load_is_usage_error() {
    let parser: FormatParser<StaticRegistry> = FormatParser::new();
    assert_eq!(parser.parse("name").unwrap_err(), FormatError::NotLoaded);
}

#[rstest]
fn test_parse_is_idempotent(parser: FormatParser<StaticRegistry>) {
    let expression = "randomElements(['a', 'b', 'c'], 1, false)";
    assert_eq!(
        parser.parse(expression).unwrap(),
        parser.parse(expression).unwrap()
    );
}

#[rstest]
#[case("name")]
#[case("name()")]
#[case("numberBetween(0, 10)")]
#[case("randomElements(['a', 'b', 'c'], 1, false)")]
#[case("randomFloat(2, 0.5, 10.0)")]
fn test_display_reparses(parser: FormatParser<StaticRegistry>, #[case] expression: &str) {
    let format = parser.parse(expression).unwrap();
    assert_eq!(format.to_string(), expression);
    assert_eq!(parser.parse(&format.to_string()).unwrap(), format);
}

#[test]
fn test_parse_from_many_threads() {
    let parser = FormatParser::with_registry(fr_fr_registry());
    std::thread::scope(|scope| {
        for _ in 0..4 {
            scope.spawn(|| {
                for _ in 0..100 {
                    assert!(parser.parse("departmentName").is_ok());
                    assert!(parser.parse("numberBetween(1, 6)").is_ok());
                    assert!(parser.parse("stateAbbr").is_err());
                }
            });
        }
    });
}

#[cfg(feature = "serde")]
#[rstest]
fn test_serialize_format(parser: FormatParser<StaticRegistry>) {
    let format = parser.parse("randomElements(['a'], 1, false)").unwrap();
    let json = serde_json::to_string(&format).unwrap();
    assert_eq!(
        json,
        r#"{"name":"randomElements","is_property":false,"arguments":[["a"],1,false]}"#
    );
    let back: Format = serde_json::from_str(&json).unwrap();
    assert_eq!(back, format);
}

#[cfg(feature = "serde")]
#[rstest]
#[case(r#"{"name":"name","is_property":true,"arguments":[1,2]}"#)]
#[case(r#"{"name":"first name","is_property":true,"arguments":[]}"#)]
#[case(r#"{"name":"name()","is_property":false,"arguments":[]}"#)]
fn test_deserialize_rejects_invalid_format(#[case] json: &str) {
    assert!(serde_json::from_str::<Format>(json).is_err());
}

#[cfg(feature = "serde")]
#[test]
fn test_deserialize_property_without_arguments() {
    let format: Format = serde_json::from_str(r#"{"name":"region","is_property":true}"#).unwrap();
    assert_property(&format, "region");
}
