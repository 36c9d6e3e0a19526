//! Parsing JSON text into values: accepted grammar, failures and limits.

use nested_container::{
    deserialize, try_deserialize, ContainerError, Kind, ParseLimits, ParsePolicy, Serializer,
    Value,
};

/// Parse under the strict policy, panicking with the position on failure.
fn parse_ok(text: &str) -> Value {
    match try_deserialize(text) {
        Ok(v) => v,
        Err(e) => panic!("failed to parse {text:?}: {e}"),
    }
}

/// Expect a strict parse failure and return its (line, column).
fn parse_err(text: &str) -> (usize, usize) {
    match try_deserialize(text) {
        Err(ContainerError::Parse { line, column, .. }) => (line, column),
        other => panic!("expected a parse error for {text:?}, got {other:?}"),
    }
}

// ============================================================================
// Documents
// ============================================================================

#[test]
fn mixed_document() {
    let v = parse_ok(r#"{"a":1,"b":[1,2.5,"yeah"],"c":null}"#);
    assert_eq!(v["a"], Value::UnsignedInteger(1));
    assert_eq!(v["b"][0], Value::UnsignedInteger(1));
    assert_eq!(v["b"][1], Value::Float(2.5));
    assert_eq!(v["b"][2], Value::from("yeah"));
    assert!(v["c"].is_null());
}

#[test]
fn document_with_spacing() {
    let text = r#"{"test1":1, "test2":1.1, "test3":["test1","test2",1.1,2,-4], "test4":true, "test5":null, "test6":{}}"#;
    let v = parse_ok(text);
    assert_eq!(v.ref_map().unwrap().len(), 6);
    assert_eq!(v["test2"], Value::Float(1.1));
    assert_eq!(v["test3"][4], Value::Integer(-4));
    assert_eq!(v["test3"][3], Value::UnsignedInteger(2));
    assert_eq!(v["test4"], Value::Boolean(true));
    assert_eq!(v["test6"], Value::Map(Default::default()));
}

#[test]
fn empty_collections() {
    assert_eq!(parse_ok("{}"), Value::init(Kind::Map));
    assert_eq!(parse_ok("[]"), Value::init(Kind::Sequence));
    assert_eq!(parse_ok(" [ ] "), Value::init(Kind::Sequence));
}

#[test]
fn nested_collections_in_arrays() {
    let v = parse_ok(r#"[[1,[2]],{"k":[{}]}]"#);
    assert_eq!(v[0][1][0], Value::UnsignedInteger(2));
    assert!(v[1]["k"][0].is_map());
}

#[test]
fn whitespace_between_tokens() {
    let v = parse_ok("\r\n{ \"a\" :\t[ 1 ,\x0b2\x0c] }\n");
    assert_eq!(v["a"], Value::from_elements([1u64, 2]));
}

#[test]
fn scalar_root_is_rejected() {
    assert_eq!(parse_err("1"), (1, 1));
    assert_eq!(parse_err("\"text\""), (1, 1));
    assert_eq!(parse_err("  null"), (1, 3));
    parse_err("");
}

#[test]
fn trailing_input_is_rejected() {
    assert_eq!(parse_err("{} x"), (1, 4));
    assert_eq!(parse_err("[][]"), (1, 3));
    parse_ok("{}   \n");
}

#[test]
fn duplicate_keys_keep_first() {
    let v = parse_ok(r#"{"a":1,"a":2}"#);
    assert_eq!(v["a"], Value::UnsignedInteger(1));
}

// ============================================================================
// Numbers
// ============================================================================

#[test]
fn number_kinds() {
    let v = parse_ok("[12,-12,+12,12.0,.5,5.,-0.25,1.5e3,0]");
    let kinds: Vec<Kind> = v.ref_sequence().unwrap().iter().map(Value::kind).collect();
    assert_eq!(
        kinds,
        [
            Kind::UnsignedInteger,
            Kind::Integer,
            Kind::Integer,
            Kind::Float,
            Kind::Float,
            Kind::Float,
            Kind::Float,
            Kind::Float,
            Kind::UnsignedInteger,
        ]
    );
    assert_eq!(v[2], Value::Integer(12));
    assert_eq!(v[4], Value::Float(0.5));
    assert_eq!(v[7], Value::Float(1500.0));
}

#[test]
fn integer_extremes() {
    let v = parse_ok("[18446744073709551615,-9223372036854775808]");
    assert_eq!(v[0], Value::UnsignedInteger(u64::MAX));
    assert_eq!(v[1], Value::Integer(i64::MIN));
}

#[test]
fn out_of_range_integer_is_rejected() {
    parse_err("[18446744073709551616]");
    parse_err("[-9223372036854775809]");
}

#[test]
fn exponent_without_dot_is_rejected() {
    parse_err("[1e5]");
}

// ============================================================================
// Literals
// ============================================================================

#[test]
fn literals() {
    let v = parse_ok("[true,false,null]");
    assert_eq!(
        v,
        Value::from_elements([Value::Boolean(true), Value::Boolean(false), Value::Null])
    );
}

#[test]
fn misspelled_literal_is_rejected() {
    assert_eq!(parse_err("[nul]"), (1, 2));
    parse_err("[True]");
    parse_err("[truex]");
}

// ============================================================================
// Strings and keys
// ============================================================================

#[test]
fn string_keeps_inner_spaces_and_slashes() {
    let v = parse_ok(r#"[" a b ","x/y"]"#);
    assert_eq!(v[0], Value::from(" a b "));
    assert_eq!(v[1], Value::from("x/y"));
}

#[test]
fn string_escape_table() {
    let v = parse_ok(r#"["\a\b\f\n\r\t\v\\\'\""]"#);
    assert_eq!(v[0], Value::from("\x07\x08\x0c\n\r\t\x0b\\'\""));
}

#[test]
fn hex_escapes() {
    let v = parse_ok(r#"["\x41\x4a","\x7","\xe9","\x410"]"#);
    assert_eq!(v[0], Value::from("AJ"));
    assert_eq!(v[1], Value::from("\x07"));
    assert_eq!(v[2], Value::from("\u{e9}"));
    assert_eq!(v[3], Value::from("A0"));
}

#[test]
fn bad_escapes_are_rejected() {
    parse_err(r#"["\q"]"#);
    parse_err(r#"["\xg"]"#);
    parse_err(r#"["\"#);
}

#[test]
fn unsupported_string_characters_are_rejected() {
    parse_err(r#"["a-b"]"#);
    parse_err("[\"tab\there\"]");
    parse_err("[\"caf\u{e9}\"]");
    parse_err(r#"["open"#);
}

#[test]
fn keys_are_alphanumeric() {
    let v = parse_ok(r#"{"abc123":1,"":2}"#);
    assert_eq!(v["abc123"], Value::UnsignedInteger(1));
    assert_eq!(v[""], Value::UnsignedInteger(2));

    assert_eq!(parse_err(r#"{"a b":1}"#), (1, 4));
    parse_err(r#"{"a\n":1}"#);
    parse_err(r#"{"a_b":1}"#);
    parse_err("{a:1}");
}

// ============================================================================
// Structure errors
// ============================================================================

#[test]
fn structural_errors() {
    parse_err(r#"{"a" 1}"#);
    parse_err(r#"{"a":1,}"#);
    parse_err("[1,]");
    parse_err("[1 2]");
    parse_err("[1");
    parse_err(r#"{"a":1"#);
}

#[test]
fn error_position_is_line_and_column() {
    let text = "{\"a\":1,\n \"b\":x}";
    assert_eq!(parse_err(text), (2, 6));
}

#[test]
fn error_message_is_displayed() {
    let err = try_deserialize("[1,]").unwrap_err();
    assert_eq!(err.to_string(), "parse error at line 1, column 4: expected a value");
}

// ============================================================================
// Policies
// ============================================================================

#[test]
fn lenient_free_function_yields_null() {
    assert!(deserialize("not json").is_null());
    assert!(deserialize(r#"{"a":}"#).is_null());
    assert_eq!(deserialize("[1]"), Value::from_elements([1u64]));
}

#[test]
fn serializer_policies() {
    let lenient = Serializer::new();
    assert_eq!(lenient.policy(), ParsePolicy::Lenient);
    assert_eq!(lenient.deserialize("[").unwrap(), Value::Null);

    let strict = Serializer::new().with_policy(ParsePolicy::Strict);
    assert!(matches!(
        strict.deserialize("["),
        Err(ContainerError::Parse { .. })
    ));
    assert_eq!(strict.deserialize("[true]").unwrap(), Value::from_elements([true]));
}

#[test]
fn from_str_is_strict() {
    let v: Value = r#"{"k":"v"}"#.parse().unwrap();
    assert_eq!(v["k"], Value::from("v"));
    assert!("oops".parse::<Value>().is_err());
}

// ============================================================================
// Limits
// ============================================================================

#[test]
fn depth_limit() {
    let strict = Serializer::new()
        .with_policy(ParsePolicy::Strict)
        .with_limits(ParseLimits::new(2, None));
    assert!(strict.deserialize("[[1]]").is_ok());
    assert!(strict.deserialize(r#"{"a":{"b":1}}"#).is_ok());
    let err = strict.deserialize("[[[1]]]").unwrap_err();
    assert_eq!(
        err,
        ContainerError::Parse {
            line: 1,
            column: 4,
            message: "nesting deeper than 2 levels".into(),
        }
    );
}

#[test]
fn default_depth_limit_stops_runaway_nesting() {
    let deep = "[".repeat(10_000);
    assert!(try_deserialize(&deep).is_err());
    assert_eq!(ParseLimits::default().max_depth, 256);

    let ok = format!("{}{}", "[".repeat(256), "]".repeat(256));
    assert!(try_deserialize(&ok).is_ok());
    let too_deep = format!("{}{}", "[".repeat(257), "]".repeat(257));
    assert!(try_deserialize(&too_deep).is_err());
}

#[test]
fn input_length_limit() {
    let strict = Serializer::new()
        .with_policy(ParsePolicy::Strict)
        .with_limits(ParseLimits::new(8, Some(4)));
    assert!(strict.deserialize("[1]").is_ok());
    assert!(strict.deserialize("[12]").is_ok());
    assert!(matches!(
        strict.deserialize("[123]"),
        Err(ContainerError::Parse { line: 1, column: 1, .. })
    ));
}

#[test]
fn unbounded_limits() {
    let serializer = Serializer::new()
        .with_policy(ParsePolicy::Strict)
        .with_limits(ParseLimits::unbounded());
    let text = format!("{}{}", "[".repeat(300), "]".repeat(300));
    assert!(serializer.deserialize(&text).is_ok());
}
