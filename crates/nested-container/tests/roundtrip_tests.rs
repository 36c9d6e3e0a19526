use nested_container::{
    deserialize, serialize, try_deserialize, GenerationStrategy, ParsePolicy, Serializer, Value,
};

/// Assert that text → value → text reproduces the input, for every strategy.
fn assert_text_roundtrip(text: &str) {
    let value = try_deserialize(text).expect("parse failed");
    for strategy in GenerationStrategy::ALL {
        let out = Serializer::new()
            .with_strategy(strategy)
            .serialize(&value)
            .expect("generation failed");
        assert_eq!(
            out, text,
            "Roundtrip failed with {strategy:?}:\n  input:  {text}\n  output: {out}"
        );
    }
}

/// Assert that value → text → value reproduces the tree.
fn assert_value_roundtrip(value: &Value) {
    let text = serialize(value);
    let back = try_deserialize(&text).expect("parse failed");
    assert_eq!(&back, value, "Roundtrip failed through {text}");
}

// ============================================================================
// Text Roundtrips
// ============================================================================

#[test]
fn roundtrip_mixed_object() {
    assert_text_roundtrip(r#"{"a":1,"b":[1,2.5,"yeah"],"c":null}"#);
}

#[test]
fn roundtrip_empty_object() {
    assert_text_roundtrip("{}");
}

#[test]
fn roundtrip_empty_array() {
    assert_text_roundtrip("[]");
}

#[test]
fn roundtrip_nested_arrays() {
    assert_text_roundtrip("[[],[[1]],[{},-3]]");
}

#[test]
fn roundtrip_literals() {
    assert_text_roundtrip("[true,false,null]");
}

#[test]
fn roundtrip_negative_and_unsigned() {
    assert_text_roundtrip("[-9223372036854775808,18446744073709551615,0,-1]");
}

#[test]
fn roundtrip_strings_with_space_and_slash() {
    assert_text_roundtrip(r#"{"path":"a/b c","x":" "}"#);
}

#[test]
fn roundtrip_sorted_keys() {
    assert_text_roundtrip(r#"{"A":1,"B":2,"a":3,"b":{"Z":[]}}"#);
}

// ============================================================================
// Normalizing Roundtrips
// ============================================================================

#[test]
fn whitespace_is_dropped() {
    let value = deserialize(" { \"b\" : [ 1 , 2 ] ,\n\"a\" : true } ");
    assert_eq!(serialize(&value), r#"{"a":true,"b":[1,2]}"#);
}

#[test]
fn keys_are_reordered() {
    let value = deserialize(r#"{"b":1,"a":2}"#);
    assert_eq!(serialize(&value), r#"{"a":2,"b":1}"#);
}

#[test]
fn float_spellings_normalize() {
    let value = deserialize("[1.50,.5,5.,1.5e3,+2.0]");
    assert_eq!(serialize(&value), "[1.5,0.5,5.0,1500.0,2.0]");
}

#[test]
fn plus_sign_integer_normalizes() {
    assert_eq!(serialize(&deserialize("[+7]")), "[7]");
}

#[test]
fn escapes_are_resolved_on_input() {
    let value = deserialize(r#"["\x41\x42"]"#);
    assert_eq!(serialize(&value), r#"["AB"]"#);
}

// ============================================================================
// Value Roundtrips
// ============================================================================

#[test]
fn roundtrip_built_document() {
    let mut doc = Value::default();
    doc["name"] = "Roger".into();
    doc["attributes"]["weight"] = 95u64.into();
    doc["attributes"]["list"][2] = "yeah".into();
    doc["attributes"]["list"][0] = (-1).into();
    doc["ratio"] = 0.75.into();
    assert_value_roundtrip(&doc);
}

#[test]
fn roundtrip_whole_float_stays_float() {
    let v = Value::from_elements([2.0, -0.0, 1e15]);
    let back = deserialize(&serialize(&v));
    assert!(back[0].is_float());
    assert_value_roundtrip(&v);
}

#[test]
fn roundtrip_float_precision() {
    assert_value_roundtrip(&Value::from_elements([0.1, 1.0 / 3.0, f64::MAX, f64::MIN_POSITIVE]));
}

#[test]
fn non_negative_integer_comes_back_unsigned() {
    let v = Value::from_elements([5i64]);
    let back = deserialize(&serialize(&v));
    assert_eq!(back[0], Value::UnsignedInteger(5));
}

#[test]
fn scalar_root_does_not_parse_back() {
    let text = serialize(&Value::from(1u64));
    assert_eq!(text, "1");
    assert!(deserialize(&text).is_null());
}

#[test]
fn escaping_characters_do_not_parse_back() {
    let v = Value::from_elements(["quote \" inside"]);
    let strict = Serializer::new().with_policy(ParsePolicy::Strict);
    assert!(strict.deserialize(&serialize(&v)).is_err());
}
