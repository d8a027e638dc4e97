//! Classification Pipeline Integration Tests
//!
//! Tests the complete flow: Value construction -> detect -> TypeName,
//! covering every reachable canonical name and the resolution priorities
//! between the tag, payload, and capability channels.

use core_values::{FunctionKind, SymbolValue, TypedArrayKind, Value};
use inspect::{detect, InspectError, TypeName, PRIMITIVE_TYPE_NAMES, TYPED_ARRAY_TYPE_NAMES};

/// Helper: build a value and assert its canonical name
fn expect_type(value: &Value, expected: TypeName) {
    match detect(value) {
        Ok(name) => assert_eq!(name, expected, "value classified as {}", name),
        Err(err) => panic!("classification failed: {}", err),
    }
}

/// Test: every primitive resolves before any object machinery runs
#[test]
fn test_primitive_channel() {
    expect_type(&Value::undefined(), TypeName::Undefined);
    expect_type(&Value::null(), TypeName::Null);
    expect_type(&Value::boolean(true), TypeName::Boolean);
    expect_type(&Value::number(3.25), TypeName::Number);
    expect_type(&Value::number(f64::NAN), TypeName::NaN);
    expect_type(&Value::string("hello"), TypeName::String);
    expect_type(&Value::symbol(SymbolValue::new(Some("tag".into()))), TypeName::Symbol);
    expect_type(&Value::bigint(1_000_000), TypeName::BigInt);
}

/// Test: the primitive name table matches what detect produces
#[test]
fn test_primitive_name_table_is_consistent() {
    let produced = [
        detect(&Value::null()),
        detect(&Value::undefined()),
        detect(&Value::string("")),
        detect(&Value::number(1.0)),
        detect(&Value::boolean(false)),
        detect(&Value::symbol(SymbolValue::new(None))),
        detect(&Value::bigint(0)),
        detect(&Value::number(f64::NAN)),
    ];
    for result in produced {
        let name = result.expect("primitives always classify");
        assert!(
            PRIMITIVE_TYPE_NAMES.contains(&name),
            "{} missing from the primitive table",
            name
        );
    }
    assert_eq!(PRIMITIVE_TYPE_NAMES.len(), 8);
}

/// Test: payload channel beats the tag channel
#[test]
fn test_payload_channel_priority() {
    // An array whose tag was overwritten still classifies as Array
    let arr = Value::array_from(vec![Value::number(1.0)]);
    expect_type(&arr, TypeName::Array);

    // Buffers carry a byte-array tag yet classify as Buffer
    let buf = Value::buffer(vec![0, 1, 2]);
    expect_type(&buf, TypeName::Buffer);
}

/// Test: capability channel beats both payload and tag channels
#[test]
fn test_capability_channel_priority() {
    let arr = Value::array();
    arr.set_symbol(
        &SymbolValue::observable(),
        Value::function(FunctionKind::Normal, |this, _| Ok(this.clone())),
    );
    expect_type(&arr, TypeName::Observable);

    // Callables outrank everything else on the object side
    let f = Value::function(FunctionKind::Generator, |_, _| Ok(Value::undefined()));
    expect_type(&f, TypeName::Function);
}

/// Test: the full recognized tag set resolves
#[test]
fn test_tag_channel() {
    let tagged = [
        ("Date", TypeName::Date),
        ("RegExp", TypeName::RegExp),
        ("Error", TypeName::Error),
        ("Promise", TypeName::Promise),
        ("Map", TypeName::Map),
        ("Set", TypeName::Set),
        ("WeakMap", TypeName::WeakMap),
        ("WeakSet", TypeName::WeakSet),
        ("WeakRef", TypeName::WeakRef),
        ("ArrayBuffer", TypeName::ArrayBuffer),
        ("SharedArrayBuffer", TypeName::SharedArrayBuffer),
        ("DataView", TypeName::DataView),
        ("URL", TypeName::Url),
        ("URLSearchParams", TypeName::UrlSearchParams),
        ("FormData", TypeName::FormData),
        ("Blob", TypeName::Blob),
    ];
    for (tag, expected) in tagged {
        expect_type(&Value::tagged(tag), expected);
    }
}

/// Test: all eleven typed array kinds round out the name table
#[test]
fn test_typed_array_channel() {
    assert_eq!(TYPED_ARRAY_TYPE_NAMES.len(), 11);
    for kind in TypedArrayKind::ALL {
        let ta = Value::typed_array(kind, vec![0; kind.bytes_per_element()]);
        let name = detect(&ta).expect("typed arrays classify");
        assert!(TYPED_ARRAY_TYPE_NAMES.contains(&name));
        assert_eq!(name.as_str(), kind.name());
    }
}

/// Test: classification is total over ordinary objects
#[test]
fn test_fallback_channel() {
    expect_type(&Value::object(), TypeName::Object);
    expect_type(&Value::null_proto_object(), TypeName::Object);
    expect_type(&Value::tagged("SomethingNovel"), TypeName::Object);
}

/// Test: the only refusal is the boxed wrapper rejection
#[test]
fn test_boxed_wrapper_rejection_is_the_only_failure() {
    for wrapper in [
        Value::boxed_string("s"),
        Value::boxed_number(1.0),
        Value::boxed_boolean(false),
    ] {
        match detect(&wrapper) {
            Err(InspectError::Type(message)) => assert_eq!(
                message,
                "Please don't use object wrappers for primitive types."
            ),
            other => panic!("expected a wrapper rejection, got {:?}", other),
        }
    }
}

/// Test: classification is deterministic across repeated calls
#[test]
fn test_detect_is_deterministic() {
    let values = [
        Value::number(2.0),
        Value::array(),
        Value::map(),
        Value::tagged("Date"),
        Value::object(),
    ];
    for value in &values {
        let first = detect(value);
        for _ in 0..3 {
            assert_eq!(detect(value), first);
        }
    }
}
