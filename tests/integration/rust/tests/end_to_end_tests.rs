//! End-to-End Scenario Tests
//!
//! Exercises the public surface the way a host embedding would: build a
//! realistic value graph, validate it field by field, and check that the
//! failures a sloppy caller would hit produce the documented errors.

use core_values::{FunctionKind, Prototype, SymbolValue, Value};
use inspect::{detect, is, InspectError, TypeName};

/// Build a config-shaped object a host might hand to a library
fn config_fixture() -> Value {
    let config = Value::object();
    config.set("name", Value::string("worker-pool"));
    config.set("size", Value::number(8.0));
    config.set("endpoint", Value::string("https://queue.internal:4222"));
    config.set(
        "tags",
        Value::array_from(vec![Value::string("jobs"), Value::string("batch")]),
    );
    config.set(
        "on_error",
        Value::function(FunctionKind::Normal, |_, _| Ok(Value::undefined())),
    );
    config
}

/// Test: field-by-field validation of a structured object
#[test]
fn test_config_validation_scenario() {
    let config = config_fixture();
    assert!(is::plain_object(&config));
    assert!(is::non_empty_object(&config));

    let name = config.get("name").expect("name is set");
    assert!(is::non_empty_string_and_not_whitespace(&name));

    let size = config.get("size").expect("size is set");
    assert!(is::safe_integer(&size));
    assert_eq!(is::in_range(&size, &[1.0, 64.0]), Ok(true));

    let endpoint = config.get("endpoint").expect("endpoint is set");
    assert!(is::url_string(&endpoint));

    let tags = config.get("tags").expect("tags is set");
    assert!(is::non_empty_array(&tags));
    assert_eq!(inspect::all(is::string, &tags.array_elements().expect("array")), Ok(true));

    let on_error = config.get("on_error").expect("on_error is set");
    assert!(is::function(&on_error));
}

/// Test: guard clauses produce caller-facing error text
#[test]
fn test_guard_clause_scenario() {
    let bad_size = Value::string("eight");
    let err = inspect::assert::safe_integer(&bad_size, None).expect_err("guard fails");
    assert_eq!(
        err.message(),
        "Expected value which is `integer`, received value of type `string`."
    );

    let err = inspect::assert::safe_integer(&bad_size, Some("size must be a whole number"))
        .expect_err("guard fails");
    assert_eq!(err.message(), "size must be a whole number");
}

/// Test: a pair-shaped entry list validates with positional guards
#[test]
fn test_tuple_validation_scenario() {
    let entries = Value::array_from(vec![
        Value::array_from(vec![Value::string("retries"), Value::number(3.0)]),
        Value::array_from(vec![Value::string("verbose"), Value::boolean(true)]),
    ]);
    for entry in entries.array_elements().expect("array") {
        assert!(is::tuple_like(&entry, &[is::string, is::truthy]));
    }
}

/// Test: enum-style membership checks
#[test]
fn test_enum_membership_scenario() {
    let log_levels = Value::object();
    log_levels.set("DEBUG", Value::string("debug"));
    log_levels.set("INFO", Value::string("info"));
    log_levels.set("ERROR", Value::string("error"));

    assert!(is::enum_case(&Value::string("info"), &log_levels));
    let err = inspect::assert::enum_case(&Value::string("trace"), &log_levels, None)
        .expect_err("unknown level");
    assert!(matches!(err, InspectError::Type(_)));
}

/// Test: exact-class checks distinguish sibling classes
#[test]
fn test_instance_check_scenario() {
    let make_class = || {
        let class = Value::function(FunctionKind::Normal, |_, _| Ok(Value::undefined()));
        class.set("prototype", Value::object());
        class
    };
    let reader = make_class();
    let writer = make_class();

    let instance = Value::object();
    let proto = reader
        .get_own("prototype")
        .and_then(|p| p.as_object().cloned())
        .expect("reader has a prototype object");
    instance.set_prototype(Prototype::Object(proto));

    assert!(is::direct_instance_of(&instance, &reader));
    assert!(!is::direct_instance_of(&instance, &writer));
}

/// Test: classification drives dispatch over heterogeneous input
#[test]
fn test_dispatch_scenario() {
    let inputs = [
        Value::string("text"),
        Value::number(1.5),
        Value::array(),
        Value::map(),
        Value::tagged("Date"),
        Value::object(),
    ];
    let mut seen = Vec::new();
    for input in &inputs {
        let name = detect(input).expect("ordinary values classify");
        seen.push(name);
    }
    assert_eq!(
        seen,
        vec![
            TypeName::String,
            TypeName::Number,
            TypeName::Array,
            TypeName::Map,
            TypeName::Date,
            TypeName::Object,
        ]
    );
}

/// Test: observables and streams coming from foreign code are told apart
#[test]
fn test_foreign_shapes_scenario() {
    let subscribe = Value::function(FunctionKind::Normal, |this, _| Ok(this.clone()));
    let observable = Value::object();
    observable.set_symbol(&SymbolValue::observable(), subscribe);

    let stream = Value::object();
    stream.set(
        "pipe",
        Value::function(FunctionKind::Normal, |_, _| Ok(Value::undefined())),
    );

    assert!(is::observable(&observable));
    assert!(!is::node_stream(&observable));
    assert!(is::node_stream(&stream));
    assert!(!is::observable(&stream));
    assert_eq!(detect(&observable), Ok(TypeName::Observable));
    assert_eq!(detect(&stream), Ok(TypeName::Object));
}
