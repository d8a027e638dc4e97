//! Unit tests for the Value enum

use core_values::{FunctionKind, Value};

#[cfg(test)]
mod value_creation_tests {
    use super::*;

    #[test]
    fn test_value_undefined() {
        let val = Value::undefined();
        assert!(val.is_undefined());
        assert!(!val.is_null());
    }

    #[test]
    fn test_value_null() {
        let val = Value::null();
        assert!(val.is_null());
        assert_eq!(val.type_of(), "object");
    }

    #[test]
    fn test_value_boolean() {
        assert_eq!(Value::boolean(true).as_boolean(), Some(true));
        assert_eq!(Value::boolean(false).as_boolean(), Some(false));
    }

    #[test]
    fn test_value_number() {
        let val = Value::number(3.25);
        assert!(val.is_number());
        assert_eq!(val.as_number(), Some(3.25));
    }

    #[test]
    fn test_value_string() {
        let val = Value::string("hello");
        assert!(val.is_string());
        assert_eq!(val.as_string().as_deref(), Some("hello"));
    }

    #[test]
    fn test_value_bigint() {
        let val = Value::bigint(99);
        assert!(val.is_bigint());
        assert_eq!(val.type_of(), "bigint");
    }

    #[test]
    fn test_value_array() {
        let val = Value::array_from(vec![Value::number(1.0), Value::number(2.0)]);
        assert!(val.is_object());
        assert_eq!(val.array_length(), Some(2));
        assert_eq!(val.class_tag().as_deref(), Some("Array"));
    }

    #[test]
    fn test_value_map_and_set() {
        let map = Value::map_from(vec![(Value::string("k"), Value::number(1.0))]);
        assert_eq!(map.map_size(), 1);
        assert!(map.has_map_payload());

        let set = Value::set_from(vec![Value::number(1.0)]);
        assert_eq!(set.set_size(), 1);
        assert!(set.has_set_payload());
    }

    #[test]
    fn test_value_buffer() {
        let buf = Value::buffer(vec![1, 2, 3]);
        assert!(buf.has_bytes_payload());
        assert_eq!(buf.sequence_length(), Some(3));
        // Buffers advertise a byte-array class tag
        assert_eq!(buf.class_tag().as_deref(), Some("Uint8Array"));
    }

    #[test]
    fn test_value_tagged() {
        let date = Value::tagged("Date");
        assert_eq!(date.class_tag().as_deref(), Some("Date"));
        assert!(!date.is_callable());
    }
}

#[cfg(test)]
mod value_behavior_tests {
    use super::*;

    #[test]
    fn test_truthiness_table() {
        assert!(!Value::undefined().is_truthy());
        assert!(!Value::null().is_truthy());
        assert!(!Value::number(-0.0).is_truthy());
        assert!(!Value::string("").is_truthy());
        assert!(Value::string(" ").is_truthy());
        assert!(Value::array().is_truthy());
        assert!(Value::bigint(1).is_truthy());
    }

    #[test]
    fn test_typeof_function() {
        let f = Value::function(FunctionKind::Normal, |_, _| Ok(Value::undefined()));
        assert_eq!(f.type_of(), "function");
        assert!(f.is_callable());
        assert_eq!(f.function_kind(), Some(FunctionKind::Normal));
    }

    #[test]
    fn test_typeof_generator_function() {
        let f = Value::function(FunctionKind::Generator, |_, _| Ok(Value::undefined()));
        assert_eq!(f.function_kind(), Some(FunctionKind::Generator));
    }

    #[test]
    fn test_object_identity() {
        let a = Value::object();
        let b = a.clone();
        assert!(a.ptr_eq(&b));
        assert!(!a.ptr_eq(&Value::object()));
        assert!(!Value::number(1.0).ptr_eq(&Value::number(1.0)));
    }

    #[test]
    fn test_display_number_edge_cases() {
        assert_eq!(Value::number(f64::INFINITY).to_string(), "Infinity");
        assert_eq!(Value::number(f64::NEG_INFINITY).to_string(), "-Infinity");
        assert_eq!(Value::number(1.5).to_string(), "1.5");
        assert_eq!(Value::number(-7.0).to_string(), "-7");
    }

    #[test]
    fn test_display_array_join() {
        let arr = Value::array_from(vec![Value::number(1.0), Value::string("x")]);
        assert_eq!(arr.to_string(), "1,x");
    }

    #[test]
    fn test_string_tag_override() {
        let obj = Value::object();
        assert!(obj.to_string_tag().is_none());
        obj.set_to_string_tag("Custom");
        assert_eq!(obj.to_string_tag().as_deref(), Some("Custom"));
    }
}
